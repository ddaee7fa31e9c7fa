//! Controlled selector bar: one metric dropdown and two algorithm dropdowns.
//!
//! The bar owns nothing. Every frame the caller passes the option lists and the
//! currently selected values, and the bar reports back which value the user
//! picked, if any. Writing that value anywhere is the caller's business.

/// Text shown in a dropdown whose active value is not among its options.
pub const NO_SELECTION: &str = "(none)";

/// Which of the three dropdowns a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectorKind {
    Metric,
    BaseAlgo,
    CompareAlgo,
}

impl SelectorKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Metric => "Metric",
            Self::BaseAlgo => "Base",
            Self::CompareAlgo => "Compare",
        }
    }
}

/// Everything the bar needs to draw one frame, borrowed from the caller
#[derive(Debug, Clone, Copy)]
pub struct SelectorBarProps<'a> {
    pub metrics: &'a [String],
    pub active_metric: &'a str,
    pub algorithms: &'a [String],
    pub base_algo: &'a str,
    pub compare_algo: &'a str,
}

impl<'a> SelectorBarProps<'a> {
    /// The three dropdowns in display order: metric, base, compare.
    pub fn controls(&self) -> [SelectorControl<'a>; 3] {
        [
            self.control(SelectorKind::Metric),
            self.control(SelectorKind::BaseAlgo),
            self.control(SelectorKind::CompareAlgo),
        ]
    }

    pub fn control(&self, kind: SelectorKind) -> SelectorControl<'a> {
        let (options, current) = match kind {
            SelectorKind::Metric => (self.metrics, self.active_metric),
            SelectorKind::BaseAlgo => (self.algorithms, self.base_algo),
            SelectorKind::CompareAlgo => (self.algorithms, self.compare_algo),
        };
        SelectorControl::new(kind, options, current)
    }
}

/// Derived view of a single dropdown
#[derive(Debug, Clone, Copy)]
pub struct SelectorControl<'a> {
    pub kind: SelectorKind,
    pub options: &'a [String],
    pub current: &'a str,
    /// Index of `current` in `options`; `None` when it is not there.
    pub selected: Option<usize>,
}

impl<'a> SelectorControl<'a> {
    pub fn new(kind: SelectorKind, options: &'a [String], current: &'a str) -> Self {
        let selected = options.iter().position(|option| option == current);
        Self {
            kind,
            options,
            current,
            selected,
        }
    }

    pub fn selected_text(&self) -> &'a str {
        match self.selected {
            Some(idx) => self.options[idx].as_str(),
            None => NO_SELECTION,
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Change produced by choosing `options[index]`.
    ///
    /// Re-choosing the option that is already selected is not a change, and
    /// neither is an index past the end.
    pub fn pick(&self, index: usize) -> Option<SelectorChange> {
        let value = self.options.get(index)?;
        if self.is_selected(index) {
            return None;
        }
        Some(SelectorChange {
            kind: self.kind,
            value: value.clone(),
        })
    }
}

/// A value the user picked in one of the dropdowns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorChange {
    pub kind: SelectorKind,
    pub value: String,
}

impl SelectorChange {
    /// Forward the change to the one handler that matches its dropdown.
    pub fn dispatch<H: SelectorHandlers + ?Sized>(self, handlers: &mut H) {
        match self.kind {
            SelectorKind::Metric => handlers.on_metric_change(self.value),
            SelectorKind::BaseAlgo => handlers.on_base_algo_change(self.value),
            SelectorKind::CompareAlgo => handlers.on_compare_algo_change(self.value),
        }
    }
}

/// Receiver for selection events coming out of the bar
pub trait SelectorHandlers {
    fn on_metric_change(&mut self, value: String);
    fn on_base_algo_change(&mut self, value: String);
    fn on_compare_algo_change(&mut self, value: String);
}

/// Handlers built from three closures
pub struct SelectorCallbacks<M, B, C> {
    pub on_metric_change: M,
    pub on_base_algo_change: B,
    pub on_compare_algo_change: C,
}

impl<M, B, C> SelectorHandlers for SelectorCallbacks<M, B, C>
where
    M: FnMut(String),
    B: FnMut(String),
    C: FnMut(String),
{
    fn on_metric_change(&mut self, value: String) {
        (self.on_metric_change)(value)
    }

    fn on_base_algo_change(&mut self, value: String) {
        (self.on_base_algo_change)(value)
    }

    fn on_compare_algo_change(&mut self, value: String) {
        (self.on_compare_algo_change)(value)
    }
}

pub struct SelectorBar;

impl SelectorBar {
    /// Draw the bar and return the selection made this frame, if any.
    pub fn show(ui: &mut egui::Ui, props: &SelectorBarProps<'_>) -> Option<SelectorChange> {
        let mut change = None;

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                for control in props.controls() {
                    if let Some(picked) = Self::show_control(ui, &control) {
                        change = Some(picked);
                    }
                    ui.add_space(8.0);
                }
            });
        });

        change
    }

    /// Draw the bar and hand any selection straight to `handlers`.
    pub fn show_with<H: SelectorHandlers + ?Sized>(
        ui: &mut egui::Ui,
        props: &SelectorBarProps<'_>,
        handlers: &mut H,
    ) {
        if let Some(change) = Self::show(ui, props) {
            change.dispatch(handlers);
        }
    }

    fn show_control(ui: &mut egui::Ui, control: &SelectorControl<'_>) -> Option<SelectorChange> {
        let mut clicked = None;

        // The label doubles as the combo's accessible name
        egui::ComboBox::from_label(control.kind.label())
            .selected_text(control.selected_text())
            .show_ui(ui, |ui| {
                for (idx, option) in control.options.iter().enumerate() {
                    if ui
                        .selectable_label(control.is_selected(idx), option.as_str())
                        .clicked()
                    {
                        clicked = Some(idx);
                    }
                }
            });

        clicked.and_then(|idx| control.pick(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_control_marks_active_option() {
        let metrics = strings(&["latency", "throughput"]);
        let control = SelectorControl::new(SelectorKind::Metric, &metrics, "throughput");

        assert_eq!(control.selected, Some(1));
        assert_eq!(control.selected_text(), "throughput");
        assert!(control.is_selected(1));
        assert!(!control.is_selected(0));
    }

    #[test]
    fn test_control_without_match_selects_nothing() {
        let metrics = strings(&["latency", "throughput"]);
        let control = SelectorControl::new(SelectorKind::Metric, &metrics, "memory");

        assert_eq!(control.selected, None);
        assert_eq!(control.selected_text(), NO_SELECTION);
        // Any option is a change when nothing is selected
        assert_eq!(
            control.pick(0),
            Some(SelectorChange {
                kind: SelectorKind::Metric,
                value: "latency".to_string()
            })
        );
    }

    #[test]
    fn test_pick_same_or_out_of_range_is_no_change() {
        let algos = strings(&["A", "B"]);
        let control = SelectorControl::new(SelectorKind::BaseAlgo, &algos, "A");

        assert_eq!(control.pick(0), None);
        assert_eq!(control.pick(2), None);
    }

    #[test]
    fn test_empty_options() {
        let empty: Vec<String> = Vec::new();
        let control = SelectorControl::new(SelectorKind::CompareAlgo, &empty, "");

        assert_eq!(control.selected, None);
        assert_eq!(control.pick(0), None);
    }
}
