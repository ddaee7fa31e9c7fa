use crate::ui::state::AppState;
use crate::ui::widgets::DataSelector;

pub struct LeftPanel;

impl LeftPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        ui.heading("Results");
        ui.separator();

        // 1. Data Source
        ui.collapsing("Data Source", |ui| {
            DataSelector::show(ui, state);
        });

        ui.separator();

        // 2. Metric Directions
        ui.collapsing("Metric Directions", |ui| {
            Self::show_metric_directions(ui, state);
        });

        ui.separator();

        // 3. Status
        ui.label(&state.status_message);
    }

    fn show_metric_directions(ui: &mut egui::Ui, state: &AppState) {
        for metric in &state.metric_options {
            let direction = state.config.direction_for(metric);
            let unit = state
                .config
                .selector
                .definition(metric)
                .and_then(|d| d.unit.as_deref())
                .unwrap_or("");

            ui.horizontal(|ui| {
                ui.label(format!("{} {}", direction.arrow(), metric));
                if !unit.is_empty() {
                    ui.weak(format!("({})", unit));
                }
            });
        }
    }
}
