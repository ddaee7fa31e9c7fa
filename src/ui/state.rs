use crate::comparison::{Comparison, MetricDirection};
use crate::config::AppConfig;
use crate::data::BenchmarkSet;
use crate::error::Result;
use crate::ui::widgets::selector_bar::{SelectorBarProps, SelectorChange, SelectorHandlers};
use std::path::{Path, PathBuf};

/// Central application state for the UI
///
/// Owns the selection the selector bar displays; the bar only reports picks.
pub struct AppState {
    pub config: AppConfig,

    // Data
    pub dataset: Option<BenchmarkSet>,
    pub data_file_path: Option<PathBuf>,

    // Selector options and selection
    pub metric_options: Vec<String>,
    pub algo_options: Vec<String>,
    pub active_metric: String,
    pub base_algo: String,
    pub compare_algo: String,

    pub status_message: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let mut state = Self {
            metric_options: config.selector.metric_names(),
            algo_options: config.selector.algorithms.clone(),
            config,
            dataset: None,
            data_file_path: None,
            active_metric: String::new(),
            base_algo: String::new(),
            compare_algo: String::new(),
            status_message: "Ready".to_string(),
        };
        state.reconcile_selection();
        state
    }

    pub fn selector_props(&self) -> SelectorBarProps<'_> {
        SelectorBarProps {
            metrics: &self.metric_options,
            active_metric: &self.active_metric,
            algorithms: &self.algo_options,
            base_algo: &self.base_algo,
            compare_algo: &self.compare_algo,
        }
    }

    /// Write a pick from the selector bar into the selection.
    pub fn apply(&mut self, change: SelectorChange) {
        change.dispatch(self);
    }

    /// Swap in a freshly loaded result set and re-derive the options from it.
    pub fn set_dataset(&mut self, dataset: BenchmarkSet, path: Option<&Path>) {
        self.metric_options = dataset.metrics().to_vec();
        self.algo_options = dataset.algorithms().to_vec();
        self.dataset = Some(dataset);
        self.data_file_path = path.map(Path::to_path_buf);
        self.reconcile_selection();
    }

    /// Keep each selected value that is still an option, otherwise fall back
    /// to the configured default, then to a positional default.
    pub fn reconcile_selection(&mut self) {
        let selector = &self.config.selector;
        self.active_metric = reconcile(
            &self.active_metric,
            &self.metric_options,
            selector.default_metric.as_deref(),
            0,
        );
        self.base_algo = reconcile(
            &self.base_algo,
            &self.algo_options,
            selector.default_base.as_deref(),
            0,
        );
        self.compare_algo = reconcile(
            &self.compare_algo,
            &self.algo_options,
            selector.default_compare.as_deref(),
            1,
        );
    }

    pub fn active_direction(&self) -> MetricDirection {
        self.config.direction_for(&self.active_metric)
    }

    /// `None` until results are loaded.
    pub fn comparison(&self) -> Option<Result<Comparison>> {
        let dataset = self.dataset.as_ref()?;
        Some(Comparison::between(
            dataset,
            &self.active_metric,
            &self.base_algo,
            &self.compare_algo,
            self.active_direction(),
        ))
    }
}

fn reconcile(current: &str, options: &[String], preferred: Option<&str>, position: usize) -> String {
    if options.iter().any(|o| o == current) {
        return current.to_string();
    }
    if let Some(preferred) = preferred.filter(|p| options.iter().any(|o| o == p)) {
        return preferred.to_string();
    }
    options
        .get(position)
        .or_else(|| options.first())
        .cloned()
        .unwrap_or_default()
}

impl SelectorHandlers for AppState {
    fn on_metric_change(&mut self, value: String) {
        log::debug!("Metric changed: {} -> {}", self.active_metric, value);
        self.active_metric = value;
    }

    fn on_base_algo_change(&mut self, value: String) {
        log::debug!("Base algorithm changed: {} -> {}", self.base_algo, value);
        self.base_algo = value;
    }

    fn on_compare_algo_change(&mut self, value: String) {
        log::debug!("Compare algorithm changed: {} -> {}", self.compare_algo, value);
        self.compare_algo = value;
    }
}
