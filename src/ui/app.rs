use super::panels::{LeftPanel, MainPanel};
use super::services::DataLoader;
use super::state::AppState;
use super::widgets::SelectorBar;
use crate::config::AppConfig;

pub struct AlgobenchApp {
    state: AppState,
    left_panel: LeftPanel,
    main_panel: MainPanel,
}

impl Default for AlgobenchApp {
    fn default() -> Self {
        Self::with_config(AppConfig::default())
    }
}

impl AlgobenchApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: AppConfig) -> Self {
        let initial_results = config.display.initial_results.clone();
        let mut state = AppState::new(config);

        if let Some(path) = initial_results {
            DataLoader::load_into(&mut state, &path);
        }

        Self {
            state,
            left_panel: LeftPanel::new(),
            main_panel: MainPanel::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Lay out every panel for one frame.
    pub fn ui(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Algobench - Algorithm Comparison");
            });

            // The bar only reports the pick; the state applies it
            let change = SelectorBar::show(ui, &self.state.selector_props());
            if let Some(change) = change {
                self.state.apply(change);
            }
        });

        egui::SidePanel::left("left_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.left_panel.show(ui, &mut self.state);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.main_panel.show(ui, &self.state);
        });
    }
}

impl eframe::App for AlgobenchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
