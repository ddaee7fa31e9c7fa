use crate::ui::services::DataLoader;
use crate::ui::state::AppState;

pub struct DataSelector;

impl DataSelector {
    pub fn show(ui: &mut egui::Ui, state: &mut AppState) {
        ui.horizontal(|ui| {
            if ui.button("Open Results...").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("JSON Files", &["json"])
                    .pick_file()
                {
                    DataLoader::load_into(state, &path);
                }
            }
        });

        // Display current file info
        if let Some(path) = &state.data_file_path {
            ui.label(format!("File: {}", path.file_name().unwrap_or_default().to_string_lossy()));
        }

        match &state.dataset {
            Some(dataset) => {
                ui.label(format!("Records: {}", dataset.len()));
                ui.label(format!("Metrics: {}", dataset.metrics().len()));
                ui.label(format!("Algorithms: {}", dataset.algorithms().len()));

                if let Some((first, last)) = dataset.time_span() {
                    ui.label(format!(
                        "Recorded: {} to {}",
                        first.format("%Y-%m-%d"),
                        last.format("%Y-%m-%d")
                    ));
                }
            }
            None => {
                ui.label("No results loaded");
            }
        }
    }
}
