use crate::data::BenchmarkLoader;
use crate::ui::state::AppState;
use std::path::Path;

pub struct DataLoader;

impl DataLoader {
    /// Load a results file into `state`, reporting the outcome in the status line.
    ///
    /// On failure the previously loaded results stay in place.
    pub fn load_into(state: &mut AppState, path: &Path) -> bool {
        match BenchmarkLoader::load(path) {
            Ok(set) => {
                state.status_message = format!(
                    "Loaded {} records from {}",
                    set.len(),
                    path.file_name().unwrap_or_default().to_string_lossy()
                );
                state.set_dataset(set, Some(path));
                true
            }
            Err(e) => {
                log::warn!("Failed to load {}: {}", path.display(), e);
                state.status_message = format!("Error loading results: {}", e);
                false
            }
        }
    }
}
