use algobench::config::ConfigManager;
use algobench::ui::AlgobenchApp;
use eframe::NativeOptions;

const DEFAULT_CONFIG_PATH: &str = "algobench.toml";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let manager = ConfigManager::new();
    manager.load(&config_path)?;
    let config = manager.get();

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.display.window_width, config.display.window_height])
            .with_min_inner_size([700.0, 400.0])
            .with_title("Algobench"),
        ..Default::default()
    };

    eframe::run_native(
        "Algobench",
        native_options,
        Box::new(|cc| Ok(Box::new(AlgobenchApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to start UI: {}", e))
}
