use algobench::comparison::MetricDirection;
use algobench::config::{AppConfig, ConfigManager};
use algobench::AlgobenchError;
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("algobench_{}_{}", std::process::id(), name))
}

#[test]
fn test_defaults_validate() {
    let config = AppConfig::default();

    assert!(config.validate().is_ok());
    assert_eq!(config.direction_for("latency"), MetricDirection::LowerIsBetter);
    assert_eq!(config.direction_for("throughput"), MetricDirection::HigherIsBetter);
    assert_eq!(config.direction_for("unknown"), MetricDirection::HigherIsBetter);
}

#[test]
fn test_load_without_file_keeps_defaults() {
    let manager = ConfigManager::new();
    manager.load(temp_path("absent.toml")).unwrap();

    let config = manager.get();
    assert_eq!(config.selector.metrics.len(), 3);
    assert_eq!(config.display.decimals, 3);
}

#[test]
fn test_load_toml_file_overrides() {
    let path = temp_path("override.toml");
    std::fs::write(
        &path,
        r#"
[selector]
algorithms = ["A", "B"]
default_compare = "B"

[[selector.metrics]]
name = "p99"
direction = "lower-is-better"
unit = "ms"

[display]
decimals = 1
"#,
    )
    .unwrap();

    let manager = ConfigManager::new();
    manager.load(&path).unwrap();
    let config = manager.get();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.selector.algorithms, vec!["A".to_string(), "B".to_string()]);
    assert_eq!(config.selector.default_compare.as_deref(), Some("B"));
    assert_eq!(config.selector.metric_names(), vec!["p99".to_string()]);
    assert_eq!(config.direction_for("p99"), MetricDirection::LowerIsBetter);
    assert_eq!(config.display.decimals, 1);
    assert_eq!(config.display.window_width, 1100.0);
}

#[test]
fn test_duplicate_algorithms_rejected() {
    let path = temp_path("dupes.toml");
    std::fs::write(&path, "[selector]\nalgorithms = [\"A\", \"A\"]\n").unwrap();

    let manager = ConfigManager::new();
    let result = manager.load_from_file(&path);
    std::fs::remove_file(&path).ok();

    assert!(matches!(result, Err(AlgobenchError::Configuration(_))));
}

#[test]
fn test_save_and_reload() {
    let path = temp_path("saved.toml");
    let manager = ConfigManager::new();
    manager
        .update(|c| {
            c.selector.algorithms = vec!["X".to_string(), "Y".to_string()];
            c.display.decimals = 5;
        })
        .unwrap();
    manager.save_to_file(&path).unwrap();

    let reloaded = ConfigManager::new();
    reloaded.load_from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let config = reloaded.get();
    assert_eq!(config.selector.algorithms, vec!["X".to_string(), "Y".to_string()]);
    assert_eq!(config.display.decimals, 5);
}

#[test]
fn test_invalid_update_is_discarded() {
    let manager = ConfigManager::new();
    let result = manager.update(|c| c.display.decimals = 42);

    assert!(result.is_err());
    assert_eq!(manager.get().display.decimals, 3);
}
