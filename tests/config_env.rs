// Environment variables are process-wide, so these cases live in their own
// test binary and run in sequence inside one test.
use algobench::config::ConfigManager;
use algobench::AlgobenchError;

const METRIC_VAR: &str = "ALGOBENCH__SELECTOR__DEFAULT_METRIC";
const DECIMALS_VAR: &str = "ALGOBENCH__DISPLAY__DECIMALS";

#[test]
fn test_environment_overrides_file() {
    let path = std::env::temp_dir().join(format!("algobench_{}_env.toml", std::process::id()));
    std::fs::write(
        &path,
        "[selector]\ndefault_metric = \"latency\"\n\n[display]\ndecimals = 1\n",
    )
    .unwrap();

    let manager = ConfigManager::new();

    // File alone
    manager.load(&path).unwrap();
    assert_eq!(manager.get().selector.default_metric.as_deref(), Some("latency"));
    assert_eq!(manager.get().display.decimals, 1);

    // Environment wins over the file
    std::env::set_var(METRIC_VAR, "throughput");
    std::env::set_var(DECIMALS_VAR, "4");
    manager.load(&path).unwrap();
    assert_eq!(manager.get().selector.default_metric.as_deref(), Some("throughput"));
    assert_eq!(manager.get().display.decimals, 4);

    // Out-of-range override fails validation and leaves the last good config
    std::env::set_var(DECIMALS_VAR, "42");
    let result = manager.load(&path);
    assert!(matches!(result, Err(AlgobenchError::Configuration(_))));
    assert_eq!(manager.get().display.decimals, 4);

    std::env::remove_var(METRIC_VAR);
    std::env::remove_var(DECIMALS_VAR);
    std::fs::remove_file(&path).ok();
}
