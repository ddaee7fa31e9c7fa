use super::{
    display::DisplayConfig,
    selector::SelectorConfig,
    traits::ConfigSection,
};
use crate::comparison::MetricDirection;
use crate::error::AlgobenchError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Prefix for environment overrides, e.g. `ALGOBENCH__SELECTOR__DEFAULT_METRIC`
pub const ENV_PREFIX: &str = "ALGOBENCH";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub selector: SelectorConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AlgobenchError> {
        self.selector.validate()?;
        self.display.validate()?;
        Ok(())
    }

    /// Configured direction for `metric`; unknown metrics count as higher-is-better.
    pub fn direction_for(&self, metric: &str) -> MetricDirection {
        self.selector
            .definition(metric)
            .map(|d| d.direction)
            .unwrap_or_default()
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    /// Layer the file at `path` (if it exists) and environment overrides over
    /// the built-in defaults.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<(), AlgobenchError> {
        let path = path.as_ref();

        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        log::info!(
            "Configuration loaded ({} metrics, {} algorithms) from {}",
            config.selector.metrics.len(),
            config.selector.algorithms.len(),
            path.display()
        );

        *self.config.write().unwrap_or_else(|e| e.into_inner()) = config;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), AlgobenchError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AlgobenchError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| AlgobenchError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        *self.config.write().unwrap_or_else(|e| e.into_inner()) = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), AlgobenchError> {
        let config = self.get();
        let toml_str = toml::to_string_pretty(&config)
            .map_err(|e| AlgobenchError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| AlgobenchError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Apply `f` and keep the result only if it validates.
    pub fn update<F>(&self, f: F) -> Result<(), AlgobenchError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.write().unwrap_or_else(|e| e.into_inner());
        let mut candidate = config.clone();
        f(&mut candidate);
        candidate.validate()?;
        *config = candidate;
        Ok(())
    }
}
