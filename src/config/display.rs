use super::traits::ConfigSection;
use crate::error::AlgobenchError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub decimals: usize,
    pub window_width: f32,
    pub window_height: f32,
    /// Results file opened at startup
    pub initial_results: Option<PathBuf>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            decimals: 3,
            window_width: 1100.0,
            window_height: 700.0,
            initial_results: None,
        }
    }
}

impl DisplayConfig {
    pub fn format_value(&self, value: f64) -> String {
        format!("{:.*}", self.decimals, value)
    }
}

impl ConfigSection for DisplayConfig {
    fn section_name() -> &'static str {
        "display"
    }

    fn validate(&self) -> Result<(), AlgobenchError> {
        if self.decimals > 10 {
            return Err(AlgobenchError::Configuration(
                "Decimals must be between 0 and 10".to_string()
            ));
        }
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !positive(self.window_width) || !positive(self.window_height) {
            return Err(AlgobenchError::Configuration(
                "Window size must be positive".to_string()
            ));
        }
        Ok(())
    }
}
