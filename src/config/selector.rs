use super::traits::ConfigSection;
use crate::comparison::MetricDirection;
use crate::error::AlgobenchError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A metric the viewer knows how to judge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDefinition {
    pub name: String,
    #[serde(default)]
    pub direction: MetricDirection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl MetricDefinition {
    pub fn new(name: &str, direction: MetricDirection, unit: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            direction,
            unit: unit.map(str::to_string),
        }
    }
}

/// Options and initial selection for the selector bar
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Metric options used before any results are loaded
    pub metrics: Vec<MetricDefinition>,
    /// Algorithm options used before any results are loaded
    pub algorithms: Vec<String>,
    pub default_metric: Option<String>,
    pub default_base: Option<String>,
    pub default_compare: Option<String>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            metrics: vec![
                MetricDefinition::new("latency", MetricDirection::LowerIsBetter, Some("ms")),
                MetricDefinition::new("throughput", MetricDirection::HigherIsBetter, Some("ops/s")),
                MetricDefinition::new("memory", MetricDirection::LowerIsBetter, Some("MB")),
            ],
            algorithms: Vec::new(),
            default_metric: None,
            default_base: None,
            default_compare: None,
        }
    }
}

impl SelectorConfig {
    pub fn metric_names(&self) -> Vec<String> {
        self.metrics.iter().map(|m| m.name.clone()).collect()
    }

    pub fn definition(&self, metric: &str) -> Option<&MetricDefinition> {
        self.metrics.iter().find(|m| m.name == metric)
    }
}

impl ConfigSection for SelectorConfig {
    fn section_name() -> &'static str {
        "selector"
    }

    fn validate(&self) -> Result<(), AlgobenchError> {
        let mut seen = HashSet::new();
        for metric in &self.metrics {
            if metric.name.trim().is_empty() {
                return Err(AlgobenchError::Configuration(
                    "Metric names must not be empty".to_string(),
                ));
            }
            if !seen.insert(metric.name.as_str()) {
                return Err(AlgobenchError::Configuration(format!(
                    "Metric '{}' is defined more than once",
                    metric.name
                )));
            }
        }

        let mut seen = HashSet::new();
        for algorithm in &self.algorithms {
            if algorithm.trim().is_empty() {
                return Err(AlgobenchError::Configuration(
                    "Algorithm names must not be empty".to_string(),
                ));
            }
            if !seen.insert(algorithm.as_str()) {
                return Err(AlgobenchError::Configuration(format!(
                    "Algorithm '{}' is listed more than once",
                    algorithm
                )));
            }
        }

        Ok(())
    }
}
