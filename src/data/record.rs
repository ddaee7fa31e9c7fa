use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One measurement of one metric for one algorithm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    pub algorithm: String,
    pub metric: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<DateTime<Utc>>,
}

impl BenchmarkRecord {
    pub fn new(algorithm: impl Into<String>, metric: impl Into<String>, value: f64) -> Self {
        Self {
            algorithm: algorithm.into(),
            metric: metric.into(),
            value,
            run: None,
            recorded_at: None,
        }
    }
}

/// Aggregate of every run recorded for an (algorithm, metric) pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSummary {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl MetricSummary {
    /// `None` for an empty slice.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let sum: f64 = values.iter().sum();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            count: values.len(),
            mean: sum / values.len() as f64,
            min,
            max,
        })
    }
}
