use super::record::{BenchmarkRecord, MetricSummary};
use crate::error::{AlgobenchError, Result};
use chrono::{DateTime, Utc};

/// Validated collection of benchmark records
#[derive(Debug, Clone, Default)]
pub struct BenchmarkSet {
    records: Vec<BenchmarkRecord>,
    metrics: Vec<String>,
    algorithms: Vec<String>,
}

impl BenchmarkSet {
    pub fn from_records(records: Vec<BenchmarkRecord>) -> Result<Self> {
        let mut metrics: Vec<String> = Vec::new();
        let mut algorithms: Vec<String> = Vec::new();

        for (idx, record) in records.iter().enumerate() {
            if record.algorithm.trim().is_empty() {
                return Err(AlgobenchError::Validation(format!(
                    "Record {} has an empty algorithm name",
                    idx
                )));
            }
            if record.metric.trim().is_empty() {
                return Err(AlgobenchError::Validation(format!(
                    "Record {} has an empty metric name",
                    idx
                )));
            }
            if !record.value.is_finite() {
                return Err(AlgobenchError::Validation(format!(
                    "Record {} ({} / {}) has a non-finite value",
                    idx, record.algorithm, record.metric
                )));
            }

            // First-seen order, no duplicates
            if !metrics.contains(&record.metric) {
                metrics.push(record.metric.clone());
            }
            if !algorithms.contains(&record.algorithm) {
                algorithms.push(record.algorithm.clone());
            }
        }

        Ok(Self {
            records,
            metrics,
            algorithms,
        })
    }

    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    pub fn metrics(&self) -> &[String] {
        &self.metrics
    }

    pub fn algorithms(&self) -> &[String] {
        &self.algorithms
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn values(&self, algorithm: &str, metric: &str) -> Vec<f64> {
        self.records
            .iter()
            .filter(|r| r.algorithm == algorithm && r.metric == metric)
            .map(|r| r.value)
            .collect()
    }

    pub fn summary(&self, algorithm: &str, metric: &str) -> Option<MetricSummary> {
        MetricSummary::from_values(&self.values(algorithm, metric))
    }

    /// Earliest and latest `recorded_at`, if any record carries one.
    pub fn time_span(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let mut stamps = self.records.iter().filter_map(|r| r.recorded_at);
        let first = stamps.next()?;
        Some(stamps.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t))))
    }
}
