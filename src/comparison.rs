//! Head-to-head comparison of two algorithms on one metric
use crate::data::{BenchmarkSet, MetricSummary};
use crate::error::{AlgobenchError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Whether a larger metric value is an improvement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetricDirection {
    #[default]
    HigherIsBetter,
    LowerIsBetter,
}

impl MetricDirection {
    /// Ordering with the better value first
    pub fn compare(&self, a: f64, b: f64) -> Ordering {
        let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        match self {
            Self::HigherIsBetter => ord.reverse(),
            Self::LowerIsBetter => ord,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Self::HigherIsBetter => "↑",
            Self::LowerIsBetter => "↓",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Base,
    Compare,
    Tie,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub metric: String,
    pub direction: MetricDirection,
    pub base_algo: String,
    pub compare_algo: String,
    pub base: MetricSummary,
    pub compare: MetricSummary,
    /// compare mean minus base mean
    pub delta: f64,
    /// `None` when the base mean is zero
    pub percent_change: Option<f64>,
    pub winner: Winner,
}

impl Comparison {
    pub fn between(
        set: &BenchmarkSet,
        metric: &str,
        base_algo: &str,
        compare_algo: &str,
        direction: MetricDirection,
    ) -> Result<Self> {
        let summary_of = |algorithm: &str| {
            set.summary(algorithm, metric)
                .ok_or_else(|| AlgobenchError::MissingData {
                    algorithm: algorithm.to_string(),
                    metric: metric.to_string(),
                })
        };
        let base = summary_of(base_algo)?;
        let compare = summary_of(compare_algo)?;

        let delta = compare.mean - base.mean;
        let percent_change = if base.mean == 0.0 {
            None
        } else {
            Some(delta / base.mean.abs() * 100.0)
        };

        let winner = if base_algo == compare_algo {
            Winner::Tie
        } else {
            match direction.compare(base.mean, compare.mean) {
                Ordering::Less => Winner::Base,
                Ordering::Greater => Winner::Compare,
                Ordering::Equal => Winner::Tie,
            }
        };

        Ok(Self {
            metric: metric.to_string(),
            direction,
            base_algo: base_algo.to_string(),
            compare_algo: compare_algo.to_string(),
            base,
            compare,
            delta,
            percent_change,
            winner,
        })
    }

    pub fn winner_name(&self) -> Option<&str> {
        match self.winner {
            Winner::Base => Some(self.base_algo.as_str()),
            Winner::Compare => Some(self.compare_algo.as_str()),
            Winner::Tie => None,
        }
    }
}

/// Every algorithm with data for `metric`, best mean first
pub fn rank_algorithms(
    set: &BenchmarkSet,
    metric: &str,
    direction: MetricDirection,
) -> Vec<(String, MetricSummary)> {
    let mut ranked: Vec<(String, MetricSummary)> = set
        .algorithms()
        .iter()
        .filter_map(|algo| set.summary(algo, metric).map(|s| (algo.clone(), s)))
        .collect();

    // Stable sort keeps first-seen order among equal means
    ranked.sort_by(|a, b| direction.compare(a.1.mean, b.1.mean));
    ranked
}
