use super::dataset::BenchmarkSet;
use super::record::BenchmarkRecord;
use crate::error::{AlgobenchError, Result};
use serde::Deserialize;
use std::path::Path;

/// Accepted layouts of a results file
#[derive(Deserialize)]
#[serde(untagged)]
enum ResultsFile {
    Bare(Vec<BenchmarkRecord>),
    Wrapped { records: Vec<BenchmarkRecord> },
}

impl ResultsFile {
    fn into_records(self) -> Vec<BenchmarkRecord> {
        match self {
            Self::Bare(records) | Self::Wrapped { records } => records,
        }
    }
}

pub struct BenchmarkLoader;

impl BenchmarkLoader {
    /// Load a JSON results file into a validated set
    pub fn load<P: AsRef<Path>>(path: P) -> Result<BenchmarkSet> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AlgobenchError::DataLoading(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let set = Self::parse(&contents)?;
        log::info!(
            "Loaded {} records ({} metrics, {} algorithms) from {}",
            set.len(),
            set.metrics().len(),
            set.algorithms().len(),
            path.display()
        );
        Ok(set)
    }

    pub fn parse(json: &str) -> Result<BenchmarkSet> {
        if json.trim().is_empty() {
            return Err(AlgobenchError::DataLoading("Results file is empty".to_string()));
        }

        let file: ResultsFile = serde_json::from_str(json)?;
        let records = file.into_records();
        if records.is_empty() {
            return Err(AlgobenchError::DataLoading(
                "Results file contains no records".to_string(),
            ));
        }

        BenchmarkSet::from_records(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_array() {
        let set = BenchmarkLoader::parse(
            r#"[
                {"algorithm": "A", "metric": "latency", "value": 1.0},
                {"algorithm": "B", "metric": "latency", "value": 2.0}
            ]"#,
        )
        .unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.algorithms().len(), 2);
    }

    #[test]
    fn test_wrapped_records() {
        let set = BenchmarkLoader::parse(
            r#"{"records": [
                {"algorithm": "A", "metric": "latency", "value": 1.0, "run": 3,
                 "recorded_at": "2024-05-01T12:00:00Z"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(set.records()[0].run, Some(3));
        assert!(set.records()[0].recorded_at.is_some());
    }

    #[test]
    fn test_empty_inputs_rejected() {
        assert!(matches!(
            BenchmarkLoader::parse("   "),
            Err(AlgobenchError::DataLoading(_))
        ));
        assert!(matches!(
            BenchmarkLoader::parse("[]"),
            Err(AlgobenchError::DataLoading(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            BenchmarkLoader::parse("{not json"),
            Err(AlgobenchError::Serde(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            BenchmarkLoader::load("/nonexistent/results.json"),
            Err(AlgobenchError::DataLoading(_))
        ));
    }
}
