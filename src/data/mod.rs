pub mod dataset;
pub mod loader;
pub mod record;

pub use dataset::BenchmarkSet;
pub use loader::BenchmarkLoader;
pub use record::{BenchmarkRecord, MetricSummary};
