pub mod traits;
pub mod selector;
pub mod display;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use selector::{MetricDefinition, SelectorConfig};
pub use display::DisplayConfig;
