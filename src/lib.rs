pub mod comparison;
pub mod config;
pub mod data;
pub mod error;
pub mod ui;

pub use error::{AlgobenchError, Result};
