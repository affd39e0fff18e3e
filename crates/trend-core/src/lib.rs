//! Core data structures for trend comparison
//!
//! This crate holds the data model shared by the fitting and reporting
//! layers: named time series, the paired dataset that is compared, the
//! embedded reference data and the loader for dataset files.

pub mod config;
pub mod data;
pub mod error;

pub use config::DatasetConfig;
pub use data::{DataError, TimeSeries, TrendDataset};
pub use error::CoreError;
