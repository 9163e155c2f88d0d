//! Batch runner for the `ntoe` engine.
//!
//! - **Batch**: parses move lists from files or stdin
//! - **Config**: TOML run configuration
//! - **Report**: plays a scenario and formats the statuses

#![warn(missing_docs)]

mod batch;
mod config;
mod report;

pub use batch::{BatchError, parse_batch, read_batch, read_batch_from};
pub use config::{ConfigError, RunConfig};
pub use report::{OutputFormat, Report, run};
