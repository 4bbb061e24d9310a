//! Renders one tailoring client record into a static HTML client sheet.
//!
//! The run is a single extract, transform, load pass: the record is parsed
//! and read with tolerant lookups, rendered into a fixed page skeleton and
//! written to `<output_dir>/<slug>.<extension>`.

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, ReportSettings};
pub use core::{etl::ReportEngine, pipeline::ReportPipeline};
pub use utils::error::{Result, SheetError};
