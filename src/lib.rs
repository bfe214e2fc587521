#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]

//! Core data layer for a hyperparameter-search results dashboard. It reads
//! per-trial JSON records (or a CSV) written by a tuner, flattens them into
//! rows, materializes a column-oriented table, and encodes every column into
//! a plot-ready parallel-coordinates dimension. A self-contained Plotly.js
//! HTML report can be generated from any table.
//!
//! # Getting Started
//!
//! Point a [`DashboardConfig`] at a tuner output directory and render:
//!
//! ```no_run
//! use tuner_dashboard::prelude::*;
//!
//! let config = DashboardConfig::new("./hyperband_search_00")
//!     .allow_list("num_layers,activation,units,learning_rate");
//!
//! let table = config.load_table()?;
//! let dimensions = build_dimensions(&table);
//! table.export_html("report.html")?;
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`TrialRecord`] | One trial as stored on disk: id, score, hyperparameter values. |
//! | [`Row`] | A flattened trial: ordered, unique keys mapped to scalar cells. |
//! | [`Table`] | Column-oriented view of a set of rows (or of a CSV file). |
//! | [`Dimension`] | One parallel-coordinates axis: label, numeric values, optional tick metadata. |
//! | [`DashboardConfig`] | Where to scan, which hyperparameters to keep, optional CSV bypass. |
//!
//! # Refresh model
//!
//! Loading is synchronous and stateless: every call to
//! [`DashboardConfig::load_table`] re-reads the filesystem and returns a
//! fresh snapshot. A UI that wants periodic refresh calls `load_table` +
//! [`build_dimensions`] again and swaps the result in wholesale; nothing in
//! this crate caches or diffs.
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) at load/encode milestones | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod config;
mod dimensions;
mod error;
mod loader;
mod table;
mod trial;
mod visualization;

pub use config::DashboardConfig;
pub use dimensions::{build_dimensions, Dimension, Ticks};
pub use error::{Error, Result};
pub use loader::{discover_trial_files, load_trials, read_trial_file, TRIAL_FILE_NAME};
pub use table::{Column, Table};
pub use trial::{
    flatten, parse_allow_list, CellValue, Hyperparameters, Row, TrialRecord, RESERVED_TRIAL_ID_KEY,
};
pub use visualization::generate_html_report;

/// Convenient wildcard import for the most common types.
///
/// ```
/// use tuner_dashboard::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::DashboardConfig;
    pub use crate::dimensions::{build_dimensions, Dimension, Ticks};
    pub use crate::error::{Error, Result};
    pub use crate::loader::{discover_trial_files, load_trials};
    pub use crate::table::{Column, Table};
    pub use crate::trial::{flatten, CellValue, Row, TrialRecord};
    pub use crate::visualization::generate_html_report;
}
