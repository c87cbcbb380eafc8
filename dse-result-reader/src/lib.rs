//! DSE Result Reader Library
//!
//! Reads the result files written by a dataflow-to-multicore design space
//! exploration, keeps the final (non-intermediate) solutions of one decision
//! model and renders a plain text summary of each: per-actor mapping,
//! throughput and timing, and per-processing-element super-loop schedules.
//!
//! # Architecture
//!
//! The pipeline is linear and single-threaded:
//! - [`discovery`] lists the matching result files of a directory
//! - [`solution`] parses each file into a [`Solution`]
//! - [`report`] renders solutions into any `std::io::Write`
//!
//! The library only displays values present in the input; it never
//! recomputes throughput or execution times.
//!
//! # Example Usage
//!
//! ```no_run
//! use dse_result_reader::{DecisionModel, ResultReader};
//! use std::path::Path;
//!
//! let reader = ResultReader::new(DecisionModel::multicore_and_pl());
//! let mut stdout = std::io::stdout();
//! reader.write_report(Path::new("dse_results"), &mut stdout).unwrap();
//! ```

// Public modules
pub mod config;
pub mod discovery;
pub mod reader;
pub mod report;
pub mod solution;
pub mod types;

// Re-export main types for convenience
pub use config::DecisionModel;
pub use reader::ResultReader;
pub use report::{render_value, NOT_AVAILABLE};
pub use solution::{Schedule, Solution};
pub use types::{ReportError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
