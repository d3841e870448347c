//! keyfreq: usage-frequency reports from Emacs keyfreq files
//!
//! A keyfreq file is a single s-expression of
//! `((mode . function) . count)` records. The crate tracks positions while
//! reading it, tokenizes, validates the record grammar while summing counts
//! per mode and per function, and prints ranked reports.

// Internal modules
#[macro_use]
pub mod logging;
pub mod config;
pub mod frequency;
pub mod lexical;
pub mod pipeline;
pub mod report;
pub mod syntax;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use config::{Options, OutputMode, ReportFormat, ReportPreferences};
pub use frequency::{FrequencyTables, UsagePair};
pub use pipeline::{process_file, run, PipelineError};
pub use report::{rank, RankedEntry, Report};
pub use syntax::{parse_str, parse_usage, ParseOutcome, SyntaxError};
