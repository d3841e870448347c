//! File -> parse -> report
//!
//! Nothing is written to the output until the whole input has parsed.

mod error;

pub use error::PipelineError;

use crate::config::{Options, ReportPreferences};
use crate::logging::{self, codes, LogLevel};
use crate::report::Report;
use crate::syntax::{self, ParseOutcome, ParseStats};
use crate::{log_error, log_info, log_success};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Open and parse one keyfreq file
pub fn process_file(path: &Path) -> Result<ParseOutcome, PipelineError> {
    log_info!("Processing keyfreq file", "path" => path.display());

    let file = File::open(path).map_err(|source| PipelineError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    syntax::parse_usage(file).map_err(|source| PipelineError::Syntax {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse the configured input and write the selected report to `out`
pub fn run<W: Write>(
    options: &Options,
    preferences: &ReportPreferences,
    out: &mut W,
) -> Result<ParseStats, PipelineError> {
    let outcome = process_file(&options.input)?;

    let report = Report::build(&outcome.tables, options.mode);
    report.write_to(out, options.format, preferences)?;

    log_success!(codes::success::REPORT_WRITTEN, "Report written",
        "mode" => options.mode,
        "records" => outcome.stats.records
    );

    Ok(outcome.stats)
}

/// Report a failed run exactly once
///
/// The error goes through the logger when one is installed and lets error
/// events through; otherwise it is written to `fallback`. Returns true when
/// the logger took it.
pub fn report_failure<W: Write>(
    error: &PipelineError,
    logger_installed: bool,
    fallback: &mut W,
) -> io::Result<bool> {
    if logger_installed && logging::enabled(LogLevel::Error, module_path!()) {
        log_error!(error.error_code(), &error.to_string(),
            "help" => error.recommended_action()
        );
        return Ok(true);
    }

    writeln!(
        fallback,
        "keyfreq: {} (help: {})",
        error,
        error.recommended_action()
    )?;
    Ok(false)
}
