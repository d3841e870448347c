//! Command line configuration
//!
//! `constants` holds fixed names and defaults, `runtime` the presentation
//! preferences read from the environment. This module turns the command line
//! into [`Options`].

pub mod constants;
pub mod runtime;

use crate::log_debug;
use crate::logging::{codes, Code};
use clap::Parser;
use constants::{DEFAULT_INPUT_FILENAME, HOME_ENV, SINGLE_DASH_LONG_FLAGS};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub use runtime::ReportPreferences;

/// Invalid configuration values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("don't know mode '{value}'. Valid values are 'all', 'modes', 'functions'")]
    UnknownOutputMode { value: String },

    #[error("don't know format '{value}'. Valid values are 'csv', 'json'")]
    UnknownReportFormat { value: String },
}

impl ConfigError {
    pub fn error_code(&self) -> Code {
        match self {
            ConfigError::UnknownOutputMode { .. } => codes::config::UNKNOWN_OUTPUT_MODE,
            ConfigError::UnknownReportFormat { .. } => codes::config::UNKNOWN_REPORT_FORMAT,
        }
    }
}

/// Which report sections to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputMode {
    #[default]
    All,
    Modes,
    Functions,
}

impl OutputMode {
    pub fn includes_functions(self) -> bool {
        matches!(self, OutputMode::All | OutputMode::Functions)
    }

    pub fn includes_modes(self) -> bool {
        matches!(self, OutputMode::All | OutputMode::Modes)
    }
}

impl FromStr for OutputMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "all" => Ok(OutputMode::All),
            "modes" => Ok(OutputMode::Modes),
            "functions" => Ok(OutputMode::Functions),
            _ => Err(ConfigError::UnknownOutputMode {
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputMode::All => "ALL",
            OutputMode::Modes => "MODES",
            OutputMode::Functions => "FUNCTIONS",
        };
        f.write_str(name)
    }
}

/// Encoding of the printed report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

impl FromStr for ReportFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "csv" => Ok(ReportFormat::Csv),
            "json" => Ok(ReportFormat::Json),
            _ => Err(ConfigError::UnknownReportFormat {
                value: value.to_string(),
            }),
        }
    }
}

fn parse_output_mode(value: &str) -> Result<OutputMode, ConfigError> {
    value.parse().map_err(rejected)
}

fn parse_report_format(value: &str) -> Result<ReportFormat, ConfigError> {
    value.parse().map_err(rejected)
}

/// clap prints the message; the code only goes to the debug log
fn rejected(error: ConfigError) -> ConfigError {
    log_debug!("Option value rejected", "code" => error.error_code(), "error" => error);
    error
}

/// `$HOME/.emacs.keyfreq`, or `./.emacs.keyfreq` when `HOME` is unset
pub fn default_input_path() -> PathBuf {
    default_input_path_from(std::env::var_os(HOME_ENV))
}

fn default_input_path_from(home: Option<OsString>) -> PathBuf {
    match home {
        Some(home) if !home.is_empty() => PathBuf::from(home).join(DEFAULT_INPUT_FILENAME),
        _ => PathBuf::from(DEFAULT_INPUT_FILENAME),
    }
}

/// Command line options
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "keyfreq",
    version,
    about = "Report command usage frequencies per mode and per function"
)]
pub struct Options {
    /// Input filename
    #[arg(short = 'i', long = "input", value_name = "PATH", default_value_os_t = default_input_path())]
    pub input: PathBuf,

    /// What to output: all, modes or functions
    #[arg(
        short = 'm',
        long = "mode",
        value_name = "MODE",
        default_value = "all",
        value_parser = parse_output_mode
    )]
    pub mode: OutputMode,

    /// Report encoding: csv or json
    #[arg(
        long = "format",
        value_name = "FORMAT",
        default_value = "csv",
        value_parser = parse_report_format
    )]
    pub format: ReportFormat,
}

impl Options {
    /// Parse the process arguments, exiting through clap on invalid input
    pub fn from_env() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// Parse an explicit argument list (program name first)
    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }
}

/// Rewrite single-dash long flags (`-mode all`, `-format=json`) to `--` form
///
/// Arguments after a bare `--` are left untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut passthrough = false;

    for (index, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        if index == 0 || passthrough {
            normalized.push(arg);
            continue;
        }

        let rewritten = arg.to_str().and_then(|text| {
            if text == "--" {
                return None;
            }
            let flag = text.strip_prefix('-')?;
            if flag.starts_with('-') {
                return None;
            }
            let name = flag.split('=').next().unwrap_or(flag);
            SINGLE_DASH_LONG_FLAGS
                .contains(&name)
                .then(|| OsString::from(format!("--{}", flag)))
        });

        if arg == "--" {
            passthrough = true;
        }
        normalized.push(rewritten.unwrap_or(arg));
    }

    normalized
}
