//! Logging for keyfreq
//!
//! Components log through the crate macros (`log_debug!`, `log_info!`,
//! `log_warning!`, `log_error!`, `log_success!`). The macros build a
//! [`LogEvent`] and hand it to the `log` facade; the binary installs
//! `env_logger` as the backend through [`init_logging`].

pub mod codes;
pub mod events;
pub mod macros;

use crate::config::constants::{DEFAULT_LOG_FILTER, LOG_FILTER_ENV};
use crate::log_success;
use std::io::Write;

pub use codes::Code;
pub use events::{LogEvent, LogLevel};

/// Install `env_logger` as the global logger
///
/// The filter is read from `KEYFREQ_LOG` using env_logger's directive syntax
/// and defaults to `warn`. Records print as `<level>: <event>` on stderr.
pub fn init_logging() -> Result<(), String> {
    let env = env_logger::Env::new().filter_or(LOG_FILTER_ENV, DEFAULT_LOG_FILTER);

    env_logger::Builder::from_env(env)
        .format(|buf, record| {
            writeln!(
                buf,
                "{}: {}",
                record.level().as_str().to_ascii_lowercase(),
                record.args()
            )
        })
        .try_init()
        .map_err(|e| format!("Logger initialization failed: {}", e))?;

    log_success!(codes::success::LOGGING_INITIALIZED, "Logging initialized",
        "filter_env" => LOG_FILTER_ENV
    );

    Ok(())
}

/// Whether events at `level` for `target` would be recorded
pub fn enabled(level: LogLevel, target: &str) -> bool {
    log::log_enabled!(target: target, level.to_log_level())
}

/// Forward one event to the `log` facade (used by the logging macros)
pub fn emit(
    level: LogLevel,
    target: &str,
    code: Option<Code>,
    message: &str,
    context: &[(&str, String)],
) {
    if !enabled(level, target) {
        return;
    }

    let mut event = LogEvent::new(level, message);
    if let Some(code) = code {
        event = event.with_code(code);
    }
    for (key, value) in context {
        event = event.with_context(key, value);
    }

    log::log!(target: target, level.to_log_level(), "{}", event);
}
