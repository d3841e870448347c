//! Event type rendered by the logging macros

use super::codes::Code;
use std::fmt;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    /// The matching level of the `log` facade
    pub fn to_log_level(self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warning => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
        }
    }
}

/// Core log event structure
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub level: LogLevel,
    pub code: Option<Code>,
    pub message: String,
    /// Context pairs in the order they were given
    pub context: Vec<(String, String)>,
}

impl LogEvent {
    pub fn new(level: LogLevel, message: &str) -> Self {
        Self {
            level,
            code: None,
            message: message.to_string(),
            context: Vec::new(),
        }
    }

    pub fn with_code(mut self, code: Code) -> Self {
        self.code = Some(code);
        self
    }

    /// Add context data
    pub fn with_context(mut self, key: &str, value: &str) -> Self {
        self.context.push((key.to_string(), value.to_string()));
        self
    }
}

impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(code) = self.code {
            write!(f, "[{}] ", code)?;
        }
        write!(f, "{}", self.message)?;
        for (key, value) in &self.context {
            write!(f, " {}={}", key, value)?;
        }
        Ok(())
    }
}
