//! Event codes and their metadata
//!
//! Single source of truth for the codes attached to error and success events.
//! Error codes start with `E`, success codes with `I`.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Metadata for an error code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub const fn new(code: &'static str, recommended_action: &'static str) -> Self {
        Self {
            code,
            recommended_action,
        }
    }
}

/// Input file and output stream error codes
pub mod file_processing {
    use super::Code;

    pub const FILE_OPEN_FAILED: Code = Code::new("E005");
    pub const OUTPUT_FAILED: Code = Code::new("E011");
}

/// Character stream error codes
pub mod lexical {
    use super::Code;

    pub const STREAM_READ_FAILED: Code = Code::new("E020");
}

/// Grammar error codes
pub mod syntax {
    use super::Code;

    pub const UNEXPECTED_TOKEN: Code = Code::new("E040");
    pub const UNEXPECTED_END_OF_INPUT: Code = Code::new("E041");
    pub const UNEXPECTED_CHARACTER: Code = Code::new("E042");
    pub const INVALID_COUNT: Code = Code::new("E043");
    pub const COUNT_OVERFLOW: Code = Code::new("E044");
}

/// Command line configuration error codes
pub mod config {
    use super::Code;

    pub const UNKNOWN_OUTPUT_MODE: Code = Code::new("E060");
    pub const UNKNOWN_REPORT_FORMAT: Code = Code::new("E061");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const LOGGING_INITIALIZED: Code = Code::new("I001");
    pub const PARSE_COMPLETE: Code = Code::new("I040");
    pub const REPORT_WRITTEN: Code = Code::new("I070");
}

static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        let entries = [
            ErrorMetadata::new("E005", "Check the path given with -i and its permissions"),
            ErrorMetadata::new("E011", "Check that the output stream is still open"),
            ErrorMetadata::new("E020", "Check that the file is readable and not truncated"),
            ErrorMetadata::new("E040", "Records must have the form ((mode . function) . count)"),
            ErrorMetadata::new("E041", "Check for missing closing parentheses"),
            ErrorMetadata::new("E042", "Identifiers may only contain letters, digits and - + : * & /"),
            ErrorMetadata::new("E043", "Counts must be decimal digits below 2^64"),
            ErrorMetadata::new("E044", "Split the input or reset the keyfreq log"),
            ErrorMetadata::new("E060", "Use one of all, modes, functions"),
            ErrorMetadata::new("E061", "Use one of csv, json"),
        ];

        entries.into_iter().map(|meta| (meta.code, meta)).collect()
    })
}

/// Look up metadata for an error code
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

/// Recommended action for an error code
pub fn get_action(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|meta| meta.recommended_action)
        .unwrap_or("No action available")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_error_code_has_an_action() {
        let codes = [
            file_processing::FILE_OPEN_FAILED,
            file_processing::OUTPUT_FAILED,
            lexical::STREAM_READ_FAILED,
            syntax::UNEXPECTED_TOKEN,
            syntax::UNEXPECTED_END_OF_INPUT,
            syntax::UNEXPECTED_CHARACTER,
            syntax::INVALID_COUNT,
            syntax::COUNT_OVERFLOW,
            config::UNKNOWN_OUTPUT_MODE,
            config::UNKNOWN_REPORT_FORMAT,
        ];

        for code in codes {
            assert!(get_error_metadata(code.as_str()).is_some(), "{}", code);
            assert_ne!(get_action(code.as_str()), "No action available", "{}", code);
        }
    }

    #[test]
    fn test_unknown_code_lookup() {
        assert!(get_error_metadata("E999").is_none());
        assert_eq!(get_action("E999"), "No action available");
    }

    #[test]
    fn test_success_codes_have_no_action() {
        assert!(get_error_metadata(success::PARSE_COMPLETE.as_str()).is_none());
    }
}
