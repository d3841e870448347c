//! Runtime preferences read from the environment
//!
//! Preferences only change presentation. Parsing behavior is fixed.

use super::constants::{DEFAULT_PERCENT_PRECISION, MAX_PERCENT_PRECISION, PERCENT_PRECISION_ENV};
use crate::log_warning;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPreferences {
    /// Decimals printed for percentages in CSV output
    pub percentage_precision: usize,
}

impl ReportPreferences {
    /// Build preferences from an optional raw precision value
    ///
    /// Unparsable values fall back to the default; large values are clamped.
    pub fn from_precision_value(value: Option<&str>) -> Self {
        let percentage_precision = match value.map(str::trim) {
            None => DEFAULT_PERCENT_PRECISION,
            Some(raw) => match raw.parse::<usize>() {
                Ok(precision) if precision > MAX_PERCENT_PRECISION => {
                    log_warning!("Percentage precision clamped",
                        "variable" => PERCENT_PRECISION_ENV,
                        "value" => precision,
                        "max" => MAX_PERCENT_PRECISION
                    );
                    MAX_PERCENT_PRECISION
                }
                Ok(precision) => precision,
                Err(_) => {
                    log_warning!("Ignoring unparsable percentage precision",
                        "variable" => PERCENT_PRECISION_ENV,
                        "value" => raw
                    );
                    DEFAULT_PERCENT_PRECISION
                }
            },
        };

        Self {
            percentage_precision,
        }
    }
}

impl Default for ReportPreferences {
    fn default() -> Self {
        Self::from_precision_value(env::var(PERCENT_PRECISION_ENV).ok().as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_precision_uses_default() {
        let prefs = ReportPreferences::from_precision_value(None);
        assert_eq!(prefs.percentage_precision, DEFAULT_PERCENT_PRECISION);
    }

    #[test]
    fn test_precision_is_parsed_and_clamped() {
        assert_eq!(
            ReportPreferences::from_precision_value(Some(" 2 ")).percentage_precision,
            2
        );
        assert_eq!(
            ReportPreferences::from_precision_value(Some("400")).percentage_precision,
            MAX_PERCENT_PRECISION
        );
    }

    #[test]
    fn test_garbage_precision_falls_back() {
        let prefs = ReportPreferences::from_precision_value(Some("two"));
        assert_eq!(prefs.percentage_precision, DEFAULT_PERCENT_PRECISION);
    }
}
