//! Per-mode and per-function usage totals

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One `(mode . function)` pair from the input
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UsagePair {
    pub mode: String,
    pub function: String,
}

impl UsagePair {
    pub fn new(mode: impl Into<String>, function: impl Into<String>) -> Self {
        Self {
            mode: mode.into(),
            function: function.into(),
        }
    }
}

/// A total would exceed `u64::MAX`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("total for '{key}' exceeds {}", u64::MAX)]
pub struct TotalOverflow {
    pub key: String,
}

/// Sums of counts keyed by mode and by function
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTables {
    modes: HashMap<String, u64>,
    functions: HashMap<String, u64>,
}

impl FrequencyTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` to the pair's mode total and function total
    ///
    /// Either both totals change or neither does.
    pub fn record(&mut self, pair: &UsagePair, count: u64) -> Result<(), TotalOverflow> {
        let mode_total = checked_total(&self.modes, &pair.mode, count)?;
        let function_total = checked_total(&self.functions, &pair.function, count)?;

        self.modes.insert(pair.mode.clone(), mode_total);
        self.functions.insert(pair.function.clone(), function_total);
        Ok(())
    }

    pub fn modes(&self) -> &HashMap<String, u64> {
        &self.modes
    }

    pub fn functions(&self) -> &HashMap<String, u64> {
        &self.functions
    }

    pub fn mode_total(&self, mode: &str) -> Option<u64> {
        self.modes.get(mode).copied()
    }

    pub fn function_total(&self, function: &str) -> Option<u64> {
        self.functions.get(function).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty() && self.functions.is_empty()
    }
}

fn checked_total(
    table: &HashMap<String, u64>,
    key: &str,
    count: u64,
) -> Result<u64, TotalOverflow> {
    let current = table.get(key).copied().unwrap_or(0);
    current.checked_add(count).ok_or_else(|| TotalOverflow {
        key: key.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_pairs_accumulate() {
        let mut tables = FrequencyTables::new();
        let pair = UsagePair::new("text-mode", "forward-char");
        tables.record(&pair, 3).unwrap();
        tables.record(&pair, 4).unwrap();

        assert_eq!(tables.mode_total("text-mode"), Some(7));
        assert_eq!(tables.function_total("forward-char"), Some(7));
    }

    #[test]
    fn test_modes_and_functions_aggregate_independently() {
        let mut tables = FrequencyTables::new();
        tables.record(&UsagePair::new("a-mode", "save"), 2).unwrap();
        tables.record(&UsagePair::new("b-mode", "save"), 5).unwrap();
        tables.record(&UsagePair::new("a-mode", "undo"), 1).unwrap();

        assert_eq!(tables.mode_total("a-mode"), Some(3));
        assert_eq!(tables.mode_total("b-mode"), Some(5));
        assert_eq!(tables.function_total("save"), Some(7));
        assert_eq!(tables.function_total("undo"), Some(1));
        assert_eq!(tables.modes().len(), 2);
        assert_eq!(tables.functions().len(), 2);
    }

    #[test]
    fn test_zero_count_still_creates_keys() {
        let mut tables = FrequencyTables::new();
        assert!(tables.is_empty());
        tables.record(&UsagePair::new("m", "f"), 0).unwrap();
        assert!(!tables.is_empty());
        assert_eq!(tables.mode_total("m"), Some(0));
    }

    #[test]
    fn test_overflow_leaves_tables_untouched() {
        let mut tables = FrequencyTables::new();
        tables.record(&UsagePair::new("m", "f"), u64::MAX).unwrap();

        let err = tables.record(&UsagePair::new("other", "f"), 1).unwrap_err();
        assert_eq!(err.key, "f");
        assert_eq!(tables.mode_total("other"), None);
        assert_eq!(tables.function_total("f"), Some(u64::MAX));
    }
}
