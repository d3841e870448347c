use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// One row of a ranked section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub key: String,
    pub count: u64,
    pub percentage: f64,
}

/// Order a table by descending count, ties by ascending key
///
/// Percentages are shares of the table total; an all-zero table reports 0.0
/// for every entry.
pub fn rank(table: &HashMap<String, u64>) -> Vec<RankedEntry> {
    // Summing in u128 keeps the total exact even when single totals are near u64::MAX.
    let total: u128 = table.values().map(|&count| u128::from(count)).sum();

    let mut entries: Vec<RankedEntry> = table
        .iter()
        .map(|(key, &count)| RankedEntry {
            key: key.clone(),
            count,
            percentage: percentage(count, total),
        })
        .collect();

    entries.sort_by(compare_entries);
    entries
}

fn percentage(count: u64, total: u128) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * count as f64 / total as f64
    }
}

fn compare_entries(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, u64)]) -> HashMap<String, u64> {
        entries
            .iter()
            .map(|(key, count)| (key.to_string(), *count))
            .collect()
    }

    #[test]
    fn test_rank_by_descending_count() {
        let ranked = rank(&table(&[("a", 3), ("b", 10), ("c", 1)]));

        let keys: Vec<&str> = ranked.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);

        assert!((ranked[0].percentage - 71.428_571).abs() < 1e-5);
        assert!((ranked[1].percentage - 21.428_571).abs() < 1e-5);
        assert!((ranked[2].percentage - 7.142_857).abs() < 1e-5);

        let sum: f64 = ranked.iter().map(|e| e.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_ties_ordered_by_key() {
        let ranked = rank(&table(&[("zeta", 2), ("alpha", 2), ("mid", 5), ("beta", 2)]));
        let keys: Vec<&str> = ranked.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["mid", "alpha", "beta", "zeta"]);
    }

    #[test]
    fn test_zero_total() {
        let ranked = rank(&table(&[("idle", 0), ("other", 0)]));
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|e| e.percentage == 0.0));
    }

    #[test]
    fn test_empty_table() {
        assert!(rank(&HashMap::new()).is_empty());
    }

    #[test]
    fn test_huge_totals_do_not_overflow() {
        let ranked = rank(&table(&[("a", u64::MAX), ("b", u64::MAX)]));
        assert!((ranked[0].percentage - 50.0).abs() < 1e-9);
        assert!((ranked[1].percentage - 50.0).abs() < 1e-9);
    }
}
