//! Month/pair filtering over a loaded entry table.

use chrono::Datelike;

use crate::domain::{CurrencyPair, EntryTable, Month, TpslEntry};

/// Optional query predicates. An absent predicate is omitted entirely,
/// so the zero-value filter is the identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryFilter {
    pub month: Option<Month>,
    pub pair: Option<CurrencyPair>,
}

impl EntryFilter {
    pub fn new(month: Option<Month>, pair: Option<CurrencyPair>) -> Self {
        Self { month, pair }
    }

    pub fn by_month(month: Month) -> Self {
        Self {
            month: Some(month),
            pair: None,
        }
    }

    pub fn by_pair(pair: CurrencyPair) -> Self {
        Self {
            month: None,
            pair: Some(pair),
        }
    }

    pub fn matches(&self, entry: &TpslEntry) -> bool {
        self.month
            .map_or(true, |m| entry.date.month() == m.number())
            && self.pair.map_or(true, |p| entry.pair == p)
    }

    /// Stable filter: row order is preserved, no match is an empty
    /// table rather than an error, and the input's drop count carries
    /// through.
    pub fn apply(&self, table: &EntryTable) -> EntryTable {
        EntryTable {
            entries: table
                .entries
                .iter()
                .filter(|e| self.matches(e))
                .cloned()
                .collect(),
            dropped_rows: table.dropped_rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(date: &str, pair: CurrencyPair, tag: &str) -> TpslEntry {
        TpslEntry {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            pair,
            prob_up: "0.6".into(),
            prob_down: "0.4".into(),
            entry_type: tag.into(),
        }
    }

    fn table() -> EntryTable {
        EntryTable {
            entries: vec![
                entry("2024-03-01", CurrencyPair::EurUsd, "a"),
                entry("2024-03-05", CurrencyPair::GbpUsd, "b"),
                entry("2024-04-01", CurrencyPair::EurUsd, "c"),
                entry("2024-03-20", CurrencyPair::EurUsd, "d"),
            ],
            dropped_rows: 2,
        }
    }

    #[test]
    fn no_predicates_is_identity() {
        let t = table();
        assert_eq!(EntryFilter::default().apply(&t), t);
    }

    #[test]
    fn month_and_pair_combine_and_preserve_order() {
        let month = Month::new(3).unwrap();
        let filter = EntryFilter::new(Some(month), Some(CurrencyPair::EurUsd));
        let result = filter.apply(&table());
        let tags: Vec<&str> = result.entries.iter().map(|e| e.entry_type.as_str()).collect();
        assert_eq!(tags, ["a", "d"]);
    }

    #[test]
    fn month_only() {
        let result = EntryFilter::by_month(Month::new(4).unwrap()).apply(&table());
        assert_eq!(result.len(), 1);
        assert_eq!(result.entries[0].entry_type, "c");
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let result = EntryFilter::by_pair(CurrencyPair::UsdJpy).apply(&table());
        assert!(result.is_empty());
    }

    #[test]
    fn dropped_rows_carry_through() {
        let result = EntryFilter::by_month(Month::new(3).unwrap()).apply(&table());
        assert_eq!(result.dropped_rows, 2);
    }
}
