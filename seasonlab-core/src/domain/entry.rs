use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::pair::CurrencyPair;

/// The canonical column set of the TP/SL table, in source order.
///
/// An empty table still carries this schema — callers render headers
/// from it regardless of row count.
pub const COLUMNS: [&str; 5] = [
    "Date",
    "Pair",
    "Probability Up",
    "Probability Down",
    "Type",
];

/// One TP/SL row.
///
/// Only the date and pair are coerced at load time. The probability and
/// type columns pass through exactly as recorded in the source — the
/// original dataset was never validated there, and this viewer keeps
/// that behavior rather than guessing at a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TpslEntry {
    pub date: NaiveDate,
    pub pair: CurrencyPair,
    pub prob_up: String,
    pub prob_down: String,
    pub entry_type: String,
}

/// An in-memory TP/SL table, alive for one render cycle.
///
/// `dropped_rows` makes the loader's silent row drops observable: it
/// counts source rows discarded because Date or Pair failed to coerce.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryTable {
    pub entries: Vec<TpslEntry>,
    pub dropped_rows: usize,
}

impl EntryTable {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn columns() -> &'static [&'static str] {
        &COLUMNS
    }
}
