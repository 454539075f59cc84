//! TP/SL dataset loader — local CSV or a remote Excel workbook.
//!
//! The source is fixed per deployment. Loading never fails the caller:
//! an absent file or a dead fetch degrades to the empty table and the
//! viewer stays usable. Rows whose Date or Pair fail to coerce are
//! dropped and counted, not surfaced individually.

use chrono::NaiveDate;
use log::warn;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::config::DatasetSource;
use crate::domain::{EntryTable, TpslEntry};

/// Raw CSV row before coercion. Everything is a string here so the
/// probability and type columns pass through exactly as recorded.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Pair")]
    pair: String,
    #[serde(rename = "Probability Up")]
    prob_up: String,
    #[serde(rename = "Probability Down")]
    prob_down: String,
    #[serde(rename = "Type")]
    entry_type: String,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("fetch dataset: {0}")]
    Http(#[from] reqwest::Error),

    #[error("dataset fetch returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("workbook: {0}")]
    Workbook(String),
}

/// Loads the configured TP/SL source into an `EntryTable`.
pub struct EntryLoader {
    source: DatasetSource,
    client: reqwest::blocking::Client,
}

impl EntryLoader {
    pub fn new(source: DatasetSource) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");
        Self { source, client }
    }

    pub fn source(&self) -> &DatasetSource {
        &self.source
    }

    /// Load the table fresh from source. No caching — every render
    /// cycle re-reads.
    pub fn load(&self) -> EntryTable {
        let result = match &self.source {
            DatasetSource::LocalCsv { path } => load_csv(path),
            DatasetSource::RemoteExcel { url } => self.load_excel(url),
        };

        match result {
            Ok(table) => {
                if table.dropped_rows > 0 {
                    warn!(
                        "dropped {} TP/SL row(s) with unparsable Date or Pair",
                        table.dropped_rows
                    );
                }
                table
            }
            Err(e) => {
                warn!("TP/SL source unavailable, serving empty table: {e}");
                EntryTable::empty()
            }
        }
    }

    fn load_excel(&self, url: &str) -> Result<EntryTable, LoadError> {
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(LoadError::Status(status));
        }
        let bytes = resp.bytes()?.to_vec();
        parse_workbook(&bytes)
    }
}

fn load_csv(path: &Path) -> Result<EntryTable, LoadError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut table = EntryTable::empty();

    for row in reader.deserialize::<RawRow>() {
        let raw = match row {
            Ok(raw) => raw,
            // Structurally malformed record (wrong field count etc.)
            Err(_) => {
                table.dropped_rows += 1;
                continue;
            }
        };
        match coerce(raw) {
            Some(entry) => table.entries.push(entry),
            None => table.dropped_rows += 1,
        }
    }

    Ok(table)
}

fn coerce(raw: RawRow) -> Option<TpslEntry> {
    let date = parse_entry_date(raw.date.trim())?;
    let pair = raw.pair.parse().ok()?;
    Some(TpslEntry {
        date,
        pair,
        prob_up: raw.prob_up,
        prob_down: raw.prob_down,
        entry_type: raw.entry_type,
    })
}

/// ISO first; the spreadsheet-era exports carried day-first dates.
pub(crate) fn parse_entry_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%d/%m/%Y"))
        .ok()
}

fn parse_workbook(bytes: &[u8]) -> Result<EntryTable, LoadError> {
    use calamine::{Reader, Xlsx};

    let cursor = std::io::Cursor::new(bytes);
    let mut workbook =
        Xlsx::new(cursor).map_err(|e| LoadError::Workbook(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| LoadError::Workbook("workbook has no sheets".into()))?
        .map_err(|e| LoadError::Workbook(e.to_string()))?;

    let mut table = EntryTable::empty();
    // Same column layout as the CSV, header row first.
    for row in range.rows().skip(1) {
        match coerce_cells(row) {
            Some(entry) => table.entries.push(entry),
            None => table.dropped_rows += 1,
        }
    }

    Ok(table)
}

fn coerce_cells(row: &[calamine::Data]) -> Option<TpslEntry> {
    use calamine::DataType;

    if row.len() < 5 {
        return None;
    }

    let date = row[0]
        .as_date()
        .or_else(|| row[0].as_string().as_deref().map(str::trim).and_then(parse_entry_date))?;
    let pair = row[1].as_string()?.parse().ok()?;

    Some(TpslEntry {
        date,
        pair,
        prob_up: cell_text(&row[2]),
        prob_down: cell_text(&row[3]),
        entry_type: cell_text(&row[4]),
    })
}

fn cell_text(cell: &calamine::Data) -> String {
    cell.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CurrencyPair;

    #[test]
    fn entry_date_accepts_iso_and_day_first() {
        let iso = parse_entry_date("2024-03-15").unwrap();
        let day_first = parse_entry_date("15/03/2024").unwrap();
        assert_eq!(iso, day_first);
        assert_eq!(iso, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn entry_date_rejects_garbage() {
        assert!(parse_entry_date("").is_none());
        assert!(parse_entry_date("not-a-date").is_none());
        assert!(parse_entry_date("2024-13-40").is_none());
    }

    #[test]
    fn coerce_keeps_probability_and_type_verbatim() {
        let entry = coerce(RawRow {
            date: "2024-03-15".into(),
            pair: "GBPUSD".into(),
            prob_up: "not-a-number".into(),
            prob_down: "".into(),
            entry_type: "weird label".into(),
        })
        .unwrap();
        assert_eq!(entry.pair, CurrencyPair::GbpUsd);
        assert_eq!(entry.prob_up, "not-a-number");
        assert_eq!(entry.prob_down, "");
        assert_eq!(entry.entry_type, "weird label");
    }

    #[test]
    fn coerce_drops_bad_date_and_bad_pair() {
        let bad_date = RawRow {
            date: "soon".into(),
            pair: "EURUSD".into(),
            prob_up: "0.5".into(),
            prob_down: "0.5".into(),
            entry_type: "Buy".into(),
        };
        let bad_pair = RawRow {
            date: "2024-03-15".into(),
            pair: "DOGEUSD".into(),
            prob_up: "0.5".into(),
            prob_down: "0.5".into(),
            entry_type: "Buy".into(),
        };
        assert!(coerce(bad_date).is_none());
        assert!(coerce(bad_pair).is_none());
    }
}
