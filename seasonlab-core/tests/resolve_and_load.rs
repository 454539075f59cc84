//! Integration tests for the resolve-and-load pipeline: catalog →
//! resolver over a real temp-dir chart tree, and loader → filter over
//! CSV fixtures.

use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::NaiveDate;
use seasonlab_core::charts::{
    ChartCatalog, ChartError, ChartKind, ChartLocation, ChartOrigin, ChartResolver,
    ChartSource, LocalStore,
};
use seasonlab_core::config::DatasetSource;
use seasonlab_core::dataset::{EntryFilter, EntryLoader};
use seasonlab_core::domain::{CurrencyPair, EntryTable, Month};

fn tiny_png() -> Vec<u8> {
    let img = image::DynamicImage::ImageRgb8(image::RgbImage::new(4, 4));
    let mut buf = std::io::Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
    buf.into_inner()
}

/// Stand-in for the network source that counts how often it is asked.
/// Clones share the counter, so a test can keep one clone for its
/// assertions while the resolver owns the other.
#[derive(Clone)]
struct CountingRemote {
    payload: Option<Vec<u8>>,
    calls: std::sync::Arc<AtomicUsize>,
}

impl CountingRemote {
    fn miss() -> Self {
        Self {
            payload: None,
            calls: Default::default(),
        }
    }

    fn hit(payload: Vec<u8>) -> Self {
        Self {
            payload: Some(payload),
            calls: Default::default(),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ChartSource for CountingRemote {
    fn name(&self) -> &str {
        "counting_remote"
    }

    fn origin(&self) -> ChartOrigin {
        ChartOrigin::Remote
    }

    fn fetch(&self, _location: &ChartLocation) -> Result<Option<Vec<u8>>, ChartError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.payload.clone())
    }
}

#[test]
fn local_hit_never_touches_the_network() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = ChartCatalog::new(dir.path(), "https://mirror.example/charts");
    let location = catalog
        .locate(CurrencyPair::EurUsd, ChartKind::MonthlyOverview, None)
        .unwrap();

    std::fs::create_dir_all(location.local_path.parent().unwrap()).unwrap();
    std::fs::write(&location.local_path, tiny_png()).unwrap();

    let remote = CountingRemote::hit(tiny_png());
    let resolver = ChartResolver::new(vec![
        Box::new(LocalStore),
        Box::new(remote.clone()),
    ]);

    let resolved = resolver.resolve(&location).unwrap();
    assert_eq!(resolved.origin, ChartOrigin::Local);
    assert_eq!(remote.call_count(), 0);
}

#[test]
fn local_miss_falls_back_to_remote_once() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = ChartCatalog::new(dir.path(), "https://mirror.example/charts");
    let location = catalog
        .locate(
            CurrencyPair::UsdCad,
            ChartKind::DailyProbability,
            Some(Month::new(5).unwrap()),
        )
        .unwrap();

    let remote = CountingRemote::hit(tiny_png());
    let resolver = ChartResolver::new(vec![
        Box::new(LocalStore),
        Box::new(remote.clone()),
    ]);

    let resolved = resolver.resolve(&location).unwrap();
    assert_eq!(resolved.origin, ChartOrigin::Remote);
    assert_eq!(remote.call_count(), 1);
}

#[test]
fn local_miss_and_remote_miss_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = ChartCatalog::new(dir.path(), "https://mirror.example/charts");
    let location = catalog
        .locate(CurrencyPair::XauUsd, ChartKind::MonthlyOverview, None)
        .unwrap();

    let remote = CountingRemote::miss();
    let resolver = ChartResolver::new(vec![
        Box::new(LocalStore),
        Box::new(remote.clone()),
    ]);

    match resolver.resolve(&location) {
        Err(ChartError::NotFound) => {}
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert_eq!(remote.call_count(), 1);
}

fn write_csv(rows: &[&str]) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tp_sl.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "Date,Pair,Probability Up,Probability Down,Type").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    (dir, path)
}

#[test]
fn loader_drops_and_counts_bad_rows() {
    let (_dir, path) = write_csv(&[
        "2024-03-15,GBPUSD,0.62,0.38,Buy",
        "not-a-date,EURUSD,0.50,0.50,Sell",
        "2024-04-02,EURUSD,0.55,0.45,Buy",
        "2024-04-03,NOTAPAIR,0.55,0.45,Buy",
        "2024-05-10,USDJPY,0.40,0.60,Sell",
    ]);

    let table = EntryLoader::new(DatasetSource::LocalCsv { path }).load();
    assert_eq!(table.len(), 3);
    assert_eq!(table.dropped_rows, 2);
    for entry in &table.entries {
        // Every surviving row carries a valid parsed date.
        assert!(entry.date >= NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }
}

#[test]
fn missing_source_degrades_to_empty_table() {
    let table = EntryLoader::new(DatasetSource::LocalCsv {
        path: PathBuf::from("/nonexistent/tp_sl.csv"),
    })
    .load();
    assert!(table.is_empty());
    assert_eq!(table.dropped_rows, 0);
    // The schema survives even with zero rows.
    assert_eq!(EntryTable::columns().len(), 5);
}

#[test]
fn round_trip_written_row_survives_load_and_filter() {
    let (_dir, path) = write_csv(&[
        "2024-02-01,EURUSD,0.51,0.49,Sell",
        "2024-03-15,GBPUSD,0.62,0.38,Buy",
    ]);

    let table = EntryLoader::new(DatasetSource::LocalCsv { path }).load();
    let march = EntryFilter::by_month(Month::new(3).unwrap()).apply(&table);

    assert_eq!(march.len(), 1);
    let entry = &march.entries[0];
    assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    assert_eq!(entry.pair, CurrencyPair::GbpUsd);
    assert_eq!(entry.prob_up, "0.62");
    assert_eq!(entry.prob_down, "0.38");
    assert_eq!(entry.entry_type, "Buy");
}

#[test]
fn filter_by_month_and_pair_preserves_source_order() {
    let (_dir, path) = write_csv(&[
        "2024-03-01,EURUSD,0.60,0.40,Buy",
        "2024-03-02,GBPUSD,0.55,0.45,Buy",
        "2024-03-03,EURUSD,0.52,0.48,Sell",
        "2024-04-01,EURUSD,0.50,0.50,Buy",
    ]);

    let table = EntryLoader::new(DatasetSource::LocalCsv { path }).load();
    let filter = EntryFilter::new(Some(Month::new(3).unwrap()), Some(CurrencyPair::EurUsd));
    let result = filter.apply(&table);

    let days: Vec<u32> = result.entries.iter().map(|e| {
        use chrono::Datelike;
        e.date.day()
    }).collect();
    assert_eq!(days, [1, 3]);
}
