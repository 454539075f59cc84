//! Application state — single-owner, main-thread only.
//!
//! Every user interaction triggers one full synchronous re-evaluation
//! of the active view (`refresh`): charts re-resolve and the TP/SL
//! table reloads from source. Nothing is cached between cycles.

use seasonlab_core::charts::{ChartCatalog, ChartKind, ChartOrigin, ChartResolver};
use seasonlab_core::config::ViewerConfig;
use seasonlab_core::dataset::{EntryFilter, EntryLoader};
use seasonlab_core::domain::{CurrencyPair, EntryTable, Month};

/// The four view modes of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    MonthlySeasonality,
    DailySeasonality,
    ViewByMonth,
    EntrySection,
}

impl ViewMode {
    pub const ALL: [ViewMode; 4] = [
        ViewMode::MonthlySeasonality,
        ViewMode::DailySeasonality,
        ViewMode::ViewByMonth,
        ViewMode::EntrySection,
    ];

    pub fn index(self) -> usize {
        match self {
            ViewMode::MonthlySeasonality => 0,
            ViewMode::DailySeasonality => 1,
            ViewMode::ViewByMonth => 2,
            ViewMode::EntrySection => 3,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::MonthlySeasonality => "Monthly Seasonality",
            ViewMode::DailySeasonality => "Daily Seasonality",
            ViewMode::ViewByMonth => "View by Month",
            ViewMode::EntrySection => "Entry Section",
        }
    }

    pub fn next(self) -> Self {
        Self::from_index((self.index() + 1) % Self::ALL.len()).unwrap()
    }

    pub fn prev(self) -> Self {
        Self::from_index((self.index() + Self::ALL.len() - 1) % Self::ALL.len()).unwrap()
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Outcome of one chart resolution, as shown in the chart panel.
#[derive(Debug, Clone)]
pub enum ChartOutcome {
    Found {
        origin: ChartOrigin,
        width: u32,
        height: u32,
        size: usize,
    },
    Missing {
        remote_url: String,
    },
}

#[derive(Debug, Clone)]
pub struct ChartStatusRow {
    pub label: String,
    pub outcome: ChartOutcome,
}

pub struct AppState {
    pub running: bool,
    pub mode: ViewMode,
    pub pair_idx: usize,
    pub month_idx: usize,
    /// Chart panel rows for the active view.
    pub charts: Vec<ChartStatusRow>,
    /// Filtered entry table for the Entry Section.
    pub entries: EntryTable,
    pub total_entries: usize,
    pub table_scroll: usize,
    /// Entry Section predicate toggles.
    pub filter_by_pair: bool,
    pub filter_by_month: bool,
    pub status_message: Option<(String, StatusLevel)>,

    catalog: ChartCatalog,
    resolver: ChartResolver,
    loader: EntryLoader,
}

impl AppState {
    pub fn new(config: ViewerConfig) -> Self {
        let catalog = ChartCatalog::from_config(&config);
        let loader = EntryLoader::new(config.dataset.clone());
        let mut app = Self {
            running: true,
            mode: ViewMode::MonthlySeasonality,
            pair_idx: 0,
            month_idx: 0,
            charts: Vec::new(),
            entries: EntryTable::empty(),
            total_entries: 0,
            table_scroll: 0,
            filter_by_pair: false,
            filter_by_month: false,
            status_message: None,
            catalog,
            resolver: ChartResolver::with_default_sources(),
            loader,
        };
        app.refresh();
        app
    }

    pub fn selected_pair(&self) -> CurrencyPair {
        CurrencyPair::ALL[self.pair_idx]
    }

    pub fn selected_month(&self) -> Month {
        Month::ALL[self.month_idx]
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    /// One full top-to-bottom re-evaluation of the active view.
    ///
    /// Blocks on local and network I/O; acceptable for a single
    /// interactive viewer.
    pub fn refresh(&mut self) {
        match self.mode {
            ViewMode::MonthlySeasonality => {
                self.charts = CurrencyPair::ALL
                    .iter()
                    .map(|&pair| self.resolve_row(pair, ChartKind::MonthlyOverview, None))
                    .collect();
                self.report_chart_status();
            }
            ViewMode::DailySeasonality => {
                let pair = self.selected_pair();
                self.charts = Month::ALL
                    .iter()
                    .map(|&month| {
                        self.resolve_row(pair, ChartKind::DailyProbability, Some(month))
                    })
                    .collect();
                self.report_chart_status();
            }
            ViewMode::ViewByMonth => {
                let month = self.selected_month();
                self.charts = CurrencyPair::ALL
                    .iter()
                    .map(|&pair| {
                        self.resolve_row(pair, ChartKind::DailyProbability, Some(month))
                    })
                    .collect();
                self.report_chart_status();
            }
            ViewMode::EntrySection => {
                let table = self.loader.load();
                self.total_entries = table.len();
                let filter = EntryFilter::new(
                    self.filter_by_month.then(|| self.selected_month()),
                    self.filter_by_pair.then(|| self.selected_pair()),
                );
                self.entries = filter.apply(&table);
                self.table_scroll = 0;
                if table.dropped_rows > 0 {
                    self.set_warning(format!(
                        "{} of {} entries shown ({} malformed row(s) dropped)",
                        self.entries.len(),
                        self.total_entries,
                        table.dropped_rows
                    ));
                } else {
                    self.set_status(format!(
                        "{} of {} entries shown",
                        self.entries.len(),
                        self.total_entries
                    ));
                }
            }
        }
    }

    fn resolve_row(
        &self,
        pair: CurrencyPair,
        kind: ChartKind,
        month: Option<Month>,
    ) -> ChartStatusRow {
        let label = match month {
            Some(month) => format!("{pair} / {month}"),
            None => pair.to_string(),
        };

        // Locate is infallible here: the month is always supplied for
        // daily charts by construction.
        let location = match self.catalog.locate(pair, kind, month) {
            Ok(location) => location,
            Err(e) => {
                return ChartStatusRow {
                    label,
                    outcome: ChartOutcome::Missing {
                        remote_url: e.to_string(),
                    },
                }
            }
        };

        let outcome = match self.resolver.resolve(&location) {
            Ok(chart) => ChartOutcome::Found {
                origin: chart.origin,
                width: chart.width,
                height: chart.height,
                size: chart.bytes.len(),
            },
            // NotFound and source faults render the same way: a warning row.
            Err(_) => ChartOutcome::Missing {
                remote_url: location.remote_url,
            },
        };

        ChartStatusRow { label, outcome }
    }

    fn report_chart_status(&mut self) {
        let missing = self
            .charts
            .iter()
            .filter(|row| matches!(row.outcome, ChartOutcome::Missing { .. }))
            .count();
        if missing > 0 {
            self.set_warning(format!(
                "{} of {} charts missing",
                missing,
                self.charts.len()
            ));
        } else {
            self.set_status(format!("{} charts resolved", self.charts.len()));
        }
    }
}
