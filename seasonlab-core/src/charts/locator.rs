//! Chart catalog — deterministic path and mirror-URL computation.
//!
//! Pure: a location is a function of (pair, kind, month) and the
//! injected root/mirror, recomputed per request and never cached.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::ChartError;
use crate::config::ViewerConfig;
use crate::domain::{CurrencyPair, Month};

/// Which pre-rendered chart to look up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// One chart per pair summarizing the whole year.
    MonthlyOverview,
    /// One chart per (pair, month) with day-level bullish probabilities.
    DailyProbability,
}

/// A computed (local path, remote URL) pair for one chart.
///
/// The two differ only in root-vs-mirror prefix and separator
/// convention — URLs always use '/'.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartLocation {
    pub local_path: PathBuf,
    pub remote_url: String,
}

/// Computes chart locations against a fixed root and mirror.
#[derive(Debug, Clone)]
pub struct ChartCatalog {
    root: PathBuf,
    mirror: String,
}

impl ChartCatalog {
    pub fn new(root: impl Into<PathBuf>, mirror: impl Into<String>) -> Self {
        let mirror = mirror.into();
        Self {
            root: root.into(),
            mirror: mirror.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ViewerConfig) -> Self {
        Self::new(config.chart_root.clone(), config.mirror_base.clone())
    }

    /// Compute the local path and mirror URL for one chart.
    ///
    /// `month` is required for `DailyProbability` and ignored for
    /// `MonthlyOverview`.
    pub fn locate(
        &self,
        pair: CurrencyPair,
        kind: ChartKind,
        month: Option<Month>,
    ) -> Result<ChartLocation, ChartError> {
        let file = Self::file_name(pair, kind, month)?;
        let local_path = self.root.join(pair.code()).join(&file);
        let remote_url = format!("{}/{}/{}", self.mirror, pair.code(), file);
        Ok(ChartLocation {
            local_path,
            remote_url,
        })
    }

    // File names exactly as the chart generator emits them, including
    // the embedded space in the daily-probability variant.
    fn file_name(
        pair: CurrencyPair,
        kind: ChartKind,
        month: Option<Month>,
    ) -> Result<String, ChartError> {
        match kind {
            ChartKind::MonthlyOverview => {
                Ok(format!("{}_monthly_seasonality.png", pair.code()))
            }
            ChartKind::DailyProbability => {
                let month = month.ok_or(ChartError::MissingMonth)?;
                Ok(format!(
                    "{} bullish_probability_month_{}.png",
                    pair.code(),
                    month.number()
                ))
            }
        }
    }
}
