//! Viewer configuration — chart root, mirror base, and dataset source.
//!
//! Stored as a TOML file. The defaults reproduce the original
//! deployment: a `Seasonality/` tree next to the binary, mirrored on a
//! public raw-content host, with the TP/SL table as a CSV inside the
//! tree.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Public mirror of the chart tree, path-parallel to the local layout.
pub const DEFAULT_MIRROR: &str =
    "https://raw.githubusercontent.com/Aryamuda/Seasonality/main/Seasonality";

/// Where the TP/SL table comes from. Fixed per deployment — the viewer
/// never switches sources at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DatasetSource {
    LocalCsv { path: PathBuf },
    RemoteExcel { url: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Root of the local chart tree (pair-scoped subdirectories).
    pub chart_root: PathBuf,
    /// Base URL of the public mirror, same tree shape as `chart_root`.
    pub mirror_base: String,
    /// TP/SL dataset source.
    pub dataset: DatasetSource,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            chart_root: PathBuf::from("Seasonality"),
            mirror_base: DEFAULT_MIRROR.to_string(),
            dataset: DatasetSource::LocalCsv {
                path: PathBuf::from("Seasonality/TP_SL.csv"),
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl ViewerConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
