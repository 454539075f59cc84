//! Chart location and resolution.
//!
//! `ChartCatalog` computes where a chart lives (local path + mirror
//! URL); `ChartResolver` walks an ordered list of sources to actually
//! produce the bytes.

pub mod locator;
pub mod resolver;

pub use locator::{ChartCatalog, ChartKind, ChartLocation};
pub use resolver::{
    ChartOrigin, ChartResolver, ChartSource, LocalStore, RemoteMirror, ResolvedChart,
};

use thiserror::Error;

/// Chart-side failures.
///
/// `NotFound` is the expected, user-visible case — a view renders it as
/// a warning annotation and carries on. Io/Http faults inside a single
/// source downgrade to misses in the resolver; the variants exist so
/// sources can report what actually happened.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("daily probability charts are keyed by month; none was given")]
    MissingMonth,

    #[error("chart not found locally or on the mirror")]
    NotFound,

    #[error("local store: {0}")]
    Io(#[from] std::io::Error),

    #[error("mirror fetch: {0}")]
    Http(#[from] reqwest::Error),
}
