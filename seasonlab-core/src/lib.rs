//! SeasonLab core — resolve-and-load data access for the seasonality viewer.
//!
//! This crate contains everything the view layers dispatch against:
//! - Domain types (the fixed currency-pair set, validated months, TP/SL rows)
//! - Chart catalog: deterministic local-path / mirror-URL computation
//! - Chart resolver: ordered local-then-remote resolution with a decode check
//! - Dataset loader: TP/SL table from a local CSV or a remote Excel workbook,
//!   with drop-counted row coercion
//! - Entry query: stable month/pair filtering

pub mod charts;
pub mod config;
pub mod dataset;
pub mod domain;
