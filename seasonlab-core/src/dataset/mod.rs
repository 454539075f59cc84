//! TP/SL dataset loading and querying.

pub mod loader;
pub mod query;

pub use loader::{EntryLoader, LoadError};
pub use query::EntryFilter;
