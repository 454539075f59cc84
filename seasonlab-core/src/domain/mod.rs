//! Domain types shared across the viewer.

pub mod entry;
pub mod month;
pub mod pair;

pub use entry::{EntryTable, TpslEntry, COLUMNS};
pub use month::{InvalidMonth, Month};
pub use pair::{CurrencyPair, InvalidPair};
