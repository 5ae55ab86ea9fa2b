//! Score history export.
//!
//! Serializes the flattened [`pk_gameplay::Row`] sequence produced by
//! `Game::export_history` into a tabular text format.
mod export;
mod format;

pub use export::*;
pub use format::*;
