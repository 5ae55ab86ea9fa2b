//! Scorekeeping for Phase 10 style card games.
//!
//! This facade crate re-exports all public phasekeeper crates for convenient access.
//!
//! ## Crate Organization
//!
//! - [`core`] — Type aliases, the built-in phase list, and logger setup
//! - [`gameplay`] — The per-session game state machine and phase catalog
//! - [`records`] — History export to CSV and JSON
//! - [`console`] — Interactive terminal scoreboard

pub use pk_core     as core;
pub use pk_gameplay as gameplay;
pub use pk_records  as records;
pub use pk_console  as console;

// Re-export commonly used types at the root
pub use pk_core::*;
