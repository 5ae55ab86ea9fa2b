//! Phase scorekeeping state machine.
//!
//! Tracks a roster of players, each player's progress through an ordered
//! list of phases, and cumulative scores across rounds.
//!
//! ## Core Types
//!
//! - [`Catalog`] — The ordered list of phases available to a session
//! - [`Seat`] — One player's name, phase position, and running score
//! - [`Game`] — The per-session state manager owning the roster and history
//!
//! ## Rules
//!
//! - [`Sign`] — Whether round points are added to or subtracted from totals
//! - [`Rules`] — Sign convention plus the default phase selection
//!
//! ## History
//!
//! - [`Snapshot`] — A deep copy of the roster and selection at save time
//! - [`Row`] — One flattened (snapshot, player) line for export
mod catalog;
mod game;
mod rejection;
mod row;
mod rules;
mod seat;
mod sign;
mod snapshot;

pub use catalog::*;
pub use game::*;
pub use rejection::*;
pub use row::*;
pub use rules::*;
pub use seat::*;
pub use sign::*;
pub use snapshot::*;
