//! Interactive terminal scoreboard.
//!
//! Reads one command per line, applies it to a [`pk_gameplay::Game`],
//! and redraws the board after every change.
mod board;
mod cli;
mod command;
mod settings;

pub use board::*;
pub use cli::*;
pub use command::*;
pub use settings::*;
