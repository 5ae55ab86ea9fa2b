//! Scorekeeper Binary
//!
//! Interactive scoreboard for phase card games.
//!
//! Options: --catalog, --sign, --phases, --logs

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let settings = pk_console::Settings::parse();
    if let Err(e) = pk_core::log(&settings.logs) {
        eprintln!("logging disabled: {}", e);
    }
    pk_console::CLI::run(&settings)
}
