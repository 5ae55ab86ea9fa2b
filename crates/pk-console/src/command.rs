use clap::Parser;
use pk_core::Points;
use pk_records::Format;
use std::path::PathBuf;

/// One line of scoreboard input.
#[derive(Debug, Parser, PartialEq, Eq)]
#[command(about, long_about = None)]
pub enum Command {
    #[command(about = "Seat a new player", alias = "a")]
    Add {
        #[arg(required = true)]
        name: Vec<String>,
    },
    #[command(about = "Remove a player and all their records", alias = "rm")]
    Remove {
        #[arg(required = true)]
        name: Vec<String>,
    },
    #[command(
        about = "Select phases by catalog number, in play order",
        alias = "sel"
    )]
    Select {
        #[arg(required = true)]
        phases: Vec<usize>,
    },
    #[command(about = "Record one player's round", alias = "r")]
    Record {
        #[arg(required = true)]
        points: Points,
        /// The player made their phase this round
        #[arg(short, long)]
        done: bool,
        #[arg(required = true)]
        name: Vec<String>,
    },
    #[command(about = "Record a round for every player in turn")]
    Round,
    #[command(about = "Zero every score and phase, keep the players", alias = "soft")]
    SoftReset,
    #[command(about = "Remove every player and restore the default phases")]
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    #[command(about = "Save a snapshot of the scoreboard to history")]
    Save,
    #[command(about = "Export saved history, to stdout or a file")]
    Export {
        path: Option<PathBuf>,
        /// csv or json; inferred from the file extension when omitted
        #[arg(short, long)]
        format: Option<Format>,
    },
    #[command(about = "List the phase catalog and the current selection")]
    Phases,
    #[command(about = "Show the scoreboard", alias = "ls")]
    Show,
    #[command(about = "Rank players by phase, then score", alias = "rank")]
    Standings,
}

impl Command {
    /// Parses one input line. Words are split on whitespace; multi-word
    /// player names are joined back with single spaces.
    pub fn parse_line(line: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(std::iter::once("> ").chain(line.split_whitespace()))
    }
}
