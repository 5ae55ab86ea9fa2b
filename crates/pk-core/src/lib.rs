//! Core type aliases and constants for phasekeeper.
//!
//! This crate provides the foundational types and default parameters
//! used throughout the phasekeeper workspace.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Cumulative score. Signed since the subtracting convention goes negative.
pub type Score = i64;
/// Points entered for a single round. Never negative.
pub type Points = u32;
/// Position of a player within the selected phase list.
pub type Position = usize;
/// Human-readable phase descriptor, e.g. "2 sets of 3".
pub type Phase = String;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Label reported for a player who has cleared every selected phase.
pub const COMPLETED: &str = "Completed";

/// Built-in phase list used when no catalog file is supplied
/// or the supplied one cannot be read.
pub const PHASES: [&str; 30] = [
    "2 sets of 3",
    "1 set of 3 + 1 run of 4",
    "1 set of 4 + 1 run of 4",
    "1 run of 7",
    "1 run of 8",
    "1 run of 9",
    "2 sets of 4",
    "7 cards of one color",
    "1 set of 5 + 1 set of 2",
    "1 set of 5 + 1 set of 3",
    "1 run of 4 of one color",
    "1 run of 6 of one color",
    "1 run of 4 + 6 cards of one color",
    "1 run of 6 + 4 cards of one color",
    "8 cards of one color",
    "9 cards of one color",
    "3 sets of 3",
    "1 set of 4 + 1 run of 6",
    "1 set of 5 + 1 run of 5",
    "1 set of 5 + 5 cards of one color",
    "5 sets of 2",
    "1 run of 10",
    "10 cards of one color",
    "1 run of 5 of odd numbers of one color + 1 run of 5 of even numbers of one color",
    "1 set of 5 + 1 run of 5 odd numbers",
    "1 set of 5 + 1 run of 5 even numbers",
    "1 set of 4 + 1 run of 3 + 1 set of 3 of one color",
    "1 run of 5 + 1 run of 5 odd numbers of one color",
    "1 run of 5 + 1 run of 5 even numbers of one color",
    "2 sets of 5",
];

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Environment variable naming the phase catalog file.
pub const CATALOG_VAR: &str = "PHASEKEEPER_CATALOG";
/// Environment variable selecting the score sign convention.
pub const SIGN_VAR: &str = "PHASEKEEPER_SIGN";
/// Environment variable naming the log directory.
pub const LOGS_VAR: &str = "PHASEKEEPER_LOGS";
/// Default log directory, relative to the working directory.
pub const LOGS_DIR: &str = "logs";

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates the log directory and writes DEBUG level to file. The terminal
/// only gets WARN and above, since it doubles as the scoreboard.
#[cfg(feature = "server")]
pub fn log(dir: &std::path::Path) -> anyhow::Result<std::path::PathBuf> {
    std::fs::create_dir_all(dir)?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let path = dir.join(format!("{}.log", time));
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(&path)?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Warn,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(path)
}
