use clap::Parser;
use pk_gameplay::*;
use std::path::PathBuf;

/// Startup configuration, from flags or the environment.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Phase game scoreboard", long_about = None)]
pub struct Settings {
    /// JSON file listing the phases, as an array or under a "phases" key
    #[arg(long, env = pk_core::CATALOG_VAR)]
    pub catalog: Option<PathBuf>,
    /// Whether round points are added to or subtracted from totals
    #[arg(long, env = pk_core::SIGN_VAR, default_value_t = Sign::Add)]
    pub sign: Sign,
    /// Number of leading catalog phases selected at start (default: all)
    #[arg(long)]
    pub phases: Option<usize>,
    /// Directory receiving the session log file
    #[arg(long, env = pk_core::LOGS_VAR, default_value = pk_core::LOGS_DIR)]
    pub logs: PathBuf,
}

impl Settings {
    pub fn rules(&self) -> Rules {
        Rules {
            sign: self.sign,
            default_phases: self.phases,
        }
    }
    /// The configured catalog, or the built-in one plus the reason it
    /// could not be used.
    pub fn catalog(&self) -> (Catalog, Option<anyhow::Error>) {
        match self.catalog {
            Some(ref path) => Catalog::load_or_default(path),
            None => (Catalog::default(), None),
        }
    }
    /// A fresh session under these settings.
    pub fn game(&self) -> Game {
        let (catalog, warning) = self.catalog();
        if let Some(e) = warning {
            log::warn!("{}; using the built-in phase list", e);
        }
        Game::new(catalog, self.rules())
    }
}
