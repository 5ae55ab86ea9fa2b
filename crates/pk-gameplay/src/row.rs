use pk_core::Phase;
use pk_core::Score;

/// One player's line in an exported history.
///
/// `snapshot` counts saves from 1; `phase` is the label resolved against the
/// selection that was active when the snapshot was taken.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Row {
    pub snapshot: usize,
    pub player: String,
    pub score: Score,
    pub phase: Phase,
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "#{:<3} {:<16} {:>6}  {}",
            self.snapshot, self.player, self.score, self.phase
        )
    }
}
