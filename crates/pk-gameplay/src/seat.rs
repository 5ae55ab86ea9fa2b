use super::*;
use pk_core::Phase;
use pk_core::Points;
use pk_core::Position;
use pk_core::Score;

/// A player's state at the scoreboard.
///
/// # Fields
///
/// - `name` — Unique, case-sensitive player name
/// - `index` — Position within the selected phases; equal to the number of
///   selected phases once every phase is done
/// - `score` — Running total across rounds
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Seat {
    name: String,
    index: Position,
    score: Score,
}

impl From<String> for Seat {
    fn from(name: String) -> Self {
        Self {
            name,
            index: 0,
            score: 0,
        }
    }
}

impl Seat {
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Position within the selected phases.
    pub fn index(&self) -> Position {
        self.index
    }
    /// Running total across rounds.
    pub fn score(&self) -> Score {
        self.score
    }
    /// The phase this player is working on, or [`pk_core::COMPLETED`].
    pub fn label<'a>(&self, selected: &'a [Phase]) -> &'a str {
        selected
            .get(self.index)
            .map(String::as_str)
            .unwrap_or(pk_core::COMPLETED)
    }
    /// True once every selected phase is behind this player.
    pub fn is_complete(&self, selected: &[Phase]) -> bool {
        self.index >= selected.len()
    }
    /// Applies one round's points under the given sign.
    pub fn credit(&mut self, sign: Sign, points: Points) {
        self.score = sign.apply(self.score, points);
    }
    /// Moves to the next phase unless already past the last of `limit`.
    /// Returns whether the position changed.
    pub fn advance(&mut self, limit: usize) -> bool {
        if self.index < limit {
            self.index += 1;
            true
        } else {
            false
        }
    }
    pub fn reset_index(&mut self) {
        self.index = 0;
    }
    pub fn reset_score(&mut self) {
        self.score = 0;
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({}, {} phases done)", self.name, self.score, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected() -> Vec<Phase> {
        vec!["A".to_string(), "B".to_string()]
    }

    #[test]
    fn starts_at_zero() {
        let seat = Seat::from(String::from("Al"));
        assert_eq!(seat.name(), "Al");
        assert_eq!(seat.index(), 0);
        assert_eq!(seat.score(), 0);
        assert_eq!(seat.label(&selected()), "A");
    }

    #[test]
    fn advance_stops_at_limit() {
        let mut seat = Seat::from(String::from("Al"));
        assert!(seat.advance(2));
        assert!(seat.advance(2));
        assert!(!seat.advance(2));
        assert_eq!(seat.index(), 2);
        assert!(seat.is_complete(&selected()));
        assert_eq!(seat.label(&selected()), pk_core::COMPLETED);
        assert_eq!(seat.to_string(), "Al (0, 2 phases done)");
    }

    #[test]
    fn display_counts_cleared_phases() {
        let mut seat = Seat::from(String::from("Al"));
        assert_eq!(seat.to_string(), "Al (0, 0 phases done)");
        seat.credit(Sign::Add, 5);
        seat.advance(2);
        assert_eq!(seat.to_string(), "Al (5, 1 phases done)");
    }

    #[test]
    fn credit_follows_sign() {
        let mut seat = Seat::from(String::from("Al"));
        seat.credit(Sign::Add, 10);
        seat.credit(Sign::Subtract, 25);
        assert_eq!(seat.score(), -15);
        seat.reset_score();
        assert_eq!(seat.score(), 0);
    }
}
