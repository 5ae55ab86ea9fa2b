use super::*;
use pk_core::Phase;

/// Frozen copy of the roster and phase selection.
///
/// Holds owned clones rather than references into the live game, so later
/// mutations cannot reach back into a saved entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    seats: Vec<Seat>,
    selected: Vec<Phase>,
}

impl Snapshot {
    pub fn new(seats: Vec<Seat>, selected: Vec<Phase>) -> Self {
        Self { seats, selected }
    }
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn selected(&self) -> &[Phase] {
        &self.selected
    }
    /// Flattens into export rows, numbering this snapshot `number`.
    pub fn rows(&self, number: usize) -> impl Iterator<Item = Row> + '_ {
        self.seats.iter().map(move |seat| Row {
            snapshot: number,
            player: seat.name().to_string(),
            score: seat.score(),
            phase: seat.label(&self.selected).to_string(),
        })
    }
}
