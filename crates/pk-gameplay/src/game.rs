use super::*;
use pk_core::Phase;
use pk_core::Points;
use pk_core::Position;
use pk_core::Score;

/// Per-session scorekeeping state.
///
/// Owns the phase catalog, the active phase selection, one [`Seat`] per
/// player in roster order, and the saved [`Snapshot`] history. Every
/// mutation either applies in full or is rejected; rejections are logged
/// and leave the state as it was.
///
/// # Invariants
///
/// - seat names are non-empty and unique
/// - `selected` is never empty and only holds catalog phases, each once
/// - every seat's index lies in `0..=selected.len()`
/// - history entries never change after being appended
#[derive(Debug, Clone)]
pub struct Game {
    catalog: Catalog,
    rules: Rules,
    selected: Vec<Phase>,
    seats: Vec<Seat>,
    history: Vec<Snapshot>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Catalog::default(), Rules::default())
    }
}

impl Game {
    /// Starts a session with an empty roster and the default selection.
    pub fn new(catalog: Catalog, rules: Rules) -> Self {
        let selected = rules.defaults(&catalog);
        Self {
            catalog,
            rules,
            selected,
            seats: Vec::new(),
            history: Vec::new(),
        }
    }

    // ------------------------------------------------------------------------
    // mutations
    // ------------------------------------------------------------------------

    /// Seats a new player at phase zero with a zero score.
    pub fn add_player(&mut self, name: &str) {
        match self.admit(name) {
            Ok(name) => {
                log::info!("seating {}", name);
                self.seats.push(Seat::from(name));
            }
            Err(e) => log::warn!("add player rejected: {}", e),
        }
    }
    /// Drops a player together with their score and phase position.
    pub fn remove_player(&mut self, name: &str) {
        match self.position(name) {
            Ok(i) => {
                let seat = self.seats.remove(i);
                log::info!("removed {} at {}", seat, seat.label(&self.selected));
            }
            Err(e) => log::warn!("remove player rejected: {}", e),
        }
    }
    /// Replaces the phase selection, keeping the given order.
    /// Every player restarts at the first phase of the new selection.
    pub fn select_phases(&mut self, subset: Vec<Phase>) {
        match self.vet(&subset) {
            Ok(()) => {
                log::info!("selected {} phases", subset.len());
                self.selected = subset;
                self.seats.iter_mut().for_each(Seat::reset_index);
            }
            Err(e) => log::warn!("phase selection rejected: {}", e),
        }
    }
    /// Applies one round to a player: the points under the session's sign,
    /// and at most one phase of progress if the phase was made.
    pub fn record_round(&mut self, name: &str, points: Points, completed: bool) {
        let sign = self.rules.sign;
        let limit = self.selected.len();
        match self.position(name) {
            Ok(i) => {
                let seat = &mut self.seats[i];
                seat.credit(sign, points);
                if completed && !seat.advance(limit) {
                    log::debug!("{} has no phases left", seat.name());
                }
                log::info!(
                    "recorded {} {} for {} at {}",
                    sign,
                    points,
                    seat,
                    seat.label(&self.selected)
                );
            }
            Err(e) => log::warn!("round rejected: {}", e),
        }
    }
    /// Zeroes every score and phase position. Roster and selection stay.
    pub fn soft_reset(&mut self) {
        log::info!("soft reset of {} players", self.seats.len());
        for seat in self.seats.iter_mut() {
            seat.reset_score();
            seat.reset_index();
        }
    }
    /// Empties the roster and restores the default selection.
    /// Saved history survives.
    pub fn total_reset(&mut self) {
        log::info!("total reset");
        self.seats.clear();
        self.selected = self.rules.defaults(&self.catalog);
    }
    /// Appends a deep copy of the current roster and selection to history.
    pub fn save_snapshot(&mut self) {
        let snapshot = Snapshot::new(self.seats.clone(), self.selected.clone());
        self.history.push(snapshot);
        log::info!("saved snapshot #{}", self.history.len());
    }

    // ------------------------------------------------------------------------
    // queries
    // ------------------------------------------------------------------------

    /// The phase a player is on, [`pk_core::COMPLETED`] when done,
    /// or `None` for a name not in the roster.
    pub fn phase_label(&self, name: &str) -> Option<&str> {
        self.seat(name).map(|seat| seat.label(&self.selected))
    }
    /// Every saved snapshot flattened to one row per player, oldest first.
    pub fn export_history(&self) -> Vec<Row> {
        self.history
            .iter()
            .enumerate()
            .flat_map(|(i, snapshot)| snapshot.rows(i + 1))
            .collect()
    }
    /// Seats ordered best first: furthest phase, then the better score
    /// under the session's sign, then roster order.
    pub fn standings(&self) -> Vec<&Seat> {
        let mut seats = self.seats.iter().collect::<Vec<_>>();
        seats.sort_by(|a, b| {
            b.index()
                .cmp(&a.index())
                .then_with(|| self.rules.sign.rank(a.score(), b.score()))
        });
        seats
    }
    /// The leading player, once they have finished every selected phase.
    pub fn winner(&self) -> Option<&Seat> {
        self.standings()
            .into_iter()
            .next()
            .filter(|seat| seat.is_complete(&self.selected))
    }
    pub fn seat(&self, name: &str) -> Option<&Seat> {
        self.seats.iter().find(|seat| seat.name() == name)
    }
    pub fn score(&self, name: &str) -> Option<Score> {
        self.seat(name).map(Seat::score)
    }
    pub fn phase_index(&self, name: &str) -> Option<Position> {
        self.seat(name).map(Seat::index)
    }
    pub fn is_complete(&self, name: &str) -> Option<bool> {
        self.seat(name).map(|seat| seat.is_complete(&self.selected))
    }
    pub fn players(&self) -> impl Iterator<Item = &str> {
        self.seats.iter().map(Seat::name)
    }
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn selected(&self) -> &[Phase] {
        &self.selected
    }
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
    pub fn rules(&self) -> &Rules {
        &self.rules
    }
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    // ------------------------------------------------------------------------
    // guards
    // ------------------------------------------------------------------------

    fn admit(&self, name: &str) -> Result<String, Rejection> {
        if name.is_empty() {
            return Err(Rejection::EmptyName);
        }
        if self.seat(name).is_some() {
            return Err(Rejection::DuplicateName(name.to_string()));
        }
        Ok(name.to_string())
    }
    fn position(&self, name: &str) -> Result<usize, Rejection> {
        self.seats
            .iter()
            .position(|seat| seat.name() == name)
            .ok_or_else(|| Rejection::UnknownPlayer(name.to_string()))
    }
    fn vet(&self, subset: &[Phase]) -> Result<(), Rejection> {
        if subset.is_empty() {
            return Err(Rejection::EmptySelection);
        }
        for (i, phase) in subset.iter().enumerate() {
            if !self.catalog.contains(phase) {
                return Err(Rejection::UnknownPhase(phase.clone()));
            }
            if subset[..i].contains(phase) {
                return Err(Rejection::RepeatedPhase(phase.clone()));
            }
        }
        Ok(())
    }
}
