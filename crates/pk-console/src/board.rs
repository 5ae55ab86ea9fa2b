use colored::Colorize;
use pk_gameplay::*;

/// Width of the player column.
const NAME: usize = 16;

/// The scoreboard: every player with their current phase and total.
pub struct Board<'a>(&'a Game);

impl<'a> From<&'a Game> for Board<'a> {
    fn from(game: &'a Game) -> Self {
        Self(game)
    }
}

impl std::fmt::Display for Board<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let game = self.0;
        let selected = game.selected();
        writeln!(
            f,
            "{}",
            format!(
                "{} phases selected, points {}, {} saved",
                selected.len(),
                game.rules().sign,
                game.history().len()
            )
            .dimmed()
        )?;
        if game.seats().is_empty() {
            return writeln!(f, "{}", "no players yet, try `add <name>`".dimmed());
        }
        for seat in game.seats() {
            let name = format!("{:<NAME$}", seat.name()).bold();
            let score = format!("{:>6}", seat.score());
            let phase = if seat.is_complete(selected) {
                seat.label(selected).green().bold()
            } else {
                format!(
                    "{:>2}/{} {}",
                    seat.index() + 1,
                    selected.len(),
                    seat.label(selected)
                )
                .normal()
            };
            writeln!(f, "{} {}  {}", name, score, phase)?;
        }
        Ok(())
    }
}

/// The phase catalog, marking where each selected phase falls in play order.
pub struct Menu<'a>(&'a Game);

impl<'a> From<&'a Game> for Menu<'a> {
    fn from(game: &'a Game) -> Self {
        Self(game)
    }
}

impl std::fmt::Display for Menu<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let game = self.0;
        for (i, phase) in game.catalog().iter().enumerate() {
            match game.selected().iter().position(|p| p == phase) {
                Some(order) => writeln!(
                    f,
                    "{:>3}. {} {}",
                    i + 1,
                    format!("[{:>2}]", order + 1).cyan(),
                    phase
                )?,
                None => writeln!(f, "{:>3}. {} {}", i + 1, "    ", phase.dimmed())?,
            }
        }
        Ok(())
    }
}

/// Players ranked best first, with the winner called out.
pub struct Ranking<'a>(&'a Game);

impl<'a> From<&'a Game> for Ranking<'a> {
    fn from(game: &'a Game) -> Self {
        Self(game)
    }
}

impl std::fmt::Display for Ranking<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let game = self.0;
        for (i, seat) in game.standings().into_iter().enumerate() {
            writeln!(
                f,
                "{:>2}. {:<NAME$} {:>6}  {}",
                i + 1,
                seat.name(),
                seat.score(),
                seat.label(game.selected())
            )?;
        }
        if let Some(seat) = game.winner() {
            writeln!(f, "{}", format!("{} wins", seat.name()).green().bold())?;
        }
        Ok(())
    }
}
