//! Interactive scoreboard loop.
//!
//! Commands are read line by line from stdin and applied to the session's
//! [`Game`]. Rejected operations are reported through the logger, I/O
//! failures are printed and the loop keeps going.
use crate::*;
use colored::Colorize;
use dialoguer::Confirm;
use dialoguer::Input;
use pk_core::Points;
use pk_gameplay::*;
use pk_records::*;
use std::io::Write;

pub struct CLI(Game);

impl From<Game> for CLI {
    fn from(game: Game) -> Self {
        Self(game)
    }
}

impl CLI {
    pub fn run(settings: &Settings) -> anyhow::Result<()> {
        log::info!("entering scoreboard");
        let mut cli = Self::from(settings.game());
        println!("{}", Board::from(cli.game()));
        loop {
            print!("> ");
            std::io::stdout().flush()?;
            let ref mut input = String::new();
            if std::io::stdin().read_line(input)? == 0 {
                break;
            }
            match input.trim() {
                "" => continue,
                "quit" => break,
                "exit" => break,
                line => match cli.handle(line) {
                    Err(e) => eprintln!("{}", e),
                    Ok(_) => continue,
                },
            }
        }
        log::info!("leaving scoreboard");
        Ok(())
    }
    pub fn game(&self) -> &Game {
        &self.0
    }
    /// Applies one input line, printing whatever the command shows.
    pub fn handle(&mut self, line: &str) -> anyhow::Result<()> {
        match Command::parse_line(line)? {
            Command::Add { name } => {
                self.0.add_player(&name.join(" "));
                self.show()
            }
            Command::Remove { name } => {
                self.0.remove_player(&name.join(" "));
                self.show()
            }
            Command::Select { phases } => {
                let phases = self.0.catalog().resolve(&phases)?;
                self.0.select_phases(phases);
                self.show()
            }
            Command::Record { points, done, name } => {
                self.0.record_round(&name.join(" "), points, done);
                self.show()
            }
            Command::Round => {
                self.round()?;
                self.show()
            }
            Command::SoftReset => {
                self.0.soft_reset();
                self.show()
            }
            Command::Reset { yes } => {
                if yes || Self::confirm("Remove every player?")? {
                    self.0.total_reset();
                }
                self.show()
            }
            Command::Save => {
                self.0.save_snapshot();
                Ok(println!(
                    "{}",
                    format!("saved snapshot #{}", self.0.history().len()).dimmed()
                ))
            }
            Command::Export { path, format } => {
                let rows = self.0.export_history();
                let export = Export::from(&rows);
                match path {
                    Some(path) => {
                        let format = format.unwrap_or_else(|| Format::infer(&path));
                        export.save(format, &path)?;
                        Ok(println!("wrote {} rows to {}", rows.len(), path.display()))
                    }
                    None => Ok(print!("{}", export.render(format.unwrap_or_default())?)),
                }
            }
            Command::Phases => Ok(print!("{}", Menu::from(&self.0))),
            Command::Show => self.show(),
            Command::Standings => Ok(print!("{}", Ranking::from(&self.0))),
        }
    }
    fn show(&self) -> anyhow::Result<()> {
        Ok(print!("{}", Board::from(&self.0)))
    }
    /// Walks the roster asking each player's points and phase result.
    fn round(&mut self) -> anyhow::Result<()> {
        let names = self.0.players().map(String::from).collect::<Vec<_>>();
        for name in names {
            let label = self.0.phase_label(&name).unwrap_or_default().to_string();
            let points = Input::<Points>::new()
                .with_prompt(format!("{} points", name))
                .default(0)
                .interact_text()?;
            let done = match self.0.is_complete(&name) {
                Some(false) => Self::confirm(&format!("{} made {:?}?", name, label))?,
                _ => false,
            };
            self.0.record_round(&name, points, done);
        }
        Ok(())
    }
    fn confirm(prompt: &str) -> anyhow::Result<bool> {
        Ok(Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()?)
    }
}
