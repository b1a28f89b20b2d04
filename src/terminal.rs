use log::{info, warn};

use crate::challenge::arena::{Arena, AttemptOutcome};
use crate::config::GameConfig;
use crate::error::{Result, SqlWorldError};
use crate::sql::parser::Parser;
use crate::sql::statements::Statement;
use crate::world::entities::{Direction, MOVE_USAGE};
use crate::world::World;

pub const WELCOME: [&str; 7] = [
    "Welcome to SQL World.",
    "",
    "Try commands like:",
    "INSERT INTO weapons (name, damage) VALUES ('Stick of Truth', 5);",
    "INSERT INTO creatures (boss, level) VALUES (1, 5);",
    "INSERT INTO creatures (boss) VALUES (2);",
    "Walk with MOVE <w|a|s|d> [steps]; WHERE shows your position.",
];

/// Line-oriented front end: each submitted line produces one or more output lines.
pub struct Terminal {
    world: World,
    arena: Arena,
    output: Vec<String>,
}

impl Terminal {
    pub fn new(config: GameConfig) -> Self {
        Self::with_parts(World::new(config), Arena::default())
    }

    pub fn with_parts(world: World, arena: Arena) -> Self {
        let mut terminal = Terminal {
            world,
            arena,
            output: Vec::new(),
        };
        for line in WELCOME {
            terminal.log(line);
        }
        terminal.log("");
        terminal
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Every line written so far.
    pub fn lines(&self) -> &[String] {
        &self.output
    }

    /// Runs one command and returns the lines it produced, echo included.
    pub fn submit(&mut self, line: &str) -> &[String] {
        let command = line.trim();
        let start = self.output.len();
        if command.is_empty() {
            return &self.output[start..];
        }

        self.log(format!("sql> {}", command));
        if let Err(err) = self.dispatch(command) {
            warn!("submit: {}", err);
            self.log(format!("Error: {}", err));
        }
        &self.output[start..]
    }

    fn dispatch(&mut self, command: &str) -> Result<()> {
        let mut words = command.split_whitespace();
        let keyword = words.next().unwrap_or_default().to_uppercase();
        match keyword.as_str() {
            "FIGHT" => {
                let id = words
                    .next()
                    .and_then(|w| w.trim_start_matches('#').parse::<u64>().ok())
                    .ok_or(SqlWorldError::Usage("FIGHT <creature id>"))?;
                self.fight(id)
            }
            "MOVE" => {
                let direction: Direction = words
                    .next()
                    .ok_or(SqlWorldError::Usage(MOVE_USAGE))?
                    .parse()?;
                let steps = match words.next() {
                    Some(w) => w.parse::<u32>().map_err(|_| SqlWorldError::Usage(MOVE_USAGE))?,
                    None => 1,
                };
                self.world.move_player(direction, steps);
                self.report_position();
                Ok(())
            }
            "WHERE" => {
                self.report_position();
                Ok(())
            }
            "RETREAT" => {
                match self.arena.retreat() {
                    Some(id) => self.log(format!("You retreat from creature #{}.", id)),
                    None => self.log("Nothing to retreat from."),
                }
                Ok(())
            }
            _ if self.arena.active().is_some() => self.answer(command),
            _ => self.execute_sql(command),
        }
    }

    fn report_position(&mut self) {
        let coordinates = self.world.player().position.coordinates();
        if self.world.player_at_homebase() {
            self.log(format!("{} (homebase)", coordinates));
        } else {
            self.log(coordinates);
        }
    }

    fn fight(&mut self, id: u64) -> Result<()> {
        let prompt = self.arena.engage(&self.world, id)?.prompt.clone();
        self.log(format!("Challenge: {}", prompt));
        Ok(())
    }

    fn answer(&mut self, command: &str) -> Result<()> {
        match self.arena.attempt(&mut self.world, command)? {
            AttemptOutcome::Defeated { creature, reward } => {
                let score = self.world.player().score;
                self.log(format!(
                    "Victory! {} defeated. +{} points (score={}).",
                    creature.name, reward, score
                ));
            }
            AttemptOutcome::Retry { error } => {
                self.log(format!("Challenge failed: {}", error));
            }
        }
        Ok(())
    }

    fn execute_sql(&mut self, command: &str) -> Result<()> {
        match Parser::parse_sql(command)? {
            Statement::Insert(stmt) => {
                let spawned = self.world.apply_insert(&stmt)?;
                for entity in spawned {
                    self.log(entity.to_string());
                }
            }
            Statement::Select(stmt) => {
                for line in self.world.select(&stmt)? {
                    self.log(line);
                }
            }
        }
        Ok(())
    }

    fn log(&mut self, line: impl Into<String>) {
        let line = line.into();
        info!("terminal: {}", line);
        self.output.push(line);
    }
}
