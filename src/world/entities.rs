use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SqlWorldError};
use crate::sql::data_value::format_number;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, z: f64) -> Self {
        Position { x, z }
    }

    /// HUD readout, e.g. `X: 12, Z: -4`.
    pub fn coordinates(&self) -> String {
        format!(
            "X: {}, Z: {}",
            format_number(self.x.round()),
            format_number(self.z.round())
        )
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", format_number(self.x.round()), format_number(self.z.round()))
    }
}

pub const PLAYER_SPEED: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub position: Position,
    pub score: u64,
    /// Distance covered by one step.
    pub speed: f64,
    pub facing_right: bool,
}

impl Default for Player {
    fn default() -> Self {
        Player {
            position: Position::default(),
            score: 0,
            speed: PLAYER_SPEED,
            facing_right: false,
        }
    }
}

impl Player {
    /// Moves one step. Up is towards negative z; sideways steps also turn
    /// the player.
    pub fn step(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.position.z -= self.speed,
            Direction::Down => self.position.z += self.speed,
            Direction::Left => {
                self.position.x -= self.speed;
                self.facing_right = false;
            }
            Direction::Right => {
                self.position.x += self.speed;
                self.facing_right = true;
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl FromStr for Direction {
    type Err = SqlWorldError;

    /// Accepts the movement keys (`w`, `a`, `s`, `d`) or the direction names.
    fn from_str(s: &str) -> Result<Direction> {
        match s.to_lowercase().as_str() {
            "w" | "up" => Ok(Direction::Up),
            "s" | "down" => Ok(Direction::Down),
            "a" | "left" => Ok(Direction::Left),
            "d" | "right" => Ok(Direction::Right),
            _ => Err(SqlWorldError::Usage(MOVE_USAGE)),
        }
    }
}

pub const MOVE_USAGE: &str = "MOVE <w|a|s|d> [steps]";

/// Rectangle centred on `position` where the player starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Homebase {
    pub position: Position,
    pub width: f64,
    pub height: f64,
}

impl Default for Homebase {
    fn default() -> Self {
        Homebase {
            position: Position::default(),
            width: 80.0,
            height: 80.0,
        }
    }
}

impl Homebase {
    /// Edges count as inside.
    pub fn contains(&self, point: Position) -> bool {
        (point.x - self.position.x).abs() <= self.width / 2.0
            && (point.z - self.position.z).abs() <= self.height / 2.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub id: u64,
    pub name: String,
    pub damage: f64,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub id: u64,
    pub name: String,
    pub species: String,
    pub hp: u32,
    pub level: u32,
    pub position: Position,
    pub aggression: String,
    /// 0-based boss sprite index.
    pub boss_index: u32,
}

impl Creature {
    /// 1-based boss tier.
    pub fn tier(&self) -> u32 {
        self.boss_index + 1
    }
}

/// Tables the terminal can write to and read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Weapons,
    Creatures,
}

impl Table {
    pub fn from_name(name: &str) -> Result<Table> {
        match name {
            "weapons" => Ok(Table::Weapons),
            "creatures" => Ok(Table::Creatures),
            other => Err(SqlWorldError::UnknownTable(other.to_string())),
        }
    }
}

/// An entity created by an INSERT.
#[derive(Debug, Clone, PartialEq)]
pub enum Spawned {
    Weapon(Weapon),
    Creature(Creature),
}

impl fmt::Display for Spawned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Spawned::Weapon(w) => write!(
                f,
                "OK: Inserted weapon \"{}\" (damage={}).",
                w.name,
                format_number(w.damage)
            ),
            Spawned::Creature(c) => write!(f, "OK: Inserted {} (HP={}).", c.name, c.hp),
        }
    }
}
