pub mod entities;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GameConfig;
use crate::error::{Result, SqlWorldError};
use crate::sql::data_value::format_number;
use crate::sql::row::Row;
use crate::sql::statements::{insert::InsertStatement, select::SelectStatement};

use self::entities::{Creature, Direction, Homebase, Player, Position, Spawned, Table, Weapon};

pub const MAX_MOVE_STEPS: u32 = 1_000;

/// Game state the terminal and the arena operate on.
pub struct World {
    config: GameConfig,
    rng: StdRng,
    player: Player,
    homebase: Homebase,
    weapons: Vec<Weapon>,
    creatures: Vec<Creature>,
    next_id: u64,
}

impl World {
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let homebase = Homebase::default();
        let player = Player {
            position: homebase.position,
            speed: config.player_speed,
            ..Player::default()
        };
        World {
            config,
            rng,
            player,
            homebase,
            weapons: Vec::new(),
            creatures: Vec::new(),
            next_id: 1,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn homebase(&self) -> &Homebase {
        &self.homebase
    }

    pub fn player_at_homebase(&self) -> bool {
        self.homebase.contains(self.player.position)
    }

    /// Walks the player `steps` times (at most `MAX_MOVE_STEPS`) in `direction`
    /// and returns where it ends up.
    pub fn move_player(&mut self, direction: Direction, steps: u32) -> Position {
        let steps = steps.min(MAX_MOVE_STEPS);
        let player = self.player_mut();
        for _ in 0..steps {
            player.step(direction);
        }
        debug!("move_player: {:?} x{} -> {}", direction, steps, player.position);
        player.position
    }

    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    pub fn creature(&self, id: u64) -> Option<&Creature> {
        self.creatures.iter().find(|c| c.id == id)
    }

    /// Spawns one entity per row. The table is resolved before anything is
    /// spawned, so an unknown table leaves the world untouched.
    pub fn apply_insert(&mut self, stmt: &InsertStatement) -> Result<Vec<Spawned>> {
        let table = Table::from_name(&stmt.table)?;
        let spawned = stmt
            .rows
            .iter()
            .map(|row| match table {
                Table::Weapons => Spawned::Weapon(self.spawn_weapon(row)),
                Table::Creatures => Spawned::Creature(self.spawn_creature(row)),
            })
            .collect::<Vec<_>>();
        info!("apply_insert: {} row(s) into {}", spawned.len(), stmt.table);
        Ok(spawned)
    }

    pub fn spawn_weapon(&mut self, row: &Row) -> Weapon {
        let weapon = Weapon {
            id: self.allocate_id(),
            name: text_or(row, "name", "Unknown Weapon"),
            damage: row.number_or("damage", 0.0),
            position: self.near_player(),
        };
        debug!("spawn_weapon: {:?}", weapon);
        self.weapons.push(weapon.clone());
        weapon
    }

    pub fn spawn_creature(&mut self, row: &Row) -> Creature {
        let tiers = self.config.boss_tiers.max(1);
        let boss_index = match row.number("boss") {
            Some(boss) => (boss.floor() - 1.0).clamp(0.0, (tiers - 1) as f64) as u32,
            None => (self.creatures.len() as u32) % tiers,
        };
        let level = row.number("level").map_or(1.0, |l| l.floor().max(1.0)) as u32;
        let hp = level.saturating_mul(self.config.hp_per_level);

        let fallback = self.near_player();
        let position = Position::new(
            row.number("x").unwrap_or(fallback.x),
            row.number("z").unwrap_or(fallback.z),
        );

        let creature = Creature {
            id: self.allocate_id(),
            name: format!("Boss {} (Level {})", boss_index + 1, level),
            species: "boss".to_string(),
            hp,
            level,
            position,
            aggression: text_or(row, "aggression", "hostile"),
            boss_index,
        };
        debug!("spawn_creature: {:?}", creature);
        self.creatures.push(creature.clone());
        creature
    }

    /// Lists every entity of the selected table, one line each.
    pub fn select(&self, stmt: &SelectStatement) -> Result<Vec<String>> {
        let lines: Vec<String> = match Table::from_name(&stmt.table)? {
            Table::Weapons => self
                .weapons
                .iter()
                .map(|w| {
                    format!(
                        "#{} {} (damage={}) at {}",
                        w.id,
                        w.name,
                        format_number(w.damage),
                        w.position
                    )
                })
                .collect(),
            Table::Creatures => self
                .creatures
                .iter()
                .map(|c| {
                    format!(
                        "#{} {} HP={} {} at {}",
                        c.id, c.name, c.hp, c.aggression, c.position
                    )
                })
                .collect(),
        };
        if lines.is_empty() {
            return Ok(vec!["(no rows)".to_string()]);
        }
        Ok(lines)
    }

    pub fn remove_creature(&mut self, id: u64) -> Result<Creature> {
        let idx = self
            .creatures
            .iter()
            .position(|c| c.id == id)
            .ok_or(SqlWorldError::NoSuchCreature(id))?;
        Ok(self.creatures.remove(idx))
    }

    pub fn award(&mut self, points: u64) {
        self.player.score = self.player.score.saturating_add(points);
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn near_player(&mut self) -> Position {
        let spread = self.config.spawn_spread;
        let dx = (self.rng.gen::<f64>() - 0.5) * spread;
        let dz = (self.rng.gen::<f64>() - 0.5) * spread;
        Position::new(self.player.position.x + dx, self.player.position.z + dz)
    }
}

/// Display text of a column, or `default` when absent or empty.
fn text_or(row: &Row, column: &str, default: &str) -> String {
    row.get(column)
        .map(|v| v.to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}
