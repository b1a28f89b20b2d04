use serde::Deserialize;

use crate::error::{Result, SqlWorldError};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the square around the player where entities spawn.
    pub spawn_spread: f64,
    pub hp_per_level: u32,
    pub reward_per_level: u32,
    /// Number of boss sprites; boss indices are clamped into `0..boss_tiers`.
    pub boss_tiers: u32,
    /// Distance the player covers per MOVE step.
    pub player_speed: f64,
    /// Fixed seed for spawn offsets. Entropy-seeded when absent.
    pub rng_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            spawn_spread: 100.0,
            hp_per_level: 20,
            reward_per_level: 10,
            boss_tiers: 4,
            player_speed: 2.0,
            rng_seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let cfg: GameConfig = serde_yaml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.boss_tiers == 0 {
            return Err(SqlWorldError::Config("boss_tiers must be at least 1".to_string()));
        }
        if !self.spawn_spread.is_finite() || self.spawn_spread < 0.0 {
            return Err(SqlWorldError::Config(
                "spawn_spread must be a non-negative number".to_string(),
            ));
        }
        if !self.player_speed.is_finite() || self.player_speed <= 0.0 {
            return Err(SqlWorldError::Config(
                "player_speed must be a positive number".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_fields_use_defaults() {
        let cfg = GameConfig::from_yaml("rng_seed: 7\n").unwrap();
        assert_eq!(cfg.rng_seed, Some(7));
        assert_eq!(cfg.hp_per_level, 20);
        assert_eq!(cfg.boss_tiers, 4);
        assert_eq!(cfg.player_speed, 2.0);
    }

    #[test]
    fn from_file_test() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "spawn_spread: 40.0\nreward_per_level: 25").unwrap();
        let cfg = GameConfig::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(cfg.spawn_spread, 40.0);
        assert_eq!(cfg.reward_per_level, 25);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            GameConfig::from_yaml("boss_tiers: 0"),
            Err(SqlWorldError::Config(_))
        ));
        assert!(matches!(
            GameConfig::from_yaml("spawn_spread: [1, 2]"),
            Err(SqlWorldError::Config(_))
        ));
        assert!(matches!(
            GameConfig::from_yaml("player_speed: 0"),
            Err(SqlWorldError::Config(_))
        ));
        assert!(matches!(
            GameConfig::from_file("/nonexistent/sqlworld.yaml"),
            Err(SqlWorldError::Io(_))
        ));
    }
}
