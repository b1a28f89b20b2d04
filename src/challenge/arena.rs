use log::{debug, info};

use crate::error::{Result, SqlWorldError};
use crate::world::entities::Creature;
use crate::world::World;

use super::{ChallengeSpec, Opponent, RuleBook, Verdict};

#[derive(Debug, Clone)]
pub struct ActiveChallenge {
    pub creature_id: u64,
    pub spec: ChallengeSpec,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttemptOutcome {
    Defeated { creature: Creature, reward: u64 },
    Retry { error: String },
}

/// Tracks which boss the player is currently fighting.
#[derive(Debug, Default)]
pub struct Arena {
    book: RuleBook,
    active: Option<ActiveChallenge>,
}

impl Arena {
    pub fn new(book: RuleBook) -> Self {
        Arena { book, active: None }
    }

    pub fn active(&self) -> Option<&ActiveChallenge> {
        self.active.as_ref()
    }

    /// Starts the challenge of `creature_id`, replacing any active one.
    pub fn engage(&mut self, world: &World, creature_id: u64) -> Result<&ChallengeSpec> {
        let creature = world
            .creature(creature_id)
            .ok_or(SqlWorldError::NoSuchCreature(creature_id))?;
        let spec = self.book.challenge_for(Opponent::from(creature));
        info!("engage: creature {} tier {}", creature_id, spec.opponent.tier);
        let active = self.active.insert(ActiveChallenge { creature_id, spec });
        Ok(&active.spec)
    }

    /// Judges one answer. A pass removes the creature and pays
    /// `level * reward_per_level`; a failure keeps the challenge open.
    pub fn attempt(&mut self, world: &mut World, input: &str) -> Result<AttemptOutcome> {
        let active = self.active.as_ref().ok_or(SqlWorldError::NoActiveChallenge)?;
        match active.spec.validate(input) {
            Verdict::Failed { error } => {
                debug!("attempt: creature {} rejected: {}", active.creature_id, error);
                Ok(AttemptOutcome::Retry { error })
            }
            Verdict::Passed => {
                let creature_id = active.creature_id;
                self.active = None;
                let creature = world.remove_creature(creature_id)?;
                let reward =
                    u64::from(creature.level) * u64::from(world.config().reward_per_level);
                world.award(reward);
                info!("attempt: creature {} defeated, reward {}", creature_id, reward);
                Ok(AttemptOutcome::Defeated { creature, reward })
            }
        }
    }

    /// Abandons the active challenge and returns the creature id it was for.
    pub fn retreat(&mut self) -> Option<u64> {
        self.active.take().map(|a| a.creature_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sql::{data_value::DataValue, row::Row};

    fn world_with_boss(boss: f64, level: f64) -> (World, u64) {
        let mut world = World::new(GameConfig {
            rng_seed: Some(1),
            ..GameConfig::default()
        });
        let mut row = Row::new();
        row.insert("boss", DataValue::Number(boss));
        row.insert("level", DataValue::Number(level));
        let id = world.spawn_creature(&row).id;
        (world, id)
    }

    #[test]
    fn failed_attempt_keeps_challenge() {
        let (mut world, id) = world_with_boss(1.0, 5.0);
        let mut arena = Arena::default();
        arena.engage(&world, id).unwrap();

        let outcome = arena
            .attempt(&mut world, "INSERT INTO weapons (name,damage) VALUES ('A',1),('B',1);")
            .unwrap();
        assert!(matches!(outcome, AttemptOutcome::Retry { .. }));
        assert_eq!(arena.active().map(|a| a.creature_id), Some(id));
        assert!(world.creature(id).is_some());
    }

    #[test]
    fn passing_attempt_removes_creature_and_rewards() {
        let (mut world, id) = world_with_boss(3.0, 4.0);
        let mut arena = Arena::default();
        let prompt = arena.engage(&world, id).unwrap().prompt.clone();
        assert!(prompt.contains("SELECT * FROM creatures;"));

        let outcome = arena.attempt(&mut world, "SELECT * FROM creatures;").unwrap();
        match outcome {
            AttemptOutcome::Defeated { creature, reward } => {
                assert_eq!(creature.id, id);
                assert_eq!(reward, 40);
            }
            other => panic!("expected defeat, got {:?}", other),
        }
        assert!(arena.active().is_none());
        assert!(world.creature(id).is_none());
        assert_eq!(world.player().score, 40);
    }

    #[test]
    fn attempt_without_challenge_fails() {
        let (mut world, _) = world_with_boss(1.0, 1.0);
        let mut arena = Arena::default();
        assert!(matches!(
            arena.attempt(&mut world, "SELECT * FROM creatures"),
            Err(SqlWorldError::NoActiveChallenge)
        ));
    }

    #[test]
    fn engage_unknown_creature_fails() {
        let (world, _) = world_with_boss(1.0, 1.0);
        let mut arena = Arena::default();
        assert!(matches!(
            arena.engage(&world, 99),
            Err(SqlWorldError::NoSuchCreature(99))
        ));
        assert!(arena.active().is_none());
    }

    #[test]
    fn retreat_clears_challenge() {
        let (world, id) = world_with_boss(2.0, 1.0);
        let mut arena = Arena::default();
        arena.engage(&world, id).unwrap();
        assert_eq!(arena.retreat(), Some(id));
        assert_eq!(arena.retreat(), None);
    }
}
