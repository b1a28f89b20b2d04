//! Boss challenges: a prompt plus a rule that judges one typed statement.
//!
//! Rules are looked up by boss tier in a [`RuleBook`]. A tier without its own
//! rule uses the closest lower tier, so every tier from 4 upwards shares the
//! tier-4 rule unless a new one is registered.

pub mod arena;
pub mod rules;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::Result;
use crate::world::entities::Creature;

/// 1-based boss tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tier(u32);

impl Tier {
    pub fn new(tier: u32) -> Self {
        Tier(tier.max(1))
    }

    pub fn from_boss_index(index: u32) -> Self {
        Tier(index.saturating_add(1))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The parts of a creature a rule may look at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opponent {
    pub tier: Tier,
    pub level: u32,
}

impl From<&Creature> for Opponent {
    fn from(creature: &Creature) -> Self {
        Opponent {
            tier: Tier::from_boss_index(creature.boss_index),
            level: creature.level,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    Failed { error: String },
}

impl Verdict {
    pub fn fail(error: impl Into<String>) -> Self {
        Verdict::Failed {
            error: error.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Verdict::Passed)
    }
}

pub type PromptFn = fn(&Opponent) -> String;
/// Parse errors returned through `Err` are turned into a failed verdict.
pub type CheckFn = fn(&Opponent, &str) -> Result<Verdict>;

#[derive(Clone, Copy)]
pub struct ChallengeRule {
    pub prompt: PromptFn,
    pub check: CheckFn,
}

impl fmt::Debug for ChallengeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChallengeRule").finish_non_exhaustive()
    }
}

/// A generated challenge for one opponent.
#[derive(Debug, Clone)]
pub struct ChallengeSpec {
    pub opponent: Opponent,
    pub prompt: String,
    rule: ChallengeRule,
}

impl ChallengeSpec {
    pub fn validate(&self, input: &str) -> Verdict {
        match (self.rule.check)(&self.opponent, input) {
            Ok(verdict) => verdict,
            Err(err) => Verdict::fail(err.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RuleBook {
    rules: BTreeMap<u32, ChallengeRule>,
}

impl Default for RuleBook {
    fn default() -> Self {
        let mut book = RuleBook {
            rules: BTreeMap::new(),
        };
        book.register(Tier(1), rules::WEAPON_ARSENAL);
        book.register(Tier(2), rules::SUMMON_KIN);
        book.register(Tier(3), rules::RECITE_SELECT);
        book.register(Tier(4), rules::WEAPON_OR_KIN);
        book
    }
}

impl RuleBook {
    /// Adds or replaces the rule of `tier`.
    pub fn register(&mut self, tier: Tier, rule: ChallengeRule) {
        self.rules.insert(tier.get(), rule);
    }

    pub fn rule_for(&self, tier: Tier) -> ChallengeRule {
        self.rules
            .range(..=tier.get())
            .next_back()
            .or_else(|| self.rules.iter().next())
            .map(|(_, rule)| *rule)
            .unwrap_or(rules::WEAPON_ARSENAL)
    }

    pub fn challenge_for(&self, opponent: Opponent) -> ChallengeSpec {
        let rule = self.rule_for(opponent.tier);
        ChallengeSpec {
            opponent,
            prompt: (rule.prompt)(&opponent),
            rule,
        }
    }
}

/// Builds the challenge of a creature from the built-in tiers.
pub fn generate_challenge(creature: &Creature) -> ChallengeSpec {
    RuleBook::default().challenge_for(Opponent::from(creature))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::entities::Position;

    fn boss(boss_index: u32, level: u32) -> Creature {
        Creature {
            id: 1,
            name: format!("Boss {} (Level {})", boss_index + 1, level),
            species: "boss".to_string(),
            hp: level * 20,
            level,
            position: Position::default(),
            aggression: "hostile".to_string(),
            boss_index,
        }
    }

    #[test]
    fn tier_is_one_based() {
        assert_eq!(Tier::from_boss_index(0).get(), 1);
        assert_eq!(Tier::new(0).get(), 1);
        let spec = generate_challenge(&boss(2, 4));
        assert_eq!(spec.opponent.tier, Tier::new(3));
        assert_eq!(spec.opponent.level, 4);
    }

    #[test]
    fn higher_tiers_fall_back_to_tier_four() {
        let book = RuleBook::default();
        let rule = book.rule_for(Tier::new(7));
        assert_eq!(rule.check as usize, rules::WEAPON_OR_KIN.check as usize);
        assert_eq!(rule.prompt as usize, rules::WEAPON_OR_KIN.prompt as usize);

        let spec = book.challenge_for(Opponent {
            tier: Tier::new(7),
            level: 2,
        });
        assert!(spec.prompt.starts_with("Boss 7 (Level 2) is the final guard"));
        assert!(spec.validate("INSERT INTO weapons (name, damage) VALUES ('Maul', 4)").is_ok());
        assert!(!spec.validate("SELECT * FROM creatures").is_ok());
    }

    #[test]
    fn registered_tier_overrides_fallback() {
        fn prompt(_: &Opponent) -> String {
            "say hello".to_string()
        }
        fn check(_: &Opponent, input: &str) -> Result<Verdict> {
            Ok(if input == "hello" {
                Verdict::Passed
            } else {
                Verdict::fail("say hello")
            })
        }

        let mut book = RuleBook::default();
        book.register(Tier::new(5), ChallengeRule { prompt, check });
        let spec = book.challenge_for(Opponent {
            tier: Tier::new(6),
            level: 1,
        });
        assert_eq!(spec.prompt, "say hello");
        assert!(spec.validate("hello").is_ok());
        assert!(!spec.validate("bye").is_ok());
    }

    #[test]
    fn parse_errors_become_failed_verdicts() {
        let spec = generate_challenge(&boss(0, 5));
        assert_eq!(
            spec.validate("INSERT INTO weapons (a, b) VALUES (1, 2, 3)"),
            Verdict::fail("value count does not align with columns (3 values for 2 columns)")
        );
        assert_eq!(
            spec.validate("DROP TABLE weapons"),
            Verdict::fail("Unsupported command. Only INSERT and SELECT statements are supported.")
        );
    }
}
