//! Sword - crit or weak-spot strikes, plus a parry roll

use super::percent;
use crate::random::{round_damage, RandomSource};
use serde::{Deserialize, Serialize};

/// Which multiplier a sword strike used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwordOutcome {
    Critical,
    WeakSpot,
    Normal,
}

/// A single rolled sword strike
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwordStrike {
    pub outcome: SwordOutcome,
    pub multiplier: f64,
    pub damage: i32,
}

/// Balanced one-handed sword
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sword {
    pub name: String,
    pub base_damage: i32,
    pub crit_chance: f64,
    pub parry_chance: f64,
    pub crit_multiplier: f64,
    pub weak_spot_multiplier: f64,
    /// Chance to find a weak spot when the strike is not critical
    pub weak_spot_chance: f64,
    #[serde(skip)]
    parrying: bool,
}

impl Default for Sword {
    fn default() -> Self {
        Sword {
            name: "Steel Sword".to_string(),
            base_damage: 15,
            crit_chance: 0.15,
            parry_chance: 0.2,
            crit_multiplier: 2.0,
            weak_spot_multiplier: 1.5,
            weak_spot_chance: 0.3,
            parrying: false,
        }
    }
}

impl Sword {
    /// Roll a strike. Both chances are drawn every time; a critical wins over
    /// a weak spot.
    pub fn roll(&self, rng: &mut impl RandomSource) -> SwordStrike {
        let is_critical = rng.chance(self.crit_chance);
        let hit_weak_spot = rng.chance(self.weak_spot_chance);

        let (outcome, multiplier) = if is_critical {
            (SwordOutcome::Critical, self.crit_multiplier)
        } else if hit_weak_spot {
            (SwordOutcome::WeakSpot, self.weak_spot_multiplier)
        } else {
            (SwordOutcome::Normal, 1.0)
        };

        let damage = round_damage(self.base_damage as f64 * multiplier).max(1);
        tracing::debug!(weapon = %self.name, ?outcome, damage, "sword strike");

        SwordStrike {
            outcome,
            multiplier,
            damage,
        }
    }

    pub fn calculate_damage(&self, rng: &mut impl RandomSource) -> i32 {
        self.roll(rng).damage
    }

    /// Roll a parry. The result is latched until the next attempt.
    ///
    /// Nothing in the damage path consults this; it is exposed for callers.
    pub fn attempt_parry(&mut self, rng: &mut impl RandomSource) -> bool {
        self.parrying = rng.chance(self.parry_chance);
        self.parrying
    }

    /// Result of the most recent parry attempt
    pub fn is_parrying(&self) -> bool {
        self.parrying
    }

    pub fn info(&self) -> String {
        format!(
            "{}\nDamage: {}\nCrit: {}% ({}x)\nParry: {}%",
            self.name,
            self.base_damage,
            percent(self.crit_chance),
            self.crit_multiplier,
            percent(self.parry_chance)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;

    #[test]
    fn test_forced_critical_doubles() {
        let sword = Sword::default();
        // crit roll succeeds, weak spot roll is drawn but ignored
        let mut rng = ScriptedRandom::new([0.0, 0.0]);
        let strike = sword.roll(&mut rng);
        assert_eq!(strike.outcome, SwordOutcome::Critical);
        assert_eq!(strike.damage, 30);
        assert_eq!(rng.consumed(), 2);
    }

    #[test]
    fn test_weak_spot_when_not_critical() {
        let sword = Sword::default();
        let mut rng = ScriptedRandom::new([0.5, 0.1]);
        let strike = sword.roll(&mut rng);
        assert_eq!(strike.outcome, SwordOutcome::WeakSpot);
        // 15 * 1.5 = 22.5, ties to even
        assert_eq!(strike.damage, 22);
    }

    #[test]
    fn test_plain_strike() {
        let sword = Sword::default();
        let mut rng = ScriptedRandom::new([0.5, 0.5]);
        assert_eq!(sword.calculate_damage(&mut rng), 15);
    }

    #[test]
    fn test_parry_latches_last_roll() {
        let mut sword = Sword::default();
        let mut rng = ScriptedRandom::new([0.1, 0.9]);
        assert!(sword.attempt_parry(&mut rng));
        assert!(sword.is_parrying());
        assert!(!sword.attempt_parry(&mut rng));
        assert!(!sword.is_parrying());
    }

    #[test]
    fn test_info_lines() {
        let info = Sword::default().info();
        let lines: Vec<&str> = info.lines().collect();
        assert_eq!(lines, vec!["Steel Sword", "Damage: 15", "Crit: 15% (2x)", "Parry: 20%"]);
    }
}
