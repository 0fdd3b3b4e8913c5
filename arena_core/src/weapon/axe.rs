//! Axe - variable damage with stacking crit and cleave

use super::percent;
use crate::random::{round_damage, RandomSource};
use serde::{Deserialize, Serialize};

/// Multiplier applied by a cleaving blow
pub const CLEAVE_MULTIPLIER: f64 = 1.3;

/// A single rolled axe blow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxeStrike {
    /// Base damage plus variance, before crit and cleave
    pub rolled: i32,
    pub critical: bool,
    pub cleave: bool,
    pub damage: i32,
}

/// Heavy two-handed axe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Axe {
    pub name: String,
    pub base_damage: i32,
    pub crit_chance: f64,
    /// Fraction of defense the wielder may ignore
    pub armor_penetration: f64,
    pub cleave_chance: f64,
    pub min_variance: i32,
    pub max_variance: i32,
}

impl Default for Axe {
    fn default() -> Self {
        Axe {
            name: "Battle Axe".to_string(),
            base_damage: 20,
            crit_chance: 0.1,
            armor_penetration: 0.4,
            cleave_chance: 0.25,
            min_variance: -3,
            max_variance: 5,
        }
    }
}

impl Axe {
    /// Roll a blow: variance, then an independent crit (x2), then an
    /// independent cleave (x1.3) that compounds with the crit.
    pub fn roll(&self, rng: &mut impl RandomSource) -> AxeStrike {
        let rolled = self
            .base_damage
            .saturating_add(rng.range_inclusive(self.min_variance, self.max_variance));
        let mut damage = rolled;

        let critical = rng.chance(self.crit_chance);
        if critical {
            damage = damage.saturating_mul(2);
        }

        let cleave = rng.chance(self.cleave_chance);
        if cleave {
            damage = round_damage(damage as f64 * CLEAVE_MULTIPLIER);
        }

        let damage = damage.max(1);
        tracing::debug!(weapon = %self.name, rolled, critical, cleave, damage, "axe strike");

        AxeStrike {
            rolled,
            critical,
            cleave,
            damage,
        }
    }

    pub fn calculate_damage(&self, rng: &mut impl RandomSource) -> i32 {
        self.roll(rng).damage
    }

    pub fn armor_penetration(&self) -> f64 {
        self.armor_penetration
    }

    pub fn info(&self) -> String {
        format!(
            "{}\nDamage: {} ({} to +{})\nCrit: {}% (2x)\nArmor Pen: {}%\nCleave: {}% (+30%)",
            self.name,
            self.base_damage,
            self.min_variance,
            self.max_variance,
            percent(self.crit_chance),
            percent(self.armor_penetration),
            percent(self.cleave_chance)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;
    use rand::SeedableRng;

    #[test]
    fn test_variance_extremes() {
        let axe = Axe::default();
        let mut low = ScriptedRandom::new([0.0, 0.9, 0.9]);
        assert_eq!(axe.calculate_damage(&mut low), 17);

        let mut high = ScriptedRandom::new([0.999, 0.9, 0.9]);
        assert_eq!(axe.calculate_damage(&mut high), 25);
    }

    #[test]
    fn test_crit_and_cleave_compound() {
        let axe = Axe::default();
        // variance offset 3 -> +0, crit, cleave: 20 * 2 = 40 -> 52
        let mut rng = ScriptedRandom::new([3.5 / 9.0, 0.0, 0.0]);
        let strike = axe.roll(&mut rng);
        assert_eq!(strike.rolled, 20);
        assert!(strike.critical);
        assert!(strike.cleave);
        assert_eq!(strike.damage, 52);
    }

    #[test]
    fn test_cleave_only() {
        let axe = Axe::default();
        let mut rng = ScriptedRandom::new([3.5 / 9.0, 0.5, 0.1]);
        // 20 * 1.3 = 26
        assert_eq!(axe.calculate_damage(&mut rng), 26);
    }

    #[test]
    fn test_floor_at_one() {
        let axe = Axe {
            base_damage: 1,
            min_variance: -10,
            max_variance: -10,
            ..Default::default()
        };
        let mut rng = ScriptedRandom::new([]);
        assert_eq!(axe.calculate_damage(&mut rng), 1);
    }

    #[test]
    fn test_huge_base_saturates() {
        let axe = Axe {
            base_damage: i32::MAX,
            crit_chance: 1.0,
            cleave_chance: 1.0,
            ..Default::default()
        };
        let mut rng = ScriptedRandom::new([0.999, 0.0, 0.0]);
        let strike = axe.roll(&mut rng);
        assert_eq!(strike.rolled, i32::MAX);
        assert_eq!(strike.damage, i32::MAX);
    }

    #[test]
    fn test_plain_rolls_stay_in_range() {
        let axe = Axe {
            crit_chance: 0.0,
            cleave_chance: 0.0,
            ..Default::default()
        };
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let damage = axe.calculate_damage(&mut rng);
            assert!((17..=25).contains(&damage), "out of range: {}", damage);
        }
    }

    #[test]
    fn test_info_lines() {
        let info = Axe::default().info();
        assert!(info.starts_with("Battle Axe\n"));
        assert!(info.contains("Damage: 20 (-3 to +5)"));
        assert!(info.contains("Armor Pen: 40%"));
        assert!(info.contains("Cleave: 25% (+30%)"));
    }
}
