//! Kaito - swordsman who sometimes strikes twice

use crate::character::Character;
use crate::combatant::{AttackReport, Player};
use crate::random::{round_damage, RandomSource};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KaitoConfig {
    pub name: String,
    pub max_health: i32,
    pub base_damage: i32,
    pub double_strike_chance: f64,
    /// Chance a strike lands clean at full base damage
    pub clean_hit_chance: f64,
    /// Damage factor for a strike that is not clean
    pub glancing_multiplier: f64,
}

impl Default for KaitoConfig {
    fn default() -> Self {
        KaitoConfig {
            name: "Kaito".to_string(),
            max_health: 70,
            // 12 base + 3 sword bonus
            base_damage: 15,
            double_strike_chance: 0.2,
            clean_hit_chance: 0.7,
            glancing_multiplier: 0.8,
        }
    }
}

impl KaitoConfig {
    pub fn calculate_damage(&self, base_damage: i32, rng: &mut impl RandomSource) -> i32 {
        let damage = if rng.chance(self.clean_hit_chance) {
            base_damage
        } else {
            round_damage(base_damage as f64 * self.glancing_multiplier)
        };
        damage.max(1)
    }

    /// One or two strikes, each rolled and applied on its own
    pub fn attack(
        &self,
        me: &Character,
        armed: bool,
        player: &mut Player,
        rng: &mut impl RandomSource,
    ) -> AttackReport {
        let double_strike = rng.chance(self.double_strike_chance);
        let strike_count = if double_strike { 2 } else { 1 };

        let mut report = AttackReport::new(me.name());
        for _ in 0..strike_count {
            let damage = self.calculate_damage(me.base_damage(), rng);
            let taken = player.take_damage(damage);
            report.record_strike(damage, taken);
            report.push_line(format!("You take {} damage!", taken));
        }
        tracing::debug!(double_strike, total = report.damage_dealt, "kaito attack");

        let weapon = if armed { "his sword" } else { "his claws" };
        let line = if double_strike {
            format!(
                "{} strikes twice with {} for {} total damage!",
                me.name(),
                weapon,
                report.damage_dealt
            )
        } else {
            format!(
                "{} slashes with {} for {} damage!",
                me.name(),
                weapon,
                report.damage_dealt
            )
        };
        report.push_line(line);

        report
    }
}
