//! Len - fencer who trades a turn for a parry stance and answers with a riposte

use crate::character::Character;
use crate::combatant::{AttackReport, Player};
use crate::random::{round_damage, RandomSource};
use crate::weapon::Weapon;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LenConfig {
    pub name: String,
    pub max_health: i32,
    pub base_damage: i32,
    pub parry_chance: f64,
    /// Chance to riposte on the turn after entering the stance
    pub riposte_chance: f64,
    pub riposte_multiplier: f64,
    pub precise_chance: f64,
    pub imprecise_multiplier: f64,
}

impl Default for LenConfig {
    fn default() -> Self {
        LenConfig {
            name: "Len".to_string(),
            max_health: 65,
            // 14 base + 2 saber bonus
            base_damage: 16,
            parry_chance: 0.25,
            riposte_chance: 0.4,
            riposte_multiplier: 2.0,
            precise_chance: 0.8,
            imprecise_multiplier: 0.7,
        }
    }
}

impl LenConfig {
    pub fn calculate_damage(&self, base_damage: i32, rng: &mut impl RandomSource) -> i32 {
        let damage = if rng.chance(self.precise_chance) {
            base_damage
        } else {
            round_damage(base_damage as f64 * self.imprecise_multiplier)
        };
        damage.max(1)
    }
}

/// Len's config plus the parry stance carried between turns
#[derive(Debug, Clone, PartialEq)]
pub struct LenPolicy {
    config: LenConfig,
    parrying: bool,
}

impl LenPolicy {
    pub fn new(config: LenConfig) -> Self {
        LenPolicy {
            config,
            parrying: false,
        }
    }

    pub fn config(&self) -> &LenConfig {
        &self.config
    }

    pub fn is_parrying(&self) -> bool {
        self.parrying
    }

    pub fn attack(
        &mut self,
        me: &Character,
        weapon: Option<&mut Weapon>,
        player: &mut Player,
        rng: &mut impl RandomSource,
    ) -> AttackReport {
        let mut report = AttackReport::new(me.name());
        let armed = weapon.is_some();
        let parry_roll = rng.chance(self.config.parry_chance);

        if !self.parrying && parry_roll {
            self.parrying = true;
            if let Some(Weapon::FencingSaber(saber)) = weapon {
                saber.attempt_parry();
            }
            tracing::debug!("len entered parry stance");
            report.push_line(format!("{} assumes a defensive stance, ready to parry!", me.name()));
            return report;
        }

        let blade = if armed {
            "his fencing sword"
        } else {
            "his claws"
        };

        let riposte = self.parrying && rng.chance(self.config.riposte_chance);
        if riposte {
            let strike = self.config.calculate_damage(me.base_damage(), rng);
            let damage = round_damage(strike as f64 * self.config.riposte_multiplier).max(1);
            let taken = player.take_damage(damage);
            report.record_strike(damage, taken);
            report.push_line(format!("You take {} damage!", taken));
            report.push_line(format!(
                "{} executes a perfect riposte with {} for {} damage!",
                me.name(),
                blade,
                damage
            ));
        } else {
            let damage = self.config.calculate_damage(me.base_damage(), rng);
            let taken = player.take_damage(damage);
            report.record_strike(damage, taken);
            report.push_line(format!("You take {} damage!", taken));
            let verb = if rng.chance(0.5) { "lunges" } else { "feints" };
            report.push_line(format!("{} {} with {} for {} damage!", me.name(), verb, blade, damage));
        }
        tracing::debug!(riposte, damage = report.damage_dealt, "len attack");

        self.parrying = false;
        report
    }

    /// Forget any stance, for a fresh spawn
    pub fn reset(&mut self) {
        self.parrying = false;
    }
}
