//! Rin - axe fighter who can smash through defenses but tires herself out

use crate::character::{Character, MAX_DEFENSE_MODIFIER};
use crate::combatant::{AttackReport, Player};
use crate::random::{round_damage, RandomSource};
use crate::weapon::Weapon;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RinConfig {
    pub name: String,
    pub max_health: i32,
    pub base_damage: i32,
    /// Chance a blow lands solid at full base damage
    pub solid_hit_chance: f64,
    /// Damage factor for a blow that is not solid
    pub weak_hit_multiplier: f64,
    pub cleave_chance: f64,
    /// Extra damage fraction added by a cleave
    pub cleave_bonus: f64,
    /// Chance a blow ignores the player's defense
    pub defense_penetration: f64,
    pub stumble_chance: f64,
    /// Base damage factor applied on every stumble
    pub stumble_multiplier: f64,
}

impl Default for RinConfig {
    fn default() -> Self {
        RinConfig {
            name: "Rin".to_string(),
            max_health: 60,
            // 15 base + 5 axe bonus
            base_damage: 20,
            solid_hit_chance: 0.6,
            weak_hit_multiplier: 0.7,
            cleave_chance: 0.35,
            cleave_bonus: 0.3,
            defense_penetration: 0.4,
            stumble_chance: 0.15,
            stumble_multiplier: 0.8,
        }
    }
}

/// Rolled axe blow before it is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RinBlow {
    pub damage: i32,
    pub cleave: bool,
}

impl RinConfig {
    pub fn roll(&self, base_damage: i32, rng: &mut impl RandomSource) -> RinBlow {
        let solid = rng.chance(self.solid_hit_chance);
        let base = if solid {
            base_damage
        } else {
            round_damage(base_damage as f64 * self.weak_hit_multiplier)
        };

        let cleave = rng.chance(self.cleave_chance);
        let damage = if cleave {
            base.saturating_add(round_damage(base as f64 * self.cleave_bonus))
        } else {
            base
        };

        RinBlow {
            damage: damage.max(1),
            cleave,
        }
    }

    pub fn calculate_damage(&self, base_damage: i32, rng: &mut impl RandomSource) -> i32 {
        self.roll(base_damage, rng).damage
    }

    /// Whether stumbles have knocked base damage below its starting value
    pub fn is_stumbling(&self, me: &Character) -> bool {
        me.base_damage() < self.base_damage
    }

    /// One blow; may bypass the player's defense for that blow only, and may
    /// leave Rin with permanently lower base damage.
    pub fn attack(
        &self,
        me: &mut Character,
        weapon: Option<&Weapon>,
        player: &mut Player,
        rng: &mut impl RandomSource,
    ) -> AttackReport {
        let blow = self.roll(me.base_damage(), rng);

        let bypass = rng.chance(self.defense_penetration);

        let taken = if bypass {
            let mut exposed = player.character_mut().override_defense(MAX_DEFENSE_MODIFIER);
            exposed.take_damage(blow.damage)
        } else {
            player.take_damage(blow.damage)
        };
        tracing::debug!(damage = blow.damage, cleave = blow.cleave, bypass, taken, "rin attack");

        let mut report = AttackReport::new(me.name());
        report.record_strike(blow.damage, taken);
        report.push_line(format!("You take {} damage!", taken));

        let armed = weapon.is_some();
        let line = match (bypass, blow.cleave, armed) {
            (true, _, true) => format!(
                "{}'s axe SMASHES through defenses for {} damage!",
                me.name(),
                blow.damage
            ),
            (true, _, false) => format!(
                "{}'s claws SMASH through defenses for {} damage!",
                me.name(),
                blow.damage
            ),
            (false, true, true) => format!(
                "{} delivers a CLEAVING axe blow for {} damage!",
                me.name(),
                blow.damage
            ),
            (false, true, false) => format!(
                "{} delivers a CLEAVING claw blow for {} damage!",
                me.name(),
                blow.damage
            ),
            (false, false, true) => {
                format!("{} swings her axe wildly for {} damage!", me.name(), blow.damage)
            }
            (false, false, false) => {
                format!("{} swings her claws wildly for {} damage!", me.name(), blow.damage)
            }
        };
        report.push_line(line);

        if rng.chance(self.stumble_chance) {
            let weakened = round_damage(me.base_damage() as f64 * self.stumble_multiplier);
            me.set_base_damage(weakened);
            tracing::debug!(base_damage = me.base_damage(), "rin stumbled");
            let load = if armed { "her axe" } else { "her swing" };
            report.push_line(format!("{} stumbles from the weight of {}!", me.name(), load));
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::PlayerConfig;
    use crate::random::ScriptedRandom;
    use crate::weapon::Axe;
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn rin() -> (RinConfig, Character) {
        let config = RinConfig::default();
        let character = Character::new(config.name.clone(), config.max_health, config.base_damage);
        (config, character)
    }

    #[test]
    fn test_bypass_ignores_then_restores_shield() {
        let (config, mut me) = rin();
        let axe = Weapon::from(Axe::default());
        let mut player = Player::new(&PlayerConfig::default());
        player.toggle_shield();

        // solid, no cleave, bypass, no stumble
        let mut rng = ScriptedRandom::new([0.1, 0.9, 0.1, 0.9]);
        let report = config.attack(&mut me, Some(&axe), &mut player, &mut rng);

        assert_eq!(report.damage_taken, 20);
        assert_eq!(player.character().current_health(), 180);
        assert!((player.character().defense_modifier() - 0.5).abs() < f64::EPSILON);
        assert!(player.shield_active());
        assert_eq!(report.lines[1], "Rin's axe SMASHES through defenses for 20 damage!");
    }

    #[test]
    fn test_cleave_without_bypass_uses_defense() {
        let (config, mut me) = rin();
        let axe = Weapon::from(Axe::default());
        let mut player = Player::new(&PlayerConfig::default());
        player.toggle_shield();

        // weak (14), cleave (+4), no bypass, no stumble
        let mut rng = ScriptedRandom::new([0.9, 0.1, 0.9, 0.9]);
        let report = config.attack(&mut me, Some(&axe), &mut player, &mut rng);

        assert_eq!(report.damage_dealt, 18);
        assert_eq!(report.damage_taken, 9);
        assert_eq!(report.lines[1], "Rin delivers a CLEAVING axe blow for 18 damage!");
    }

    #[test]
    fn test_stumble_compounds() {
        let (config, mut me) = rin();
        let mut player = Player::new(&PlayerConfig::default());
        assert!(!config.is_stumbling(&me));

        let mut rng = ScriptedRandom::new([0.1, 0.9, 0.9, 0.0, 0.1, 0.9, 0.9, 0.0]);
        let first = config.attack(&mut me, None, &mut player, &mut rng);
        assert_eq!(me.base_damage(), 16);
        assert_eq!(
            first.lines.last().map(String::as_str),
            Some("Rin stumbles from the weight of her swing!")
        );

        config.attack(&mut me, None, &mut player, &mut rng);
        // round(16 * 0.8) = 13
        assert_eq!(me.base_damage(), 13);
        assert!(config.is_stumbling(&me));
    }

    #[test]
    fn test_bypass_rolls_against_own_penetration() {
        let (config, mut me) = rin();
        let axe = Weapon::from(Axe {
            armor_penetration: 0.0,
            ..Default::default()
        });
        let mut player = Player::new(&PlayerConfig::default());
        player.toggle_shield();

        // the axe's own penetration plays no part in Rin's bypass
        let mut rng = ScriptedRandom::new([0.1, 0.9, 0.05, 0.9]);
        let report = config.attack(&mut me, Some(&axe), &mut player, &mut rng);
        assert_eq!(report.damage_taken, 20);
        assert_eq!(
            report.lines,
            vec![
                "You take 20 damage!",
                "Rin's axe SMASHES through defenses for 20 damage!",
            ]
        );
    }

    #[test]
    fn test_zero_penetration_never_bypasses() {
        let config = RinConfig {
            defense_penetration: 0.0,
            ..Default::default()
        };
        let mut me = Character::new("Rin", config.max_health, config.base_damage);
        let mut player = Player::new(&PlayerConfig::default());
        player.toggle_shield();

        let mut rng = ScriptedRandom::new([0.1, 0.9, 0.0, 0.9]);
        let report = config.attack(&mut me, Some(&Weapon::from(Axe::default())), &mut player, &mut rng);
        assert_eq!(report.damage_taken, 10);
        assert_eq!(report.lines[1], "Rin swings her axe wildly for 20 damage!");
    }

    proptest! {
        #[test]
        fn prop_defense_restored_after_attack(seed in any::<u64>(), shielded in any::<bool>()) {
            let (config, mut me) = rin();
            let axe = Weapon::from(Axe::default());
            let mut player = Player::new(&PlayerConfig::default());
            if shielded {
                player.toggle_shield();
            }
            let before = player.character().defense_modifier();
            let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

            config.attack(&mut me, Some(&axe), &mut player, &mut rng);
            prop_assert_eq!(player.character().defense_modifier(), before);
        }
    }
}
