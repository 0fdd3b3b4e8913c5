//! Player - the hero: fixed strike, toggleable shield

use super::{AttackReport, Enemy};
use crate::character::{Character, MAX_DEFENSE_MODIFIER};
use crate::random::RandomSource;
use serde::{Deserialize, Serialize};

/// Player tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_max_health")]
    pub max_health: i32,
    #[serde(default = "default_base_damage")]
    pub base_damage: i32,
    /// Chance the shield breaks each time the player attacks with it up
    #[serde(default = "default_shield_break_chance")]
    pub shield_break_chance: f64,
    /// Percent of incoming damage the shield absorbs
    #[serde(default = "default_shield_defense_bonus")]
    pub shield_defense_bonus: i32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            name: default_name(),
            max_health: default_max_health(),
            base_damage: default_base_damage(),
            shield_break_chance: default_shield_break_chance(),
            shield_defense_bonus: default_shield_defense_bonus(),
        }
    }
}

fn default_name() -> String {
    "Hero".to_string()
}
fn default_max_health() -> i32 {
    200
}
fn default_base_damage() -> i32 {
    20
}
fn default_shield_break_chance() -> f64 {
    0.3
}
fn default_shield_defense_bonus() -> i32 {
    50
}

/// The player-controlled combatant
#[derive(Debug, Clone)]
pub struct Player {
    character: Character,
    shield_active: bool,
    config: PlayerConfig,
}

impl Player {
    pub fn new(config: &PlayerConfig) -> Self {
        Player {
            character: Character::new(config.name.clone(), config.max_health, config.base_damage),
            shield_active: false,
            config: config.clone(),
        }
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn character_mut(&mut self) -> &mut Character {
        &mut self.character
    }

    pub fn name(&self) -> &str {
        self.character.name()
    }

    pub fn shield_active(&self) -> bool {
        self.shield_active
    }

    /// Defense modifier while the shield is up
    pub fn shielded_modifier(&self) -> f64 {
        1.0 - self.config.shield_defense_bonus as f64 / 100.0
    }

    /// Raise or lower the shield; returns the battle-log line
    pub fn toggle_shield(&mut self) -> &'static str {
        self.shield_active = !self.shield_active;
        let modifier = if self.shield_active {
            self.shielded_modifier()
        } else {
            MAX_DEFENSE_MODIFIER
        };
        self.character.set_defense_modifier(modifier);
        tracing::debug!(shield = self.shield_active, modifier, "shield toggled");

        if self.shield_active {
            "Shield activated!"
        } else {
            "Shield deactivated!"
        }
    }

    /// Back to full health with the shield down
    pub fn reset(&mut self) {
        self.character.restore_full_health();
        self.shield_active = false;
        self.character.set_defense_modifier(MAX_DEFENSE_MODIFIER);
    }

    pub fn calculate_damage(&self) -> i32 {
        self.character.calculate_damage()
    }

    /// Strike the enemy for base damage. A raised shield may break afterwards.
    pub fn attack(&mut self, enemy: &mut Enemy, rng: &mut impl RandomSource) -> AttackReport {
        let mut report = AttackReport::new(self.name());
        let damage = self.calculate_damage();
        let taken = enemy.take_damage(damage);
        report.record_strike(damage, taken);
        report.push_line(format!("You attack for {} damage!", damage));

        if self.shield_active && rng.chance(self.config.shield_break_chance) {
            self.shield_active = false;
            self.character.set_defense_modifier(MAX_DEFENSE_MODIFIER);
            tracing::debug!("player shield broke");
            report.push_line("Your shield broke!");
        }

        report
    }

    /// Apply incoming damage through the current defense; returns what landed
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        self.character.take_damage(amount)
    }

    pub fn is_dead(&self) -> bool {
        self.character.is_dead()
    }

    pub fn stats_summary(&self) -> String {
        format!(
            "{}\nHP: {}/{}\nDamage: {}\nShield: {}",
            self.character.name(),
            self.character.current_health(),
            self.character.max_health(),
            self.character.base_damage(),
            if self.shield_active { "ON" } else { "OFF" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::EnemyKind;
    use crate::config::ArenaConfig;
    use crate::random::ScriptedRandom;

    #[test]
    fn test_shield_scenario() {
        let mut player = Player::new(&PlayerConfig::default());
        assert_eq!(player.take_damage(30), 30);
        assert_eq!(player.character().current_health(), 170);

        assert_eq!(player.toggle_shield(), "Shield activated!");
        assert!((player.character().defense_modifier() - 0.5).abs() < f64::EPSILON);

        assert_eq!(player.take_damage(30), 15);
        assert_eq!(player.character().current_health(), 155);
    }

    #[test]
    fn test_toggle_off_restores_full_exposure() {
        let mut player = Player::new(&PlayerConfig::default());
        player.toggle_shield();
        assert_eq!(player.toggle_shield(), "Shield deactivated!");
        assert!(!player.shield_active());
        assert!((player.character().defense_modifier() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_attack_hits_enemy_for_base_damage() {
        let config = ArenaConfig::default();
        let mut player = Player::new(&config.player);
        let mut enemy = crate::combatant::Enemy::spawn(EnemyKind::Kaito, &config);
        let mut rng = ScriptedRandom::new([]);

        let report = player.attack(&mut enemy, &mut rng);
        assert_eq!(report.damage_dealt, 20);
        assert_eq!(enemy.character().current_health(), 50);
        assert_eq!(report.lines, vec!["You attack for 20 damage!"]);
        // no shield, no break roll
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn test_shield_can_break_on_attack() {
        let config = ArenaConfig::default();
        let mut player = Player::new(&config.player);
        let mut enemy = crate::combatant::Enemy::spawn(EnemyKind::Rin, &config);
        player.toggle_shield();

        let mut rng = ScriptedRandom::new([0.1]);
        let report = player.attack(&mut enemy, &mut rng);
        assert!(!player.shield_active());
        assert!((player.character().defense_modifier() - 1.0).abs() < f64::EPSILON);
        assert_eq!(report.lines.last().map(String::as_str), Some("Your shield broke!"));
    }

    #[test]
    fn test_reset_clears_shield_and_heals() {
        let mut player = Player::new(&PlayerConfig::default());
        player.take_damage(300);
        player.toggle_shield();
        assert!(player.is_dead());
        assert!(player.shield_active());

        player.reset();
        assert!(!player.is_dead());
        assert!(!player.shield_active());
        assert_eq!(player.character().current_health(), 200);
        assert!((player.character().defense_modifier() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stats_summary() {
        let mut player = Player::new(&PlayerConfig::default());
        player.toggle_shield();
        assert_eq!(player.stats_summary(), "Hero\nHP: 200/200\nDamage: 20\nShield: ON");
    }
}
