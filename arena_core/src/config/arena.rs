//! Arena configuration: every combat tunable in one TOML document

use super::ConfigError;
use crate::combatant::{KaitoConfig, LenConfig, PlayerConfig, RinConfig};
use crate::weapon::{Axe, FencingSaber, Sword};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Turn-sequencing rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleRules {
    /// Whether raising or lowering the shield gives the enemy its turn
    #[serde(default = "default_shield_toggle_ends_turn")]
    pub shield_toggle_ends_turn: bool,
}

impl Default for BattleRules {
    fn default() -> Self {
        BattleRules {
            shield_toggle_ends_turn: default_shield_toggle_ends_turn(),
        }
    }
}

fn default_shield_toggle_ends_turn() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArenaConfig {
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub battle: BattleRules,
    #[serde(default)]
    pub sword: Sword,
    #[serde(default)]
    pub axe: Axe,
    #[serde(default)]
    pub saber: FencingSaber,
    #[serde(default)]
    pub kaito: KaitoConfig,
    #[serde(default)]
    pub rin: RinConfig,
    #[serde(default)]
    pub len: LenConfig,
}

impl ArenaConfig {
    /// Reject values the combat math cannot honor
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.player;
        check_health("player", p.max_health)?;
        check_damage("player", p.base_damage)?;
        check_probability("player.shield_break_chance", p.shield_break_chance)?;
        if !(0..=90).contains(&p.shield_defense_bonus) {
            return Err(ConfigError::ValidationError(format!(
                "player.shield_defense_bonus must be within 0..=90, got {}",
                p.shield_defense_bonus
            )));
        }

        let s = &self.sword;
        check_damage("sword", s.base_damage)?;
        check_probability("sword.crit_chance", s.crit_chance)?;
        check_probability("sword.parry_chance", s.parry_chance)?;
        check_probability("sword.weak_spot_chance", s.weak_spot_chance)?;

        let a = &self.axe;
        check_damage("axe", a.base_damage)?;
        check_probability("axe.crit_chance", a.crit_chance)?;
        check_probability("axe.armor_penetration", a.armor_penetration)?;
        check_probability("axe.cleave_chance", a.cleave_chance)?;
        if a.min_variance > a.max_variance {
            return Err(ConfigError::ValidationError(format!(
                "axe variance range is inverted: {} > {}",
                a.min_variance, a.max_variance
            )));
        }

        let f = &self.saber;
        check_damage("saber", f.base_damage)?;
        check_probability("saber.crit_chance", f.crit_chance)?;
        check_probability("saber.weak_spot_chance", f.weak_spot_chance)?;
        check_probability("saber.precision_bonus", f.precision_bonus)?;
        if f.parry_window <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "saber.parry_window must be positive, got {}",
                f.parry_window
            )));
        }

        let k = &self.kaito;
        check_health("kaito", k.max_health)?;
        check_damage("kaito", k.base_damage)?;
        check_probability("kaito.double_strike_chance", k.double_strike_chance)?;
        check_probability("kaito.clean_hit_chance", k.clean_hit_chance)?;

        let r = &self.rin;
        check_health("rin", r.max_health)?;
        check_damage("rin", r.base_damage)?;
        check_probability("rin.solid_hit_chance", r.solid_hit_chance)?;
        check_probability("rin.cleave_chance", r.cleave_chance)?;
        check_probability("rin.defense_penetration", r.defense_penetration)?;
        check_probability("rin.stumble_chance", r.stumble_chance)?;

        let l = &self.len;
        check_health("len", l.max_health)?;
        check_damage("len", l.base_damage)?;
        check_probability("len.parry_chance", l.parry_chance)?;
        check_probability("len.riposte_chance", l.riposte_chance)?;
        check_probability("len.precise_chance", l.precise_chance)?;

        Ok(())
    }
}

fn check_probability(field: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(format!(
            "{} must be within [0, 1], got {}",
            field, value
        )))
    }
}

fn check_health(who: &str, max_health: i32) -> Result<(), ConfigError> {
    if max_health > 0 {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(format!(
            "{}.max_health must be positive, got {}",
            who, max_health
        )))
    }
}

fn check_damage(who: &str, base_damage: i32) -> Result<(), ConfigError> {
    if base_damage >= 0 {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(format!(
            "{}.base_damage must not be negative, got {}",
            who, base_damage
        )))
    }
}

/// Load and validate an arena config from a TOML file
pub fn load_config(path: &Path) -> Result<ArenaConfig, ConfigError> {
    let config: ArenaConfig = super::load_toml(path)?;
    config.validate()?;
    Ok(config)
}

/// Parse and validate an arena config from a TOML string
pub fn parse_config(content: &str) -> Result<ArenaConfig, ConfigError> {
    let config: ArenaConfig = super::parse_toml(content)?;
    config.validate()?;
    Ok(config)
}

/// Get the bundled arena configuration
pub fn default_config() -> ArenaConfig {
    let toml = include_str!("../../config/arena.toml");
    parse_config(toml).unwrap_or_else(|err| {
        tracing::warn!(%err, "bundled arena config rejected, using built-in defaults");
        ArenaConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_matches_defaults() {
        let bundled = default_config();
        assert_eq!(bundled, ArenaConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let toml = r#"
[player]
name = "Aki"
max_health = 150

[battle]
shield_toggle_ends_turn = false

[axe]
cleave_chance = 0.5
"#;

        let config = parse_config(toml).unwrap();
        assert_eq!(config.player.name, "Aki");
        assert_eq!(config.player.max_health, 150);
        assert_eq!(config.player.base_damage, 20);
        assert!(!config.battle.shield_toggle_ends_turn);
        assert!((config.axe.cleave_chance - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.axe.name, "Battle Axe");
        assert_eq!(config.kaito, KaitoConfig::default());
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(parse_config("").unwrap(), ArenaConfig::default());
    }

    #[test]
    fn test_rejects_bad_probability() {
        let err = parse_config("[rin]\nstumble_chance = 1.5\n").unwrap_err();
        match err {
            ConfigError::ValidationError(msg) => assert!(msg.contains("rin.stumble_chance")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_inverted_variance() {
        let err = parse_config("[axe]\nmin_variance = 5\nmax_variance = -3\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_rejects_oversized_shield_bonus() {
        let err = parse_config("[player]\nshield_defense_bonus = 95\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = parse_config("[player\nname = 3").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/arena.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
