//! arena_core - Turn-based duel resolution for a hero against roaming enemies
//!
//! This library provides:
//! - Weapons: Sword, Axe and FencingSaber damage rolls
//! - Character: health and defense with clamped writes and scoped overrides
//! - Combatants: the shielded Player and the Kaito/Rin/Len enemy policies
//! - Battle: the turn loop that sequences player and enemy actions
//! - Config: every tunable loaded from TOML

pub mod battle;
pub mod character;
pub mod combatant;
pub mod config;
pub mod prelude;
pub mod random;
pub mod weapon;

// Re-export core types for convenience
pub use battle::{Battle, BattleError, BattleState, PlayerAction, TurnOutcome, LOG_CAPACITY};
pub use character::{Character, DefenseOverride};
pub use combatant::{
    AttackPolicy, AttackReport, Enemy, EnemyKind, KaitoConfig, LenConfig, LenPolicy, Player,
    PlayerConfig, RinConfig,
};
pub use config::{default_config, ArenaConfig, BattleRules, ConfigError};
pub use random::{RandomSource, ScriptedRandom};
pub use weapon::{Axe, FencingSaber, Sword, Weapon, WeaponKind};
