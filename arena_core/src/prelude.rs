//! Prelude module for convenient imports
//!
//! ```rust
//! use arena_core::prelude::*;
//! ```

// Battle loop
pub use crate::battle::{Battle, BattleError, BattleState, PlayerAction, TurnOutcome};

// Combatants
pub use crate::character::Character;
pub use crate::combatant::{AttackReport, Enemy, EnemyKind, Player};

// Weapons
pub use crate::weapon::{Axe, FencingSaber, Sword, Weapon};

// Config
pub use crate::config::{default_config, load_config, ArenaConfig};

// Randomness
pub use crate::random::RandomSource;
