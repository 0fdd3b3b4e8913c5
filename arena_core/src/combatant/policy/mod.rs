//! Enemy attack policies

mod kaito;
mod len;
mod rin;

pub use kaito::KaitoConfig;
pub use len::{LenConfig, LenPolicy};
pub use rin::{RinBlow, RinConfig};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which enemy a policy belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyKind {
    Kaito,
    Rin,
    Len,
}

impl EnemyKind {
    /// Spawn order for uniform selection
    pub fn all() -> &'static [EnemyKind] {
        &[EnemyKind::Kaito, EnemyKind::Rin, EnemyKind::Len]
    }
}

impl fmt::Display for EnemyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnemyKind::Kaito => write!(f, "Kaito"),
            EnemyKind::Rin => write!(f, "Rin"),
            EnemyKind::Len => write!(f, "Len"),
        }
    }
}

/// Per-enemy decision procedure, invoked once per enemy turn
#[derive(Debug, Clone, PartialEq)]
pub enum AttackPolicy {
    Kaito(KaitoConfig),
    Rin(RinConfig),
    Len(LenPolicy),
}

impl AttackPolicy {
    pub fn kind(&self) -> EnemyKind {
        match self {
            AttackPolicy::Kaito(_) => EnemyKind::Kaito,
            AttackPolicy::Rin(_) => EnemyKind::Rin,
            AttackPolicy::Len(_) => EnemyKind::Len,
        }
    }
}
