//! Weapons - pure damage rolls from a stat config and a random source

mod axe;
mod saber;
mod sword;

pub use axe::{Axe, AxeStrike, CLEAVE_MULTIPLIER};
pub use saber::{FencingSaber, SaberOutcome, SaberStrike};
pub use sword::{Sword, SwordOutcome, SwordStrike};

use crate::random::RandomSource;
use serde::{Deserialize, Serialize};

/// Weapon families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponKind {
    Sword,
    Axe,
    FencingSaber,
}

/// Any equippable weapon
#[derive(Debug, Clone, PartialEq)]
pub enum Weapon {
    Sword(Sword),
    Axe(Axe),
    FencingSaber(FencingSaber),
}

impl Weapon {
    pub fn kind(&self) -> WeaponKind {
        match self {
            Weapon::Sword(_) => WeaponKind::Sword,
            Weapon::Axe(_) => WeaponKind::Axe,
            Weapon::FencingSaber(_) => WeaponKind::FencingSaber,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Weapon::Sword(w) => &w.name,
            Weapon::Axe(w) => &w.name,
            Weapon::FencingSaber(w) => &w.name,
        }
    }

    pub fn base_damage(&self) -> i32 {
        match self {
            Weapon::Sword(w) => w.base_damage,
            Weapon::Axe(w) => w.base_damage,
            Weapon::FencingSaber(w) => w.base_damage,
        }
    }

    pub fn crit_chance(&self) -> f64 {
        match self {
            Weapon::Sword(w) => w.crit_chance,
            Weapon::Axe(w) => w.crit_chance,
            Weapon::FencingSaber(w) => w.crit_chance,
        }
    }

    /// Roll damage for one attack; always at least 1
    pub fn calculate_damage(&self, rng: &mut impl RandomSource) -> i32 {
        match self {
            Weapon::Sword(w) => w.calculate_damage(rng),
            Weapon::Axe(w) => w.calculate_damage(rng),
            Weapon::FencingSaber(w) => w.calculate_damage(rng),
        }
    }

    /// Armor penetration, only axes carry one
    pub fn armor_penetration(&self) -> Option<f64> {
        match self {
            Weapon::Axe(w) => Some(w.armor_penetration()),
            _ => None,
        }
    }

    /// Advance time-based state (the saber's parry window)
    pub fn tick(&mut self, delta: f64) {
        if let Weapon::FencingSaber(w) = self {
            w.tick(delta);
        }
    }

    /// Multi-line display string: name, then "Stat: value" lines
    pub fn info(&self) -> String {
        match self {
            Weapon::Sword(w) => w.info(),
            Weapon::Axe(w) => w.info(),
            Weapon::FencingSaber(w) => w.info(),
        }
    }
}

impl From<Sword> for Weapon {
    fn from(w: Sword) -> Self {
        Weapon::Sword(w)
    }
}

impl From<Axe> for Weapon {
    fn from(w: Axe) -> Self {
        Weapon::Axe(w)
    }
}

impl From<FencingSaber> for Weapon {
    fn from(w: FencingSaber) -> Self {
        Weapon::FencingSaber(w)
    }
}

/// Probability as a display percentage, trimmed of float noise
pub(crate) fn percent(probability: f64) -> f64 {
    (probability * 100.0 * 10_000.0).round() / 10_000.0
}
