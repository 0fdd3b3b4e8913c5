//! Character - health, defense and damage state shared by every combatant

use crate::random::{round_damage, RandomSource};
use serde::Serialize;
use std::ops::{Deref, DerefMut};

/// Lowest allowed defense modifier (90% mitigation)
pub const MIN_DEFENSE_MODIFIER: f64 = 0.1;
/// Highest allowed defense modifier (no mitigation)
pub const MAX_DEFENSE_MODIFIER: f64 = 1.0;

/// Health/defense model for the player and every enemy
///
/// `current_health` is kept in `0..=max_health` and `defense_modifier` in
/// `0.1..=1.0`; both are clamped on every write so they can never be observed
/// out of range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Character {
    name: String,
    max_health: i32,
    current_health: i32,
    base_damage: i32,
    /// Fraction of incoming damage actually applied
    defense_modifier: f64,
}

impl Character {
    /// Create a character at full health with no mitigation
    pub fn new(name: impl Into<String>, max_health: i32, base_damage: i32) -> Self {
        let max_health = max_health.max(1);
        Character {
            name: name.into(),
            max_health,
            current_health: max_health,
            base_damage: base_damage.max(0),
            defense_modifier: MAX_DEFENSE_MODIFIER,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn current_health(&self) -> i32 {
        self.current_health
    }

    pub fn base_damage(&self) -> i32 {
        self.base_damage
    }

    pub fn defense_modifier(&self) -> f64 {
        self.defense_modifier
    }

    /// Health as a percentage of max health
    pub fn health_percent(&self) -> f64 {
        self.current_health as f64 / self.max_health as f64 * 100.0
    }

    pub fn set_current_health(&mut self, value: i32) {
        self.current_health = value.clamp(0, self.max_health);
    }

    pub fn set_base_damage(&mut self, value: i32) {
        self.base_damage = value.max(0);
    }

    /// Set the defense modifier, clamped to `0.1..=1.0`
    pub fn set_defense_modifier(&mut self, value: f64) {
        self.defense_modifier = value.clamp(MIN_DEFENSE_MODIFIER, MAX_DEFENSE_MODIFIER);
    }

    /// Restore health to max
    pub fn restore_full_health(&mut self) {
        self.current_health = self.max_health;
    }

    /// Damage this character deals with a plain strike
    pub fn calculate_damage(&self) -> i32 {
        self.base_damage
    }

    /// Apply incoming damage after the defense modifier
    ///
    /// Returns the amount actually removed from health before clamping.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let reduced = round_damage(amount as f64 * self.defense_modifier);
        self.set_current_health(self.current_health.saturating_sub(reduced));
        reduced
    }

    /// Apply incoming damage that may critically hit (doubling the amount)
    pub fn take_damage_with_crit(
        &mut self,
        amount: i32,
        crit_chance: f64,
        rng: &mut impl RandomSource,
    ) -> i32 {
        let is_critical = rng.chance(crit_chance);
        let amount = if is_critical { amount.saturating_mul(2) } else { amount };
        if is_critical {
            tracing::debug!(character = %self.name, amount, "critical hit received");
        }
        self.take_damage(amount)
    }

    pub fn is_dead(&self) -> bool {
        self.current_health <= 0
    }

    pub fn is_alive(&self) -> bool {
        !self.is_dead()
    }

    /// Temporarily replace the defense modifier
    ///
    /// The previous modifier comes back when the returned guard is dropped,
    /// on every exit path.
    pub fn override_defense(&mut self, modifier: f64) -> DefenseOverride<'_> {
        let previous = self.defense_modifier;
        self.set_defense_modifier(modifier);
        DefenseOverride {
            character: self,
            previous,
        }
    }
}

/// Scope guard returned by [`Character::override_defense`]
pub struct DefenseOverride<'a> {
    character: &'a mut Character,
    previous: f64,
}

impl DefenseOverride<'_> {
    /// Modifier that will be restored on drop
    pub fn previous(&self) -> f64 {
        self.previous
    }
}

impl Deref for DefenseOverride<'_> {
    type Target = Character;

    fn deref(&self) -> &Character {
        self.character
    }
}

impl DerefMut for DefenseOverride<'_> {
    fn deref_mut(&mut self) -> &mut Character {
        self.character
    }
}

impl Drop for DefenseOverride<'_> {
    fn drop(&mut self) {
        // Restore the raw value; it was already in range when it was read.
        self.character.defense_modifier = self.previous;
    }
}
