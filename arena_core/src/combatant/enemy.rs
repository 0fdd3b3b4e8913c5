//! Enemy - a character, an optional weapon and the policy that drives it

use super::policy::{AttackPolicy, EnemyKind, LenPolicy};
use super::{AttackReport, Player};
use crate::character::Character;
use crate::config::ArenaConfig;
use crate::random::RandomSource;
use crate::weapon::Weapon;

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    character: Character,
    weapon: Option<Weapon>,
    policy: AttackPolicy,
}

impl Enemy {
    /// Build an enemy of the given kind, carrying its usual weapon
    pub fn spawn(kind: EnemyKind, config: &ArenaConfig) -> Self {
        let (character, weapon, policy) = match kind {
            EnemyKind::Kaito => {
                let c = &config.kaito;
                (
                    Character::new(c.name.clone(), c.max_health, c.base_damage),
                    Weapon::from(config.sword.clone()),
                    AttackPolicy::Kaito(c.clone()),
                )
            }
            EnemyKind::Rin => {
                let c = &config.rin;
                (
                    Character::new(c.name.clone(), c.max_health, c.base_damage),
                    Weapon::from(config.axe.clone()),
                    AttackPolicy::Rin(c.clone()),
                )
            }
            EnemyKind::Len => {
                let c = &config.len;
                (
                    Character::new(c.name.clone(), c.max_health, c.base_damage),
                    Weapon::from(config.saber.clone()),
                    AttackPolicy::Len(LenPolicy::new(c.clone())),
                )
            }
        };

        Enemy {
            character,
            weapon: Some(weapon),
            policy,
        }
    }

    /// Uniform pick over every enemy kind
    pub fn spawn_random(config: &ArenaConfig, rng: &mut impl RandomSource) -> Self {
        let kinds = EnemyKind::all();
        let index = rng.range_inclusive(0, kinds.len() as i32 - 1).max(0) as usize;
        let kind = kinds.get(index).copied().unwrap_or(EnemyKind::Kaito);
        Self::spawn(kind, config)
    }

    pub fn with_weapon(mut self, weapon: impl Into<Weapon>) -> Self {
        self.weapon = Some(weapon.into());
        self
    }

    pub fn without_weapon(mut self) -> Self {
        self.weapon = None;
        self
    }

    pub fn kind(&self) -> EnemyKind {
        self.policy.kind()
    }

    pub fn name(&self) -> &str {
        self.character.name()
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn character_mut(&mut self) -> &mut Character {
        &mut self.character
    }

    pub fn weapon(&self) -> Option<&Weapon> {
        self.weapon.as_ref()
    }

    pub fn policy(&self) -> &AttackPolicy {
        &self.policy
    }

    pub fn take_damage(&mut self, amount: i32) -> i32 {
        self.character.take_damage(amount)
    }

    pub fn is_dead(&self) -> bool {
        self.character.is_dead()
    }

    /// Whether Len is holding a parry stance
    pub fn is_parrying(&self) -> bool {
        match &self.policy {
            AttackPolicy::Len(len) => len.is_parrying(),
            _ => false,
        }
    }

    /// Run this enemy's turn against the player
    pub fn attack(&mut self, player: &mut Player, rng: &mut impl RandomSource) -> AttackReport {
        match &mut self.policy {
            AttackPolicy::Kaito(kaito) => {
                kaito.attack(&self.character, self.weapon.is_some(), player, rng)
            }
            AttackPolicy::Rin(rin) => {
                rin.attack(&mut self.character, self.weapon.as_ref(), player, rng)
            }
            AttackPolicy::Len(len) => len.attack(&self.character, self.weapon.as_mut(), player, rng),
        }
    }

    pub fn tick(&mut self, delta: f64) {
        if let Some(weapon) = &mut self.weapon {
            weapon.tick(delta);
        }
    }

    pub fn stats_summary(&self) -> String {
        let weapon = match &self.weapon {
            Some(weapon) => weapon.info(),
            None => match self.kind() {
                EnemyKind::Kaito => "Claws".to_string(),
                EnemyKind::Rin => "Heavy Axe".to_string(),
                EnemyKind::Len => "Fencing Sword".to_string(),
            },
        };

        let mut summary = format!(
            "{}\nHP: {}/{}\nWeapon: {}",
            self.character.name(),
            self.character.current_health(),
            self.character.max_health(),
            weapon
        );

        match &self.policy {
            AttackPolicy::Kaito(_) => {}
            AttackPolicy::Rin(rin) => {
                let status = if rin.is_stumbling(&self.character) {
                    "Stumbling"
                } else {
                    "Ready"
                };
                summary.push_str(&format!("\nStatus: {}", status));
            }
            AttackPolicy::Len(len) => {
                let stance = if len.is_parrying() {
                    "Parrying"
                } else {
                    "Attacking"
                };
                summary.push_str(&format!("\nStance: {}", stance));
            }
        }

        summary
    }
}
