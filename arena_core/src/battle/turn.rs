//! Turn inputs and outcomes

use crate::combatant::{AttackReport, EnemyKind};
use thiserror::Error;

/// What the player chose to do this turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Attack,
    ToggleShield,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BattleState {
    #[default]
    Active,
    /// Terminal until restart
    Defeated,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    #[error("The player has been defeated; restart to fight again")]
    PlayerDefeated,
}

/// Everything one call to `take_turn` did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TurnOutcome {
    /// The player's strike, if the action was an attack
    pub player_report: Option<AttackReport>,
    /// The enemy's response, if it got a turn
    pub enemy_report: Option<AttackReport>,
    /// Kind of the enemy killed this turn
    pub enemy_defeated: Option<EnemyKind>,
    pub player_defeated: bool,
    /// Battle-log lines appended this turn, in order
    pub lines: Vec<String>,
}

impl TurnOutcome {
    /// Damage the player took this turn, after defense
    pub fn damage_to_player(&self) -> i32 {
        self.enemy_report.as_ref().map_or(0, |r| r.damage_taken)
    }

    /// Damage the enemy took this turn, after defense
    pub fn damage_to_enemy(&self) -> i32 {
        self.player_report.as_ref().map_or(0, |r| r.damage_taken)
    }
}
