//! AttackReport - outcome of one combatant's action

use serde::{Deserialize, Serialize};

/// What a single attack did: damage numbers plus battle-log narration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackReport {
    /// Name of the acting combatant
    pub attacker: String,
    /// Raw damage rolled across all strikes, before the target's defense
    pub damage_dealt: i32,
    /// Damage removed from the target's health after its defense
    pub damage_taken: i32,
    /// Number of strikes that landed (0 for a defensive turn)
    pub strikes: u32,
    /// Battle-log lines, in order
    pub lines: Vec<String>,
}

impl AttackReport {
    pub fn new(attacker: impl Into<String>) -> Self {
        AttackReport {
            attacker: attacker.into(),
            ..Default::default()
        }
    }

    /// Record one strike that landed
    pub fn record_strike(&mut self, dealt: i32, taken: i32) {
        self.strikes += 1;
        self.damage_dealt += dealt;
        self.damage_taken += taken;
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Whether the turn dealt no damage at all
    pub fn is_defensive(&self) -> bool {
        self.strikes == 0
    }

    /// All lines joined for display
    pub fn narration(&self) -> String {
        self.lines.join("\n")
    }
}
