//! Combatants - the player and the enemies they face

mod enemy;
mod player;
pub mod policy;
mod report;

pub use enemy::Enemy;
pub use player::{Player, PlayerConfig};
pub use policy::{AttackPolicy, EnemyKind, KaitoConfig, LenConfig, LenPolicy, RinConfig};
pub use report::AttackReport;
