//! Battle loop - one player against a stream of enemies
//!
//! A [`Battle`] owns the player, the current enemy and the random source.
//! Each call to [`Battle::take_turn`] runs the player's action, then the
//! enemy's response if it is still standing, and appends the narration to
//! the battle log.

mod turn;

pub use turn::{BattleError, BattleState, PlayerAction, TurnOutcome};

use crate::combatant::{Enemy, Player};
use crate::config::ArenaConfig;
use crate::random::RandomSource;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

/// Battle-log lines kept; older lines are dropped first
pub const LOG_CAPACITY: usize = 200;

#[derive(Debug, Clone)]
pub struct Battle<R: RandomSource = StdRng> {
    config: ArenaConfig,
    player: Player,
    enemy: Enemy,
    rng: R,
    state: BattleState,
    kills: u32,
    log: Vec<String>,
}

impl Battle<StdRng> {
    /// Battle with an unseeded rng
    pub fn from_entropy(config: ArenaConfig) -> Self {
        Self::new(config, StdRng::from_entropy())
    }
}

impl<R: RandomSource> Battle<R> {
    /// Create the player and spawn the first enemy
    pub fn new(config: ArenaConfig, mut rng: R) -> Self {
        let player = Player::new(&config.player);
        let enemy = Enemy::spawn_random(&config, &mut rng);
        info!(enemy = enemy.name(), "enemy spawned");
        let log = vec![appears(&enemy)];

        Battle {
            config,
            player,
            enemy,
            rng,
            state: BattleState::Active,
            kills: 0,
            log,
        }
    }

    pub fn take_turn(&mut self, action: PlayerAction) -> Result<TurnOutcome, BattleError> {
        if self.state == BattleState::Defeated {
            return Err(BattleError::PlayerDefeated);
        }

        let mut outcome = TurnOutcome::default();

        let enemy_acts = match action {
            PlayerAction::Attack => {
                let report = self.player.attack(&mut self.enemy, &mut self.rng);
                outcome.lines.extend(report.lines.iter().cloned());
                outcome.player_report = Some(report);

                if self.enemy.is_dead() {
                    self.kills += 1;
                    info!(enemy = self.enemy.name(), kills = self.kills, "enemy defeated");
                    outcome.enemy_defeated = Some(self.enemy.kind());
                    outcome.lines.push(format!("You defeated the {}!", self.enemy.name()));
                    let line = self.spawn_enemy();
                    outcome.lines.push(line);
                    false
                } else {
                    true
                }
            }
            PlayerAction::ToggleShield => {
                outcome.lines.push(self.player.toggle_shield().to_string());
                self.config.battle.shield_toggle_ends_turn
            }
        };

        if enemy_acts && !self.enemy.is_dead() {
            let report = self.enemy.attack(&mut self.player, &mut self.rng);
            outcome.lines.extend(report.lines.iter().cloned());
            outcome.enemy_report = Some(report);

            if self.player.is_dead() {
                info!(enemy = self.enemy.name(), kills = self.kills, "player defeated");
                self.state = BattleState::Defeated;
                outcome.player_defeated = true;
                outcome.lines.push("You have been defeated! Game Over!".to_string());
            }
        }

        self.append_log(outcome.lines.iter().cloned());
        Ok(outcome)
    }

    /// Fresh player, fresh enemy, fresh log
    pub fn restart(&mut self) {
        info!(kills = self.kills, "battle restarted");
        self.player.reset();
        self.kills = 0;
        self.state = BattleState::Active;
        self.log.clear();
        let line = self.spawn_enemy();
        self.append_log(["Game restarted!".to_string(), "Ready for battle!".to_string(), line]);
    }

    /// Advance time-based weapon state by `delta` seconds
    pub fn tick(&mut self, delta: f64) {
        self.enemy.tick(delta);
    }

    fn append_log(&mut self, lines: impl IntoIterator<Item = String>) {
        self.log.extend(lines);
        if self.log.len() > LOG_CAPACITY {
            let excess = self.log.len() - LOG_CAPACITY;
            self.log.drain(..excess);
        }
    }

    fn spawn_enemy(&mut self) -> String {
        self.enemy = Enemy::spawn_random(&self.config, &mut self.rng);
        info!(enemy = self.enemy.name(), "enemy spawned");
        appears(&self.enemy)
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == BattleState::Active
    }

    pub fn kills(&self) -> u32 {
        self.kills
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

fn appears(enemy: &Enemy) -> String {
    format!("A wild {} appears!", enemy.name())
}
