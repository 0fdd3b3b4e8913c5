//! Application state

use arena_core::config::{default_config, load_config};
use arena_core::{ArenaConfig, Battle, PlayerAction};
use std::path::Path;

pub struct App {
    pub battle: Battle,
    /// Lines scrolled back from the newest log entry
    pub log_scroll: usize,
    /// One-line notice shown under the title (config problems, rejected actions)
    pub notice: Option<String>,
}

impl App {
    pub fn new(config: ArenaConfig) -> Self {
        Self::with_battle(Battle::from_entropy(config))
    }

    pub fn with_battle(battle: Battle) -> Self {
        App {
            battle,
            log_scroll: 0,
            notice: None,
        }
    }

    /// Load `path` if given, otherwise the bundled config
    pub fn from_config_path(path: Option<&Path>) -> Self {
        match path {
            None => Self::new(default_config()),
            Some(path) => match load_config(path) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "config loaded");
                    Self::new(config)
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "config rejected, using defaults");
                    let mut app = Self::new(default_config());
                    app.notice = Some(format!("{}: {}", path.display(), err));
                    app
                }
            },
        }
    }

    pub fn attack(&mut self) {
        self.act(PlayerAction::Attack);
    }

    pub fn toggle_shield(&mut self) {
        self.act(PlayerAction::ToggleShield);
    }

    fn act(&mut self, action: PlayerAction) {
        match self.battle.take_turn(action) {
            Ok(_) => {
                self.notice = None;
                self.log_scroll = 0;
            }
            Err(err) => self.notice = Some(err.to_string()),
        }
    }

    pub fn restart(&mut self) {
        self.battle.restart();
        self.notice = None;
        self.log_scroll = 0;
    }

    pub fn tick(&mut self, delta: f64) {
        self.battle.tick(delta);
    }

    pub fn scroll_up(&mut self) {
        let max = self.battle.log().len().saturating_sub(1);
        self.log_scroll = (self.log_scroll + 1).min(max);
    }

    pub fn scroll_down(&mut self) {
        self.log_scroll = self.log_scroll.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn app() -> App {
        App::with_battle(Battle::new(ArenaConfig::default(), StdRng::seed_from_u64(3)))
    }

    #[test]
    fn test_actions_reach_battle_log() {
        let mut app = app();
        app.attack();
        assert!(app
            .battle
            .log()
            .iter()
            .any(|line| line == "You attack for 20 damage!"));
    }

    #[test]
    fn test_rejected_action_sets_notice() {
        let mut config = ArenaConfig::default();
        config.player.max_health = 1;
        let mut app = App::with_battle(Battle::new(config, StdRng::seed_from_u64(3)));

        while app.battle.is_active() {
            app.toggle_shield();
        }
        assert!(app.notice.is_none());

        app.attack();
        assert!(app.notice.is_some());

        app.restart();
        assert!(app.notice.is_none());
        assert!(app.battle.is_active());
    }

    #[test]
    fn test_scroll_is_bounded() {
        let mut app = app();
        for _ in 0..10 {
            app.scroll_up();
        }
        assert_eq!(app.log_scroll, app.battle.log().len() - 1);
        app.scroll_down();
        app.scroll_down();
        assert!(app.log_scroll <= app.battle.log().len());
    }

    #[test]
    fn test_bad_config_path_falls_back() {
        let app = App::from_config_path(Some(Path::new("/nonexistent/arena.toml")));
        assert!(app.notice.is_some());
        assert_eq!(app.battle.config(), &default_config());
    }
}
