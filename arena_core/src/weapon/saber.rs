//! FencingSaber - precision weapon with a timed parry window and riposte

use super::percent;
use crate::random::{round_damage, RandomSource};
use serde::{Deserialize, Serialize};

/// Which branch a saber thrust landed in
///
/// Exactly one applies per thrust, checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaberOutcome {
    Critical,
    WeakSpot,
    Precise,
    Poor,
}

impl SaberOutcome {
    pub fn multiplier(self) -> f64 {
        match self {
            SaberOutcome::Critical => 3.0,
            SaberOutcome::WeakSpot => 1.7,
            SaberOutcome::Precise => 1.0,
            SaberOutcome::Poor => 0.6,
        }
    }
}

/// A single rolled saber thrust
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaberStrike {
    pub outcome: SaberOutcome,
    pub damage: i32,
}

/// Light duelling saber
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FencingSaber {
    pub name: String,
    pub base_damage: i32,
    pub crit_chance: f64,
    /// Seconds a parry stays up once started
    pub parry_window: f64,
    pub riposte_multiplier: f64,
    pub weak_spot_chance: f64,
    /// Chance of a clean thrust at full damage
    pub precision_bonus: f64,
    #[serde(skip)]
    parrying: bool,
    #[serde(skip)]
    parry_timer: f64,
}

impl Default for FencingSaber {
    fn default() -> Self {
        FencingSaber {
            name: "Duelling Saber".to_string(),
            base_damage: 12,
            crit_chance: 0.25,
            parry_window: 0.3,
            riposte_multiplier: 2.5,
            weak_spot_chance: 0.4,
            precision_bonus: 0.8,
            parrying: false,
            parry_timer: 0.0,
        }
    }
}

impl FencingSaber {
    /// Roll a thrust. All three chances are drawn up front; the first that
    /// succeeds picks the multiplier and a miss on all three is a poor thrust.
    pub fn roll(&self, rng: &mut impl RandomSource) -> SaberStrike {
        let is_critical = rng.chance(self.crit_chance);
        let hit_weak_spot = rng.chance(self.weak_spot_chance);
        let precise = rng.chance(self.precision_bonus);

        let outcome = if is_critical {
            SaberOutcome::Critical
        } else if hit_weak_spot {
            SaberOutcome::WeakSpot
        } else if precise {
            SaberOutcome::Precise
        } else {
            SaberOutcome::Poor
        };

        let damage = round_damage(self.base_damage as f64 * outcome.multiplier()).max(1);
        tracing::debug!(weapon = %self.name, ?outcome, damage, "saber thrust");

        SaberStrike { outcome, damage }
    }

    pub fn calculate_damage(&self, rng: &mut impl RandomSource) -> i32 {
        self.roll(rng).damage
    }

    /// Open the parry window if it is not already open
    ///
    /// Returns true when a new window was started.
    pub fn attempt_parry(&mut self) -> bool {
        if self.parrying {
            return false;
        }
        self.parrying = true;
        self.parry_timer = self.parry_window;
        tracing::debug!(weapon = %self.name, window = self.parry_window, "parry window opened");
        true
    }

    /// Advance the parry countdown by `delta` seconds
    pub fn tick(&mut self, delta: f64) {
        if !self.parrying {
            return;
        }
        self.parry_timer -= delta;
        if self.parry_timer <= 0.0 {
            self.parrying = false;
            self.parry_timer = 0.0;
        }
    }

    pub fn is_parrying(&self) -> bool {
        self.parrying
    }

    /// Seconds left in the current parry window
    pub fn parry_time_remaining(&self) -> f64 {
        self.parry_timer
    }

    /// Counter-attack: a fresh thrust scaled by the riposte multiplier
    pub fn execute_riposte(&self, rng: &mut impl RandomSource) -> i32 {
        let thrust = self.calculate_damage(rng);
        round_damage(thrust as f64 * self.riposte_multiplier).max(1)
    }

    pub fn info(&self) -> String {
        format!(
            "{}\nPrecision: {}%\nCrit: {}% (3x)\nParry Window: {}s\nRiposte: {}x",
            self.name,
            percent(self.precision_bonus),
            percent(self.crit_chance),
            self.parry_window,
            self.riposte_multiplier
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;

    fn thrust(draws: [f64; 3]) -> SaberStrike {
        FencingSaber::default().roll(&mut ScriptedRandom::new(draws))
    }

    #[test]
    fn test_branch_priority() {
        // every roll succeeds: critical wins
        let s = thrust([0.0, 0.0, 0.0]);
        assert_eq!(s.outcome, SaberOutcome::Critical);
        assert_eq!(s.damage, 36);

        let s = thrust([0.9, 0.0, 0.0]);
        assert_eq!(s.outcome, SaberOutcome::WeakSpot);
        // 12 * 1.7 = 20.4
        assert_eq!(s.damage, 20);

        let s = thrust([0.9, 0.9, 0.0]);
        assert_eq!(s.outcome, SaberOutcome::Precise);
        assert_eq!(s.damage, 12);

        let s = thrust([0.9, 0.9, 0.9]);
        assert_eq!(s.outcome, SaberOutcome::Poor);
        // 12 * 0.6 = 7.2
        assert_eq!(s.damage, 7);
    }

    #[test]
    fn test_always_draws_three() {
        let saber = FencingSaber::default();
        let mut rng = ScriptedRandom::new([0.0, 0.0, 0.0, 0.5]);
        saber.roll(&mut rng);
        assert_eq!(rng.consumed(), 3);
        assert_eq!(rng.remaining(), 1);
    }

    #[test]
    fn test_parry_window_latch() {
        let mut saber = FencingSaber::default();
        assert!(saber.attempt_parry());
        assert!(!saber.attempt_parry());
        assert!(saber.is_parrying());

        saber.tick(0.1);
        assert!(saber.is_parrying());
        assert!((saber.parry_time_remaining() - 0.2).abs() < 1e-9);

        saber.tick(0.2);
        assert!(!saber.is_parrying());

        // window closed, a new one may open
        assert!(saber.attempt_parry());
    }

    #[test]
    fn test_riposte_scales_fresh_thrust() {
        let saber = FencingSaber::default();
        // precise thrust 12 * 2.5 = 30
        let mut rng = ScriptedRandom::new([0.9, 0.9, 0.0]);
        assert_eq!(saber.execute_riposte(&mut rng), 30);
    }

    #[test]
    fn test_info_lines() {
        let info = FencingSaber::default().info();
        let lines: Vec<&str> = info.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Duelling Saber",
                "Precision: 80%",
                "Crit: 25% (3x)",
                "Parry Window: 0.3s",
                "Riposte: 2.5x"
            ]
        );
    }
}
