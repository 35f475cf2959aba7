//! Game State
//!
//! Discrete game state: which mode is active, how many umbrellas are left
//! and the score. The mode is the only gate deciding which pointer input is
//! live.

use std::fmt;

use crate::game::config::RoundConfig;

/// Exactly one mode is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    /// Umbrella in the pouch, waiting to be grabbed
    #[default]
    Ready,
    /// Player is pulling the band
    Aiming,
    /// Umbrella released and under simulation
    Flying,
}

impl GameMode {
    pub fn label(self) -> &'static str {
        match self {
            GameMode::Ready => "ready",
            GameMode::Aiming => "aiming",
            GameMode::Flying => "flying",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-round counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    /// Umbrellas left to launch
    pub remaining: u32,
    /// Points this round; never decreases until reset
    pub score: u32,
}

impl Round {
    pub fn fresh(config: &RoundConfig) -> Self {
        Self {
            remaining: config.starting_projectiles,
            score: 0,
        }
    }
}

/// Mode transitions plus round bookkeeping.
///
/// Every method returning `bool` reports whether the transition happened;
/// a `false` means the request was ignored and nothing changed.
#[derive(Debug, Clone)]
pub struct GameStateMachine {
    mode: GameMode,
    round: Round,
    rules: RoundConfig,
}

impl GameStateMachine {
    pub fn new(rules: RoundConfig) -> Self {
        Self {
            mode: GameMode::Ready,
            round: Round::fresh(&rules),
            rules,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn score(&self) -> u32 {
        self.round.score
    }

    pub fn remaining(&self) -> u32 {
        self.round.remaining
    }

    /// `Ready` with at least one umbrella left.
    pub fn can_begin_aim(&self) -> bool {
        self.mode == GameMode::Ready && self.round.remaining > 0
    }

    /// `Ready -> Aiming`.
    pub fn begin_aim(&mut self) -> bool {
        if !self.can_begin_aim() {
            return false;
        }
        self.mode = GameMode::Aiming;
        true
    }

    pub fn is_aiming(&self) -> bool {
        self.mode == GameMode::Aiming
    }

    pub fn is_flying(&self) -> bool {
        self.mode == GameMode::Flying
    }

    /// `Aiming -> Flying`, spending one umbrella.
    pub fn launch(&mut self) -> bool {
        if self.mode != GameMode::Aiming {
            return false;
        }
        self.round.remaining = self.round.remaining.saturating_sub(1);
        self.mode = GameMode::Flying;
        true
    }

    /// `Flying -> Ready`.
    pub fn settle(&mut self) -> bool {
        if self.mode != GameMode::Flying {
            return false;
        }
        self.mode = GameMode::Ready;
        true
    }

    /// Credit `hits` destroyed targets. Returns the points added.
    pub fn award_hits(&mut self, hits: u32) -> u32 {
        let points = self.rules.hit_reward.saturating_mul(hits);
        self.round.score = self.round.score.saturating_add(points);
        points
    }

    /// Back to `Ready` with a fresh round.
    pub fn reset(&mut self) {
        self.mode = GameMode::Ready;
        self.round = Round::fresh(&self.rules);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine() -> GameStateMachine {
        GameStateMachine::new(RoundConfig::default())
    }

    #[test]
    fn test_starts_ready_with_full_round() {
        let m = machine();
        assert_eq!(m.mode(), GameMode::Ready);
        assert_eq!(m.remaining(), 5);
        assert_eq!(m.score(), 0);
    }

    #[test]
    fn test_full_cycle() {
        let mut m = machine();
        assert!(m.begin_aim());
        assert!(!m.begin_aim());
        assert!(m.launch());
        assert_eq!(m.remaining(), 4);
        assert!(!m.launch());
        assert!(m.settle());
        assert_eq!(m.mode(), GameMode::Ready);
    }

    #[test]
    fn test_out_of_umbrellas_blocks_aim() {
        let mut m = GameStateMachine::new(RoundConfig {
            starting_projectiles: 1,
            hit_reward: 100,
        });
        m.begin_aim();
        m.launch();
        m.settle();
        assert_eq!(m.remaining(), 0);
        assert!(!m.begin_aim());
        assert_eq!(m.mode(), GameMode::Ready);
    }

    #[test]
    fn test_settle_only_from_flying() {
        let mut m = machine();
        assert!(!m.settle());
        m.begin_aim();
        assert!(!m.settle());
        assert_eq!(m.mode(), GameMode::Aiming);
    }

    #[test]
    fn test_award_and_reset() {
        let mut m = machine();
        assert_eq!(m.award_hits(2), 200);
        assert_eq!(m.award_hits(0), 0);
        assert_eq!(m.score(), 200);
        m.begin_aim();
        m.reset();
        assert_eq!((m.remaining(), m.score()), (5, 0));
        assert_eq!(m.mode(), GameMode::Ready);
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(GameMode::Flying.to_string(), "flying");
    }
}
