//! Game Session
//!
//! The single owner of a running game. Pointer input and the fixed tick
//! both go through here; the mode decides which input is live and the
//! physics engine's step report drives scoring and settling.
//!
//! Observers learn about changes by draining [`SessionEvent`]s after each
//! call instead of registering callbacks.

use glam::Vec2;

use crate::game::config::LauncherConfig;
use crate::game::render::FrameView;
use crate::game::slingshot::Slingshot;
use crate::game::state::{GameMode, GameStateMachine};
use crate::game::systems::{PhysicsEngine, StepTransition};
use crate::game::targets::Target;
use crate::game::ui::StatusMessage;
use crate::input::PointerEvent;
use crate::physics::ballistics::Projectile;

/// Something an observer of the session may care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    ScoreChanged(u32),
    RemainingChanged(u32),
    ModeChanged(GameMode),
    /// Fired once per round, when the last target falls.
    Won,
}

pub struct Session {
    config: LauncherConfig,
    machine: GameStateMachine,
    engine: PhysicsEngine,
    events: Vec<SessionEvent>,
    win_announced: bool,
}

impl Session {
    pub fn new(config: LauncherConfig) -> Self {
        let machine = GameStateMachine::new(config.round.clone());
        let engine = PhysicsEngine::new(&config);
        let mut session = Self {
            config,
            machine,
            engine,
            events: Vec::new(),
            win_announced: false,
        };
        // an empty layout is won before the first launch
        session.announce_win_once();
        session
    }

    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn mode(&self) -> GameMode {
        self.machine.mode()
    }

    pub fn score(&self) -> u32 {
        self.machine.score()
    }

    pub fn remaining(&self) -> u32 {
        self.machine.remaining()
    }

    /// Derived from the target list on every call.
    pub fn is_won(&self) -> bool {
        self.engine.all_targets_destroyed()
    }

    pub fn projectile(&self) -> &Projectile {
        self.engine.projectile()
    }

    pub fn slingshot(&self) -> &Slingshot {
        self.engine.slingshot()
    }

    pub fn targets(&self) -> &[Target] {
        self.engine.targets()
    }

    pub fn status(&self) -> StatusMessage {
        StatusMessage::evaluate(self.mode(), self.remaining(), self.is_won())
    }

    pub fn frame(&self) -> FrameView<'_> {
        FrameView {
            playfield: &self.config.playfield,
            projectile: self.engine.projectile(),
            slingshot: self.engine.slingshot(),
            targets: self.engine.targets(),
            mode: self.mode(),
        }
    }

    /// Take every event queued since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    // ------------------------------------------------------------------
    // Pointer input
    // ------------------------------------------------------------------

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down(p) => {
                self.pointer_down(p.x, p.y);
            }
            PointerEvent::Move(p) => {
                self.pointer_move(p.x, p.y);
            }
            PointerEvent::Up => {
                self.pointer_up();
            }
        }
    }

    /// Grab the umbrella. Returns `true` if aiming started.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        if !self.machine.can_begin_aim() || !self.engine.can_grab(Vec2::new(x, y)) {
            return false;
        }
        self.machine.begin_aim();
        self.engine.begin_drag();
        self.events.push(SessionEvent::ModeChanged(GameMode::Aiming));
        log::debug!("Aiming from ({x:.1}, {y:.1})");
        true
    }

    /// Pull the band. Ignored unless aiming.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        if !self.machine.is_aiming() {
            return false;
        }
        self.engine.drag_to(Vec2::new(x, y));
        true
    }

    /// Release the band. Returns `true` if the umbrella was launched.
    pub fn pointer_up(&mut self) -> bool {
        if !self.machine.launch() {
            return false;
        }
        let velocity = self.engine.launch();
        let remaining = self.machine.remaining();
        self.events.push(SessionEvent::RemainingChanged(remaining));
        self.events.push(SessionEvent::ModeChanged(GameMode::Flying));
        log::info!(
            "Launched with velocity ({:.2}, {:.2}), {remaining} left",
            velocity.x,
            velocity.y
        );
        true
    }

    // ------------------------------------------------------------------
    // Simulation
    // ------------------------------------------------------------------

    /// One fixed tick. Only a flying umbrella moves.
    pub fn tick(&mut self) -> StepTransition {
        if !self.machine.is_flying() {
            return StepTransition::Continue;
        }

        let report = self.engine.step();

        if !report.hits.is_empty() {
            let points = self.machine.award_hits(report.hit_count());
            log::debug!("Smashed targets {:?} for {points} points", report.hits);
            self.events.push(SessionEvent::ScoreChanged(self.machine.score()));
        }
        self.announce_win_once();

        if report.transition == StepTransition::Settle {
            self.machine.settle();
            self.engine.reset_projectile();
            self.events.push(SessionEvent::ModeChanged(GameMode::Ready));
            log::debug!("Umbrella settled, back to ready");
        }

        report.transition
    }

    fn announce_win_once(&mut self) {
        if !self.win_announced && self.is_won() {
            self.win_announced = true;
            self.events.push(SessionEvent::Won);
            log::info!("All targets destroyed, final score {}", self.score());
        }
    }

    /// Full reset: fresh round, all targets back, umbrella in the pouch.
    pub fn reset(&mut self) {
        self.machine.reset();
        self.engine.reset();
        self.win_announced = false;
        self.events.push(SessionEvent::ScoreChanged(self.machine.score()));
        self.events.push(SessionEvent::RemainingChanged(self.machine.remaining()));
        self.events.push(SessionEvent::ModeChanged(GameMode::Ready));
        log::info!("Session reset");
        self.announce_win_once();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_gate_ignores_move_when_ready() {
        let mut session = Session::new(LauncherConfig::default());
        assert!(!session.pointer_move(10.0, 10.0));
        assert_eq!(session.projectile().position, Vec2::new(150.0, 400.0));
    }

    #[test]
    fn test_tick_idle_when_not_flying() {
        let mut session = Session::new(LauncherConfig::default());
        assert_eq!(session.tick(), StepTransition::Continue);
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_empty_layout_announces_win_without_launching() {
        let mut config = LauncherConfig::default();
        config.targets.clear();
        let mut session = Session::new(config);
        assert!(session.is_won());
        assert_eq!(session.drain_events(), vec![SessionEvent::Won]);

        session.tick();
        assert!(session.drain_events().is_empty());

        session.reset();
        assert_eq!(
            session.drain_events(),
            vec![
                SessionEvent::ScoreChanged(0),
                SessionEvent::RemainingChanged(5),
                SessionEvent::ModeChanged(GameMode::Ready),
                SessionEvent::Won,
            ]
        );
    }

    #[test]
    fn test_handle_pointer_drives_launch() {
        let mut session = Session::new(LauncherConfig::default());
        session.handle_pointer(PointerEvent::Down(Vec2::new(150.0, 400.0)));
        session.handle_pointer(PointerEvent::Move(Vec2::new(120.0, 420.0)));
        session.handle_pointer(PointerEvent::Up);
        assert_eq!(session.mode(), GameMode::Flying);
        assert_eq!(
            session.drain_events(),
            vec![
                SessionEvent::ModeChanged(GameMode::Aiming),
                SessionEvent::RemainingChanged(4),
                SessionEvent::ModeChanged(GameMode::Flying),
            ]
        );
    }
}
