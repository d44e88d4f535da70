/// Session lifecycle: start / pause / reset, plus the frame clock that turns
/// wall time into bounded simulation deltas.

use std::time::Instant;

use rand::Rng;

use crate::compute::{init_state, step};
use crate::constants::MAX_FRAME_DT;
use crate::entities::{GameState, GameStatus, Intent};
use crate::feedback::{Audio, Cue, Hud};

// ── Frame clock ──────────────────────────────────────────────────────────────

/// Measures time between frames, capped at `MAX_FRAME_DT`.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        FrameClock { last: None }
    }

    /// Seconds since the previous call, clamped. The first call after
    /// construction or `resync` yields zero.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let dt = match self.last {
            Some(prev) => now.saturating_duration_since(prev).as_secs_f32(),
            None => 0.0,
        };
        self.last = Some(now);
        dt.min(MAX_FRAME_DT)
    }

    /// Forget the previous frame so stale time is never applied.
    pub fn resync(&mut self) {
        self.last = None;
    }
}

// ── Session ──────────────────────────────────────────────────────────────────

/// Owns the game state and the RNG that drives it.
pub struct Session<R> {
    state: GameState,
    rng: R,
    clock: FrameClock,
}

impl<R: Rng> Session<R> {
    /// A session showing the title screen with a fresh wave-1 grid.
    pub fn new(width: f32, height: f32, mut rng: R) -> Self {
        let state = init_state(width, height, &mut rng);
        Session {
            state,
            rng,
            clock: FrameClock::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    /// Reinitialise score, wave, lives and the grid. Leaves the session on
    /// the title screen.
    pub fn reset<F: Hud + ?Sized>(&mut self, out: &mut F) {
        self.state = init_state(self.state.width, self.state.height, &mut self.rng);
        self.clock.resync();
        out.update_display(self.state.score, self.state.wave, self.state.lives);
    }

    /// Reset and begin playing.
    pub fn start<F: Audio + Hud + ?Sized>(&mut self, out: &mut F) {
        self.reset(out);
        self.state.status = GameStatus::Playing;
        out.cue(Cue::GameStart);
        tracing::info!(width = self.state.width, height = self.state.height, "game started");
    }

    /// Flip between playing and paused. Ignored when no game is running.
    pub fn toggle_pause(&mut self) {
        match self.state.status {
            GameStatus::Playing => self.state.status = GameStatus::Paused,
            GameStatus::Paused => {
                self.state.status = GameStatus::Playing;
                self.clock.resync();
            }
            GameStatus::Ready | GameStatus::GameOver => return,
        }
        tracing::debug!(status = ?self.state.status, "pause toggled");
    }

    /// Drive one display frame from wall time. Returns the delta applied.
    pub fn frame<F>(&mut self, now: Instant, input: Intent, out: &mut F) -> f32
    where
        F: Audio + Hud + ?Sized,
    {
        let dt = self.clock.tick(now);
        self.advance(dt, input, out)
    }

    /// Step the simulation by `dt`, clamped to `MAX_FRAME_DT`, if a game is
    /// running and not paused. Returns the delta applied.
    pub fn advance<F>(&mut self, dt: f32, input: Intent, out: &mut F) -> f32
    where
        F: Audio + Hud + ?Sized,
    {
        if self.state.status != GameStatus::Playing {
            return 0.0;
        }
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        step(&mut self.state, input, dt, &mut self.rng, out);
        dt
    }
}
