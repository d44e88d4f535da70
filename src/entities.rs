/// All game entity types — pure data, no logic beyond hitbox accessors.

use crate::constants::{BOMB_H, BOMB_SPEED, BOMB_W, MUZZLE_DX, MUZZLE_DY, SHOT_H, SHOT_SPEED, SHOT_W};
use crate::geometry::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Title overlay; no game in progress yet.
    Ready,
    Playing,
    Paused,
    GameOver,
}

impl GameStatus {
    /// A game is in progress (possibly paused).
    pub fn is_playing(&self) -> bool {
        matches!(self, GameStatus::Playing | GameStatus::Paused)
    }
}

/// Input snapshot handed to the step at the start of a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Intent {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

impl Intent {
    /// −1, 0 or +1.
    pub fn direction(&self) -> f32 {
        let mut dir = 0.0;
        if self.left {
            dir -= 1.0;
        }
        if self.right {
            dir += 1.0;
        }
        dir
    }
}

/// Lateral march direction of the formation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum March {
    Left,
    Right,
}

impl March {
    pub fn sign(&self) -> f32 {
        match self {
            March::Left => -1.0,
            March::Right => 1.0,
        }
    }

    pub fn reversed(&self) -> March {
        match self {
            March::Left => March::Right,
            March::Right => March::Left,
        }
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

/// The ship. `(x, y)` is its centre; `half_w`/`half_h` are half-extents.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub half_w: f32,
    pub half_h: f32,
    pub speed: f32,
    /// Seconds until the next shot is allowed.
    pub cooldown: f32,
}

impl Player {
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.x - self.half_w,
            self.y - self.half_h,
            self.half_w * 2.0,
            self.half_h * 2.0,
        )
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// A shot (vy < 0) or a bomb (vy > 0). `(x, y)` is the top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub vy: f32,
    /// Set when the projectile hit something this tick.
    pub spent: bool,
}

impl Projectile {
    /// Player shot leaving the muzzle of a ship centred at `(x, y)`.
    pub fn shot(x: f32, y: f32) -> Self {
        Projectile {
            x: x + MUZZLE_DX,
            y: y + MUZZLE_DY,
            w: SHOT_W,
            h: SHOT_H,
            vy: SHOT_SPEED,
            spent: false,
        }
    }

    /// Bomb dropped from the bottom centre of `alien`.
    pub fn bomb(alien: &Alien) -> Self {
        Projectile {
            x: alien.x + alien.w / 2.0 - BOMB_W / 2.0,
            y: alien.y + alien.h,
            w: BOMB_W,
            h: BOMB_H,
            vy: BOMB_SPEED,
            spent: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

// ── Aliens & UFO ──────────────────────────────────────────────────────────────

/// One formation member. Dead aliens stay in the grid until the next wave.
#[derive(Clone, Debug, PartialEq)]
pub struct Alien {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub alive: bool,
    /// Animation phase; the integer part counts frames shown.
    pub phase: f32,
    pub value: u32,
}

impl Alien {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ufo {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub vx: f32,
    pub value: u32,
}

impl Ufo {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

/// Per-wave movement and fire parameters of the formation.
#[derive(Clone, Debug, PartialEq)]
pub struct Formation {
    pub rows: u32,
    pub cols: u32,
    /// Lateral speed before the thinning bonus, px/s.
    pub speed: f32,
    pub step_down: f32,
    /// Expected bombs per second for the whole group.
    pub fire_rate: f32,
    pub march: March,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire session state. Mutated only by the simulation step and the
/// session lifecycle; presentation reads it through `&GameState`.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub shots: Vec<Projectile>,
    pub bombs: Vec<Projectile>,
    pub aliens: Vec<Alien>,
    pub ufo: Option<Ufo>,
    pub formation: Formation,
    /// Seconds until the next UFO may appear.
    pub ufo_timer: f32,
    pub score: u32,
    pub wave: u32,
    pub lives: u32,
    /// Simulated seconds since the session was reset.
    pub elapsed: f32,
    pub status: GameStatus,
    pub width: f32,
    pub height: f32,
}

impl GameState {
    pub fn alive_aliens(&self) -> impl Iterator<Item = &Alien> {
        self.aliens.iter().filter(|a| a.alive)
    }
}
