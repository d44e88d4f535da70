//! Tuning constants. All distances are logical pixels, all times seconds.

// ── Field ─────────────────────────────────────────────────────────────────────

pub const FIELD_WIDTH: f32 = 540.0;
pub const FIELD_HEIGHT: f32 = 720.0;

/// Widest grid (12 columns) plus both formation edge margins.
pub const MIN_FIELD_WIDTH: f32 = 460.0;
/// Tallest grid (6 rows) must start well clear of the player line.
pub const MIN_FIELD_HEIGHT: f32 = 400.0;

/// Upper bound on a single simulation step.
pub const MAX_FRAME_DT: f32 = 1.0 / 30.0;

pub const STARTING_LIVES: u32 = 3;

// ── Player ────────────────────────────────────────────────────────────────────

/// Distance of the ship centre from the bottom edge.
pub const PLAYER_BOTTOM_OFFSET: f32 = 50.0;
pub const PLAYER_HALF_W: f32 = 20.0;
pub const PLAYER_HALF_H: f32 = 8.0;
pub const PLAYER_SPEED: f32 = 240.0;
/// The ship centre never gets closer than this to either side.
pub const PLAYER_MARGIN: f32 = 28.0;
pub const FIRE_COOLDOWN: f32 = 0.23;

// ── Projectiles ───────────────────────────────────────────────────────────────

pub const SHOT_W: f32 = 4.0;
pub const SHOT_H: f32 = 10.0;
pub const SHOT_SPEED: f32 = -360.0;
/// Muzzle offset from the ship centre.
pub const MUZZLE_DX: f32 = -2.0;
pub const MUZZLE_DY: f32 = -18.0;

pub const BOMB_W: f32 = 4.0;
pub const BOMB_H: f32 = 12.0;
pub const BOMB_SPEED: f32 = 180.0;
/// Bombs are dropped once they are this far below the bottom edge.
pub const BOMB_EXIT_MARGIN: f32 = 30.0;

// ── Formation ─────────────────────────────────────────────────────────────────

pub const ALIEN_W: f32 = 24.0;
pub const ALIEN_H: f32 = 18.0;
pub const ALIEN_GAP_X: f32 = 14.0;
pub const ALIEN_GAP_Y: f32 = 22.0;
pub const GRID_TOP: f32 = 80.0;

pub const BASE_ROWS: u32 = 3;
pub const MAX_EXTRA_ROWS: u32 = 3;
pub const BASE_COLS: u32 = 7;
pub const MAX_EXTRA_COLS: u32 = 5;

pub const BASE_ALIEN_VALUE: u32 = 10;
pub const ALIEN_VALUE_PER_ROW: u32 = 5;

pub const BASE_MARCH_SPEED: f32 = 24.0;
pub const MARCH_SPEED_PER_WAVE: f32 = 6.0;
pub const BASE_FIRE_RATE: f32 = 1.2;
pub const FIRE_RATE_PER_WAVE: f32 = 0.25;
pub const STEP_DOWN: f32 = 18.0;
/// Extra speed gained as the formation thins out (at zero survivors).
pub const PRESSURE_GAIN: f32 = 1.5;

/// The formation reverses before crossing this distance from either side.
pub const FORMATION_EDGE_MARGIN: f32 = 8.0;
/// Formation bottom this close to the player's y breaches the line.
pub const PLAYER_LINE_GUARD: f32 = 14.0;
/// Upward shove applied to every alien after a breach.
pub const BREACH_PUSHBACK: f32 = 30.0;
pub const ANIMATION_RATE: f32 = 8.0;
/// Width of a firing lane.
pub const LANE_WIDTH: f32 = 40.0;

// ── UFO ───────────────────────────────────────────────────────────────────────

pub const UFO_Y: f32 = 48.0;
pub const UFO_W: f32 = 34.0;
pub const UFO_H: f32 = 16.0;
pub const UFO_SPEED: f32 = 120.0;
pub const UFO_ENTRY_OFFSET: f32 = 40.0;
pub const UFO_EXIT_MARGIN: f32 = 60.0;
pub const UFO_BASE_VALUE: u32 = 50;
pub const UFO_VALUE_PER_WAVE: u32 = 10;
/// Delay before the first UFO of a wave.
pub const UFO_FIRST_DELAY: (f32, f32) = (8.0, 16.0);
/// Delay between later UFOs.
pub const UFO_RESPAWN_DELAY: (f32, f32) = (10.0, 20.0);
