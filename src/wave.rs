/// Wave generator: builds the alien grid and formation parameters for a wave.

use rand::Rng;

use crate::constants::{
    ALIEN_GAP_X, ALIEN_GAP_Y, ALIEN_H, ALIEN_VALUE_PER_ROW, ALIEN_W, BASE_ALIEN_VALUE,
    BASE_COLS, BASE_FIRE_RATE, BASE_MARCH_SPEED, BASE_ROWS, FIRE_RATE_PER_WAVE, GRID_TOP,
    MARCH_SPEED_PER_WAVE, MAX_EXTRA_COLS, MAX_EXTRA_ROWS, STEP_DOWN, UFO_FIRST_DELAY,
};
use crate::entities::{Alien, Formation, March};
use crate::geometry::rand_between;

/// Everything a fresh wave installs into the game state.
#[derive(Clone, Debug)]
pub struct Wave {
    pub aliens: Vec<Alien>,
    pub formation: Formation,
    pub ufo_timer: f32,
}

pub fn rows_for(wave: u32) -> u32 {
    BASE_ROWS + wave.min(MAX_EXTRA_ROWS)
}

pub fn cols_for(wave: u32) -> u32 {
    BASE_COLS + wave.min(MAX_EXTRA_COLS)
}

/// Build wave `wave` for a field `field_width` pixels wide.
///
/// Wave numbers start at 1; anything lower is treated as wave 1. The grid is
/// centred horizontally and rows farther from the player are worth more.
pub fn spawn_wave<R: Rng>(wave: u32, field_width: f32, rng: &mut R) -> Wave {
    let wave = if wave == 0 {
        tracing::warn!("wave number 0 requested, clamping to 1");
        1
    } else {
        wave
    };

    let rows = rows_for(wave);
    let cols = cols_for(wave);
    let pitch_x = ALIEN_W + ALIEN_GAP_X;
    let pitch_y = ALIEN_H + ALIEN_GAP_Y;
    let grid_w = cols as f32 * ALIEN_W + (cols - 1) as f32 * ALIEN_GAP_X;
    let start_x = (field_width - grid_w) / 2.0;

    let mut aliens = Vec::with_capacity((rows * cols) as usize);
    for r in 0..rows {
        // Row 0 is the back row; rows - 1 is the front row.
        let depth = rows - 1 - r;
        for c in 0..cols {
            aliens.push(Alien {
                x: start_x + c as f32 * pitch_x,
                y: GRID_TOP + r as f32 * pitch_y,
                w: ALIEN_W,
                h: ALIEN_H,
                alive: true,
                phase: 0.0,
                value: BASE_ALIEN_VALUE + ALIEN_VALUE_PER_ROW * depth,
            });
        }
    }

    let formation = Formation {
        rows,
        cols,
        speed: BASE_MARCH_SPEED + MARCH_SPEED_PER_WAVE * wave as f32,
        step_down: STEP_DOWN,
        fire_rate: BASE_FIRE_RATE + FIRE_RATE_PER_WAVE * wave as f32,
        march: March::Right,
    };

    Wave {
        aliens,
        formation,
        ufo_timer: rand_between(rng, UFO_FIRST_DELAY.0, UFO_FIRST_DELAY.1),
    }
}
