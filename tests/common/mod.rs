#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::SeedableRng;

use space_invaders::compute::init_state;
use space_invaders::entities::{Alien, GameState, GameStatus};
use space_invaders::feedback::{Audio, Cue, Hud};

/// Records every notification the simulation emits.
#[derive(Debug, Default)]
pub struct Recorder {
    pub cues: Vec<Cue>,
    pub hud: Vec<(u32, u32, u32)>,
}

impl Recorder {
    pub fn count(&self, cue: Cue) -> usize {
        self.cues.iter().filter(|&&c| c == cue).count()
    }
}

impl Audio for Recorder {
    fn cue(&mut self, cue: Cue) {
        self.cues.push(cue);
    }
}

impl Hud for Recorder {
    fn update_display(&mut self, score: u32, wave: u32, lives: u32) {
        self.hud.push((score, wave, lives));
    }
}

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

pub fn alien_at(x: f32, y: f32) -> Alien {
    Alien {
        x,
        y,
        w: 24.0,
        h: 18.0,
        alive: true,
        phase: 0.0,
        value: 20,
    }
}

/// A 540 x 720 game in progress with a single harmless alien, no alien fire
/// and no UFO due.
pub fn quiet_state() -> GameState {
    let mut s = init_state(540.0, 720.0, &mut seeded_rng());
    s.status = GameStatus::Playing;
    s.aliens = vec![alien_at(200.0, 100.0)];
    s.formation.fire_rate = 0.0;
    s.ufo_timer = 1000.0;
    s
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}
