//! One-way notification channels out of the simulation: audio cues and the
//! HUD. Neither returns anything, and neither can fail from the caller's
//! point of view; a sink that cannot deliver drops the notification.

/// Fixed-role audio cues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    GameStart,
    PlayerFire,
    AlienHit,
    WaveClear,
    BombLaunch,
    UfoSpawn,
    UfoDestroyed,
    LifeLost,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Square,
    Sawtooth,
    Triangle,
}

/// A short synthesized beep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tone {
    pub freq_hz: f32,
    /// Seconds.
    pub duration: f32,
    pub waveform: Waveform,
}

impl Cue {
    pub fn tone(&self) -> Tone {
        let (freq_hz, duration, waveform) = match self {
            Cue::GameStart => (660.0, 0.08, Waveform::Square),
            Cue::PlayerFire => (880.0, 0.05, Waveform::Square),
            Cue::AlienHit => (720.0, 0.06, Waveform::Square),
            Cue::WaveClear => (1040.0, 0.08, Waveform::Square),
            Cue::BombLaunch => (220.0, 0.05, Waveform::Sawtooth),
            Cue::UfoSpawn => (320.0, 0.12, Waveform::Triangle),
            Cue::UfoDestroyed => (1180.0, 0.09, Waveform::Square),
            Cue::LifeLost => (140.0, 0.15, Waveform::Sawtooth),
        };
        Tone {
            freq_hz,
            duration,
            waveform,
        }
    }
}

pub trait Audio {
    /// Fire-and-forget. Implementations must swallow their own failures.
    fn cue(&mut self, cue: Cue);
}

pub trait Hud {
    /// Called whenever score, wave or lives changes.
    fn update_display(&mut self, score: u32, wave: u32, lives: u32);
}

/// Discards everything. Useful for headless runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl Audio for Silent {
    fn cue(&mut self, _cue: Cue) {}
}

impl Hud for Silent {
    fn update_display(&mut self, _score: u32, _wave: u32, _lives: u32) {}
}
