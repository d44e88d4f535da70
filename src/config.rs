//! Runtime configuration and its validation.

use std::time::Duration;

use thiserror::Error;

use crate::constants::{FIELD_HEIGHT, FIELD_WIDTH, MIN_FIELD_HEIGHT, MIN_FIELD_WIDTH};

pub const DEFAULT_FPS: u32 = 60;
pub const MAX_FPS: u32 = 240;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("field width {width} is below the minimum of {min}")]
    FieldTooNarrow { width: f32, min: f32 },
    #[error("field height {height} is below the minimum of {min}")]
    FieldTooShort { height: f32, min: f32 },
    #[error("frame rate must be between 1 and {max}, got {fps}")]
    FrameRate { fps: u32, max: u32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Logical field size in pixels.
    pub width: f32,
    pub height: f32,
    /// Target display frames per second.
    pub fps: u32,
    pub sound: bool,
    /// Fixed RNG seed for a reproducible session.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            fps: DEFAULT_FPS,
            sound: true,
            seed: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width.is_nan() || self.width < MIN_FIELD_WIDTH {
            return Err(ConfigError::FieldTooNarrow {
                width: self.width,
                min: MIN_FIELD_WIDTH,
            });
        }
        if self.height.is_nan() || self.height < MIN_FIELD_HEIGHT {
            return Err(ConfigError::FieldTooShort {
                height: self.height,
                min: MIN_FIELD_HEIGHT,
            });
        }
        if self.fps == 0 || self.fps > MAX_FPS {
            return Err(ConfigError::FrameRate {
                fps: self.fps,
                max: MAX_FPS,
            });
        }
        Ok(())
    }

    /// Wall-clock budget of one display frame.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps.max(1) as f64)
    }
}
