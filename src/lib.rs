//! Space Invaders simulation core.
//!
//! The library owns the per-frame simulation and the session lifecycle; the
//! binary drives it from the terminal and draws the result.

pub mod compute;
pub mod config;
pub mod constants;
pub mod entities;
pub mod feedback;
pub mod geometry;
pub mod session;
pub mod wave;
