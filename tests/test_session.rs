mod common;

use std::time::{Duration, Instant};

use common::{approx, seeded_rng, Recorder};

use space_invaders::constants::MAX_FRAME_DT;
use space_invaders::entities::{GameStatus, Intent};
use space_invaders::feedback::{Cue, Silent};
use space_invaders::session::*;
use space_invaders::wave::spawn_wave;

const RIGHT: Intent = Intent { left: false, right: true, fire: false };

fn session() -> Session<rand::rngs::StdRng> {
    Session::new(540.0, 720.0, seeded_rng())
}

// ── FrameClock ────────────────────────────────────────────────────────────────

#[test]
fn clock_first_tick_is_zero() {
    let mut clock = FrameClock::new();
    assert_eq!(clock.tick(Instant::now()), 0.0);
}

#[test]
fn clock_measures_and_clamps() {
    let mut clock = FrameClock::new();
    let t0 = Instant::now();
    clock.tick(t0);
    assert!(approx(clock.tick(t0 + Duration::from_millis(10)), 0.01));
    assert_eq!(clock.tick(t0 + Duration::from_secs(5)), MAX_FRAME_DT);
}

#[test]
fn clock_resync_drops_stale_time() {
    let mut clock = FrameClock::new();
    let t0 = Instant::now();
    clock.tick(t0);
    clock.resync();
    assert_eq!(clock.tick(t0 + Duration::from_secs(3)), 0.0);
}

// ── Lifecycle ─────────────────────────────────────────────────────────────────

#[test]
fn new_session_waits_on_title_screen() {
    let s = session();
    assert_eq!(s.status(), GameStatus::Ready);
    assert!(!s.status().is_playing());
}

#[test]
fn reset_restores_initial_state() {
    let mut s = session();
    let mut rec = Recorder::default();
    s.start(&mut rec);
    for _ in 0..30 {
        s.advance(1.0 / 30.0, RIGHT, &mut rec);
    }
    s.reset(&mut rec);

    let st = s.state();
    assert_eq!(st.score, 0);
    assert_eq!(st.wave, 1);
    assert_eq!(st.lives, 3);
    assert_eq!(st.player.x, 270.0);
    assert_eq!(st.elapsed, 0.0);
    assert!(st.shots.is_empty() && st.bombs.is_empty() && st.ufo.is_none());
    assert_eq!(st.status, GameStatus::Ready);
    assert_eq!(rec.hud.last(), Some(&(0, 1, 3)));

    let fresh = spawn_wave(1, 540.0, &mut seeded_rng());
    assert_eq!(st.aliens, fresh.aliens);
    assert_eq!(st.formation, fresh.formation);
}

#[test]
fn start_begins_play_with_cue() {
    let mut s = session();
    let mut rec = Recorder::default();
    s.start(&mut rec);
    assert_eq!(s.status(), GameStatus::Playing);
    assert_eq!(rec.cues, vec![Cue::GameStart]);
    assert_eq!(rec.hud, vec![(0, 1, 3)]);
}

#[test]
fn nothing_moves_before_start() {
    let mut s = session();
    let mut rec = Recorder::default();
    assert_eq!(s.advance(0.02, RIGHT, &mut rec), 0.0);
    assert_eq!(s.state().player.x, 270.0);
    assert!(rec.cues.is_empty());
}

#[test]
fn pause_toggles_only_while_playing() {
    let mut s = session();
    s.toggle_pause();
    assert_eq!(s.status(), GameStatus::Ready);

    s.start(&mut Recorder::default());
    s.toggle_pause();
    assert_eq!(s.status(), GameStatus::Paused);
    assert!(s.status().is_playing());
    s.toggle_pause();
    assert_eq!(s.status(), GameStatus::Playing);
}

#[test]
fn paused_session_does_not_advance() {
    let mut s = session();
    let mut rec = Recorder::default();
    s.start(&mut rec);
    s.toggle_pause();
    assert_eq!(s.advance(0.02, RIGHT, &mut rec), 0.0);
    assert_eq!(s.state().player.x, 270.0);
    assert_eq!(s.state().elapsed, 0.0);
}

#[test]
fn advance_clamps_long_frames() {
    let mut s = session();
    let mut rec = Recorder::default();
    s.start(&mut rec);
    let applied = s.advance(1.0, RIGHT, &mut rec);
    assert_eq!(applied, MAX_FRAME_DT);
    assert!(approx(s.state().player.x, 270.0 + 240.0 * MAX_FRAME_DT));
}

#[test]
fn frame_uses_wall_clock_delta() {
    let mut s = session();
    let mut rec = Recorder::default();
    s.start(&mut rec);
    let t0 = Instant::now();
    assert_eq!(s.frame(t0, RIGHT, &mut rec), 0.0);
    let dt = s.frame(t0 + Duration::from_millis(20), RIGHT, &mut rec);
    assert!(approx(dt, 0.02));
    assert!(approx(s.state().player.x, 274.8));
}

#[test]
fn resume_discards_time_spent_paused() {
    let mut s = session();
    let mut rec = Recorder::default();
    s.start(&mut rec);
    let t0 = Instant::now();
    s.frame(t0, RIGHT, &mut rec);
    s.toggle_pause();
    s.toggle_pause();
    let dt = s.frame(t0 + Duration::from_secs(10), RIGHT, &mut rec);
    assert_eq!(dt, 0.0);
    assert_eq!(s.state().player.x, 270.0);
}

#[test]
fn restart_after_game_over() {
    let mut s = session();
    let mut out = Silent;
    s.start(&mut out);
    // Drive the formation down until it breaches the line three times.
    for _ in 0..200_000 {
        if s.status() == GameStatus::GameOver {
            break;
        }
        s.advance(MAX_FRAME_DT, Intent::default(), &mut out);
    }
    assert_eq!(s.status(), GameStatus::GameOver);
    assert_eq!(s.state().lives, 0);

    s.start(&mut out);
    assert_eq!(s.status(), GameStatus::Playing);
    assert_eq!(s.state().lives, 3);
    assert_eq!(s.state().score, 0);
}
