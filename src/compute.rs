/// Game-logic functions.
///
/// `step` advances the whole world by one time delta. It is the only code
/// that mutates entities during play; randomness and feedback sinks are
/// injected so callers control determinism (tests use a seeded RNG).

use std::collections::BTreeMap;

use rand::Rng;

use crate::constants::{
    ANIMATION_RATE, BOMB_EXIT_MARGIN, BREACH_PUSHBACK, FIRE_COOLDOWN, FORMATION_EDGE_MARGIN,
    LANE_WIDTH, PLAYER_BOTTOM_OFFSET, PLAYER_HALF_H, PLAYER_HALF_W, PLAYER_LINE_GUARD,
    PLAYER_MARGIN, PLAYER_SPEED, PRESSURE_GAIN, STARTING_LIVES, UFO_BASE_VALUE,
    UFO_ENTRY_OFFSET, UFO_EXIT_MARGIN, UFO_H, UFO_RESPAWN_DELAY, UFO_SPEED, UFO_VALUE_PER_WAVE,
    UFO_W, UFO_Y,
};
use crate::entities::{GameState, GameStatus, Intent, Player, Projectile, Ufo};
use crate::feedback::{Audio, Cue, Hud};
use crate::geometry::{clamp, rand_between};
use crate::wave::spawn_wave;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a fresh wave-1 game for a `width` x `height` field, not yet started.
pub fn init_state<R: Rng>(width: f32, height: f32, rng: &mut R) -> GameState {
    let wave = spawn_wave(1, width, rng);
    GameState {
        player: Player {
            x: width / 2.0,
            y: height - PLAYER_BOTTOM_OFFSET,
            half_w: PLAYER_HALF_W,
            half_h: PLAYER_HALF_H,
            speed: PLAYER_SPEED,
            cooldown: 0.0,
        },
        shots: Vec::new(),
        bombs: Vec::new(),
        aliens: wave.aliens,
        ufo: None,
        formation: wave.formation,
        ufo_timer: wave.ufo_timer,
        score: 0,
        wave: 1,
        lives: STARTING_LIVES,
        elapsed: 0.0,
        status: GameStatus::Ready,
        width,
        height,
    }
}

// ── Per-frame step ───────────────────────────────────────────────────────────

/// Advance the simulation by exactly `dt` seconds. Does nothing unless the
/// game is `Playing`. The driver is responsible for bounding `dt`.
pub fn step<R, F>(state: &mut GameState, input: Intent, dt: f32, rng: &mut R, out: &mut F)
where
    R: Rng,
    F: Audio + Hud + ?Sized,
{
    if state.status != GameStatus::Playing {
        return;
    }
    state.elapsed += dt;

    move_player(state, input, dt);
    player_fire(state, input, out);
    update_aliens(state, dt, rng, out);
    if state.status == GameStatus::GameOver {
        return;
    }
    update_ufo(state, dt, rng, out);
    advance_projectiles(state, dt);
    resolve_shots(state, out);
    resolve_bombs(state, out);
}

// ── 1. Player motion ─────────────────────────────────────────────────────────

fn move_player(state: &mut GameState, input: Intent, dt: f32) {
    let max_x = state.width - PLAYER_MARGIN;
    let p = &mut state.player;
    p.x = clamp(p.x + input.direction() * p.speed * dt, PLAYER_MARGIN, max_x);
    p.cooldown = (p.cooldown - dt).max(0.0);
}

// ── 2. Fire ──────────────────────────────────────────────────────────────────

fn player_fire<F: Audio + ?Sized>(state: &mut GameState, input: Intent, out: &mut F) {
    if !input.fire || state.player.cooldown > 0.0 {
        return;
    }
    state
        .shots
        .push(Projectile::shot(state.player.x, state.player.y));
    state.player.cooldown = FIRE_COOLDOWN;
    out.cue(Cue::PlayerFire);
}

// ── 3. Alien group ───────────────────────────────────────────────────────────

fn update_aliens<R, F>(state: &mut GameState, dt: f32, rng: &mut R, out: &mut F)
where
    R: Rng,
    F: Audio + Hud + ?Sized,
{
    let total = state.aliens.len();
    let alive = state.alive_aliens().count();
    if alive == 0 {
        out.cue(Cue::WaveClear);
        next_wave(state, rng, out);
        return;
    }

    let mut min_x = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;
    for a in state.alive_aliens() {
        min_x = min_x.min(a.x);
        max_x = max_x.max(a.x + a.w);
        max_y = max_y.max(a.y + a.h);
    }

    let fraction_alive = alive as f32 / total as f32;
    let pressure = (1.0 + (1.0 - fraction_alive) * PRESSURE_GAIN).max(1.0);
    let dx = state.formation.march.sign() * state.formation.speed * pressure * dt;

    if min_x + dx < FORMATION_EDGE_MARGIN || max_x + dx > state.width - FORMATION_EDGE_MARGIN {
        let step_down = state.formation.step_down;
        for a in state.aliens.iter_mut().filter(|a| a.alive) {
            a.y += step_down;
        }
        state.formation.march = state.formation.march.reversed();
        tracing::debug!(march = ?state.formation.march, "formation reversed");
    } else {
        for a in state.aliens.iter_mut().filter(|a| a.alive) {
            a.x += dx;
            a.phase += dt * ANIMATION_RATE;
        }
    }

    if max_y >= state.player.y - PLAYER_LINE_GUARD {
        lose_life(state, true, out);
        if state.status == GameStatus::GameOver {
            return;
        }
    }

    let shooters = front_shooters(state);
    let fire_chance = state.formation.fire_rate * dt;
    if rng.gen::<f32>() < fire_chance && !shooters.is_empty() {
        let pick = shooters[rng.gen_range(0..shooters.len())];
        let bomb = Projectile::bomb(&state.aliens[pick]);
        state.bombs.push(bomb);
        out.cue(Cue::BombLaunch);
    }
}

/// Indices of the aliens allowed to fire: the lowest alive alien in each
/// lane, lanes in ascending order.
pub fn front_shooters(state: &GameState) -> Vec<usize> {
    let mut front: BTreeMap<i32, usize> = BTreeMap::new();
    for (i, a) in state.aliens.iter().enumerate() {
        if !a.alive {
            continue;
        }
        let lane = (a.x / LANE_WIDTH).round() as i32;
        match front.get(&lane) {
            Some(&j) if state.aliens[j].y >= a.y => {}
            _ => {
                front.insert(lane, i);
            }
        }
    }
    front.into_values().collect()
}

// ── 4. UFO ───────────────────────────────────────────────────────────────────

fn update_ufo<R, F>(state: &mut GameState, dt: f32, rng: &mut R, out: &mut F)
where
    R: Rng,
    F: Audio + ?Sized,
{
    state.ufo_timer -= dt;
    if state.ufo_timer <= 0.0 && state.ufo.is_none() {
        let from_left = rng.gen_bool(0.5);
        let (x, vx) = if from_left {
            (-UFO_ENTRY_OFFSET, UFO_SPEED)
        } else {
            (state.width + UFO_ENTRY_OFFSET, -UFO_SPEED)
        };
        state.ufo = Some(Ufo {
            x,
            y: UFO_Y,
            w: UFO_W,
            h: UFO_H,
            vx,
            value: UFO_BASE_VALUE + UFO_VALUE_PER_WAVE * state.wave,
        });
        out.cue(Cue::UfoSpawn);
        state.ufo_timer = rand_between(rng, UFO_RESPAWN_DELAY.0, UFO_RESPAWN_DELAY.1);
        tracing::debug!(from_left, next_in = state.ufo_timer, "ufo spawned");
    }

    let mut exited = false;
    if let Some(ufo) = state.ufo.as_mut() {
        ufo.x += ufo.vx * dt;
        exited = ufo.x < -UFO_EXIT_MARGIN || ufo.x > state.width + UFO_EXIT_MARGIN;
    }
    if exited {
        state.ufo = None;
    }
}

// ── 5. Projectiles ───────────────────────────────────────────────────────────

fn advance_projectiles(state: &mut GameState, dt: f32) {
    for s in state.shots.iter_mut() {
        s.y += s.vy * dt;
    }
    state.shots.retain(|s| s.y + s.h > 0.0);

    for b in state.bombs.iter_mut() {
        b.y += b.vy * dt;
    }
    let floor = state.height + BOMB_EXIT_MARGIN;
    state.bombs.retain(|b| b.y < floor);
}

// ── 6. Shots vs UFO and aliens ───────────────────────────────────────────────

fn resolve_shots<F: Audio + Hud + ?Sized>(state: &mut GameState, out: &mut F) {
    let mut shots = std::mem::take(&mut state.shots);

    for shot in shots.iter_mut() {
        let hitbox = shot.rect();

        let ufo_hit = state
            .ufo
            .as_ref()
            .map_or(false, |u| hitbox.intersects(&u.rect()));
        if ufo_hit {
            if let Some(ufo) = state.ufo.take() {
                state.score += ufo.value;
                shot.spent = true;
                out.cue(Cue::UfoDestroyed);
                out.update_display(state.score, state.wave, state.lives);
                tracing::debug!(value = ufo.value, "ufo destroyed");
            }
        }
        if shot.spent {
            continue;
        }

        // One shot kills at most one alien.
        if let Some(alien) = state
            .aliens
            .iter_mut()
            .find(|a| a.alive && hitbox.intersects(&a.rect()))
        {
            alien.alive = false;
            state.score += alien.value;
            shot.spent = true;
            out.cue(Cue::AlienHit);
            out.update_display(state.score, state.wave, state.lives);
        }
    }

    shots.retain(|s| !s.spent);
    state.shots = shots;
}

// ── 7. Bombs vs player ───────────────────────────────────────────────────────

/// Only the first bomb touching the player this tick counts; the others are
/// cleared along with it by the life-loss reset.
fn resolve_bombs<F: Audio + Hud + ?Sized>(state: &mut GameState, out: &mut F) {
    let hitbox = state.player.rect();
    if let Some(i) = state
        .bombs
        .iter()
        .position(|b| b.rect().intersects(&hitbox))
    {
        state.bombs.remove(i);
        lose_life(state, false, out);
    }
}

// ── Wave / life transitions ──────────────────────────────────────────────────

/// Install the next wave's grid and parameters.
pub fn next_wave<R, F>(state: &mut GameState, rng: &mut R, out: &mut F)
where
    R: Rng,
    F: Hud + ?Sized,
{
    state.wave += 1;
    let wave = spawn_wave(state.wave, state.width, rng);
    state.aliens = wave.aliens;
    state.formation = wave.formation;
    state.ufo_timer = wave.ufo_timer;
    out.update_display(state.score, state.wave, state.lives);
    tracing::info!(wave = state.wave, score = state.score, "wave cleared");
}

/// Take one life. `instant` marks a breach of the player line, which also
/// pushes the whole formation back up.
pub fn lose_life<F: Audio + Hud + ?Sized>(state: &mut GameState, instant: bool, out: &mut F) {
    state.lives = state.lives.saturating_sub(1);
    out.update_display(state.score, state.wave, state.lives);
    out.cue(Cue::LifeLost);
    tracing::info!(lives = state.lives, instant, "life lost");

    if state.lives == 0 {
        state.status = GameStatus::GameOver;
        tracing::info!(score = state.score, wave = state.wave, "game over");
        return;
    }

    state.shots.clear();
    state.bombs.clear();
    state.ufo = None;
    state.player.x = state.width / 2.0;
    if instant {
        for a in state.aliens.iter_mut() {
            a.y -= BREACH_PUSHBACK;
        }
    }
}
