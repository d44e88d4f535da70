/// Rendering layer — all terminal output lives here.
///
/// The simulation works in logical field pixels; `Viewport` maps them onto
/// whatever terminal grid is available. `render` only reads the game state.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use space_invaders::entities::{Alien, GameState, GameStatus, Projectile, Ufo};
use space_invaders::feedback::Hud;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_PLAYER: Color = Color::Green;
const C_ALIEN: Color = Color::Blue;
const C_SHOT: Color = Color::White;
const C_BOMB: Color = Color::Red;
const C_UFO: Color = Color::Yellow;
const C_STAR: Color = Color::DarkGrey;
const C_HINT: Color = Color::DarkGrey;

const STAR_COUNT: u32 = 60;

// ── HUD collaborator ──────────────────────────────────────────────────────────

/// Cached HUD values, refreshed only when the simulation reports a change.
#[derive(Clone, Debug, Default)]
pub struct HudLine {
    score: u32,
    wave: u32,
    lives: u32,
}

impl Hud for HudLine {
    fn update_display(&mut self, score: u32, wave: u32, lives: u32) {
        self.score = score;
        self.wave = wave;
        self.lives = lives;
    }
}

// ── Coordinate mapping ────────────────────────────────────────────────────────

/// Maps field pixels onto the terminal cells inside the border.
struct Viewport {
    cols: u16,
    rows: u16,
    sx: f32,
    sy: f32,
}

impl Viewport {
    fn new(state: &GameState, width: u16, height: u16) -> Self {
        // Border occupies col 0 / width-1 and rows 1 / height-2; row 0 is the HUD.
        let cols = width.saturating_sub(2).max(1);
        let rows = height.saturating_sub(4).max(1);
        Viewport {
            cols,
            rows,
            sx: cols as f32 / state.width,
            sy: rows as f32 / state.height,
        }
    }

    fn cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        let c = (x * self.sx).floor();
        let r = (y * self.sy).floor();
        if c < 0.0 || r < 0.0 || c >= self.cols as f32 || r >= self.rows as f32 {
            return None;
        }
        Some((c as u16 + 1, r as u16 + 2))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame onto a `width` x `height` terminal.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    hud: &HudLine,
    sound: bool,
    (width, height): (u16, u16),
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let view = Viewport::new(state, width, height);

    draw_border(out, width, height)?;
    draw_hud(out, hud, sound, width)?;
    draw_stars(out, state, &view)?;

    for alien in state.aliens.iter().filter(|a| a.alive) {
        draw_alien(out, alien, &view)?;
    }
    if let Some(ufo) = &state.ufo {
        draw_ufo(out, ufo, &view)?;
    }
    for shot in &state.shots {
        draw_projectile(out, shot, "║", C_SHOT, &view)?;
    }
    for bomb in &state.bombs {
        draw_projectile(out, bomb, "↓", C_BOMB, &view)?;
    }
    draw_player(out, state, &view)?;
    draw_controls_hint(out, height)?;

    match state.status {
        GameStatus::Ready => draw_overlay(
            out,
            width,
            height,
            &[
                ("SPACE  INVADERS", Color::Cyan),
                ("SPACE - Play   Q - Quit", Color::White),
            ],
        )?,
        GameStatus::Paused => draw_overlay(
            out,
            width,
            height,
            &[("PAUSED", Color::Cyan), ("P - Resume", Color::White)],
        )?,
        GameStatus::GameOver => {
            let score_line = format!("Final Score: {}", state.score);
            draw_overlay(
                out,
                width,
                height,
                &[
                    ("GAME  OVER", Color::Red),
                    (score_line.as_str(), Color::Yellow),
                    ("SPACE - Play Again   Q - Quit", Color::White),
                ],
            )?
        }
        GameStatus::Playing => {}
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, width: u16, height: u16) -> std::io::Result<()> {
    let w = width as usize;
    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, height.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..height.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, hud: &HudLine, sound: bool, width: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!("Score: {:>6}   Wave: {}", hud.score, hud.wave)))?;

    let sound_tag = if sound { "♪ " } else { "  " };
    let lives_text = format!("{}Lives: {}", sound_tag, "♥".repeat(hud.lives as usize));
    let rx = width.saturating_sub(lives_text.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_text))?;
    Ok(())
}

// ── Backdrop ──────────────────────────────────────────────────────────────────

/// Fixed star pattern drifting down with elapsed time.
fn draw_stars<W: Write>(out: &mut W, state: &GameState, view: &Viewport) -> std::io::Result<()> {
    let w = state.width.max(1.0) as u32;
    let h = state.height.max(1.0) as u32;
    let drift = (state.elapsed * 10.0) as u32;
    out.queue(style::SetForegroundColor(C_STAR))?;
    for i in 0..STAR_COUNT {
        let x = (i * 73) % w;
        let y = (i * 97 + drift) % h;
        if let Some((c, r)) = view.cell(x as f32, y as f32) {
            out.queue(cursor::MoveTo(c, r))?;
            out.queue(Print("·"))?;
        }
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(out: &mut W, state: &GameState, view: &Viewport) -> std::io::Result<()> {
    //   ▲      ← cannon
    //  /█\     ← hull
    let p = &state.player;
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    if let Some((c, r)) = view.cell(p.x, p.y) {
        out.queue(cursor::MoveTo(c.saturating_sub(1).max(1), r))?;
        out.queue(Print("/█\\"))?;
        if r > 2 {
            out.queue(cursor::MoveTo(c, r - 1))?;
            out.queue(Print("▲"))?;
        }
    }
    Ok(())
}

fn draw_alien<W: Write>(out: &mut W, alien: &Alien, view: &Viewport) -> std::io::Result<()> {
    // Two-frame walk cycle, one frame per whole phase step.
    let sprite = if (alien.phase as u32) % 2 == 0 { "<o>" } else { ">o<" };
    if let Some((c, r)) = view.cell(alien.x + alien.w / 2.0, alien.y + alien.h / 2.0) {
        out.queue(style::SetForegroundColor(C_ALIEN))?;
        out.queue(cursor::MoveTo(c.saturating_sub(1).max(1), r))?;
        out.queue(Print(sprite))?;
    }
    Ok(())
}

fn draw_ufo<W: Write>(out: &mut W, ufo: &Ufo, view: &Viewport) -> std::io::Result<()> {
    if let Some((c, r)) = view.cell(ufo.x + ufo.w / 2.0, ufo.y + ufo.h / 2.0) {
        out.queue(style::SetForegroundColor(C_UFO))?;
        out.queue(cursor::MoveTo(c.saturating_sub(2).max(1), r))?;
        out.queue(Print("<=@=>"))?;
    }
    Ok(())
}

fn draw_projectile<W: Write>(
    out: &mut W,
    p: &Projectile,
    glyph: &str,
    color: Color,
    view: &Viewport,
) -> std::io::Result<()> {
    if let Some((c, r)) = view.cell(p.x + p.w / 2.0, p.y + p.h / 2.0) {
        out.queue(cursor::MoveTo(c, r))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, height: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(
        "← → / A D : Move   SPACE : Fire   P : Pause   R : Restart   M : Sound   Q : Quit",
    ))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_overlay<W: Write>(
    out: &mut W,
    width: u16,
    height: u16,
    lines: &[(&str, Color)],
) -> std::io::Result<()> {
    let cx = width / 2;
    let start_row = (height / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}
