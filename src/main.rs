mod display;
mod sound;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::filter::EnvFilter;

use space_invaders::config::{Config, DEFAULT_FPS};
use space_invaders::constants::{FIELD_HEIGHT, FIELD_WIDTH};
use space_invaders::entities::Intent;
use space_invaders::feedback::{Audio, Cue, Hud};
use space_invaders::session::Session;

use display::HudLine;
use sound::Speaker;

#[derive(Parser, Debug)]
#[command(name = "space_invaders")]
#[command(about = "Space Invaders in the terminal")]
struct Cli {
    /// Logical field width in pixels
    #[arg(long, default_value_t = FIELD_WIDTH)]
    width: f32,
    /// Logical field height in pixels
    #[arg(long, default_value_t = FIELD_HEIGHT)]
    height: f32,
    /// Target frames per second
    #[arg(long, default_value_t = DEFAULT_FPS)]
    fps: u32,
    /// Start with sound off
    #[arg(long)]
    mute: bool,
    /// Seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,
    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            width: self.width,
            height: self.height,
            fps: self.fps,
            sound: !self.mute,
            seed: self.seed,
        }
    }
}

// ── Held-key input ────────────────────────────────────────────────────────────

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames. Covers terminals that don't emit key-release events:
/// OS key-repeat is well above 10 Hz, so at 60 FPS a window of 8 frames is
/// refreshed before it expires.
const HOLD_WINDOW: u64 = 8;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn any_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|k| is_held(key_frame, k, frame))
}

fn intent(key_frame: &HashMap<KeyCode, u64>, frame: u64) -> Intent {
    Intent {
        left: any_held(
            key_frame,
            &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')],
            frame,
        ),
        right: any_held(
            key_frame,
            &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')],
            frame,
        ),
        fire: is_held(key_frame, &KeyCode::Char(' '), frame),
    }
}

// ── Feedback sinks ────────────────────────────────────────────────────────────

/// Terminal audio and HUD collaborators handed to the simulation.
struct Feedback {
    hud: HudLine,
    speaker: Speaker,
}

impl Audio for Feedback {
    fn cue(&mut self, cue: Cue) {
        self.speaker.cue(cue);
    }
}

impl Hud for Feedback {
    fn update_display(&mut self, score: u32, wave: u32, lives: u32) {
        self.hud.update_display(score, wave, lives);
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Input model: every key's last press/repeat frame is recorded in
/// `key_frame`; each frame the keys still "fresh" form the intent snapshot,
/// so Space and a direction can be held together. One-shot keys (pause,
/// restart, sound, quit) act on press.
fn game_loop<W: Write>(
    out: &mut W,
    session: &mut Session<StdRng>,
    feedback: &mut Feedback,
    rx: &mpsc::Receiver<Event>,
    config: &Config,
) -> Result<()> {
    let frame_budget = config.frame_interval();
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = ev
            else {
                continue;
            };
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        KeyCode::Char('p') | KeyCode::Char('P') => session.toggle_pause(),
                        KeyCode::Char('r') | KeyCode::Char('R') => session.reset(feedback),
                        KeyCode::Char('m') | KeyCode::Char('M') => feedback.speaker.toggle(),
                        KeyCode::Char(' ') if !session.status().is_playing() => {
                            session.start(feedback);
                        }
                        _ => {}
                    }
                }
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        let input = intent(&key_frame, frame);
        session.frame(frame_start, input, feedback);

        let size = terminal::size().context("reading terminal size")?;
        display::render(
            out,
            session.state(),
            &feedback.hud,
            feedback.speaker.enabled,
            size,
        )
        .context("drawing frame")?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            thread::sleep(frame_budget - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();
    config.validate()?;
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = Session::new(config.width, config.height, rng);
    let mut feedback = Feedback {
        hud: HudLine::default(),
        speaker: Speaker::new(config.sound),
    };
    session.reset(&mut feedback);

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode().context("enabling raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &mut session, &mut feedback, &rx, &config);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
