//! Starfall entry point
//!
//! Terminal setup, input handling, and the fixed-rate frame loop. The
//! simulation itself lives in `starfall::sim`; this file only feeds it
//! input snapshots and hands the resulting state to the renderer.

use std::collections::HashMap;
use std::io::{BufWriter, Write, stdout};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::{
    ExecutableCommand, cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal,
};

use starfall::consts::TICK_HZ;
use starfall::renderer;
use starfall::sim::{GamePhase, GameState, TickInput, tick};
use starfall::starfield::Starfield;
use starfall::{HighScores, Settings};

/// Frame budget at the fixed simulation rate
const FRAME: Duration = Duration::from_nanos(1_000_000_000 / TICK_HZ as u64);

/// A key counts as held if its last press/repeat event arrived within this
/// many frames. Covers terminals without key-release events: OS key-repeat
/// runs at 15 Hz or faster, so the window refreshes before it expires.
const HOLD_WINDOW: u64 = 8;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: KeyCode, frame: u64) -> bool {
    key_frame
        .get(&key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn pick_seed(settings: &Settings) -> u64 {
    settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    })
}

/// Fixed-rate frame loop. Returns once the user quits.
///
/// Input model: a `key_frame` map records the frame number of the last
/// press/repeat event for every key; each frame we check which keys are
/// still fresh and treat those as held. Works both on terminals with
/// key-release reporting and on classic ones where keys expire after
/// `HOLD_WINDOW` frames of silence.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    stars: &mut Option<Starfield>,
    scores: &mut HighScores,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut restart_pending = false;
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // Drain all pending input events (non-blocking)
        while let Ok(Event::Key(KeyEvent {
            code,
            kind,
            modifiers,
            ..
        })) = rx.try_recv()
        {
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            return Ok(());
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        // Restart is a discrete press, not a held key
                        KeyCode::Char(' ') | KeyCode::Char('r') | KeyCode::Char('R')
                            if state.phase == GamePhase::GameOver =>
                        {
                            restart_pending = true;
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

        let input = TickInput {
            move_left: is_held(&key_frame, KeyCode::Left, frame)
                || is_held(&key_frame, KeyCode::Char('a'), frame)
                || is_held(&key_frame, KeyCode::Char('A'), frame),
            move_right: is_held(&key_frame, KeyCode::Right, frame)
                || is_held(&key_frame, KeyCode::Char('d'), frame)
                || is_held(&key_frame, KeyCode::Char('D'), frame),
            fire: is_held(&key_frame, KeyCode::Char(' '), frame),
            restart: restart_pending,
        };

        let phase_before = state.phase;
        tick(state, &input);
        restart_pending = false; // one-shot, consumed by the tick

        if phase_before == GamePhase::Playing && state.phase == GamePhase::GameOver {
            if let Some(rank) = scores.add_score(state.score, state.frame) {
                log::info!(
                    "run over: score {} after {} frames (rank {})",
                    state.score,
                    state.frame,
                    rank
                );
            }
        }
        if phase_before == GamePhase::GameOver && state.phase == GamePhase::Playing {
            // Fresh run gets a fresh sky
            if let Some(stars) = stars {
                stars.reset();
            }
            log::info!("restart, high score {}", state.high_score);
        }

        // The starfield drifts in every phase, including game over
        if let Some(stars) = stars {
            stars.update();
        }

        renderer::render(out, state, stars.as_ref())?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

fn main() -> std::io::Result<()> {
    env_logger::init();

    let settings = Settings::load();
    let seed = pick_seed(&settings);
    log::info!(
        "starfall starting: {}x{} field, seed {}",
        settings.field_width,
        settings.field_height,
        seed
    );

    let mut state = GameState::new(seed, settings.field_width, settings.field_height);
    let mut stars = settings
        .starfield
        .then(|| Starfield::new(seed ^ 0x5f37_59df, settings.field_width, settings.field_height));
    let mut scores = HighScores::new();

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Key-release reporting where the terminal supports it; classic
    // terminals fall back to the hold-window heuristic.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // A dedicated thread does the blocking event reads so the frame loop
    // never waits on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break; // receiver dropped, program exiting
                    }
                }
                Err(_) => break,
            }
        }
    });

    let result = game_loop(&mut out, &mut state, &mut stars, &mut scores, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    // A run cut short by quitting still counts for the session board
    if state.phase == GamePhase::Playing {
        scores.add_score(state.score, state.frame);
    }
    match scores.top_score() {
        Some(top) => log::info!("session over, best score {}", top),
        None => log::info!("session over"),
    }

    result
}
