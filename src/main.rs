mod display;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

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
use tracing::info;

use platformer::clock::FixedStep;
use platformer::compute::{init_state, tick};
use platformer::config::SimConfig;
use platformer::entities::{GameState, Mode};
use platformer::input::Intents;
use platformer::logging;
use platformer::snapshot::snapshot;

/// Redraw cadence; the simulation itself runs at `SimConfig::tick_rate`.
const FRAME: Duration = Duration::from_millis(33);

/// A key is considered "held" if its last press/repeat event arrived within
/// this window.  Covers terminals that don't emit key-release events: the OS
/// key-repeat rate is ≥ 15 Hz, so the window is refreshed before expiry.
const HOLD_WINDOW: Duration = Duration::from_millis(140);

fn is_held(pressed: &HashMap<KeyCode, Instant>, keys: &[KeyCode], now: Instant) -> bool {
    keys.iter().any(|key| {
        pressed
            .get(key)
            .map(|&last| now.duration_since(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    })
}

fn log_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".platformer.log")
}

// ── Input ─────────────────────────────────────────────────────────────────────

enum Control {
    Continue,
    Quit,
}

/// Drain pending key events into the held-key map and the one-shot intents.
fn poll_input(
    rx: &mpsc::Receiver<Event>,
    pressed: &mut HashMap<KeyCode, Instant>,
    one_shot: &mut Intents,
) -> Control {
    let now = Instant::now();
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
                pressed.insert(code, now);
                match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') => return Control::Quit,
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        return Control::Quit;
                    }
                    KeyCode::Esc => one_shot.cancel = true,
                    KeyCode::Char(d @ '1'..='9') => {
                        one_shot.select_world = d.to_digit(10).map(|n| n as usize - 1);
                    }
                    _ => {}
                }
            }
            KeyEventKind::Repeat => {
                pressed.insert(code, now);
            }
            KeyEventKind::Release => {
                pressed.remove(&code);
            }
        }
    }
    Control::Continue
}

fn held_intents(pressed: &HashMap<KeyCode, Instant>, one_shot: Intents) -> Intents {
    let now = Instant::now();
    Intents {
        move_left: is_held(pressed, &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')], now),
        move_right: is_held(
            pressed,
            &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')],
            now,
        ),
        run: is_held(pressed, &[KeyCode::Char('z'), KeyCode::Char('Z')], now),
        jump: is_held(
            pressed,
            &[KeyCode::Char(' '), KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')],
            now,
        ),
        fire: is_held(pressed, &[KeyCode::Char('x'), KeyCode::Char('X')], now),
        ..one_shot
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let mut rng = StdRng::from_entropy();
    let mut clock = FixedStep::new(state.config.tick_rate);
    let mut pressed: HashMap<KeyCode, Instant> = HashMap::new();
    let mut last = Instant::now();
    // Edge-triggered intents wait here until a tick consumes them.
    let mut one_shot = Intents::default();

    loop {
        let frame_start = Instant::now();

        if let Control::Quit = poll_input(rx, &mut pressed, &mut one_shot) {
            return Ok(());
        }

        let due = clock.advance(frame_start.duration_since(last));
        last = frame_start;
        for _ in 0..due {
            let intents = held_intents(&pressed, one_shot);
            *state = tick(state, &intents, &mut rng);
            one_shot = Intents::default();
        }

        match state.mode {
            Mode::Menu => display::render_menu(out, state.high_score)?,
            _ => display::render(out, &snapshot(state))?,
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => SimConfig::load(Path::new(&path))
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?,
        None => SimConfig::default(),
    };
    logging::init(&log_path())?;
    info!(tick_rate = config.tick_rate, "starting");

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
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

    let mut state = init_state(config);
    let result = game_loop(&mut out, &mut state, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!(high_score = state.high_score, "exiting");
    result
}
