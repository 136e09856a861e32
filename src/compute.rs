//! Top-level state machine and the per-tick driver.
//!
//! Public functions take an immutable reference to the current `GameState`
//! (and, where needed, an RNG handle) and return a brand-new `GameState`.
//! Side effects are limited to the injected RNG.

use rand::Rng;
use tracing::{info, warn};

use crate::camera;
use crate::collision;
use crate::config::SimConfig;
use crate::entities::{Entity, GameState, Mode, Player, Session};
use crate::error::SimError;
use crate::events::GameEvent;
use crate::input::Intents;
use crate::level;
use crate::lifecycle::{self, DamageOutcome};
use crate::physics;
use crate::theme::{self, THEMES};

// ── Constructors ──────────────────────────────────────────────────────────────

/// Fresh state sitting in the menu.
pub fn init_state(config: SimConfig) -> GameState {
    GameState {
        mode: Mode::Menu,
        session: None,
        score: 0,
        high_score: 0,
        world_index: 0,
        frame: 0,
        events: Vec::new(),
        config,
    }
}

// ── Mode transitions (pure) ───────────────────────────────────────────────────

/// Menu → Playing at `world_index`, resetting the score.
pub fn start_world(
    state: &GameState,
    world_index: usize,
    rng: &mut impl Rng,
) -> Result<GameState, SimError> {
    let mut next = state.clone();
    begin(&mut next, world_index, rng)?;
    Ok(next)
}

/// Discard the run and go back to the menu.  The high score keeps whatever
/// was already recorded.
pub fn return_to_menu(state: &GameState) -> GameState {
    let mut next = state.clone();
    leave_to_menu(&mut next);
    next
}

// ── Per-tick update ───────────────────────────────────────────────────────────

/// Advance one tick.  Only `Playing` runs the simulation; the other modes
/// just react to intents.
pub fn tick(state: &GameState, intents: &Intents, rng: &mut impl Rng) -> GameState {
    let mut next = state.clone();
    next.frame += 1;
    next.events.clear();

    match next.mode {
        Mode::Menu => {
            if let Some(index) = intents.select_world {
                if let Err(err) = begin(&mut next, index, rng) {
                    warn!(%err, "world selection rejected");
                }
            }
        }
        Mode::Playing if intents.cancel => leave_to_menu(&mut next),
        Mode::Playing => step_playing(&mut next, intents, rng),
        Mode::GameOver | Mode::Victory => {
            if intents.jump || intents.cancel {
                leave_to_menu(&mut next);
            }
        }
    }
    next
}

// ── Internals ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Transition {
    GameOver,
    LevelComplete,
}

fn begin(state: &mut GameState, world_index: usize, rng: &mut impl Rng) -> Result<(), SimError> {
    if theme::theme(world_index).is_none() {
        return Err(SimError::InvalidWorld {
            index: world_index,
            count: THEMES.len(),
        });
    }
    state.score = 0;
    enter_world(state, world_index, rng);
    Ok(())
}

/// Build the world and a fresh player at its spawn point.
fn enter_world(state: &mut GameState, world_index: usize, rng: &mut impl Rng) {
    let theme = &THEMES[world_index];
    let mut world = level::generate(world_index, theme, &state.config, rng);
    let player = Player::new(world.spawn, &state.config);
    world.camera_x = camera::clamp(
        player.bounds.center_x() - state.config.screen_width / 2.0,
        world.level_width,
        &state.config,
    );

    info!(world = world_index, theme = theme.name, "entering world");
    state.world_index = world_index;
    state.session = Some(Session { world, player });
    state.mode = Mode::Playing;
    state.events.push(GameEvent::WorldEntered { world_index });
}

fn leave_to_menu(state: &mut GameState) {
    state.session = None;
    state.mode = Mode::Menu;
}

fn finish(state: &mut GameState, mode: Mode) {
    state.high_score = lifecycle::record_high_score(state.high_score, state.score);
    state.mode = mode;
    info!(?mode, score = state.score, high_score = state.high_score, "run finished");
}

fn step_playing(state: &mut GameState, intents: &Intents, rng: &mut impl Rng) {
    let Some(session) = state.session.as_mut() else {
        leave_to_menu(state);
        return;
    };
    let transition = simulate(
        session,
        intents,
        &state.config,
        &mut state.events,
        &mut state.score,
    );

    match transition {
        Some(Transition::GameOver) => finish(state, Mode::GameOver),
        Some(Transition::LevelComplete) => complete_level(state, rng),
        None => {}
    }
}

/// Physics → entity updates → collision → bounds → camera.
fn simulate(
    session: &mut Session,
    intents: &Intents,
    config: &SimConfig,
    events: &mut Vec<GameEvent>,
    score: &mut u32,
) -> Option<Transition> {
    let Session { world, player } = &mut *session;

    // ── 1. Intents ───────────────────────────────────────────────────────────
    physics::apply_intents(player, intents, config);
    if intents.fire {
        if let Some(projectile) = lifecycle::try_fire(player, config) {
            events.push(GameEvent::ProjectileFired {
                kind: projectile.kind,
                at: projectile.bounds.center(),
            });
            world.projectiles.push(projectile);
        }
    }

    // ── 2. Motion ────────────────────────────────────────────────────────────
    player.tick(config);
    lifecycle::tick_timers(player);
    physics::advance_actors(world, config);

    // ── 3. Interactions ──────────────────────────────────────────────────────
    let resolution = collision::resolve(session, config, events);
    *score += resolution.score;

    let Session { world, player } = &mut *session;
    world.compact();
    if resolution.out_of_lives {
        return Some(Transition::GameOver);
    }
    if resolution.level_complete {
        return Some(Transition::LevelComplete);
    }

    // ── 4. Bounds ────────────────────────────────────────────────────────────
    physics::clamp_to_level(player, world.level_width);
    if lifecycle::fell_out(player, config) {
        events.push(GameEvent::PlayerDamaged {
            at: player.bounds.center(),
        });
        if lifecycle::take_damage(player, world.spawn, config) == DamageOutcome::OutOfLives {
            return Some(Transition::GameOver);
        }
    }
    lifecycle::cull_fallen(world, config);

    // ── 5. Camera ────────────────────────────────────────────────────────────
    world.camera_x = camera::follow(
        world.camera_x,
        player.bounds.center_x(),
        world.level_width,
        config,
    );
    None
}

/// Award the bonus, then move on to the next world or finish with a victory.
fn complete_level(state: &mut GameState, rng: &mut impl Rng) {
    let index = state.world_index;
    let bonus = lifecycle::level_bonus(index);
    state.score += bonus;

    let at = state
        .session
        .as_ref()
        .map(|s| s.world.exit.bounds.center())
        .unwrap_or_default();
    state.events.push(GameEvent::LevelCompleted {
        world_index: index,
        at,
    });
    info!(world = index, bonus, score = state.score, "level complete");

    if index + 1 < THEMES.len() {
        enter_world(state, index + 1, rng);
    } else {
        finish(state, Mode::Victory);
    }
}
