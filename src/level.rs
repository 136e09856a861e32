//! Procedural level construction.
//!
//! All randomness comes through the injected `rng`, so a seeded generator
//! reproduces the same layout.  Placements are only bounded by the level
//! width: enemies and pickups may float over gaps, and floating platforms
//! (including the full path of horizontal movers) never cross either edge.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::SimConfig;
use crate::entities::{
    Aabb, Axis, Enemy, EnemyKind, Pickup, Platform, Point, PowerUp, World,
};
use crate::theme::WorldTheme;

// ── Layout constants ──────────────────────────────────────────────────────────

const BLOCK_WIDTH: u32 = 100;
/// Terrain is always solid before this x.
const SAFE_START: u32 = 300;
const GAP_CHANCE: f64 = 0.15;
const FLOATING_START: u32 = 400;
const FLOATING_CHANCE: f64 = 0.5;
const MOVING_CHANCE: f64 = 0.4;
const FLOATING_HEIGHT: f32 = 25.0;
const ARC_COINS: u32 = 5;
const ARC_SPACING: f32 = 30.0;

/// Level width for a 1-based world number.
pub fn level_width(world_number: u32) -> u32 {
    4000 + 500 * world_number
}

pub fn enemy_count(world_number: u32) -> u32 {
    8 + 4 * world_number
}

pub fn power_up_count(world_number: u32) -> u32 {
    4 + 2 * world_number
}

/// Number of coin placements; each is a single coin or a 5-coin arc.
pub fn coin_placements(world_number: u32) -> u32 {
    30 + 10 * world_number
}

/// Enemy kinds available in a world; the pool grows with the world number.
pub fn enemy_pool(world_number: u32) -> &'static [EnemyKind] {
    let n = (world_number as usize + 2).min(EnemyKind::ALL.len());
    &EnemyKind::ALL[..n]
}

// ── Generator ─────────────────────────────────────────────────────────────────

/// Build the world at 0-based `index`.
pub fn generate(
    index: usize,
    theme: &'static WorldTheme,
    config: &SimConfig,
    rng: &mut impl Rng,
) -> World {
    let number = index as u32 + 1;
    let width = level_width(number);
    let mut world = World::empty(index, theme, width as f32);

    build_terrain(&mut world, width, config, rng);
    place_enemies(&mut world, number, width, config, rng);
    place_power_ups(&mut world, number, width, rng);
    place_coins(&mut world, number, width, rng);

    debug!(
        world = index,
        platforms = world.platforms.len(),
        enemies = world.enemies.len(),
        pickups = world.pickups.len(),
        "level generated"
    );
    world
}

/// Convenience for reproducible layouts.
pub fn generate_seeded(
    index: usize,
    theme: &'static WorldTheme,
    config: &SimConfig,
    seed: u64,
) -> World {
    generate(index, theme, config, &mut StdRng::seed_from_u64(seed))
}

fn build_terrain(world: &mut World, width: u32, config: &SimConfig, rng: &mut impl Rng) {
    for x in (0..width).step_by(BLOCK_WIDTH as usize) {
        if x >= SAFE_START && rng.gen_bool(GAP_CHANCE) {
            continue;
        }
        let height = rng.gen_range(100..=200) as f32;
        let top = config.screen_height - height;
        world.platforms.push(Platform::fixed(Aabb::new(
            x as f32,
            top,
            BLOCK_WIDTH as f32,
            height,
        )));

        if x > FLOATING_START && rng.gen_bool(FLOATING_CHANCE) {
            let y = top - rng.gen_range(180..=350) as f32;
            let w = rng.gen_range(80..=150) as f32;
            let px = (x as i32 + rng.gen_range(-50..=50)) as f32;
            let right_limit = width as f32 - w;

            let platform = if rng.gen_bool(MOVING_CHANCE) {
                let range = rng.gen_range(100..=200) as f32;
                let speed = rng.gen_range(60.0..180.0);
                let (axis, px) = if rng.gen_bool(0.5) {
                    (Axis::Vertical, px.min(right_limit))
                } else {
                    // Whole sweep origin ± range stays inside the level.
                    (Axis::Horizontal, px.clamp(range, right_limit - range))
                };
                let bounds = Aabb::new(px, y, w, FLOATING_HEIGHT);
                Platform::moving(bounds, axis, range, speed)
            } else {
                Platform::fixed(Aabb::new(px.min(right_limit), y, w, FLOATING_HEIGHT))
            };
            world.platforms.push(platform);
        }
    }
}

fn place_enemies(
    world: &mut World,
    number: u32,
    width: u32,
    config: &SimConfig,
    rng: &mut impl Rng,
) {
    let pool = enemy_pool(number);
    for _ in 0..enemy_count(number) {
        let x = rng.gen_range(400..=width - 300) as f32;
        let y = rng.gen_range(100..=400) as f32;
        let kind = pool[rng.gen_range(0..pool.len())];
        let vx = if rng.gen_bool(0.5) {
            -config.enemy_speed
        } else {
            config.enemy_speed
        };
        world.enemies.push(Enemy::new(kind, Point::new(x, y), vx));
    }
}

fn place_power_ups(world: &mut World, number: u32, width: u32, rng: &mut impl Rng) {
    for _ in 0..power_up_count(number) {
        let x = rng.gen_range(500..=width - 400) as f32;
        let y = rng.gen_range(200..=400) as f32;
        let power = PowerUp::PICKUPS[rng.gen_range(0..PowerUp::PICKUPS.len())];
        world.pickups.push(Pickup::power_up(power, Point::new(x, y)));
    }
}

fn place_coins(world: &mut World, number: u32, width: u32, rng: &mut impl Rng) {
    for _ in 0..coin_placements(number) {
        if rng.gen_bool(0.5) {
            let base_x = rng.gen_range(300..=width - 500) as f32;
            for j in 0..ARC_COINS {
                let x = base_x + j as f32 * ARC_SPACING;
                let y = 300.0 - (j as f32 - 2.0).abs() * 40.0;
                world.pickups.push(Pickup::coin(Point::new(x, y)));
            }
        } else {
            let x = rng.gen_range(200..=width - 100) as f32;
            let y = rng.gen_range(150..=450) as f32;
            world.pickups.push(Pickup::coin(Point::new(x, y)));
        }
    }
}
