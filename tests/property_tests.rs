//! Property-based tests using proptest.
//!
//! Invariants that must hold for all inputs:
//! - Generation: any seed gives a reproducible, in-bounds layout
//! - Camera: the view never leaves the level
//! - Coins: the counter stays below the wrap threshold
//! - Simulation: random play keeps the player and camera inside the level

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use platformer::camera;
use platformer::compute::{init_state, tick};
use platformer::config::SimConfig;
use platformer::entities::*;
use platformer::input::Intents;
use platformer::level::generate_seeded;
use platformer::lifecycle::collect_coin;
use platformer::theme::THEMES;

fn intents_from(bits: u8) -> Intents {
    Intents {
        move_left: bits & 0b00001 != 0,
        move_right: bits & 0b00010 != 0,
        run: bits & 0b00100 != 0,
        jump: bits & 0b01000 != 0,
        fire: bits & 0b10000 != 0,
        ..Intents::default()
    }
}

// ============================================================
// Generation Properties
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_generation_is_deterministic(seed in any::<u64>(), index in 0usize..5) {
        let config = SimConfig::default();
        let a = generate_seeded(index, &THEMES[index], &config, seed);
        let b = generate_seeded(index, &THEMES[index], &config, seed);
        prop_assert_eq!(a.platforms, b.platforms);
        prop_assert_eq!(a.enemies, b.enemies);
        prop_assert_eq!(a.pickups, b.pickups);
    }

    #[test]
    fn prop_layout_stays_in_level(seed in any::<u64>(), index in 0usize..5) {
        let config = SimConfig::default();
        let world = generate_seeded(index, &THEMES[index], &config, seed);
        let w = world.level_width;
        for e in &world.enemies {
            prop_assert!(e.bounds.x >= 0.0 && e.bounds.right() <= w);
        }
        for p in &world.pickups {
            prop_assert!(p.bounds.x >= 0.0 && p.bounds.right() <= w);
        }
        for p in world.platforms.iter().filter(|p| !p.is_kinematic()) {
            prop_assert!(p.bounds.bottom() <= config.screen_height);
        }
        for p in &world.platforms {
            prop_assert!(p.bounds.x >= 0.0 && p.bounds.right() <= w);
            if let Some(osc) = p.oscillation.filter(|o| o.axis == Axis::Horizontal) {
                prop_assert!(osc.origin - osc.range >= 0.0);
                prop_assert!(osc.origin + osc.range + p.bounds.w <= w);
            }
        }
    }
}

// ============================================================
// Camera & Counter Properties
// ============================================================

proptest! {
    #[test]
    fn prop_camera_stays_in_level(
        camera_x in -10_000.0f32..10_000.0,
        target in -10_000.0f32..10_000.0,
        width in 500.0f32..8000.0,
    ) {
        let config = SimConfig::default();
        let next = camera::follow(camera_x, target, width, &config);
        let max_x = (width - config.screen_width).max(0.0);
        prop_assert!(next >= 0.0 && next <= max_x);
    }

    #[test]
    fn prop_gravity_adds_one_step(vy in -2000.0f32..2000.0, tick_rate in 30.0f32..240.0) {
        let config = SimConfig { tick_rate, ..SimConfig::default() };
        let mut player = Player::new(Point::new(100.0, 100.0), &config);
        player.vy = vy;
        player.tick(&config);
        prop_assert_eq!(player.vy, vy + config.gravity_step());
    }

    #[test]
    fn prop_coin_counter_wraps(count in 0u32..1000) {
        let config = SimConfig::default();
        let mut player = Player::new(Point::new(100.0, 400.0), &config);
        for _ in 0..count {
            collect_coin(&mut player, &config);
        }
        prop_assert!(player.coins < config.coins_per_life);
        prop_assert_eq!(player.coins, count % 100);
        prop_assert_eq!(player.lives, 3 + count / 100);
    }

    #[test]
    fn prop_platform_stays_on_path(
        range in 10.0f32..300.0,
        speed in 10.0f32..600.0,
        steps in 1usize..600,
    ) {
        let config = SimConfig::default();
        let mut platform = Platform::moving(
            Aabb::new(1000.0, 300.0, 100.0, 25.0),
            Axis::Horizontal,
            range,
            speed,
        );
        for _ in 0..steps {
            platform.tick(&config);
            prop_assert!(platform.bounds.x >= 1000.0 - range);
            prop_assert!(platform.bounds.x <= 1000.0 + range);
        }
    }
}

// ============================================================
// Simulation Properties
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_random_play_keeps_invariants(
        seed in any::<u64>(),
        index in 0usize..5,
        inputs in prop::collection::vec(any::<u8>(), 50..300),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = tick(&init_state(SimConfig::default()), &Intents::select(index), &mut rng);
        prop_assert_eq!(state.mode, Mode::Playing);

        for bits in inputs {
            state = tick(&state, &intents_from(bits), &mut rng);
            if state.mode != Mode::Playing {
                break;
            }
            let session = state.session.as_ref().expect("session while playing");
            let world = &session.world;
            let player = &session.player;
            let max_camera = (world.level_width - state.config.screen_width).max(0.0);

            prop_assert!(player.coins < state.config.coins_per_life);
            prop_assert!(player.lives >= 1);
            prop_assert!(player.bounds.x >= 0.0);
            prop_assert!(player.bounds.right() <= world.level_width);
            prop_assert!(world.camera_x >= 0.0 && world.camera_x <= max_camera);
            prop_assert!(world.pickups.iter().all(|p| !p.collected));
            prop_assert!(world.projectiles.iter().all(|p| !p.spent));
        }
        prop_assert!(state.score <= state.high_score || state.mode == Mode::Playing);
    }
}
