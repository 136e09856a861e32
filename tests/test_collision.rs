use platformer::collision::resolve;
use platformer::config::SimConfig;
use platformer::entities::*;
use platformer::events::{DefeatCause, GameEvent};
use platformer::theme::THEMES;

fn make_session() -> Session {
    let config = SimConfig::default();
    Session {
        world: World::empty(0, &THEMES[0], 5000.0),
        player: Player::new(Point::new(100.0, 100.0), &config),
    }
}

/// A Goomba whose centre sits below a falling player's feet.
fn enemy_under_player(session: &Session) -> Enemy {
    let b = session.player.bounds;
    Enemy::new(EnemyKind::Goomba, Point::new(b.x, b.bottom() - 6.0), 120.0)
}

/// An enemy overlapping the player from the side.
fn enemy_beside_player(session: &Session, kind: EnemyKind) -> Enemy {
    let b = session.player.bounds;
    Enemy::new(kind, Point::new(b.x + 10.0, b.y), 120.0)
}

// ── Platforms ─────────────────────────────────────────────────────────────────

#[test]
fn falling_player_snaps_onto_platform() {
    let config = SimConfig::default();
    let mut s = make_session();
    s.world.platforms.push(Platform::fixed(Aabb::new(50.0, 130.0, 200.0, 40.0)));
    s.player.vy = 200.0;
    let mut events = Vec::new();

    resolve(&mut s, &config, &mut events);

    assert_eq!(s.player.bounds.bottom(), 130.0);
    assert_eq!(s.player.vy, 0.0);
    assert!(s.player.on_ground);
    assert!(matches!(events[0], GameEvent::PlayerLanded { .. }));
}

#[test]
fn rising_player_passes_through_platform() {
    let config = SimConfig::default();
    let mut s = make_session();
    s.world.platforms.push(Platform::fixed(Aabb::new(50.0, 130.0, 200.0, 40.0)));
    s.player.vy = -300.0;

    resolve(&mut s, &config, &mut Vec::new());

    assert_eq!(s.player.bounds.y, 100.0);
    assert!(!s.player.on_ground);
}

#[test]
fn ground_flag_is_recomputed_each_tick() {
    let config = SimConfig::default();
    let mut s = make_session();
    s.player.on_ground = true;
    s.player.vy = -100.0;
    let mut events = Vec::new();

    resolve(&mut s, &config, &mut events);

    assert!(!s.player.on_ground);
    assert!(events.is_empty());
}

#[test]
fn kinematic_platform_carries_player() {
    let config = SimConfig::default();
    let mut s = make_session();
    s.world.platforms.push(Platform::moving(
        Aabb::new(50.0, 130.0, 200.0, 25.0),
        Axis::Horizontal,
        100.0,
        120.0,
    ));
    s.player.vy = 100.0;

    resolve(&mut s, &config, &mut Vec::new());

    assert!((s.player.bounds.x - 102.0).abs() < 1e-3);
    assert!((s.world.platforms[0].bounds.x - 52.0).abs() < 1e-3);
}

// ── Enemies ───────────────────────────────────────────────────────────────────

#[test]
fn stomp_defeats_enemy_and_bounces() {
    let config = SimConfig::default();
    let mut s = make_session();
    s.world.enemies.push(enemy_under_player(&s));
    s.player.vy = 300.0;
    let mut events = Vec::new();

    let res = resolve(&mut s, &config, &mut events);

    assert_eq!(res.score, 100);
    assert!(!s.world.enemies[0].alive);
    assert_eq!(s.player.vy, -config.jump_speed / 2.0);
    assert_eq!(s.player.lives, 3);
    assert!(events.iter().any(|e| matches!(
        e,
        GameEvent::EnemyDefeated {
            cause: DefeatCause::Stomped,
            ..
        }
    )));
}

#[test]
fn stomped_enemy_is_gone_after_the_tick() {
    let config = SimConfig::default();
    let mut s = make_session();
    s.world.enemies.push(enemy_under_player(&s));
    s.player.vy = 300.0;

    let res = resolve(&mut s, &config, &mut Vec::new());
    s.world.compact();

    assert_eq!(res.score, 100);
    assert!(s.world.enemies.is_empty());
}

#[test]
fn stomp_wins_over_invincibility() {
    let config = SimConfig::default();
    let mut s = make_session();
    s.world.enemies.push(enemy_under_player(&s));
    s.player.invincibility = 600;
    s.player.vy = 300.0;

    let res = resolve(&mut s, &config, &mut Vec::new());

    assert_eq!(res.score, 100);
    assert!(s.player.vy < 0.0);
}

#[test]
fn invincible_player_runs_enemies_over() {
    let config = SimConfig::default();
    let mut s = make_session();
    s.world.enemies.push(enemy_beside_player(&s, EnemyKind::Koopa));
    s.player.set_power(PowerUp::Star);
    s.player.invincibility = 600;

    let res = resolve(&mut s, &config, &mut Vec::new());
    s.world.compact();

    assert_eq!(res.score, 200);
    assert!(s.world.enemies.is_empty());
    assert_eq!(s.player.lives, 3);
}

#[test]
fn side_contact_costs_a_life() {
    let config = SimConfig::default();
    let mut s = make_session();
    s.world.enemies.push(enemy_beside_player(&s, EnemyKind::Spike));
    let hit_at = s.player.bounds.center();
    let mut events = Vec::new();

    let res = resolve(&mut s, &config, &mut events);

    assert_eq!(events, vec![GameEvent::PlayerDamaged { at: hit_at }]);
    assert_eq!(res.score, 0);
    assert!(!res.out_of_lives);
    assert_eq!(s.player.lives, 2);
    assert_eq!(s.player.bounds.x, s.world.spawn.x);
    assert_eq!(s.player.bounds.y, s.world.spawn.y);
    assert!(s.world.enemies[0].alive);
}

#[test]
fn side_contact_on_last_life_ends_the_run() {
    let config = SimConfig::default();
    let mut s = make_session();
    s.world.enemies.push(enemy_beside_player(&s, EnemyKind::Spike));
    s.player.lives = 1;

    let res = resolve(&mut s, &config, &mut Vec::new());

    assert!(res.out_of_lives);
    assert_eq!(s.player.lives, 0);
}

#[test]
fn dead_enemies_are_harmless() {
    let config = SimConfig::default();
    let mut s = make_session();
    let mut corpse = enemy_beside_player(&s, EnemyKind::Goomba);
    corpse.alive = false;
    s.world.enemies.push(corpse);

    resolve(&mut s, &config, &mut Vec::new());

    assert_eq!(s.player.lives, 3);
}

// ── Pickups ───────────────────────────────────────────────────────────────────

#[test]
fn coin_adds_score_and_counter() {
    let config = SimConfig::default();
    let mut s = make_session();
    s.world.pickups.push(Pickup::coin(Point::new(105.0, 105.0)));
    s.player.coins = 98;

    let res = resolve(&mut s, &config, &mut Vec::new());

    assert_eq!(res.score, 50);
    assert_eq!(s.player.coins, 99);
    assert_eq!(s.player.lives, 3);
    assert!(s.world.pickups[0].collected);
}

#[test]
fn hundredth_coin_wraps_into_a_life() {
    let config = SimConfig::default();
    let mut s = make_session();
    s.world.pickups.push(Pickup::coin(Point::new(105.0, 105.0)));
    s.player.coins = 99;
    let mut events = Vec::new();

    resolve(&mut s, &config, &mut events);

    assert_eq!(s.player.coins, 0);
    assert_eq!(s.player.lives, 4);
    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::ExtraLife { lives: 4 })));
}

#[test]
fn mushroom_grows_player() {
    let config = SimConfig::default();
    let mut s = make_session();
    s.world
        .pickups
        .push(Pickup::power_up(PowerUp::Mushroom, Point::new(105.0, 105.0)));

    let res = resolve(&mut s, &config, &mut Vec::new());

    assert_eq!(res.score, 500);
    assert_eq!(s.player.power, PowerUp::Mushroom);
    assert_eq!(s.player.bounds.h, PLAYER_BIG_HEIGHT);
}

#[test]
fn star_grants_ten_seconds_of_invincibility() {
    let config = SimConfig::default();
    let mut s = make_session();
    s.world
        .pickups
        .push(Pickup::power_up(PowerUp::Star, Point::new(105.0, 105.0)));

    resolve(&mut s, &config, &mut Vec::new());

    assert_eq!(s.player.power, PowerUp::Star);
    assert_eq!(s.player.invincibility, 600);
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[test]
fn projectile_is_spent_on_third_bounce() {
    let config = SimConfig::default();
    let mut s = make_session();
    s.world.platforms.push(Platform::fixed(Aabb::new(1000.0, 500.0, 100.0, 200.0)));
    s.world.projectiles.push(Projectile::launch(
        ProjectileKind::Fire,
        Point::new(1050.0, 505.0),
        Facing::Right,
        &config,
    ));

    for expected in 1..=2 {
        let mut events = Vec::new();
        resolve(&mut s, &config, &mut events);
        assert_eq!(s.world.projectiles[0].bounces, expected);
        assert_eq!(s.world.projectiles[0].vy, -config.projectile_bounce);
        assert!(!s.world.projectiles[0].spent);
        assert!(matches!(
            events[..],
            [GameEvent::ProjectileBounced {
                kind: ProjectileKind::Fire,
                ..
            }]
        ));
    }

    let mut events = Vec::new();
    resolve(&mut s, &config, &mut events);
    assert!(s.world.projectiles[0].spent);
    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::ProjectileBounced { .. })));
    s.world.compact();
    assert!(s.world.projectiles.is_empty());
}

#[test]
fn fireball_defeats_enemy() {
    let config = SimConfig::default();
    let mut s = make_session();
    s.world
        .enemies
        .push(Enemy::new(EnemyKind::Koopa, Point::new(1000.0, 300.0), 120.0));
    s.world.projectiles.push(Projectile::launch(
        ProjectileKind::Fire,
        Point::new(1010.0, 310.0),
        Facing::Right,
        &config,
    ));
    let mut events = Vec::new();

    let res = resolve(&mut s, &config, &mut events);

    assert_eq!(res.score, 150);
    assert!(!s.world.enemies[0].alive);
    assert!(s.world.projectiles[0].spent);
    assert!(events.iter().any(|e| matches!(
        e,
        GameEvent::EnemyDefeated {
            cause: DefeatCause::Burned,
            ..
        }
    )));
}

#[test]
fn one_projectile_kills_one_enemy() {
    let config = SimConfig::default();
    let mut s = make_session();
    s.world
        .enemies
        .push(Enemy::new(EnemyKind::Goomba, Point::new(1000.0, 300.0), 120.0));
    s.world
        .enemies
        .push(Enemy::new(EnemyKind::Goomba, Point::new(1005.0, 300.0), 120.0));
    s.world.projectiles.push(Projectile::launch(
        ProjectileKind::Ice,
        Point::new(1015.0, 310.0),
        Facing::Left,
        &config,
    ));

    let res = resolve(&mut s, &config, &mut Vec::new());

    assert_eq!(res.score, 150);
    assert_eq!(s.world.enemies.iter().filter(|e| e.alive).count(), 1);
}

// ── Exit ──────────────────────────────────────────────────────────────────────

#[test]
fn touching_exit_completes_level() {
    let config = SimConfig::default();
    let mut s = make_session();
    s.player.bounds.x = s.world.exit.bounds.x - 10.0;
    s.player.bounds.y = 200.0;

    let res = resolve(&mut s, &config, &mut Vec::new());

    assert!(res.level_complete);
}

#[test]
fn exit_out_of_reach_does_nothing() {
    let config = SimConfig::default();
    let mut s = make_session();

    let res = resolve(&mut s, &config, &mut Vec::new());

    assert_eq!(res, Default::default());
}
