//! Consequences of interactions: damage, respawn, pickups, firing, timers
//! and scoring.  All mutation of lives and coins goes through here so the
//! counters stay in range by construction.

use tracing::debug;

use crate::config::SimConfig;
use crate::entities::{Enemy, Player, Point, PowerUp, Projectile, World};

// ── Score table ───────────────────────────────────────────────────────────────

pub const STOMP_SCORE: u32 = 100;
pub const STAR_KILL_SCORE: u32 = 200;
pub const PROJECTILE_KILL_SCORE: u32 = 150;
pub const COIN_SCORE: u32 = 50;
pub const POWER_UP_SCORE: u32 = 500;
pub const LEVEL_BONUS: u32 = 1000;

/// Bonus for finishing the world at 0-based `world_index`.
pub fn level_bonus(world_index: usize) -> u32 {
    LEVEL_BONUS * (world_index as u32 + 1)
}

// ── Damage ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DamageOutcome {
    /// A big tier absorbed the hit.
    PowerLost,
    /// A life was spent and the player is back at the spawn point.
    Respawned,
    /// The last life was spent.
    OutOfLives,
}

pub fn take_damage(player: &mut Player, spawn: Point, config: &SimConfig) -> DamageOutcome {
    if player.power.is_big() {
        debug!(power = ?player.power, "power-up lost");
        player.set_power(PowerUp::None);
        player.invincibility = config.ticks(config.hurt_secs);
        return DamageOutcome::PowerLost;
    }

    player.lives = player.lives.saturating_sub(1);
    if player.lives == 0 {
        debug!("last life lost");
        return DamageOutcome::OutOfLives;
    }
    respawn(player, spawn, config);
    DamageOutcome::Respawned
}

pub fn respawn(player: &mut Player, spawn: Point, config: &SimConfig) {
    player.set_power(PowerUp::None);
    player.bounds.x = spawn.x;
    player.bounds.y = spawn.y;
    player.vx = 0.0;
    player.vy = 0.0;
    player.invincibility = config.ticks(config.respawn_secs);
    debug!(lives = player.lives, "player respawned");
}

/// Top edge below the visible play area.
pub fn fell_out(player: &Player, config: &SimConfig) -> bool {
    player.bounds.y > config.screen_height
}

/// Drop enemies and projectiles that fell below the play area.
pub fn cull_fallen(world: &mut World, config: &SimConfig) {
    let floor = config.screen_height;
    world.enemies.retain(|e| e.bounds.y <= floor);
    world.projectiles.retain(|p| p.bounds.y <= floor);
}

// ── Pickups ───────────────────────────────────────────────────────────────────

/// Count a coin.  Returns true when the counter wrapped into an extra life.
pub fn collect_coin(player: &mut Player, config: &SimConfig) -> bool {
    player.coins += 1;
    if player.coins >= config.coins_per_life {
        player.coins = 0;
        player.lives += 1;
        debug!(lives = player.lives, "extra life");
        return true;
    }
    false
}

pub fn apply_power_up(player: &mut Player, power: PowerUp, config: &SimConfig) {
    if power == PowerUp::Star {
        player.invincibility = config.ticks(config.star_secs);
    }
    player.set_power(power);
}

// ── Enemies ───────────────────────────────────────────────────────────────────

/// Kill an enemy; it is removed when the world is compacted at the end of
/// the tick, whatever defeated it.
pub fn defeat(enemy: &mut Enemy) {
    enemy.alive = false;
}

// ── Per-tick timers & firing ──────────────────────────────────────────────────

/// Count down invincibility and fire cooldown.  A star wears off on its own
/// when its invincibility runs out.
pub fn tick_timers(player: &mut Player) {
    if player.invincibility > 0 {
        player.invincibility -= 1;
        if player.invincibility == 0 && player.power == PowerUp::Star {
            player.set_power(PowerUp::None);
        }
    }
    player.fire_cooldown = player.fire_cooldown.saturating_sub(1);
}

/// Fire if the tier allows it and the cooldown has elapsed.
pub fn try_fire(player: &mut Player, config: &SimConfig) -> Option<Projectile> {
    if player.fire_cooldown > 0 {
        return None;
    }
    let kind = player.power.projectile()?;
    let cooldown = match player.power {
        PowerUp::IceFlower => config.ice_cooldown_secs,
        _ => config.fire_cooldown_secs,
    };
    player.fire_cooldown = config.ticks(cooldown);

    let muzzle = Point::new(
        player.bounds.center_x() + player.facing.sign() * 20.0,
        player.bounds.center_y(),
    );
    debug!(?kind, "projectile fired");
    Some(Projectile::launch(kind, muzzle, player.facing, config))
}

pub fn record_high_score(high_score: u32, score: u32) -> u32 {
    high_score.max(score)
}
