//! Axis-aligned interaction rules between the player and the world.
//!
//! One discrete pass per tick, no swept tests: fast bodies may tunnel through
//! thin obstacles.  Removals are only marked here (`alive`, `collected`,
//! `spent`) and applied afterwards by [`World::compact`].
//!
//! [`World::compact`]: crate::entities::World::compact

use tracing::trace;

use crate::config::SimConfig;
use crate::entities::{Entity, PickupKind, Session};
use crate::events::{DefeatCause, GameEvent};
use crate::lifecycle::{
    self, DamageOutcome, COIN_SCORE, POWER_UP_SCORE, PROJECTILE_KILL_SCORE, STAR_KILL_SCORE,
    STOMP_SCORE,
};

/// What a resolution pass produced for the state machine to act on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    pub score: u32,
    pub level_complete: bool,
    pub out_of_lives: bool,
}

pub fn resolve(
    session: &mut Session,
    config: &SimConfig,
    events: &mut Vec<GameEvent>,
) -> Resolution {
    let mut res = Resolution::default();
    let Session { world, player } = &mut *session;
    let spawn = world.spawn;

    // ── 1–2. Landing on platforms ────────────────────────────────────────────
    let was_grounded = player.on_ground;
    player.on_ground = false;
    for platform in &world.platforms {
        if player.vy > 0.0 && player.bounds.overlaps(&platform.bounds) {
            player.bounds.y = platform.bounds.y - player.bounds.h;
            player.vy = 0.0;
            player.on_ground = true;

            let carry = platform.displacement(config);
            player.bounds.x += carry.x;
            player.bounds.y += carry.y;
        }
    }
    if player.on_ground && !was_grounded {
        events.push(GameEvent::PlayerLanded {
            at: player.bounds.center(),
        });
    }

    // ── 3. Platform kinematics ───────────────────────────────────────────────
    for platform in &mut world.platforms {
        platform.tick(config);
    }

    // ── 4. Enemies: stomp, then star, then damage ────────────────────────────
    for enemy in world.enemies.iter_mut().filter(|e| e.alive) {
        if !player.bounds.overlaps(&enemy.bounds) {
            continue;
        }
        let at = enemy.bounds.center();

        if player.vy > 0.0 && player.bounds.bottom() < enemy.bounds.center_y() {
            lifecycle::defeat(enemy);
            player.vy = -config.jump_speed / 2.0;
            res.score += STOMP_SCORE;
            trace!(kind = ?enemy.kind, "stomped");
            events.push(GameEvent::EnemyDefeated {
                kind: enemy.kind,
                cause: DefeatCause::Stomped,
                at,
            });
        } else if player.is_invincible() {
            lifecycle::defeat(enemy);
            res.score += STAR_KILL_SCORE;
            trace!(kind = ?enemy.kind, "run over while invincible");
            events.push(GameEvent::EnemyDefeated {
                kind: enemy.kind,
                cause: DefeatCause::Star,
                at,
            });
        } else {
            events.push(GameEvent::PlayerDamaged {
                at: player.bounds.center(),
            });
            if lifecycle::take_damage(player, spawn, config) == DamageOutcome::OutOfLives {
                res.out_of_lives = true;
                return res;
            }
        }
    }

    // ── 5. Pickups ───────────────────────────────────────────────────────────
    for pickup in world.pickups.iter_mut().filter(|p| !p.collected) {
        if !player.bounds.overlaps(&pickup.bounds) {
            continue;
        }
        pickup.collected = true;
        events.push(GameEvent::PickupCollected {
            kind: pickup.kind,
            at: pickup.bounds.center(),
        });
        match pickup.kind {
            PickupKind::Coin => {
                res.score += COIN_SCORE;
                if lifecycle::collect_coin(player, config) {
                    events.push(GameEvent::ExtraLife {
                        lives: player.lives,
                    });
                }
            }
            PickupKind::PowerUp(power) => {
                res.score += POWER_UP_SCORE;
                lifecycle::apply_power_up(player, power, config);
            }
        }
    }

    // ── 6. Projectiles: bounce off platforms, kill enemies ───────────────────
    for projectile in world.projectiles.iter_mut().filter(|p| !p.spent) {
        let touching = world
            .platforms
            .iter()
            .any(|platform| projectile.bounds.overlaps(&platform.bounds));
        if touching {
            projectile.vy = -config.projectile_bounce;
            projectile.bounces += 1;
            events.push(GameEvent::ProjectileBounced {
                kind: projectile.kind,
                at: projectile.bounds.center(),
            });
            if projectile.bounces >= config.max_bounces {
                projectile.spent = true;
                continue;
            }
        }

        let target = world
            .enemies
            .iter_mut()
            .find(|e| e.alive && e.bounds.overlaps(&projectile.bounds));
        if let Some(enemy) = target {
            lifecycle::defeat(enemy);
            projectile.spent = true;
            res.score += PROJECTILE_KILL_SCORE;
            trace!(kind = ?enemy.kind, projectile = ?projectile.kind, "shot down");
            events.push(GameEvent::EnemyDefeated {
                kind: enemy.kind,
                cause: DefeatCause::from(projectile.kind),
                at: enemy.bounds.center(),
            });
        }
    }

    // ── 7. Exit ──────────────────────────────────────────────────────────────
    if player.bounds.overlaps(&world.exit.bounds) {
        res.level_complete = true;
    }

    res
}
