//! Gravity, integration and self-driven motion.
//!
//! Explicit Euler: velocity first, then position, one tick at a time.

use crate::config::SimConfig;
use crate::entities::{
    Aabb, Axis, Enemy, Entity, EntityKind, Exit, Facing, Motion, Pickup, Platform, Player,
    Projectile, World,
};
use crate::input::Intents;

// ── Entity impls ──────────────────────────────────────────────────────────────

impl Entity for Player {
    fn kind(&self) -> EntityKind {
        EntityKind::Player
    }

    fn bounds(&self) -> Aabb {
        self.bounds
    }

    fn tick(&mut self, config: &SimConfig) {
        let dt = config.dt();
        self.vy += config.gravity_step();
        self.bounds.x += self.vx * dt;
        self.bounds.y += self.vy * dt;
    }
}

impl Entity for Enemy {
    fn kind(&self) -> EntityKind {
        EntityKind::Enemy(self.kind)
    }

    fn bounds(&self) -> Aabb {
        self.bounds
    }

    fn tick(&mut self, config: &SimConfig) {
        if !self.alive {
            return;
        }
        let dt = config.dt();
        self.age += 1;

        match self.kind.motion() {
            Motion::Patrol => {
                self.bounds.x += self.vx * dt;
                // Turn only while heading away from the spawn point.
                let offset = self.bounds.x - self.spawn.x;
                if offset.abs() > config.patrol_distance && offset * self.vx > 0.0 {
                    self.vx = -self.vx;
                }
                self.fall(config);
            }
            Motion::Dash => {
                self.bounds.x += self.vx * config.dash_multiplier * dt;
                self.fall(config);
            }
            Motion::Bob => {
                let phase = self.age as f32 * dt * config.bob_frequency;
                self.bounds.y = self.spawn.y + phase.sin() * config.bob_amplitude;
            }
            Motion::Hover => {}
        }
    }
}

impl Enemy {
    fn fall(&mut self, config: &SimConfig) {
        self.vy += config.gravity_step();
        self.bounds.y += self.vy * config.dt();
    }
}

impl Entity for Platform {
    fn kind(&self) -> EntityKind {
        EntityKind::Platform
    }

    fn bounds(&self) -> Aabb {
        self.bounds
    }

    fn tick(&mut self, config: &SimConfig) {
        let step = self.displacement(config);
        let Some(osc) = self.oscillation.as_mut() else {
            return;
        };
        let coord = match osc.axis {
            Axis::Horizontal => {
                self.bounds.x += step.x;
                &mut self.bounds.x
            }
            Axis::Vertical => {
                self.bounds.y += step.y;
                &mut self.bounds.y
            }
        };
        // Reverse at either extreme, never leaving origin ± range.
        let low = osc.origin - osc.range;
        let high = osc.origin + osc.range;
        if *coord >= high {
            *coord = high;
            osc.direction = -1.0;
        } else if *coord <= low {
            *coord = low;
            osc.direction = 1.0;
        }
    }
}

impl Entity for Projectile {
    fn kind(&self) -> EntityKind {
        EntityKind::Projectile(self.kind)
    }

    fn bounds(&self) -> Aabb {
        self.bounds
    }

    fn tick(&mut self, config: &SimConfig) {
        let dt = config.dt();
        self.vy += config.gravity_step() * config.projectile_gravity_scale;
        self.bounds.x += self.vx * dt;
        self.bounds.y += self.vy * dt;
    }
}

impl Entity for Pickup {
    fn kind(&self) -> EntityKind {
        EntityKind::Pickup(self.kind)
    }

    fn bounds(&self) -> Aabb {
        self.bounds
    }
}

impl Entity for Exit {
    fn kind(&self) -> EntityKind {
        EntityKind::Exit
    }

    fn bounds(&self) -> Aabb {
        self.bounds
    }
}

// ── Player control ────────────────────────────────────────────────────────────

/// Turn held intents into player velocity.  Jumping only works from the
/// ground flag computed during the previous resolution pass.
pub fn apply_intents(player: &mut Player, intents: &Intents, config: &SimConfig) {
    player.vx = 0.0;
    if intents.move_left {
        player.vx = -config.move_speed;
        player.facing = Facing::Left;
    }
    if intents.move_right {
        player.vx = config.move_speed;
        player.facing = Facing::Right;
    }
    if intents.run {
        player.vx *= config.run_multiplier;
    }
    if intents.jump && player.on_ground {
        player.vy = -config.jump_speed;
    }
}

/// Advance enemies and projectiles.  Projectiles leaving the level
/// horizontally are marked spent.
pub fn advance_actors(world: &mut World, config: &SimConfig) {
    for enemy in &mut world.enemies {
        enemy.tick(config);
    }
    for projectile in &mut world.projectiles {
        projectile.tick(config);
        let x = projectile.bounds.x;
        if x < 0.0 || x > world.level_width {
            projectile.spent = true;
        }
    }
}

/// Keep the player horizontally inside the level.
pub fn clamp_to_level(player: &mut Player, level_width: f32) {
    let max_x = (level_width - player.bounds.w).max(0.0);
    player.bounds.x = player.bounds.x.clamp(0.0, max_x);
}
