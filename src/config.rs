//! Tunable simulation parameters.
//!
//! Every rate is expressed per second and scaled by the tick duration, so the
//! same numbers hold whatever fixed rate the host drives the core at.  Timer
//! durations are seconds and are converted to whole ticks with [`SimConfig::ticks`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Accepted tick rates, in ticks per second.
pub const MIN_TICK_RATE: f32 = 1.0;
pub const MAX_TICK_RATE: f32 = 1000.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Simulation ticks per second.
    pub tick_rate: f32,
    pub screen_width: f32,
    /// Visible play height; anything whose top edge passes it has fallen out.
    pub screen_height: f32,

    // ── Player motion (px/s, px/s²) ─────────────────────────────────────────
    pub gravity: f32,
    pub jump_speed: f32,
    pub move_speed: f32,
    pub run_multiplier: f32,

    // ── Projectiles ──────────────────────────────────────────────────────────
    pub projectile_speed: f32,
    /// Upward speed a projectile is launched with.
    pub projectile_lift: f32,
    /// Upward speed a projectile gets back after touching a platform.
    pub projectile_bounce: f32,
    pub projectile_gravity_scale: f32,
    pub max_bounces: u32,

    // ── Enemies ──────────────────────────────────────────────────────────────
    pub enemy_speed: f32,
    pub dash_multiplier: f32,
    pub patrol_distance: f32,
    pub bob_amplitude: f32,
    /// Radians per second.
    pub bob_frequency: f32,

    /// Fraction of the camera gap closed per 1/60 s.
    pub camera_smoothing: f32,

    // ── Timers (seconds) ─────────────────────────────────────────────────────
    pub star_secs: f32,
    pub hurt_secs: f32,
    pub respawn_secs: f32,
    pub fire_cooldown_secs: f32,
    pub ice_cooldown_secs: f32,

    pub starting_lives: u32,
    pub coins_per_life: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60.0,
            screen_width: 1024.0,
            screen_height: 768.0,
            gravity: 2880.0,
            jump_speed: 960.0,
            move_speed: 360.0,
            run_multiplier: 1.7,
            projectile_speed: 600.0,
            projectile_lift: 300.0,
            projectile_bounce: 480.0,
            projectile_gravity_scale: 0.5,
            max_bounces: 3,
            enemy_speed: 120.0,
            dash_multiplier: 3.0,
            patrol_distance: 150.0,
            bob_amplitude: 20.0,
            bob_frequency: 3.0,
            camera_smoothing: 0.1,
            star_secs: 10.0,
            hurt_secs: 2.0,
            respawn_secs: 3.0,
            fire_cooldown_secs: 20.0 / 60.0,
            ice_cooldown_secs: 25.0 / 60.0,
            starting_lives: 3,
            coins_per_life: 100,
        }
    }
}

impl SimConfig {
    /// Parse a RON document; missing fields keep their defaults.
    pub fn from_ron(text: &str) -> Result<Self, SimError> {
        let config: SimConfig = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, SimError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_ron(&text)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if !(MIN_TICK_RATE..=MAX_TICK_RATE).contains(&self.tick_rate) {
            return Err(SimError::ConfigValue {
                field: "tick_rate",
                expected: "within 1..=1000",
            });
        }
        let positive: [(&'static str, f32); 2] = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(SimError::ConfigValue {
                    field,
                    expected: "a positive number",
                });
            }
        }
        if self.max_bounces == 0 {
            return Err(SimError::ConfigValue {
                field: "max_bounces",
                expected: "at least 1",
            });
        }
        if self.coins_per_life == 0 {
            return Err(SimError::ConfigValue {
                field: "coins_per_life",
                expected: "at least 1",
            });
        }
        if !(0.0..=1.0).contains(&self.camera_smoothing) {
            return Err(SimError::ConfigValue {
                field: "camera_smoothing",
                expected: "within 0..=1",
            });
        }
        Ok(())
    }

    /// Seconds per tick.
    pub fn dt(&self) -> f32 {
        1.0 / self.tick_rate
    }

    /// Whole ticks covering `secs` at the configured rate.
    pub fn ticks(&self, secs: f32) -> u32 {
        (secs * self.tick_rate).round().max(0.0) as u32
    }

    /// Vertical speed added to a falling body each tick.
    pub fn gravity_step(&self) -> f32 {
        self.gravity * self.dt()
    }
}
