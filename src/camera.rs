use crate::config::SimConfig;

/// Rate `camera_smoothing` is quoted at.
const SMOOTHING_REFERENCE_RATE: f32 = 60.0;

/// Move the view offset a fixed fraction of the way toward centring
/// `target_x`, then clamp it to the level.  First-order lag, never overshoots.
pub fn follow(camera_x: f32, target_x: f32, level_width: f32, config: &SimConfig) -> f32 {
    let goal = target_x - config.screen_width / 2.0;
    let blend = 1.0
        - (1.0 - config.camera_smoothing).powf(SMOOTHING_REFERENCE_RATE / config.tick_rate);
    let next = camera_x + (goal - camera_x) * blend;
    clamp(next, level_width, config)
}

pub fn clamp(camera_x: f32, level_width: f32, config: &SimConfig) -> f32 {
    let max_x = (level_width - config.screen_width).max(0.0);
    camera_x.clamp(0.0, max_x)
}
