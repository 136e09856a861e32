use std::time::Duration;

/// Most ticks a single `advance` will hand out; a stalled host drops the
/// rest instead of spiralling.
pub const MAX_CATCH_UP: u32 = 5;

/// Shortest step handed out, whatever rate is asked for.
pub const MIN_STEP: Duration = Duration::from_micros(1);

/// Turns host wall time into whole simulation ticks.
#[derive(Clone, Debug)]
pub struct FixedStep {
    step: Duration,
    accumulator: Duration,
}

impl FixedStep {
    /// Rates that do not map to a representable step fall back to
    /// [`MIN_STEP`].
    pub fn new(tick_rate: f32) -> Self {
        let step = Duration::try_from_secs_f32(1.0 / tick_rate)
            .unwrap_or(MIN_STEP)
            .max(MIN_STEP);
        Self {
            step,
            accumulator: Duration::ZERO,
        }
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Add elapsed time and return how many ticks are due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator = self.accumulator.saturating_add(elapsed);
        let due = self.accumulator.as_nanos() / self.step.as_nanos();
        if due > u128::from(MAX_CATCH_UP) {
            self.accumulator = Duration::ZERO;
            return MAX_CATCH_UP;
        }
        // due <= MAX_CATCH_UP here
        let due = due as u32;
        self.accumulator -= self.step * due;
        due
    }
}
