use std::thread;
use std::time::{Duration, Instant};

/// Measures real frame time and paces the loop to a fixed frame budget.
/// The simulation itself always advances by the configured timestep.
pub struct FrameTimer {
    last: Instant,
    budget: Duration,
    pub dt: f32,
}

impl FrameTimer {
    pub fn new(budget: Duration) -> Self {
        Self {
            last: Instant::now(),
            budget,
            dt: 0.0,
        }
    }

    pub fn tick(&mut self) {
        let now = Instant::now();
        self.dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
    }

    /// Sleep off whatever is left of the budget since the last tick.
    pub fn throttle(&self) {
        if let Some(rest) = self.budget.checked_sub(self.last.elapsed()) {
            thread::sleep(rest);
        }
    }
}
