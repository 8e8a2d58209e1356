use std::time::Duration;

/// Repeating auto-advance timer driven by frame time.
///
/// It only counts the time the frame loop hands it, so a replaced timer
/// can never fire again after a reset.
#[derive(Debug, Clone)]
pub struct AutoAdvance {
    interval: Duration,
    elapsed: Duration,
}

impl AutoAdvance {
    pub fn new(interval: Duration) -> Self {
        Self { interval, elapsed: Duration::ZERO }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn remaining(&self) -> Duration {
        self.interval.saturating_sub(self.elapsed)
    }

    /// Advances the timer and returns how many times it fired.
    pub fn tick(&mut self, dt: Duration) -> u32 {
        if self.interval.is_zero() {
            return 0;
        }
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            fired += 1;
        }
        fired
    }
}
