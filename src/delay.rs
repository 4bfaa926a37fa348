use std::time::Duration;

use rand::Rng;

/// Source of per-step pause durations.
///
/// Randomized timing is the engine's only external-randomness dependency;
/// keeping it behind a trait lets tests run deterministically.
pub trait DelaySource: Send {
    /// Returns the pause to apply for the next frame.
    fn next_delay(&mut self) -> Duration;
}

/// The same pause for every step.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

impl DelaySource for FixedDelay {
    fn next_delay(&mut self) -> Duration {
        self.0
    }
}

/// Uniform draw from `[min, max]`.
///
/// Coinciding bounds draw deterministically.
#[derive(Debug, Clone)]
pub struct UniformDelay {
    min: Duration,
    max: Duration,
}

impl UniformDelay {
    pub fn new(min: Duration, max: Duration) -> Self {
        debug_assert!(min <= max);
        Self { min, max }
    }
}

impl DelaySource for UniformDelay {
    fn next_delay(&mut self) -> Duration {
        if self.min == self.max {
            return self.min;
        }
        let secs = rand::rng().random_range(self.min.as_secs_f64()..=self.max.as_secs_f64());
        Duration::from_secs_f64(secs)
    }
}
