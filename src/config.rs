use std::borrow::Cow;
use std::fmt;
use std::time::Duration;

use crate::error::ConfigError;

/// Message shown while a sequence runs, unless overridden.
pub const DEFAULT_LOADING_MSG: &str = "Loading";

/// Message shown once a sequence completes, unless overridden.
pub const DEFAULT_COMPLETE_MSG: &str = "Done!";

/// The historical 0.1s-per-unit baseline pause.
pub(crate) const BASELINE_STEP_DELAY: Duration = Duration::from_millis(100);

/// How long the completion message stays on screen by default.
pub(crate) const COMPLETION_HOLD: Duration = Duration::from_millis(500);

/// Rendering strategy for a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Proportional bar with a step counter and percentage.
    Bar,
    /// Animated ellipsis with no numeric indicator.
    Text,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Bar => "bar",
            Mode::Text => "text",
        })
    }
}

/// Configuration for one loading sequence.
///
/// Immutable once a run starts. Message and label setters accept any
/// [`fmt::Display`] value; non-string inputs are coerced to their string
/// representation rather than rejected.
///
/// ```
/// use std::time::Duration;
/// use loadbar::LoadConfig;
///
/// let config = LoadConfig::bar(25)
///     .with_label("Unpacking")
///     .with_delay_bounds(Duration::from_millis(1), Duration::from_millis(250));
/// assert_eq!(config.total_steps(), 25);
/// ```
#[derive(Debug, Clone)]
pub struct LoadConfig {
    pub(crate) msg_loading: Cow<'static, str>,
    pub(crate) msg_complete: Cow<'static, str>,
    pub(crate) label: Option<String>,
    pub(crate) total_steps: u64,
    pub(crate) min_step_delay: Duration,
    pub(crate) max_step_delay: Duration,
    pub(crate) randomized_delay: bool,
    pub(crate) completion_hold: Duration,
    pub(crate) mode: Mode,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            msg_loading: Cow::Borrowed(DEFAULT_LOADING_MSG),
            msg_complete: Cow::Borrowed(DEFAULT_COMPLETE_MSG),
            label: None,
            total_steps: 5,
            min_step_delay: BASELINE_STEP_DELAY,
            max_step_delay: BASELINE_STEP_DELAY,
            randomized_delay: false,
            completion_hold: COMPLETION_HOLD,
            mode: Mode::Bar,
        }
    }
}

impl LoadConfig {
    /// Creates a bar-mode configuration with the given number of steps.
    pub fn bar(total_steps: u64) -> Self {
        Self {
            total_steps,
            mode: Mode::Bar,
            ..Self::default()
        }
    }

    /// Creates a text-mode configuration with the given number of steps.
    pub fn text(total_steps: u64) -> Self {
        Self {
            total_steps,
            mode: Mode::Text,
            ..Self::default()
        }
    }

    /// Sets the message shown while the sequence runs.
    pub fn with_loading_message(mut self, msg: impl fmt::Display) -> Self {
        self.msg_loading = Cow::Owned(msg.to_string());
        self
    }

    /// Sets the message shown once the sequence completes.
    pub fn with_complete_message(mut self, msg: impl fmt::Display) -> Self {
        self.msg_complete = Cow::Owned(msg.to_string());
        self
    }

    /// Annotates the bar with a label. Ignored in text mode.
    pub fn with_label(mut self, label: impl fmt::Display) -> Self {
        self.label = Some(label.to_string());
        self
    }

    /// Sets the number of steps the sequence is divided into.
    pub fn with_total_steps(mut self, total_steps: u64) -> Self {
        self.total_steps = total_steps;
        self
    }

    /// Fixed per-step pause. Disables randomized timing.
    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.min_step_delay = delay;
        self.max_step_delay = delay;
        self.randomized_delay = false;
        self
    }

    /// Per-step pause drawn uniformly at random from `[min, max]`.
    ///
    /// Equal bounds draw deterministically. Inverted bounds are reported by
    /// [`LoadConfig::validate`] before the run performs any step.
    pub fn with_delay_bounds(mut self, min: Duration, max: Duration) -> Self {
        self.min_step_delay = min;
        self.max_step_delay = max;
        self.randomized_delay = true;
        self
    }

    /// How long the completion message stays on screen before the run
    /// returns.
    pub fn with_completion_hold(mut self, hold: Duration) -> Self {
        self.completion_hold = hold;
        self
    }

    pub fn loading_message(&self) -> &str {
        &self.msg_loading
    }

    pub fn complete_message(&self) -> &str {
        &self.msg_complete
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Checks the invariants a run relies on.
    ///
    /// Delay non-negativity is enforced by [`Duration`] itself, so only the
    /// step count and the bound ordering can be wrong.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_steps == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        if self.min_step_delay > self.max_step_delay {
            return Err(ConfigError::DelayBounds {
                min: self.min_step_delay,
                max: self.max_step_delay,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configuration_values() {
        let config = LoadConfig::default();
        assert_eq!(config.loading_message(), "Loading");
        assert_eq!(config.complete_message(), "Done!");
        assert_eq!(config.label(), None);
        assert_eq!(config.total_steps(), 5);
        assert_eq!(config.mode(), Mode::Bar);
        assert!(!config.randomized_delay);
        assert_eq!(config.min_step_delay, Duration::from_millis(100));
    }

    #[test]
    fn numeric_messages_coerce_to_strings() {
        let config = LoadConfig::bar(1)
            .with_loading_message(4)
            .with_complete_message(3463463.4)
            .with_label(7);
        assert_eq!(config.loading_message(), "4");
        assert_eq!(config.complete_message(), "3463463.4");
        assert_eq!(config.label(), Some("7"));
    }

    #[test]
    fn zero_steps_rejected() {
        let config = LoadConfig::bar(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroSteps));
    }

    #[test]
    fn inverted_delay_bounds_rejected() {
        let config = LoadConfig::bar(5)
            .with_delay_bounds(Duration::from_millis(300), Duration::from_millis(50));
        assert_eq!(
            config.validate(),
            Err(ConfigError::DelayBounds {
                min: Duration::from_millis(300),
                max: Duration::from_millis(50),
            })
        );
    }

    #[test]
    fn equal_delay_bounds_accepted() {
        let config = LoadConfig::text(3)
            .with_delay_bounds(Duration::from_millis(40), Duration::from_millis(40));
        assert_eq!(config.validate(), Ok(()));
    }
}
