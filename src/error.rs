use std::io;
use std::time::Duration;

use thiserror::Error;

/// Rejected configuration, surfaced before any frame is painted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A sequence needs at least one step.
    #[error("total steps must be at least 1")]
    ZeroSteps,

    /// The lower delay bound exceeds the upper bound.
    #[error("minimum step delay {min:?} exceeds maximum {max:?}")]
    DelayBounds { min: Duration, max: Duration },
}

/// Failure while painting a frame or the surrounding messages.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write to the terminal")]
    Io(#[from] io::Error),
}

/// Everything that can go wrong during [`SequenceRunner::run`].
///
/// Configuration problems abort before rendering starts; render problems are
/// reported after the runner has attempted to print the completion message.
///
/// [`SequenceRunner::run`]: crate::SequenceRunner::run
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
