use crate::error::RenderError;

/// A rendering strategy driven once per step by [`SequenceRunner`].
///
/// Implementations paint the frame for the given step and then block the
/// calling thread for that step's pause, so one `advance` call accounts for
/// one unit of simulated progress.
///
/// [`SequenceRunner`]: crate::SequenceRunner
pub trait Renderer {
    /// Paints the frame for `step` (1-based) of `total`, then pauses.
    fn advance(&mut self, step: u64, total: u64) -> Result<(), RenderError>;

    /// Terminates the in-place line so following output starts fresh.
    fn finish(&mut self) -> Result<(), RenderError>;
}
