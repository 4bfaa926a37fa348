//! Simulated loading sequences for the console.
//!
//! A [`SequenceRunner`] divides a configured run into discrete steps and
//! advances one of two renderers per step: a proportional [`BarRenderer`]
//! redrawn in place, or a [`TextRenderer`] showing an animated ellipsis. The
//! per-step pause is fixed or drawn uniformly at random, and runs can record
//! their lifecycle on an append-only [`FileJournal`].
//!
//! The percentage shown reflects elapsed ticks, not real work: this is a
//! simulated-progress renderer, not a task tracker.
//!
//! ```no_run
//! use std::time::Duration;
//! use loadbar::{LoadConfig, SequenceRunner};
//!
//! let config = LoadConfig::bar(25)
//!     .with_label("Unpacking")
//!     .with_delay_bounds(Duration::from_millis(1), Duration::from_millis(250));
//! SequenceRunner::new(config).run()?;
//! # Ok::<(), loadbar::LoadError>(())
//! ```

mod bar;
mod config;
mod delay;
mod error;
#[cfg(feature = "in_memory")]
mod in_memory;
mod journal;
mod render;
mod runner;
mod style;
mod term_like;
mod text;

pub use crate::bar::BarRenderer;
pub use crate::config::{LoadConfig, Mode, DEFAULT_COMPLETE_MSG, DEFAULT_LOADING_MSG};
pub use crate::delay::{DelaySource, FixedDelay, UniformDelay};
pub use crate::error::{ConfigError, LoadError, RenderError};
#[cfg(feature = "in_memory")]
pub use crate::in_memory::InMemoryTerm;
pub use crate::journal::{FileJournal, Journal, MemoryJournal, NoopJournal, RunEvent};
pub use crate::render::Renderer;
pub use crate::runner::{CancelToken, Phase, SequenceRunner};
pub use crate::style::SequenceStyle;
pub use crate::term_like::TermLike;
pub use crate::text::TextRenderer;
