use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use console::Term;

use crate::bar::BarRenderer;
use crate::config::{LoadConfig, Mode, DEFAULT_LOADING_MSG};
use crate::delay::{DelaySource, FixedDelay, UniformDelay};
use crate::error::{LoadError, RenderError};
use crate::journal::{Journal, NoopJournal, RunEvent};
use crate::render::Renderer;
use crate::style::SequenceStyle;
use crate::term_like::TermLike;
use crate::text::TextRenderer;

/// Cooperative stop signal, checked once per step.
///
/// Cloning shares the flag. A cancelled run skips its remaining steps but
/// still prints the completion message and returns `Ok`.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests the run to stop at the next step boundary.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Lifecycle of a runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Completed,
}

/// Per-run bookkeeping, discarded when the run ends.
struct RunState {
    current_step: u64,
    started: Instant,
}

/// Drives one loading sequence from configuration to completion message.
///
/// The runner validates its [`LoadConfig`], picks the renderer for the
/// configured [`Mode`], advances it once per step and finally prints the
/// completion message. Render failures are journaled and converted into an
/// error result after the completion message has been attempted; they never
/// panic and never skip the completion line.
///
/// ```no_run
/// use loadbar::{LoadConfig, SequenceRunner};
///
/// let config = LoadConfig::bar(25).with_label("Unpacking");
/// SequenceRunner::new(config).run()?;
/// # Ok::<(), loadbar::LoadError>(())
/// ```
pub struct SequenceRunner {
    config: LoadConfig,
    style: SequenceStyle,
    term: Box<dyn TermLike>,
    journal: Box<dyn Journal>,
    delay: Option<Box<dyn DelaySource>>,
    cancel: CancelToken,
    phase: Phase,
}

impl SequenceRunner {
    /// Creates a runner drawing to a buffered stdout terminal, with no
    /// journal attached.
    pub fn new(config: LoadConfig) -> Self {
        Self {
            config,
            style: SequenceStyle::default(),
            term: Box::new(Term::buffered_stdout()),
            journal: Box::new(NoopJournal),
            delay: None,
            cancel: CancelToken::new(),
            phase: Phase::Idle,
        }
    }

    /// Draws to the given terminal instead of stdout.
    pub fn with_term(mut self, term: Box<dyn TermLike>) -> Self {
        self.term = term;
        self
    }

    /// Overrides the default style.
    pub fn with_style(mut self, style: SequenceStyle) -> Self {
        self.style = style;
        self
    }

    /// Records run lifecycle events on the given sink.
    pub fn with_journal(mut self, journal: Box<dyn Journal>) -> Self {
        self.journal = journal;
        self
    }

    /// Overrides the delay source derived from the configured bounds.
    pub fn with_delay_source(mut self, delay: Box<dyn DelaySource>) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Installs a cancel token observed once per step.
    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Runs the sequence to completion.
    ///
    /// Returns a [`ConfigError`] before any frame is painted if the
    /// configuration is invalid; such a run performs zero steps.
    ///
    /// [`ConfigError`]: crate::ConfigError
    pub fn run(&mut self) -> Result<(), LoadError> {
        self.config.validate()?;
        self.phase = Phase::Running;

        let failure = self.drive();

        // give a human reader time to see the completion line
        thread::sleep(self.config.completion_hold);
        self.phase = Phase::Completed;

        match failure {
            Some(error) => Err(error.into()),
            None => Ok(()),
        }
    }

    fn drive(&mut self) -> Option<RenderError> {
        let config = &self.config;
        let style = &self.style;
        let term = &*self.term;
        let journal = &mut self.journal;
        let cancel = &self.cancel;

        let mut state = RunState {
            current_step: 0,
            started: Instant::now(),
        };
        let _ = journal.record(&RunEvent::Begin {
            mode: config.mode,
            msg_loading: &*config.msg_loading,
        });

        let mut default_delay: Box<dyn DelaySource> = if config.randomized_delay {
            Box::new(UniformDelay::new(
                config.min_step_delay,
                config.max_step_delay,
            ))
        } else {
            Box::new(FixedDelay(config.min_step_delay))
        };
        let delay: &mut dyn DelaySource = match self.delay.as_mut() {
            Some(delay) => &mut **delay,
            None => &mut *default_delay,
        };

        let mut failure: Option<RenderError> = None;

        if config.mode == Mode::Bar {
            if let Err(error) = term
                .write_line(&loading_line(config))
                .and_then(|()| term.flush())
            {
                failure = Some(RenderError::Io(error));
            }
        }

        if failure.is_none() {
            let mut renderer: Box<dyn Renderer + '_> = match config.mode {
                Mode::Bar => Box::new(BarRenderer::new(
                    term,
                    style,
                    config.label.as_deref(),
                    delay,
                )),
                Mode::Text => Box::new(TextRenderer::new(
                    term,
                    style,
                    &config.msg_loading,
                    delay,
                )),
            };

            for step in 1..=config.total_steps {
                if cancel.is_cancelled() {
                    let _ = journal.record(&RunEvent::Cancelled {
                        completed_steps: state.current_step,
                        total_steps: config.total_steps,
                    });
                    break;
                }
                match renderer.advance(step, config.total_steps) {
                    Ok(()) => state.current_step = step,
                    Err(error) => {
                        let _ = journal.record(&RunEvent::RenderFailed { error: &error });
                        failure = Some(error);
                        break;
                    }
                }
            }

            if let Err(error) = renderer.finish() {
                failure.get_or_insert(error);
            }
        }

        // the completion message is attempted even after a failed frame
        if let Err(error) = term
            .write_line(&config.msg_complete)
            .and_then(|()| term.flush())
        {
            failure.get_or_insert(RenderError::Io(error));
        }

        let _ = journal.record(&RunEvent::Complete {
            msg_complete: &*config.msg_complete,
            elapsed: state.started.elapsed(),
        });

        failure
    }
}

/// The line printed above the bar. The default message keeps its historical
/// trailing ellipsis.
fn loading_line(config: &LoadConfig) -> String {
    if config.msg_loading == DEFAULT_LOADING_MSG {
        format!("{DEFAULT_LOADING_MSG}...")
    } else {
        config.msg_loading.to_string()
    }
}
