use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::config::Mode;
use crate::error::RenderError;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const TIME_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]:[second]");
const RULE: &str = "================";

/// One recordable moment in a run's lifecycle.
#[derive(Debug)]
pub enum RunEvent<'a> {
    /// The sequence started.
    Begin { mode: Mode, msg_loading: &'a str },
    /// The sequence printed its completion message.
    Complete {
        msg_complete: &'a str,
        elapsed: Duration,
    },
    /// The sequence stopped early through its cancel token.
    Cancelled {
        completed_steps: u64,
        total_steps: u64,
    },
    /// A frame failed to render.
    RenderFailed { error: &'a RenderError },
}

impl RunEvent<'_> {
    /// One-line description of the event, as it appears in journal sinks.
    pub fn summary(&self) -> String {
        match self {
            RunEvent::Begin { mode, msg_loading } => {
                format!("begin loading sequence ({mode}) - loading message: {msg_loading:?}")
            }
            RunEvent::Complete {
                msg_complete,
                elapsed,
            } => format!(
                "completed loading sequence - completion message: {msg_complete:?} - took {:.2}s",
                elapsed.as_secs_f64()
            ),
            RunEvent::Cancelled {
                completed_steps,
                total_steps,
            } => format!("cancelled after {completed_steps}/{total_steps} steps"),
            RunEvent::RenderFailed { error } => format!("render failure: {error}"),
        }
    }
}

/// Append-only sink for run lifecycle events.
///
/// Injected into [`SequenceRunner`] instead of living behind a process-wide
/// logger. The runner swallows sink errors: a journaling problem must never
/// abort a run.
///
/// [`SequenceRunner`]: crate::SequenceRunner
pub trait Journal: Send {
    fn record(&mut self, event: &RunEvent<'_>) -> io::Result<()>;
}

/// Discards every event.
#[derive(Debug, Default)]
pub struct NoopJournal;

impl Journal for NoopJournal {
    fn record(&mut self, _event: &RunEvent<'_>) -> io::Result<()> {
        Ok(())
    }
}

/// Collects event summaries in memory.
///
/// Cloning shares the backing store, so a clone handed to a runner can be
/// inspected afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryJournal {
    entries: Arc<Mutex<Vec<String>>>,
}

impl MemoryJournal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }
}

impl Journal for MemoryJournal {
    fn record(&mut self, event: &RunEvent<'_>) -> io::Result<()> {
        self.entries.lock().unwrap().push(event.summary());
        Ok(())
    }
}

/// Appending text-file sink.
///
/// Creation is idempotent: missing parent directories and the file itself are
/// created, an existing file is appended to. A dated header block is written
/// when the journal opens and a footer block when it drops, so every process
/// run leaves a delimited section in the file. The handle is released on drop
/// even if a write failed earlier.
#[derive(Debug)]
pub struct FileJournal {
    file: File,
}

impl FileJournal {
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut journal = Self { file };
        journal.write_header()?;
        Ok(journal)
    }

    fn write_header(&mut self) -> io::Result<()> {
        let (date, time) = now_strings();
        writeln!(self.file, "Date: {date}")?;
        writeln!(self.file, "Time: {time}")?;
        writeln!(self.file, "{RULE}")?;
        writeln!(self.file)
    }

    fn write_footer(&mut self) -> io::Result<()> {
        let (date, time) = now_strings();
        writeln!(self.file, "End of log for date: {date}")?;
        writeln!(self.file, "Time: {time}")?;
        writeln!(self.file, "{RULE}")?;
        writeln!(self.file)
    }
}

impl Journal for FileJournal {
    fn record(&mut self, event: &RunEvent<'_>) -> io::Result<()> {
        let (_, time) = now_strings();
        writeln!(self.file, "{time} - {}", event.summary())?;
        self.file.flush()
    }
}

impl Drop for FileJournal {
    fn drop(&mut self) {
        let _ = self.write_footer();
        let _ = self.file.flush();
    }
}

/// Local date and time strings, falling back to UTC when the local offset
/// cannot be determined.
fn now_strings() -> (String, String) {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    let date = now.format(DATE_FORMAT).unwrap_or_default();
    let time = now.format(TIME_FORMAT).unwrap_or_default();
    (date, time)
}
