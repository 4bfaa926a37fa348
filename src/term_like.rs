use std::fmt::Debug;
use std::io;

use console::Term;

/// A trait for minimal terminal-like behavior.
///
/// Renderers and [`SequenceRunner`] draw only through this trait, so any
/// implementor can stand in for the real terminal.
///
/// [`SequenceRunner`]: crate::SequenceRunner
pub trait TermLike: Debug + Send + Sync {
    /// Return the terminal width in columns.
    fn width(&self) -> u16;

    /// Write a string and add a newline.
    fn write_line(&self, s: &str) -> io::Result<()>;

    /// Write a string.
    fn write_str(&self, s: &str) -> io::Result<()>;

    /// Clear the current line and reset the cursor to beginning of the line.
    fn clear_line(&self) -> io::Result<()>;

    fn flush(&self) -> io::Result<()>;
}

impl TermLike for Term {
    fn width(&self) -> u16 {
        self.size().1
    }

    fn write_line(&self, s: &str) -> io::Result<()> {
        self.write_line(s)
    }

    fn write_str(&self, s: &str) -> io::Result<()> {
        self.write_str(s)
    }

    fn clear_line(&self) -> io::Result<()> {
        self.clear_line()
    }

    fn flush(&self) -> io::Result<()> {
        self.flush()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::io;
    use std::sync::Mutex;

    use super::TermLike;

    /// Accepts and discards all output.
    #[derive(Debug, Default)]
    pub(crate) struct NullTerm;

    impl TermLike for NullTerm {
        fn width(&self) -> u16 {
            80
        }

        fn write_line(&self, _s: &str) -> io::Result<()> {
            Ok(())
        }

        fn write_str(&self, _s: &str) -> io::Result<()> {
            Ok(())
        }

        fn clear_line(&self) -> io::Result<()> {
            Ok(())
        }

        fn flush(&self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Records every draw operation in order.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingTerm {
        ops: Mutex<Vec<String>>,
    }

    impl RecordingTerm {
        pub(crate) fn ops(&self) -> Vec<String> {
            self.ops.lock().unwrap().clone()
        }

        fn push(&self, op: String) {
            self.ops.lock().unwrap().push(op);
        }
    }

    impl TermLike for RecordingTerm {
        fn width(&self) -> u16 {
            80
        }

        fn write_line(&self, s: &str) -> io::Result<()> {
            self.push(format!("line:{s}"));
            Ok(())
        }

        fn write_str(&self, s: &str) -> io::Result<()> {
            self.push(format!("str:{s}"));
            Ok(())
        }

        fn clear_line(&self) -> io::Result<()> {
            self.push("clear".into());
            Ok(())
        }

        fn flush(&self) -> io::Result<()> {
            Ok(())
        }
    }
}
