use std::fmt::{Debug, Formatter};
use std::io::Write;
use std::sync::{Arc, Mutex};

use vt100::Parser;

use crate::term_like::TermLike;

/// An in-memory terminal, backed by a [`vt100::Parser`].
///
/// This is just an [`Arc`] around its internal state, so it can be freely
/// cloned; a clone handed to a runner stays inspectable from the test.
#[derive(Debug, Clone)]
pub struct InMemoryTerm {
    state: Arc<Mutex<InMemoryTermState>>,
}

impl InMemoryTerm {
    pub fn new(rows: u16, cols: u16) -> InMemoryTerm {
        assert!(rows > 0, "rows must be > 0");
        assert!(cols > 0, "cols must be > 0");
        InMemoryTerm {
            state: Arc::new(Mutex::new(InMemoryTermState::new(rows, cols))),
        }
    }

    /// The visible screen contents, with trailing empty rows removed.
    pub fn contents(&self) -> String {
        let state = self.state.lock().unwrap();

        let mut rows = state
            .parser
            .screen()
            .rows(0, state.width)
            .collect::<Vec<_>>();

        // trim empty rows from the end without losing blank lines in between
        let mut rows = rows
            .drain(..)
            .rev()
            .skip_while(|line| line.is_empty())
            .collect::<Vec<_>>();
        rows.reverse();
        rows.join("\n")
    }
}

impl TermLike for InMemoryTerm {
    fn width(&self) -> u16 {
        self.state.lock().unwrap().width
    }

    fn write_line(&self, s: &str) -> std::io::Result<()> {
        let mut state = self.state.lock().unwrap();

        // vt100 needs the full \r\n sequence to jump to the next line and
        // reset the cursor to the beginning of the line
        state.write_str(s)?;
        state.write_str("\r\n")
    }

    fn write_str(&self, s: &str) -> std::io::Result<()> {
        self.state.lock().unwrap().write_str(s)
    }

    fn clear_line(&self) -> std::io::Result<()> {
        self.state.lock().unwrap().write_str("\r\x1b[2K")
    }

    fn flush(&self) -> std::io::Result<()> {
        self.state.lock().unwrap().parser.flush()
    }
}

struct InMemoryTermState {
    width: u16,
    parser: vt100::Parser,
}

impl InMemoryTermState {
    fn new(rows: u16, cols: u16) -> InMemoryTermState {
        InMemoryTermState {
            width: cols,
            parser: Parser::new(rows, cols, 0),
        }
    }

    fn write_str(&mut self, s: &str) -> std::io::Result<()> {
        self.parser.write_all(s.as_bytes())
    }
}

impl Debug for InMemoryTermState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryTermState").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_line_advances_rows() {
        let term = InMemoryTerm::new(10, 20);
        term.write_line("first").unwrap();
        term.write_line("second").unwrap();
        assert_eq!(term.contents(), "first\nsecond");
    }

    #[test]
    fn clear_line_erases_in_place() {
        let term = InMemoryTerm::new(10, 20);
        term.write_str("a long frame").unwrap();
        term.clear_line().unwrap();
        term.write_str("short").unwrap();
        assert_eq!(term.contents(), "short");
    }

    #[test]
    fn blank_lines_in_between_survive() {
        let term = InMemoryTerm::new(10, 20);
        term.write_line("top").unwrap();
        term.write_line("").unwrap();
        term.write_line("bottom").unwrap();
        assert_eq!(term.contents(), "top\n\nbottom");
    }
}
