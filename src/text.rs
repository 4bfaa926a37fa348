use std::thread;

use crate::delay::DelaySource;
use crate::error::RenderError;
use crate::render::Renderer;
use crate::style::SequenceStyle;
use crate::term_like::TermLike;

/// Renders the loading message with an animated ellipsis.
///
/// Purely a liveness cue: no numeric progress is shown. Each frame clears the
/// line, repaints the message and grows the ellipsis one dot at a time, with
/// the step pause split evenly across the dots.
pub struct TextRenderer<'a> {
    term: &'a dyn TermLike,
    style: &'a SequenceStyle,
    message: &'a str,
    delay: &'a mut dyn DelaySource,
}

impl<'a> TextRenderer<'a> {
    pub fn new(
        term: &'a dyn TermLike,
        style: &'a SequenceStyle,
        message: &'a str,
        delay: &'a mut dyn DelaySource,
    ) -> Self {
        Self {
            term,
            style,
            message,
            delay,
        }
    }
}

impl Renderer for TextRenderer<'_> {
    fn advance(&mut self, _step: u64, _total: u64) -> Result<(), RenderError> {
        let dots = self.style.dot_count.max(1);
        let sub_delay = self.delay.next_delay() / dots;
        let dot = self.style.dot_char.to_string();

        self.term.clear_line()?;
        self.term.write_str(self.message)?;
        self.term.flush()?;
        for _ in 0..dots {
            thread::sleep(sub_delay);
            self.term.write_str(&dot)?;
            self.term.flush()?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        self.term.write_line("")?;
        self.term.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::delay::FixedDelay;
    use crate::term_like::test_support::RecordingTerm;

    #[test]
    fn frame_repaints_message_and_grows_dots() {
        let term = RecordingTerm::default();
        let style = SequenceStyle::default();
        let mut delay = FixedDelay(Duration::ZERO);
        let mut text = TextRenderer::new(&term, &style, "Loading", &mut delay);
        text.advance(1, 5).unwrap();
        assert_eq!(term.ops(), vec!["clear", "str:Loading", "str:.", "str:.", "str:."]);
    }

    #[test]
    fn frames_never_accumulate_lines() {
        let term = RecordingTerm::default();
        let style = SequenceStyle::default().ellipsis('.', 1);
        let mut delay = FixedDelay(Duration::ZERO);
        let mut text = TextRenderer::new(&term, &style, "Working", &mut delay);
        text.advance(1, 2).unwrap();
        text.advance(2, 2).unwrap();
        text.finish().unwrap();
        assert_eq!(
            term.ops(),
            vec![
                "clear",
                "str:Working",
                "str:.",
                "clear",
                "str:Working",
                "str:.",
                "line:",
            ]
        );
    }
}
