use std::thread;

use crate::delay::DelaySource;
use crate::error::RenderError;
use crate::render::Renderer;
use crate::style::SequenceStyle;
use crate::term_like::TermLike;

/// Renders a proportional bar with a step counter and percentage.
///
/// Every advance overwrites the previous frame in place; the bar never
/// appends a new line per step.
pub struct BarRenderer<'a> {
    term: &'a dyn TermLike,
    style: &'a SequenceStyle,
    label: Option<&'a str>,
    delay: &'a mut dyn DelaySource,
}

impl<'a> BarRenderer<'a> {
    pub fn new(
        term: &'a dyn TermLike,
        style: &'a SequenceStyle,
        label: Option<&'a str>,
        delay: &'a mut dyn DelaySource,
    ) -> Self {
        Self {
            term,
            style,
            label,
            delay,
        }
    }

    fn frame(&self, step: u64, total: u64) -> String {
        let fraction = step as f32 / total as f32;
        let bar = self.style.format_bar(fraction);
        let percent = (fraction * 100.0).round() as u32;
        match self.label {
            Some(label) => format!("{label}: {bar} {step}/{total} ({percent}%)"),
            None => format!("{bar} {step}/{total} ({percent}%)"),
        }
    }
}

impl Renderer for BarRenderer<'_> {
    fn advance(&mut self, step: u64, total: u64) -> Result<(), RenderError> {
        self.term.clear_line()?;
        self.term.write_str(&self.frame(step, total))?;
        self.term.flush()?;
        thread::sleep(self.delay.next_delay());
        Ok(())
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        self.term.write_line("")?;
        self.term.flush()?;
        Ok(())
    }
}
