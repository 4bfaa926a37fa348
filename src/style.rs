use unicode_width::UnicodeWidthStr;

/// Controls the visual appearance of both rendering modes.
#[derive(Clone, Debug)]
pub struct SequenceStyle {
    pub(crate) progress_chars: Vec<Box<str>>,
    // how unicode-big each progress char is
    pub(crate) char_width: usize,
    pub(crate) bar_width: usize,
    pub(crate) dot_char: char,
    pub(crate) dot_count: u32,
}

fn cells(s: &str) -> Vec<Box<str>> {
    s.chars().map(|c| c.to_string().into()).collect()
}

/// Unicode-aware width of the passed cells.
/// Panics on fewer than two cells, or if the cells are not equal-width.
fn cell_width(cells: &[Box<str>]) -> usize {
    assert!(
        cells.len() >= 2,
        "at least a filled and a background progress character are required"
    );
    let mut widths = cells.iter().map(|s| UnicodeWidthStr::width(s.as_ref()));
    let first = widths.next().expect("cells is non-empty");
    for width in widths {
        assert_eq!(first, width, "got passed un-equal width progress characters");
    }
    first
}

impl Default for SequenceStyle {
    fn default() -> Self {
        let progress_chars = cells("█░");
        let char_width = cell_width(&progress_chars);
        Self {
            progress_chars,
            char_width,
            bar_width: 40,
            dot_char: '.',
            dot_count: 3,
        }
    }
}

impl SequenceStyle {
    /// Sets the progress characters `(filled, .., background)`.
    ///
    /// Passing more than two gives the leading edge its own character. All
    /// passed characters need to be of equal width.
    pub fn progress_chars(mut self, s: &str) -> Self {
        self.progress_chars = cells(s);
        self.char_width = cell_width(&self.progress_chars);
        self
    }

    /// Sets the bar width in character cells.
    pub fn bar_width(mut self, cells: usize) -> Self {
        self.bar_width = cells;
        self
    }

    /// Sets the ellipsis character and how many of them one text-mode frame
    /// prints.
    pub fn ellipsis(mut self, dot: char, count: u32) -> Self {
        self.dot_char = dot;
        self.dot_count = count;
        self
    }

    /// Renders the cells for `fraction` of the bar, leading edge included.
    pub(crate) fn format_bar(&self, fraction: f32) -> String {
        let width = self.bar_width / self.char_width;
        let fill = (fraction * width as f32) as usize;
        let head = usize::from(fraction > 0.0 && fill < width);

        let mut bar = String::with_capacity(self.bar_width * 4);
        for _ in 0..fill {
            bar.push_str(&self.progress_chars[0]);
        }
        if head == 1 {
            let edge = match self.progress_chars.len() - 2 {
                0 => 1,
                n => n,
            };
            bar.push_str(&self.progress_chars[edge]);
        }
        let rest = self.progress_chars.last().expect("cells is non-empty");
        for _ in 0..width.saturating_sub(fill).saturating_sub(head) {
            bar.push_str(rest);
        }
        bar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> SequenceStyle {
        SequenceStyle::default().bar_width(10)
    }

    #[test]
    fn empty_bar_is_all_background() {
        assert_eq!(style().format_bar(0.0), "░░░░░░░░░░");
    }

    #[test]
    fn half_bar_fills_half_the_cells() {
        assert_eq!(style().format_bar(0.5), "█████░░░░░");
    }

    #[test]
    fn full_bar_has_no_background() {
        assert_eq!(style().format_bar(1.0), "██████████");
    }

    #[test]
    fn fill_is_monotonic_over_fractions() {
        let style = style();
        let mut last = 0;
        for step in 0..=20 {
            let bar = style.format_bar(step as f32 / 20.0);
            let filled = bar.chars().filter(|&c| c == '█').count();
            assert!(filled >= last, "bar shrank at step {step}");
            last = filled;
        }
        assert_eq!(last, 10);
    }

    #[test]
    fn three_char_sets_use_their_own_edge() {
        let style = style().progress_chars("█▓░");
        assert_eq!(style.format_bar(0.5), "█████▓░░░░");
    }

    #[test]
    #[should_panic(expected = "un-equal width")]
    fn unequal_width_chars_rejected() {
        let _ = SequenceStyle::default().progress_chars("ａ░");
    }
}
