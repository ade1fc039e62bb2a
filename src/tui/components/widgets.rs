//! Small pieces shared by the screen components.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::tui::theme::Theme;

/// Wrapping focus index over a list whose length can change between frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    pub index: usize,
}

impl ListCursor {
    pub fn next(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index + 1) % len;
        }
    }

    pub fn prev(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index + len - 1) % len;
        }
    }

    /// Pull the index back inside `0..len` after the list shrank.
    pub fn clamp(&mut self, len: usize) {
        self.index = self.index.min(len.saturating_sub(1));
    }

    pub fn is(&self, index: usize) -> bool {
        self.index == index
    }
}

/// A row of `[ label ]` chips with the `active` one filled.
pub fn chip_line<'a>(
    labels: impl IntoIterator<Item = &'a str>,
    active: usize,
    theme: &Theme,
) -> Line<'a> {
    let mut spans = Vec::new();
    for (i, label) in labels.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" {label} "),
            theme.chip(i == active, false),
        ));
    }
    Line::from(spans)
}

/// `★ 4.9` style rating span.
pub fn rating_span(rating: f32, theme: &Theme) -> Span<'static> {
    Span::styled(format!("★ {rating:.1}"), Style::default().fg(theme.warning))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_wraps() {
        let mut cursor = ListCursor::default();
        cursor.prev(3);
        assert_eq!(cursor.index, 2);
        cursor.next(3);
        assert_eq!(cursor.index, 0);
    }

    #[test]
    fn test_cursor_on_empty_list_stays_put() {
        let mut cursor = ListCursor::default();
        cursor.next(0);
        cursor.prev(0);
        assert_eq!(cursor.index, 0);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut cursor = ListCursor { index: 5 };
        cursor.clamp(2);
        assert_eq!(cursor.index, 1);
        cursor.clamp(0);
        assert_eq!(cursor.index, 0);
    }

    #[test]
    fn test_chip_line_spacing() {
        let theme = Theme::for_mode(false);
        let line = chip_line(["All", "Food"], 0, &theme);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, " All   Food ");
    }
}
