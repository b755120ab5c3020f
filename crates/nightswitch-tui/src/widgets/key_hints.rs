//! Key hint footer

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::{styles, Palette};

const HINTS: &[(&str, &str)] = &[("Space", "toggle"), ("r", "reload"), ("q", "quit")];

pub struct KeyHints<'a> {
    palette: &'a Palette,
}

impl<'a> KeyHints<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (i, (key, action)) in HINTS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ·  ", styles::text_muted(self.palette)));
            }
            spans.push(Span::styled(*key, styles::keybinding(self.palette)));
            spans.push(Span::styled(
                format!(" {}", action),
                styles::text_muted(self.palette),
            ));
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
