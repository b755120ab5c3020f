//! Two-state switch widget

use nightswitch_app::{SwitchState, ToggleControl};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::{styles, Palette};

const KNOB_ON: &str = "   ON ● ";
const KNOB_OFF: &str = " ● OFF   ";

/// Renders `label ........ [knob]` on a single line
pub struct ToggleSwitch<'a> {
    switch: &'a SwitchState,
    palette: &'a Palette,
}

impl<'a> ToggleSwitch<'a> {
    pub fn new(switch: &'a SwitchState, palette: &'a Palette) -> Self {
        Self { switch, palette }
    }

    fn knob(&self) -> &'static str {
        if self.switch.is_checked() {
            KNOB_ON
        } else {
            KNOB_OFF
        }
    }
}

impl Widget for ToggleSwitch<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let knob = self.knob();
        let label = self.switch.label();
        let knob_width = knob.chars().count() as u16;
        let label_width = label.chars().count() as u16;
        let gap = area.width.saturating_sub(knob_width + label_width).max(1);

        let line = Line::from(vec![
            Span::styled(label.to_string(), styles::text_primary(self.palette)),
            Span::raw(" ".repeat(gap as usize)),
            Span::styled(
                knob,
                styles::switch_knob(self.palette, self.switch.is_checked()),
            ),
        ]);

        Paragraph::new(line).render(area, buf);
    }
}
