//! Semantic style builders over a [`Palette`].

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::Palette;

// --- Surfaces ---
pub fn background(p: &Palette) -> Style {
    Style::default().bg(p.background)
}

pub fn card(p: &Palette) -> Style {
    Style::default().bg(p.card_bg).fg(p.text_primary)
}

// --- Text styles ---
pub fn text_primary(p: &Palette) -> Style {
    Style::default().fg(p.text_primary)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

pub fn warning(p: &Palette) -> Style {
    Style::default().fg(p.warning).add_modifier(Modifier::BOLD)
}

pub fn keybinding(p: &Palette) -> Style {
    Style::default().fg(p.keybinding)
}

// --- Switch ---
pub fn switch_knob(p: &Palette, checked: bool) -> Style {
    let fill = if checked { p.switch_on } else { p.switch_off };
    Style::default()
        .fg(p.contrast_fg)
        .bg(fill)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(p: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            p.border_active
        } else {
            p.border
        }))
        .style(card(p))
}
