//! Colour palettes for the light and dark themes.

use nightswitch_core::ThemeMode;
use ratatui::style::Color;

/// Colours used by the switch screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub background: Color,
    pub card_bg: Color,

    // --- Borders ---
    pub border: Color,
    pub border_active: Color,

    // --- Text ---
    pub text_primary: Color,
    pub text_muted: Color,

    // --- Switch ---
    pub switch_on: Color,
    pub switch_off: Color,
    /// Foreground on top of a filled switch knob
    pub contrast_fg: Color,

    // --- Status ---
    pub warning: Color,
    pub keybinding: Color,
}

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(246, 248, 250),
    card_bg: Color::Rgb(255, 255, 255),
    border: Color::Rgb(208, 215, 222),
    border_active: Color::Rgb(9, 105, 218),
    text_primary: Color::Rgb(31, 35, 40),
    text_muted: Color::Rgb(101, 109, 118),
    switch_on: Color::Rgb(26, 127, 55),
    switch_off: Color::Rgb(140, 149, 159),
    contrast_fg: Color::Rgb(255, 255, 255),
    warning: Color::Rgb(154, 103, 0),
    keybinding: Color::Rgb(130, 80, 223),
};

pub const DARK: Palette = Palette {
    background: Color::Rgb(10, 12, 16),
    card_bg: Color::Rgb(18, 21, 28),
    border: Color::Rgb(45, 51, 59),
    border_active: Color::Rgb(88, 166, 255),
    text_primary: Color::Rgb(201, 209, 217),
    text_muted: Color::Rgb(125, 133, 144),
    switch_on: Color::Rgb(16, 185, 129),
    switch_off: Color::Rgb(72, 79, 88),
    contrast_fg: Color::Rgb(10, 12, 16),
    warning: Color::Rgb(234, 179, 8),
    keybinding: Color::Rgb(234, 179, 8),
};

/// Palette for the active theme
pub fn for_mode(mode: ThemeMode) -> &'static Palette {
    match mode {
        ThemeMode::Light => &LIGHT,
        ThemeMode::Dark => &DARK,
    }
}
