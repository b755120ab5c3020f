//! Light and dark themes for the switch screen.
//!
//! This module provides:
//! - `palette` - Colour sets for each [`ThemeMode`](nightswitch_core::ThemeMode)
//! - `styles` - Semantic style builder functions over a palette

pub mod palette;
pub mod styles;

pub use palette::{for_mode, Palette};
