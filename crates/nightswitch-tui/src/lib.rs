//! nightswitch-tui - Terminal UI for nightswitch
//!
//! Renders the night-mode switch with ratatui, polls crossterm for key
//! presses and drives the TEA loop from `nightswitch-app`.

pub mod event;
pub mod render;
pub mod runner;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
