//! Main TUI runner - entry point and event loop

use nightswitch_app::message::Message;
use nightswitch_app::signals;
use nightswitch_app::state::AppState;
use nightswitch_app::update;
use nightswitch_core::prelude::*;
use nightswitch_core::ThemeMode;
use tokio::sync::{mpsc, watch};

use crate::{event, render};

/// Run the switch screen until the user quits.
///
/// `theme_rx` observes the application-wide theme; every change triggers a
/// full repaint, the terminal counterpart of re-creating visible screens.
pub async fn run(mut state: AppState, theme_rx: watch::Receiver<ThemeMode>) -> Result<()> {
    restore_terminal_on_panic();

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    // Unified message channel (signal handler)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);
    signals::spawn_signal_handler(msg_tx);

    let result = run_loop(&mut term, &mut state, msg_rx, theme_rx);

    let restored = ratatui::try_restore().map_err(|e| Error::TerminalRestore(e.to_string()));
    info!(
        "Screen closed: {} = {} ({} theme{})",
        state.controller.key(),
        state.night_mode(),
        state.theme(),
        if state.unsaved() { ", not saved" } else { "" }
    );

    result.and(restored)
}

/// Leave raw mode and the alternate screen before the panic message prints
fn restore_terminal_on_panic() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        error!("Switch screen panicked: {}", info);
        previous(info);
    }));
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    mut theme_rx: watch::Receiver<ThemeMode>,
) -> Result<()> {
    while !state.should_quit() {
        // Shutdown signals
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg);
        }

        if theme_rx.has_changed().unwrap_or(false) {
            let mode = *theme_rx.borrow_and_update();
            debug!("Repainting for {} theme", mode);
            terminal
                .clear()
                .map_err(|e| Error::terminal(format!("Failed to clear terminal: {}", e)))?;
        }

        terminal
            .draw(|frame| render::view(frame, state))
            .map_err(|e| Error::terminal(format!("Failed to draw frame: {}", e)))?;

        if let Some(message) = event::poll()? {
            process_message(state, message);
        }
    }

    Ok(())
}

/// Run a message and every follow-up it produces
pub fn process_message(state: &mut AppState, message: Message) {
    let mut next = Some(message);
    while let Some(msg) = next {
        next = update(state, msg).message;
    }
}
