//! Application-wide theme state
//!
//! The active theme is process-global by nature. Instead of an ambient static
//! it lives behind [`ThemeService`], injected into the controller, so tests can
//! substitute their own implementation.

use std::sync::Arc;

use nightswitch_core::prelude::*;
use nightswitch_core::ThemeMode;
use tokio::sync::watch;

/// Applies and reports the application-wide theme.
pub trait ThemeService {
    fn set_theme(&mut self, mode: ThemeMode);

    fn theme(&self) -> ThemeMode;
}

/// Cloneable theme handle backed by a `watch` channel.
///
/// Every clone shares the same theme. Other parts of the process (renderer,
/// headless reporters) observe changes through [`subscribe`](Self::subscribe).
#[derive(Debug, Clone)]
pub struct SharedThemeService {
    tx: Arc<watch::Sender<ThemeMode>>,
}

impl SharedThemeService {
    pub fn new(initial: ThemeMode) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    /// Receive every subsequent theme change
    pub fn subscribe(&self) -> watch::Receiver<ThemeMode> {
        self.tx.subscribe()
    }
}

impl Default for SharedThemeService {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

impl ThemeService for SharedThemeService {
    fn set_theme(&mut self, mode: ThemeMode) {
        let changed = self.tx.send_if_modified(|current| {
            if *current == mode {
                false
            } else {
                *current = mode;
                true
            }
        });

        if changed {
            info!("Theme changed to {}", mode);
        } else {
            trace!("Theme already {}", mode);
        }
    }

    fn theme(&self) -> ThemeMode {
        *self.tx.borrow()
    }
}
