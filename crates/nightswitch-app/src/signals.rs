//! OS signals that end the switch screen

use std::fmt;

use tokio::sync::mpsc;

use crate::message::Message;
use nightswitch_core::prelude::*;

/// Which signal asked the screen to close
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShutdownSignal::Interrupt => f.write_str("SIGINT"),
            ShutdownSignal::Terminate => f.write_str("SIGTERM"),
        }
    }
}

/// Forward the first shutdown signal to the event loop as
/// [`Message::Shutdown`].
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        match next_shutdown_signal().await {
            Ok(signal) => {
                if tx.send(Message::Shutdown(signal)).await.is_err() {
                    debug!("{} arrived after the screen closed", signal);
                }
            }
            Err(e) => warn!("Signals will not close the screen: {}", e),
        }
    });
}

#[cfg(unix)]
async fn next_shutdown_signal() -> Result<ShutdownSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind, name: &str| {
        signal(kind).map_err(|e| Error::terminal(format!("cannot listen for {}: {}", name, e)))
    };
    let mut interrupt = listen(SignalKind::interrupt(), "SIGINT")?;
    let mut terminate = listen(SignalKind::terminate(), "SIGTERM")?;

    Ok(tokio::select! {
        _ = interrupt.recv() => ShutdownSignal::Interrupt,
        _ = terminate.recv() => ShutdownSignal::Terminate,
    })
}

#[cfg(not(unix))]
async fn next_shutdown_signal() -> Result<ShutdownSignal> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("cannot listen for Ctrl+C: {}", e)))?;
    Ok(ShutdownSignal::Interrupt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_names() {
        assert_eq!(ShutdownSignal::Interrupt.to_string(), "SIGINT");
        assert_eq!(ShutdownSignal::Terminate.to_string(), "SIGTERM");
    }

    #[tokio::test]
    async fn test_handler_stays_quiet_without_signal() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);
        spawn_signal_handler(tx);
        tokio::task::yield_now().await;

        assert!(rx.try_recv().is_err());
    }
}
