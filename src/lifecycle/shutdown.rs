//! Shutdown coordination for the proxy.

use tokio::sync::broadcast;

use crate::lifecycle::signals::termination_signal;

/// Coordinator for graceful shutdown.
///
/// Broadcasts a single stop event to every subscribed server.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves once `rx` receives a stop event (or its sender is dropped),
/// or the process is asked to terminate, whichever comes first.
pub async fn shutdown_requested(mut rx: broadcast::Receiver<()>) {
    tokio::select! {
        _ = rx.recv() => {
            tracing::info!("Shutdown triggered");
        }
        signal = termination_signal() => {
            tracing::info!(signal, "Shutdown signal received");
        }
    }
}
