//! Bridge from OS shutdown signals to [`Message::Quit`]

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;
use bookview_core::prelude::*;

/// The OS signal that asked the browser to stop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl ShutdownSignal {
    pub fn name(self) -> &'static str {
        match self {
            ShutdownSignal::Interrupt => "SIGINT",
            ShutdownSignal::Terminate => "SIGTERM",
        }
    }
}

/// Background listener that posts a quit message into the browser's channel.
///
/// The task is aborted when the listener is dropped, so it never outlives
/// the session that spawned it.
pub struct SignalListener {
    handle: JoinHandle<()>,
}

impl SignalListener {
    pub fn spawn(tx: mpsc::Sender<Message>) -> Self {
        let handle = tokio::spawn(async move {
            match wait_for_shutdown().await {
                Ok(signal) => {
                    info!("{} received, quitting", signal.name());
                    forward_quit(&tx, signal).await;
                }
                Err(e) => warn!("Signal handling disabled: {}", e),
            }
        });
        Self { handle }
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for SignalListener {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Returns whether the browser was still listening
async fn forward_quit(tx: &mpsc::Sender<Message>, signal: ShutdownSignal) -> bool {
    match tx.send(Message::Quit).await {
        Ok(()) => true,
        Err(_) => {
            debug!("{} arrived after the browser closed", signal.name());
            false
        }
    }
}

#[cfg(unix)]
async fn wait_for_shutdown() -> Result<ShutdownSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint =
        signal(SignalKind::interrupt()).map_err(|e| Error::signal("SIGINT", e))?;
    let mut sigterm =
        signal(SignalKind::terminate()).map_err(|e| Error::signal("SIGTERM", e))?;

    let received = tokio::select! {
        _ = sigint.recv() => ShutdownSignal::Interrupt,
        _ = sigterm.recv() => ShutdownSignal::Terminate,
    };
    Ok(received)
}

#[cfg(windows)]
async fn wait_for_shutdown() -> Result<ShutdownSignal> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::signal("Ctrl+C", e))?;
    Ok(ShutdownSignal::Interrupt)
}
