//! Main TUI runner - entry point and event loop

use bookview_app::message::Message;
use bookview_app::process::process_message;
use bookview_app::signals::SignalListener;
use bookview_app::AppState;
use bookview_core::prelude::*;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;

use crate::{event, render, terminal};

/// Run the interactive browser until the user quits or a signal arrives
///
/// The loop itself is synchronous: crossterm polling blocks this worker for
/// at most one poll timeout per frame, while the signal listener runs on
/// another task and reaches the loop through the channel.
pub async fn run(mut state: AppState) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = match ratatui::try_init() {
        Ok(term) => term,
        Err(e) => {
            ratatui::restore();
            return Err(Error::terminal_init(e));
        }
    };

    // Unified message channel (signal listener)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);
    let signals = SignalListener::spawn(msg_tx);

    info!(
        "Browser started: {} books, theme {}",
        state.catalog.len(),
        state.theme.name
    );
    let result = run_loop(&mut term, &mut state, msg_rx);

    drop(signals);
    ratatui::restore();
    info!("Browser stopped");
    result
}

fn run_loop(
    terminal: &mut DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // Messages from background tasks
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg);
        }
        if state.should_quit() {
            break;
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
