//! Main TUI runner - entry point and event loop

use std::time::Instant;

use tokio::sync::mpsc;

use clubdeck_app::message::Message;
use clubdeck_app::{handler, AppState, Settings};
use clubdeck_core::prelude::*;
use clubdeck_core::SessionDeadlineStore;

use crate::{event, render, terminal};

/// Run the TUI application.
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // Initialize terminal
    let mut term = ratatui::init();

    // Create initial state; the offer deadline is scoped to this terminal
    // session so a relaunch resumes the same countdown
    let mut store = SessionDeadlineStore::for_current_session();
    let mut state = AppState::new(settings, &mut store, Instant::now());

    // Unified message channel (signal handler, future background sources)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // SIGINT/SIGTERM become a clean quit
    spawn_signal_handler(msg_tx);

    let result = run_loop(&mut term, &mut state, msg_rx);

    // Restore terminal
    ratatui::restore();

    result
}

/// Spawn a task forwarding ctrl-c as a quit message.
fn spawn_signal_handler(msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = msg_tx.send(Message::Quit).await;
        }
    });
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // Process external messages (from signal handler, etc.)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg);
        }

        // Render
        let now = Instant::now();
        terminal.draw(|frame| render::view(frame, state, now))?;

        // Handle terminal events (50ms timeout produces ticks)
        if let Some(message) = event::poll()? {
            process_message(state, message);
        }
    }

    info!("ClubDeck exiting");
    Ok(())
}

/// Run one message through update(), feeding follow-ups back in.
fn process_message(state: &mut AppState, message: Message) {
    let mut next = Some(message);
    while let Some(message) = next.take() {
        let result = handler::update(state, message, Instant::now());
        next = result.message;
    }
}
