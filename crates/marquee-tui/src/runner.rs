//! Main TUI runner - entry point and event loop
//!
//! Contains the application lifecycle:
//! - `run`: sets up the terminal, kicks off the dataset load and runs the loop
//! - `run_loop`: drains background messages, renders, polls terminal events

use std::path::PathBuf;

use tokio::sync::mpsc;

use marquee_app::config::Settings;
use marquee_app::process::process_message;
use marquee_app::signals;
use marquee_app::{AppState, Message};
use marquee_core::prelude::*;

use crate::{event, render, terminal};

/// Run the dashboard for the dataset at `dataset_path`
pub async fn run(dataset_path: PathBuf, settings: Settings) -> Result<()> {
    terminal::install_panic_hook();

    let mut term = terminal::init()?;
    let mut state = AppState::new(dataset_path, settings);

    // Unified message channel for the load task and the signal handler
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());

    info!("Loading dataset {}", state.dataset_path.display());
    process_message(&mut state, Message::LoadDataset, &msg_tx);

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx);

    terminal::restore();
    info!("Marquee exiting");
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // Background messages (load results, signals)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx);
        }
    }

    Ok(())
}
