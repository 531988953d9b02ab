//! Action handlers: UpdateAction dispatch and background task spawning

use std::path::PathBuf;

use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::message::Message;
use crate::UpdateAction;
use marquee_core::Catalog;

/// Execute an action by spawning a background task
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>) {
    match action {
        UpdateAction::LoadDataset { path } => {
            tokio::spawn(async move {
                let message = load_dataset(path).await;
                if msg_tx.send(message).await.is_err() {
                    warn!("Dataset loaded after the event loop closed");
                }
            });
        }
    }
}

/// Read and parse the dataset off the event loop thread.
///
/// Always produces a message: the catalog, or the reason it could not be
/// loaded. A partial dataset is never delivered.
pub async fn load_dataset(path: PathBuf) -> Message {
    debug!("Loading dataset from {}", path.display());
    let result = tokio::task::spawn_blocking(move || Catalog::load(&path)).await;

    match result {
        Ok(Ok(catalog)) => Message::DatasetLoaded { catalog },
        Ok(Err(e)) => {
            error!("Failed to load dataset: {}", e);
            if e.is_recoverable() {
                info!("Dataset file is readable but invalid; fix it and press r to retry");
            }
            Message::DatasetLoadFailed {
                error: e.to_string(),
            }
        }
        Err(e) => {
            error!("Dataset load task failed: {}", e);
            Message::DatasetLoadFailed {
                error: format!("Dataset load task failed: {}", e),
            }
        }
    }
}
