//! The observer: sole reader of the store's receipts.
//!
//! Receipts are printed to stdout exactly once each. The count of
//! rendered receipts comes back to the orchestrator so a finished run
//! can prove nothing was dropped on the return path.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use crate::model::Receipt;

/// Prints every receipt arriving on the shared stream, in fulfillment
/// order, until the worker drops its sink. Returns how many were shown.
pub async fn render_broadcast(mut receipts: mpsc::Receiver<Receipt>) -> usize {
    let mut rendered = 0;
    while let Some(receipt) = receipts.recv().await {
        println!("{receipt}");
        rendered += 1;
    }
    info!(rendered, "Receipt stream finished");
    rendered
}

/// Awaits per-ticket replies one at a time and prints each receipt.
///
/// Listeners arrive on the handoff lane in ticket order, so finishing
/// one before starting the next keeps the printout in submission order
/// even when fulfillment has already raced ahead. A listener whose
/// registration was released resolves with an error and is skipped.
pub async fn render_direct(mut listeners: mpsc::Receiver<oneshot::Receiver<Receipt>>) -> usize {
    let mut rendered = 0;
    while let Some(listener) = listeners.recv().await {
        match listener.await {
            Ok(receipt) => {
                println!("{receipt}");
                rendered += 1;
            }
            Err(_) => debug!("Reply channel released before its receipt arrived"),
        }
    }
    info!(rendered, "Reply listeners finished");
    rendered
}
