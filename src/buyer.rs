//! Buyer tasks, one per purchase request.

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::error::StoreError;
use crate::model::{PurchaseRequest, Ticket};
use crate::worker::StoreClient;

/// Spawns a buyer who submits a single ticketed request and exits.
///
/// The handle resolves to the ticket once the submission sits in the
/// queue. Submitting is the buyer's whole job; the receipt comes back
/// over the response path, not through this task. The buyer's client
/// clone drops when the task ends, which is its part in letting the
/// queue close.
pub fn spawn(
    client: StoreClient,
    ticket: Ticket,
    request: PurchaseRequest,
) -> JoinHandle<Result<Ticket, StoreError>> {
    tokio::spawn(async move {
        info!(
            %ticket,
            buyer = %request.buyer,
            product = %request.product,
            quantity = request.quantity,
            "Buyer entering the store"
        );
        client.submit(ticket, request).await?;
        debug!(%ticket, "Request queued, buyer leaving");
        Ok(ticket)
    })
}
