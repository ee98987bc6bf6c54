//! The fulfillment worker: the single task allowed to touch the shelf.
//!
//! Buyers submit ticketed requests through a cloneable [`StoreClient`];
//! the worker pulls them off a bounded queue one at a time, decides each
//! against the [`Inventory`] it owns, and pushes the receipt into its
//! [`ResponseSink`]. One consumer on one queue is the whole concurrency
//! story: no lock ever guards the stock.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use crate::error::StoreError;
use crate::inventory::Inventory;
use crate::model::{PurchaseRequest, Receipt, Submission, Ticket};
use crate::response::ResponseSink;

/// Where the worker is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    /// Accepting and fulfilling submissions.
    Running,
    /// Every client is gone; only buffered submissions remain.
    Draining,
    /// The last buffered submission has been fulfilled.
    Stopped,
}

/// Cloneable handle for submitting requests to the fulfillment queue.
///
/// The queue closes when the last clone is dropped, which is the only
/// shutdown signal the worker needs.
#[derive(Clone)]
pub struct StoreClient {
    sender: mpsc::Sender<Submission>,
}

impl StoreClient {
    /// Enqueues one ticketed request, waiting whenever the queue is full.
    #[instrument(skip(self, request), fields(%ticket, buyer = %request.buyer, product = %request.product))]
    pub async fn submit(&self, ticket: Ticket, request: PurchaseRequest) -> Result<(), StoreError> {
        debug!(quantity = request.quantity, "Submitting purchase request");
        self.sender
            .send(Submission::new(ticket, request))
            .await
            .map_err(|_| StoreError::QueueClosed)
    }
}

/// Owns the inventory and fulfills submissions strictly in queue order.
pub struct FulfillmentWorker<S: ResponseSink> {
    receiver: mpsc::Receiver<Submission>,
    inventory: Inventory,
    sink: S,
    delay: Duration,
    state: WorkerState,
}

impl<S: ResponseSink> FulfillmentWorker<S> {
    /// Creates a worker over a fresh bounded queue and hands back the
    /// client half that feeds it.
    pub fn new(
        inventory: Inventory,
        sink: S,
        queue_capacity: usize,
        delay: Duration,
    ) -> (Self, StoreClient) {
        let (sender, receiver) = mpsc::channel(queue_capacity);
        let worker = Self {
            receiver,
            inventory,
            sink,
            delay,
            state: WorkerState::Running,
        };
        (worker, StoreClient { sender })
    }

    /// Runs until the queue is closed and fully drained, then returns
    /// the final inventory as the drained-to-completion acknowledgment.
    pub async fn run(mut self) -> Inventory {
        info!(state = ?self.state, "Fulfillment worker started");
        while let Some(submission) = self.receiver.recv().await {
            if self.state == WorkerState::Running && self.receiver.is_closed() {
                self.state = WorkerState::Draining;
                info!(state = ?self.state, "Queue closed, fulfilling buffered submissions");
            }
            self.fulfill(submission).await;
        }
        self.state = WorkerState::Stopped;
        info!(state = ?self.state, "Fulfillment worker drained");
        self.inventory
    }

    async fn fulfill(&mut self, submission: Submission) {
        let Submission { ticket, request } = submission;
        debug!(
            %ticket,
            buyer = %request.buyer,
            product = %request.product,
            quantity = request.quantity,
            "Fulfilling submission"
        );
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let outcome = self.inventory.decide(&request.product, request.quantity);
        let receipt = Receipt::new(ticket, request, outcome);
        // A lost receipt must never take the worker down with it.
        if let Err(error) = self.sink.deliver(receipt).await {
            warn!(%error, "Receipt could not be delivered");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductItem;
    use crate::response::BroadcastSink;

    fn apples() -> Inventory {
        Inventory::stocked([ProductItem::new("Apple", 6)])
    }

    #[tokio::test]
    async fn test_worker_stops_once_every_client_is_gone() {
        let (sink, _receipts) = BroadcastSink::channel(4);
        let (worker, client) = FulfillmentWorker::new(apples(), sink, 4, Duration::ZERO);
        let handle = tokio::spawn(worker.run());
        drop(client);
        let inventory = handle.await.unwrap();
        assert_eq!(inventory.stock("Apple"), Some(6));
    }

    #[tokio::test]
    async fn test_submit_after_close_is_rejected() {
        let (sink, _receipts) = BroadcastSink::channel(4);
        let (worker, client) = FulfillmentWorker::new(apples(), sink, 4, Duration::ZERO);
        drop(worker);
        let result = client
            .submit(Ticket(1), PurchaseRequest::new("Ali", "Apple", 1))
            .await;
        assert_eq!(result, Err(StoreError::QueueClosed));
    }

    #[tokio::test]
    async fn test_worker_survives_receipt_delivery_failure() {
        let (sink, receipts) = BroadcastSink::channel(4);
        drop(receipts);
        let (worker, client) = FulfillmentWorker::new(apples(), sink, 4, Duration::ZERO);
        let handle = tokio::spawn(worker.run());
        client
            .submit(Ticket(1), PurchaseRequest::new("Ali", "Apple", 2))
            .await
            .unwrap();
        client
            .submit(Ticket(2), PurchaseRequest::new("Badr", "Apple", 1))
            .await
            .unwrap();
        drop(client);
        let inventory = handle.await.unwrap();
        assert_eq!(inventory.stock("Apple"), Some(3));
    }
}
