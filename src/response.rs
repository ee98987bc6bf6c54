//! Receipt delivery strategies.
//!
//! The fulfillment worker does not care who reads its receipts. It hands
//! each one to a [`ResponseSink`], and the sink decides the shape of the
//! return path: a single shared stream ([`BroadcastSink`]) or a dedicated
//! channel per ticket ([`DirectSink`]).

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::debug;

use crate::error::StoreError;
use crate::model::{Receipt, Ticket};

/// Capability for handing a finished receipt back to a listener.
///
/// Implementations must tolerate being called from the worker task at
/// any point between startup and drain completion.
#[async_trait]
pub trait ResponseSink: Send + Sync + 'static {
    /// Delivers one receipt. Fails if nobody can receive it anymore.
    async fn deliver(&self, receipt: Receipt) -> Result<(), StoreError>;
}

/// All receipts flow through one shared channel, in fulfillment order.
///
/// Not `Clone`: the worker holds the only sender, so the receipt stream
/// closes exactly when the worker finishes draining.
pub struct BroadcastSink {
    sender: mpsc::Sender<Receipt>,
}

impl BroadcastSink {
    /// Creates the sink plus the receiving end an observer will drain.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<Receipt>) {
        let (sender, receiver) = mpsc::channel(capacity);
        (Self { sender }, receiver)
    }
}

#[async_trait]
impl ResponseSink for BroadcastSink {
    async fn deliver(&self, receipt: Receipt) -> Result<(), StoreError> {
        let ticket = receipt.ticket;
        self.sender
            .send(receipt)
            .await
            .map_err(|_| StoreError::ReplyDropped(ticket))
    }
}

/// Each ticket gets its own one-shot reply channel.
///
/// A listener must be registered before the submission enters the queue;
/// otherwise the worker could fulfill the request and find no mailbox to
/// drop the receipt into.
#[derive(Clone, Default)]
pub struct DirectSink {
    pending: Arc<Mutex<HashMap<Ticket, oneshot::Sender<Receipt>>>>,
}

impl DirectSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn pending(&self) -> MutexGuard<'_, HashMap<Ticket, oneshot::Sender<Receipt>>> {
        // The guard never crosses an await, so a poisoned lock only means
        // a panic elsewhere already sank the run. Keep going with the map.
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers interest in a ticket and returns the half that will
    /// resolve once its receipt is ready.
    pub fn register(&self, ticket: Ticket) -> oneshot::Receiver<Receipt> {
        let (sender, receiver) = oneshot::channel();
        self.pending().insert(ticket, sender);
        debug!(%ticket, "Reply channel registered");
        receiver
    }

    /// Drops every registration that never got its receipt, waking the
    /// matching receivers with a closed-channel error. Returns how many
    /// were released.
    pub fn release_pending(&self) -> usize {
        let mut pending = self.pending();
        let released = pending.len();
        pending.clear();
        released
    }
}

#[async_trait]
impl ResponseSink for DirectSink {
    async fn deliver(&self, receipt: Receipt) -> Result<(), StoreError> {
        let ticket = receipt.ticket;
        let sender = self.pending().remove(&ticket);
        match sender {
            Some(sender) => sender
                .send(receipt)
                .map_err(|_| StoreError::ReplyDropped(ticket)),
            None => Err(StoreError::ReplyDropped(ticket)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Outcome, PurchaseRequest};

    fn receipt(ticket: u64) -> Receipt {
        Receipt::new(
            Ticket(ticket),
            PurchaseRequest::new("Ali", "Apple", 1),
            Outcome::Bought { remaining: 5 },
        )
    }

    #[tokio::test]
    async fn test_broadcast_preserves_fulfillment_order() {
        let (sink, mut receiver) = BroadcastSink::channel(4);
        for id in 1..=3 {
            sink.deliver(receipt(id)).await.unwrap();
        }
        drop(sink);

        let mut seen = Vec::new();
        while let Some(receipt) = receiver.recv().await {
            seen.push(receipt.ticket);
        }
        assert_eq!(seen, vec![Ticket(1), Ticket(2), Ticket(3)]);
    }

    #[tokio::test]
    async fn test_broadcast_without_listener_is_an_error() {
        let (sink, receiver) = BroadcastSink::channel(4);
        drop(receiver);
        let result = sink.deliver(receipt(7)).await;
        assert_eq!(result, Err(StoreError::ReplyDropped(Ticket(7))));
    }

    #[tokio::test]
    async fn test_direct_matches_receipts_to_tickets() {
        let sink = DirectSink::new();
        let first = sink.register(Ticket(1));
        let second = sink.register(Ticket(2));

        // Delivery order is the reverse of registration order.
        sink.deliver(receipt(2)).await.unwrap();
        sink.deliver(receipt(1)).await.unwrap();

        assert_eq!(first.await.unwrap().ticket, Ticket(1));
        assert_eq!(second.await.unwrap().ticket, Ticket(2));
    }

    #[tokio::test]
    async fn test_direct_rejects_unregistered_ticket() {
        let sink = DirectSink::new();
        let result = sink.deliver(receipt(9)).await;
        assert_eq!(result, Err(StoreError::ReplyDropped(Ticket(9))));
    }

    #[tokio::test]
    async fn test_release_pending_wakes_abandoned_listeners() {
        let sink = DirectSink::new();
        let abandoned = sink.register(Ticket(3));
        assert_eq!(sink.release_pending(), 1);
        assert!(abandoned.await.is_err());
        assert_eq!(sink.release_pending(), 0);
    }
}
