//! Store-level errors.
//!
//! Everything that can go wrong while a request travels from a buyer to
//! the fulfillment worker and back is collapsed into [`StoreError`], so
//! callers handle one error type end to end.

use thiserror::Error;

use crate::model::Ticket;

/// Errors produced by the storefront runtime.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The request queue was closed before the submission could be enqueued.
    #[error("store is closed, request was not accepted")]
    QueueClosed,

    /// A receipt was produced but nobody was waiting for it.
    #[error("receipt for {0} has no listener")]
    ReplyDropped(Ticket),

    /// A buyer task panicked or was cancelled before reporting back.
    #[error("buyer task failed: {0}")]
    BuyerFailed(String),

    /// The fulfillment worker task panicked or was cancelled.
    #[error("fulfillment worker task failed: {0}")]
    WorkerFailed(String),

    /// The observer task panicked or was cancelled.
    #[error("observer task failed: {0}")]
    ObserverFailed(String),
}
