//! Tunables for a store run.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Which reply shape the store wires between worker and observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DeliveryMode {
    /// One shared receipt stream, rendered in fulfillment order.
    #[default]
    Broadcast,
    /// A dedicated one-shot reply channel per ticket, rendered in
    /// ticket order.
    Direct,
}

/// Everything adjustable about one store run.
///
/// The defaults mirror the demo storefront: room for 20 queued
/// submissions, 20 buffered receipts, and half a second of simulated
/// work per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Bound of the fulfillment queue. When it is full, submitting
    /// buyers wait instead of dropping requests.
    pub queue_capacity: usize,
    /// Bound of the receipt stream (broadcast) or of the reply handoff
    /// lane (direct).
    pub response_capacity: usize,
    /// Simulated time the worker spends on each submission.
    pub fulfillment_delay: Duration,
    /// Reply shape between worker and observer.
    pub delivery: DeliveryMode,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            queue_capacity: 20,
            response_capacity: 20,
            fulfillment_delay: Duration::from_millis(500),
            delivery: DeliveryMode::Broadcast,
        }
    }
}

impl StoreConfig {
    /// The defaults minus the simulated delay. Suited to tests, where
    /// waiting half a second per request proves nothing.
    pub fn instant() -> Self {
        Self {
            fulfillment_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}
