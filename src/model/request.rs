//! Purchase requests and the tickets that identify them in flight.

use serde::{Deserialize, Serialize};

/// Unique identifier stamped on a request when the store accepts it.
///
/// Tickets are issued in submission order, so sorting receipts by ticket
/// reconstructs the order in which the store accepted the requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Ticket(pub u64);

impl From<u64> for Ticket {
    fn from(id: u64) -> Self {
        Ticket(id)
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ticket_{}", self.0)
    }
}

/// What a buyer wants: a named customer asking for some quantity of a
/// product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseRequest {
    pub buyer: String,
    pub product: String,
    pub quantity: u32,
}

impl PurchaseRequest {
    pub fn new(buyer: impl Into<String>, product: impl Into<String>, quantity: u32) -> Self {
        Self {
            buyer: buyer.into(),
            product: product.into(),
            quantity,
        }
    }
}

/// A ticketed request, ready to travel down the fulfillment queue.
#[derive(Debug, Clone)]
pub struct Submission {
    pub ticket: Ticket,
    pub request: PurchaseRequest,
}

impl Submission {
    pub fn new(ticket: Ticket, request: PurchaseRequest) -> Self {
        Self { ticket, request }
    }
}
