//! Fulfillment outcomes and the receipts that carry them back.

use crate::model::{PurchaseRequest, Ticket};

/// The verdict the fulfillment worker reaches for a single request.
///
/// Quantities are captured at decision time, so an outcome stays
/// meaningful even after later requests have changed the shelf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The full quantity was sold; `remaining` is the stock left after
    /// this sale.
    Bought { remaining: u32 },
    /// Some stock exists but less than the buyer asked for. Nothing is
    /// sold; `available` is what was on the shelf.
    InsufficientStock { available: u32 },
    /// The product is known but its stock is exactly zero.
    OutOfStock,
    /// The product was never stocked at all.
    UnknownProduct,
}

/// The worker's answer to one submission: the original request echoed
/// back together with its outcome.
#[derive(Debug, Clone)]
pub struct Receipt {
    pub ticket: Ticket,
    pub request: PurchaseRequest,
    pub outcome: Outcome,
}

impl Receipt {
    pub fn new(ticket: Ticket, request: PurchaseRequest, outcome: Outcome) -> Self {
        Self {
            ticket,
            request,
            outcome,
        }
    }
}

impl std::fmt::Display for Receipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let PurchaseRequest {
            buyer,
            product,
            quantity,
        } = &self.request;
        match self.outcome {
            Outcome::Bought { remaining } => {
                write!(f, "{buyer} bought {quantity} of {product}. Remaining: {remaining}")
            }
            Outcome::InsufficientStock { available } => {
                write!(f, "{buyer}: Not enough stock for {product}. Available: {available}")
            }
            Outcome::OutOfStock => write!(f, "{buyer}: {product} is out of stock!"),
            Outcome::UnknownProduct => write!(f, "{buyer}: Product {product} not available"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt(quantity: u32, outcome: Outcome) -> Receipt {
        Receipt::new(
            Ticket(1),
            PurchaseRequest::new("Ali", "Apple", quantity),
            outcome,
        )
    }

    #[test]
    fn test_bought_rendering() {
        let receipt = receipt(2, Outcome::Bought { remaining: 4 });
        assert_eq!(receipt.to_string(), "Ali bought 2 of Apple. Remaining: 4");
    }

    #[test]
    fn test_insufficient_stock_rendering() {
        let receipt = receipt(5, Outcome::InsufficientStock { available: 4 });
        assert_eq!(
            receipt.to_string(),
            "Ali: Not enough stock for Apple. Available: 4"
        );
    }

    #[test]
    fn test_out_of_stock_rendering() {
        let receipt = receipt(1, Outcome::OutOfStock);
        assert_eq!(receipt.to_string(), "Ali: Apple is out of stock!");
    }

    #[test]
    fn test_unknown_product_rendering() {
        let receipt = receipt(1, Outcome::UnknownProduct);
        assert_eq!(receipt.to_string(), "Ali: Product Apple not available");
    }
}
