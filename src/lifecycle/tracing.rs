//! # Observability & Tracing
//!
//! Structured logging for the whole storefront, built on the `tracing`
//! crate.
//!
//! ## Configuration
//!
//! [`setup_tracing`] installs a compact subscriber that hides module
//! paths (`with_target(false)`); log lines carry their context as
//! structured fields instead. Levels come from `RUST_LOG`:
//!
//! ```bash
//! # Lifecycle events only
//! RUST_LOG=info cargo run
//!
//! # Every submission and stock movement
//! RUST_LOG=debug cargo run
//! ```
//!
//! Without `RUST_LOG` set, the demo prints nothing but the receipts
//! themselves, which go to stdout and are not log lines.
//!
//! ## What Gets Traced
//!
//! - **Lifecycle**: store opened, queue closed, worker drained, store
//!   closed with the final receipt count
//! - **Buyers**: each buyer entering with ticket, product and quantity
//! - **Fulfillment**: each submission picked up, each stock movement
//! - **Trouble**: turned-away buyers, undeliverable receipts, reply
//!   channels released at shutdown
//!
//! ## Trace Example
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Store opened delivery=Broadcast queue_capacity=20
//! INFO Buyer entering the store ticket=ticket_1 buyer=Ali product=Apple quantity=2
//! INFO Fulfillment worker started state=Running
//! INFO Closing the store
//! INFO Queue closed, fulfilling buffered submissions state=Draining
//! INFO Fulfillment worker drained state=Stopped
//! INFO Store closed receipts_rendered=7
//! ```
//!
//! **With `RUST_LOG=debug`**, the submission flow fills in between:
//!
//! ```text
//! DEBUG submit{ticket=ticket_1 buyer=Ali product=Apple}: Submitting purchase request quantity=2
//! DEBUG Fulfilling submission ticket=ticket_1 buyer=Ali product=Apple quantity=2
//! DEBUG Stock taken product=Apple sold=2 remaining=4
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Context lives in structured fields, not module paths
        .compact()
        .init();
}
