#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Storefront
//!
//! > **A Recipe for Single-Writer Inventory in Rust.**
//!
//! This crate demonstrates a pattern for serializing access to shared
//! state without locks. Concurrent buyer tasks funnel purchase requests
//! through a bounded queue into a **single fulfillment worker** that
//! owns the inventory outright. One owner, one queue: every
//! check-and-take is atomic by construction.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Why a Single Writer?
//!
//! A `Mutex<HashMap>` would let any task decrement stock, and any two
//! tasks could interleave a check with a take. Routing every request
//! through one worker task removes the race instead of guarding it:
//! the worker pulls submissions off the queue one at a time, and the
//! inventory is simply a field it owns.
//!
//! This buys:
//! - **Atomicity for free**: no lock is ever held, yet stock can never
//!   be oversold or go negative.
//! - **A total order**: requests are fulfilled strictly in queue order,
//!   so every run has a coherent story.
//! - **Natural backpressure**: the queue is bounded, so a burst of
//!   buyers waits instead of piling up unboundedly.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Shutdown Is Channel Closure
//! Nobody sends a "stop" message. When the last [`StoreClient`] clone
//! drops, the queue closes; the worker drains what is buffered and
//! returns the final inventory through its join handle. That returned
//! inventory doubles as the acknowledgment that draining completed.
//!
//! ### 2. Two Reply Shapes, One Worker
//! The worker hands receipts to a [`ResponseSink`] and never learns who
//! reads them. [`BroadcastSink`] pushes everything down one shared
//! stream; [`DirectSink`] resolves a dedicated one-shot channel per
//! ticket. Swapping shapes is a [`StoreConfig`] field, not a rewrite.
//!
//! ### 3. Submitted Is Not Fulfilled
//! A buyer's job ends when its request is in the queue. Joining the
//! buyers proves every request was *submitted*; joining the worker
//! proves every submission was *fulfilled*. The shutdown sequence
//! keeps those two barriers separate and in that order.
//!
//! ### 4. Observability
//! Structured logging with `tracing` throughout. Receipts print to
//! stdout; everything about how they got there is a log field. See the
//! [`lifecycle::tracing`] module for details.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Shelf ([`inventory`], [`model`])
//! The data the whole system exists to protect.
//! - **Role**: Stock levels plus the request, ticket and receipt types
//!   that flow around them.
//! - **Key items**: [`Inventory::decide`], [`Outcome`], [`Receipt`].
//!
//! ### 2. The Pipeline ([`buyer`], [`worker`], [`response`], [`observer`])
//! One task per concern, connected by channels.
//! - **Role**: Buyers submit, the worker decides, a sink carries each
//!   receipt back, the observer prints it.
//! - **Key items**: [`FulfillmentWorker`], [`StoreClient`],
//!   [`ResponseSink`].
//!
//! ### 3. The Orchestrator ([`lifecycle`])
//! Tasks don't wire themselves together.
//! - **Role**: Spins up the pipeline, admits buyers, and tears it all
//!   down in an order that cannot lose a receipt.
//! - **Key items**: [`StoreSystem`], [`StoreSystem::shutdown`],
//!   [`StoreConfig`].
//!
//! ## 🚀 Quick Start
//!
//! ### Running the Demo
//!
//! ```bash
//! # Receipts only
//! cargo run
//!
//! # With lifecycle logs
//! RUST_LOG=info cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod buyer;
pub mod error;
pub mod inventory;
pub mod lifecycle;
pub mod model;
pub mod observer;
pub mod response;
pub mod worker;

pub use error::StoreError;
pub use inventory::Inventory;
pub use lifecycle::{setup_tracing, DeliveryMode, StoreConfig, StoreReport, StoreSystem};
pub use model::{Outcome, ProductItem, PurchaseRequest, Receipt, Submission, Ticket};
pub use response::{BroadcastSink, DirectSink, ResponseSink};
pub use worker::{FulfillmentWorker, StoreClient, WorkerState};
