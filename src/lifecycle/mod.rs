//! # Store Lifecycle
//!
//! Everything about starting and stopping a store as one unit: the
//! [`StoreSystem`] orchestrator that wires buyers, worker and observer
//! together, the [`StoreConfig`] knobs it runs under, and the tracing
//! setup for watching it all happen.
//!
//! The teardown contract lives in [`StoreSystem::shutdown`]: join the
//! buyers, close the queue by dropping the last client, take the final
//! inventory from the worker's join, then let the observer finish.

pub mod config;
pub mod store_system;
pub mod tracing;

pub use config::*;
pub use store_system::*;
pub use self::tracing::setup_tracing;
