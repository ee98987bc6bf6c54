//! Pure data structures (DTOs) flowing between buyers, the fulfillment
//! worker and the observer.

pub mod catalog;
pub mod request;
pub mod receipt;

pub use catalog::*;
pub use request::*;
pub use receipt::*;
