//! Inventory domain module: the stock record of one product at one location.
//!
//! This crate contains business rules for stock levels, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod error;
pub mod snapshot;
pub mod stock;

pub use error::{StockError, StockErrorKind, StockResult};
pub use snapshot::StockSnapshot;
pub use stock::{Location, ProductId, StockRecord};
