//! Core data types for the order book.
//!
//! ## Types
//!
//! - [`Order`]: A limit order, resting or incoming
//! - [`Side`]: Buy or Sell
//! - [`Trade`]: An executed match between two orders
//!
//! ## Scalars
//!
//! Prices and volumes are plain signed integers (abstract ticks / lots).
//! An order is identified by the pair `(ClientId, OrderId)`: order ids are
//! unique per client, not globally.

mod order;
mod trade;

// Re-export all types at module level
pub use order::{Order, Side};
pub use trade::Trade;

/// Identity of a submitting party.
pub type ClientId = u64;

/// Order identifier, unique per client.
pub type OrderId = u64;

/// Integer limit price (ticks).
pub type Price = i64;

/// Integer quantity (lots). Strictly positive while resting.
pub type Volume = i64;

/// Uniqueness key for a resting order: `(client, order_id)`.
pub type OrderKey = (ClientId, OrderId);
