//! The limit order book.
//!
//! ## Architecture
//!
//! - **Slab-based storage**: resting orders live in an arena with stable
//!   keys, so a cancellation or partial fill can reach any order in O(1)
//!   without invalidating its neighbours
//! - **Price levels**: orders grouped by price in a `BTreeMap` per side
//! - **Price-time priority**: FIFO ordering within each price level
//!
//! ## Components
//!
//! - [`OrderNode`]: wrapper around `Order` with linked-list pointers
//! - [`PriceLevel`]: FIFO queue metadata plus the per-price aggregate volume
//! - [`OrderBook`]: the book itself - submit, cancel, queries
//!
//! ## Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Submit (resting) | O(log n) |
//! | Cancel by (client, order_id) | O(1)* |
//! | Best bid/ask | O(log n) |
//! | Volume at price | O(log n) |
//!
//! *Plus O(log n) when the price level empties and is dropped.

pub mod book;
pub mod level;
pub mod node;
mod side;

pub use book::OrderBook;
pub use level::PriceLevel;
pub use node::OrderNode;
