//! # matchbook
//!
//! A single-instrument limit order book with price-time priority matching.
//!
//! ## Architecture
//!
//! - **Types**: core data structures ([`Order`], [`Trade`], [`Side`])
//! - **Book**: the order book - slab-backed price levels, matching,
//!   cancellation, liquidity queries
//!
//! ## Design Principles
//!
//! 1. **Determinism**: the same order sequence always produces the same
//!    trades and the same final book state (verified via state digests)
//! 2. **Price-time priority**: better prices match first; among equal
//!    prices, the earliest-submitted order matches first
//! 3. **Passive pricing**: every trade executes at the resting order's
//!    limit, so price improvement accrues to the aggressive side
//! 4. **Single-threaded**: every operation runs to completion on the
//!    caller's thread; concurrent feeders must serialize externally
//!
//! ## Example
//!
//! ```
//! use matchbook::{Order, OrderBook, Side, Trade};
//!
//! let mut book = OrderBook::new();
//!
//! // Two bids rest at 160, one at 150
//! book.submit(Order::new(1, "ABC", Side::Buy, 150, 100, 0)).unwrap();
//! book.submit(Order::new(2, "ABC", Side::Buy, 160, 100, 0)).unwrap();
//! book.submit(Order::new(3, "ABC", Side::Buy, 160, 100, 0)).unwrap();
//!
//! // A sell for 150 lots at 160 sweeps the 160 level, oldest bid first
//! let trades = book.submit(Order::new(4, "ABC", Side::Sell, 160, 150, 0)).unwrap();
//! assert_eq!(trades, vec![Trade::new(4, 2, 160, 100), Trade::new(4, 3, 160, 50)]);
//! assert_eq!(book.get_volume_at_price(Side::Buy, 160), 50);
//! ```

pub mod book;
pub mod error;
pub mod types;

pub use book::OrderBook;
pub use error::BookError;
pub use types::{ClientId, Order, OrderId, OrderKey, Price, Side, Trade, Volume};
