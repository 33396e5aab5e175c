//! Order side and the limit order itself.
//!
//! ## Volume semantics
//!
//! `Order::volume` is the *live remaining* volume. Partial fills decrement
//! it in place while the order keeps its position in the price level's FIFO
//! queue; it never reaches zero while the order rests on the book.

use crate::types::{ClientId, OrderId, OrderKey, Price, Volume};

// ============================================================================
// Side enum
// ============================================================================

/// Order side: Buy or Sell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Buy order (bid) - wants to purchase the instrument
    Buy,
    /// Sell order (ask) - wants to sell the instrument
    Sell,
}

impl Side {
    /// Returns the opposite side
    ///
    /// # Example
    ///
    /// ```
    /// use matchbook::Side;
    ///
    /// assert_eq!(Side::Buy.opposite(), Side::Sell);
    /// assert_eq!(Side::Sell.opposite(), Side::Buy);
    /// ```
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

// ============================================================================
// Order struct
// ============================================================================

/// A limit order: an intent to trade up to `volume` lots at `price` or better.
///
/// ## Identity
///
/// Orders are identified by `(client, order_id)`; the id is unique per
/// client only. The book rejects a submission whose key already identifies
/// a resting order.
///
/// ## Example
///
/// ```
/// use matchbook::{Order, Side};
///
/// // Alice (client 1) buys 100 lots at 150
/// let order = Order::new(1, "ABC", Side::Buy, 150, 100, 7);
/// assert_eq!(order.key(), (1, 7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Identity of the submitting party
    pub client: ClientId,

    /// Instrument identifier. One book serves one instrument, so this is
    /// carried but never consulted by the matching logic.
    pub product: String,

    /// Buy or Sell
    pub side: Side,

    /// Limit price in ticks
    pub price: Price,

    /// Remaining volume in lots (strictly positive while resting)
    pub volume: Volume,

    /// Order identifier, unique per client
    pub order_id: OrderId,
}

impl Order {
    /// Create a new limit order
    ///
    /// # Arguments
    ///
    /// * `client` - Identity of the submitting party
    /// * `product` - Instrument identifier
    /// * `side` - Buy or Sell
    /// * `price` - Limit price in ticks
    /// * `volume` - Quantity in lots
    /// * `order_id` - Identifier unique per client
    pub fn new(
        client: ClientId,
        product: impl Into<String>,
        side: Side,
        price: Price,
        volume: Volume,
        order_id: OrderId,
    ) -> Self {
        Self {
            client,
            product: product.into(),
            side,
            price,
            volume,
            order_id,
        }
    }

    /// The `(client, order_id)` pair identifying this order on the book
    #[inline]
    pub fn key(&self) -> OrderKey {
        (self.client, self.order_id)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
