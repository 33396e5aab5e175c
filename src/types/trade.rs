//! Trade type representing an executed match between two orders.

use crate::types::{ClientId, Price, Volume};

/// A trade records a single match between an aggressive (incoming) order
/// and a passive (resting) order.
///
/// ## Price Discovery
///
/// The trade always executes at the passive order's limit price, so any
/// price improvement accrues to the aggressive side. This is the standard
/// "maker gets their price" rule.
///
/// ## Example
///
/// ```
/// use matchbook::Trade;
///
/// // Dave (client 3) sells to Bob (client 1), 100 lots at 160
/// let trade = Trade::new(3, 1, 160, 100);
/// assert_eq!(trade.volume, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trade {
    /// Client identity of the selling party
    pub seller: ClientId,

    /// Client identity of the buying party
    pub buyer: ClientId,

    /// Execution price: always the passive order's limit
    pub price: Price,

    /// Executed volume, positive
    pub volume: Volume,
}

impl Trade {
    /// Create a new trade
    ///
    /// # Arguments
    ///
    /// * `seller` - Client identity of the selling party
    /// * `buyer` - Client identity of the buying party
    /// * `price` - Execution price (the passive order's limit)
    /// * `volume` - Executed volume
    pub fn new(seller: ClientId, buyer: ClientId, price: Price, volume: Volume) -> Self {
        Self {
            seller,
            buyer,
            price,
            volume,
        }
    }

    /// Notional value of this trade (price * volume)
    pub fn notional(&self) -> i128 {
        (self.price as i128) * (self.volume as i128)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
