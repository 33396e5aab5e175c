//! The order book: submission, matching, cancellation and liquidity queries.
//!
//! ## Architecture
//!
//! A hybrid data structure, one instance per instrument:
//!
//! - **Slab**: arena storage for resting orders - O(1) insert/remove with
//!   stable keys
//! - **BTreeMap per side**: non-empty price levels sorted by price, best
//!   bid/ask at the ends
//! - **HashMap**: `(client, order_id)` to slab key, for O(1) cancel and
//!   partial-fill mutation
//!
//! ## Matching
//!
//! Incoming orders match against the opposite side under price-time
//! priority: best price first, oldest order first within a price. Trades
//! execute at the passive order's limit. Whatever volume survives the
//! matching loop rests at the incoming limit.
//!
//! Single-threaded by design: every operation runs to completion on the
//! caller's thread, and the multi-step index updates are never observable
//! half-done. Callers needing concurrent access must serialize externally.
//!
//! ## Example
//!
//! ```
//! use matchbook::{Order, OrderBook, Side};
//!
//! let mut book = OrderBook::new();
//!
//! // Alice bids 100 at 150; nothing to match, the order rests
//! let trades = book.submit(Order::new(1, "ABC", Side::Buy, 150, 100, 0)).unwrap();
//! assert!(trades.is_empty());
//! assert_eq!(book.get_volume_at_price(Side::Buy, 150), 100);
//!
//! // Bob sells 40 at 140; crosses, fills at Alice's price
//! let trades = book.submit(Order::new(2, "ABC", Side::Sell, 140, 40, 0)).unwrap();
//! assert_eq!(trades.len(), 1);
//! assert_eq!((trades[0].price, trades[0].volume), (150, 40));
//! ```

use std::collections::{BTreeSet, HashMap};

use sha2::{Digest, Sha256};
use slab::Slab;
use tracing::{debug, trace};

use crate::book::side::BookSide;
use crate::book::OrderNode;
use crate::error::BookError;
use crate::types::{Order, OrderKey, Price, Side, Trade, Volume};

/// A single-instrument limit order book with price-time priority matching.
#[derive(Debug, Clone)]
pub struct OrderBook {
    /// Arena storage for all resting orders, both sides
    orders: Slab<OrderNode>,

    /// Bid price levels
    bids: BookSide,

    /// Ask price levels
    asks: BookSide,

    /// `(client, order_id)` to slab key, for O(1) cancel
    lookup: HashMap<OrderKey, usize>,
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderBook {
    /// Create a new empty order book
    pub fn new() -> Self {
        Self {
            orders: Slab::new(),
            bids: BookSide::new(Side::Buy),
            asks: BookSide::new(Side::Sell),
            lookup: HashMap::new(),
        }
    }

    /// Create an order book with pre-allocated capacity for resting orders
    pub fn with_capacity(order_capacity: usize) -> Self {
        Self {
            orders: Slab::with_capacity(order_capacity),
            bids: BookSide::new(Side::Buy),
            asks: BookSide::new(Side::Sell),
            lookup: HashMap::with_capacity(order_capacity),
        }
    }

    // ========================================================================
    // Submission & matching
    // ========================================================================

    /// Submit an order, matching it against the opposite side.
    ///
    /// Crossing liquidity is consumed best price first, and within a price
    /// level oldest order first. Each match emits one [`Trade`] at the
    /// passive order's limit price; trades are returned in emission order.
    /// Any volume left after the loop rests at the incoming limit, at the
    /// tail of that price's queue.
    ///
    /// An empty trade list is a perfectly ordinary result: the order simply
    /// rested without matching.
    ///
    /// # Errors
    ///
    /// Rejected without touching the book when the volume is not strictly
    /// positive, or when `(client, order_id)` already identifies a resting
    /// order.
    ///
    /// Self-trading is not prevented: an order may match a resting order
    /// from the same client.
    pub fn submit(&mut self, incoming: Order) -> Result<Vec<Trade>, BookError> {
        if incoming.volume <= 0 {
            return Err(BookError::NonPositiveVolume(incoming.volume));
        }
        if self.lookup.contains_key(&incoming.key()) {
            return Err(BookError::DuplicateOrder {
                client: incoming.client,
                order_id: incoming.order_id,
            });
        }

        trace!(
            client = incoming.client,
            order_id = incoming.order_id,
            side = ?incoming.side,
            price = incoming.price,
            volume = incoming.volume,
            "order accepted"
        );

        let mut trades = Vec::new();
        let mut remaining = incoming.volume;

        // Three things can end the loop and any of them can become true
        // mid-sweep: the opposite side drains, the touch stops crossing,
        // or the incoming order fills.
        while remaining > 0 {
            let (opposite, orders) = match incoming.side {
                Side::Buy => (&mut self.asks, &mut self.orders),
                Side::Sell => (&mut self.bids, &mut self.orders),
            };
            let Some(best) = opposite.crossing_price(incoming.price) else {
                break;
            };

            let level = opposite
                .levels
                .get_mut(&best)
                .expect("crossing price has a level");
            let head = level.peek_head().expect("non-empty level has a head");

            let passive = orders.get(head).expect("head key is live");
            let passive_client = passive.order.client;
            let passive_volume = passive.volume();
            let passive_key = passive.key();

            let traded = remaining.min(passive_volume);
            remaining -= traded;

            trades.push(match incoming.side {
                Side::Buy => Trade::new(passive_client, incoming.client, best, traded),
                Side::Sell => Trade::new(incoming.client, passive_client, best, traded),
            });
            trace!(
                price = best,
                volume = traded,
                passive_client,
                "trade"
            );

            if traded == passive_volume {
                // Remove the filled passive order exactly as cancellation
                // would: unlink, drop the level if empty, drop the lookup
                // entry, free the slot.
                opposite.unlink(head, orders);
                orders.remove(head);
                self.lookup.remove(&passive_key);
            } else {
                // Partial fill: the passive order keeps its queue position
                orders
                    .get_mut(head)
                    .expect("head key is live")
                    .order
                    .volume -= traded;
                level.reduce_volume(traded);
            }
        }

        if remaining > 0 {
            let mut resting = incoming;
            resting.volume = remaining;
            let key = resting.key();
            let side = resting.side;
            debug!(
                client = key.0,
                order_id = key.1,
                price = resting.price,
                volume = remaining,
                "order resting"
            );

            let slot = self.orders.insert(OrderNode::new(resting));
            let (own, orders) = match side {
                Side::Buy => (&mut self.bids, &mut self.orders),
                Side::Sell => (&mut self.asks, &mut self.orders),
            };
            own.append(slot, orders);
            self.lookup.insert(key, slot);
        }

        Ok(trades)
    }

    // ========================================================================
    // Cancellation
    // ========================================================================

    /// Cancel the resting order identified by `(client, order_id)` on the
    /// given side, returning it.
    ///
    /// The order's level queue is shortened without disturbing the relative
    /// order of the surviving entries; an emptied level is removed from the
    /// book entirely.
    ///
    /// # Panics
    ///
    /// Cancelling an order that is not resting, or naming the wrong side,
    /// is a caller bug and panics. There is no transient failure mode in a
    /// purely in-memory, single-threaded structure to recover from.
    pub fn cancel(&mut self, side: Side, key: OrderKey) -> Order {
        let slot = *self
            .lookup
            .get(&key)
            .expect("cancel: no resting order with that (client, order_id)");
        let node = self.orders.get(slot).expect("lookup points at a live slot");
        assert_eq!(
            node.order.side, side,
            "cancel: side does not match the resting order"
        );

        let (own, orders) = match side {
            Side::Buy => (&mut self.bids, &mut self.orders),
            Side::Sell => (&mut self.asks, &mut self.orders),
        };
        own.unlink(slot, orders);
        self.lookup.remove(&key);
        let order = self.orders.remove(slot).order;

        debug!(
            client = order.client,
            order_id = order.order_id,
            price = order.price,
            volume = order.volume,
            "order cancelled"
        );
        order
    }

    // ========================================================================
    // Liquidity queries
    // ========================================================================

    /// Aggregate resting volume at exactly `price` on `side`.
    ///
    /// Zero is a valid, common answer for a price with no liquidity.
    pub fn get_volume_at_price(&self, side: Side, price: Price) -> Volume {
        self.side_levels(side)
            .levels
            .get(&price)
            .map_or(0, |level| level.total_volume)
    }

    /// All prices on `side` currently holding non-zero resting volume.
    pub fn get_prices(&self, side: Side) -> BTreeSet<Price> {
        self.side_levels(side).levels.keys().copied().collect()
    }

    /// The best bid price (highest resting buy), if any
    #[inline]
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.best_price()
    }

    /// The best ask price (lowest resting sell), if any
    #[inline]
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.best_price()
    }

    /// The spread (best ask minus best bid), if both sides have liquidity
    pub fn spread(&self) -> Option<Price> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }

    /// Number of resting orders on the book, both sides
    #[inline]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Check if the book holds no resting orders
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Check if `(client, order_id)` identifies a resting order
    #[inline]
    pub fn contains_order(&self, key: OrderKey) -> bool {
        self.lookup.contains_key(&key)
    }

    /// The resting orders at exactly `price` on `side`, oldest first.
    ///
    /// Empty for a price with no liquidity.
    pub fn orders_at(&self, side: Side, price: Price) -> impl Iterator<Item = &Order> + '_ {
        let mut next = self
            .side_levels(side)
            .levels
            .get(&price)
            .and_then(|level| level.peek_head());
        std::iter::from_fn(move || {
            let key = next?;
            let node = &self.orders[key];
            next = node.next;
            Some(&node.order)
        })
    }

    // ========================================================================
    // State digest
    // ========================================================================

    /// SHA-256 digest of the full book state.
    ///
    /// Walks both sides in ascending price order and each level in FIFO
    /// order, so two books that went through the same operation sequence
    /// produce identical digests. Used to verify determinism.
    pub fn state_digest(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        for (tag, side) in [(0u8, &self.bids), (1u8, &self.asks)] {
            for (price, level) in &side.levels {
                hasher.update([tag]);
                hasher.update(price.to_le_bytes());
                hasher.update(level.total_volume.to_le_bytes());
                let mut next = level.peek_head();
                while let Some(key) = next {
                    let node = &self.orders[key];
                    hasher.update(node.order.client.to_le_bytes());
                    hasher.update(node.order.order_id.to_le_bytes());
                    hasher.update(node.order.volume.to_le_bytes());
                    next = node.next;
                }
            }
        }
        hasher.finalize().into()
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn side_levels(&self, side: Side) -> &BookSide {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
