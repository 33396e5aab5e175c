//! One side of the book: price levels sorted by price.
//!
//! ## Design
//!
//! The two sides are structurally symmetric but differ in which end of the
//! price range is "best" (bids: maximum, asks: minimum) and in the crossing
//! comparison. Rather than duplicating the matching logic per side, all of
//! that asymmetry is concentrated here, behind [`BookSide::best_price`] and
//! [`BookSide::crossing_price`], so the book runs a single algorithm for
//! both directions.
//!
//! A price has a `BTreeMap` entry **iff** at least one order rests there:
//! the key set is exactly the side's active-price set, and each level's
//! `total_volume` is the per-price aggregate.

use std::collections::BTreeMap;

use slab::Slab;

use crate::book::{OrderNode, PriceLevel};
use crate::types::{Price, Side, Volume};

/// Price levels for one side of the book, keyed ascending by price.
#[derive(Debug, Clone)]
pub(crate) struct BookSide {
    /// Which side these levels belong to
    side: Side,

    /// Non-empty price levels, ascending. For Buy the best price is the
    /// last key, for Sell the first.
    pub(crate) levels: BTreeMap<Price, PriceLevel>,
}

impl BookSide {
    pub(crate) fn new(side: Side) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
        }
    }

    /// The side's best (closest-to-crossing) price, if any liquidity rests.
    pub(crate) fn best_price(&self) -> Option<Price> {
        match self.side {
            Side::Buy => self.levels.keys().next_back().copied(),
            Side::Sell => self.levels.keys().next().copied(),
        }
    }

    /// Best resting price that an incoming order on the *opposite* side
    /// with the given limit would trade against, if any.
    ///
    /// For resting asks an incoming buy crosses when `best <= limit`; for
    /// resting bids an incoming sell crosses when `best >= limit`.
    pub(crate) fn crossing_price(&self, limit: Price) -> Option<Price> {
        let best = self.best_price()?;
        let crossed = match self.side {
            Side::Buy => best >= limit,
            Side::Sell => best <= limit,
        };
        crossed.then_some(best)
    }

    /// Append a freshly inserted node to the tail of its price's level,
    /// creating the level if the price had no resting liquidity.
    pub(crate) fn append(&mut self, key: usize, orders: &mut Slab<OrderNode>) {
        let price = orders.get(key).expect("invalid slab key").price();
        self.levels
            .entry(price)
            .or_insert_with(|| PriceLevel::new(price))
            .push_back(key, orders);
    }

    /// Unlink a resting node from its level, dropping the level entirely if
    /// it became empty. Returns the unlinked volume.
    pub(crate) fn unlink(&mut self, key: usize, orders: &mut Slab<OrderNode>) -> Volume {
        let price = orders.get(key).expect("invalid slab key").price();
        let level = self
            .levels
            .get_mut(&price)
            .expect("resting order has a price level");
        let freed = level.remove(key, orders);
        if level.is_empty() {
            self.levels.remove(&price);
        }
        freed
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
