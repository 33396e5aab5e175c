//! Order node for slab-based storage.
//!
//! ## Design
//!
//! `OrderNode` wraps an [`Order`] with doubly-linked list pointers so it can
//! be removed from the middle of a price level's FIFO queue in O(1) without
//! disturbing its neighbours. Cancellation and partial fills rely on this:
//! the lookup table holds the slab key, and the key stays valid no matter
//! which other orders come and go.
//!
//! The pointers are slab keys (`usize`), not references:
//!
//! - `next`: the next (newer) order at the same price level
//! - `prev`: the previous (older) order at the same price level

use crate::types::{Order, OrderKey, Price, Volume};

/// A resting order as stored in the slab arena.
///
/// Contains the order data plus linked-list pointers for the price level
/// queue.
#[derive(Debug, Clone)]
pub struct OrderNode {
    /// The actual order data
    pub order: Order,

    /// Next order in the price level queue (slab key)
    /// None if this is the tail (newest order)
    pub next: Option<usize>,

    /// Previous order in the price level queue (slab key)
    /// None if this is the head (oldest order)
    pub prev: Option<usize>,
}

impl OrderNode {
    /// Create a new order node (not yet linked)
    #[inline]
    pub fn new(order: Order) -> Self {
        Self {
            order,
            next: None,
            prev: None,
        }
    }

    /// Check if this node is unlinked (not part of any price level)
    #[inline]
    pub fn is_unlinked(&self) -> bool {
        self.next.is_none() && self.prev.is_none()
    }

    /// The `(client, order_id)` pair identifying this order
    #[inline]
    pub fn key(&self) -> OrderKey {
        self.order.key()
    }

    /// The order's limit price
    #[inline]
    pub fn price(&self) -> Price {
        self.order.price
    }

    /// The order's remaining volume
    #[inline]
    pub fn volume(&self) -> Volume {
        self.order.volume
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
