//! Price level management for orders at the same price.
//!
//! ## Design
//!
//! A `PriceLevel` represents all resting orders at a single price on one
//! side. Orders form a doubly-linked FIFO queue (price-time priority):
//!
//! ```text
//! head (oldest) <-> order2 <-> order3 <-> tail (newest)
//! ```
//!
//! - New orders are appended at the tail
//! - Matching consumes orders from the head
//! - Any order can be removed in O(1) using its slab key
//!
//! The actual order data lives in the slab; this struct only holds the
//! queue metadata and the aggregate volume. Because empty levels are
//! removed from the book immediately, `total_volume` is always the
//! non-zero per-price aggregate the queries report.

use slab::Slab;

use crate::book::OrderNode;
use crate::types::{Price, Volume};

/// A price level containing orders at a single price.
#[derive(Debug, Clone)]
pub struct PriceLevel {
    /// Price for this level (ticks)
    pub price: Price,

    /// Sum of the remaining volumes of all orders at this level.
    /// Updated when orders are added, removed or partially filled.
    pub total_volume: Volume,

    /// Head of the order queue (oldest order, slab key).
    /// This is the first order to be matched.
    pub head: Option<usize>,

    /// Tail of the order queue (newest order, slab key).
    /// New orders are appended here.
    pub tail: Option<usize>,

    /// Number of orders at this price level
    pub order_count: usize,
}

impl PriceLevel {
    /// Create a new empty price level
    pub fn new(price: Price) -> Self {
        Self {
            price,
            total_volume: 0,
            head: None,
            tail: None,
            order_count: 0,
        }
    }

    /// Check if the price level is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order_count == 0
    }

    /// Add an order to the tail of the queue.
    ///
    /// This maintains FIFO ordering - oldest orders are matched first.
    ///
    /// # Panics
    ///
    /// Panics if the key doesn't exist in the slab.
    pub fn push_back(&mut self, key: usize, orders: &mut Slab<OrderNode>) {
        let node = orders.get_mut(key).expect("invalid slab key");
        let volume = node.volume();

        // Update linked list pointers
        node.prev = self.tail;
        node.next = None;

        if let Some(tail_key) = self.tail {
            let tail_node = orders.get_mut(tail_key).expect("invalid tail key");
            tail_node.next = Some(key);
        } else {
            // Empty list - this is also the head
            self.head = Some(key);
        }

        self.tail = Some(key);
        self.order_count += 1;
        self.total_volume += volume;
    }

    /// Remove an order from the queue by slab key.
    ///
    /// The relative order of the surviving entries is untouched.
    ///
    /// # Returns
    ///
    /// The remaining volume of the removed order.
    pub fn remove(&mut self, key: usize, orders: &mut Slab<OrderNode>) -> Volume {
        let node = orders.get(key).expect("invalid slab key");
        let volume = node.volume();
        let prev_key = node.prev;
        let next_key = node.next;

        if let Some(prev) = prev_key {
            let prev_node = orders.get_mut(prev).expect("invalid prev key");
            prev_node.next = next_key;
        } else {
            // This was the head
            self.head = next_key;
        }

        if let Some(next) = next_key {
            let next_node = orders.get_mut(next).expect("invalid next key");
            next_node.prev = prev_key;
        } else {
            // This was the tail
            self.tail = prev_key;
        }

        // Clear the removed node's pointers
        let node = orders.get_mut(key).expect("invalid slab key");
        node.prev = None;
        node.next = None;

        self.order_count -= 1;
        self.total_volume -= volume;

        volume
    }

    /// Get the head order's slab key (oldest order).
    ///
    /// This is the first order to be matched at this price level.
    #[inline]
    pub fn peek_head(&self) -> Option<usize> {
        self.head
    }

    /// Update the aggregate volume after a partial fill of one order
    pub fn reduce_volume(&mut self, traded: Volume) {
        debug_assert!(traded <= self.total_volume);
        self.total_volume -= traded;
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Order, Side};

    fn insert_node(orders: &mut Slab<OrderNode>, order_id: u64, volume: Volume) -> usize {
        let order = Order::new(1, "ABC", Side::Buy, 150, volume, order_id);
        orders.insert(OrderNode::new(order))
    }

    #[test]
    fn test_price_level_new() {
        let level = PriceLevel::new(150);

        assert_eq!(level.price, 150);
        assert_eq!(level.total_volume, 0);
        assert!(level.head.is_none());
        assert!(level.tail.is_none());
        assert_eq!(level.order_count, 0);
        assert!(level.is_empty());
    }

    #[test]
    fn test_price_level_push_single() {
        let mut orders = Slab::new();
        let mut level = PriceLevel::new(150);

        let key = insert_node(&mut orders, 1, 100);
        level.push_back(key, &mut orders);

        assert_eq!(level.order_count, 1);
        assert_eq!(level.total_volume, 100);
        assert_eq!(level.head, Some(key));
        assert_eq!(level.tail, Some(key));
        assert!(!level.is_empty());

        // Node should have no links (it's the only one)
        let node = orders.get(key).unwrap();
        assert!(node.prev.is_none());
        assert!(node.next.is_none());
    }

    #[test]
    fn test_price_level_push_multiple() {
        let mut orders = Slab::new();
        let mut level = PriceLevel::new(150);

        let key1 = insert_node(&mut orders, 1, 100);
        let key2 = insert_node(&mut orders, 2, 200);
        let key3 = insert_node(&mut orders, 3, 300);

        level.push_back(key1, &mut orders);
        level.push_back(key2, &mut orders);
        level.push_back(key3, &mut orders);

        assert_eq!(level.order_count, 3);
        assert_eq!(level.total_volume, 600);
        assert_eq!(level.head, Some(key1));
        assert_eq!(level.tail, Some(key3));

        // Verify linked list structure: key1 <-> key2 <-> key3
        let node1 = orders.get(key1).unwrap();
        assert!(node1.prev.is_none());
        assert_eq!(node1.next, Some(key2));

        let node2 = orders.get(key2).unwrap();
        assert_eq!(node2.prev, Some(key1));
        assert_eq!(node2.next, Some(key3));

        let node3 = orders.get(key3).unwrap();
        assert_eq!(node3.prev, Some(key2));
        assert!(node3.next.is_none());
    }

    #[test]
    fn test_price_level_remove_middle() {
        let mut orders = Slab::new();
        let mut level = PriceLevel::new(150);

        let key1 = insert_node(&mut orders, 1, 100);
        let key2 = insert_node(&mut orders, 2, 200);
        let key3 = insert_node(&mut orders, 3, 300);

        level.push_back(key1, &mut orders);
        level.push_back(key2, &mut orders);
        level.push_back(key3, &mut orders);

        let removed = level.remove(key2, &mut orders);

        assert_eq!(removed, 200);
        assert_eq!(level.order_count, 2);
        assert_eq!(level.total_volume, 400);
        assert_eq!(level.head, Some(key1));
        assert_eq!(level.tail, Some(key3));

        // Verify new linked list: key1 <-> key3
        let node1 = orders.get(key1).unwrap();
        assert!(node1.prev.is_none());
        assert_eq!(node1.next, Some(key3));

        let node3 = orders.get(key3).unwrap();
        assert_eq!(node3.prev, Some(key1));
        assert!(node3.next.is_none());
    }

    #[test]
    fn test_price_level_remove_head() {
        let mut orders = Slab::new();
        let mut level = PriceLevel::new(150);

        let key1 = insert_node(&mut orders, 1, 100);
        let key2 = insert_node(&mut orders, 2, 200);

        level.push_back(key1, &mut orders);
        level.push_back(key2, &mut orders);

        level.remove(key1, &mut orders);

        assert_eq!(level.order_count, 1);
        assert_eq!(level.head, Some(key2));
        assert_eq!(level.tail, Some(key2));

        // key2 should now be unlinked (only element)
        let node2 = orders.get(key2).unwrap();
        assert!(node2.prev.is_none());
        assert!(node2.next.is_none());
    }

    #[test]
    fn test_price_level_remove_tail() {
        let mut orders = Slab::new();
        let mut level = PriceLevel::new(150);

        let key1 = insert_node(&mut orders, 1, 100);
        let key2 = insert_node(&mut orders, 2, 200);

        level.push_back(key1, &mut orders);
        level.push_back(key2, &mut orders);

        level.remove(key2, &mut orders);

        assert_eq!(level.order_count, 1);
        assert_eq!(level.head, Some(key1));
        assert_eq!(level.tail, Some(key1));
    }

    #[test]
    fn test_price_level_remove_only() {
        let mut orders = Slab::new();
        let mut level = PriceLevel::new(150);

        let key = insert_node(&mut orders, 1, 100);
        level.push_back(key, &mut orders);

        level.remove(key, &mut orders);

        assert!(level.is_empty());
        assert_eq!(level.order_count, 0);
        assert_eq!(level.total_volume, 0);
        assert!(level.head.is_none());
        assert!(level.tail.is_none());
    }

    #[test]
    fn test_price_level_reduce_volume() {
        let mut level = PriceLevel::new(150);
        level.total_volume = 1_000;

        level.reduce_volume(300);
        assert_eq!(level.total_volume, 700);
    }

    #[test]
    fn test_price_level_peek_head() {
        let mut orders = Slab::new();
        let mut level = PriceLevel::new(150);

        assert!(level.peek_head().is_none());

        let key = insert_node(&mut orders, 1, 100);
        level.push_back(key, &mut orders);

        assert_eq!(level.peek_head(), Some(key));
    }
}
