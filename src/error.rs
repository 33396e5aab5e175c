//! Error type for order submission.
//!
//! Only malformed submissions are recoverable errors; an empty trade list
//! or a zero-volume query answer is an ordinary successful result, and
//! cancelling an order that is not resting is a caller bug that fails fast
//! (see [`OrderBook::cancel`](crate::OrderBook::cancel)).

use thiserror::Error;

use crate::types::{ClientId, OrderId, Volume};

/// Reasons a submission is rejected before touching the book.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    /// Orders must carry strictly positive volume.
    #[error("order volume must be positive, got {0}")]
    NonPositiveVolume(Volume),

    /// The `(client, order_id)` pair already identifies a resting order.
    #[error("client {client} already has resting order {order_id}")]
    DuplicateOrder {
        /// Identity of the submitting party
        client: ClientId,
        /// The order id already in use by that client
        order_id: OrderId,
    },
}
