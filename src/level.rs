//! Level: A FIFO queue of resting orders at a single price point.
//!
//! The queue position of an order is its time priority. A partially
//! filled order stays at the head; only exhausted orders leave the queue.

use std::collections::VecDeque;

use crate::{Order, OrderId, Price, Quantity};

/// A queue of resting orders at a single price level.
///
/// The level tracks total quantity for O(1) depth queries.
#[derive(Clone, Debug)]
pub struct Level {
    /// The price for all orders in this level
    price: Price,
    /// Resting orders, oldest first
    orders: VecDeque<Order>,
    /// Sum of remaining quantities (cached for O(1) access)
    total_quantity: Quantity,
}

impl Level {
    /// Create a new empty level at the given price.
    pub(crate) fn new(price: Price) -> Self {
        Self {
            price,
            orders: VecDeque::new(),
            total_quantity: 0,
        }
    }

    /// Returns the price of this level.
    #[inline]
    pub fn price(&self) -> Price {
        self.price
    }

    /// Returns true if there are no orders at this level.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Returns the number of orders at this level.
    #[inline]
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Returns the total quantity across all orders at this level.
    #[inline]
    pub fn total_quantity(&self) -> Quantity {
        self.total_quantity
    }

    /// Returns the order at the front of the queue (next to fill).
    #[inline]
    pub fn front(&self) -> Option<&Order> {
        self.orders.front()
    }

    /// Append an order to the tail of the queue.
    ///
    /// # Panics
    ///
    /// Panics if the order has zero quantity. Such orders never rest.
    pub(crate) fn push_back(&mut self, order: Order) {
        assert!(order.quantity > 0, "resting order with zero quantity");
        self.total_quantity += order.quantity;
        self.orders.push_back(order);
    }

    /// Fill the head order by `quantity`.
    ///
    /// Returns the head's id and its remaining quantity after the fill.
    /// A head that reaches zero is removed from the queue; otherwise it
    /// keeps its position. Returns `None` if the level is empty.
    ///
    /// # Panics
    ///
    /// Panics if `quantity` exceeds the head's remaining quantity.
    pub(crate) fn fill_front(&mut self, quantity: Quantity) -> Option<(OrderId, Quantity)> {
        let head = self.orders.front_mut()?;
        head.fill(quantity);
        self.total_quantity -= quantity;

        let filled = (head.id, head.quantity);
        if head.is_filled() {
            self.orders.pop_front();
        }
        Some(filled)
    }

    /// Returns an iterator over the resting orders in FIFO order.
    pub fn iter(&self) -> impl Iterator<Item = &Order> + '_ {
        self.orders.iter()
    }
}
