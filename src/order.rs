//! Order representation

use crate::{OrderId, OrderType, Price, Quantity, Sequence, Side};

/// An order submitted to (or resting in) the book.
///
/// Everything but `quantity` and `sequence` is fixed at construction.
/// While resting, `quantity` is the unfilled remainder and only shrinks.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    /// Identifier assigned by the caller
    pub id: OrderId,
    /// Buy or sell
    pub side: Side,
    /// Limit or market
    pub order_type: OrderType,
    /// Limit price (max for buy, min for sell). Carried but ignored by market orders.
    pub price: Price,
    /// Remaining quantity
    pub quantity: Quantity,
    /// Arrival counter, assigned by the book on submission
    pub sequence: Sequence,
}

impl Order {
    /// Create a new order. The sequence is assigned on submission.
    pub fn new(
        id: OrderId,
        side: Side,
        order_type: OrderType,
        price: Price,
        quantity: Quantity,
    ) -> Self {
        Self {
            id,
            side,
            order_type,
            price,
            quantity,
            sequence: 0,
        }
    }

    /// Create a limit order.
    pub fn limit(id: u64, side: Side, price: i64, quantity: Quantity) -> Self {
        Self::new(OrderId(id), side, OrderType::Limit, Price(price), quantity)
    }

    /// Create a market order. The price field is zero and never consulted.
    pub fn market(id: u64, side: Side, quantity: Quantity) -> Self {
        Self::new(OrderId(id), side, OrderType::Market, Price::ZERO, quantity)
    }

    /// Returns true once the remaining quantity reaches zero.
    #[inline]
    pub fn is_filled(&self) -> bool {
        self.quantity == 0
    }

    /// Fill the order by the given quantity.
    ///
    /// # Panics
    ///
    /// Panics if `quantity > self.quantity`.
    pub fn fill(&mut self, quantity: Quantity) {
        assert!(
            quantity <= self.quantity,
            "fill quantity {} exceeds remaining {}",
            quantity,
            self.quantity
        );
        self.quantity -= quantity;
    }
}
