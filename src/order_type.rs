//! Order type: controls price bounding and residual disposal

use std::fmt;

use crate::{Price, Side};

/// How an order is bounded while matching and what happens to its residual.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrderType {
    /// Matches only at prices at least as good as its own.
    /// Unmatched residual rests on the book.
    #[default]
    Limit,

    /// Matches at any price. Unmatched residual is discarded.
    Market,
}

impl OrderType {
    /// Returns true if an unmatched residual of this type rests on the book.
    #[inline]
    pub fn can_rest(self) -> bool {
        matches!(self, OrderType::Limit)
    }

    /// Returns true if an incoming order of this type crosses a resting
    /// level at `resting_price`.
    ///
    /// - Market always crosses
    /// - Limit buy crosses if `resting_price <= limit`
    /// - Limit sell crosses if `resting_price >= limit`
    #[inline]
    pub fn crosses(self, side: Side, limit: Price, resting_price: Price) -> bool {
        match self {
            OrderType::Market => true,
            OrderType::Limit => match side {
                Side::Buy => resting_price <= limit,
                Side::Sell => resting_price >= limit,
            },
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::Limit => write!(f, "LIMIT"),
            OrderType::Market => write!(f, "MARKET"),
        }
    }
}
