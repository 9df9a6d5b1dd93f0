//! Fill representation

use crate::{OrderId, Price, Quantity};
use std::fmt;

/// One resting order touched by an incoming order.
///
/// Fills always execute at the resting level's price.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fill {
    /// The resting (passive) order
    pub resting_order_id: OrderId,
    /// Execution price (the resting level's price)
    pub price: Price,
    /// Quantity executed
    pub quantity: Quantity,
    /// True if the resting order was exhausted by this fill
    pub resting_filled: bool,
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} @ {} against {}{}",
            self.quantity,
            self.price,
            self.resting_order_id,
            if self.resting_filled { " (filled)" } else { "" }
        )
    }
}
