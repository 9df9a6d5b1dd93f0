//! Result types for order submission.

use crate::{Fill, OrderId, Quantity, Sequence};

/// Where a submitted order ended up once `submit` returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Fully executed; leaves no trace in the book
    Filled,
    /// Partially executed; the limit residual rests on the book
    RestingPartial,
    /// Nothing executed; the whole limit order rests on the book
    RestingWhole,
    /// Market order whose unmatched residual was discarded
    /// (including the case where nothing executed)
    DiscardedPartial,
    /// Zero-quantity order: consumed a sequence number, touched nothing
    Ignored,
}

impl Outcome {
    /// Returns true if the order is left resting in the book.
    #[inline]
    pub fn is_resting(self) -> bool {
        matches!(self, Outcome::RestingPartial | Outcome::RestingWhole)
    }
}

/// Result of submitting an order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubmitResult {
    /// The caller's order ID
    pub order_id: OrderId,
    /// Sequence number assigned by the book
    pub sequence: Sequence,
    /// Final disposition of the order
    pub outcome: Outcome,
    /// Resting orders touched, in match order
    pub fills: Vec<Fill>,
    /// Quantity that was filled
    pub filled_quantity: Quantity,
    /// Quantity left resting on the book (limit orders only)
    pub resting_quantity: Quantity,
    /// Quantity discarded (market order residual)
    pub discarded_quantity: Quantity,
}

impl SubmitResult {
    /// Returns true if any fills occurred.
    pub fn has_fills(&self) -> bool {
        !self.fills.is_empty()
    }

    /// Returns true if the order is resting on the book.
    pub fn is_resting(&self) -> bool {
        self.outcome.is_resting()
    }

    /// Returns true if the order was fully filled.
    pub fn is_fully_filled(&self) -> bool {
        self.outcome == Outcome::Filled
    }

    /// Returns the number of resting orders exhausted by this submission.
    pub fn resting_orders_filled(&self) -> usize {
        self.fills.iter().filter(|f| f.resting_filled).count()
    }
}
