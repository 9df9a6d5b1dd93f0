//! Aggregate matching counters.

use std::ops::AddAssign;

/// Running totals kept by the book across all submissions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    /// Resting orders touched, one per fill (not distinct trade prices)
    pub trades: u64,
    /// Orders exhausted, counting both resting and incoming orders
    pub filled_orders: u64,
    /// Units matched, counted once per fill
    pub filled_quantity: u64,
}

impl AddAssign for Stats {
    fn add_assign(&mut self, rhs: Self) {
        self.trades += rhs.trades;
        self.filled_orders += rhs.filled_orders;
        self.filled_quantity += rhs.filled_quantity;
    }
}
