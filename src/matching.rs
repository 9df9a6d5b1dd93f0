//! Matching engine: the core algorithm for executing fills.
//!
//! The matching engine implements price-time priority:
//! 1. Better prices match first (higher bids, lower asks)
//! 2. At the same price, earlier orders match first (FIFO)
//! 3. Fills execute at the resting order's price

use crate::{Fill, Level, Order, OrderBook, Stats};

/// Effects of matching one incoming order against the book.
#[derive(Clone, Debug, Default)]
pub(crate) struct MatchResult {
    /// Resting orders touched, in match order
    pub fills: Vec<Fill>,
    /// Counter increments produced by this match
    pub stats: Stats,
}

impl OrderBook {
    /// Match an incoming order against the opposite side.
    ///
    /// Walks levels best-first until the incoming order is exhausted, the
    /// side is empty, or the best level no longer crosses. Emptied levels
    /// are removed as soon as they drain.
    ///
    /// The incoming order is NOT added to the book; `submit` decides what
    /// happens to any residual.
    pub(crate) fn match_order(&mut self, incoming: &mut Order) -> MatchResult {
        let mut result = MatchResult::default();

        while incoming.quantity > 0 {
            let opposite = self.opposite_side_mut(incoming.side);
            let Some(level) = opposite.best_level_mut() else {
                break; // No liquidity
            };

            let price = level.price();
            if !incoming
                .order_type
                .crosses(incoming.side, incoming.price, price)
            {
                break; // Worse levels cannot cross either
            }

            match_at_level(level, incoming, &mut result);
            opposite.remove_if_empty(price);
        }

        if incoming.is_filled() {
            result.stats.filled_orders += 1;
        }
        result
    }
}

/// Drain a level from the head until it empties or the incoming order is
/// exhausted. A partially filled head keeps its place.
fn match_at_level(level: &mut Level, incoming: &mut Order, result: &mut MatchResult) {
    let price = level.price();

    while incoming.quantity > 0 {
        let Some(head) = level.front() else {
            break;
        };
        let fill_qty = incoming.quantity.min(head.quantity);

        let Some((resting_order_id, resting_left)) = level.fill_front(fill_qty) else {
            break;
        };
        incoming.fill(fill_qty);

        let resting_filled = resting_left == 0;
        result.fills.push(Fill {
            resting_order_id,
            price,
            quantity: fill_qty,
            resting_filled,
        });
        result.stats.trades += 1;
        result.stats.filled_quantity += fill_qty;
        if resting_filled {
            result.stats.filled_orders += 1;
        }
    }
}
