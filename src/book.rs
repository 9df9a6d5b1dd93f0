//! OrderBook: both sides of the book, the submission counter, and the
//! aggregate counters.
//!
//! `submit` is the only mutator. It takes `&mut self`, so the book has a
//! single writer and outcomes depend only on the order of submissions.

use log::{debug, trace};

use crate::{
    error::ValidationError,
    result::{Outcome, SubmitResult},
    Order, OrderType, Price, PriceLevels, Quantity, Sequence, Side, Stats,
};

/// The complete order book.
#[derive(Clone, Debug)]
pub struct OrderBook {
    /// Buy orders, best = highest price
    bids: PriceLevels,
    /// Sell orders, best = lowest price
    asks: PriceLevels,
    /// Aggregate counters across all submissions
    stats: Stats,
    /// Last sequence number assigned (0 before the first submission)
    sequence: Sequence,
    /// Submitted orders, for replay (only with "event-log" feature)
    #[cfg(feature = "event-log")]
    pub(crate) events: Vec<Order>,
}

impl OrderBook {
    /// Create a new empty order book.
    pub fn new() -> Self {
        Self {
            bids: PriceLevels::new(Side::Buy),
            asks: PriceLevels::new(Side::Sell),
            stats: Stats::default(),
            sequence: 0,
            #[cfg(feature = "event-log")]
            events: Vec::new(),
        }
    }

    // === Submission ===

    /// Submit an order.
    ///
    /// The order is matched against the opposite side under price-time
    /// priority. Any residual is then disposed of by order type:
    /// - **Limit**: rests at its own price, behind existing orders there
    /// - **Market**: discarded
    ///
    /// A zero-quantity order is a no-op apart from consuming a sequence
    /// number. Use [`try_submit`](Self::try_submit) to reject it instead.
    pub fn submit(&mut self, mut order: Order) -> SubmitResult {
        self.sequence += 1;
        order.sequence = self.sequence;

        #[cfg(feature = "event-log")]
        self.events.push(order.clone());

        let order_id = order.id;
        let submitted = order.quantity;

        if submitted == 0 {
            debug!("ignoring zero-quantity order {}", order_id);
            return SubmitResult {
                order_id,
                sequence: order.sequence,
                outcome: Outcome::Ignored,
                fills: Vec::new(),
                filled_quantity: 0,
                resting_quantity: 0,
                discarded_quantity: 0,
            };
        }

        let match_result = self.match_order(&mut order);
        self.stats += match_result.stats;

        let filled = submitted - order.quantity;
        let remaining = order.quantity;

        let (outcome, resting, discarded) = if remaining == 0 {
            (Outcome::Filled, 0, 0)
        } else if order.order_type.can_rest() {
            trace!(
                "{} {} rests {} @ {}",
                order.side, order_id, remaining, order.price
            );
            let outcome = if filled > 0 {
                Outcome::RestingPartial
            } else {
                Outcome::RestingWhole
            };
            self.side_mut(order.side).insert_order(order);
            (outcome, remaining, 0)
        } else {
            trace!("{} {} discards {} unmatched", order.side, order_id, remaining);
            (Outcome::DiscardedPartial, 0, remaining)
        };

        SubmitResult {
            order_id,
            sequence: self.sequence,
            outcome,
            fills: match_result.fills,
            filled_quantity: filled,
            resting_quantity: resting,
            discarded_quantity: discarded,
        }
    }

    /// Submit an order after validating it.
    ///
    /// Returns `Err(ValidationError::ZeroQuantity)` if quantity is 0,
    /// or `Err(ValidationError::NonPositivePrice)` for a limit order whose
    /// price is <= 0. A rejected order consumes no sequence number.
    pub fn try_submit(&mut self, order: Order) -> Result<SubmitResult, ValidationError> {
        if order.quantity == 0 {
            return Err(ValidationError::ZeroQuantity);
        }
        if order.order_type == OrderType::Limit && order.price <= Price::ZERO {
            return Err(ValidationError::NonPositivePrice(order.price));
        }
        Ok(self.submit(order))
    }

    // === Counters ===

    /// Aggregate counters across all submissions.
    #[inline]
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Number of fills (resting orders touched) so far.
    #[inline]
    pub fn trades(&self) -> u64 {
        self.stats.trades
    }

    /// Number of orders exhausted so far, incoming or resting.
    #[inline]
    pub fn filled_orders(&self) -> u64 {
        self.stats.filled_orders
    }

    /// Total quantity matched so far.
    #[inline]
    pub fn filled_quantity(&self) -> Quantity {
        self.stats.filled_quantity
    }

    /// Last sequence number assigned (equals the number of submissions).
    #[inline]
    pub fn sequence(&self) -> Sequence {
        self.sequence
    }

    // === Side access ===

    /// Get the bid side.
    pub fn bids(&self) -> &PriceLevels {
        &self.bids
    }

    /// Get the ask side.
    pub fn asks(&self) -> &PriceLevels {
        &self.asks
    }

    /// Get the price levels for a side.
    pub fn side(&self, side: Side) -> &PriceLevels {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    pub(crate) fn side_mut(&mut self, side: Side) -> &mut PriceLevels {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }

    /// Levels an incoming order on `side` matches against.
    pub(crate) fn opposite_side_mut(&mut self, side: Side) -> &mut PriceLevels {
        self.side_mut(side.opposite())
    }

    // === Top of book ===

    /// Get the best bid price.
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.best_price()
    }

    /// Get the best ask price.
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.best_price()
    }

    /// Get both best bid and best ask.
    pub fn best_bid_ask(&self) -> (Option<Price>, Option<Price>) {
        (self.best_bid(), self.best_ask())
    }

    /// Get the spread (best ask - best bid).
    ///
    /// Widened to `i128` since any two `i64` prices may rest.
    pub fn spread(&self) -> Option<i128> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(i128::from(ask.0) - i128::from(bid.0)),
            _ => None,
        }
    }

    /// Check if the book is crossed (best bid >= best ask).
    /// This never holds between submissions.
    pub fn is_crossed(&self) -> bool {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => bid >= ask,
            _ => false,
        }
    }
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}
