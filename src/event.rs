//! Event log for deterministic replay.
//!
//! Every order passed to `submit` is recorded as it arrived (with its
//! assigned sequence number). Replaying the log on a fresh book
//! reproduces the counters and resting state exactly.

use crate::{Order, OrderBook};

impl OrderBook {
    /// Replay recorded orders to reconstruct book state.
    ///
    /// Creates a new book and submits every order in sequence. Sequence
    /// numbers carried by the orders are ignored and reassigned.
    pub fn replay(events: &[Order]) -> Self {
        let mut book = Self::new();
        for order in events {
            book.submit(order.clone());
        }
        book
    }

    /// Get all recorded submissions, oldest first.
    pub fn events(&self) -> &[Order] {
        &self.events
    }

    /// Clear the event log.
    ///
    /// Book state is untouched; a later replay then starts from the
    /// first submission recorded after the clear.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}
