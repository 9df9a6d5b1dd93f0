//! PriceLevels: One side of the order book (bids or asks).
//!
//! Maintains a sorted collection of price levels with cached best price
//! for O(1) best-level access and O(log n) level insert/remove.

use std::collections::BTreeMap;

use crate::{Level, Order, Price, Quantity, Side};

/// One side of the order book (all bids or all asks).
///
/// - **Bids**: matched high → low, best = highest price
/// - **Asks**: matched low → high, best = lowest price
///
/// Every level held here has at least one resting order.
#[derive(Clone, Debug)]
pub struct PriceLevels {
    /// Price levels, sorted by price
    levels: BTreeMap<Price, Level>,
    /// Cached best price
    best_price: Option<Price>,
    /// Which side this represents (determines "best" direction)
    side: Side,
}

impl PriceLevels {
    /// Create a new empty price levels collection for the given side.
    pub fn new(side: Side) -> Self {
        Self {
            levels: BTreeMap::new(),
            best_price: None,
            side,
        }
    }

    /// Returns which side this collection represents.
    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Returns true if there are no orders on this side.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Returns the number of distinct price levels.
    #[inline]
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Returns the best price (highest for bids, lowest for asks).
    #[inline]
    pub fn best_price(&self) -> Option<Price> {
        self.best_price
    }

    /// Returns a reference to the best level.
    pub fn best_level(&self) -> Option<&Level> {
        self.best_price.and_then(|p| self.levels.get(&p))
    }

    /// Returns a mutable reference to the best level.
    pub(crate) fn best_level_mut(&mut self) -> Option<&mut Level> {
        self.best_price.and_then(|p| self.levels.get_mut(&p))
    }

    /// Returns a reference to the level at the given price, if it exists.
    pub fn get_level(&self, price: Price) -> Option<&Level> {
        self.levels.get(&price)
    }

    /// Gets or creates a level at the given price.
    ///
    /// A newly created level is empty; the caller must push an order into
    /// it before the next matching pass.
    pub(crate) fn get_or_create_level(&mut self, price: Price) -> &mut Level {
        if !self.levels.contains_key(&price) {
            self.update_best_price_after_insert(price);
        }
        self.levels
            .entry(price)
            .or_insert_with(|| Level::new(price))
    }

    /// Rest an order at the tail of its price level.
    ///
    /// Creates the level if it doesn't exist.
    pub(crate) fn insert_order(&mut self, order: Order) {
        self.get_or_create_level(order.price).push_back(order);
    }

    /// Remove a price level entirely, returning it.
    ///
    /// Updates the best price cache if the removed level was the best.
    pub(crate) fn remove_level(&mut self, price: Price) -> Option<Level> {
        let level = self.levels.remove(&price)?;
        if self.best_price == Some(price) {
            self.recompute_best_price();
        }
        Some(level)
    }

    /// Remove the level at `price` if its queue is empty.
    ///
    /// Returns true if a level was removed.
    pub(crate) fn remove_if_empty(&mut self, price: Price) -> bool {
        match self.levels.get(&price) {
            Some(level) if level.is_empty() => self.remove_level(price).is_some(),
            _ => false,
        }
    }

    /// Returns an iterator over levels from best to worst price.
    ///
    /// - Bids: highest to lowest
    /// - Asks: lowest to highest
    pub fn iter_best_to_worst(&self) -> impl Iterator<Item = &Level> {
        let (forward, reverse) = match self.side {
            Side::Buy => (None, Some(self.levels.values().rev())),
            Side::Sell => (Some(self.levels.values()), None),
        };
        forward
            .into_iter()
            .flatten()
            .chain(reverse.into_iter().flatten())
    }

    /// Returns the total quantity across all levels.
    pub fn total_quantity(&self) -> Quantity {
        self.levels.values().map(|l| l.total_quantity()).sum()
    }

    /// Returns the number of resting orders across all levels.
    pub fn order_count(&self) -> usize {
        self.levels.values().map(|l| l.order_count()).sum()
    }

    // === Private helpers ===

    fn recompute_best_price(&mut self) {
        self.best_price = match self.side {
            Side::Buy => self.levels.keys().next_back().copied(),
            Side::Sell => self.levels.keys().next().copied(),
        };
    }

    fn update_best_price_after_insert(&mut self, new_price: Price) {
        let is_better = self
            .best_price
            .is_none_or(|best| self.side.outranks(new_price, best));
        if is_better {
            self.best_price = Some(new_price);
        }
    }
}
