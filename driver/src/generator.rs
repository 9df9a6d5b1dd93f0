//! Seeded random order stream.

use fifobook::{Order, Side};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::BenchConfig;

/// Yields `config.orders` orders with ids `0..orders`.
///
/// Each order picks its side with equal odds, becomes a market order with
/// probability `market_pct / 100`, and otherwise takes a limit price drawn
/// uniformly from `price_base ± price_drift`. Quantities are uniform in
/// `1..=max_qty`.
#[derive(Debug)]
pub struct OrderGenerator {
    rng: StdRng,
    next_id: u64,
    remaining: u64,
    market_pct: u32,
    price_base: i64,
    price_drift: i64,
    max_qty: u64,
}

impl OrderGenerator {
    pub fn new(config: &BenchConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(config.seed),
            next_id: 0,
            remaining: config.orders,
            market_pct: config.market_pct,
            price_base: config.price_base,
            price_drift: config.price_drift,
            max_qty: config.max_qty.max(1),
        }
    }

    fn next_order(&mut self, id: u64) -> Order {
        let side = if self.rng.gen_bool(0.5) {
            Side::Sell
        } else {
            Side::Buy
        };
        let is_market = self.rng.gen_range(0..100) < self.market_pct;
        let quantity = self.rng.gen_range(1..=self.max_qty);

        if is_market {
            Order::market(id, side, quantity)
        } else {
            let offset = self.rng.gen_range(-self.price_drift..=self.price_drift);
            Order::limit(id, side, self.price_base + offset, quantity)
        }
    }
}

impl Iterator for OrderGenerator {
    type Item = Order;

    fn next(&mut self) -> Option<Order> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let id = self.next_id;
        self.next_id += 1;
        Some(self.next_order(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}
