//! Property-based tests for order book invariants.
//!
//! These tests use proptest to verify that key invariants hold
//! across randomly generated submission sequences.

use fifobook::{Order, OrderBook, OrderType, Outcome, Side, Stats};
use proptest::prelude::*;

/// Generate a price in a narrow band so that orders cross often
fn price_strategy() -> impl Strategy<Value = i64> {
    90i64..=110i64
}

fn quantity_strategy() -> impl Strategy<Value = u64> {
    1u64..=20u64
}

fn side_strategy() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Buy), Just(Side::Sell)]
}

fn type_strategy() -> impl Strategy<Value = OrderType> {
    prop_oneof![4 => Just(OrderType::Limit), 1 => Just(OrderType::Market)]
}

/// A submission stream; order ids equal their position in the stream.
fn orders_strategy(max: usize) -> impl Strategy<Value = Vec<Order>> {
    prop::collection::vec(
        (side_strategy(), type_strategy(), price_strategy(), quantity_strategy()),
        1..max,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (side, order_type, price, qty))| match order_type {
                OrderType::Limit => Order::limit(i as u64, side, price, qty),
                OrderType::Market => Order::market(i as u64, side, qty),
            })
            .collect()
    })
}

/// Resting contents of one side, best level first, FIFO within a level.
fn resting(book: &OrderBook, side: Side) -> Vec<(i64, u64, u64)> {
    book.side(side)
        .iter_best_to_worst()
        .flat_map(|level| level.iter().map(|o| (o.price.0, o.id.0, o.quantity)))
        .collect()
}

// ============================================================================
// Reference model: linear scans, no ordered structures
// ============================================================================

#[derive(Default)]
struct NaiveBook {
    bids: Vec<(i64, u64, u64, u64)>, // (price, sequence, id, qty)
    asks: Vec<(i64, u64, u64, u64)>,
    sequence: u64,
    stats: Stats,
}

impl NaiveBook {
    fn submit(&mut self, order: &Order) {
        self.sequence += 1;
        let mut remaining = order.quantity;
        if remaining == 0 {
            return;
        }

        loop {
            let opposite = match order.side {
                Side::Buy => &mut self.asks,
                Side::Sell => &mut self.bids,
            };
            // Best = lowest ask / highest bid, then earliest sequence
            let best = opposite
                .iter()
                .enumerate()
                .min_by_key(|(_, (price, seq, _, _))| match order.side {
                    Side::Buy => (*price, *seq),
                    Side::Sell => (-*price, *seq),
                })
                .map(|(i, _)| i);
            let Some(i) = best else { break };
            let price = opposite[i].0;
            let crosses = match (order.order_type, order.side) {
                (OrderType::Market, _) => true,
                (OrderType::Limit, Side::Buy) => price <= order.price.0,
                (OrderType::Limit, Side::Sell) => price >= order.price.0,
            };
            if !crosses || remaining == 0 {
                break;
            }
            let fill = remaining.min(opposite[i].3);
            remaining -= fill;
            opposite[i].3 -= fill;
            self.stats.trades += 1;
            self.stats.filled_quantity += fill;
            if opposite[i].3 == 0 {
                opposite.remove(i);
                self.stats.filled_orders += 1;
            }
        }

        if remaining == 0 {
            self.stats.filled_orders += 1;
        } else if order.order_type == OrderType::Limit {
            let own = match order.side {
                Side::Buy => &mut self.bids,
                Side::Sell => &mut self.asks,
            };
            own.push((order.price.0, self.sequence, order.id.0, remaining));
        }
    }

    fn resting(&self, side: Side) -> Vec<(i64, u64, u64)> {
        let mut orders = match side {
            Side::Buy => self.bids.clone(),
            Side::Sell => self.asks.clone(),
        };
        orders.sort_by_key(|(price, seq, _, _)| match side {
            Side::Buy => (-*price, *seq),
            Side::Sell => (*price, *seq),
        });
        orders
            .into_iter()
            .map(|(price, _, id, qty)| (price, id, qty))
            .collect()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    // ========================================================================
    // MODEL EQUIVALENCE
    // ========================================================================

    /// The book agrees with a linear-scan model on counters and contents
    #[test]
    fn matches_reference_model(orders in orders_strategy(80)) {
        let mut book = OrderBook::new();
        let mut model = NaiveBook::default();

        for order in &orders {
            book.submit(order.clone());
            model.submit(order);
            prop_assert_eq!(book.stats(), model.stats);
        }

        prop_assert_eq!(resting(&book, Side::Buy), model.resting(Side::Buy));
        prop_assert_eq!(resting(&book, Side::Sell), model.resting(Side::Sell));
    }

    // ========================================================================
    // CONSERVATION INVARIANTS
    // ========================================================================

    /// filled + resting + discarded = submitted, for every submission
    #[test]
    fn quantity_conservation(orders in orders_strategy(60)) {
        let mut book = OrderBook::new();

        for order in orders {
            let qty = order.quantity;
            let result = book.submit(order);
            let total = result.filled_quantity + result.resting_quantity + result.discarded_quantity;
            prop_assert_eq!(total, qty, "quantity not conserved: {:?}", result);
        }
    }

    /// Counter deltas equal what the submission's fills report
    #[test]
    fn counters_track_fills(orders in orders_strategy(60)) {
        let mut book = OrderBook::new();

        for order in orders {
            let before = book.stats();
            let resting_before = book.bids().total_quantity() + book.asks().total_quantity();
            let result = book.submit(order);
            let after = book.stats();

            let fill_qty: u64 = result.fills.iter().map(|f| f.quantity).sum();
            prop_assert_eq!(after.trades - before.trades, result.fills.len() as u64);
            prop_assert_eq!(after.filled_quantity - before.filled_quantity, fill_qty);
            prop_assert_eq!(fill_qty, result.filled_quantity);

            let incoming_filled = u64::from(result.outcome == Outcome::Filled);
            prop_assert_eq!(
                after.filled_orders - before.filled_orders,
                result.resting_orders_filled() as u64 + incoming_filled
            );

            // Quantity removed from the book equals the quantity filled
            let resting_after = book.bids().total_quantity() + book.asks().total_quantity();
            prop_assert_eq!(resting_before + result.resting_quantity - fill_qty, resting_after);
        }
    }

    // ========================================================================
    // PRIORITY INVARIANTS
    // ========================================================================

    /// Fills walk from best to worst price, FIFO within a price
    #[test]
    fn fills_follow_price_time_priority(orders in orders_strategy(80)) {
        let mut book = OrderBook::new();

        for order in orders {
            let side = order.side;
            let result = book.submit(order);

            for pair in result.fills.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                match side {
                    Side::Buy => prop_assert!(a.price <= b.price, "asks out of order"),
                    Side::Sell => prop_assert!(a.price >= b.price, "bids out of order"),
                }
                if a.price == b.price {
                    // ids follow submission order in these streams
                    prop_assert!(a.resting_order_id < b.resting_order_id, "FIFO violated");
                    prop_assert!(a.resting_filled, "later order touched before head drained");
                }
            }
        }
    }

    /// Limit fills never execute beyond the limit
    #[test]
    fn fills_within_limit(orders in orders_strategy(60)) {
        let mut book = OrderBook::new();

        for order in orders {
            let (side, order_type, limit) = (order.side, order.order_type, order.price);
            let result = book.submit(order);
            if order_type == OrderType::Limit {
                for fill in &result.fills {
                    match side {
                        Side::Buy => prop_assert!(fill.price <= limit),
                        Side::Sell => prop_assert!(fill.price >= limit),
                    }
                }
            }
        }
    }

    // ========================================================================
    // STRUCTURAL INVARIANTS
    // ========================================================================

    /// Levels are non-empty, hold no zero-quantity orders, and queue by arrival
    #[test]
    fn levels_well_formed(orders in orders_strategy(80)) {
        let mut book = OrderBook::new();

        for order in orders {
            book.submit(order);

            for side in [Side::Buy, Side::Sell] {
                for level in book.side(side).iter_best_to_worst() {
                    prop_assert!(!level.is_empty(), "empty level left on book");
                    let sum: u64 = level.iter().map(|o| o.quantity).sum();
                    prop_assert_eq!(sum, level.total_quantity());
                    for o in level.iter() {
                        prop_assert!(o.quantity > 0, "zero-quantity order resting");
                        prop_assert_eq!(o.price, level.price());
                        prop_assert_eq!(o.side, side);
                        prop_assert_eq!(o.order_type, OrderType::Limit);
                    }
                    let sequences: Vec<_> = level.iter().map(|o| o.sequence).collect();
                    prop_assert!(sequences.windows(2).all(|w| w[0] < w[1]));
                }
            }
        }
    }

    /// Best bid is always below best ask between submissions
    #[test]
    fn no_crossed_book(orders in orders_strategy(100)) {
        let mut book = OrderBook::new();

        for order in orders {
            book.submit(order);
            prop_assert!(!book.is_crossed(), "crossed book: {:?}", book.best_bid_ask());
        }
    }

    /// A limit residual rests at its own price with exactly the residual quantity;
    /// a market residual leaves no trace
    #[test]
    fn residual_policy(orders in orders_strategy(60)) {
        let mut book = OrderBook::new();

        for order in orders {
            let (id, side, order_type, price) = (order.id, order.side, order.order_type, order.price);
            let result = book.submit(order);

            let found: Vec<_> = book
                .side(side)
                .get_level(price)
                .map(|l| l.iter().filter(|o| o.id == id).map(|o| o.quantity).collect())
                .unwrap_or_default();

            match order_type {
                OrderType::Limit if result.resting_quantity > 0 => {
                    prop_assert_eq!(found, vec![result.resting_quantity]);
                }
                OrderType::Market => {
                    prop_assert_eq!(result.resting_quantity, 0);
                    let anywhere = resting(&book, Side::Buy)
                        .into_iter()
                        .chain(resting(&book, Side::Sell))
                        .any(|(_, rid, _)| rid == id.0);
                    prop_assert!(!anywhere, "market order rested");
                }
                _ => prop_assert!(found.is_empty()),
            }
        }
    }

    /// Snapshot levels are sorted and agree with the book totals
    #[test]
    fn snapshot_consistent(orders in orders_strategy(60)) {
        let mut book = OrderBook::new();
        for order in orders {
            book.submit(order);
        }

        let snapshot = book.full_snapshot();
        prop_assert!(snapshot.bids.windows(2).all(|w| w[0].price > w[1].price));
        prop_assert!(snapshot.asks.windows(2).all(|w| w[0].price < w[1].price));
        prop_assert_eq!(snapshot.total_bid_quantity(), book.bids().total_quantity());
        prop_assert_eq!(snapshot.total_ask_quantity(), book.asks().total_quantity());
    }

    // ========================================================================
    // DETERMINISM INVARIANTS
    // ========================================================================

    /// Same sequence of submissions produces the same results and state
    #[test]
    fn deterministic_replay(orders in orders_strategy(60)) {
        let mut first = OrderBook::new();
        let mut second = OrderBook::new();

        let results1: Vec<_> = orders.iter().map(|o| first.submit(o.clone())).collect();
        let results2: Vec<_> = orders.iter().map(|o| second.submit(o.clone())).collect();

        prop_assert_eq!(results1, results2);
        prop_assert_eq!(first.stats(), second.stats());
        prop_assert_eq!(resting(&first, Side::Buy), resting(&second, Side::Buy));
        prop_assert_eq!(resting(&first, Side::Sell), resting(&second, Side::Sell));
    }

    /// Replaying the event log rebuilds the same book
    #[cfg(feature = "event-log")]
    #[test]
    fn event_log_replay(orders in orders_strategy(60)) {
        let mut book = OrderBook::new();
        for order in orders {
            book.submit(order);
        }

        let replayed = OrderBook::replay(book.events());
        prop_assert_eq!(book.stats(), replayed.stats());
        prop_assert_eq!(book.full_snapshot(), replayed.full_snapshot());
        prop_assert_eq!(resting(&book, Side::Buy), resting(&replayed, Side::Buy));
    }
}
