//! Drives a generated order stream through a fresh book.

use std::fmt;
use std::time::Instant;

use fifobook::{OrderBook, Price, Stats};
use log::{debug, info, warn};
use serde::Serialize;

use crate::config::BenchConfig;
use crate::generator::OrderGenerator;

/// Summary of one benchmark run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub orders: u64,
    pub elapsed_secs: f64,
    pub stats: Stats,
    pub resting_bids: usize,
    pub resting_asks: usize,
    pub best_bid: Option<Price>,
    pub best_ask: Option<Price>,
}

impl Report {
    /// Orders processed per second. Zero when no time was measured.
    pub fn throughput(&self) -> f64 {
        if self.elapsed_secs > 0.0 {
            self.orders as f64 / self.elapsed_secs
        } else {
            0.0
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "orders:        {}", self.orders)?;
        writeln!(f, "trades:        {}", self.stats.trades)?;
        writeln!(f, "filled_orders: {}", self.stats.filled_orders)?;
        writeln!(f, "filled_qty:    {}", self.stats.filled_quantity)?;
        writeln!(
            f,
            "resting:       {} bids / {} asks",
            self.resting_bids, self.resting_asks
        )?;
        writeln!(f, "elapsed:       {:.3}s", self.elapsed_secs)?;
        write!(f, "throughput:    {:.0} orders/s", self.throughput())
    }
}

/// Submit `config.orders` generated orders and report the counters.
///
/// Generation happens up front so the timed section only covers matching.
pub fn run(config: &BenchConfig) -> Report {
    if config.orders == 0 {
        warn!("orders = 0, nothing to submit");
    }
    if config.market_pct == 100 {
        warn!("market_pct = 100, no order can ever rest so no trades will occur");
    }
    info!("submitting {} orders", config.orders);
    let orders: Vec<_> = OrderGenerator::new(config).collect();
    debug!(
        "generated {} orders (seed={}, market_pct={})",
        orders.len(),
        config.seed,
        config.market_pct
    );

    let mut book = OrderBook::new();
    let start = Instant::now();
    for order in orders {
        book.submit(order);
    }
    let elapsed_secs = start.elapsed().as_secs_f64();

    let report = Report {
        orders: config.orders,
        elapsed_secs,
        stats: book.stats(),
        resting_bids: book.bids().order_count(),
        resting_asks: book.asks().order_count(),
        best_bid: book.best_bid(),
        best_ask: book.best_ask(),
    };
    info!(
        "processed {} orders in {:.3}s ({:.0} orders/s)",
        report.orders,
        report.elapsed_secs,
        report.throughput()
    );
    report
}
