//! # fifobook
//!
//! A deterministic price-time priority order book and matching core.
//!
//! ## Features
//!
//! - **Order types**: Limit (residual rests) and Market (residual discarded)
//! - **Price-time priority**: best price first, FIFO within a price level
//! - **Deterministic**: outcomes depend only on the order of submissions
//! - **Event replay**: record submissions and rebuild identical state
//!   (`event-log` feature, enabled by default)
//!
//! ## Quick Start
//!
//! ```
//! use fifobook::{Order, OrderBook, Outcome, Price, Side};
//!
//! let mut book = OrderBook::new();
//!
//! // A resting bid
//! book.submit(Order::limit(1, Side::Buy, 100, 5));
//!
//! // A sell that crosses it
//! let result = book.submit(Order::limit(2, Side::Sell, 100, 3));
//! assert_eq!(result.outcome, Outcome::Filled);
//! assert_eq!(book.trades(), 1);
//! assert_eq!(book.filled_orders(), 1);
//! assert_eq!(book.filled_quantity(), 3);
//!
//! // The partially filled bid keeps its place at 100
//! let level = book.bids().best_level().unwrap();
//! assert_eq!(level.price(), Price(100));
//! assert_eq!(level.front().unwrap().quantity, 2);
//! ```
//!
//! ## Market Orders
//!
//! Market orders sweep the opposite side at any price. Whatever cannot be
//! matched is discarded, never rested:
//!
//! ```
//! use fifobook::{Order, OrderBook, Outcome, Side};
//!
//! let mut book = OrderBook::new();
//! book.submit(Order::limit(1, Side::Buy, 100, 2));
//!
//! let result = book.submit(Order::market(2, Side::Sell, 10));
//! assert_eq!(result.outcome, Outcome::DiscardedPartial);
//! assert_eq!(result.discarded_quantity, 8);
//! assert!(book.bids().is_empty() && book.asks().is_empty());
//! ```
//!
//! ## Validation
//!
//! [`OrderBook::submit`] accepts any order and treats zero quantity as a
//! no-op. [`OrderBook::try_submit`] rejects it instead:
//!
//! ```
//! use fifobook::{Order, OrderBook, Side, ValidationError};
//!
//! let mut book = OrderBook::new();
//! let err = book.try_submit(Order::limit(1, Side::Buy, 100, 0)).unwrap_err();
//! assert_eq!(err, ValidationError::ZeroQuantity);
//! ```
//!
//! ## Concurrency
//!
//! `submit` takes `&mut self`. A host that ingests orders concurrently must
//! funnel them through the single owner of the book, in the order they are
//! to be matched.

mod book;
mod error;
#[cfg(feature = "event-log")]
mod event;
mod fill;
mod level;
mod matching;
mod order;
mod order_type;
mod price_levels;
mod result;
mod side;
mod snapshot;
mod stats;
mod types;

// Re-export public API
pub use book::OrderBook;
pub use error::ValidationError;
pub use fill::Fill;
pub use level::Level;
pub use order::Order;
pub use order_type::OrderType;
pub use price_levels::PriceLevels;
pub use result::{Outcome, SubmitResult};
pub use side::Side;
pub use snapshot::{BookSnapshot, LevelSnapshot};
pub use stats::Stats;
pub use types::{OrderId, Price, Quantity, Sequence};
