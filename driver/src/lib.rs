//! Randomized benchmark driver for the `fifobook` matching engine.
//!
//! Generates a seeded order stream, submits it to a fresh book and reports
//! the book's counters along with throughput.

pub mod config;
pub mod error;
pub mod generator;
pub mod run;

pub use config::BenchConfig;
pub use error::{Error, Result};
pub use generator::OrderGenerator;
pub use run::{run, Report};
