//! TOML configuration loading and validation.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Parameters of a randomized benchmark run.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    /// Number of orders to submit
    pub orders: u64,
    /// Percentage of market orders, 0-100
    pub market_pct: u32,
    /// RNG seed; the same seed always yields the same stream
    pub seed: u64,
    /// Centre of the limit price band
    pub price_base: i64,
    /// Limit prices are drawn from `price_base ± price_drift`
    pub price_drift: i64,
    /// Quantities are drawn from `1..=max_qty`
    pub max_qty: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            orders: 3_000_000,
            market_pct: 10,
            seed: 42,
            price_base: 100_000,
            price_drift: 5_000,
            max_qty: 3,
        }
    }
}

impl BenchConfig {
    /// Load and validate config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: BenchConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate config invariants.
    pub fn validate(&self) -> Result<()> {
        if self.market_pct > 100 {
            return Err(Error::Config("market_pct must be in [0, 100]".into()));
        }
        if self.max_qty == 0 {
            return Err(Error::Config("max_qty must be > 0".into()));
        }
        if self.price_drift < 0 {
            return Err(Error::Config("price_drift must be >= 0".into()));
        }
        if self
            .price_base
            .checked_sub(self.price_drift)
            .and_then(|low| self.price_base.checked_add(self.price_drift).map(|_| low))
            .is_none()
        {
            return Err(Error::Config(
                "price_base ± price_drift overflows i64".into(),
            ));
        }
        Ok(())
    }
}
