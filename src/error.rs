//! Validation errors for order submission.

use crate::Price;

/// Errors returned by [`OrderBook::try_submit`](crate::OrderBook::try_submit).
///
/// The unvalidated [`OrderBook::submit`](crate::OrderBook::submit) never fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValidationError {
    /// Quantity must be greater than zero.
    #[error("quantity must be greater than zero")]
    ZeroQuantity,
    /// Limit orders must carry a positive price.
    #[error("limit price must be greater than zero, got {0}")]
    NonPositivePrice(Price),
}
