//! Per-service discount.

use serde::{Deserialize, Serialize};

/// Discount (or markup, when negative) applied to payments on one
/// currency/network pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount {
    /// Currency the discount applies to.
    pub currency: String,
    /// Network the discount applies to.
    pub network: String,
    /// Discount percent; negative values increase the payer amount.
    pub discount_percent: i32,
}
