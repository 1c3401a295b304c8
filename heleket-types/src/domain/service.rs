//! Payment service descriptor with nested limit and commission.

use serde::{Deserialize, Serialize};

/// Amount bounds for one payment service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceLimit {
    /// Minimum accepted amount as a decimal string.
    pub min_amount: String,
    /// Maximum accepted amount as a decimal string.
    pub max_amount: String,
}

/// Commission charged by one payment service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCommission {
    /// Fixed fee as a decimal string.
    pub fee_amount: String,
    /// Percent fee as a decimal string.
    pub percent: String,
}

/// One currency/network pair the merchant can accept payments on.
///
/// `limit` and `commission` are always present in the gateway response and
/// are carried as their own typed sub-objects; a response element missing
/// either is rejected as malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Network the service settles on.
    pub network: String,
    /// Currency the service accepts.
    pub currency: String,
    /// Whether the service currently accepts payments.
    pub is_available: bool,
    /// Amount bounds.
    pub limit: ServiceLimit,
    /// Commission schedule.
    pub commission: ServiceCommission,
}
