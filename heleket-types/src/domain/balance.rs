//! Merchant and user balances.

use serde::{Deserialize, Serialize};

/// Funds held in one currency within one scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// Wallet identifier, when the gateway reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// Currency code of the wallet.
    pub currency_code: String,
    /// Available amount as a decimal string.
    pub balance: String,
    /// Amount locked by in-flight operations, when reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub held: Option<String>,
}

/// Balance listing partitioned by scope.
///
/// The gateway reports merchant-scope and user-scope wallets as two disjoint
/// groups in a single response; order within each group is preserved as
/// received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balances {
    pub merchant: Vec<Balance>,
    pub user: Vec<Balance>,
}
