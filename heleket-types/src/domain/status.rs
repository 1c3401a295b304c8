//! Status and priority value sets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle states of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Process,
    Check,
    Paid,
    PaidOver,
    Fail,
    WrongAmount,
    Cancel,
    SystemFail,
    RefundProcess,
    RefundFail,
    RefundPaid,
    Locked,
}

impl PaymentStatus {
    /// Returns the wire value for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Process => "process",
            PaymentStatus::Check => "check",
            PaymentStatus::Paid => "paid",
            PaymentStatus::PaidOver => "paid_over",
            PaymentStatus::Fail => "fail",
            PaymentStatus::WrongAmount => "wrong_amount",
            PaymentStatus::Cancel => "cancel",
            PaymentStatus::SystemFail => "system_fail",
            PaymentStatus::RefundProcess => "refund_process",
            PaymentStatus::RefundFail => "refund_fail",
            PaymentStatus::RefundPaid => "refund_paid",
            PaymentStatus::Locked => "locked",
        }
    }

    /// True once the gateway will no longer change the status.
    pub fn is_final(&self) -> bool {
        !matches!(
            self,
            PaymentStatus::Process
                | PaymentStatus::Check
                | PaymentStatus::RefundProcess
                | PaymentStatus::Locked
        )
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_value(serde_json::Value::String(s.to_lowercase()))
            .map_err(|_| format!("Unknown payment status: {}", s))
    }
}

/// Lifecycle states of a payout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutStatus {
    SystemFail,
    Process,
    Cancel,
    Check,
    Paid,
    Fail,
}

/// States of a static wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaticWalletStatus {
    Blocked,
    Active,
    InActive,
}

/// Network fee priority tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Recommended,
    Economy,
    High,
    Highest,
}
