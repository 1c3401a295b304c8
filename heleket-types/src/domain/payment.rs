//! Payment entity and its conversion sub-object.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::status::PaymentStatus;

/// Currency conversion applied by the gateway to an invoice.
///
/// Present on a [`Payment`] only when the gateway actually converted the
/// invoice amount into another currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentConvert {
    /// Currency the amount was converted to.
    pub currency: String,
    /// Converted amount as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    /// Conversion rate as a decimal string.
    pub rate: String,
}

/// An invoice or payment record.
///
/// Amounts stay decimal strings as received; the raw `from` key is renamed
/// to `source_currency` (it collides with a reserved identifier in several
/// languages the gateway targets, the meaning is unchanged). Timestamps are
/// parsed at construction - a record with unparseable timestamps is rejected
/// rather than carried around as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Gateway-assigned payment identifier.
    pub uuid: String,
    /// Caller-assigned order identifier.
    pub order_id: String,
    /// Invoice amount as a decimal string.
    pub amount: String,
    /// Amount actually received, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_amount: Option<String>,
    /// Amount the payer must send, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_amount: Option<String>,
    /// Currency the payer pays in, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_currency: Option<String>,
    /// Invoice currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Network the payment settles on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    /// Deposit address assigned to the invoice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Currency the funds originate from (raw key `from`).
    #[serde(rename = "from", skip_serializing_if = "Option::is_none")]
    pub source_currency: Option<String>,
    /// Settlement transaction id, once on chain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txid: Option<String>,
    /// Current lifecycle state.
    pub status: PaymentStatus,
    /// Hosted payment page URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Unix timestamp after which the invoice expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expired_at: Option<i64>,
    /// True once the gateway will no longer change this record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_final: Option<bool>,
    /// Conversion details, only when the gateway converted the amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub convert: Option<PaymentConvert>,
    /// Creation time as reported by the gateway.
    #[serde(deserialize_with = "iso8601::deserialize")]
    pub created_at: NaiveDateTime,
    /// Last update time as reported by the gateway.
    #[serde(deserialize_with = "iso8601::deserialize")]
    pub updated_at: NaiveDateTime,
}

/// The gateway emits timestamps both as naive ISO-8601 and as RFC 3339 with
/// a UTC offset; accept either, keeping the local clock face.
pub(crate) mod iso8601 {
    use chrono::{DateTime, NaiveDateTime};
    use serde::{Deserialize, Deserializer, de};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        parse(&text).map_err(de::Error::custom)
    }

    pub fn parse(text: &str) -> Result<NaiveDateTime, String> {
        DateTime::parse_from_rfc3339(text)
            .map(|dt| dt.naive_local())
            .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f"))
            .map_err(|_| format!("Invalid ISO-8601 timestamp: {}", text))
    }
}
