//! Outbound request payloads.

use serde::{Deserialize, Serialize};

use crate::domain::{CourseSource, Currency, Lifetime, Network, PaymentStatus};

// ─────────────────────────────────────────────────────────────────────────────
// Invoice creation
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create a payment invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInvoiceRequest {
    /// Invoice amount as a decimal string
    pub amount: String,
    pub currency: Currency,
    /// Caller-assigned order identifier, unique per merchant
    pub order_id: String,
    /// Invoice time-to-live in seconds
    #[serde(default)]
    pub lifetime: Lifetime,
    /// Restrict payment to one network
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<Network>,
    /// Convert the received amount into this currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_currency: Option<Currency>,
    /// URL the gateway calls back with status changes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_callback: Option<String>,
    /// URL the payer returns to after cancelling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_return: Option<String>,
    /// URL the payer is sent to after paying
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_success: Option<String>,
    /// Exchange the recalculation rate is taken from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_source: Option<CourseSource>,
    /// Percent of the commission to subtract from the merchant (0-100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtract: Option<u8>,
}

impl CreateInvoiceRequest {
    /// Creates a request with the required fields and the default lifetime.
    pub fn new(
        amount: impl Into<String>,
        currency: Currency,
        order_id: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            currency,
            order_id: order_id.into(),
            lifetime: Lifetime::default(),
            network: None,
            to_currency: None,
            url_callback: None,
            url_return: None,
            url_success: None,
            course_source: None,
            subtract: None,
        }
    }

    pub fn with_lifetime(mut self, lifetime: Lifetime) -> Self {
        self.lifetime = lifetime;
        self
    }

    pub fn with_network(mut self, network: Network) -> Self {
        self.network = Some(network);
        self
    }

    pub fn with_to_currency(mut self, to_currency: Currency) -> Self {
        self.to_currency = Some(to_currency);
        self
    }

    pub fn with_url_callback(mut self, url: impl Into<String>) -> Self {
        self.url_callback = Some(url.into());
        self
    }

    pub fn with_url_return(mut self, url: impl Into<String>) -> Self {
        self.url_return = Some(url.into());
        self
    }

    pub fn with_url_success(mut self, url: impl Into<String>) -> Self {
        self.url_success = Some(url.into());
        self
    }

    pub fn with_course_source(mut self, source: CourseSource) -> Self {
        self.course_source = Some(source);
        self
    }

    pub fn with_subtract(mut self, percent: u8) -> Self {
        self.subtract = Some(percent);
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Webhook testing
// ─────────────────────────────────────────────────────────────────────────────

/// Request to replay a payment webhook against a callback URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestWebhookRequest {
    /// URL the test webhook is delivered to
    pub url_callback: String,
    pub currency: Currency,
    pub network: Network,
    /// Status the simulated payment reports
    #[serde(default = "default_webhook_status")]
    pub status: PaymentStatus,
    /// Gateway payment identifier (exactly one of uuid/order_id)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// Caller-assigned order identifier (exactly one of uuid/order_id)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

fn default_webhook_status() -> PaymentStatus {
    PaymentStatus::Paid
}

impl TestWebhookRequest {
    /// Creates a request reporting the `paid` status.
    pub fn new(url_callback: impl Into<String>, currency: Currency, network: Network) -> Self {
        Self {
            url_callback: url_callback.into(),
            currency,
            network,
            status: default_webhook_status(),
            uuid: None,
            order_id: None,
        }
    }

    pub fn with_status(mut self, status: PaymentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = Some(uuid.into());
        self
    }

    pub fn with_order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Payment addressing
// ─────────────────────────────────────────────────────────────────────────────

/// Payload addressing an existing payment by exactly one identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentLookupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

/// Request to refund a payment to the given address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefundRequest {
    /// Address the refund is sent to
    pub address: String,
    /// Whether the network fee is subtracted from the refund
    pub is_subtract: bool,
    /// Gateway payment identifier (exactly one of uuid/order_id)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// Caller-assigned order identifier (exactly one of uuid/order_id)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Partial refund amount; full refund when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
}

/// Request for a payment QR code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrCodeRequest {
    pub merchant_payment_uuid: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Discounts
// ─────────────────────────────────────────────────────────────────────────────

/// Request to set the discount for one currency/network pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetDiscountRequest {
    pub currency: Currency,
    pub network: Network,
    pub discount_percent: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_request_serializes_defaults() {
        let req = CreateInvoiceRequest::new("15.00", Currency::Usdt, "order-1");
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["amount"], "15.00");
        assert_eq!(value["lifetime"], 3600);
        assert!(value.get("network").is_none());
    }

    #[test]
    fn test_invoice_request_builders() {
        let req = CreateInvoiceRequest::new("1", Currency::Btc, "o")
            .with_lifetime(Lifetime::Minutes30)
            .with_network(Network::Btc)
            .with_url_callback("https://example.com/cb");
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["lifetime"], 1800);
        assert_eq!(value["network"], "BTC");
        assert_eq!(value["url_callback"], "https://example.com/cb");
    }

    #[test]
    fn test_webhook_request_defaults_to_paid() {
        let req = TestWebhookRequest::new("https://example.com/cb", Currency::Usdt, Network::Tron)
            .with_order_id("o1");
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["status"], "paid");
        assert_eq!(value["order_id"], "o1");
        assert!(value.get("uuid").is_none());
    }

    #[test]
    fn test_lookup_request_omits_absent_identifier() {
        let req = PaymentLookupRequest {
            uuid: Some("u".into()),
            order_id: None,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["uuid"], "u");
        assert!(value.get("order_id").is_none());
    }
}
