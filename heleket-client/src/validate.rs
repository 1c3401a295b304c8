//! Local request validation.
//!
//! All checks here are synchronous and run before any network call, so a
//! bad request fails with a precise, typed error instead of a gateway 4xx.

use heleket_types::{CreateInvoiceRequest, Error, TestWebhookRequest};

/// Maximum length the gateway accepts for an order identifier.
const ORDER_ID_MAX_LEN: usize = 128;

/// Checks that exactly one of `uuid` / `order_id` addresses the payment.
///
/// The two failure modes carry distinct messages so callers can tell
/// "nothing supplied" from "both supplied".
pub fn payment_selector(uuid: Option<&str>, order_id: Option<&str>) -> Result<(), Error> {
    match (uuid, order_id) {
        (None, None) => Err(Error::InvalidArgument(
            "either uuid or order_id must be supplied".into(),
        )),
        (Some(_), Some(_)) => Err(Error::InvalidArgument(
            "uuid and order_id are mutually exclusive; supply exactly one".into(),
        )),
        _ => Ok(()),
    }
}

/// Validates an invoice-creation payload, collecting every violation.
pub fn create_invoice(req: &CreateInvoiceRequest) -> Result<(), Error> {
    let mut violations = Vec::new();

    if !is_positive_decimal(&req.amount) {
        violations.push("amount must be a positive decimal string".to_string());
    }
    check_order_id(&req.order_id, &mut violations);
    for (field, url) in [
        ("url_callback", &req.url_callback),
        ("url_return", &req.url_return),
        ("url_success", &req.url_success),
    ] {
        if let Some(url) = url {
            if !is_http_url(url) {
                violations.push(format!("{} must be an http(s) URL", field));
            }
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(Error::SchemaValidation(violations))
    }
}

/// Validates a webhook-test payload.
///
/// The identifier rule applies here too - the test replays the webhook of an
/// existing payment - and is checked first so its error kind is preserved.
pub fn test_webhook(req: &TestWebhookRequest) -> Result<(), Error> {
    payment_selector(req.uuid.as_deref(), req.order_id.as_deref())?;

    let mut violations = Vec::new();
    if req.url_callback.is_empty() {
        violations.push("url_callback must not be empty".to_string());
    } else if !is_http_url(&req.url_callback) {
        violations.push("url_callback must be an http(s) URL".to_string());
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(Error::SchemaValidation(violations))
    }
}

fn check_order_id(order_id: &str, violations: &mut Vec<String>) {
    if order_id.is_empty() {
        violations.push("order_id must not be empty".to_string());
        return;
    }
    if order_id.len() > ORDER_ID_MAX_LEN {
        violations.push(format!(
            "order_id must be at most {} characters",
            ORDER_ID_MAX_LEN
        ));
    }
    if !order_id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        violations.push("order_id may only contain letters, digits, '-' and '_'".to_string());
    }
}

fn is_positive_decimal(text: &str) -> bool {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return false;
    }
    text.parse::<f64>().map(|v| v > 0.0).unwrap_or(false)
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
