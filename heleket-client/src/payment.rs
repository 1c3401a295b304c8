//! Payment façade: invoices, lookups, refunds, QR codes, services and
//! discounts.

use serde_json::Value;

use heleket_types::{
    CreateInvoiceRequest, Currency, Discount, Error, HttpMethod, Network, Payment,
    PaymentLookupRequest, QrCodeRequest, RefundRequest, RequestExecutor, Service,
    SetDiscountRequest, TestWebhookRequest,
};

use crate::{mapper, validate};

/// Façade over the gateway's payment endpoints.
///
/// Each method composes local validation (where the endpoint has
/// preconditions), one executor round trip and a response mapping; errors
/// from any stage propagate unchanged.
pub struct PaymentService<E: RequestExecutor> {
    executor: E,
}

impl<E: RequestExecutor> PaymentService<E> {
    /// Creates the façade with the given executor.
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// Returns a reference to the underlying executor.
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Asks the gateway to replay a payment webhook against a callback URL.
    ///
    /// Returns the gateway's raw result payload; its shape is not part of
    /// the documented contract.
    pub async fn test_webhook(&self, req: &TestWebhookRequest) -> Result<Value, Error> {
        validate::test_webhook(req)?;
        let body = self
            .executor
            .execute(HttpMethod::Post, "/v1/test-webhook/payment", payload(req)?)
            .await?;
        mapper::result_value(body)
    }

    /// Creates a payment invoice.
    pub async fn create_invoice(&self, req: &CreateInvoiceRequest) -> Result<Payment, Error> {
        validate::create_invoice(req)?;
        tracing::debug!(order_id = %req.order_id, "creating invoice");
        let body = self
            .executor
            .execute(HttpMethod::Post, "/v1/payment", payload(req)?)
            .await?;
        mapper::payment(body)
    }

    /// Looks up a payment by exactly one of its identifiers.
    pub async fn info(
        &self,
        uuid: Option<&str>,
        order_id: Option<&str>,
    ) -> Result<Payment, Error> {
        validate::payment_selector(uuid, order_id)?;
        let req = PaymentLookupRequest {
            uuid: uuid.map(str::to_owned),
            order_id: order_id.map(str::to_owned),
        };
        let body = self
            .executor
            .execute(HttpMethod::Post, "/v1/payment/info", payload(&req)?)
            .await?;
        mapper::payment(body)
    }

    /// Fetches the QR code image for a payment's deposit address.
    pub async fn generate_qr_code(&self, payment_uuid: &str) -> Result<String, Error> {
        let req = QrCodeRequest {
            merchant_payment_uuid: payment_uuid.to_owned(),
        };
        let body = self
            .executor
            .execute(HttpMethod::Post, "/v1/payment/qr", payload(&req)?)
            .await?;
        mapper::qr_image(body)
    }

    /// Refunds a paid invoice to the given address.
    ///
    /// Returns the gateway's raw result payload.
    pub async fn refund(&self, req: &RefundRequest) -> Result<Value, Error> {
        validate::payment_selector(req.uuid.as_deref(), req.order_id.as_deref())?;
        let body = self
            .executor
            .execute(HttpMethod::Post, "/v1/payment/refund", payload(req)?)
            .await?;
        mapper::result_value(body)
    }

    /// Lists the currency/network pairs the merchant can accept.
    pub async fn services_info(&self) -> Result<Vec<Service>, Error> {
        let body = self
            .executor
            .execute(HttpMethod::Post, "/v1/payment/services", None)
            .await?;
        mapper::services(body)
    }

    /// Lists configured discounts.
    pub async fn discount_list(&self) -> Result<Vec<Discount>, Error> {
        let body = self
            .executor
            .execute(HttpMethod::Post, "/v1/payment/discount/list", None)
            .await?;
        mapper::discounts(body)
    }

    /// Sets the discount percent for one currency/network pair.
    pub async fn set_discount(
        &self,
        currency: Currency,
        network: Network,
        discount_percent: i32,
    ) -> Result<Discount, Error> {
        let req = SetDiscountRequest {
            currency,
            network,
            discount_percent,
        };
        let body = self
            .executor
            .execute(HttpMethod::Post, "/v1/payment/discount/set", payload(&req)?)
            .await?;
        mapper::discount(body)
    }
}

/// Serializes a request DTO into the executor payload.
fn payload<T: serde::Serialize>(req: &T) -> Result<Option<Value>, Error> {
    serde_json::to_value(req)
        .map(Some)
        .map_err(|e| Error::InvalidArgument(format!("unserializable request: {}", e)))
}
