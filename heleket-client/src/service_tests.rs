//! Façade unit tests.

pub(crate) mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::{Value, json};

    use heleket_types::{
        CreateInvoiceRequest, Currency, Error, HttpMethod, Network, PaymentStatus, RefundRequest,
        RequestExecutor, TestWebhookRequest,
    };

    use crate::{FinanceService, PaymentService};

    /// Recording executor: stores every invocation and replies with a fixed
    /// body, so tests can assert both mapping results and that local
    /// validation failures never reach the transport.
    pub struct MockExecutor {
        calls: Mutex<Vec<(HttpMethod, String, Option<Value>)>>,
        response: Value,
    }

    impl MockExecutor {
        pub fn returning(response: Value) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                response,
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        pub fn calls(&self) -> Vec<(HttpMethod, String, Option<Value>)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RequestExecutor for MockExecutor {
        async fn execute(
            &self,
            method: HttpMethod,
            path: &str,
            payload: Option<Value>,
        ) -> Result<Value, Error> {
            self.calls
                .lock()
                .unwrap()
                .push((method, path.to_string(), payload));
            Ok(self.response.clone())
        }
    }

    fn raw_payment_result() -> Value {
        json!({"result": {
            "uuid": "x",
            "order_id": "o1",
            "amount": "100.00",
            "from": "BTC",
            "status": "paid",
            "convert": {"currency": "USDT", "amount": "100", "rate": "1"},
            "created_at": "2024-01-01T00:00:00",
            "updated_at": "2024-01-01T00:05:00"
        }})
    }

    // ─────────────────────────────────────────────────────────────────────
    // Validation short-circuits before the transport
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_invalid_invoice_never_reaches_executor() {
        let service = PaymentService::new(MockExecutor::returning(raw_payment_result()));
        let req = CreateInvoiceRequest::new("", Currency::Usdt, "");

        let err = service.create_invoice(&req).await.unwrap_err();
        assert!(matches!(err, Error::SchemaValidation(_)));
        assert_eq!(service.executor().call_count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_webhook_never_reaches_executor() {
        let service = PaymentService::new(MockExecutor::returning(json!({"result": []})));
        let req = TestWebhookRequest::new("not-a-url", Currency::Usdt, Network::Tron)
            .with_order_id("o1");

        let err = service.test_webhook(&req).await.unwrap_err();
        assert!(matches!(err, Error::SchemaValidation(_)));
        assert_eq!(service.executor().call_count(), 0);
    }

    #[tokio::test]
    async fn test_info_with_both_identifiers_fails_locally() {
        let service = PaymentService::new(MockExecutor::returning(raw_payment_result()));

        let err = service.info(Some("u"), Some("o")).await.unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert_eq!(service.executor().call_count(), 0);
    }

    #[tokio::test]
    async fn test_info_with_neither_identifier_fails_locally() {
        let service = PaymentService::new(MockExecutor::returning(raw_payment_result()));

        let err = service.info(None, None).await.unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert_eq!(service.executor().call_count(), 0);
    }

    #[tokio::test]
    async fn test_refund_identifier_rule() {
        let service = PaymentService::new(MockExecutor::returning(json!({"result": {}})));
        let req = RefundRequest {
            address: "addr".into(),
            is_subtract: false,
            uuid: None,
            order_id: None,
            amount: None,
        };

        let err = service.refund(&req).await.unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert_eq!(service.executor().call_count(), 0);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Round trips: composed validator -> executor -> mapper
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_create_invoice_maps_payment() {
        let service = PaymentService::new(MockExecutor::returning(raw_payment_result()));
        let req = CreateInvoiceRequest::new("100.00", Currency::Usdt, "o1");

        let payment = service.create_invoice(&req).await.unwrap();
        assert_eq!(payment.source_currency.as_deref(), Some("BTC"));
        assert_eq!(payment.status, PaymentStatus::Paid);
        assert_eq!(payment.convert.unwrap().currency, "USDT");
        assert_eq!(
            (payment.updated_at - payment.created_at).num_minutes(),
            5
        );

        let calls = service.executor().calls();
        assert_eq!(calls.len(), 1);
        let (method, path, payload) = &calls[0];
        assert_eq!(*method, HttpMethod::Post);
        assert_eq!(path, "/v1/payment");
        let payload = payload.as_ref().unwrap();
        assert_eq!(payload["amount"], "100.00");
        assert_eq!(payload["lifetime"], 3600);
    }

    #[tokio::test]
    async fn test_info_without_convert_maps_payment() {
        let mut body = raw_payment_result();
        body["result"]
            .as_object_mut()
            .unwrap()
            .remove("convert");
        let service = PaymentService::new(MockExecutor::returning(body));

        let payment = service.info(Some("x"), None).await.unwrap();
        assert!(payment.convert.is_none());

        let calls = service.executor().calls();
        assert_eq!(calls[0].1, "/v1/payment/info");
        let payload = calls[0].2.as_ref().unwrap();
        assert_eq!(payload["uuid"], "x");
        assert!(payload.get("order_id").is_none());
    }

    #[tokio::test]
    async fn test_exchange_rate_builds_path_and_filters() {
        let body = json!({"result": [
            {"from": "BTC", "to": "USDT", "course": "65123.12"},
            {"from": "BTC", "to": "BTC", "course": "1"},
            {"from": "BTC", "to": "ETH", "course": "18.4"},
        ]});
        let service = FinanceService::new(MockExecutor::returning(body));

        let filter = [Currency::Btc, Currency::Eth];
        let courses = service
            .exchange_rate(Currency::Btc, Some(&filter))
            .await
            .unwrap();
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].target, "BTC");
        assert_eq!(courses[1].target, "ETH");

        let calls = service.executor().calls();
        assert_eq!(calls[0].0, HttpMethod::Get);
        assert_eq!(calls[0].1, "/v1/exchange-rate/BTC/list");
        assert!(calls[0].2.is_none());
    }

    #[tokio::test]
    async fn test_balance_partition() {
        let body = json!({"result": [{"balance": {
            "merchant": [{"currency_code": "USDT", "balance": "50.00"}],
            "user": []
        }}]});
        let service = FinanceService::new(MockExecutor::returning(body));

        let balances = service.balance().await.unwrap();
        assert_eq!(balances.merchant.len(), 1);
        assert!(balances.user.is_empty());
    }

    #[tokio::test]
    async fn test_services_info_fails_fast_on_malformed_element() {
        let body = json!({"result": [
            {
                "network": "tron",
                "currency": "USDT",
                "is_available": true,
                "limit": {"min_amount": "0.5", "max_amount": "100000"},
                "commission": {"fee_amount": "0", "percent": "1.5"}
            },
            {"network": "eth", "currency": "ETH", "is_available": true}
        ]});
        let service = PaymentService::new(MockExecutor::returning(body));

        let err = service.services_info().await.unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_missing_result_key_is_malformed() {
        let service = PaymentService::new(MockExecutor::returning(json!({"state": 0})));

        let err = service.discount_list().await.unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_set_discount_round_trip() {
        let body = json!({"result": {
            "currency": "BTC", "network": "btc", "discount_percent": -5
        }});
        let service = PaymentService::new(MockExecutor::returning(body));

        let discount = service
            .set_discount(Currency::Btc, Network::Btc, -5)
            .await
            .unwrap();
        assert_eq!(discount.discount_percent, -5);

        let calls = service.executor().calls();
        assert_eq!(calls[0].1, "/v1/payment/discount/set");
        let payload = calls[0].2.as_ref().unwrap();
        assert_eq!(payload["currency"], "BTC");
        assert_eq!(payload["network"], "BTC");
    }

    #[tokio::test]
    async fn test_qr_code_round_trip() {
        let body = json!({"result": {"image": "data:image/png;base64,iVBOR"}});
        let service = PaymentService::new(MockExecutor::returning(body));

        let image = service.generate_qr_code("8b03432e").await.unwrap();
        assert!(image.starts_with("data:image/png"));

        let calls = service.executor().calls();
        assert_eq!(calls[0].1, "/v1/payment/qr");
        assert_eq!(
            calls[0].2.as_ref().unwrap()["merchant_payment_uuid"],
            "8b03432e"
        );
    }

    #[tokio::test]
    async fn test_test_webhook_round_trip() {
        let service = PaymentService::new(MockExecutor::returning(json!({"result": []})));
        let req = TestWebhookRequest::new("https://example.com/cb", Currency::Usdt, Network::Tron)
            .with_uuid("u1")
            .with_status(PaymentStatus::PaidOver);

        let result = service.test_webhook(&req).await.unwrap();
        assert_eq!(result, json!([]));

        let calls = service.executor().calls();
        assert_eq!(calls[0].1, "/v1/test-webhook/payment");
        let payload = calls[0].2.as_ref().unwrap();
        assert_eq!(payload["status"], "paid_over");
        assert_eq!(payload["network"], "TRON");
    }
}
