//! Default reqwest-based request executor.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::Value;

use heleket_types::{Error, HttpMethod, RequestExecutor};

const DEFAULT_BASE_URL: &str = "https://api.heleket.com";

/// HTTP transport for the gateway.
///
/// Owns authentication: every request carries the merchant id and a
/// signature of `md5(base64(json_body) + api_key)` as the gateway requires.
/// Performs no retries, caching or rate-limiting; timeouts and pooling are
/// reqwest's.
#[derive(Clone)]
pub struct HttpExecutor {
    http: reqwest::Client,
    base_url: String,
    merchant_id: String,
    api_key: String,
}

impl HttpExecutor {
    /// Creates an executor against the production gateway.
    pub fn new(merchant_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            merchant_id: merchant_id.into(),
            api_key: api_key.into(),
        }
    }

    /// Overrides the gateway base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn sign(&self, body: &str) -> String {
        let digest = md5::compute(format!("{}{}", BASE64.encode(body), self.api_key));
        format!("{:x}", digest)
    }
}

#[async_trait::async_trait]
impl RequestExecutor for HttpExecutor {
    async fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        payload: Option<Value>,
    ) -> Result<Value, Error> {
        let url = format!("{}{}", self.base_url, path);
        let body = payload.map(|p| p.to_string()).unwrap_or_default();
        tracing::debug!(method = method.as_str(), %url, "executing gateway request");

        let request = match method {
            HttpMethod::Get => self.http.get(&url),
            HttpMethod::Post => self.http.post(&url),
        }
        .header("merchant", &self.merchant_id)
        .header("sign", self.sign(&body))
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body(body);

        let response = request
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.ok().filter(|s| !s.is_empty());
            return Err(Error::HttpStatus {
                code: status.as_u16(),
                body,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| Error::MalformedResponse(format!("success body is not JSON: {}", e)))
    }
}
