//! Finance façade: exchange rates and balances.

use heleket_types::{Balances, Course, Currency, Error, HttpMethod, RequestExecutor};

use crate::mapper;

/// Façade over the gateway's finance endpoints.
///
/// Generic over `E: RequestExecutor` - the transport is injected, so tests
/// run against a recording mock and production against [`crate::HttpExecutor`].
pub struct FinanceService<E: RequestExecutor> {
    executor: E,
}

impl<E: RequestExecutor> FinanceService<E> {
    /// Creates the façade with the given executor.
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// Returns a reference to the underlying executor.
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Lists exchange rates from `source` into every listed currency.
    ///
    /// When `targets` is supplied, only rates into a member currency are
    /// returned; relative order is preserved as received from the gateway.
    pub async fn exchange_rate(
        &self,
        source: Currency,
        targets: Option<&[Currency]>,
    ) -> Result<Vec<Course>, Error> {
        tracing::debug!(%source, "fetching exchange rates");
        let body = self
            .executor
            .execute(
                HttpMethod::Get,
                &format!("/v1/exchange-rate/{}/list", source),
                None,
            )
            .await?;
        mapper::courses(body, targets)
    }

    /// Retrieves merchant- and user-scope balances.
    pub async fn balance(&self) -> Result<Balances, Error> {
        let body = self
            .executor
            .execute(HttpMethod::Post, "/v1/balance", None)
            .await?;
        mapper::balances(body)
    }
}
