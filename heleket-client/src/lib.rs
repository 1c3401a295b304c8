//! # Heleket Client
//!
//! Typed client SDK for the Heleket payment-gateway HTTP API.
//!
//! ## Architecture
//!
//! Every façade method is the same fixed composition:
//! local validation (when the endpoint has preconditions), one
//! [`RequestExecutor`](heleket_types::RequestExecutor) round trip, then
//! response mapping into the typed entities of `heleket-types`. Errors
//! propagate unchanged - this layer performs no retries and keeps no state
//! between calls.
//!
//! The façades are generic over the executor port, so tests inject a
//! recording mock and production code uses [`HttpExecutor`].

pub mod executor;
pub mod finance;
pub mod mapper;
pub mod payment;
pub mod validate;

#[cfg(test)]
mod service_tests;

pub use executor::HttpExecutor;
pub use finance::FinanceService;
pub use payment::PaymentService;
