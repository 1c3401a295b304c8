//! # Heleket Types
//!
//! Domain types and port traits for the Heleket payment-gateway SDK.
//! This crate has ZERO external IO dependencies - only data structures,
//! closed value sets, and trait definitions.
//!
//! ## Architecture
//!
//! This crate is the innermost core of the SDK:
//! - `domain/` - Entities and closed enumerations (Payment, Course, Currency, ...)
//! - `dto/` - Outbound request payloads
//! - `ports/` - The `RequestExecutor` trait that transports implement
//! - `error/` - The single SDK error surface

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Balance, Balances, Course, CourseSource, Currency, Discount, Lifetime, Network, Payment,
    PaymentConvert, PaymentStatus, PayoutStatus, Priority, Service, ServiceCommission,
    ServiceLimit, StaticWalletStatus,
};
pub use dto::*;
pub use error::Error;
pub use ports::{HttpMethod, RequestExecutor};
