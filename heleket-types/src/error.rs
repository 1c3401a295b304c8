//! Error surface of the SDK.
//!
//! Every kind surfaces directly to the façade caller; nothing is swallowed,
//! logged away, or retried inside the SDK.

/// Errors a façade call can fail with.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A local precondition was violated; no request was sent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The outbound payload failed schema checks; every violation is listed
    /// and no request was sent.
    #[error("Schema validation failed: {}", .0.join("; "))]
    SchemaValidation(Vec<String>),

    /// Network-level failure reported by the request executor.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The gateway responded with a non-success HTTP status; the body, when
    /// present, is attached unmodified.
    #[error("Gateway returned HTTP {code}")]
    HttpStatus { code: u16, body: Option<String> },

    /// A success response did not match the expected shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}
