//! Error taxonomy for provider-facing search calls.

use thiserror::Error;

/// Failure modes of a single `search` call.
///
/// Nothing is caught or retried inside the client; every variant surfaces to
/// the caller with the original detail intact.
#[derive(Debug, Error)]
pub enum PaapiError {
    /// The provider reply body was not valid JSON.
    #[error("unable to parse provider response: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    /// The provider returned an explicit error list, or a non-success HTTP
    /// status with no usable error detail.
    #[error("{0}")]
    ProviderRejected(String),

    /// The HTTP exchange itself could not complete.
    #[error("transport failure: {0}")]
    TransportFailure(#[from] reqwest::Error),
}
