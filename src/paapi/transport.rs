//! HTTP transport seam between the client and the provider.

use crate::paapi::error::PaapiError;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// A fully signed request, immutable once built.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    /// Full endpoint URL; the method is always POST.
    pub url: String,
    /// Headers in send order.
    pub headers: Vec<(&'static str, String)>,
    /// Serialized request document.
    pub body: String,
}

/// The provider's reply before any interpretation.
#[derive(Debug, Clone)]
pub struct RawReply {
    pub status: u16,
    pub body: String,
}

/// Performs the HTTP exchange - enables mocking for tests.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends a signed request and returns the raw reply, failing only on
    /// network-level errors.
    async fn send(&self, request: &SignedRequest) -> Result<RawReply, PaapiError>;
}

/// Production transport over reqwest.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport with connect and request timeouts.
    pub fn new() -> Result<Self, PaapiError> {
        let client = reqwest::Client::builder()
            .gzip(true)
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &SignedRequest) -> Result<RawReply, PaapiError> {
        debug!("POST {}", request.url);

        let mut builder = self.client.post(&request.url).body(request.body.clone());
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        debug!("Response status: {}", status);

        let body = response.text().await?;
        Ok(RawReply { status, body })
    }
}
