//! Provider-facing search client: build, sign, send, normalize.

use crate::config::Config;
use crate::paapi::error::PaapiError;
use crate::paapi::models::{SearchQuery, SearchResult};
use crate::paapi::normalize::normalize;
use crate::paapi::request::SearchRequest;
use crate::paapi::sign::{sign, SigningContext, CONTENT_ENCODING, CONTENT_TYPE};
use crate::paapi::transport::{HttpTransport, SignedRequest, Transport};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// Search endpoint path, identical across marketplaces.
pub const SEARCH_PATH: &str = "/paapi5/searchitems";

/// Operation target header value for SearchItems.
pub const SEARCH_TARGET: &str = "com.amazon.paapi5.v1.ProductAdvertisingAPIv1.SearchItems";

/// Service name used in the credential scope.
pub const SERVICE_NAME: &str = "ProductAdvertisingAPI";

/// Source of the current instant, injected so signing is deterministic
/// under test.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Stateless search client. Each call builds, signs, and discards its own
/// request; nothing is shared between concurrent calls.
pub struct PaapiClient<T: Transport> {
    transport: T,
    config: Config,
    clock: Box<dyn Clock>,
    base_url: Option<String>,
}

impl PaapiClient<HttpTransport> {
    /// Creates a client backed by a real HTTP transport and wall-clock time.
    pub fn new(config: Config) -> Result<Self, PaapiError> {
        Ok(Self {
            transport: HttpTransport::new()?,
            config,
            clock: Box::new(SystemClock),
            base_url: None,
        })
    }

    /// Creates a client pointed at a custom base URL (for testing).
    pub fn with_base_url(config: Config, base_url: impl Into<String>) -> Result<Self, PaapiError> {
        let mut client = Self::new(config)?;
        client.base_url = Some(base_url.into());
        Ok(client)
    }
}

impl<T: Transport> PaapiClient<T> {
    /// Creates a client from explicit collaborators.
    pub fn with_parts(transport: T, clock: Box<dyn Clock>, config: Config) -> Self {
        Self { transport, config, clock, base_url: None }
    }

    /// Returns the endpoint URL (custom for testing, or marketplace-based).
    fn endpoint(&self) -> String {
        match &self.base_url {
            Some(base) => format!("{}{}", base, SEARCH_PATH),
            None => format!("https://{}{}", self.config.marketplace.host(), SEARCH_PATH),
        }
    }

    /// Runs one search call against the provider.
    ///
    /// Failures from signing, transport, or normalization propagate
    /// unchanged; a failed call has no partial result.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResult, PaapiError> {
        info!("Searching for: {}", query.keywords);

        let request = SearchRequest::build(query, &self.config.partner_tag);
        let body =
            serde_json::to_string(&request).expect("search request serialization cannot fail");

        let ctx = SigningContext {
            access_key_id: &self.config.access_key,
            secret_key: &self.config.secret_key,
            region: self.config.marketplace.region(),
            service: SERVICE_NAME,
            host: self.config.marketplace.host(),
            path: SEARCH_PATH,
            target: SEARCH_TARGET,
            timestamp: self.clock.now(),
        };
        let signature = sign(&ctx, &body);

        let signed = SignedRequest {
            url: self.endpoint(),
            headers: vec![
                ("Content-Encoding", CONTENT_ENCODING.to_string()),
                ("Content-Type", CONTENT_TYPE.to_string()),
                ("X-Amz-Date", signature.amz_date),
                ("X-Amz-Target", SEARCH_TARGET.to_string()),
                ("Authorization", signature.authorization),
                ("Accept", "application/json".to_string()),
            ],
            body,
        };

        let reply = self.transport.send(&signed).await?;
        debug!("Provider replied with status {}", reply.status);

        normalize(&reply.body, reply.status)
    }
}
