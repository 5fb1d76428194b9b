//! Search command implementation.

use crate::config::Config;
use crate::format::Formatter;
use crate::paapi::models::SearchQuery;
use crate::paapi::transport::Transport;
use crate::paapi::PaapiClient;
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Executes a product search.
pub struct SearchCommand {
    config: Config,
}

impl SearchCommand {
    /// Creates a new search command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Executes the search and returns formatted output.
    pub async fn execute(&self, query: &SearchQuery) -> Result<String> {
        let client =
            PaapiClient::new(self.config.clone()).context("Failed to create HTTP client")?;

        self.execute_with_client(&client, query).await
    }

    /// Executes the search with a provided client (for testing).
    pub async fn execute_with_client<T: Transport>(
        &self,
        client: &PaapiClient<T>,
        query: &SearchQuery,
    ) -> Result<String> {
        let result = client.search(query).await?;

        info!("Found {} products", result.count());
        if let Some(request_id) = &result.request_id {
            debug!("Provider request id: {}", request_id);
        }

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_products(&result.products))
    }
}
