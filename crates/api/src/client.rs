//! Subgraph client.

use std::collections::HashMap;
use std::time::Duration;

use alloy_chains::Chain;
use graphql_client::Response;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{ApiError, Result};
use crate::queries::vault::{QueryBody, VaultQuery, VaultQueryData};
use crate::types::SubgraphVault;

/// Default timeout for one subgraph request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the subgraph client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Subgraph endpoint per chain ID.
    pub endpoints: HashMap<u64, Url>,
    /// Timeout applied to each request.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoints: HashMap::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the subgraph endpoint for a chain.
    pub fn with_endpoint(mut self, chain_id: u64, url: Url) -> Self {
        self.endpoints.insert(chain_id, url);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Endpoint configured for a chain, if any.
    pub fn endpoint(&self, chain_id: u64) -> Option<&Url> {
        self.endpoints.get(&chain_id)
    }
}

/// Client for the per-chain vaults subgraphs.
///
/// Every call is a single attempt. Failures are returned to the caller as-is.
#[derive(Debug, Clone)]
pub struct SubgraphClient {
    http_client: Client,
    config: ClientConfig,
}

impl SubgraphClient {
    /// Create a new client with custom configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http_client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http_client,
            config,
        })
    }

    /// The client's configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resolve the subgraph endpoint for a chain.
    pub fn endpoint(&self, chain: Chain) -> Result<&Url> {
        self.config
            .endpoint(chain.id())
            .ok_or(ApiError::UnsupportedChain(chain.id()))
    }

    /// Execute a GraphQL query.
    async fn execute<T: DeserializeOwned>(&self, endpoint: &Url, body: &QueryBody<'_>) -> Result<T> {
        tracing::debug!(%endpoint, "querying subgraph");

        let response = self
            .http_client
            .post(endpoint.as_str())
            .json(body)
            .send()
            .await?
            .error_for_status()?;

        // Read the body first so transport failures and decode failures stay distinct
        let text = response.text().await?;
        let response_body: Response<T> =
            serde_json::from_str(&text).map_err(|e| ApiError::UpstreamMalformed(e.to_string()))?;

        if let Some(errors) = response_body.errors {
            if !errors.is_empty() {
                return Err(ApiError::UpstreamMalformed(
                    errors
                        .iter()
                        .map(|e| e.message.clone())
                        .collect::<Vec<_>>()
                        .join("; "),
                ));
            }
        }

        response_body
            .data
            .ok_or_else(|| ApiError::UpstreamMalformed("No data in response".to_string()))
    }

    /// Fetch one vault from the chain's subgraph.
    pub async fn get_vault(&self, chain: Chain, query: &VaultQuery) -> Result<SubgraphVault> {
        let endpoint = self.endpoint(chain)?;
        let data: VaultQueryData = self.execute(endpoint, &query.body()).await?;

        let mut vault = data.vault.ok_or(ApiError::VaultNotFound {
            address: query.address(),
            chain_id: chain.id(),
        })?;
        vault.enforce_strategy_cap();
        Ok(vault)
    }
}
