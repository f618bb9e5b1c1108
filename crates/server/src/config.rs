//! Startup configuration: turns parsed CLI flags into a ready [`VaultService`].

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use alloy_primitives::Address;
use thiserror::Error;
use url::Url;
use ydaemon_rs_api::{
    Blacklist, ClientConfig, ReferenceStore, SchemaAssembler, SubgraphClient, VaultService,
};

use crate::cli::Cli;

/// Errors raised while building the service from configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Expected <chain>=<value>, got: {0}")]
    InvalidPair(String),

    #[error("Invalid chain ID: {0}")]
    InvalidChainId(String),

    #[error("Invalid value for chain {chain_id}: {message}")]
    InvalidValue { chain_id: u64, message: String },

    #[error("At least one subgraph endpoint must be configured (--subgraph <chain>=<url>)")]
    NoSubgraphs,

    #[error("Failed to load reference snapshot: {0}")]
    Store(#[from] ydaemon_rs_store::StoreError),

    #[error("Failed to build subgraph client: {0}")]
    Client(#[from] ydaemon_rs_api::ApiError),
}

/// A value bound to a chain, written `<chain>=<value>` on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainValue<T> {
    pub chain_id: u64,
    pub value: T,
}

impl<T> FromStr for ChainValue<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (chain, value) = s
            .split_once('=')
            .ok_or_else(|| ConfigError::InvalidPair(s.to_string()))?;
        let chain_id = chain
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidChainId(chain.to_string()))?;
        let value = value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidValue {
                chain_id,
                message: e.to_string(),
            })?;
        Ok(Self { chain_id, value })
    }
}

/// Build the subgraph client configuration.
pub fn client_config(subgraphs: &[ChainValue<Url>], timeout: Duration) -> Result<ClientConfig, ConfigError> {
    if subgraphs.is_empty() {
        return Err(ConfigError::NoSubgraphs);
    }
    Ok(subgraphs
        .iter()
        .fold(ClientConfig::new().with_timeout(timeout), |config, entry| {
            config.with_endpoint(entry.chain_id, entry.value.clone())
        }))
}

/// Build the per-chain blacklist.
pub fn blacklist(entries: &[ChainValue<Address>]) -> Blacklist {
    let mut blacklist = Blacklist::new();
    for entry in entries {
        blacklist.insert(entry.chain_id, entry.value);
    }
    blacklist
}

/// Build the vault service described by the command line.
pub fn build_service(cli: &Cli) -> Result<VaultService, ConfigError> {
    let config = client_config(&cli.subgraphs, Duration::from_secs(cli.subgraph_timeout_secs))?;
    let client = SubgraphClient::with_config(config)?;

    let store = match &cli.reference_snapshot {
        Some(path) => ReferenceStore::load_json(path)?,
        None => {
            tracing::warn!("no reference snapshot configured, serving subgraph data only");
            ReferenceStore::new()
        }
    };

    let blacklist = blacklist(&cli.blacklist);
    tracing::info!(
        chains = ?store.chain_ids(),
        blacklisted = blacklist.len(),
        "reference data loaded"
    );

    Ok(
        VaultService::new(client, Arc::new(store), blacklist)
            .with_assembler(SchemaAssembler::new(cli.icon_base_url.clone())),
    )
}
