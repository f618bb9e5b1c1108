//! yDaemon vault view library.
//!
//! This crate answers "give me the full view of one vault": it validates the
//! caller's chain ID and address, asks the chain's vaults subgraph for the
//! vault and up to [`MAX_STRATEGIES`] strategies, and merges the answer with
//! curated reference data from a [`ReferenceStore`].
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use url::Url;
//! use ydaemon_rs_api::{Blacklist, ClientConfig, ReferenceStore, SubgraphClient, VaultService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ydaemon_rs_api::ApiError> {
//!     let config = ClientConfig::new().with_endpoint(
//!         1,
//!         Url::parse("https://api.thegraph.com/subgraphs/name/rareweasel/yearn-vaults-v2-subgraph-mainnet").unwrap(),
//!     );
//!     let client = SubgraphClient::with_config(config)?;
//!     let service = VaultService::new(client, Arc::new(ReferenceStore::new()), Blacklist::new());
//!
//!     let view = service
//!         .get_vault("1", "0xdA816459F1AB5631232FE5e97a05BBBb94970c95", Some("inQueue"))
//!         .await?;
//!     assert!(view.strategies.iter().all(|s| s.in_queue));
//!
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! Every failure is an [`ApiError`]. Use [`ApiError::error_category()`] to
//! tell rejected input, missing vaults and upstream failures apart; missing
//! reference records are never errors.

pub mod client;
pub mod error;
pub mod filters;
pub mod queries;
pub mod schema;
pub mod service;
pub mod types;
pub mod validation;

// Re-export main types at crate root
pub use client::{ClientConfig, SubgraphClient, DEFAULT_TIMEOUT};
pub use error::{ApiError, ErrorCategory, Result};
pub use filters::StrategyCondition;
pub use queries::{build_vault_query, VaultQuery, MAX_STRATEGIES};
pub use schema::{
    ApyView, DetailsView, FeesView, MigrationView, ReferenceFacets, SchemaAssembler,
    StrategyView, TokenView, TvlView, VaultView, DEFAULT_ICON_BASE_URL,
};
pub use service::VaultService;
pub use types::{LatestUpdate, StrategyRef, SubgraphToken, SubgraphVault};
pub use validation::{validate, Blacklist, VaultRequest};

// Re-export the reference store so callers need a single dependency
pub use ydaemon_rs_store::{ChainSnapshot, ReferenceStore};

// Re-export alloy types for convenience
pub use alloy_chains::{Chain, NamedChain};
pub use alloy_primitives::Address;
