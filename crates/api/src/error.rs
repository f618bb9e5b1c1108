//! Error types for the vault view pipeline.

use alloy_primitives::Address;
use thiserror::Error;

/// Errors that can occur while serving a vault view.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Chain ID is not an unsigned integer.
    #[error("Invalid chain ID: {0}")]
    InvalidChainId(String),

    /// Address is empty or not a 20-byte hex string.
    #[error("Invalid address format: {0}")]
    InvalidAddress(String),

    /// Address is on the chain's blacklist.
    #[error("Address {address} is blacklisted on chain {chain_id}")]
    BlacklistedAddress { address: Address, chain_id: u64 },

    /// No subgraph endpoint is configured for the chain.
    #[error("Unsupported chain: {0}")]
    UnsupportedChain(u64),

    /// The subgraph answered but holds no vault at this address.
    #[error("Vault not found: {address} on chain {chain_id}")]
    VaultNotFound { address: Address, chain_id: u64 },

    /// The subgraph could not be reached or answered with a non-success status.
    #[error("Subgraph request failed: {0}")]
    UpstreamUnavailable(#[from] reqwest::Error),

    /// The subgraph answered with something that is not the expected vault shape.
    #[error("Malformed subgraph response: {0}")]
    UpstreamMalformed(String),
}

/// High-level classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The caller's input was rejected before contacting the subgraph.
    Validation,
    /// The requested vault does not exist upstream.
    NotFound,
    /// The subgraph failed or returned garbage.
    Upstream,
}

impl ApiError {
    /// Classify this error.
    pub fn error_category(&self) -> ErrorCategory {
        match self {
            Self::InvalidChainId(_)
            | Self::InvalidAddress(_)
            | Self::BlacklistedAddress { .. }
            | Self::UnsupportedChain(_) => ErrorCategory::Validation,
            Self::VaultNotFound { .. } => ErrorCategory::NotFound,
            Self::UpstreamUnavailable(_) | Self::UpstreamMalformed(_) => ErrorCategory::Upstream,
        }
    }
}

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
