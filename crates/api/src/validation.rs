//! Caller input validation.
//!
//! Raw path parameters become a [`VaultRequest`] here and nowhere else. Parsing
//! to [`Address`] is the single normalisation step: every later lookup uses the
//! parsed bytes, so `0xABC…` and `0xabc…` can never diverge.

use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use alloy_chains::Chain;
use alloy_primitives::Address;

use crate::error::{ApiError, Result};

/// A validated request for one vault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaultRequest {
    pub chain: Chain,
    pub address: Address,
}

/// Per-chain set of addresses that must never be served.
#[derive(Debug, Clone, Default)]
pub struct Blacklist {
    chains: HashMap<u64, HashSet<Address>>,
}

impl Blacklist {
    /// Create an empty blacklist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add addresses for a chain.
    pub fn with_addresses<I>(mut self, chain_id: u64, addresses: I) -> Self
    where
        I: IntoIterator<Item = Address>,
    {
        self.chains.entry(chain_id).or_default().extend(addresses);
        self
    }

    /// Add a single address for a chain.
    pub fn insert(&mut self, chain_id: u64, address: Address) {
        self.chains.entry(chain_id).or_default().insert(address);
    }

    /// Whether `address` is blacklisted on `chain_id`.
    pub fn contains(&self, chain_id: u64, address: &Address) -> bool {
        self.chains
            .get(&chain_id)
            .is_some_and(|set| set.contains(address))
    }

    /// Total number of blacklisted entries across chains.
    pub fn len(&self) -> usize {
        self.chains.values().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parse a chain ID path parameter.
///
/// Only plain decimal digits are accepted: no sign, no surrounding whitespace.
pub fn parse_chain_id(raw: &str) -> Result<Chain> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::InvalidChainId(raw.to_string()));
    }

    raw.parse::<u64>()
        .map(Chain::from_id)
        .map_err(|_| ApiError::InvalidChainId(raw.to_string()))
}

/// Parse a vault address path parameter. Casing is not significant.
pub fn parse_vault_address(raw: &str) -> Result<Address> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::InvalidAddress(raw.to_string()));
    }
    Address::from_str(trimmed).map_err(|_| ApiError::InvalidAddress(raw.to_string()))
}

/// Validate raw caller input: chain ID first, then address syntax, then the
/// blacklist.
pub fn validate(raw_chain_id: &str, raw_address: &str, blacklist: &Blacklist) -> Result<VaultRequest> {
    let chain = parse_chain_id(raw_chain_id)?;
    let address = parse_vault_address(raw_address)?;

    if blacklist.contains(chain.id(), &address) {
        return Err(ApiError::BlacklistedAddress {
            address,
            chain_id: chain.id(),
        });
    }

    Ok(VaultRequest { chain, address })
}
