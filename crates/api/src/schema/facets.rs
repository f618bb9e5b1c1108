//! Reference-store lookups for one vault.

use std::collections::HashMap;

use alloy_primitives::Address;
use ydaemon_rs_store::{ApyRecord, ChainSnapshot, PriceRecord, StrategyMeta, TokenMeta, VaultMeta};

use crate::types::SubgraphVault;

/// Reference records matching one subgraph vault. Any of them may be missing.
#[derive(Debug, Clone, Default)]
pub struct ReferenceFacets<'a> {
    /// Keyed by the vault address.
    pub vault: Option<&'a VaultMeta>,
    /// Keyed by the share token address.
    pub share_token: Option<&'a TokenMeta>,
    /// Keyed by the underlying token address.
    pub token: Option<&'a TokenMeta>,
    /// Keyed by the vault address.
    pub apy: Option<&'a ApyRecord>,
    /// Keyed by the underlying token address.
    pub price: Option<&'a PriceRecord>,
    /// Keyed by each strategy address; only hits are stored.
    pub strategies: HashMap<Address, &'a StrategyMeta>,
}

impl<'a> ReferenceFacets<'a> {
    /// Look up every facet using the addresses found in the subgraph record.
    pub fn lookup(snapshot: &'a ChainSnapshot, vault: &SubgraphVault) -> Self {
        let strategies = vault
            .strategies
            .iter()
            .filter_map(|s| snapshot.strategy(&s.address).map(|meta| (s.address, meta)))
            .collect();

        Self {
            vault: snapshot.vault(&vault.address),
            share_token: snapshot.token(&vault.share_token.address),
            token: snapshot.token(&vault.token.address),
            apy: snapshot.apy(&vault.address),
            price: snapshot.price(&vault.token.address),
            strategies,
        }
    }

    /// Metadata for one strategy.
    pub fn strategy(&self, address: &Address) -> Option<&'a StrategyMeta> {
        self.strategies.get(address).copied()
    }
}
