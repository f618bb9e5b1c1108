//! Immutable per-chain reference snapshot.

use std::collections::HashMap;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::records::{ApyRecord, PriceRecord, StrategyMeta, TokenMeta, VaultMeta};

/// All reference records for one chain, keyed by contract address.
///
/// A snapshot is built once by a refresh pipeline and then only read. On the
/// wire it is a set of record lists; each record's own `address` becomes its
/// key, so a later duplicate replaces an earlier one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "SnapshotLists", into = "SnapshotLists")]
pub struct ChainSnapshot {
    vaults: HashMap<Address, VaultMeta>,
    tokens: HashMap<Address, TokenMeta>,
    strategies: HashMap<Address, StrategyMeta>,
    apy: HashMap<Address, ApyRecord>,
    prices: HashMap<Address, PriceRecord>,
}

impl ChainSnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vault(mut self, meta: VaultMeta) -> Self {
        self.vaults.insert(meta.address, meta);
        self
    }

    pub fn with_token(mut self, meta: TokenMeta) -> Self {
        self.tokens.insert(meta.address, meta);
        self
    }

    pub fn with_strategy(mut self, meta: StrategyMeta) -> Self {
        self.strategies.insert(meta.address, meta);
        self
    }

    pub fn with_apy(mut self, apy: ApyRecord) -> Self {
        self.apy.insert(apy.address, apy);
        self
    }

    pub fn with_price(mut self, price: PriceRecord) -> Self {
        self.prices.insert(price.address, price);
        self
    }

    /// Vault metadata for a vault address.
    pub fn vault(&self, address: &Address) -> Option<&VaultMeta> {
        self.vaults.get(address)
    }

    /// Token metadata for a token address.
    pub fn token(&self, address: &Address) -> Option<&TokenMeta> {
        self.tokens.get(address)
    }

    /// Strategy metadata for a strategy address.
    pub fn strategy(&self, address: &Address) -> Option<&StrategyMeta> {
        self.strategies.get(address)
    }

    /// APY record for a vault address.
    pub fn apy(&self, address: &Address) -> Option<&ApyRecord> {
        self.apy.get(address)
    }

    /// Price record for a token address.
    pub fn price(&self, address: &Address) -> Option<&PriceRecord> {
        self.prices.get(address)
    }

    /// Whether the snapshot holds no records at all.
    pub fn is_empty(&self) -> bool {
        self.vaults.is_empty()
            && self.tokens.is_empty()
            && self.strategies.is_empty()
            && self.apy.is_empty()
            && self.prices.is_empty()
    }
}

/// Serialized form of a [`ChainSnapshot`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct SnapshotLists {
    vaults: Vec<VaultMeta>,
    tokens: Vec<TokenMeta>,
    strategies: Vec<StrategyMeta>,
    apy: Vec<ApyRecord>,
    prices: Vec<PriceRecord>,
}

impl From<SnapshotLists> for ChainSnapshot {
    fn from(lists: SnapshotLists) -> Self {
        let mut snapshot = ChainSnapshot::new();
        snapshot.vaults = lists.vaults.into_iter().map(|v| (v.address, v)).collect();
        snapshot.tokens = lists.tokens.into_iter().map(|t| (t.address, t)).collect();
        snapshot.strategies = lists.strategies.into_iter().map(|s| (s.address, s)).collect();
        snapshot.apy = lists.apy.into_iter().map(|a| (a.address, a)).collect();
        snapshot.prices = lists.prices.into_iter().map(|p| (p.address, p)).collect();
        snapshot
    }
}

impl From<ChainSnapshot> for SnapshotLists {
    fn from(snapshot: ChainSnapshot) -> Self {
        Self {
            vaults: snapshot.vaults.into_values().collect(),
            tokens: snapshot.tokens.into_values().collect(),
            strategies: snapshot.strategies.into_values().collect(),
            apy: snapshot.apy.into_values().collect(),
            prices: snapshot.prices.into_values().collect(),
        }
    }
}
