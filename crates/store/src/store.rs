//! Process-wide reference store.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use dashmap::DashMap;

use crate::error::{Result, StoreError};
use crate::snapshot::ChainSnapshot;

/// Per-chain reference snapshots shared by every request.
///
/// Each chain partition is an `Arc<ChainSnapshot>`. Publishing replaces the
/// whole `Arc`, so a reader that took a snapshot keeps a consistent view for
/// the duration of its request even while a refresh lands.
#[derive(Debug, Default)]
pub struct ReferenceStore {
    chains: DashMap<u64, Arc<ChainSnapshot>>,
    empty: Arc<ChainSnapshot>,
}

impl ReferenceStore {
    /// Create a store with no partitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the partition for `chain_id`.
    pub fn publish(&self, chain_id: u64, snapshot: ChainSnapshot) {
        self.chains.insert(chain_id, Arc::new(snapshot));
    }

    /// Current partition for `chain_id`, or an empty one if nothing has been
    /// published for that chain.
    pub fn snapshot(&self, chain_id: u64) -> Arc<ChainSnapshot> {
        self.chains
            .get(&chain_id)
            .map_or_else(|| Arc::clone(&self.empty), |entry| Arc::clone(entry.value()))
    }

    /// Chain IDs that currently have a partition, in ascending order.
    pub fn chain_ids(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self.chains.iter().map(|entry| *entry.key()).collect();
        ids.sort_unstable();
        ids
    }

    /// Build a store from a JSON document of the form
    /// `{ "<chain id>": <ChainSnapshot>, ... }`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: HashMap<String, ChainSnapshot> = serde_json::from_str(json)?;
        let store = Self::new();
        for (key, snapshot) in raw {
            let chain_id = key
                .trim()
                .parse::<u64>()
                .map_err(|_| StoreError::InvalidChainKey(key.clone()))?;
            store.publish(chain_id, snapshot);
        }
        Ok(store)
    }

    /// Load a store from a JSON snapshot file. See [`Self::from_json_str`].
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}
