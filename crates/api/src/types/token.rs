//! ERC-20 token records embedded in a subgraph vault.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use super::scalars::{deserialize_address, deserialize_flex_u64};

/// A token as indexed by the vaults subgraph (share token or underlying).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubgraphToken {
    /// The token's contract address (the subgraph entity `id`).
    #[serde(rename = "id", deserialize_with = "deserialize_address")]
    pub address: Address,
    /// On-chain name.
    pub name: String,
    /// On-chain symbol.
    pub symbol: String,
    /// Token decimals.
    #[serde(deserialize_with = "deserialize_flex_u64")]
    pub decimals: u64,
}
