//! Vault record as returned by the vaults subgraph.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use super::scalars::{
    deserialize_address, deserialize_flex_bigint, deserialize_flex_u64,
    deserialize_optional_flex_u64,
};
use super::strategy::StrategyRef;
use super::token::SubgraphToken;
use crate::queries::vault::MAX_STRATEGIES;

/// On-chain attributes of a single vault, with its tokens and strategies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubgraphVault {
    /// The vault's contract address (the subgraph entity `id`).
    #[serde(rename = "id", deserialize_with = "deserialize_address")]
    pub address: Address,
    /// Block timestamp the vault was activated at.
    #[serde(deserialize_with = "deserialize_flex_u64")]
    pub activation: u64,
    /// Vault contract API version (e.g., "0.4.3").
    pub api_version: String,
    /// Release classification (e.g., "Released", "Experimental").
    pub classification: String,
    /// Management fee in basis points.
    #[serde(deserialize_with = "deserialize_flex_u64")]
    pub management_fee_bps: u64,
    /// Performance fee in basis points.
    #[serde(deserialize_with = "deserialize_flex_u64")]
    pub performance_fee_bps: u64,
    /// Total assets held, in the underlying token's smallest unit.
    #[serde(deserialize_with = "deserialize_flex_bigint")]
    pub balance_tokens: U256,
    /// Latest indexed update.
    #[serde(default)]
    pub latest_update: Option<LatestUpdate>,
    /// The vault's share token.
    pub share_token: SubgraphToken,
    /// The vault's underlying (want) token.
    pub token: SubgraphToken,
    /// Strategies, at most [`MAX_STRATEGIES`].
    #[serde(default)]
    pub strategies: Vec<StrategyRef>,
}

/// Timestamp of the last indexed vault update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestUpdate {
    #[serde(default, deserialize_with = "deserialize_optional_flex_u64")]
    pub timestamp: Option<u64>,
}

impl SubgraphVault {
    /// Timestamp of the latest indexed update, if the subgraph has one.
    pub fn updated_at(&self) -> Option<u64> {
        self.latest_update.and_then(|u| u.timestamp)
    }

    /// Drop strategies beyond the query cap. The query already asks for at
    /// most [`MAX_STRATEGIES`]; this keeps the bound even if an endpoint
    /// ignores `first`.
    pub(crate) fn enforce_strategy_cap(&mut self) {
        self.strategies.truncate(MAX_STRATEGIES);
    }
}
