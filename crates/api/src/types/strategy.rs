//! Strategy references embedded in a subgraph vault.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use super::scalars::{deserialize_address, deserialize_flex_u64};

/// A strategy attached to a vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyRef {
    /// The strategy's contract address.
    #[serde(deserialize_with = "deserialize_address")]
    pub address: Address,
    /// On-chain strategy name.
    pub name: String,
    /// Whether the strategy sits in the vault's withdrawal queue.
    pub in_queue: bool,
    /// Maximum share of vault assets the strategy may borrow, in basis points.
    #[serde(deserialize_with = "deserialize_flex_u64")]
    pub debt_limit: u64,
}
