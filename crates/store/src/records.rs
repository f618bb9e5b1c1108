//! Reference record types.
//!
//! Each record carries the address it is keyed by. A record being absent is a
//! normal state: consumers fall back to subgraph data or zero values.

use alloy_primitives::Address;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Curated metadata for a vault.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultMeta {
    /// Vault contract address.
    pub address: Address,
    /// Name shown instead of the share token name.
    pub display_name: Option<String>,
    /// Symbol shown instead of the share token symbol.
    pub display_symbol: Option<String>,
    /// Free-form description or comment.
    pub description: Option<String>,
    /// Sort order used by frontends.
    pub order: u32,
    /// Never list this vault.
    pub hide_always: bool,
    /// Vault is retired and should not receive deposits.
    pub retired: bool,
    /// Deposits are disabled in the UI.
    pub deposits_disabled: bool,
    /// Withdrawals are disabled in the UI.
    pub withdrawals_disabled: bool,
    /// Zapping into the vault is allowed.
    pub allow_zap_in: bool,
    /// Zapping out of the vault is allowed.
    pub allow_zap_out: bool,
    /// Migration to a newer vault, if any.
    pub migration: Option<MigrationMeta>,
}

/// Migration path out of a vault.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrationMeta {
    /// Whether a migration is currently offered.
    pub available: bool,
    /// The vault users migrate into.
    pub target: Option<Address>,
    /// The migrator contract.
    pub contract: Option<Address>,
}

/// Curated metadata for an ERC-20 token.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenMeta {
    /// Token contract address.
    pub address: Address,
    /// Human-friendly name (e.g., "Curve stETH Pool").
    pub name: Option<String>,
    /// Human-friendly symbol.
    pub symbol: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub categories: Vec<String>,
}

/// Curated metadata for a strategy.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyMeta {
    /// Strategy contract address.
    pub address: Address,
    /// Human-friendly strategy name.
    pub name: Option<String>,
    pub description: Option<String>,
    /// Protocols the strategy deploys into.
    pub protocols: Vec<String>,
}

/// Historical yield figures for a vault, computed out of band.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApyRecord {
    /// Vault contract address.
    pub address: Address,
    /// How the figures were computed (e.g., "v2:averaged", "crv").
    #[serde(rename = "type")]
    pub apy_type: String,
    /// Gross APR before fees (as decimal, e.g., 0.05 = 5%).
    pub gross_apr: Decimal,
    /// Net APY after fees (as decimal).
    pub net_apy: Decimal,
    pub fees: ApyFees,
    pub points: ApyPoints,
    /// Boosted yield components, only for gauge-based vaults.
    pub composite: Option<ApyComposite>,
}

/// Fees used when the APY was computed (as decimals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApyFees {
    pub performance: Decimal,
    pub management: Decimal,
    pub withdrawal: Decimal,
    pub keep_crv: Decimal,
}

/// Net APY sampled over past windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApyPoints {
    pub week_ago: Decimal,
    pub month_ago: Decimal,
    pub inception: Decimal,
}

/// Boosted yield breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApyComposite {
    pub boost: Decimal,
    pub pool_apy: Decimal,
    pub boosted_apr: Decimal,
    pub base_apr: Decimal,
}

/// USD price of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Token contract address.
    pub address: Address,
    /// Price of one whole token in USD.
    pub price_usd: Decimal,
}

impl PriceRecord {
    /// Create a price record.
    pub fn new(address: Address, price_usd: Decimal) -> Self {
        Self { address, price_usd }
    }
}
