//! Assembled vault view returned to callers.

use alloy_primitives::{Address, U256};
use rust_decimal::Decimal;
use serde::Serialize;
use ydaemon_rs_store::{ApyComposite, ApyFees, ApyPoints, ApyRecord};

use crate::types::scalars::{
    serialize_checksummed, serialize_optional_checksummed, serialize_u256_decimal,
};

/// Denormalized view of one vault.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VaultView {
    /// The vault's contract address.
    #[serde(serialize_with = "serialize_checksummed")]
    pub address: Address,
    pub chain_id: u64,
    /// Activation timestamp.
    pub inception: u64,
    /// Latest indexed update timestamp, 0 if unknown.
    pub updated: u64,
    /// Vault contract API version.
    pub version: String,
    pub classification: String,
    /// On-chain share token name.
    pub name: String,
    pub display_name: String,
    /// On-chain share token symbol.
    pub symbol: String,
    pub display_symbol: String,
    pub description: String,
    pub icon: String,
    pub decimals: u64,
    /// The vault's share token.
    pub share_token: TokenView,
    /// The vault's underlying token.
    pub token: TokenView,
    pub tvl: TvlView,
    /// Fees charged by the vault contract.
    pub fees: FeesView,
    pub apy: ApyView,
    pub strategies: Vec<StrategyView>,
    pub details: DetailsView,
    pub migration: MigrationView,
}

/// A token merged with its curated metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenView {
    #[serde(serialize_with = "serialize_checksummed")]
    pub address: Address,
    pub name: String,
    pub display_name: String,
    pub symbol: String,
    pub display_symbol: String,
    pub description: String,
    pub website: String,
    pub categories: Vec<String>,
    pub decimals: u64,
    pub icon: String,
}

/// Total value locked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TvlView {
    /// Raw balance in the underlying token's smallest unit.
    #[serde(serialize_with = "serialize_u256_decimal")]
    pub total_assets: U256,
    /// USD price of one underlying token, 0 if unknown.
    pub price: Decimal,
    /// Total assets in USD, 0 if the price is unknown.
    pub tvl: Decimal,
}

/// On-chain fee parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeesView {
    pub management_bps: u64,
    pub performance_bps: u64,
}

/// Historical yield, all zero when no APY record is cached.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ApyView {
    #[serde(rename = "type")]
    pub apy_type: String,
    pub gross_apr: Decimal,
    pub net_apy: Decimal,
    pub fees: ApyFees,
    pub points: ApyPoints,
    pub composite: ApyComposite,
}

impl From<&ApyRecord> for ApyView {
    fn from(record: &ApyRecord) -> Self {
        Self {
            apy_type: record.apy_type.clone(),
            gross_apr: record.gross_apr,
            net_apy: record.net_apy,
            fees: record.fees,
            points: record.points,
            composite: record.composite.unwrap_or_default(),
        }
    }
}

/// A strategy merged with its curated metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyView {
    #[serde(serialize_with = "serialize_checksummed")]
    pub address: Address,
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub protocols: Vec<String>,
    pub in_queue: bool,
    /// Debt limit in basis points.
    pub debt_limit: u64,
}

/// Display switches from vault metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DetailsView {
    pub order: u32,
    pub hide_always: bool,
    pub retired: bool,
    pub deposits_disabled: bool,
    pub withdrawals_disabled: bool,
    pub allow_zap_in: bool,
    pub allow_zap_out: bool,
}

/// Migration offer. Without one, `address` is the vault itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MigrationView {
    pub available: bool,
    #[serde(serialize_with = "serialize_checksummed")]
    pub address: Address,
    #[serde(serialize_with = "serialize_optional_checksummed")]
    pub contract: Option<Address>,
}
