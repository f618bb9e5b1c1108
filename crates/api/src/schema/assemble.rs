//! Merge of subgraph data and reference facets into a [`VaultView`].

use alloy_primitives::{Address, U256};
use rust_decimal::Decimal;
use ydaemon_rs_store::TokenMeta;

use super::facets::ReferenceFacets;
use super::view::{
    ApyView, DetailsView, FeesView, MigrationView, StrategyView, TokenView, TvlView, VaultView,
};
use crate::types::{StrategyRef, SubgraphToken, SubgraphVault};

/// Default base URL for token icons.
pub const DEFAULT_ICON_BASE_URL: &str =
    "https://raw.githubusercontent.com/yearn/yearn-assets/master/icons/multichain-tokens";

/// Largest scale a [`Decimal`] can carry.
const MAX_SCALE: usize = 28;

/// Builds vault views. Holds no state besides presentation settings, so
/// assembling the same inputs twice gives the same view.
#[derive(Debug, Clone)]
pub struct SchemaAssembler {
    icon_base_url: String,
}

impl Default for SchemaAssembler {
    fn default() -> Self {
        Self::new(DEFAULT_ICON_BASE_URL)
    }
}

impl SchemaAssembler {
    /// Create an assembler rendering icons under `icon_base_url`.
    pub fn new(icon_base_url: impl Into<String>) -> Self {
        let icon_base_url = icon_base_url.into().trim_end_matches('/').to_string();
        Self { icon_base_url }
    }

    /// Icon URL for a token.
    pub fn icon_url(&self, chain_id: u64, address: &Address) -> String {
        format!("{}/{chain_id}/{address}/logo-128.png", self.icon_base_url)
    }

    /// Assemble the view for one vault.
    ///
    /// `strategies` is the already filtered subset of `vault.strategies`, in
    /// subgraph order. Missing facets fall back to subgraph values or zeros.
    pub fn assemble(
        &self,
        chain_id: u64,
        vault: &SubgraphVault,
        strategies: &[&StrategyRef],
        facets: &ReferenceFacets<'_>,
    ) -> VaultView {
        let share_token = self.token_view(chain_id, &vault.share_token, facets.share_token);
        let token = self.token_view(chain_id, &vault.token, facets.token);
        let meta = facets.vault;

        let display_name = pick(
            meta.and_then(|m| m.display_name.as_deref()),
            &share_token.display_name,
        );
        let display_symbol = pick(
            meta.and_then(|m| m.display_symbol.as_deref()),
            &share_token.display_symbol,
        );
        let description = pick(
            meta.and_then(|m| m.description.as_deref()),
            &share_token.description,
        );

        let details = meta.map_or_else(DetailsView::default, |m| DetailsView {
            order: m.order,
            hide_always: m.hide_always,
            retired: m.retired,
            deposits_disabled: m.deposits_disabled,
            withdrawals_disabled: m.withdrawals_disabled,
            allow_zap_in: m.allow_zap_in,
            allow_zap_out: m.allow_zap_out,
        });

        let migration = match meta.and_then(|m| m.migration.as_ref()) {
            Some(m) => MigrationView {
                available: m.available,
                address: m.target.unwrap_or(vault.address),
                contract: m.contract,
            },
            None => MigrationView {
                available: false,
                address: vault.address,
                contract: None,
            },
        };

        VaultView {
            address: vault.address,
            chain_id,
            inception: vault.activation,
            updated: vault.updated_at().unwrap_or_default(),
            version: vault.api_version.clone(),
            classification: vault.classification.clone(),
            name: vault.share_token.name.clone(),
            display_name,
            symbol: vault.share_token.symbol.clone(),
            display_symbol,
            description,
            icon: self.icon_url(chain_id, &vault.address),
            decimals: vault.share_token.decimals,
            tvl: tvl_view(vault.balance_tokens, vault.token.decimals, facets),
            fees: FeesView {
                management_bps: vault.management_fee_bps,
                performance_bps: vault.performance_fee_bps,
            },
            apy: facets.apy.map(ApyView::from).unwrap_or_default(),
            strategies: strategies
                .iter()
                .map(|s| strategy_view(s, facets))
                .collect(),
            details,
            migration,
            share_token,
            token,
        }
    }

    fn token_view(&self, chain_id: u64, token: &SubgraphToken, meta: Option<&TokenMeta>) -> TokenView {
        TokenView {
            address: token.address,
            name: token.name.clone(),
            display_name: pick(meta.and_then(|m| m.name.as_deref()), &token.name),
            symbol: token.symbol.clone(),
            display_symbol: pick(meta.and_then(|m| m.symbol.as_deref()), &token.symbol),
            description: pick(meta.and_then(|m| m.description.as_deref()), ""),
            website: pick(meta.and_then(|m| m.website.as_deref()), ""),
            categories: meta.map(|m| m.categories.clone()).unwrap_or_default(),
            decimals: token.decimals,
            icon: self.icon_url(chain_id, &token.address),
        }
    }
}

fn strategy_view(strategy: &StrategyRef, facets: &ReferenceFacets<'_>) -> StrategyView {
    let meta = facets.strategy(&strategy.address);
    StrategyView {
        address: strategy.address,
        name: strategy.name.clone(),
        display_name: pick(meta.and_then(|m| m.name.as_deref()), &strategy.name),
        description: pick(meta.and_then(|m| m.description.as_deref()), ""),
        protocols: meta.map(|m| m.protocols.clone()).unwrap_or_default(),
        in_queue: strategy.in_queue,
        debt_limit: strategy.debt_limit,
    }
}

fn tvl_view(total_assets: U256, decimals: u64, facets: &ReferenceFacets<'_>) -> TvlView {
    let price = facets.price.map_or(Decimal::ZERO, |p| p.price_usd);
    let tvl = humanize(total_assets, decimals)
        .and_then(|amount| amount.checked_mul(price))
        .unwrap_or_default();

    TvlView {
        total_assets,
        price,
        tvl: tvl.normalize(),
    }
}

/// Curated value if present and non-blank, otherwise the fallback.
fn pick(curated: Option<&str>, fallback: &str) -> String {
    match curated.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => fallback.to_string(),
    }
}

/// Convert a raw token amount to whole tokens.
///
/// Digits beyond [`Decimal`] precision are dropped from the right. Returns
/// `None` only when the whole amount exceeds the [`Decimal`] range.
fn humanize(amount: U256, decimals: u64) -> Option<Decimal> {
    let digits = amount.to_string();
    let decimals = usize::try_from(decimals).ok()?;
    let excess = digits
        .len()
        .saturating_sub(MAX_SCALE)
        .max(decimals.saturating_sub(MAX_SCALE));
    if excess >= digits.len() {
        return Some(Decimal::ZERO);
    }

    let mantissa: i128 = digits[..digits.len() - excess].parse().ok()?;
    if decimals >= excess {
        let scale = u32::try_from(decimals - excess).ok()?;
        return Decimal::try_from_i128_with_scale(mantissa, scale).ok();
    }

    let mut value = Decimal::try_from_i128_with_scale(mantissa, 0).ok()?;
    for _ in 0..excess - decimals {
        value = value.checked_mul(Decimal::TEN)?;
    }
    Some(value)
}
