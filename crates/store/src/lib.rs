//! Reference data for yDaemon vault views.
//!
//! This crate holds the in-process lookup tables that supplement subgraph data:
//! vault metadata, token metadata, strategy metadata, historical APY and token
//! prices. Everything is partitioned by chain and keyed by [`Address`], so the
//! case of an address string never matters once it has been parsed.
//!
//! The request path only ever reads. Refresh pipelines build a complete
//! [`ChainSnapshot`] and hand it to [`ReferenceStore::publish`], which swaps the
//! whole partition at once.
//!
//! ```
//! use alloy_primitives::address;
//! use rust_decimal::Decimal;
//! use ydaemon_rs_store::{ChainSnapshot, PriceRecord, ReferenceStore};
//!
//! let usdc = address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");
//! let store = ReferenceStore::new();
//! store.publish(
//!     1,
//!     ChainSnapshot::new().with_price(PriceRecord::new(usdc, Decimal::ONE)),
//! );
//!
//! let snapshot = store.snapshot(1);
//! assert_eq!(snapshot.price(&usdc).map(|p| p.price_usd), Some(Decimal::ONE));
//! ```
//!
//! [`Address`]: alloy_primitives::Address

mod error;
mod records;
mod snapshot;
mod store;

pub use error::{Result, StoreError};
pub use records::{
    ApyComposite, ApyFees, ApyPoints, ApyRecord, MigrationMeta, PriceRecord, StrategyMeta,
    TokenMeta, VaultMeta,
};
pub use snapshot::ChainSnapshot;
pub use store::ReferenceStore;
