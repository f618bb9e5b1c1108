//! Subgraph record types.

pub mod scalars;
pub mod strategy;
pub mod token;
pub mod vault;

pub use strategy::StrategyRef;
pub use token::SubgraphToken;
pub use vault::{LatestUpdate, SubgraphVault};
