//! Filters applied to subgraph results before assembly.
//!
//! [`StrategyCondition`] selects which of a vault's strategies appear in the
//! assembled view. Callers choose it through the `strategiesCondition` query
//! parameter; an unknown value falls back to [`StrategyCondition::All`].

pub mod strategy;

pub use strategy::StrategyCondition;
