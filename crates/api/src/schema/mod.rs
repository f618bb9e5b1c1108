//! Vault view assembly.
//!
//! [`ReferenceFacets::lookup`] gathers whatever curated records the reference
//! store holds for a subgraph vault; [`SchemaAssembler::assemble`] merges them
//! into a [`VaultView`]. Assembly never fails: a missing facet only changes
//! which fallback value ends up in the view.

pub mod assemble;
pub mod facets;
pub mod view;

pub use assemble::{SchemaAssembler, DEFAULT_ICON_BASE_URL};
pub use facets::ReferenceFacets;
pub use view::{
    ApyView, DetailsView, FeesView, MigrationView, StrategyView, TokenView, TvlView, VaultView,
};
