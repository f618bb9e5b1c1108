//! GraphQL query definitions.

pub mod vault;

pub use vault::{build_vault_query, QueryBody, VaultQuery, VaultQueryData, MAX_STRATEGIES};
