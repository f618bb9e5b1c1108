//! Single-vault subgraph query.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::types::scalars::lowercase_hex;
use crate::types::SubgraphVault;

/// Maximum number of strategies requested per vault.
///
/// Vaults with more strategies are silently truncated.
pub const MAX_STRATEGIES: usize = 40;

/// Query text for one vault, ready to POST to a subgraph endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultQuery {
    address: Address,
    text: String,
}

/// JSON body of a GraphQL POST request.
#[derive(Debug, Serialize)]
pub struct QueryBody<'a> {
    pub query: &'a str,
}

/// `data` member of the GraphQL response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct VaultQueryData {
    /// `null` when the subgraph has no vault with the requested id.
    #[serde(default)]
    pub vault: Option<SubgraphVault>,
}

impl VaultQuery {
    /// The vault this query asks for.
    pub fn address(&self) -> Address {
        self.address
    }

    /// The GraphQL document.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Request body for this query.
    pub fn body(&self) -> QueryBody<'_> {
        QueryBody { query: &self.text }
    }
}

/// Build the query for one vault.
///
/// The subgraph indexes entities by lower-case address, so the id is always
/// rendered lower-case regardless of how the caller spelled it.
pub fn build_vault_query(address: &Address) -> VaultQuery {
    let id = lowercase_hex(address);
    let text = format!(
        r#"{{
	vault(id: "{id}") {{
		id
		activation
		apiVersion
		classification
		managementFeeBps
		performanceFeeBps
		balanceTokens
		latestUpdate {{
			timestamp
		}}
		shareToken {{
			name
			symbol
			id
			decimals
		}}
		token {{
			name
			symbol
			id
			decimals
		}}
		strategies(first: {MAX_STRATEGIES}) {{
			address
			name
			inQueue
			debtLimit
		}}
	}}
}}"#
    );

    VaultQuery {
        address: *address,
        text,
    }
}
