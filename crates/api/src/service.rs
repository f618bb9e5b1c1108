//! End-to-end vault view pipeline.

use std::sync::Arc;

use ydaemon_rs_store::ReferenceStore;

use crate::client::SubgraphClient;
use crate::error::{ErrorCategory, Result};
use crate::filters::StrategyCondition;
use crate::queries::build_vault_query;
use crate::schema::{ReferenceFacets, SchemaAssembler, VaultView};
use crate::validation::{validate, Blacklist, VaultRequest};

/// Serves vault views: validation, one subgraph call, reference lookups,
/// strategy filtering and assembly.
///
/// The service only reads shared state, so a single instance behind an
/// `Arc` serves any number of concurrent requests.
#[derive(Debug, Clone)]
pub struct VaultService {
    client: SubgraphClient,
    store: Arc<ReferenceStore>,
    blacklist: Blacklist,
    assembler: SchemaAssembler,
}

impl VaultService {
    /// Create a service with the default assembler.
    pub fn new(client: SubgraphClient, store: Arc<ReferenceStore>, blacklist: Blacklist) -> Self {
        Self {
            client,
            store,
            blacklist,
            assembler: SchemaAssembler::default(),
        }
    }

    /// Use a custom assembler (e.g. a different icon host).
    pub fn with_assembler(mut self, assembler: SchemaAssembler) -> Self {
        self.assembler = assembler;
        self
    }

    /// The reference store backing this service.
    pub fn store(&self) -> &Arc<ReferenceStore> {
        &self.store
    }

    pub fn blacklist(&self) -> &Blacklist {
        &self.blacklist
    }

    /// Serve one vault from raw caller input.
    ///
    /// `condition` is the raw `strategiesCondition` value; anything
    /// unrecognised keeps every strategy.
    pub async fn get_vault(
        &self,
        raw_chain_id: &str,
        raw_address: &str,
        condition: Option<&str>,
    ) -> Result<VaultView> {
        let request = validate(raw_chain_id, raw_address, &self.blacklist)?;
        self.fetch(request, StrategyCondition::parse_lenient(condition))
            .await
    }

    /// Serve one already validated request.
    pub async fn fetch(&self, request: VaultRequest, condition: StrategyCondition) -> Result<VaultView> {
        let chain_id = request.chain.id();
        let query = build_vault_query(&request.address);

        let vault = self
            .client
            .get_vault(request.chain, &query)
            .await
            .inspect_err(|e| {
                if e.error_category() == ErrorCategory::Upstream {
                    tracing::error!(
                        chain = %request.chain,
                        address = %request.address,
                        error = %e,
                        "Impossible to fetch subgraph"
                    );
                }
            })?;

        let snapshot = self.store.snapshot(chain_id);
        let facets = ReferenceFacets::lookup(&snapshot, &vault);
        let strategies = condition.apply(&vault.strategies);

        tracing::debug!(
            chain_id,
            address = %request.address,
            %condition,
            strategies = strategies.len(),
            "assembling vault view"
        );

        Ok(self
            .assembler
            .assemble(chain_id, &vault, &strategies, &facets))
    }
}
