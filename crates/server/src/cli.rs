//! Command line and environment configuration using clap.

use std::path::PathBuf;

use alloy_primitives::Address;
use clap::Parser;
use url::Url;
use ydaemon_rs_api::DEFAULT_ICON_BASE_URL;

use crate::config::ChainValue;

/// yDaemon - serve denormalized views of Yearn vaults
#[derive(Parser, Debug)]
#[command(name = "ydaemon", version)]
#[command(about = "Serve denormalized views of Yearn vaults", long_about = None)]
pub struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long, env = "YDAEMON_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind the HTTP server to
    #[arg(long, env = "YDAEMON_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Subgraph endpoint for a chain, as <chain>=<url> (repeatable)
    #[arg(
        long = "subgraph",
        env = "YDAEMON_SUBGRAPHS",
        value_delimiter = ',',
        value_name = "CHAIN=URL"
    )]
    pub subgraphs: Vec<ChainValue<Url>>,

    /// Vault address that must never be served, as <chain>=<address> (repeatable)
    #[arg(
        long = "blacklist",
        env = "YDAEMON_BLACKLIST",
        value_delimiter = ',',
        value_name = "CHAIN=ADDRESS"
    )]
    pub blacklist: Vec<ChainValue<Address>>,

    /// JSON file with reference data (vault, token and strategy metadata, APY, prices)
    #[arg(long, env = "YDAEMON_REFERENCE_SNAPSHOT", value_name = "PATH")]
    pub reference_snapshot: Option<PathBuf>,

    /// Base URL for token icons
    #[arg(long, env = "YDAEMON_ICON_BASE_URL", default_value = DEFAULT_ICON_BASE_URL)]
    pub icon_base_url: String,

    /// Timeout for each subgraph request, in seconds
    #[arg(long, env = "YDAEMON_SUBGRAPH_TIMEOUT_SECS", default_value_t = 10)]
    pub subgraph_timeout_secs: u64,
}
