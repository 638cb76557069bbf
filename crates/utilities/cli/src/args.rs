//! Shared command line arguments.

use clap::Args;
use url::Url;

/// RPC endpoints and funding keys of the parent chain and the rollup.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct EndpointArgs {
    /// Parent chain RPC endpoint.
    #[arg(long, env = "ETH_URL")]
    pub eth_url: Url,
    /// Rollup RPC endpoint.
    #[arg(long, env = "ARB_URL")]
    pub arb_url: Url,
    /// Parent chain deployer and funder key. Falls back to the node's first unlocked account.
    #[arg(long, env = "ETH_KEY", hide_env_values = true)]
    pub eth_key: Option<String>,
    /// Rollup deployer and funder key. Falls back to the node's first unlocked account.
    #[arg(long, env = "ARB_KEY", hide_env_values = true)]
    pub arb_key: Option<String>,
}
