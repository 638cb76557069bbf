//! The `resolve` subcommand.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use testnode_providers_alloy::TestSigner;
use testnode_registry::NetworkRegistry;
use testnode_setup::{SetupConfig, resolve};

/// Resolves the network pair and prints it as JSON.
#[derive(Parser, Debug, Clone)]
pub(crate) struct ResolveCommand {
    /// Network pair file to read. Defaults to the generated one.
    #[arg(long)]
    pub(crate) network_file: Option<PathBuf>,
    /// Ignore any network file and look the chains up by chain ID.
    #[arg(long, conflicts_with = "network_file")]
    pub(crate) by_chain_id: bool,
}

impl ResolveCommand {
    pub(crate) async fn run(self, config: SetupConfig) -> Result<()> {
        let network_file =
            if self.by_chain_id { None } else { self.network_file.or(config.network_file) };

        let l1 = TestSigner::connect(config.eth_url, config.eth_key.as_deref()).await?;
        let l2 = TestSigner::connect(config.arb_url, config.arb_key.as_deref()).await?;

        let mut registry = NetworkRegistry::with_builtins();
        let pair = resolve(&mut registry, &l1.reader(), &l2.reader(), network_file.as_deref())
            .await?;
        println!("{}", serde_json::to_string_pretty(&pair)?);
        Ok(())
    }
}
