//! The `gen-network` subcommand.

use anyhow::{Context, Result};
use clap::Parser;
use std::{path::PathBuf, time::Duration};
use testnode_providers_alloy::TestSigner;
use testnode_registry::NetworkRegistry;
use testnode_setup::{
    DEFAULT_CONTAINERS, DEFAULT_NETWORK_FILE, DEFAULT_TOKEN_BRIDGE_FILE, DockerExec,
    FileTokenBridgeDeployer, SetupConfig, complete_bootstrap,
};
use tracing::info;

/// Bootstraps the running testnode and writes the resulting network pair.
#[derive(Parser, Debug, Clone)]
pub(crate) struct GenNetworkCommand {
    /// Where the network pair is written.
    #[arg(long, short = 'o', default_value = DEFAULT_NETWORK_FILE)]
    pub(crate) output: PathBuf,
    /// Token bridge deployment produced by the testnode.
    #[arg(long, env = "TESTNODE_TOKEN_BRIDGE_FILE", default_value = DEFAULT_TOKEN_BRIDGE_FILE)]
    pub(crate) token_bridge_file: PathBuf,
    /// Sequencer containers searched for the deployment manifest, in order.
    #[arg(long, env = "TESTNODE_CONTAINERS", value_delimiter = ',')]
    pub(crate) containers: Vec<String>,
    /// Seconds to wait for the gateway registration to reach the rollup.
    #[arg(long, env = "TESTNODE_L2_TIMEOUT_SECS", default_value = "300")]
    pub(crate) l2_timeout_secs: u64,
}

impl GenNetworkCommand {
    /// Bound on the wait for the rollup side of the gateway registration.
    pub(crate) const fn l2_timeout(&self) -> Duration {
        Duration::from_secs(self.l2_timeout_secs)
    }

    pub(crate) async fn run(self, config: SetupConfig) -> Result<()> {
        let containers = if self.containers.is_empty() {
            DEFAULT_CONTAINERS.iter().map(ToString::to_string).collect()
        } else {
            self.containers.clone()
        };

        let l1_signer = TestSigner::connect(config.eth_url.clone(), config.eth_key.as_deref())
            .await
            .context("connecting to the parent chain")?;
        let l2_signer = TestSigner::connect(config.arb_url.clone(), config.arb_key.as_deref())
            .await
            .context("connecting to the rollup")?;

        let mut registry = NetworkRegistry::with_builtins();
        let deployer = FileTokenBridgeDeployer::new(&self.token_bridge_file);
        let pair = complete_bootstrap(
            &mut registry,
            &DockerExec::default(),
            &containers,
            &deployer,
            &l1_signer,
            &l2_signer,
            self.l2_timeout(),
        )
        .await?;

        if let Some(parent) = self.output.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.output, serde_json::to_string_pretty(&pair)?)
            .await
            .with_context(|| format!("writing {}", self.output.display()))?;

        info!(
            target: "gen_network",
            path = %self.output.display(),
            l1 = pair.l1_network.chain_id,
            l2 = pair.l2_network.chain_id(),
            "Wrote network pair"
        );
        Ok(())
    }
}
