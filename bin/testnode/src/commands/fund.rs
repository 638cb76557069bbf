//! The `fund` subcommand.

use alloy_primitives::{Address, U256};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use testnode_providers_alloy::{TestSigner, fund};
use testnode_setup::SetupConfig;
use tracing::info;

/// The chain a transfer is sent on.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Layer {
    /// The parent chain, funded from `ETH_KEY`.
    L1,
    /// The rollup, funded from `ARB_KEY`.
    L2,
}

/// Sends ether from the configured funder and waits for the transfer to be mined.
#[derive(Parser, Debug, Clone)]
pub(crate) struct FundCommand {
    /// Chain to send on.
    #[arg(value_enum)]
    pub(crate) layer: Layer,
    /// Recipient.
    pub(crate) to: Address,
    /// Amount in wei. Defaults to 0.1 ether.
    #[arg(long)]
    pub(crate) amount: Option<U256>,
}

impl FundCommand {
    pub(crate) async fn run(self, config: SetupConfig) -> Result<()> {
        let (url, key) = match self.layer {
            Layer::L1 => (config.eth_url, config.eth_key),
            Layer::L2 => (config.arb_url, config.arb_key),
        };
        let funder = TestSigner::connect(url, key.as_deref()).await?;
        let receipt = fund(&funder, self.to, self.amount).await?;
        info!(
            target: "fund",
            layer = ?self.layer,
            to = %self.to,
            tx = %receipt.transaction_hash,
            "Funded account"
        );
        Ok(())
    }
}
