//! Contains the [`EthBridger`].

use crate::{BridgerError, BridgerResult};
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use alloy_rpc_types_eth::TransactionReceipt;
use testnode_network::L2Network;
use testnode_providers_alloy::{TestSigner, abi::IInbox, contract};
use tracing::info;

/// Moves ether from the parent chain into a rollup.
#[derive(Debug, Clone, PartialEq)]
pub struct EthBridger {
    l2_network: L2Network,
}

impl EthBridger {
    /// Creates a bridger for `l2_network`.
    pub fn new(l2_network: &L2Network) -> Self {
        Self { l2_network: l2_network.clone() }
    }

    /// The rollup this bridger targets.
    pub const fn l2_network(&self) -> &L2Network {
        &self.l2_network
    }

    /// The inbox deposits are sent to.
    pub const fn inbox(&self) -> Address {
        self.l2_network.eth_bridge().inbox
    }

    /// Deposits `amount` wei from the parent chain account of `l1_signer` into the rollup.
    ///
    /// Returns the parent chain receipt of the deposit.
    pub async fn deposit(
        &self,
        l1_signer: &TestSigner,
        amount: U256,
    ) -> BridgerResult<TransactionReceipt> {
        check_chain(l1_signer, self.l2_network.parent_chain_id()).await?;
        info!(
            target: "bridger",
            from = %l1_signer.address(),
            %amount,
            inbox = %self.inbox(),
            "Depositing ether"
        );
        Ok(contract::send(l1_signer.provider(), self.inbox(), IInbox::depositEthCall {}, amount)
            .await?)
    }
}

/// Fails with [`BridgerError::WrongChain`] unless `signer` is connected to `expected`.
pub(crate) async fn check_chain(signer: &TestSigner, expected: u64) -> BridgerResult<()> {
    let actual = signer.provider().get_chain_id().await?;
    if actual != expected {
        return Err(BridgerError::WrongChain { expected, actual });
    }
    Ok(())
}
