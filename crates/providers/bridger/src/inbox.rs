//! Contains [`InboxTools`].

use crate::BridgerResult;
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use testnode_network::L2Network;
use testnode_providers_alloy::{abi::IBridge, contract};

/// Queries against the delayed inbox of a rollup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InboxTools {
    bridge: Address,
    inbox: Address,
}

impl InboxTools {
    /// Creates inbox tools for `l2_network`.
    pub const fn new(l2_network: &L2Network) -> Self {
        let eth_bridge = l2_network.eth_bridge();
        Self { bridge: eth_bridge.bridge, inbox: eth_bridge.inbox }
    }

    /// The delayed inbox.
    pub const fn inbox(&self) -> Address {
        self.inbox
    }

    /// Number of messages the bridge has accepted into the delayed inbox.
    pub async fn delayed_message_count<P: Provider>(&self, l1_provider: &P) -> BridgerResult<U256> {
        Ok(contract::read(l1_provider, self.bridge, IBridge::delayedMessageCountCall {}).await?)
    }

    /// Number of batches the bridge has accepted from the sequencer inbox.
    pub async fn sequencer_message_count<P: Provider>(
        &self,
        l1_provider: &P,
    ) -> BridgerResult<U256> {
        Ok(contract::read(l1_provider, self.bridge, IBridge::sequencerMessageCountCall {}).await?)
    }
}
