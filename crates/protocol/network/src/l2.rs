//! Rollup chain descriptors.

use crate::TokenBridge;
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// Minimum block time of an Arbitrum chain, in seconds.
pub const ARB_MINIMUM_BLOCK_TIME_IN_SECONDS: f64 = 0.25;

/// Lifetime of a retryable ticket before it expires.
pub const SEVEN_DAYS_IN_SECONDS: u64 = 7 * 24 * 60 * 60;

/// Addresses of the core bridge contracts, all deployed on the parent chain.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthBridge {
    /// The bridge holding deposited funds and the message accumulators.
    pub bridge: Address,
    /// The delayed inbox.
    pub inbox: Address,
    /// The sequencer inbox that batches are posted to.
    pub sequencer_inbox: Address,
    /// The first allowed outbox of the bridge.
    pub outbox: Address,
    /// The rollup core contract.
    pub rollup: Address,
}

/// A rollup descriptor that does not yet know its token bridge.
///
/// This is what discovery of a fresh local deployment produces. It becomes an [`L2Network`]
/// through [`PartialL2Network::complete`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialL2Network {
    /// The chain ID.
    #[serde(rename = "chainID")]
    pub chain_id: u64,
    /// Human readable name (e.g. "Arbitrum One").
    pub name: String,
    /// Block explorer URL. Empty for local chains.
    #[serde(default)]
    pub explorer_url: String,
    /// The chain ID of the parent chain.
    #[serde(rename = "partnerChainID")]
    pub partner_chain_id: u64,
    /// Chain IDs of chains settling on this rollup.
    #[serde(rename = "partnerChainIDs", default)]
    pub partner_chain_ids: Vec<u64>,
    /// Number of parent chain blocks before an assertion can be confirmed.
    pub confirm_period_blocks: u64,
    /// The core bridge contracts.
    pub eth_bridge: EthBridge,
    /// Whether the network was supplied at runtime rather than built in.
    pub is_custom: bool,
    /// Always `true` for a rollup.
    #[serde(default = "default_is_arbitrum")]
    pub is_arbitrum: bool,
    /// Lifetime of a retryable ticket, in seconds.
    #[serde(default = "default_retryable_lifetime")]
    pub retryable_lifetime_seconds: u64,
    /// First block of the nitro chain.
    pub nitro_genesis_block: u64,
    /// Parent chain block at which the nitro chain started.
    pub nitro_genesis_l1_block: u64,
    /// How long to wait for a deposit to arrive, in milliseconds.
    pub deposit_timeout: u64,
    /// Approximate block production interval, in seconds.
    pub block_time: f64,
}

const fn default_is_arbitrum() -> bool {
    true
}

const fn default_retryable_lifetime() -> u64 {
    SEVEN_DAYS_IN_SECONDS
}

impl PartialL2Network {
    /// Attaches the token bridge, producing the full descriptor.
    ///
    /// Every core field is carried over untouched.
    pub fn complete(self, token_bridge: TokenBridge) -> L2Network {
        L2Network { core: self, token_bridge }
    }
}

/// A complete rollup descriptor.
///
/// Serializes flat: the core fields sit next to `tokenBridge` in the same JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct L2Network {
    /// Everything known before the token bridge was deployed.
    #[serde(flatten)]
    pub core: PartialL2Network,
    /// The token bridge contracts on both chains.
    pub token_bridge: TokenBridge,
}

impl L2Network {
    /// The chain ID of the rollup.
    pub const fn chain_id(&self) -> u64 {
        self.core.chain_id
    }

    /// The chain ID of the parent chain.
    pub const fn parent_chain_id(&self) -> u64 {
        self.core.partner_chain_id
    }

    /// The core bridge contracts.
    pub const fn eth_bridge(&self) -> &EthBridge {
        &self.core.eth_bridge
    }

    /// Splits the descriptor back into its two construction phases.
    pub fn into_parts(self) -> (PartialL2Network, TokenBridge) {
        (self.core, self.token_bridge)
    }
}
