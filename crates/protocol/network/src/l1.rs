//! Contains the parent chain descriptor.

use serde::{Deserialize, Serialize};

/// Describes a parent chain that one or more rollups settle on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct L1Network {
    /// The chain ID.
    #[serde(rename = "chainID")]
    pub chain_id: u64,
    /// Approximate block production interval, in seconds.
    pub block_time: f64,
    /// Human readable name (e.g. "Mainnet").
    pub name: String,
    /// Block explorer URL. Empty for local chains.
    #[serde(default)]
    pub explorer_url: String,
    /// Whether the network was supplied at runtime rather than built in.
    pub is_custom: bool,
    /// Always `false` for a parent chain.
    #[serde(default)]
    pub is_arbitrum: bool,
    /// Chain IDs of the rollups that use this chain as their parent.
    #[serde(rename = "partnerChainIDs")]
    pub partner_chain_ids: Vec<u64>,
}

impl L1Network {
    /// Returns true if `chain_id` is registered as a rollup of this chain.
    pub fn is_parent_of(&self, chain_id: u64) -> bool {
        self.partner_chain_ids.contains(&chain_id)
    }

    /// Records `chain_id` as a rollup of this chain. Returns false if it was already present.
    pub fn add_partner(&mut self, chain_id: u64) -> bool {
        if self.is_parent_of(chain_id) {
            return false;
        }
        self.partner_chain_ids.push(chain_id);
        true
    }
}
