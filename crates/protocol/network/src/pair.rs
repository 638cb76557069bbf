//! The persisted network file format.

use crate::{L1Network, L2Network};
use serde::{Deserialize, Serialize};

/// A parent chain and one of its rollups, as stored in a `network.json` file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkPair {
    /// The parent chain.
    pub l1_network: L1Network,
    /// The rollup.
    pub l2_network: L2Network,
}

impl NetworkPair {
    /// Creates a new pair.
    pub const fn new(l1_network: L1Network, l2_network: L2Network) -> Self {
        Self { l1_network, l2_network }
    }

    /// Returns true if the rollup names the parent chain as its parent.
    pub const fn is_consistent(&self) -> bool {
        self.l2_network.core.partner_chain_id == self.l1_network.chain_id
    }
}

impl From<NetworkPair> for (L1Network, L2Network) {
    fn from(pair: NetworkPair) -> Self {
        (pair.l1_network, pair.l2_network)
    }
}
