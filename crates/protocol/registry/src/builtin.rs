//! The networks compiled into the crate.

use serde::Deserialize;
use std::collections::HashMap;
use testnode_network::{L1Network, L2Network};

/// The static set of publicly deployed networks.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuiltinNetworks {
    /// Map of parent chain IDs to their descriptors.
    pub l1_networks: HashMap<u64, L1Network>,
    /// Map of rollup chain IDs to their descriptors.
    pub l2_networks: HashMap<u64, L2Network>,
}

impl BuiltinNetworks {
    /// Read the embedded network list.
    pub fn read() -> Self {
        let networks = include_str!("../etc/networks.json");
        serde_json::from_str(networks).expect("Failed to read built-in networks")
    }

    /// Returns true if the chain ID belongs to a built-in parent chain.
    pub fn is_l1(&self, chain_id: u64) -> bool {
        self.l1_networks.contains_key(&chain_id)
    }

    /// Returns true if the chain ID belongs to a built-in rollup.
    pub fn is_l2(&self, chain_id: u64) -> bool {
        self.l2_networks.contains_key(&chain_id)
    }
}
