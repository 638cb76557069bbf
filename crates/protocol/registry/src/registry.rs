//! Contains the [`NetworkRegistry`].

use crate::{BUILTIN_NETWORKS, RegistryError, RegistryResult};
use std::collections::HashMap;
use testnode_network::{L1Network, L2Network};
use tracing::debug;

/// What [`NetworkRegistry::register_if_absent`] inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// The rollup was already known. Nothing was inserted.
    AlreadyKnown,
    /// The parent chain was already known. Only the rollup was inserted.
    L2Only,
    /// Both the parent chain and the rollup were inserted.
    Both,
}

impl Registration {
    /// Returns true if anything was inserted.
    pub const fn inserted(&self) -> bool {
        !matches!(self, Self::AlreadyKnown)
    }
}

/// The set of networks known to a test harness.
///
/// Starts out with either nothing ([`NetworkRegistry::new`]) or the built-in networks
/// ([`NetworkRegistry::with_builtins`]) and grows as custom networks are registered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetworkRegistry {
    l1_networks: HashMap<u64, L1Network>,
    l2_networks: HashMap<u64, L2Network>,
}

impl NetworkRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry seeded with the built-in networks.
    pub fn with_builtins() -> Self {
        Self {
            l1_networks: BUILTIN_NETWORKS.l1_networks.clone(),
            l2_networks: BUILTIN_NETWORKS.l2_networks.clone(),
        }
    }

    /// Returns the parent chain registered under `chain_id`.
    pub fn l1_network(&self, chain_id: u64) -> Option<&L1Network> {
        self.l1_networks.get(&chain_id)
    }

    /// Returns the rollup registered under `chain_id`.
    pub fn l2_network(&self, chain_id: u64) -> Option<&L2Network> {
        self.l2_networks.get(&chain_id)
    }

    /// Returns the parent chain registered under `chain_id`, or [`RegistryError::UnknownChain`].
    pub fn get_l1_network(&self, chain_id: u64) -> RegistryResult<&L1Network> {
        self.l1_network(chain_id).ok_or(RegistryError::UnknownChain(chain_id))
    }

    /// Returns the rollup registered under `chain_id`, or [`RegistryError::UnknownChain`].
    pub fn get_l2_network(&self, chain_id: u64) -> RegistryResult<&L2Network> {
        self.l2_network(chain_id).ok_or(RegistryError::UnknownChain(chain_id))
    }

    /// Returns true if a parent chain is registered under `chain_id`.
    pub fn contains_l1(&self, chain_id: u64) -> bool {
        self.l1_networks.contains_key(&chain_id)
    }

    /// Returns true if a rollup is registered under `chain_id`.
    pub fn contains_l2(&self, chain_id: u64) -> bool {
        self.l2_networks.contains_key(&chain_id)
    }

    /// Registers a custom rollup and, optionally, its custom parent chain.
    ///
    /// Fails without modifying the registry if either network is already present or if the
    /// rollup's parent chain is neither supplied nor registered. On success the rollup is
    /// appended to its parent's partner list.
    pub fn add_custom_network(
        &mut self,
        l1: Option<L1Network>,
        l2: L2Network,
    ) -> RegistryResult<()> {
        if let Some(l1) = &l1 {
            if self.contains_l1(l1.chain_id) {
                return Err(RegistryError::NetworkAlreadyRegistered(l1.chain_id));
            }
        }
        let (l2_id, parent_id) = (l2.chain_id(), l2.parent_chain_id());
        if self.contains_l2(l2_id) {
            return Err(RegistryError::NetworkAlreadyRegistered(l2_id));
        }
        let parent_supplied = l1.as_ref().is_some_and(|l1| l1.chain_id == parent_id);
        if !parent_supplied && !self.contains_l1(parent_id) {
            return Err(RegistryError::MissingParent { l1: parent_id, l2: l2_id });
        }

        if let Some(l1) = l1 {
            debug!(
                target: "registry",
                chain_id = l1.chain_id,
                name = %l1.name,
                "Registering custom L1 network"
            );
            self.l1_networks.insert(l1.chain_id, l1);
        }
        debug!(
            target: "registry",
            chain_id = l2_id,
            name = %l2.core.name,
            "Registering custom L2 network"
        );
        self.l2_networks.insert(l2_id, l2);
        if let Some(parent) = self.l1_networks.get_mut(&parent_id) {
            parent.add_partner(l2_id);
        }
        Ok(())
    }

    /// Replaces the descriptor of a registered rollup and returns the previous one.
    ///
    /// Fails without modifying the registry if no rollup is registered under the chain ID or
    /// if the new descriptor's parent chain is not registered.
    pub fn replace_l2_network(&mut self, l2: L2Network) -> RegistryResult<L2Network> {
        let (l2_id, parent_id) = (l2.chain_id(), l2.parent_chain_id());
        if !self.contains_l2(l2_id) {
            return Err(RegistryError::UnknownChain(l2_id));
        }
        let Some(parent) = self.l1_networks.get_mut(&parent_id) else {
            return Err(RegistryError::MissingParent { l1: parent_id, l2: l2_id });
        };
        parent.add_partner(l2_id);

        debug!(
            target: "registry",
            chain_id = l2_id,
            name = %l2.core.name,
            "Replacing L2 network"
        );
        self.l2_networks.insert(l2_id, l2).ok_or(RegistryError::UnknownChain(l2_id))
    }

    /// Registers the pair unless the rollup is already known.
    ///
    /// The parent chain is only inserted if it is not registered yet, so calling this any
    /// number of times with the same pair never raises a duplicate registration error.
    pub fn register_if_absent(
        &mut self,
        l1: L1Network,
        l2: L2Network,
    ) -> RegistryResult<Registration> {
        if self.contains_l2(l2.chain_id()) {
            return Ok(Registration::AlreadyKnown);
        }
        if self.contains_l1(l1.chain_id) {
            self.add_custom_network(None, l2)?;
            Ok(Registration::L2Only)
        } else {
            self.add_custom_network(Some(l1), l2)?;
            Ok(Registration::Both)
        }
    }
}
