//! Contains the [`Erc20Bridger`].

use crate::BridgerResult;
use alloy_primitives::Address;
use alloy_provider::Provider;
use testnode_network::{L2Network, TokenBridge};
use testnode_providers_alloy::{
    abi::{IL1GatewayRouter, IL2GatewayRouter},
    contract,
};

/// Looks up the gateways tokens are routed through on either chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Erc20Bridger {
    l2_network: L2Network,
}

impl Erc20Bridger {
    /// Creates a bridger for `l2_network`.
    pub fn new(l2_network: &L2Network) -> Self {
        Self { l2_network: l2_network.clone() }
    }

    /// The rollup this bridger targets.
    pub const fn l2_network(&self) -> &L2Network {
        &self.l2_network
    }

    /// The token bridge contracts of the rollup.
    pub const fn token_bridge(&self) -> &TokenBridge {
        &self.l2_network.token_bridge
    }

    /// Returns the parent chain gateway the router assigns to `l1_token`.
    pub async fn l1_gateway_address<P: Provider>(
        &self,
        l1_provider: &P,
        l1_token: Address,
    ) -> BridgerResult<Address> {
        let router = self.token_bridge().l1_gateway_router;
        Ok(contract::read(l1_provider, router, IL1GatewayRouter::getGatewayCall { token: l1_token })
            .await?)
    }

    /// Returns the rollup gateway the router assigns to `l1_token`.
    pub async fn l2_gateway_address<P: Provider>(
        &self,
        l2_provider: &P,
        l1_token: Address,
    ) -> BridgerResult<Address> {
        let router = self.token_bridge().l2_gateway_router;
        Ok(contract::read(l2_provider, router, IL2GatewayRouter::getGatewayCall { token: l1_token })
            .await?)
    }
}
