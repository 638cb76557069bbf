//! The token bridge contract set.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// Token bridge contracts deployed on both sides of a rollup.
///
/// The JSON keys keep the historical spelling (`l1MultiCall` next to `l2Multicall`) so files
/// written by other tooling load unchanged.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBridge {
    /// Parent chain gateway for tokens with custom L2 counterparts.
    pub l1_custom_gateway: Address,
    /// Parent chain gateway for standard ERC-20 tokens.
    #[serde(rename = "l1ERC20Gateway")]
    pub l1_erc20_gateway: Address,
    /// Parent chain router that maps tokens to gateways.
    pub l1_gateway_router: Address,
    /// Parent chain multicall helper.
    #[serde(rename = "l1MultiCall")]
    pub l1_multicall: Address,
    /// Parent chain proxy admin of the token bridge.
    pub l1_proxy_admin: Address,
    /// Wrapped native token on the parent chain.
    pub l1_weth: Address,
    /// Parent chain gateway for the wrapped native token.
    pub l1_weth_gateway: Address,
    /// Rollup gateway for tokens with custom L2 counterparts.
    pub l2_custom_gateway: Address,
    /// Rollup gateway for standard ERC-20 tokens.
    #[serde(rename = "l2ERC20Gateway")]
    pub l2_erc20_gateway: Address,
    /// Rollup router that maps parent chain tokens to gateways.
    pub l2_gateway_router: Address,
    /// Rollup multicall helper.
    pub l2_multicall: Address,
    /// Rollup proxy admin of the token bridge.
    pub l2_proxy_admin: Address,
    /// Wrapped native token on the rollup.
    pub l2_weth: Address,
    /// Rollup gateway for the wrapped native token.
    pub l2_weth_gateway: Address,
}

impl TokenBridge {
    /// Every address in the set, parent chain contracts first.
    pub const fn addresses(&self) -> [Address; 14] {
        [
            self.l1_custom_gateway,
            self.l1_erc20_gateway,
            self.l1_gateway_router,
            self.l1_multicall,
            self.l1_proxy_admin,
            self.l1_weth,
            self.l1_weth_gateway,
            self.l2_custom_gateway,
            self.l2_erc20_gateway,
            self.l2_gateway_router,
            self.l2_multicall,
            self.l2_proxy_admin,
            self.l2_weth,
            self.l2_weth_gateway,
        ]
    }

    /// Returns true if no contract address is left at zero.
    pub fn is_populated(&self) -> bool {
        self.addresses().iter().all(|a| !a.is_zero())
    }
}
