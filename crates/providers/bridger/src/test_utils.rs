//! Fixtures shared by the bridger tests.

use alloy_primitives::{Address, Bytes};
use alloy_provider::{DynProvider, Provider, ProviderBuilder};
use alloy_sol_types::SolValue;
use alloy_transport::mock::Asserter;
use testnode_network::{EthBridge, L2Network, PartialL2Network, TokenBridge};

/// A provider whose requests are answered, in order, by `asserter`.
pub(crate) fn mocked_provider(asserter: &Asserter) -> DynProvider {
    ProviderBuilder::new().connect_mocked_client(asserter.clone()).erased()
}

/// `value` ABI encoded the way a contract call returns it.
pub(crate) fn encoded<T: SolValue>(value: T) -> Bytes {
    value.abi_encode().into()
}

/// A local rollup whose contracts sit at distinct, recognizable addresses.
pub(crate) fn l2_network() -> L2Network {
    let eth_bridge = EthBridge {
        bridge: Address::repeat_byte(0x01),
        inbox: Address::repeat_byte(0x02),
        sequencer_inbox: Address::repeat_byte(0x03),
        outbox: Address::repeat_byte(0x04),
        rollup: Address::repeat_byte(0x05),
    };
    let token_bridge = TokenBridge {
        l1_custom_gateway: Address::repeat_byte(0x10),
        l1_erc20_gateway: Address::repeat_byte(0x11),
        l1_gateway_router: Address::repeat_byte(0x12),
        l1_multicall: Address::repeat_byte(0x13),
        l1_proxy_admin: Address::repeat_byte(0x14),
        l1_weth: Address::repeat_byte(0x15),
        l1_weth_gateway: Address::repeat_byte(0x16),
        l2_custom_gateway: Address::repeat_byte(0x20),
        l2_erc20_gateway: Address::repeat_byte(0x21),
        l2_gateway_router: Address::repeat_byte(0x22),
        l2_multicall: Address::repeat_byte(0x23),
        l2_proxy_admin: Address::repeat_byte(0x24),
        l2_weth: Address::repeat_byte(0x25),
        l2_weth_gateway: Address::repeat_byte(0x26),
    };
    PartialL2Network {
        chain_id: 412346,
        name: "ArbLocal".to_string(),
        explorer_url: String::new(),
        partner_chain_id: 1337,
        partner_chain_ids: vec![],
        confirm_period_blocks: 20,
        eth_bridge,
        is_custom: true,
        is_arbitrum: true,
        retryable_lifetime_seconds: testnode_network::SEVEN_DAYS_IN_SECONDS,
        nitro_genesis_block: 0,
        nitro_genesis_l1_block: 0,
        deposit_timeout: 900000,
        block_time: testnode_network::ARB_MINIMUM_BLOCK_TIME_IN_SECONDS,
    }
    .complete(token_bridge)
}
