//! Test utilities for the setup flow.

use crate::{DeployerError, ManifestSource, ManifestSourceError, TokenBridgeDeployer};
use alloy_primitives::Address;
use async_trait::async_trait;
use std::{collections::HashMap, sync::Mutex};
use testnode_network::TokenBridge;
use testnode_providers_alloy::{TestSigner, test_utils::MockChainReader};

fn hex(byte: u8) -> String {
    format!("0x{}", format!("{byte:02x}").repeat(20))
}

/// A manifest with bridge `0xb0..`, inbox `0x10..`, sequencer inbox `0x50..` and rollup `0x70..`.
pub fn manifest_json() -> String {
    format!(
        r#"{{"bridge":"{}","inbox":"{}","sequencer-inbox":"{}","rollup":"{}","validator-utils":"{}","deployed-at":42}}"#,
        hex(0xb0),
        hex(0x10),
        hex(0x50),
        hex(0x70),
        hex(0x99),
    )
}

/// The parent chain (1337) and rollup (412346) of the deployment in [`manifest_json`].
///
/// The rollup confirms after 20 blocks and the bridge's first outbox is `0x0b..`.
pub fn local_chains() -> (MockChainReader, MockChainReader) {
    let l1 = MockChainReader::new(1337)
        .with_rollup(Address::repeat_byte(0x70), 20)
        .with_outbox(Address::repeat_byte(0xb0), Address::repeat_byte(0x0b));
    (l1, MockChainReader::new(412346))
}

/// A deployment file with parent chain contracts at `0xa1..` to `0xa7..` and rollup contracts
/// at `0xb1..` to `0xb7..`, in field order.
pub fn token_bridge_json() -> String {
    let side = |base: u8| {
        format!(
            r#"{{"customGateway":"{}","standardGateway":"{}","router":"{}","multicall":"{}","proxyAdmin":"{}","weth":"{}","wethGateway":"{}"}}"#,
            hex(base + 1),
            hex(base + 2),
            hex(base + 3),
            hex(base + 4),
            hex(base + 5),
            hex(base + 6),
            hex(base + 7),
        )
    };
    format!(r#"{{"l1":{},"l2":{}}}"#, side(0xa0), side(0xb0))
}

/// The token bridge described by [`token_bridge_json`].
pub fn token_bridge() -> TokenBridge {
    let a = Address::repeat_byte;
    TokenBridge {
        l1_custom_gateway: a(0xa1),
        l1_erc20_gateway: a(0xa2),
        l1_gateway_router: a(0xa3),
        l1_multicall: a(0xa4),
        l1_proxy_admin: a(0xa5),
        l1_weth: a(0xa6),
        l1_weth_gateway: a(0xa7),
        l2_custom_gateway: a(0xb1),
        l2_erc20_gateway: a(0xb2),
        l2_gateway_router: a(0xb3),
        l2_multicall: a(0xb4),
        l2_proxy_admin: a(0xb5),
        l2_weth: a(0xb6),
        l2_weth_gateway: a(0xb7),
    }
}

/// Two random signers pointed at unused local ports.
pub fn signers() -> (TestSigner, TestSigner) {
    let url = |port: u16| format!("http://127.0.0.1:{port}").parse().expect("valid url");
    (TestSigner::random(url(18545)), TestSigner::random(url(18547)))
}

/// A [`ManifestSource`] serving manifests from memory and recording every container queried.
#[derive(Debug, Default)]
pub struct MockManifestSource {
    manifests: HashMap<String, String>,
    attempts: Mutex<Vec<String>>,
}

impl MockManifestSource {
    /// Serves `manifest` from `container`.
    pub fn with_manifest(mut self, container: &str, manifest: String) -> Self {
        self.manifests.insert(container.to_string(), manifest);
        self
    }

    /// The containers queried so far, in order.
    pub fn attempts(&self) -> Vec<String> {
        self.attempts.lock().expect("lock poisoned").clone()
    }
}

#[async_trait]
impl ManifestSource for MockManifestSource {
    async fn read_manifest(&self, container: &str) -> Result<String, ManifestSourceError> {
        self.attempts.lock().expect("lock poisoned").push(container.to_string());
        self.manifests
            .get(container)
            .cloned()
            .ok_or_else(|| ManifestSourceError::NotFound(container.to_string()))
    }
}

/// A [`TokenBridgeDeployer`] returning a fixed token bridge and recording the inboxes it was
/// asked to deploy for.
#[derive(Debug)]
pub struct MockDeployer {
    token_bridge: TokenBridge,
    inboxes: Mutex<Vec<Address>>,
}

impl MockDeployer {
    /// Creates a deployer returning `token_bridge`.
    pub fn new(token_bridge: TokenBridge) -> Self {
        Self { token_bridge, inboxes: Mutex::default() }
    }

    /// The inboxes passed to [`TokenBridgeDeployer::deploy`], in order.
    pub fn inboxes(&self) -> Vec<Address> {
        self.inboxes.lock().expect("lock poisoned").clone()
    }
}

#[async_trait]
impl TokenBridgeDeployer for MockDeployer {
    async fn deploy(
        &self,
        _l1_deployer: &TestSigner,
        _l2_deployer: &TestSigner,
        inbox: Address,
    ) -> Result<TokenBridge, DeployerError> {
        self.inboxes.lock().expect("lock poisoned").push(inbox);
        Ok(self.token_bridge)
    }
}
