//! Contains [`TestSetup`], everything an integration test needs to talk to both chains.

use crate::{SetupConfig, SetupResult, resolve};
use alloy_primitives::U256;
use alloy_rpc_types_eth::TransactionReceipt;
use alloy_signer_local::PrivateKeySigner;
use testnode_bridger::{AdminErc20Bridger, Erc20Bridger, EthBridger, InboxTools};
use testnode_network::{L1Network, L2Network};
use testnode_providers_alloy::{TestSigner, fund};
use testnode_registry::NetworkRegistry;
use tracing::info;

/// The resolved networks, the accounts and the bridgers of a test run.
#[derive(Debug, Clone)]
pub struct TestSetup {
    /// The parent chain.
    pub l1_network: L1Network,
    /// The rollup.
    pub l2_network: L2Network,
    /// A fresh account on the parent chain.
    pub l1_signer: TestSigner,
    /// The same fresh account on the rollup.
    pub l2_signer: TestSigner,
    /// The configured parent chain deployer.
    pub l1_deployer: TestSigner,
    /// The configured rollup deployer.
    pub l2_deployer: TestSigner,
    /// ERC-20 gateway lookups.
    pub erc20_bridger: Erc20Bridger,
    /// Privileged ERC-20 gateway registration.
    pub admin_erc20_bridger: AdminErc20Bridger,
    /// Ether deposits.
    pub eth_bridger: EthBridger,
    /// Delayed inbox queries.
    pub inbox_tools: InboxTools,
}

/// Resolves the networks described by `config` and prepares the accounts and bridgers.
///
/// The test signers share one freshly generated key on both chains and start out unfunded.
pub async fn test_setup(
    config: &SetupConfig,
    registry: &mut NetworkRegistry,
) -> SetupResult<TestSetup> {
    let l1_deployer = TestSigner::connect(config.eth_url.clone(), config.eth_key.as_deref()).await?;
    let l2_deployer = TestSigner::connect(config.arb_url.clone(), config.arb_key.as_deref()).await?;

    let pair = resolve(
        registry,
        &l1_deployer.reader(),
        &l2_deployer.reader(),
        config.network_file.as_deref(),
    )
    .await?;

    let seed = PrivateKeySigner::random();
    let l1_signer = TestSigner::from_signer(config.eth_url.clone(), seed.clone());
    let l2_signer = TestSigner::from_signer(config.arb_url.clone(), seed);
    info!(
        target: "setup",
        l1 = pair.l1_network.chain_id,
        l2 = pair.l2_network.chain_id(),
        signer = %l1_signer.address(),
        "Test environment ready"
    );

    let l2_network = pair.l2_network;
    Ok(TestSetup {
        erc20_bridger: Erc20Bridger::new(&l2_network),
        admin_erc20_bridger: AdminErc20Bridger::new(&l2_network),
        eth_bridger: EthBridger::new(&l2_network),
        inbox_tools: InboxTools::new(&l2_network),
        l1_network: pair.l1_network,
        l2_network,
        l1_signer,
        l2_signer,
        l1_deployer,
        l2_deployer,
    })
}

/// Sends `amount` (0.1 ether by default) to `signer` on the parent chain from the `ETH_KEY`
/// account and waits for the transfer to be mined.
pub async fn fund_l1(
    config: &SetupConfig,
    signer: &TestSigner,
    amount: Option<U256>,
) -> SetupResult<TransactionReceipt> {
    let funder = TestSigner::connect(signer.url().clone(), config.eth_key.as_deref()).await?;
    Ok(fund(&funder, signer.address(), amount).await?)
}

/// Sends `amount` (0.1 ether by default) to `signer` on the rollup from the `ARB_KEY` account
/// and waits for the transfer to be mined.
pub async fn fund_l2(
    config: &SetupConfig,
    signer: &TestSigner,
    amount: Option<U256>,
) -> SetupResult<TransactionReceipt> {
    let funder = TestSigner::connect(signer.url().clone(), config.arb_key.as_deref()).await?;
    Ok(fund(&funder, signer.address(), amount).await?)
}
