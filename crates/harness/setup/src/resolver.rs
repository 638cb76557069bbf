//! Resolution of the network pair a test run targets.

use crate::{
    DeploymentManifest, ManifestSource, SetupError, SetupResult, TokenBridgeDeployer,
    manifest::find_manifest,
};
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use std::{path::Path, time::Duration};
use testnode_bridger::{AdminErc20Bridger, TokenGateway};
use testnode_network::{
    ARB_MINIMUM_BLOCK_TIME_IN_SECONDS, EthBridge, L1Network, NetworkPair, PartialL2Network,
    SEVEN_DAYS_IN_SECONDS,
};
use testnode_providers_alloy::{ChainReader, TestSigner};
use testnode_registry::{NetworkRegistry, Registration, RegistryError};
use tracing::{debug, info};

/// Name given to a discovered parent chain.
pub const LOCAL_L1_NAME: &str = "EthLocal";

/// Name given to a discovered rollup.
pub const LOCAL_L2_NAME: &str = "ArbLocal";

/// Block time assumed for a discovered parent chain, in seconds.
pub const LOCAL_L1_BLOCK_TIME: f64 = 10.0;

/// Deposit timeout of a discovered rollup, in milliseconds.
pub const LOCAL_DEPOSIT_TIMEOUT_MS: u64 = 900_000;

/// Interval at which the rollup router is polled after a gateway registration.
pub const GATEWAY_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Returns the network pair targeted by the two chains.
///
/// With `network_file` the persisted pair is loaded verbatim and registered unless its rollup
/// is already known. Without it both chain IDs are looked up in `registry`.
pub async fn resolve<L, R>(
    registry: &mut NetworkRegistry,
    l1: &L,
    l2: &R,
    network_file: Option<&Path>,
) -> SetupResult<NetworkPair>
where
    L: ChainReader + ?Sized,
    R: ChainReader + ?Sized,
{
    if let Some(path) = network_file {
        let pair = load_network_file(path).await?;
        let outcome =
            registry.register_if_absent(pair.l1_network.clone(), pair.l2_network.clone())?;
        info!(
            target: "resolver",
            path = %path.display(),
            l1 = pair.l1_network.chain_id,
            l2 = pair.l2_network.chain_id(),
            ?outcome,
            "Loaded persisted networks"
        );
        return Ok(pair);
    }

    let (l1_id, l2_id) = (l1.chain_id().await?, l2.chain_id().await?);
    let l1_network = registry.get_l1_network(l1_id)?.clone();
    let l2_network = registry.get_l2_network(l2_id)?.clone();
    info!(target: "resolver", l1 = l1_id, l2 = l2_id, "Resolved networks by chain id");
    Ok(NetworkPair::new(l1_network, l2_network))
}

/// Reads a persisted `{ l1Network, l2Network }` file.
pub async fn load_network_file(path: &Path) -> SetupResult<NetworkPair> {
    if !tokio::fs::try_exists(path).await? {
        return Err(SetupError::MissingConfig(path.to_path_buf()));
    }
    let raw = tokio::fs::read_to_string(path).await?;
    serde_json::from_str(&raw)
        .map_err(|source| SetupError::InvalidNetworkFile { path: path.to_path_buf(), source })
}

/// Builds the descriptors of a local deployment from its manifest and live chain state.
///
/// The result depends only on the manifest and on what the chains report.
pub async fn describe_local_deployment<L, R>(
    manifest: &DeploymentManifest,
    l1: &L,
    l2: &R,
) -> SetupResult<(L1Network, PartialL2Network)>
where
    L: ChainReader + ?Sized,
    R: ChainReader + ?Sized,
{
    let confirm_period_blocks = l1.confirm_period_blocks(manifest.rollup).await?;
    let outbox = l1.allowed_outbox(manifest.bridge, U256::ZERO).await?;
    let (l1_id, l2_id) = (l1.chain_id().await?, l2.chain_id().await?);

    let l1_network = L1Network {
        chain_id: l1_id,
        block_time: LOCAL_L1_BLOCK_TIME,
        name: LOCAL_L1_NAME.to_string(),
        explorer_url: String::new(),
        is_custom: true,
        is_arbitrum: false,
        partner_chain_ids: vec![l2_id],
    };
    let l2_network = PartialL2Network {
        chain_id: l2_id,
        name: LOCAL_L2_NAME.to_string(),
        explorer_url: String::new(),
        partner_chain_id: l1_id,
        partner_chain_ids: Vec::new(),
        confirm_period_blocks,
        eth_bridge: EthBridge {
            bridge: manifest.bridge,
            inbox: manifest.inbox,
            sequencer_inbox: manifest.sequencer_inbox,
            outbox,
            rollup: manifest.rollup,
        },
        is_custom: true,
        is_arbitrum: true,
        retryable_lifetime_seconds: SEVEN_DAYS_IN_SECONDS,
        nitro_genesis_block: 0,
        nitro_genesis_l1_block: 0,
        deposit_timeout: LOCAL_DEPOSIT_TIMEOUT_MS,
        block_time: ARB_MINIMUM_BLOCK_TIME_IN_SECONDS,
    };
    debug!(
        target: "resolver",
        l1 = l1_id,
        l2 = l2_id,
        confirm_period_blocks,
        %outbox,
        "Described local deployment"
    );
    Ok((l1_network, l2_network))
}

/// Discovers the deployment of a running testnode.
///
/// Fails with [`SetupError::LocalEnvironmentUnavailable`] if none of `containers` holds a
/// manifest.
pub async fn discover_local_deployment<S, L, R>(
    source: &S,
    containers: &[String],
    l1: &L,
    l2: &R,
) -> SetupResult<(L1Network, PartialL2Network)>
where
    S: ManifestSource + ?Sized,
    L: ChainReader + ?Sized,
    R: ChainReader + ?Sized,
{
    let manifest = find_manifest(source, containers).await?;
    describe_local_deployment(&manifest, l1, l2).await
}

/// Discovers the local deployment, provisions its token bridge and registers both networks.
///
/// Chain state is read through `l1` and `l2`. The deployer signs with `l1_deployer` and
/// `l2_deployer`. A custom rollup registered under the same chain ID by an earlier run is
/// replaced with the fresh descriptor. A built-in rollup is never replaced, and a conflicting
/// deployment fails with [`RegistryError::NetworkAlreadyRegistered`].
#[allow(clippy::too_many_arguments)]
pub async fn provision_networks<S, D, L, R>(
    registry: &mut NetworkRegistry,
    source: &S,
    containers: &[String],
    deployer: &D,
    l1: &L,
    l2: &R,
    l1_deployer: &TestSigner,
    l2_deployer: &TestSigner,
) -> SetupResult<NetworkPair>
where
    S: ManifestSource + ?Sized,
    D: TokenBridgeDeployer + ?Sized,
    L: ChainReader + ?Sized,
    R: ChainReader + ?Sized,
{
    let (l1_network, partial) = discover_local_deployment(source, containers, l1, l2).await?;
    let token_bridge = deployer.deploy(l1_deployer, l2_deployer, partial.eth_bridge.inbox).await?;
    let l2_network = partial.complete(token_bridge);

    let outcome = registry.register_if_absent(l1_network.clone(), l2_network.clone())?;
    if outcome == Registration::AlreadyKnown {
        let l2_id = l2_network.chain_id();
        let known = registry.get_l2_network(l2_id)?;
        if *known == l2_network {
            debug!(target: "resolver", l2 = l2_id, "Rollup was already registered");
        } else if known.core.is_custom {
            let stale = registry.replace_l2_network(l2_network.clone())?;
            info!(
                target: "resolver",
                l2 = l2_id,
                stale_router = %stale.token_bridge.l1_gateway_router,
                router = %l2_network.token_bridge.l1_gateway_router,
                "Replaced stale rollup descriptor"
            );
        } else {
            return Err(RegistryError::NetworkAlreadyRegistered(l2_id).into());
        }
    }
    Ok(NetworkPair::new(l1_network, l2_network))
}

/// Waits until the rollup router maps `token` to `gateway`.
///
/// The router is polled every [`GATEWAY_POLL_INTERVAL`]. Fails with
/// [`SetupError::L2ConfirmationTimeout`] once `l2_timeout` elapses.
pub async fn confirm_l2_gateway<P: Provider>(
    admin: &AdminErc20Bridger,
    l2_provider: &P,
    token: Address,
    gateway: Address,
    l2_timeout: Duration,
) -> SetupResult<()> {
    let wait = admin.wait_for_l2_gateway(l2_provider, token, gateway, GATEWAY_POLL_INTERVAL);
    tokio::time::timeout(l2_timeout, wait)
        .await
        .map_err(|_| SetupError::L2ConfirmationTimeout(l2_timeout))??;
    Ok(())
}

/// Bootstraps a fresh local deployment end to end.
///
/// After [`provision_networks`] the wrapped native token gateway is registered on the parent
/// chain router. Returns once the rollup router reports it, or fails with
/// [`SetupError::L2ConfirmationTimeout`] after `l2_timeout`.
pub async fn complete_bootstrap<S, D>(
    registry: &mut NetworkRegistry,
    source: &S,
    containers: &[String],
    deployer: &D,
    l1_signer: &TestSigner,
    l2_signer: &TestSigner,
    l2_timeout: Duration,
) -> SetupResult<NetworkPair>
where
    S: ManifestSource + ?Sized,
    D: TokenBridgeDeployer + ?Sized,
{
    let pair = provision_networks(
        registry,
        source,
        containers,
        deployer,
        &l1_signer.reader(),
        &l2_signer.reader(),
        l1_signer,
        l2_signer,
    )
    .await?;

    let token_bridge = &pair.l2_network.token_bridge;
    let admin = AdminErc20Bridger::new(&pair.l2_network);
    let weth = TokenGateway { token: token_bridge.l1_weth, gateway: token_bridge.l1_weth_gateway };
    admin.set_gateways(l1_signer, l2_signer.provider(), &[weth]).await?;

    confirm_l2_gateway(
        &admin,
        l2_signer.provider(),
        token_bridge.l1_weth,
        token_bridge.l2_weth_gateway,
        l2_timeout,
    )
    .await?;

    info!(
        target: "resolver",
        l1 = pair.l1_network.chain_id,
        l2 = pair.l2_network.chain_id(),
        "Bootstrapped local networks"
    );
    Ok(pair)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        MockDeployer, MockManifestSource, local_chains, manifest_json, signers, token_bridge,
    };
    use alloy_provider::{DynProvider, ProviderBuilder};
    use alloy_sol_types::SolValue;
    use alloy_transport::mock::Asserter;
    use std::io::Write;
    use testnode_network::{L2Network, TokenBridge};
    use testnode_providers_alloy::test_utils::MockChainReader;

    fn containers() -> Vec<String> {
        crate::DEFAULT_CONTAINERS.iter().map(ToString::to_string).collect()
    }

    fn write_pair(pair: &NetworkPair) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string_pretty(pair).unwrap().as_bytes()).unwrap();
        file
    }

    async fn local_pair() -> NetworkPair {
        let (l1, l2) = local_chains();
        let source =
            MockManifestSource::default().with_manifest("nitro-sequencer-1", manifest_json());
        let (l1_signer, l2_signer) = signers();
        provision_networks(
            &mut NetworkRegistry::new(),
            &source,
            &containers(),
            &MockDeployer::new(token_bridge()),
            &l1,
            &l2,
            &l1_signer,
            &l2_signer,
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_resolve_by_chain_id() {
        let mut registry = NetworkRegistry::with_builtins();
        let (l1, l2) = (MockChainReader::new(1), MockChainReader::new(42161));
        let pair = resolve(&mut registry, &l1, &l2, None).await.unwrap();
        assert_eq!(pair.l1_network.name, "Mainnet");
        assert_eq!(pair.l2_network.core.name, "Arbitrum One");
        assert!(pair.is_consistent());
    }

    #[tokio::test]
    async fn test_resolve_unknown_chain() {
        let (l1, l2) = local_chains();
        let err = resolve(&mut NetworkRegistry::with_builtins(), &l1, &l2, None).await.unwrap_err();
        assert!(matches!(err, SetupError::Registry(RegistryError::UnknownChain(1337))));
    }

    #[tokio::test]
    async fn test_resolve_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("network.json");
        let (l1, l2) = local_chains();

        let err = resolve(&mut NetworkRegistry::with_builtins(), &l1, &l2, Some(&path))
            .await
            .unwrap_err();
        assert!(matches!(&err, SetupError::MissingConfig(p) if *p == path));
        assert!(err.to_string().contains("network.json"));
    }

    #[tokio::test]
    async fn test_resolve_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"l1Network\": {}}").unwrap();
        let (l1, l2) = local_chains();

        let err = resolve(&mut NetworkRegistry::new(), &l1, &l2, Some(file.path()))
            .await
            .unwrap_err();
        assert!(matches!(err, SetupError::InvalidNetworkFile { .. }));
    }

    #[tokio::test]
    async fn test_resolve_file_with_builtin_rollup_does_not_register() {
        let mut registry = NetworkRegistry::with_builtins();
        let builtin = NetworkPair::new(
            registry.get_l1_network(1).unwrap().clone(),
            registry.get_l2_network(42161).unwrap().clone(),
        );
        let file = write_pair(&builtin);
        let before = registry.clone();
        let (l1, l2) = local_chains();

        let pair = resolve(&mut registry, &l1, &l2, Some(file.path())).await.unwrap();
        assert_eq!(pair, builtin);
        assert_eq!(registry, before);
    }

    #[tokio::test]
    async fn test_resolve_file_with_custom_rollup_registers_once() {
        let persisted = local_pair().await;
        let file = write_pair(&persisted);
        let mut registry = NetworkRegistry::with_builtins();
        let (l1, l2) = local_chains();

        let first = resolve(&mut registry, &l1, &l2, Some(file.path())).await.unwrap();
        assert_eq!(first, persisted);
        assert!(registry.contains_l1(1337));
        assert!(registry.contains_l2(412346));
        let after_first = registry.clone();

        let second = resolve(&mut registry, &l1, &l2, Some(file.path())).await.unwrap();
        assert_eq!(second, persisted);
        assert_eq!(registry, after_first);
        assert_eq!(
            registry.register_if_absent(persisted.l1_network, persisted.l2_network).unwrap(),
            Registration::AlreadyKnown
        );
    }

    #[tokio::test]
    async fn test_resolve_file_skips_known_parent() {
        let mut persisted = local_pair().await;
        persisted.l2_network.core.chain_id = 777;
        persisted.l2_network.core.partner_chain_id = 1;
        persisted.l1_network = NetworkRegistry::with_builtins().get_l1_network(1).unwrap().clone();
        let file = write_pair(&persisted);
        let mut registry = NetworkRegistry::with_builtins();
        let (l1, l2) = local_chains();

        resolve(&mut registry, &l1, &l2, Some(file.path())).await.unwrap();
        assert!(registry.get_l1_network(1).unwrap().is_parent_of(777));
        assert_eq!(registry.get_l2_network(777).unwrap().parent_chain_id(), 1);
    }

    #[tokio::test]
    async fn test_discover_local_deployment() {
        let (l1, l2) = local_chains();
        let source = MockManifestSource::default()
            .with_manifest("nitro-testnode-sequencer-1", manifest_json());

        let (l1_network, l2_network) =
            discover_local_deployment(&source, &containers(), &l1, &l2).await.unwrap();
        assert_eq!(l1_network.chain_id, 1337);
        assert_eq!(l1_network.name, "EthLocal");
        assert_eq!(l1_network.block_time, 10.0);
        assert_eq!(l1_network.partner_chain_ids, [412346]);
        assert!(l1_network.is_custom);
        assert!(!l1_network.is_arbitrum);

        assert_eq!(l2_network.chain_id, 412346);
        assert_eq!(l2_network.name, "ArbLocal");
        assert_eq!(l2_network.partner_chain_id, 1337);
        assert!(l2_network.partner_chain_ids.is_empty());
        assert_eq!(l2_network.confirm_period_blocks, 20);
        assert_eq!(l2_network.eth_bridge.bridge, Address::repeat_byte(0xb0));
        assert_eq!(l2_network.eth_bridge.inbox, Address::repeat_byte(0x10));
        assert_eq!(l2_network.eth_bridge.sequencer_inbox, Address::repeat_byte(0x50));
        assert_eq!(l2_network.eth_bridge.outbox, Address::repeat_byte(0x0b));
        assert_eq!(l2_network.eth_bridge.rollup, Address::repeat_byte(0x70));
        assert_eq!((l2_network.nitro_genesis_block, l2_network.nitro_genesis_l1_block), (0, 0));
        assert_eq!(l2_network.deposit_timeout, 900000);
        assert_eq!(l2_network.block_time, 0.25);
        assert_eq!(l2_network.retryable_lifetime_seconds, 604800);
        assert!(l2_network.is_custom);
        assert_eq!(source.attempts(), &containers()[..3]);
    }

    #[tokio::test]
    async fn test_discover_is_a_function_of_chain_state() {
        let (l1, l2) = local_chains();
        let source =
            MockManifestSource::default().with_manifest("nitro_sequencer_1", manifest_json());
        let first = discover_local_deployment(&source, &containers(), &l1, &l2).await.unwrap();
        let second = discover_local_deployment(&source, &containers(), &l1, &l2).await.unwrap();
        assert_eq!(first, second);

        let moved = l1.clone().with_rollup(Address::repeat_byte(0x70), 45);
        let (_, changed) =
            discover_local_deployment(&source, &containers(), &moved, &l2).await.unwrap();
        assert_eq!(changed.confirm_period_blocks, 45);
        assert_eq!(PartialL2Network { confirm_period_blocks: 20, ..changed }, first.1);
    }

    #[tokio::test]
    async fn test_discover_without_testnode() {
        let (l1, l2) = local_chains();
        let source = MockManifestSource::default();
        let err = discover_local_deployment(&source, &containers(), &l1, &l2).await.unwrap_err();
        assert!(matches!(
            err,
            SetupError::LocalEnvironmentUnavailable(tried) if tried == containers()
        ));
    }

    #[tokio::test]
    async fn test_discover_propagates_chain_errors() {
        let (_, l2) = local_chains();
        let source =
            MockManifestSource::default().with_manifest("nitro_sequencer_1", manifest_json());
        let l1 = MockChainReader::new(1337);
        let err = discover_local_deployment(&source, &containers(), &l1, &l2).await.unwrap_err();
        assert!(matches!(err, SetupError::Provider(_)));
    }

    #[tokio::test]
    async fn test_provision_local_scenario() {
        let (l1, l2) = local_chains();
        let source = MockManifestSource::default()
            .with_manifest("nitro-testnode_sequencer_1", manifest_json());
        let deployer = MockDeployer::new(token_bridge());
        let (l1_signer, l2_signer) = signers();
        let mut registry = NetworkRegistry::with_builtins();

        let (discovered_l1, discovered_l2) =
            discover_local_deployment(&source, &containers(), &l1, &l2).await.unwrap();
        let pair = provision_networks(
            &mut registry,
            &source,
            &containers(),
            &deployer,
            &l1,
            &l2,
            &l1_signer,
            &l2_signer,
        )
        .await
        .unwrap();

        assert_eq!(pair.l1_network, discovered_l1);
        assert_eq!(pair.l1_network.partner_chain_ids, [412346]);
        assert_eq!(pair.l2_network.core, discovered_l2);
        assert_eq!(pair.l2_network.parent_chain_id(), 1337);
        assert_eq!(pair.l2_network.eth_bridge().bridge, Address::repeat_byte(0xb0));
        assert!(pair.l2_network.token_bridge.is_populated());
        assert_eq!(pair.l2_network.token_bridge, token_bridge());
        assert_eq!(deployer.inboxes(), [Address::repeat_byte(0x10)]);

        assert_eq!(registry.get_l1_network(1337).unwrap(), &pair.l1_network);
        assert_eq!(registry.get_l2_network(412346).unwrap(), &pair.l2_network);
        assert!(pair.is_consistent());
    }

    #[tokio::test]
    async fn test_provision_replaces_stale_custom_rollup() {
        let (l1, l2) = local_chains();
        let source =
            MockManifestSource::default().with_manifest("nitro-sequencer-1", manifest_json());
        let (l1_signer, l2_signer) = signers();
        let mut registry = NetworkRegistry::with_builtins();

        let first = provision_networks(
            &mut registry,
            &source,
            &containers(),
            &MockDeployer::new(token_bridge()),
            &l1,
            &l2,
            &l1_signer,
            &l2_signer,
        )
        .await
        .unwrap();

        let redeployed =
            TokenBridge { l1_gateway_router: Address::repeat_byte(0xee), ..token_bridge() };
        let second = provision_networks(
            &mut registry,
            &source,
            &containers(),
            &MockDeployer::new(redeployed),
            &l1,
            &l2,
            &l1_signer,
            &l2_signer,
        )
        .await
        .unwrap();

        assert_ne!(first, second);
        assert_eq!(second.l2_network.token_bridge, redeployed);
        assert_eq!(registry.get_l2_network(412346).unwrap(), &second.l2_network);
        assert_eq!(registry.get_l1_network(1337).unwrap().partner_chain_ids, [412346]);
    }

    #[tokio::test]
    async fn test_provision_keeps_builtin_rollup() {
        let (l1, _) = local_chains();
        let l2 = MockChainReader::new(42161);
        let source =
            MockManifestSource::default().with_manifest("nitro-sequencer-1", manifest_json());
        let (l1_signer, l2_signer) = signers();
        let mut registry = NetworkRegistry::with_builtins();
        let before = registry.clone();

        let err = provision_networks(
            &mut registry,
            &source,
            &containers(),
            &MockDeployer::new(token_bridge()),
            &l1,
            &l2,
            &l1_signer,
            &l2_signer,
        )
        .await
        .unwrap_err();
        assert!(matches!(
            err,
            SetupError::Registry(RegistryError::NetworkAlreadyRegistered(42161))
        ));
        assert_eq!(registry.get_l2_network(42161), before.get_l2_network(42161));
    }

    fn mocked_provider(asserter: &Asserter) -> DynProvider {
        ProviderBuilder::new().connect_mocked_client(asserter.clone()).erased()
    }

    fn gateway_answers(asserter: &Asserter, answers: &[Address]) {
        for answer in answers {
            asserter.push_success(&alloy_primitives::Bytes::from(answer.abi_encode()));
        }
    }

    fn weth(network: &L2Network) -> (Address, Address) {
        (network.token_bridge.l1_weth, network.token_bridge.l2_weth_gateway)
    }

    #[tokio::test(start_paused = true)]
    async fn test_confirm_l2_gateway_waits_for_router() {
        let network = local_pair().await.l2_network;
        let (token, gateway) = weth(&network);
        let l2 = Asserter::new();
        gateway_answers(&l2, &[Address::ZERO, Address::ZERO, gateway]);

        let admin = AdminErc20Bridger::new(&network);
        let start = tokio::time::Instant::now();
        confirm_l2_gateway(&admin, &mocked_provider(&l2), token, gateway, Duration::from_secs(5))
            .await
            .unwrap();
        assert!(start.elapsed() >= 2 * GATEWAY_POLL_INTERVAL);
    }

    #[tokio::test(start_paused = true)]
    async fn test_confirm_l2_gateway_times_out() {
        let network = local_pair().await.l2_network;
        let (token, gateway) = weth(&network);
        let l2 = Asserter::new();
        gateway_answers(&l2, &[Address::ZERO; 20]);

        let admin = AdminErc20Bridger::new(&network);
        let timeout = Duration::from_secs(3);
        let err = confirm_l2_gateway(&admin, &mocked_provider(&l2), token, gateway, timeout)
            .await
            .unwrap_err();
        assert!(matches!(err, SetupError::L2ConfirmationTimeout(t) if t == timeout));
        assert_eq!(err.to_string(), "Gateway registration not observed on L2 after 3s");
    }

    #[tokio::test]
    async fn test_confirm_l2_gateway_propagates_rpc_errors() {
        let network = local_pair().await.l2_network;
        let (token, gateway) = weth(&network);
        let l2 = Asserter::new();
        l2.push_failure_msg("header not found");

        let admin = AdminErc20Bridger::new(&network);
        let timeout = Duration::from_secs(3);
        let err = confirm_l2_gateway(&admin, &mocked_provider(&l2), token, gateway, timeout)
            .await
            .unwrap_err();
        assert!(matches!(err, SetupError::Bridger(_)));
    }
}
