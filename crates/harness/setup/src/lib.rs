//! Test environment bootstrapping for a local two-chain rollup network.
//!
//! The entry points are [`test_setup`], which resolves the networks an integration test
//! targets and prepares its accounts and bridgers, and [`complete_bootstrap`], which discovers
//! a freshly started testnode and provisions its token bridge.
#![doc(issue_tracker_base_url = "https://github.com/testnode-rs/testnode/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod config;
pub use config::{
    ARB_KEY, ARB_URL, DEFAULT_CONTAINERS, DEFAULT_L2_TIMEOUT, DEFAULT_NETWORK_FILE,
    DEFAULT_TOKEN_BRIDGE_FILE, ETH_KEY, ETH_URL, SetupConfig, TESTNODE_CONTAINERS,
    TESTNODE_L2_TIMEOUT_SECS, TESTNODE_TOKEN_BRIDGE_FILE,
};

mod errors;
pub use errors::{SetupError, SetupResult};

pub mod manifest;
pub use manifest::{
    DEFAULT_MANIFEST_TIMEOUT, DeploymentManifest, DockerExec, ManifestSource, ManifestSourceError,
    find_manifest, first_success,
};

mod deployer;
pub use deployer::{
    DeployerError, FileTokenBridgeDeployer, TokenBridgeContracts, TokenBridgeDeployer,
    TokenBridgeDeployment,
};

mod resolver;
pub use resolver::{
    GATEWAY_POLL_INTERVAL, LOCAL_DEPOSIT_TIMEOUT_MS, LOCAL_L1_BLOCK_TIME, LOCAL_L1_NAME,
    LOCAL_L2_NAME, complete_bootstrap, confirm_l2_gateway, describe_local_deployment,
    discover_local_deployment, load_network_file, provision_networks, resolve,
};

mod setup;
pub use setup::{TestSetup, fund_l1, fund_l2, test_setup};

pub use testnode_providers_alloy::PRE_FUND_AMOUNT;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
