//! Contains the [`SetupConfig`].

use crate::{SetupError, SetupResult};
use std::{path::PathBuf, time::Duration};
use tracing::debug;
use url::Url;

/// Parent chain RPC endpoint.
pub const ETH_URL: &str = "ETH_URL";
/// Rollup RPC endpoint.
pub const ARB_URL: &str = "ARB_URL";
/// Private key of the parent chain deployer and funder.
pub const ETH_KEY: &str = "ETH_KEY";
/// Private key of the rollup deployer and funder.
pub const ARB_KEY: &str = "ARB_KEY";
/// Comma separated container names searched for the deployment manifest.
pub const TESTNODE_CONTAINERS: &str = "TESTNODE_CONTAINERS";
/// Seconds to wait for the gateway registration to reach the rollup.
pub const TESTNODE_L2_TIMEOUT_SECS: &str = "TESTNODE_L2_TIMEOUT_SECS";
/// Token bridge deployment file consumed while bootstrapping.
pub const TESTNODE_TOKEN_BRIDGE_FILE: &str = "TESTNODE_TOKEN_BRIDGE_FILE";

/// Where a previously generated network pair is persisted.
pub const DEFAULT_NETWORK_FILE: &str = "files/local/network.json";

/// Where the token bridge deployment is read from.
pub const DEFAULT_TOKEN_BRIDGE_FILE: &str = "files/local/tokenbridge.json";

/// Sequencer container names used by the different testnode releases, newest last.
pub const DEFAULT_CONTAINERS: [&str; 4] = [
    "nitro_sequencer_1",
    "nitro-sequencer-1",
    "nitro-testnode-sequencer-1",
    "nitro-testnode_sequencer_1",
];

/// Default bound on the wait for the rollup side of a gateway registration.
pub const DEFAULT_L2_TIMEOUT: Duration = Duration::from_secs(300);

/// Endpoints, credentials and knobs of the test environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupConfig {
    /// Parent chain RPC endpoint.
    pub eth_url: Url,
    /// Rollup RPC endpoint.
    pub arb_url: Url,
    /// Parent chain funding key. The node's first unlocked account is used when absent.
    pub eth_key: Option<String>,
    /// Rollup funding key. The node's first unlocked account is used when absent.
    pub arb_key: Option<String>,
    /// Persisted network pair. Networks are looked up by chain ID when absent.
    pub network_file: Option<PathBuf>,
    /// Token bridge deployment file.
    pub token_bridge_file: PathBuf,
    /// Container names searched for the deployment manifest, in order.
    pub containers: Vec<String>,
    /// Bound on the wait for the rollup side of a gateway registration.
    pub l2_timeout: Duration,
}

impl SetupConfig {
    /// Creates a configuration for the given endpoints with every other setting at its default.
    pub fn new(eth_url: Url, arb_url: Url) -> Self {
        Self {
            eth_url,
            arb_url,
            eth_key: None,
            arb_key: None,
            network_file: Some(PathBuf::from(DEFAULT_NETWORK_FILE)),
            token_bridge_file: PathBuf::from(DEFAULT_TOKEN_BRIDGE_FILE),
            containers: DEFAULT_CONTAINERS.iter().map(ToString::to_string).collect(),
            l2_timeout: DEFAULT_L2_TIMEOUT,
        }
    }

    /// Loads `.env` if present, then reads the configuration from the process environment.
    pub fn from_env() -> SetupResult<Self> {
        if let Ok(path) = dotenv::dotenv() {
            debug!(target: "setup", path = %path.display(), "Loaded .env");
        }
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads the configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> SetupResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());
        let url = |var: &'static str| -> SetupResult<Url> {
            let value = get(var).ok_or(SetupError::MissingEnv(var))?;
            value.trim().parse().map_err(|_| SetupError::InvalidEnv { var, value })
        };

        let mut config = Self::new(url(ETH_URL)?, url(ARB_URL)?);
        config.eth_key = get(ETH_KEY);
        config.arb_key = get(ARB_KEY);
        if let Some(file) = get(TESTNODE_TOKEN_BRIDGE_FILE) {
            config.token_bridge_file = PathBuf::from(file);
        }
        if let Some(containers) = get(TESTNODE_CONTAINERS) {
            config.containers = containers
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(ToString::to_string)
                .collect();
        }
        if let Some(value) = get(TESTNODE_L2_TIMEOUT_SECS) {
            let secs = value
                .trim()
                .parse()
                .map_err(|_| SetupError::InvalidEnv { var: TESTNODE_L2_TIMEOUT_SECS, value })?;
            config.l2_timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    /// Sets the persisted network file, or disables it with `None`.
    pub fn with_network_file(mut self, network_file: Option<PathBuf>) -> Self {
        self.network_file = network_file;
        self
    }
}
