//! Contains the [`TokenBridgeDeployer`] trait and the file backed deployer.

use alloy_primitives::Address;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use testnode_network::TokenBridge;
use testnode_providers_alloy::{ProviderError, TestSigner, abi::IL1GatewayRouter, contract};
use tracing::info;

/// An error raised while provisioning the token bridge.
#[derive(Debug, thiserror::Error)]
pub enum DeployerError {
    /// The deployment file does not exist.
    #[error("Token bridge deployment {} not found", .0.display())]
    NotFound(PathBuf),
    /// The deployment file could not be read.
    #[error("Failed to read token bridge deployment: {0}")]
    Io(#[from] std::io::Error),
    /// The deployment file is not valid.
    #[error("Invalid token bridge deployment: {0}")]
    Invalid(#[from] serde_json::Error),
    /// The deployment leaves a contract at the zero address.
    #[error("Token bridge deployment is incomplete")]
    Incomplete,
    /// The deployment belongs to a rollup fed by another inbox.
    #[error("Token bridge router feeds inbox {actual}, expected {expected}")]
    Mismatch {
        /// The inbox of the discovered rollup.
        expected: Address,
        /// The inbox the deployed router is wired to.
        actual: Address,
    },
    /// Querying the deployed contracts failed.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Provisions the token bridge contracts of a freshly discovered rollup.
#[async_trait]
pub trait TokenBridgeDeployer: Send + Sync {
    /// Provisions the token bridge on both chains for the rollup fed by `inbox`.
    ///
    /// Every address of the returned set is non-zero.
    async fn deploy(
        &self,
        l1_deployer: &TestSigner,
        l2_deployer: &TestSigner,
        inbox: Address,
    ) -> Result<TokenBridge, DeployerError>;
}

/// Contracts of one side of the token bridge, as written by the deployment scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBridgeContracts {
    /// Gateway for tokens with custom counterparts.
    pub custom_gateway: Address,
    /// Gateway for standard ERC-20 tokens.
    pub standard_gateway: Address,
    /// Router mapping tokens to gateways.
    pub router: Address,
    /// Multicall helper.
    pub multicall: Address,
    /// Proxy admin.
    pub proxy_admin: Address,
    /// Wrapped native token.
    pub weth: Address,
    /// Gateway for the wrapped native token.
    pub weth_gateway: Address,
}

/// Both sides of a token bridge deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TokenBridgeDeployment {
    /// Contracts on the parent chain.
    pub l1: TokenBridgeContracts,
    /// Contracts on the rollup.
    pub l2: TokenBridgeContracts,
}

impl From<TokenBridgeDeployment> for TokenBridge {
    fn from(TokenBridgeDeployment { l1, l2 }: TokenBridgeDeployment) -> Self {
        Self {
            l1_custom_gateway: l1.custom_gateway,
            l1_erc20_gateway: l1.standard_gateway,
            l1_gateway_router: l1.router,
            l1_multicall: l1.multicall,
            l1_proxy_admin: l1.proxy_admin,
            l1_weth: l1.weth,
            l1_weth_gateway: l1.weth_gateway,
            l2_custom_gateway: l2.custom_gateway,
            l2_erc20_gateway: l2.standard_gateway,
            l2_gateway_router: l2.router,
            l2_multicall: l2.multicall,
            l2_proxy_admin: l2.proxy_admin,
            l2_weth: l2.weth,
            l2_weth_gateway: l2.weth_gateway,
        }
    }
}

/// A [`TokenBridgeDeployer`] that loads a deployment produced ahead of time.
///
/// The parent chain router of the loaded deployment must be wired to the inbox being
/// provisioned, so a file left over from an earlier testnode is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTokenBridgeDeployer {
    path: PathBuf,
}

impl FileTokenBridgeDeployer {
    /// Creates a deployer reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The deployment file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TokenBridgeDeployer for FileTokenBridgeDeployer {
    async fn deploy(
        &self,
        l1_deployer: &TestSigner,
        l2_deployer: &TestSigner,
        inbox: Address,
    ) -> Result<TokenBridge, DeployerError> {
        if !tokio::fs::try_exists(&self.path).await? {
            return Err(DeployerError::NotFound(self.path.clone()));
        }
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let token_bridge: TokenBridge = serde_json::from_str::<TokenBridgeDeployment>(&raw)?.into();
        if !token_bridge.is_populated() {
            return Err(DeployerError::Incomplete);
        }
        let router = token_bridge.l1_gateway_router;
        let actual =
            contract::read(l1_deployer.provider(), router, IL1GatewayRouter::inboxCall {}).await?;
        if actual != inbox {
            return Err(DeployerError::Mismatch { expected: inbox, actual });
        }
        info!(
            target: "setup",
            path = %self.path.display(),
            %inbox,
            l1_deployer = %l1_deployer.address(),
            l2_deployer = %l2_deployer.address(),
            router = %token_bridge.l1_gateway_router,
            "Loaded token bridge deployment"
        );
        Ok(token_bridge)
    }
}
