//! Contains the [`ChainReader`] trait and its alloy backed implementation.

use crate::{
    ProviderResult,
    abi::{IBridge, IRollupCore},
    contract,
};
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use async_trait::async_trait;

/// Read-only queries the harness makes against a chain while discovering a deployment.
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// Returns the chain ID reported by the node.
    async fn chain_id(&self) -> ProviderResult<u64>;

    /// Returns `confirmPeriodBlocks()` of the rollup contract at `rollup`.
    async fn confirm_period_blocks(&self, rollup: Address) -> ProviderResult<u64>;

    /// Returns `allowedOutboxList(index)` of the bridge contract at `bridge`.
    async fn allowed_outbox(&self, bridge: Address, index: U256) -> ProviderResult<Address>;
}

/// A [`ChainReader`] backed by an alloy [Provider].
#[derive(Debug, Clone)]
pub struct AlloyChainReader<P> {
    provider: P,
}

impl<P: Provider> AlloyChainReader<P> {
    /// Wraps `provider`.
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns the inner provider.
    pub const fn provider(&self) -> &P {
        &self.provider
    }
}

#[async_trait]
impl<P: Provider> ChainReader for AlloyChainReader<P> {
    async fn chain_id(&self) -> ProviderResult<u64> {
        Ok(self.provider.get_chain_id().await?)
    }

    async fn confirm_period_blocks(&self, rollup: Address) -> ProviderResult<u64> {
        contract::read(&self.provider, rollup, IRollupCore::confirmPeriodBlocksCall {}).await
    }

    async fn allowed_outbox(&self, bridge: Address, index: U256) -> ProviderResult<Address> {
        contract::read(&self.provider, bridge, IBridge::allowedOutboxListCall { index }).await
    }
}
