//! Test utilities for code that reads chain state through a [`ChainReader`].

use crate::{ChainReader, ProviderResult};
use alloy_primitives::{Address, U256};
use alloy_transport::TransportErrorKind;
use async_trait::async_trait;
use std::collections::HashMap;

/// An in-memory [`ChainReader`].
///
/// Queries for contracts that were never configured fail the way a call to an empty address
/// would.
#[derive(Debug, Clone, Default)]
pub struct MockChainReader {
    /// The chain ID returned by [`ChainReader::chain_id`].
    pub chain_id: u64,
    /// `confirmPeriodBlocks()` by rollup address.
    pub confirm_periods: HashMap<Address, u64>,
    /// `allowedOutboxList(0)` by bridge address.
    pub outboxes: HashMap<Address, Address>,
}

impl MockChainReader {
    /// Creates a reader for a chain with no contracts.
    pub fn new(chain_id: u64) -> Self {
        Self { chain_id, ..Default::default() }
    }

    /// Deploys a rollup contract at `rollup`.
    pub fn with_rollup(mut self, rollup: Address, confirm_period_blocks: u64) -> Self {
        self.confirm_periods.insert(rollup, confirm_period_blocks);
        self
    }

    /// Deploys a bridge contract at `bridge` whose first allowed outbox is `outbox`.
    pub fn with_outbox(mut self, bridge: Address, outbox: Address) -> Self {
        self.outboxes.insert(bridge, outbox);
        self
    }
}

#[async_trait]
impl ChainReader for MockChainReader {
    async fn chain_id(&self) -> ProviderResult<u64> {
        Ok(self.chain_id)
    }

    async fn confirm_period_blocks(&self, rollup: Address) -> ProviderResult<u64> {
        self.confirm_periods
            .get(&rollup)
            .copied()
            .ok_or_else(|| TransportErrorKind::custom_str("execution reverted").into())
    }

    async fn allowed_outbox(&self, bridge: Address, index: U256) -> ProviderResult<Address> {
        match self.outboxes.get(&bridge) {
            Some(outbox) if index.is_zero() => Ok(*outbox),
            _ => Err(TransportErrorKind::custom_str("execution reverted").into()),
        }
    }
}
