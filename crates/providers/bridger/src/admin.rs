//! Contains the [`AdminErc20Bridger`], which registers token gateways on the routers.

use crate::{BridgerError, BridgerResult, Erc20Bridger, eth::check_chain};
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use alloy_rpc_types_eth::{BlockNumberOrTag, TransactionReceipt};
use alloy_sol_types::SolCall;
use core::ops::Deref;
use std::time::Duration;
use testnode_network::L2Network;
use testnode_providers_alloy::{
    TestSigner,
    abi::{IInbox, IL1GatewayRouter, IL2GatewayRouter},
    contract,
};
use tracing::{debug, info};

/// Gas limit granted to the retryable ticket that forwards gateway registrations to the rollup.
pub const DEFAULT_MAX_GAS: u64 = 1_000_000;

/// Buffer applied to the submission fee quoted by the inbox, in percent.
pub const SUBMISSION_FEE_PERCENT_INCREASE: u64 = 300;

/// Buffer applied to the rollup gas price, in percent.
pub const GAS_PRICE_PERCENT_INCREASE: u64 = 500;

/// Returns `value` increased by `percent` percent.
pub fn percent_increase(value: U256, percent: u64) -> U256 {
    value + value * U256::from(percent) / U256::from(100)
}

/// Returns the base fee of the latest parent chain block.
///
/// Falls back to the node's gas price for chains without a base fee.
pub async fn latest_base_fee<P: Provider>(provider: &P) -> BridgerResult<u128> {
    let block = provider.get_block_by_number(BlockNumberOrTag::Latest).await?;
    match block.and_then(|block| block.header.base_fee_per_gas) {
        Some(base_fee) => Ok(base_fee.into()),
        None => Ok(provider.get_gas_price().await?),
    }
}

/// A token and the gateway the router should send it through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenGateway {
    /// The parent chain token.
    pub token: Address,
    /// The parent chain gateway.
    pub gateway: Address,
}

/// Gas parameters of the retryable ticket created by `setGateways`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryableParams {
    /// Gas limit of the rollup execution.
    pub max_gas: U256,
    /// Rollup gas price bid.
    pub gas_price_bid: U256,
    /// Fee paid for submitting the ticket.
    pub max_submission_cost: U256,
}

impl RetryableParams {
    /// Derives the parameters from a quoted submission fee and the current rollup gas price,
    /// applying the default buffers.
    pub fn new(submission_fee: U256, l2_gas_price: U256) -> Self {
        Self {
            max_gas: U256::from(DEFAULT_MAX_GAS),
            gas_price_bid: percent_increase(l2_gas_price, GAS_PRICE_PERCENT_INCREASE),
            max_submission_cost: percent_increase(submission_fee, SUBMISSION_FEE_PERCENT_INCREASE),
        }
    }

    /// The value that has to accompany the ticket.
    pub fn deposit(&self) -> U256 {
        self.max_submission_cost + self.max_gas * self.gas_price_bid
    }
}

/// The outcome of [`AdminErc20Bridger::set_gateways`].
#[derive(Debug, Clone)]
pub struct GatewayRegistration {
    /// The mined parent chain transaction.
    pub receipt: TransactionReceipt,
    /// The gas parameters the ticket was created with.
    pub params: RetryableParams,
    /// The registered gateways.
    pub gateways: Vec<TokenGateway>,
}

/// An [`Erc20Bridger`] with the router owner's privileges.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminErc20Bridger {
    inner: Erc20Bridger,
}

impl AdminErc20Bridger {
    /// Creates an admin bridger for `l2_network`.
    pub fn new(l2_network: &L2Network) -> Self {
        Self { inner: Erc20Bridger::new(l2_network) }
    }

    /// Routes each token through its gateway.
    ///
    /// The parent chain router forwards the registration to the rollup router as a retryable
    /// ticket, so `l1_signer` must own the parent chain router. Returns once the parent chain
    /// transaction is mined. Use [`Self::wait_for_l2_gateway`] to wait for the rollup side.
    pub async fn set_gateways<P: Provider>(
        &self,
        l1_signer: &TestSigner,
        l2_provider: &P,
        gateways: &[TokenGateway],
    ) -> BridgerResult<GatewayRegistration> {
        check_chain(l1_signer, self.l2_network().parent_chain_id()).await?;
        if let Some(zero) = gateways.iter().find(|g| g.gateway.is_zero()) {
            return Err(BridgerError::ZeroGateway(zero.token));
        }
        let tokens: Vec<Address> = gateways.iter().map(|g| g.token).collect();
        let targets: Vec<Address> = gateways.iter().map(|g| g.gateway).collect();

        let forwarded =
            IL2GatewayRouter::setGatewayCall { l1Token: tokens.clone(), gateway: targets.clone() };
        let l1_provider = l1_signer.provider();
        let params =
            self.quote_retryable(l1_provider, l2_provider, forwarded.abi_encode().len()).await?;

        let router = self.token_bridge().l1_gateway_router;
        let call = IL1GatewayRouter::setGatewaysCall {
            token: tokens,
            gateway: targets,
            maxGas: params.max_gas,
            gasPriceBid: params.gas_price_bid,
            maxSubmissionCost: params.max_submission_cost,
        };
        let receipt = contract::send(l1_provider, router, call, params.deposit()).await?;
        info!(
            target: "bridger",
            tx_hash = %receipt.transaction_hash,
            count = gateways.len(),
            "Registered gateways on the parent chain"
        );

        Ok(GatewayRegistration { receipt, params, gateways: gateways.to_vec() })
    }

    /// Quotes the retryable ticket forwarding `data_length` bytes of calldata to the rollup.
    ///
    /// The submission fee is quoted by the inbox at the latest parent chain base fee. Both the
    /// fee and the rollup gas price get the default buffers.
    pub async fn quote_retryable<L: Provider, R: Provider>(
        &self,
        l1_provider: &L,
        l2_provider: &R,
        data_length: usize,
    ) -> BridgerResult<RetryableParams> {
        let l1_base_fee = latest_base_fee(l1_provider).await?;
        let submission_fee = contract::read(
            l1_provider,
            self.l2_network().eth_bridge().inbox,
            IInbox::calculateRetryableSubmissionFeeCall {
                dataLength: U256::from(data_length),
                baseFee: U256::from(l1_base_fee),
            },
        )
        .await?;
        let l2_gas_price = l2_provider.get_gas_price().await?;
        let params = RetryableParams::new(submission_fee, U256::from(l2_gas_price));
        debug!(
            target: "bridger",
            l1_base_fee,
            ?params,
            deposit = %params.deposit(),
            "Computed retryable parameters"
        );
        Ok(params)
    }

    /// Polls the rollup router every `interval` until it routes `l1_token` through `expected`.
    ///
    /// Never returns on its own if the registration does not arrive. Callers bound it with a
    /// timeout.
    pub async fn wait_for_l2_gateway<P: Provider>(
        &self,
        l2_provider: &P,
        l1_token: Address,
        expected: Address,
        interval: Duration,
    ) -> BridgerResult<()> {
        loop {
            let current = self.l2_gateway_address(l2_provider, l1_token).await?;
            if current == expected {
                info!(
                    target: "bridger",
                    token = %l1_token,
                    gateway = %expected,
                    "Gateway registered on the rollup"
                );
                return Ok(());
            }
            debug!(
                target: "bridger",
                token = %l1_token,
                %current,
                %expected,
                "Waiting for rollup gateway"
            );
            tokio::time::sleep(interval).await;
        }
    }
}

impl Deref for AdminErc20Bridger {
    type Target = Erc20Bridger;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
