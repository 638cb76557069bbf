//! Moving ether into test accounts.

use crate::{ProviderResult, TestSigner, contract};
use alloy_network::TransactionBuilder;
use alloy_primitives::{Address, U256};
use alloy_rpc_types_eth::{TransactionReceipt, TransactionRequest};
use tracing::info;

/// Amount sent to a test account when no amount is given: 0.1 ether.
pub const PRE_FUND_AMOUNT: U256 = U256::from_limbs([100_000_000_000_000_000, 0, 0, 0]);

/// Builds a plain transfer of `amount` wei to `to`.
pub fn transfer_request(to: Address, amount: U256) -> TransactionRequest {
    TransactionRequest::default().with_to(to).with_value(amount)
}

/// Sends `amount` (or [`PRE_FUND_AMOUNT`]) from `funder` to `recipient` and waits for the
/// transfer to be mined.
pub async fn fund(
    funder: &TestSigner,
    recipient: Address,
    amount: Option<U256>,
) -> ProviderResult<TransactionReceipt> {
    let amount = amount.unwrap_or(PRE_FUND_AMOUNT);
    info!(
        target: "funding",
        from = %funder.address(),
        to = %recipient,
        %amount,
        url = %funder.url(),
        "Funding account"
    );
    contract::submit(funder.provider(), transfer_request(recipient, amount)).await
}
