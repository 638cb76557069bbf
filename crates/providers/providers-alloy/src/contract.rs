//! Typed contract calls over any alloy [Provider].

use crate::{ProviderError, ProviderResult};
use alloy_network::TransactionBuilder;
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use alloy_rpc_types_eth::{TransactionReceipt, TransactionRequest};
use alloy_sol_types::SolCall;
use tracing::debug;

/// Builds the transaction request invoking `call` on `to`, attaching `value` wei.
pub fn call_request<C: SolCall>(to: Address, call: &C, value: U256) -> TransactionRequest {
    TransactionRequest::default().with_to(to).with_input(call.abi_encode()).with_value(value)
}

/// Executes a read-only `call` against `to` and decodes its return data.
pub async fn read<P, C>(provider: &P, to: Address, call: C) -> ProviderResult<C::Return>
where
    P: Provider,
    C: SolCall + Send + Sync,
{
    let output = provider.call(call_request(to, &call, U256::ZERO)).await?;
    Ok(C::abi_decode_returns(&output)?)
}

/// Submits `request` and waits for it to be mined.
///
/// A reverted transaction is returned as [`ProviderError::Reverted`].
pub async fn submit<P: Provider>(
    provider: &P,
    request: TransactionRequest,
) -> ProviderResult<TransactionReceipt> {
    let pending = provider.send_transaction(request).await?;
    debug!(target: "provider", tx_hash = %pending.tx_hash(), "Transaction submitted");
    let receipt = ensure_success(pending.get_receipt().await?)?;
    debug!(
        target: "provider",
        tx_hash = %receipt.transaction_hash,
        block = ?receipt.block_number,
        "Transaction mined"
    );
    Ok(receipt)
}

/// Returns `receipt` if its transaction succeeded, or [`ProviderError::Reverted`].
pub fn ensure_success(receipt: TransactionReceipt) -> ProviderResult<TransactionReceipt> {
    if !receipt.status() {
        return Err(ProviderError::Reverted(receipt.transaction_hash));
    }
    Ok(receipt)
}

/// Invokes a state-changing `call` on `to` and waits for it to be mined.
pub async fn send<P, C>(
    provider: &P,
    to: Address,
    call: C,
    value: U256,
) -> ProviderResult<TransactionReceipt>
where
    P: Provider,
    C: SolCall + Send + Sync,
{
    submit(provider, call_request(to, &call, value)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abi::IInbox;
    use alloy_primitives::{Bytes, TxHash, TxKind};

    fn receipt(status: &str) -> TransactionReceipt {
        let hash = format!("0x{}", "ab".repeat(32));
        serde_json::from_value(serde_json::json!({
            "transactionHash": hash,
            "transactionIndex": "0x0",
            "blockHash": format!("0x{}", "cd".repeat(32)),
            "blockNumber": "0x1",
            "from": format!("0x{}", "11".repeat(20)),
            "to": format!("0x{}", "22".repeat(20)),
            "cumulativeGasUsed": "0x5208",
            "gasUsed": "0x5208",
            "effectiveGasPrice": "0x1",
            "contractAddress": null,
            "logs": [],
            "logsBloom": format!("0x{}", "00".repeat(256)),
            "type": "0x2",
            "status": status,
        }))
        .unwrap()
    }

    #[test]
    fn test_call_request() {
        let inbox = Address::repeat_byte(0x11);
        let request = call_request(inbox, &IInbox::depositEthCall {}, U256::from(7));
        assert_eq!(request.to, Some(TxKind::Call(inbox)));
        assert_eq!(request.value, Some(U256::from(7)));
        assert_eq!(
            request.input.input().cloned(),
            Some(Bytes::from(IInbox::depositEthCall::SELECTOR.to_vec()))
        );
    }

    #[test]
    fn test_ensure_success_passes_mined_receipt() {
        let mined = ensure_success(receipt("0x1")).unwrap();
        assert_eq!(mined.transaction_hash, TxHash::repeat_byte(0xab));
        assert_eq!(mined.block_number, Some(1));
    }

    #[test]
    fn test_ensure_success_maps_revert() {
        let err = ensure_success(receipt("0x0")).unwrap_err();
        let reverted = TxHash::repeat_byte(0xab);
        assert!(matches!(&err, ProviderError::Reverted(hash) if *hash == reverted));
        assert_eq!(err.to_string(), format!("Transaction {} reverted", TxHash::repeat_byte(0xab)));
    }
}
