//! Errors for the `testnode-providers-alloy` crate.

use alloy_primitives::TxHash;
use alloy_provider::PendingTransactionError;
use alloy_signer_local::LocalSignerError;
use alloy_transport::TransportError;
use thiserror::Error;

/// An error raised while talking to a chain.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The RPC request failed.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The contract returned data that does not match its interface.
    #[error("Failed to decode contract return data: {0}")]
    Abi(#[from] alloy_sol_types::Error),
    /// The transaction was submitted but its receipt could not be obtained.
    #[error(transparent)]
    PendingTransaction(#[from] PendingTransactionError),
    /// The private key could not be parsed.
    #[error("Invalid private key: {0}")]
    Signer(#[from] LocalSignerError),
    /// The transaction was mined but reverted.
    #[error("Transaction {0} reverted")]
    Reverted(TxHash),
    /// The node exposes no unlocked account to sign with.
    #[error("Node at {0} has no unlocked accounts")]
    NoAccounts(String),
}

/// A [Result] type alias where the error is [ProviderError].
pub type ProviderResult<T> = Result<T, ProviderError>;
