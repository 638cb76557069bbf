//! Errors for the `testnode-bridger` crate.

use alloy_primitives::Address;
use alloy_transport::TransportError;
use testnode_providers_alloy::ProviderError;
use thiserror::Error;

/// An error raised by a bridger.
#[derive(Error, Debug)]
pub enum BridgerError {
    /// A chain call failed.
    #[error(transparent)]
    Provider(#[from] ProviderError),
    /// The signer is connected to a different chain than the one the call targets.
    #[error("Signer is on chain {actual}, expected chain {expected}")]
    WrongChain {
        /// The chain the call targets.
        expected: u64,
        /// The chain the signer is connected to.
        actual: u64,
    },
    /// A token was registered with the zero gateway.
    #[error("Gateway for token {0} is the zero address")]
    ZeroGateway(Address),
}

impl From<TransportError> for BridgerError {
    fn from(err: TransportError) -> Self {
        Self::Provider(err.into())
    }
}

/// A [Result] type alias where the error is [BridgerError].
pub type BridgerResult<T> = Result<T, BridgerError>;
