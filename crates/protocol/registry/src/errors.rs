//! Errors for the `testnode-registry` crate.

use thiserror::Error;

/// An error raised while looking up or registering a network.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// No network is registered under the chain ID.
    #[error("Unrecognized network {0}")]
    UnknownChain(u64),
    /// A network is already registered under the chain ID.
    #[error("Network {0} already included")]
    NetworkAlreadyRegistered(u64),
    /// The parent chain of a rollup is not registered.
    #[error("Network {l2}'s partner network, {l1}, not recognized")]
    MissingParent {
        /// The parent chain ID the rollup names.
        l1: u64,
        /// The rollup chain ID.
        l2: u64,
    },
}

/// A [Result] type alias where the error is [RegistryError].
pub type RegistryResult<T> = Result<T, RegistryError>;
