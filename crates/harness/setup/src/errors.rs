//! Errors for the `testnode-setup` crate.

use crate::DeployerError;
use std::{path::PathBuf, time::Duration};
use testnode_bridger::BridgerError;
use testnode_providers_alloy::ProviderError;
use testnode_registry::RegistryError;
use thiserror::Error;

/// An error that aborts setting up the test environment.
#[derive(Error, Debug)]
pub enum SetupError {
    /// A required file is absent.
    #[error("Missing file {}", .0.display())]
    MissingConfig(PathBuf),
    /// A required environment variable is absent.
    #[error("Missing environment variable {0}")]
    MissingEnv(&'static str),
    /// An environment variable holds a value that cannot be used.
    #[error("Invalid value {value:?} for {var}")]
    InvalidEnv {
        /// The variable.
        var: &'static str,
        /// The rejected value.
        value: String,
    },
    /// A chain lookup or registration failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),
    /// None of the candidate containers returned a deployment manifest.
    #[error("nitro-testnode sequencer not found, tried containers: {}", .0.join(", "))]
    LocalEnvironmentUnavailable(Vec<String>),
    /// The deployment manifest is not valid JSON or lacks a contract address.
    #[error("Invalid deployment manifest: {0}")]
    InvalidManifest(#[source] serde_json::Error),
    /// The persisted network file could not be parsed.
    #[error("Invalid network file {}: {source}", .path.display())]
    InvalidNetworkFile {
        /// The file.
        path: PathBuf,
        /// The parse error.
        #[source]
        source: serde_json::Error,
    },
    /// Reading or writing a file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// A chain call failed.
    #[error(transparent)]
    Provider(#[from] ProviderError),
    /// A bridger call failed.
    #[error(transparent)]
    Bridger(#[from] BridgerError),
    /// The token bridge could not be deployed.
    #[error(transparent)]
    Deployer(#[from] DeployerError),
    /// The gateway registration did not reach the rollup in time.
    #[error("Gateway registration not observed on L2 after {0:?}")]
    L2ConfirmationTimeout(Duration),
}

/// A [Result] type alias where the error is [SetupError].
pub type SetupResult<T> = Result<T, SetupError>;
