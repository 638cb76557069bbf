//! Reading the deployment manifest of a running testnode.

use crate::{SetupError, SetupResult};
use alloy_primitives::Address;
use async_trait::async_trait;
use serde::Deserialize;
use std::{future::Future, time::Duration};
use tokio::process::Command;
use tracing::{debug, info};

/// Path of the deployment manifest inside the sequencer container.
pub const MANIFEST_PATH: &str = "/config/deployment.json";

/// How long [`DockerExec`] waits for `docker exec` to finish.
pub const DEFAULT_MANIFEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Core contract addresses written by the rollup deployment.
///
/// Additional keys of the manifest are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DeploymentManifest {
    /// The bridge.
    pub bridge: Address,
    /// The delayed inbox.
    pub inbox: Address,
    /// The sequencer inbox.
    #[serde(rename = "sequencer-inbox")]
    pub sequencer_inbox: Address,
    /// The rollup core contract.
    pub rollup: Address,
}

impl DeploymentManifest {
    /// Parses a manifest.
    pub fn parse(raw: &str) -> SetupResult<Self> {
        serde_json::from_str(raw).map_err(SetupError::InvalidManifest)
    }
}

/// An error returned by a [`ManifestSource`] for one container.
#[derive(Debug, thiserror::Error)]
pub enum ManifestSourceError {
    /// The command could not be started.
    #[error("Failed to run docker: {0}")]
    Spawn(#[from] std::io::Error),
    /// The command ran and failed.
    #[error("docker exec exited with {status}: {stderr}")]
    Failed {
        /// Exit status.
        status: std::process::ExitStatus,
        /// Captured standard error.
        stderr: String,
    },
    /// The container does not hold a manifest.
    #[error("No manifest in container {0}")]
    NotFound(String),
    /// The command did not finish in time.
    #[error("docker exec did not finish within {0:?}")]
    Timeout(Duration),
}

/// Something that can read the raw deployment manifest out of a named container.
#[async_trait]
pub trait ManifestSource: Send + Sync {
    /// Returns the raw manifest held by `container`.
    async fn read_manifest(&self, container: &str) -> Result<String, ManifestSourceError>;
}

/// Reads the manifest with `docker exec <container> cat /config/deployment.json`.
///
/// The command is killed if it runs longer than the configured timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DockerExec {
    timeout: Duration,
}

impl Default for DockerExec {
    fn default() -> Self {
        Self::new(DEFAULT_MANIFEST_TIMEOUT)
    }
}

impl DockerExec {
    /// Creates a source giving each `docker exec` at most `timeout`.
    pub const fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// The per-container timeout.
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl ManifestSource for DockerExec {
    async fn read_manifest(&self, container: &str) -> Result<String, ManifestSourceError> {
        let output = Command::new("docker")
            .args(["exec", container, "cat", MANIFEST_PATH])
            .kill_on_drop(true)
            .output();
        let output = tokio::time::timeout(self.timeout, output)
            .await
            .map_err(|_| ManifestSourceError::Timeout(self.timeout))??;
        if !output.status.success() {
            return Err(ManifestSourceError::Failed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Runs `attempt` on each candidate in order and returns the first success with its candidate.
///
/// Returns every failure, in order, if no candidate succeeds.
pub async fn first_success<'a, T, E, F, Fut>(
    candidates: &'a [String],
    mut attempt: F,
) -> Result<(&'a str, T), Vec<(&'a str, E)>>
where
    F: FnMut(&'a str) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut failures = Vec::with_capacity(candidates.len());
    for candidate in candidates.iter().map(String::as_str) {
        match attempt(candidate).await {
            Ok(value) => return Ok((candidate, value)),
            Err(err) => failures.push((candidate, err)),
        }
    }
    Err(failures)
}

/// Tries `containers` in order and parses the first manifest found.
///
/// A manifest that fails to parse is fatal. The remaining containers are not tried.
pub async fn find_manifest<S>(source: &S, containers: &[String]) -> SetupResult<DeploymentManifest>
where
    S: ManifestSource + ?Sized,
{
    match first_success(containers, |container| source.read_manifest(container)).await {
        Ok((container, raw)) => {
            info!(target: "manifest", container, "Found deployment manifest");
            DeploymentManifest::parse(&raw)
        }
        Err(failures) => {
            for (container, err) in &failures {
                debug!(target: "manifest", container, %err, "Container did not return a manifest");
            }
            Err(SetupError::LocalEnvironmentUnavailable(containers.to_vec()))
        }
    }
}
