//! Contains the [`TestSigner`], an account bound to a chain endpoint.

use crate::{AlloyChainReader, ProviderError, ProviderResult};
use alloy_network::EthereumWallet;
use alloy_primitives::Address;
use alloy_provider::{DynProvider, Provider, ProviderBuilder};
use alloy_signer_local::PrivateKeySigner;
use std::fmt;
use tracing::debug;
use url::Url;

/// An account able to sign transactions on one chain.
///
/// Either holds a local private key, or delegates signing to an account unlocked on the node.
#[derive(Clone)]
pub struct TestSigner {
    provider: DynProvider,
    address: Address,
    url: Url,
}

impl TestSigner {
    /// Connects to `url` as the account controlled by `key`.
    ///
    /// Without a key the node's first unlocked account is used.
    pub async fn connect(url: Url, key: Option<&str>) -> ProviderResult<Self> {
        match key {
            Some(key) => Ok(Self::from_signer(url, key.trim().parse()?)),
            None => Self::unlocked(url).await,
        }
    }

    /// Connects to `url` as the account controlled by `signer`.
    pub fn from_signer(url: Url, signer: PrivateKeySigner) -> Self {
        let address = signer.address();
        let provider =
            ProviderBuilder::new().wallet(EthereumWallet::from(signer)).connect_http(url.clone());
        debug!(target: "signer", %address, %url, "Connected local signer");
        Self { provider: provider.erased(), address, url }
    }

    /// Connects to `url` as a freshly generated account.
    pub fn random(url: Url) -> Self {
        Self::from_signer(url, PrivateKeySigner::random())
    }

    /// Connects to `url` as the node's first unlocked account.
    pub async fn unlocked(url: Url) -> ProviderResult<Self> {
        let provider = ProviderBuilder::new().connect_http(url.clone()).erased();
        let address = provider
            .get_accounts()
            .await?
            .first()
            .copied()
            .ok_or_else(|| ProviderError::NoAccounts(url.to_string()))?;
        debug!(target: "signer", %address, %url, "Using unlocked node account");
        Ok(Self { provider, address, url })
    }

    /// Creates a random signer whose requests are answered by `asserter`.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn mocked(asserter: alloy_transport::mock::Asserter) -> Self {
        let signer = PrivateKeySigner::random();
        let address = signer.address();
        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_mocked_client(asserter)
            .erased();
        let url = Url::parse("http://127.0.0.1:0").expect("valid url");
        Self { provider, address, url }
    }

    /// The address of the account.
    pub const fn address(&self) -> Address {
        self.address
    }

    /// The provider signing as this account.
    pub const fn provider(&self) -> &DynProvider {
        &self.provider
    }

    /// The endpoint the signer is connected to.
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Returns a [`ChainReader`](crate::ChainReader) over the same connection.
    pub fn reader(&self) -> AlloyChainReader<DynProvider> {
        AlloyChainReader::new(self.provider.clone())
    }
}

impl fmt::Debug for TestSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestSigner")
            .field("address", &self.address)
            .field("url", &self.url.as_str())
            .finish_non_exhaustive()
    }
}
