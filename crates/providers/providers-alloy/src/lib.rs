//! Alloy backed chain access for the testnode harness: contract interfaces, chain readers,
//! signers and account funding.
#![doc(issue_tracker_base_url = "https://github.com/testnode-rs/testnode/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod abi;

pub mod contract;

mod errors;
pub use errors::{ProviderError, ProviderResult};

mod reader;
pub use reader::{AlloyChainReader, ChainReader};

mod signer;
pub use signer::TestSigner;

mod fund;
pub use fund::{PRE_FUND_AMOUNT, fund, transfer_request};

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
