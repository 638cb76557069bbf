//! Bridging helpers bound to a rollup descriptor.
//!
//! Each helper is constructed from an [`L2Network`](testnode_network::L2Network) and only
//! covers the calls a test harness needs while bootstrapping a local network.
#![doc(issue_tracker_base_url = "https://github.com/testnode-rs/testnode/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod errors;
pub use errors::{BridgerError, BridgerResult};

mod eth;
pub use eth::EthBridger;

mod erc20;
pub use erc20::Erc20Bridger;

mod admin;
pub use admin::{
    AdminErc20Bridger, DEFAULT_MAX_GAS, GAS_PRICE_PERCENT_INCREASE, GatewayRegistration,
    RetryableParams, SUBMISSION_FEE_PERCENT_INCREASE, TokenGateway, percent_increase,
};

mod inbox;
pub use inbox::InboxTools;

#[cfg(test)]
mod test_utils;
