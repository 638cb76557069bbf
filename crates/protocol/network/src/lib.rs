//! Descriptor types for the parent chain and the rollup chain of a two-chain network.
//!
//! An [`L2Network`] is built in two phases: discovery produces a [`PartialL2Network`] and
//! [`PartialL2Network::complete`] attaches the [`TokenBridge`] once it has been deployed.
#![doc(issue_tracker_base_url = "https://github.com/testnode-rs/testnode/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod l1;
pub use l1::L1Network;

mod l2;
pub use l2::{
    ARB_MINIMUM_BLOCK_TIME_IN_SECONDS, EthBridge, L2Network, PartialL2Network,
    SEVEN_DAYS_IN_SECONDS,
};

mod token_bridge;
pub use token_bridge::TokenBridge;

mod pair;
pub use pair::NetworkPair;
