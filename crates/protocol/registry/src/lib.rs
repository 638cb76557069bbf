//! Known L1 and rollup networks, keyed by chain ID.
#![doc(issue_tracker_base_url = "https://github.com/testnode-rs/testnode/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub use testnode_network::{L1Network, L2Network};

mod builtin;
pub use builtin::BuiltinNetworks;

mod errors;
pub use errors::{RegistryError, RegistryResult};

mod registry;
pub use registry::{NetworkRegistry, Registration};

lazy_static::lazy_static! {
    /// The networks compiled into the crate.
    pub static ref BUILTIN_NETWORKS: BuiltinNetworks = BuiltinNetworks::read();
}
