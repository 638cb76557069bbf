//! Shared CLI utilities for testnode binaries.
#![doc(issue_tracker_base_url = "https://github.com/testnode-rs/testnode/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod logging;
pub use logging::{CliError, init_tracing_subscriber, verbosity_level};

mod args;
pub use args::EndpointArgs;
