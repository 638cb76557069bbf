//! Subcommands of the testnode CLI.

mod gen_network;
pub(crate) use gen_network::GenNetworkCommand;

mod resolve;
pub(crate) use resolve::ResolveCommand;

mod fund;
pub(crate) use fund::{FundCommand, Layer};
