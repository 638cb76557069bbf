#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/testnode-rs/testnode/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod cli;
mod commands;

use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    cli::Cli::parse().run().await
}
