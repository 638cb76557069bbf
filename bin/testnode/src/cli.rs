//! Contains the testnode CLI.

use crate::commands::{FundCommand, GenNetworkCommand, ResolveCommand};
use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use testnode_cli::{EndpointArgs, init_tracing_subscriber};
use testnode_setup::SetupConfig;
use tracing_subscriber::EnvFilter;

/// Subcommands for the CLI.
#[derive(Debug, Clone, Subcommand)]
pub(crate) enum Commands {
    /// Discovers a running testnode, provisions its token bridge and persists the network pair.
    #[command(alias = "gen")]
    GenNetwork(GenNetworkCommand),
    /// Prints the network pair an integration test would resolve.
    Resolve(ResolveCommand),
    /// Sends ether to an address on one of the chains.
    Fund(FundCommand),
}

/// The testnode CLI.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Cli {
    /// Verbosity level (0-5).
    /// If set to 0, no logs are printed.
    /// By default, the verbosity level is set to 3 (info level).
    #[arg(long, short, default_value = "3", action = ArgAction::Count, global = true)]
    pub(crate) v: u8,
    /// Chain endpoints and keys.
    #[command(flatten)]
    pub(crate) endpoints: EndpointArgs,
    /// The subcommand to run.
    #[command(subcommand)]
    pub(crate) subcommand: Commands,
}

impl Cli {
    /// Builds the setup configuration from the endpoint flags.
    pub(crate) fn config(&self) -> SetupConfig {
        let endpoints = &self.endpoints;
        let mut config = SetupConfig::new(endpoints.eth_url.clone(), endpoints.arb_url.clone());
        config.eth_key = endpoints.eth_key.clone();
        config.arb_key = endpoints.arb_key.clone();
        config
    }

    /// Runs the subcommand.
    pub(crate) async fn run(self) -> Result<()> {
        init_tracing_subscriber(self.v, None::<EnvFilter>)?;
        let config = self.config();
        match self.subcommand {
            Commands::GenNetwork(cmd) => cmd.run(config).await,
            Commands::Resolve(cmd) => cmd.run(config).await,
            Commands::Fund(cmd) => cmd.run(config).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Layer;
    use rstest::rstest;
    use std::{path::PathBuf, time::Duration};

    const ENDPOINTS: [&str; 4] =
        ["--eth-url", "http://127.0.0.1:8545", "--arb-url", "http://127.0.0.1:8547"];

    fn parse(args: &[&str]) -> Cli {
        let argv = ["testnode"].into_iter().chain(ENDPOINTS).chain(args.iter().copied());
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_default_verbosity() {
        assert_eq!(parse(&["resolve"]).v, 3);
    }

    #[test]
    fn test_config_keys() {
        let config = parse(&["--eth-key", "0x01", "--arb-key", "0x02", "resolve"]).config();
        assert_eq!(config.eth_url.port(), Some(8545));
        assert_eq!(config.arb_url.port(), Some(8547));
        assert_eq!(config.eth_key.as_deref(), Some("0x01"));
        assert_eq!(config.arb_key.as_deref(), Some("0x02"));
        assert_eq!(config.network_file, Some(PathBuf::from(testnode_setup::DEFAULT_NETWORK_FILE)));
    }

    #[test]
    fn test_gen_network_flags() {
        let cli = parse(&[
            "gen-network",
            "--output",
            "/tmp/network.json",
            "--containers",
            "a,b",
            "--l2-timeout-secs",
            "5",
        ]);
        let Commands::GenNetwork(cmd) = cli.subcommand else { panic!("expected gen-network") };
        assert_eq!(cmd.output, PathBuf::from("/tmp/network.json"));
        assert_eq!(cmd.containers, ["a", "b"]);
        assert_eq!(cmd.l2_timeout(), Duration::from_secs(5));
    }

    #[rstest]
    #[case::l1("l1", Layer::L1)]
    #[case::l2("l2", Layer::L2)]
    fn test_fund_layer(#[case] layer: &str, #[case] expected: Layer) {
        let to = format!("0x{}", "11".repeat(20));
        let cli = parse(&["fund", layer, &to, "--amount", "1000"]);
        let Commands::Fund(cmd) = cli.subcommand else { panic!("expected fund") };
        assert_eq!(cmd.layer, expected);
        assert_eq!(cmd.amount.map(|a| a.to::<u64>()), Some(1000));
    }

    #[test]
    fn test_fund_rejects_bad_address() {
        let argv = ["testnode"].into_iter().chain(ENDPOINTS).chain(["fund", "l1", "0x12"]);
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_dotenv_supplies_endpoints() {
        if std::env::var_os("ETH_URL").is_some() || std::env::var_os("ARB_URL").is_some() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "ETH_URL=http://127.0.0.1:9545\nARB_URL=http://127.0.0.1:9547\n")
            .unwrap();
        dotenv::from_path(&path).unwrap();

        let config = Cli::try_parse_from(["testnode", "resolve"]).unwrap().config();
        assert_eq!(config.eth_url.port(), Some(9545));
        assert_eq!(config.arb_url.port(), Some(9547));
    }
}
