//! Funding through the setup entry points against a local anvil node.
//!
//! Each test returns early when `anvil` is not installed.

use alloy_node_bindings::{Anvil, AnvilInstance};
use alloy_primitives::U256;
use alloy_provider::Provider;
use testnode_providers_alloy::{PRE_FUND_AMOUNT, TestSigner};
use testnode_setup::{SetupConfig, fund_l1, fund_l2};

const ANVIL_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

fn spawn_anvil() -> Option<AnvilInstance> {
    match Anvil::new().try_spawn() {
        Ok(anvil) => Some(anvil),
        Err(err) => {
            eprintln!("skipping: anvil unavailable: {err}");
            None
        }
    }
}

fn config(anvil: &AnvilInstance) -> SetupConfig {
    let mut config = SetupConfig::new(anvil.endpoint_url(), anvil.endpoint_url());
    config.eth_key = Some(ANVIL_KEY.to_string());
    config
}

#[tokio::test]
async fn test_fund_l1_credits_signer() {
    let Some(anvil) = spawn_anvil() else { return };
    let signer = TestSigner::random(anvil.endpoint_url());
    let amount = U256::from(10u64).pow(U256::from(15u64));

    let receipt = fund_l1(&config(&anvil), &signer, Some(amount)).await.unwrap();
    assert_eq!(receipt.to, Some(signer.address()));
    assert_eq!(signer.provider().get_balance(signer.address()).await.unwrap(), amount);
}

#[tokio::test]
async fn test_fund_l2_falls_back_to_unlocked_account() {
    let Some(anvil) = spawn_anvil() else { return };
    let signer = TestSigner::random(anvil.endpoint_url());

    fund_l2(&config(&anvil), &signer, None).await.unwrap();
    let balance = signer.provider().get_balance(signer.address()).await.unwrap();
    assert_eq!(balance, PRE_FUND_AMOUNT);
}
