//! DetailedTestToken E2E tests

use alloy::primitives::{Address, U256};
use evm_token_client::{ContractKind, ContractTemplate, Error};

use crate::common::TestHarness;
use crate::skip_if_no_anvil;

const KIND: ContractKind = ContractKind::DetailedTestToken;

/// Deploy, then read the constructor parameters back
#[tokio::test(flavor = "multi_thread")]
async fn test_deploy_and_query_metadata() {
    skip_if_no_anvil!();

    let harness = TestHarness::new().await;
    let deployment = harness.deploy(KIND, &["DetailedTestToken", "DTT", "1000"]).await;

    let expected_address = harness.signer_address().create(0);
    assert_eq!(deployment.address, expected_address);

    let (_, report) = harness.execute(KIND, deployment.address, "name", &[]).await;
    assert_eq!(
        report,
        format!("info: Token Name: DetailedTestToken for DetailedTestToken ({expected_address})\n")
    );

    let (session, report) = harness.execute(KIND, deployment.address, "SYMBOL", &[]).await;
    assert_eq!(session.template().state().queried().symbol.as_deref(), Some("DTT"));
    assert!(report.starts_with("info: Token Symbol: DTT for DetailedTestToken"));
}

/// The deployer holds the whole initial supply
#[tokio::test(flavor = "multi_thread")]
async fn test_initial_supply_belongs_to_deployer() {
    skip_if_no_anvil!();

    let harness = TestHarness::new().await;
    let deployment = harness.deploy(KIND, &["DetailedTestToken", "DTT", "1000"]).await;
    let deployer = harness.signer_address();

    let (session, _) = harness.execute(KIND, deployment.address, "totalsupply", &[]).await;
    let total_supply = session.template().state().queried().total_supply.unwrap();
    assert!(total_supply > U256::ZERO);

    let (session, _) = harness
        .execute(KIND, deployment.address, "balanceof", &[deployer.to_string()])
        .await;
    assert_eq!(session.template().state().queried().balance_of[&deployer], total_supply);
}

/// Mint, transfer and burn move balances as reported
#[tokio::test(flavor = "multi_thread")]
async fn test_mint_transfer_and_burn() {
    skip_if_no_anvil!();

    let harness = TestHarness::new().await;
    let deployment = harness.deploy(KIND, &["DetailedTestToken", "DTT", "1000"]).await;
    let token = deployment.address;
    let deployer = harness.signer_address();
    let recipient = harness.other_address();

    let (session, report) = harness
        .execute(KIND, token, "mint", &[recipient.to_string(), "500".to_string()])
        .await;
    assert!(session.template().state().last_tx().is_some());
    assert_eq!(
        report,
        format!("info: Minted 500 tokens to {recipient} at DetailedTestToken ({token})\n")
    );

    let (_, report) = harness
        .execute(KIND, token, "transfer", &[recipient.to_string(), "100".to_string()])
        .await;
    assert_eq!(
        report,
        format!(
            "info: Transferred 100 tokens at DetailedTestToken ({token}) to address {recipient}\n"
        )
    );

    let (session, _) = harness
        .execute(KIND, token, "balanceof", &[recipient.to_string()])
        .await;
    assert_eq!(session.template().state().queried().balance_of[&recipient], U256::from(600));

    harness
        .execute(KIND, token, "burn", &[recipient.to_string(), "50".to_string()])
        .await;

    let (session, _) = harness
        .execute(KIND, token, "balanceof", &[recipient.to_string()])
        .await;
    assert_eq!(session.template().state().queried().balance_of[&recipient], U256::from(550));
    assert_ne!(deployer, recipient);
}

/// Approve, then read the allowance back through the nested cache
#[tokio::test(flavor = "multi_thread")]
async fn test_approve_and_allowance() {
    skip_if_no_anvil!();

    let harness = TestHarness::new().await;
    let deployment = harness.deploy(KIND, &["DetailedTestToken", "DTT", "1000"]).await;
    let token = deployment.address;
    let owner = harness.signer_address();
    let spender = harness.other_address();

    harness
        .execute(KIND, token, "approve", &[spender.to_string(), "250".to_string()])
        .await;
    harness
        .execute(KIND, token, "increaseallowance", &[spender.to_string(), "50".to_string()])
        .await;

    let (session, report) = harness
        .execute(KIND, token, "allowance", &[owner.to_string(), spender.to_string()])
        .await;
    assert_eq!(session.template().state().queried().allowance[&owner][&spender], U256::from(300));
    assert_eq!(
        report,
        format!(
            "info: Token Allowance of spender {spender} from owner {owner} is 300 for DetailedTestToken ({token})\n"
        )
    );
}

/// Two writes in one session use consecutive nonces
#[tokio::test(flavor = "multi_thread")]
async fn test_session_advances_nonce_between_writes() {
    skip_if_no_anvil!();

    let harness = TestHarness::new().await;
    let deployment = harness.deploy(KIND, &["DetailedTestToken", "DTT", "1000"]).await;
    let spender = harness.other_address();

    let mut session = harness.session(KIND, Some(deployment.address)).await;
    let start = session.transaction_context().nonce;

    session
        .execute("approve", &[spender.to_string(), "1".to_string()])
        .await
        .unwrap();
    let first = session.template().state().last_tx().unwrap();
    session
        .execute("approve", &[spender.to_string(), "2".to_string()])
        .await
        .unwrap();
    let second = session.template().state().last_tx().unwrap();

    assert_ne!(first, second);
    assert_eq!(session.transaction_context().nonce, start + 2);
    harness.wait_for(first).await;
    harness.wait_for(second).await;
}

/// The interactor refuses addresses that hold no code
#[tokio::test(flavor = "multi_thread")]
async fn test_missing_contract_is_rejected() {
    skip_if_no_anvil!();

    let harness = TestHarness::new().await;
    let empty = Address::with_last_byte(0x42);

    let result = evm_token_client::Session::connect(
        &harness.private_key,
        &harness.rpc_url,
        KIND,
        crate::common::TEST_GAS,
        Some(empty),
    )
    .await;

    match result {
        Err(Error::ContractNotFound(address)) => assert_eq!(address, empty),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("session opened against an empty address"),
    }
}
