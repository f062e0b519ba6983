//! FastTestToken E2E tests

use alloy::primitives::U256;
use evm_token_client::{ContractKind, ContractTemplate, Error};

use crate::common::TestHarness;
use crate::skip_if_no_anvil;

const KIND: ContractKind = ContractKind::FastTestToken;

/// The parameterless constructor bakes in name and supply
#[tokio::test(flavor = "multi_thread")]
async fn test_deploy_and_query() {
    skip_if_no_anvil!();

    let harness = TestHarness::new().await;
    let deployment = harness.deploy(KIND, &[]).await;
    let token = deployment.address;

    let (_, report) = harness.execute(KIND, token, "name", &[]).await;
    assert_eq!(report, format!("info: Token Name: FastTestToken for FastTestToken ({token})\n"));

    let (session, _) = harness.execute(KIND, token, "totalSupply", &[]).await;
    assert!(session.template().state().queried().total_supply.unwrap() > U256::ZERO);
}

/// Constructor arguments are rejected before anything is sent
#[tokio::test(flavor = "multi_thread")]
async fn test_deploy_with_arguments_fails() {
    skip_if_no_anvil!();

    let harness = TestHarness::new().await;
    let mut session = harness.session(KIND, None).await;

    let err = session.deploy(&["FastTestToken".to_string()]).await.unwrap_err();
    assert!(matches!(err, Error::Arity { got: 1, want: 0 }));
    assert_eq!(session.transaction_context().nonce, 0);
}

/// transferFrom spends an allowance granted by the owner
#[tokio::test(flavor = "multi_thread")]
async fn test_transfer_from_after_approve() {
    skip_if_no_anvil!();

    let harness = TestHarness::new().await;
    let deployment = harness.deploy(KIND, &[]).await;
    let token = deployment.address;
    let owner = harness.signer_address();
    let recipient = harness.other_address();

    // the signer approves itself, then moves its own tokens through the allowance
    harness
        .execute(KIND, token, "approve", &[owner.to_string(), "40".to_string()])
        .await;
    let (_, report) = harness
        .execute(
            KIND,
            token,
            "transferfrom",
            &[owner.to_string(), recipient.to_string(), "40".to_string()],
        )
        .await;
    assert_eq!(
        report,
        format!(
            "info: Transferred From {owner} 40 tokens at FastTestToken ({token}) to address {recipient}\n"
        )
    );

    let (session, _) = harness
        .execute(KIND, token, "balanceof", &[recipient.to_string()])
        .await;
    assert_eq!(session.template().state().queried().balance_of[&recipient], U256::from(40));
}

/// Supply management is not part of this template
#[tokio::test(flavor = "multi_thread")]
async fn test_mint_is_unsupported() {
    skip_if_no_anvil!();

    let harness = TestHarness::new().await;
    let deployment = harness.deploy(KIND, &[]).await;
    let mut session = harness.session(KIND, Some(deployment.address)).await;

    let err = session
        .execute("mint", &[harness.signer_address().to_string(), "1".to_string()])
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "error: Unsupported function name mint for contract type fast_test_token"
    );
}
