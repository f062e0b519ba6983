//! Common test utilities for E2E tests

use std::time::Duration;

use alloy::network::{AnyNetwork, ReceiptResponse};
use alloy::node_bindings::{Anvil, AnvilInstance};
use alloy::primitives::{Address, TxHash};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use evm_token_client::{ContractKind, ContractTemplate, Deployment, EvmClient, GasSettings, Session};

/// Macro to skip tests when the `anvil` binary is not installed
#[macro_export]
macro_rules! skip_if_no_anvil {
    () => {
        if !$crate::common::anvil_available() {
            eprintln!("Skipping test: anvil not found in PATH");
            return;
        }
    };
}

pub fn anvil_available() -> bool {
    std::process::Command::new("anvil")
        .arg("--version")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

/// Anvil's base fee starts at 1 gwei, above the 1000 wei default
pub const TEST_GAS: GasSettings = GasSettings {
    gas_limit: 8_000_000,
    gas_price: 2_000_000_000,
};

/// Test harness that spawns a fresh Anvil node
pub struct TestHarness {
    pub provider: DynProvider<AnyNetwork>,
    pub private_key: String,
    pub rpc_url: String,
    pub _anvil: AnvilInstance,
}

impl TestHarness {
    pub async fn new() -> Self {
        let anvil = Anvil::new().spawn();
        let private_key = alloy::hex::encode(anvil.keys()[0].to_bytes());
        let provider = ProviderBuilder::new()
            .network::<AnyNetwork>()
            .connect_http(anvil.endpoint_url())
            .erased();

        Self {
            provider,
            private_key,
            rpc_url: anvil.endpoint(),
            _anvil: anvil,
        }
    }

    /// Address of the funded account the sessions sign with
    pub fn signer_address(&self) -> Address {
        self._anvil.addresses()[0]
    }

    /// A second funded account, used as recipient or spender
    pub fn other_address(&self) -> Address {
        self._anvil.addresses()[1]
    }

    pub async fn session(&self, kind: ContractKind, contract: Option<Address>) -> Session<EvmClient> {
        Session::connect(&self.private_key, &self.rpc_url, kind, TEST_GAS, contract)
            .await
            .expect("Failed to open session")
    }

    /// Deploys `kind` and waits until the contract is mined
    pub async fn deploy(&self, kind: ContractKind, args: &[&str]) -> Deployment {
        let mut session = self.session(kind, None).await;
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        let deployment = session.deploy(&args).await.expect("Failed to deploy");
        self.wait_for(deployment.tx_hash).await;
        deployment
    }

    /// Polls until `tx_hash` has a successful receipt
    pub async fn wait_for(&self, tx_hash: TxHash) {
        for _ in 0..50 {
            let receipt = self
                .provider
                .get_transaction_receipt(tx_hash)
                .await
                .expect("Failed to fetch receipt");
            if let Some(receipt) = receipt {
                assert!(receipt.inner.status(), "transaction {tx_hash} reverted");
                return;
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        panic!("transaction {tx_hash} was not mined");
    }

    /// Runs one function in a fresh session, as the interactor binary does
    pub async fn execute(
        &self,
        kind: ContractKind,
        contract: Address,
        function: &str,
        args: &[String],
    ) -> (Session<EvmClient>, String) {
        let mut session = self.session(kind, Some(contract)).await;
        let report = session
            .execute(function, args)
            .await
            .unwrap_or_else(|e| panic!("{function} failed: {e}"));
        if let Some(tx_hash) = session.template().state().last_tx() {
            self.wait_for(tx_hash).await;
        }
        (session, report)
    }
}
