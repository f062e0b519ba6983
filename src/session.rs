//! One CLI invocation's worth of state: account, chain, template
//!
//! A [`Session`] is opened once per process. Opening it discovers the chain
//! state, checks that a target contract exists when one is given, and fixes
//! the [`TransactionContext`] every later write is signed with.

use alloy::primitives::Address;
use tracing::{debug, info};

use crate::account::UserAccount;
use crate::client::EvmClient;
use crate::connector::{ChainConnector, MintableInstance};
use crate::error::{Error, Result};
use crate::registry::{self, classify, ContractKind, OperationCategory};
use crate::router;
use crate::templates::{ContractTemplate, TokenTemplate};
use crate::types::{ChainState, Deployment, GasSettings, TransactionContext};

/// Facade over the connector, the template and the router
pub struct Session<C: ChainConnector> {
    account: UserAccount,
    connector: C,
    chain: ChainState,
    tx: TransactionContext,
    template: TokenTemplate<C::Instance>,
}

impl Session<EvmClient> {
    /// Opens a session against a JSON-RPC endpoint.
    ///
    /// With `contract` set, the template is loaded at that address after
    /// checking that code exists there; otherwise it is left ready for
    /// [`deploy`](Session::deploy).
    pub async fn connect(
        private_key: &str,
        rpc_url: &str,
        kind: ContractKind,
        gas: GasSettings,
        contract: Option<Address>,
    ) -> Result<Self> {
        info!("Starting account and blockchain connection process.");
        let account = UserAccount::from_hex(private_key)?;
        info!(
            address = %account.address(),
            public_key = %account.public_key(),
            "accessed account"
        );

        let client = EvmClient::dial(rpc_url, &account)?;
        Self::open(account, client, kind, gas, contract).await
    }
}

impl<C> Session<C>
where
    C: ChainConnector,
    C::Instance: MintableInstance,
{
    /// Opens a session over an arbitrary connector
    pub async fn open(
        account: UserAccount,
        connector: C,
        kind: ContractKind,
        gas: GasSettings,
        contract: Option<Address>,
    ) -> Result<Self> {
        let template = registry::resolve(kind.id())?;
        let chain = connector.chain_state().await?;

        if let Some(address) = contract {
            ensure_code(&connector, address, chain.block_number).await?;
        }

        let nonce = connector.pending_nonce(account.address()).await?;
        let tx = TransactionContext::new(account.address(), nonce, chain.chain_id, gas);
        debug!(?tx, "built transaction context");

        let mut session = Self {
            account,
            connector,
            chain,
            tx,
            template,
        };

        if let Some(address) = contract {
            session.load(address)?;
        }
        Ok(session)
    }

    pub fn account(&self) -> &UserAccount {
        &self.account
    }

    pub fn chain(&self) -> ChainState {
        self.chain
    }

    pub fn transaction_context(&self) -> &TransactionContext {
        &self.tx
    }

    pub fn template(&self) -> &TokenTemplate<C::Instance> {
        &self.template
    }

    pub fn kind(&self) -> ContractKind {
        self.template.kind()
    }

    /// Parses `args` as constructor arguments and deploys a new contract
    pub async fn deploy(&mut self, args: &[String]) -> Result<Deployment> {
        info!(contract = %self.kind(), "starting contract deployment");
        self.template.parse_constructor_args(args)?;
        let deployment = self.template.deploy(&self.tx, &self.connector).await?;
        self.tx.nonce += 1;
        info!(address = %deployment.address, tx_hash = %deployment.tx_hash, "contract deployment submitted");
        Ok(deployment)
    }

    /// Binds the template to an existing contract
    pub fn load(&mut self, address: Address) -> Result<()> {
        self.template.load(address, &self.connector)?;
        info!("{}", self.template.load_report());
        Ok(())
    }

    /// Runs `function` (any case) and returns the execution report
    pub async fn execute(&mut self, function: &str, args: &[String]) -> Result<String> {
        let function = function.to_lowercase();
        let category = classify(self.kind(), &function);
        let report = router::execute(&mut self.template, &function, args, Some(&self.tx)).await?;
        if category == OperationCategory::Write {
            self.tx.nonce += 1;
        }
        Ok(report)
    }

    pub fn deployment_report(&self) -> String {
        self.template.deployment_report()
    }

    pub fn load_report(&self) -> String {
        self.template.load_report()
    }
}

async fn ensure_code<C: ChainConnector>(
    connector: &C,
    address: Address,
    block_number: u64,
) -> Result<()> {
    match connector.code_at(address, block_number).await {
        Ok(code) if !code.is_empty() => Ok(()),
        Ok(_) => Err(Error::ContractNotFound(address)),
        Err(err) => {
            debug!(%address, %err, "code lookup failed");
            Err(Error::ContractNotFound(address))
        }
    }
}
