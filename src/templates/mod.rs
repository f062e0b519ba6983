//! Contract templates: per-kind deploy, load, query and write behaviour
//!
//! Each supported token kind implements [`ContractTemplate`]. The state both
//! kinds share (address, last transaction, cached query results and the last
//! report) lives in [`TemplateInstance`], which also carries the ERC20 query
//! and write tables common to every kind. Kind-specific operations such as
//! `mint`/`burn` are matched by the variant before it falls back to the
//! shared tables.
//!
//! Function names are matched in lower case. A name that is in neither table
//! is accepted as a no-op: callers are expected to have checked it against
//! the [`registry`](crate::registry) first.

mod detailed;
mod fast;

use std::collections::HashMap;
use std::future::Future;

use alloy::primitives::{Address, Bytes, TxHash, U256};
use tracing::debug;

pub use detailed::{DetailedConstructorArgs, DetailedTestTokenContract};
pub use fast::{FastConstructorArgs, FastTestTokenContract};

use crate::codec::{address_and_amount, parse_address, two_addresses_and_amount, validate_length};
use crate::connector::{ChainConnector, Erc20Instance, MintableInstance};
use crate::error::{Error, Result};
use crate::registry::ContractKind;
use crate::types::{Deployment, TransactionContext};

/// Capability set every token template provides.
pub trait ContractTemplate {
    /// Binding type used to reach the deployed contract
    type Instance: Erc20Instance;

    /// Returns the kind this template implements
    fn kind(&self) -> ContractKind;

    /// Returns the runtime state of the template
    fn state(&self) -> &TemplateInstance<Self::Instance>;

    /// Parses constructor arguments ahead of [`deploy`](Self::deploy)
    fn parse_constructor_args(&mut self, args: &[String]) -> Result<()>;

    /// Deploys a new contract using the parsed constructor arguments
    fn deploy<C>(
        &mut self,
        tx: &TransactionContext,
        connector: &C,
    ) -> impl Future<Output = Result<Deployment>> + Send
    where
        C: ChainConnector<Instance = Self::Instance>;

    /// Binds the template to a contract that is already on chain
    fn load<C>(&mut self, address: Address, connector: &C) -> Result<()>
    where
        C: ChainConnector<Instance = Self::Instance>;

    /// Runs a read-only function and caches its result
    fn query(&mut self, function: &str, args: &[String])
        -> impl Future<Output = Result<()>> + Send;

    /// Sends a state-changing function
    fn write(
        &mut self,
        tx: &TransactionContext,
        function: &str,
        args: &[String],
    ) -> impl Future<Output = Result<()>> + Send;

    /// Describes the last deployment
    fn deployment_report(&self) -> String {
        let state = self.state();
        format!(
            "{} Contract successfully deployed at {}, see transaction here {}",
            self.kind().title(),
            state.address(),
            state.last_tx().unwrap_or_default()
        )
    }

    /// Describes the loaded contract
    fn load_report(&self) -> String {
        format!(
            "{} Contract successfully loaded at {}",
            self.kind().title(),
            self.state().address()
        )
    }

    /// Returns the report left by the last successful query or write
    fn execution_report(&self) -> &str {
        self.state().report()
    }
}

/// Values observed by the most recent query of each field.
///
/// These are caches, not authoritative state: each query overwrites only the
/// entry it read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueriedData {
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub decimals: Option<u8>,
    pub total_supply: Option<U256>,
    /// Keyed by account
    pub balance_of: HashMap<Address, U256>,
    /// Keyed by owner, then spender
    pub allowance: HashMap<Address, HashMap<Address, U256>>,
}

/// Runtime state of one working contract.
#[derive(Debug)]
pub struct TemplateInstance<I> {
    kind: ContractKind,
    address: Address,
    last_tx: Option<TxHash>,
    queried: QueriedData,
    report: String,
    instance: Option<I>,
}

impl<I> TemplateInstance<I> {
    /// Creates an empty, unbound instance
    pub fn new(kind: ContractKind) -> Self {
        Self {
            kind,
            address: Address::ZERO,
            last_tx: None,
            queried: QueriedData::default(),
            report: String::new(),
            instance: None,
        }
    }

    /// Contract address, zero until deployed or loaded
    pub fn address(&self) -> Address {
        self.address
    }

    /// Hash of the last deployment or write
    pub fn last_tx(&self) -> Option<TxHash> {
        self.last_tx
    }

    /// Cached query results
    pub fn queried(&self) -> &QueriedData {
        &self.queried
    }

    /// Report of the last successful query or write
    pub fn report(&self) -> &str {
        &self.report
    }

    /// Whether a contract binding is present
    pub fn is_bound(&self) -> bool {
        self.instance.is_some()
    }

    /// Binds the instance and clears the per-account caches.
    ///
    /// The address is set once; a second bind fails with
    /// [`Error::AlreadyLoaded`] and leaves the state untouched.
    pub fn attach(&mut self, address: Address, instance: I) -> Result<()> {
        self.ensure_unbound()?;
        self.address = address;
        self.instance = Some(instance);
        self.queried.balance_of.clear();
        self.queried.allowance.clear();
        Ok(())
    }

    fn ensure_unbound(&self) -> Result<()> {
        if self.is_bound() {
            return Err(Error::AlreadyLoaded {
                contract: self.kind,
                address: self.address,
            });
        }
        Ok(())
    }

    fn instance(&self) -> Result<&I> {
        self.instance.as_ref().ok_or(Error::NotLoaded(self.kind))
    }
}

impl<I: Erc20Instance> TemplateInstance<I> {
    async fn deploy_with<C>(
        &mut self,
        tx: &TransactionContext,
        connector: &C,
        creation_code: Bytes,
    ) -> Result<Deployment>
    where
        C: ChainConnector<Instance = I>,
    {
        self.ensure_unbound()?;
        let deployment = connector.deploy(tx, creation_code).await?;
        let instance = connector.bind(deployment.address)?;
        self.attach(deployment.address, instance)?;
        self.last_tx = Some(deployment.tx_hash);
        Ok(deployment)
    }

    fn load_with<C>(&mut self, address: Address, connector: &C) -> Result<()>
    where
        C: ChainConnector<Instance = I>,
    {
        self.ensure_unbound()?;
        let instance = connector.bind(address)?;
        self.attach(address, instance)
    }

    /// Dispatches the ERC20 read functions
    async fn query(&mut self, function: &str, args: &[String]) -> Result<()> {
        let label = self.kind.label();
        match function {
            "name" => {
                validate_length(args, 0)?;
                let name = self.instance()?.name().await?;
                self.report = format!("info: Token Name: {name} for {label} ({})\n", self.address);
                self.queried.name = Some(name);
            }
            "symbol" => {
                validate_length(args, 0)?;
                let symbol = self.instance()?.symbol().await?;
                self.report =
                    format!("info: Token Symbol: {symbol} for {label} ({})\n", self.address);
                self.queried.symbol = Some(symbol);
            }
            "decimals" => {
                validate_length(args, 0)?;
                let decimals = self.instance()?.decimals().await?;
                self.queried.decimals = Some(decimals);
                self.report =
                    format!("info: Token Decimals: {decimals} for {label} ({})\n", self.address);
            }
            "totalsupply" => {
                validate_length(args, 0)?;
                let total_supply = self.instance()?.total_supply().await?;
                self.queried.total_supply = Some(total_supply);
                self.report = format!(
                    "info: Token TotalSupply: {total_supply} for {label} ({})\n",
                    self.address
                );
            }
            "balanceof" => {
                validate_length(args, 1)?;
                let account = parse_address(&args[0])?;
                let balance = self.instance()?.balance_of(account).await?;
                self.queried.balance_of.insert(account, balance);
                self.report = format!(
                    "info: Token Balance of {account} : {balance} for {label} ({})\n",
                    self.address
                );
            }
            "allowance" => {
                validate_length(args, 2)?;
                let owner = parse_address(&args[0])?;
                let spender = parse_address(&args[1])?;
                let allowance = self.instance()?.allowance(owner, spender).await?;
                self.queried
                    .allowance
                    .entry(owner)
                    .or_default()
                    .insert(spender, allowance);
                self.report = format!(
                    "info: Token Allowance of spender {spender} from owner {owner} is {allowance} for {label} ({})\n",
                    self.address
                );
            }
            other => debug!(function = other, "no ERC20 query with this name"),
        }
        Ok(())
    }

    /// Dispatches the ERC20 write functions
    async fn write(
        &mut self,
        tx: &TransactionContext,
        function: &str,
        args: &[String],
    ) -> Result<()> {
        let label = self.kind.label();
        match function {
            "transfer" => {
                let (recipient, amount) = address_and_amount(args)?;
                let hash = self.instance()?.transfer(tx, recipient, amount).await?;
                self.last_tx = Some(hash);
                self.report = format!(
                    "info: Transferred {amount} tokens at {label} ({}) to address {recipient}\n",
                    self.address
                );
            }
            "approve" => {
                let (spender, amount) = address_and_amount(args)?;
                let hash = self.instance()?.approve(tx, spender, amount).await?;
                self.last_tx = Some(hash);
                self.report = format!(
                    "info: Approved {amount} tokens at {label} ({}) to address {spender}\n",
                    self.address
                );
            }
            "transferfrom" => {
                let (sender, recipient, amount) = two_addresses_and_amount(args)?;
                let hash = self
                    .instance()?
                    .transfer_from(tx, sender, recipient, amount)
                    .await?;
                self.last_tx = Some(hash);
                self.report = format!(
                    "info: Transferred From {sender} {amount} tokens at {label} ({}) to address {recipient}\n",
                    self.address
                );
            }
            "increaseallowance" => {
                let (spender, amount) = address_and_amount(args)?;
                let hash = self
                    .instance()?
                    .increase_allowance(tx, spender, amount)
                    .await?;
                self.last_tx = Some(hash);
                self.report = format!(
                    "info: Increased Allowance by {amount} tokens at {label} ({}) to address {spender}\n",
                    self.address
                );
            }
            "decreaseallowance" => {
                let (spender, amount) = address_and_amount(args)?;
                let hash = self
                    .instance()?
                    .decrease_allowance(tx, spender, amount)
                    .await?;
                self.last_tx = Some(hash);
                self.report = format!(
                    "info: Decreased Allowance by {amount} tokens at {label} ({}) from address {spender}\n",
                    self.address
                );
            }
            other => debug!(function = other, "no ERC20 write with this name"),
        }
        Ok(())
    }
}

impl<I: MintableInstance> TemplateInstance<I> {
    /// Dispatches the supply management writes
    async fn write_supply(
        &mut self,
        tx: &TransactionContext,
        function: &str,
        args: &[String],
    ) -> Result<()> {
        let label = self.kind.label();
        match function {
            "mint" => {
                let (to, amount) = address_and_amount(args)?;
                let hash = self.instance()?.mint(tx, to, amount).await?;
                self.last_tx = Some(hash);
                self.report = format!(
                    "info: Minted {amount} tokens to {to} at {label} ({})\n",
                    self.address
                );
            }
            "burn" => {
                let (from, amount) = address_and_amount(args)?;
                let hash = self.instance()?.burn(tx, from, amount).await?;
                self.last_tx = Some(hash);
                self.report = format!(
                    "info: Burned {amount} tokens from {from} at {label} ({})\n",
                    self.address
                );
            }
            other => return self.write(tx, other, args).await,
        }
        Ok(())
    }
}

/// One template per supported contract kind.
#[derive(Debug)]
pub enum TokenTemplate<I> {
    Detailed(DetailedTestTokenContract<I>),
    Fast(FastTestTokenContract<I>),
}

impl<I> TokenTemplate<I> {
    /// Creates an empty template for `kind`
    pub fn new(kind: ContractKind) -> Self {
        match kind {
            ContractKind::DetailedTestToken => Self::Detailed(DetailedTestTokenContract::new()),
            ContractKind::FastTestToken => Self::Fast(FastTestTokenContract::new()),
        }
    }
}

impl<I: MintableInstance> ContractTemplate for TokenTemplate<I> {
    type Instance = I;

    fn kind(&self) -> ContractKind {
        match self {
            Self::Detailed(t) => t.kind(),
            Self::Fast(t) => t.kind(),
        }
    }

    fn state(&self) -> &TemplateInstance<I> {
        match self {
            Self::Detailed(t) => t.state(),
            Self::Fast(t) => t.state(),
        }
    }

    fn parse_constructor_args(&mut self, args: &[String]) -> Result<()> {
        match self {
            Self::Detailed(t) => t.parse_constructor_args(args),
            Self::Fast(t) => t.parse_constructor_args(args),
        }
    }

    async fn deploy<C>(&mut self, tx: &TransactionContext, connector: &C) -> Result<Deployment>
    where
        C: ChainConnector<Instance = Self::Instance>,
    {
        match self {
            Self::Detailed(t) => t.deploy(tx, connector).await,
            Self::Fast(t) => t.deploy(tx, connector).await,
        }
    }

    fn load<C>(&mut self, address: Address, connector: &C) -> Result<()>
    where
        C: ChainConnector<Instance = Self::Instance>,
    {
        match self {
            Self::Detailed(t) => t.load(address, connector),
            Self::Fast(t) => t.load(address, connector),
        }
    }

    async fn query(&mut self, function: &str, args: &[String]) -> Result<()> {
        match self {
            Self::Detailed(t) => t.query(function, args).await,
            Self::Fast(t) => t.query(function, args).await,
        }
    }

    async fn write(
        &mut self,
        tx: &TransactionContext,
        function: &str,
        args: &[String],
    ) -> Result<()> {
        match self {
            Self::Detailed(t) => t.write(tx, function, args).await,
            Self::Fast(t) => t.write(tx, function, args).await,
        }
    }
}
