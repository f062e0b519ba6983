//! DetailedTestToken: configurable name, symbol and supply, plus mint/burn

use alloy::primitives::{Address, Bytes, U256};
use alloy::sol_types::SolValue;
use tracing::debug;

use super::{ContractTemplate, TemplateInstance};
use crate::codec::{parse_amount, validate_length};
use crate::connector::{ChainConnector, MintableInstance};
use crate::contracts::DetailedTestToken;
use crate::error::{Error, Result};
use crate::registry::ContractKind;
use crate::types::{Deployment, TransactionContext};

/// Constructor parameters of `DetailedTestToken`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailedConstructorArgs {
    pub name: String,
    pub symbol: String,
    pub amount: U256,
}

impl DetailedConstructorArgs {
    /// Number of flat arguments the constructor takes
    pub const FIELD_COUNT: usize = 3;

    /// Parses `[name, symbol, amount]`
    pub fn parse(args: &[String]) -> Result<Self> {
        validate_length(args, Self::FIELD_COUNT)?;
        Ok(Self {
            name: args[0].clone(),
            symbol: args[1].clone(),
            amount: parse_amount(&args[2])?,
        })
    }

    /// Creation bytecode followed by the ABI-encoded constructor arguments
    pub fn creation_code(&self) -> Bytes {
        let params = (self.name.clone(), self.symbol.clone(), self.amount).abi_encode_params();
        [&DetailedTestToken::BYTECODE[..], params.as_slice()]
            .concat()
            .into()
    }
}

/// Template for the `detailed_test_token` kind
#[derive(Debug)]
pub struct DetailedTestTokenContract<I> {
    constructor_args: Option<DetailedConstructorArgs>,
    state: TemplateInstance<I>,
}

impl<I> Default for DetailedTestTokenContract<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> DetailedTestTokenContract<I> {
    /// Creates an empty template
    pub fn new() -> Self {
        Self {
            constructor_args: None,
            state: TemplateInstance::new(ContractKind::DetailedTestToken),
        }
    }

    /// Constructor arguments parsed so far
    pub fn constructor_args(&self) -> Option<&DetailedConstructorArgs> {
        self.constructor_args.as_ref()
    }

    /// Binds an already constructed instance
    pub fn attach(&mut self, address: Address, instance: I) -> Result<()> {
        self.state.attach(address, instance)
    }
}

impl<I: MintableInstance> ContractTemplate for DetailedTestTokenContract<I> {
    type Instance = I;

    fn kind(&self) -> ContractKind {
        ContractKind::DetailedTestToken
    }

    fn state(&self) -> &TemplateInstance<I> {
        &self.state
    }

    fn parse_constructor_args(&mut self, args: &[String]) -> Result<()> {
        let parsed = DetailedConstructorArgs::parse(args)?;
        debug!(name = %parsed.name, symbol = %parsed.symbol, amount = %parsed.amount, "parsed constructor arguments");
        self.constructor_args = Some(parsed);
        Ok(())
    }

    async fn deploy<C>(&mut self, tx: &TransactionContext, connector: &C) -> Result<Deployment>
    where
        C: ChainConnector<Instance = Self::Instance>,
    {
        let creation_code = self
            .constructor_args
            .as_ref()
            .ok_or(Error::MissingArguments)?
            .creation_code();
        self.state.deploy_with(tx, connector, creation_code).await
    }

    fn load<C>(&mut self, address: Address, connector: &C) -> Result<()>
    where
        C: ChainConnector<Instance = Self::Instance>,
    {
        self.state.load_with(address, connector)
    }

    async fn query(&mut self, function: &str, args: &[String]) -> Result<()> {
        self.state.query(function, args).await
    }

    async fn write(
        &mut self,
        tx: &TransactionContext,
        function: &str,
        args: &[String],
    ) -> Result<()> {
        self.state.write_supply(tx, function, args).await
    }
}
