//! FastTestToken: fixed name, symbol and supply compiled into the bytecode

use alloy::primitives::{Address, Bytes};

use super::{ContractTemplate, TemplateInstance};
use crate::codec::validate_length;
use crate::connector::{ChainConnector, Erc20Instance};
use crate::contracts::FastTestToken;
use crate::error::Result;
use crate::registry::ContractKind;
use crate::types::{Deployment, TransactionContext};

/// `FastTestToken` has a parameterless constructor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FastConstructorArgs;

impl FastConstructorArgs {
    pub const FIELD_COUNT: usize = 0;

    pub fn parse(args: &[String]) -> Result<Self> {
        validate_length(args, Self::FIELD_COUNT)?;
        Ok(Self)
    }

    pub fn creation_code(&self) -> Bytes {
        FastTestToken::BYTECODE.clone()
    }
}

/// Template for the `fast_test_token` kind
#[derive(Debug)]
pub struct FastTestTokenContract<I> {
    constructor_args: FastConstructorArgs,
    state: TemplateInstance<I>,
}

impl<I> Default for FastTestTokenContract<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> FastTestTokenContract<I> {
    pub fn new() -> Self {
        Self {
            constructor_args: FastConstructorArgs,
            state: TemplateInstance::new(ContractKind::FastTestToken),
        }
    }

    /// Binds an already constructed instance
    pub fn attach(&mut self, address: Address, instance: I) -> Result<()> {
        self.state.attach(address, instance)
    }
}

impl<I: Erc20Instance> ContractTemplate for FastTestTokenContract<I> {
    type Instance = I;

    fn kind(&self) -> ContractKind {
        ContractKind::FastTestToken
    }

    fn state(&self) -> &TemplateInstance<I> {
        &self.state
    }

    fn parse_constructor_args(&mut self, args: &[String]) -> Result<()> {
        self.constructor_args = FastConstructorArgs::parse(args)?;
        Ok(())
    }

    async fn deploy<C>(&mut self, tx: &TransactionContext, connector: &C) -> Result<Deployment>
    where
        C: ChainConnector<Instance = Self::Instance>,
    {
        let creation_code = self.constructor_args.creation_code();
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
        self.state.write(tx, function, args).await
    }
}
