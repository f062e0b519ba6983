//! In-memory chain doubles for unit tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use alloy::primitives::{Address, Bytes, TxHash, U256};

use crate::connector::{ChainConnector, Erc20Instance, MintableInstance};
use crate::error::{Error, Result};
use crate::types::{ChainState, Deployment, TransactionContext};

/// Canned answer for one instance method
#[derive(Debug, Clone)]
pub enum Reply {
    Text(String),
    Decimals(u8),
    Amount(U256),
    Tx(TxHash),
    Fail(String),
}

type Call = (&'static str, Vec<String>);

#[derive(Debug, Default)]
struct Inner {
    replies: HashMap<&'static str, Reply>,
    calls: Vec<Call>,
}

/// Token instance answering from a reply table and recording every call.
///
/// Clones share the same table and log.
#[derive(Debug, Clone, Default)]
pub struct MockInstance {
    inner: Arc<Mutex<Inner>>,
}

impl MockInstance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, method: &'static str, reply: Reply) -> Self {
        self.set_reply(method, reply);
        self
    }

    pub fn set_reply(&self, method: &'static str, reply: Reply) {
        self.inner.lock().unwrap().replies.insert(method, reply);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.lock().unwrap().calls.clone()
    }

    fn answer(&self, method: &'static str, args: Vec<String>) -> Result<Reply> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push((method, args));
        match inner.replies.get(method).cloned() {
            Some(Reply::Fail(message)) => Err(Error::Connector(message)),
            Some(reply) => Ok(reply),
            None => Err(Error::Connector(format!("no reply configured for {method}"))),
        }
    }

    fn text(&self, method: &'static str) -> Result<String> {
        match self.answer(method, vec![])? {
            Reply::Text(text) => Ok(text),
            other => panic!("{method} expects a text reply, got {other:?}"),
        }
    }

    fn amount(&self, method: &'static str, args: Vec<String>) -> Result<U256> {
        match self.answer(method, args)? {
            Reply::Amount(amount) => Ok(amount),
            other => panic!("{method} expects an amount reply, got {other:?}"),
        }
    }

    fn tx(&self, method: &'static str, args: Vec<String>) -> Result<TxHash> {
        match self.answer(method, args)? {
            Reply::Tx(hash) => Ok(hash),
            other => panic!("{method} expects a transaction reply, got {other:?}"),
        }
    }
}

impl Erc20Instance for MockInstance {
    async fn name(&self) -> Result<String> {
        self.text("name")
    }

    async fn symbol(&self) -> Result<String> {
        self.text("symbol")
    }

    async fn decimals(&self) -> Result<u8> {
        match self.answer("decimals", vec![])? {
            Reply::Decimals(decimals) => Ok(decimals),
            other => panic!("decimals expects a decimals reply, got {other:?}"),
        }
    }

    async fn total_supply(&self) -> Result<U256> {
        self.amount("total_supply", vec![])
    }

    async fn balance_of(&self, account: Address) -> Result<U256> {
        self.amount("balance_of", vec![account.to_string()])
    }

    async fn allowance(&self, owner: Address, spender: Address) -> Result<U256> {
        self.amount("allowance", vec![owner.to_string(), spender.to_string()])
    }

    async fn transfer(
        &self,
        _tx: &TransactionContext,
        recipient: Address,
        amount: U256,
    ) -> Result<TxHash> {
        self.tx("transfer", vec![recipient.to_string(), amount.to_string()])
    }

    async fn approve(
        &self,
        _tx: &TransactionContext,
        spender: Address,
        amount: U256,
    ) -> Result<TxHash> {
        self.tx("approve", vec![spender.to_string(), amount.to_string()])
    }

    async fn transfer_from(
        &self,
        _tx: &TransactionContext,
        sender: Address,
        recipient: Address,
        amount: U256,
    ) -> Result<TxHash> {
        self.tx(
            "transfer_from",
            vec![sender.to_string(), recipient.to_string(), amount.to_string()],
        )
    }

    async fn increase_allowance(
        &self,
        _tx: &TransactionContext,
        spender: Address,
        amount: U256,
    ) -> Result<TxHash> {
        self.tx("increase_allowance", vec![spender.to_string(), amount.to_string()])
    }

    async fn decrease_allowance(
        &self,
        _tx: &TransactionContext,
        spender: Address,
        amount: U256,
    ) -> Result<TxHash> {
        self.tx("decrease_allowance", vec![spender.to_string(), amount.to_string()])
    }
}

impl MintableInstance for MockInstance {
    async fn mint(&self, _tx: &TransactionContext, to: Address, amount: U256) -> Result<TxHash> {
        self.tx("mint", vec![to.to_string(), amount.to_string()])
    }

    async fn burn(&self, _tx: &TransactionContext, from: Address, amount: U256) -> Result<TxHash> {
        self.tx("burn", vec![from.to_string(), amount.to_string()])
    }
}

/// Chain double handing out one shared [`MockInstance`]
#[derive(Debug, Clone)]
pub struct MockConnector {
    chain: std::result::Result<ChainState, String>,
    nonce: u64,
    code: Bytes,
    deployment: std::result::Result<Deployment, String>,
    deployed_code: Arc<Mutex<Option<Bytes>>>,
    nonce_queries: Arc<Mutex<Vec<Address>>>,
    instance: MockInstance,
}

impl MockConnector {
    pub fn new(instance: MockInstance) -> Self {
        Self {
            chain: Ok(ChainState {
                block_number: 1,
                chain_id: 1337,
            }),
            nonce: 0,
            code: Bytes::from_static(&[0x60, 0x80, 0x60, 0x40]),
            deployment: Ok(Deployment {
                address: Address::with_last_byte(0xde),
                tx_hash: TxHash::with_last_byte(0x01),
            }),
            deployed_code: Default::default(),
            nonce_queries: Default::default(),
            instance,
        }
    }

    pub fn with_chain(mut self, block_number: u64, chain_id: u64) -> Self {
        self.chain = Ok(ChainState {
            block_number,
            chain_id,
        });
        self
    }

    pub fn chain_fails(mut self, message: &str) -> Self {
        self.chain = Err(message.to_string());
        self
    }

    pub fn with_nonce(mut self, nonce: u64) -> Self {
        self.nonce = nonce;
        self
    }

    pub fn with_code(mut self, code: Bytes) -> Self {
        self.code = code;
        self
    }

    pub fn deploys_to(mut self, address: Address, tx_hash: TxHash) -> Self {
        self.deployment = Ok(Deployment { address, tx_hash });
        self
    }

    pub fn deploy_fails(mut self, message: &str) -> Self {
        self.deployment = Err(message.to_string());
        self
    }

    /// Creation code of the last deployment, if any was attempted
    pub fn deployed_code(&self) -> Option<Bytes> {
        self.deployed_code.lock().unwrap().clone()
    }

    pub fn nonce_queries(&self) -> Vec<Address> {
        self.nonce_queries.lock().unwrap().clone()
    }
}

impl ChainConnector for MockConnector {
    type Instance = MockInstance;

    async fn chain_state(&self) -> Result<ChainState> {
        self.chain.clone().map_err(Error::Connector)
    }

    async fn pending_nonce(&self, account: Address) -> Result<u64> {
        self.nonce_queries.lock().unwrap().push(account);
        Ok(self.nonce)
    }

    async fn code_at(&self, _address: Address, _block_number: u64) -> Result<Bytes> {
        Ok(self.code.clone())
    }

    async fn deploy(&self, _tx: &TransactionContext, creation_code: Bytes) -> Result<Deployment> {
        *self.deployed_code.lock().unwrap() = Some(creation_code);
        self.deployment.clone().map_err(Error::Connector)
    }

    fn bind(&self, _address: Address) -> Result<MockInstance> {
        Ok(self.instance.clone())
    }
}
