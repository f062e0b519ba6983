//! Traits at the seam between the templates and the chain
//!
//! Templates never talk to a provider directly. They go through a bound
//! token instance, so tests can drive them with in-memory doubles and the
//! real [`EvmClient`](crate::client::EvmClient) can be swapped for any other
//! JSON-RPC stack.

use std::future::Future;

use alloy::primitives::{Address, Bytes, TxHash, U256};

use crate::error::Result;
use crate::types::{ChainState, Deployment, TransactionContext};

/// Typed access to the ERC20 surface shared by every template.
pub trait Erc20Instance: Send + Sync {
    /// Returns the token name
    fn name(&self) -> impl Future<Output = Result<String>> + Send;

    /// Returns the token symbol
    fn symbol(&self) -> impl Future<Output = Result<String>> + Send;

    /// Returns the number of decimals
    fn decimals(&self) -> impl Future<Output = Result<u8>> + Send;

    /// Returns the total supply
    fn total_supply(&self) -> impl Future<Output = Result<U256>> + Send;

    /// Returns the balance held by `account`
    fn balance_of(&self, account: Address) -> impl Future<Output = Result<U256>> + Send;

    /// Returns how much `spender` may move on behalf of `owner`
    fn allowance(
        &self,
        owner: Address,
        spender: Address,
    ) -> impl Future<Output = Result<U256>> + Send;

    /// Sends `transfer(recipient, amount)`
    fn transfer(
        &self,
        tx: &TransactionContext,
        recipient: Address,
        amount: U256,
    ) -> impl Future<Output = Result<TxHash>> + Send;

    /// Sends `approve(spender, amount)`
    fn approve(
        &self,
        tx: &TransactionContext,
        spender: Address,
        amount: U256,
    ) -> impl Future<Output = Result<TxHash>> + Send;

    /// Sends `transferFrom(sender, recipient, amount)`
    fn transfer_from(
        &self,
        tx: &TransactionContext,
        sender: Address,
        recipient: Address,
        amount: U256,
    ) -> impl Future<Output = Result<TxHash>> + Send;

    /// Sends `increaseAllowance(spender, amount)`
    fn increase_allowance(
        &self,
        tx: &TransactionContext,
        spender: Address,
        amount: U256,
    ) -> impl Future<Output = Result<TxHash>> + Send;

    /// Sends `decreaseAllowance(spender, amount)`
    fn decrease_allowance(
        &self,
        tx: &TransactionContext,
        spender: Address,
        amount: U256,
    ) -> impl Future<Output = Result<TxHash>> + Send;
}

/// Supply management available on the detailed template.
pub trait MintableInstance: Erc20Instance {
    /// Sends `mint(to, amount)`
    fn mint(
        &self,
        tx: &TransactionContext,
        to: Address,
        amount: U256,
    ) -> impl Future<Output = Result<TxHash>> + Send;

    /// Sends `burn(from, amount)`
    fn burn(
        &self,
        tx: &TransactionContext,
        from: Address,
        amount: U256,
    ) -> impl Future<Output = Result<TxHash>> + Send;
}

/// Chain access consumed by the session and by template deploy/load.
pub trait ChainConnector: Send + Sync {
    /// Handle to a contract bound at an address
    type Instance: Erc20Instance;

    /// Fetches the current block height and chain id
    fn chain_state(&self) -> impl Future<Output = Result<ChainState>> + Send;

    /// Fetches the pending nonce of `account`
    fn pending_nonce(&self, account: Address) -> impl Future<Output = Result<u64>> + Send;

    /// Fetches the code stored at `address` as of `block_number`
    fn code_at(
        &self,
        address: Address,
        block_number: u64,
    ) -> impl Future<Output = Result<Bytes>> + Send;

    /// Submits a contract-creation transaction carrying `creation_code`
    fn deploy(
        &self,
        tx: &TransactionContext,
        creation_code: Bytes,
    ) -> impl Future<Output = Result<Deployment>> + Send;

    /// Binds a token instance at `address` without touching the chain
    fn bind(&self, address: Address) -> Result<Self::Instance>;
}
