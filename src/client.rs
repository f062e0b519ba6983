//! JSON-RPC chain connector backed by an alloy provider

use alloy::network::{AnyNetwork, EthereumWallet, Network, TransactionBuilder};
use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use tracing::{debug, info};
use url::Url;

use crate::account::UserAccount;
use crate::connector::{ChainConnector, Erc20Instance, MintableInstance};
use crate::contracts::ITestToken;
use crate::error::{Error, Result};
use crate::types::{ChainState, Deployment, TransactionContext};

type TransactionRequest = <AnyNetwork as Network>::TransactionRequest;

/// Applies the session's signing and fee parameters to a request
fn apply_context(request: TransactionRequest, tx: &TransactionContext) -> TransactionRequest {
    request
        .with_from(tx.from)
        .with_nonce(tx.nonce)
        .with_gas_limit(tx.gas_limit)
        .with_gas_price(tx.gas_price)
        .with_chain_id(tx.chain_id)
        .with_value(tx.value)
}

/// Submits a request and returns its hash without waiting for inclusion
async fn submit(
    provider: &DynProvider<AnyNetwork>,
    tx: &TransactionContext,
    request: TransactionRequest,
) -> Result<TxHash> {
    let pending = provider.send_transaction(apply_context(request, tx)).await?;
    let tx_hash = *pending.tx_hash();
    debug!(%tx_hash, nonce = tx.nonce, "transaction submitted");
    Ok(tx_hash)
}

/// Chain connector talking to an EVM node over HTTP
///
/// The provider signs with the session's account, so every write and
/// deployment is sent as a signed raw transaction.
#[derive(Clone)]
pub struct EvmClient {
    provider: DynProvider<AnyNetwork>,
    url: Url,
}

impl EvmClient {
    /// Builds a signing provider for `rpc_url`
    pub fn dial(rpc_url: &str, account: &UserAccount) -> Result<Self> {
        let url: Url = rpc_url
            .parse()
            .map_err(|e: url::ParseError| Error::Connector(e.to_string()))?;

        let provider = ProviderBuilder::new()
            .network::<AnyNetwork>()
            .wallet(EthereumWallet::from(account.signer().clone()))
            .connect_http(url.clone())
            .erased();

        Ok(Self { provider, url })
    }

    /// Returns the endpoint this client was dialed with
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl ChainConnector for EvmClient {
    type Instance = TokenBinding;

    async fn chain_state(&self) -> Result<ChainState> {
        let chain_id = self.provider.get_chain_id().await?;
        let block_number = self.provider.get_block_number().await?;
        info!(
            rpc = %self.url,
            block_number,
            chain_id,
            "connected to RPC client"
        );
        Ok(ChainState {
            block_number,
            chain_id,
        })
    }

    async fn pending_nonce(&self, account: Address) -> Result<u64> {
        let nonce = self
            .provider
            .get_transaction_count(account)
            .pending()
            .await?;
        info!(%account, nonce, "retrieved account nonce");
        Ok(nonce)
    }

    async fn code_at(&self, address: Address, block_number: u64) -> Result<Bytes> {
        let code = self
            .provider
            .get_code_at(address)
            .number(block_number)
            .await?;
        Ok(code)
    }

    async fn deploy(&self, tx: &TransactionContext, creation_code: Bytes) -> Result<Deployment> {
        let request = TransactionRequest::default().with_deploy_code(creation_code);
        let tx_hash = submit(&self.provider, tx, request).await?;
        Ok(Deployment {
            address: tx.create_address(),
            tx_hash,
        })
    }

    fn bind(&self, address: Address) -> Result<TokenBinding> {
        Ok(TokenBinding {
            address,
            provider: self.provider.clone(),
        })
    }
}

/// A deployed token template reachable through the provider
#[derive(Clone)]
pub struct TokenBinding {
    address: Address,
    provider: DynProvider<AnyNetwork>,
}

impl TokenBinding {
    /// Returns the contract address
    pub fn address(&self) -> Address {
        self.address
    }

    fn token(&self) -> ITestToken::ITestTokenInstance<&DynProvider<AnyNetwork>, AnyNetwork> {
        ITestToken::new(self.address, &self.provider)
    }
}

impl Erc20Instance for TokenBinding {
    async fn name(&self) -> Result<String> {
        Ok(self.token().name().call().await?)
    }

    async fn symbol(&self) -> Result<String> {
        Ok(self.token().symbol().call().await?)
    }

    async fn decimals(&self) -> Result<u8> {
        Ok(self.token().decimals().call().await?)
    }

    async fn total_supply(&self) -> Result<U256> {
        Ok(self.token().totalSupply().call().await?)
    }

    async fn balance_of(&self, account: Address) -> Result<U256> {
        Ok(self.token().balanceOf(account).call().await?)
    }

    async fn allowance(&self, owner: Address, spender: Address) -> Result<U256> {
        Ok(self.token().allowance(owner, spender).call().await?)
    }

    async fn transfer(
        &self,
        tx: &TransactionContext,
        recipient: Address,
        amount: U256,
    ) -> Result<TxHash> {
        let request = self
            .token()
            .transfer(recipient, amount)
            .into_transaction_request();
        submit(&self.provider, tx, request).await
    }

    async fn approve(
        &self,
        tx: &TransactionContext,
        spender: Address,
        amount: U256,
    ) -> Result<TxHash> {
        let request = self.token().approve(spender, amount).into_transaction_request();
        submit(&self.provider, tx, request).await
    }

    async fn transfer_from(
        &self,
        tx: &TransactionContext,
        sender: Address,
        recipient: Address,
        amount: U256,
    ) -> Result<TxHash> {
        let request = self
            .token()
            .transferFrom(sender, recipient, amount)
            .into_transaction_request();
        submit(&self.provider, tx, request).await
    }

    async fn increase_allowance(
        &self,
        tx: &TransactionContext,
        spender: Address,
        amount: U256,
    ) -> Result<TxHash> {
        let request = self
            .token()
            .increaseAllowance(spender, amount)
            .into_transaction_request();
        submit(&self.provider, tx, request).await
    }

    async fn decrease_allowance(
        &self,
        tx: &TransactionContext,
        spender: Address,
        amount: U256,
    ) -> Result<TxHash> {
        let request = self
            .token()
            .decreaseAllowance(spender, amount)
            .into_transaction_request();
        submit(&self.provider, tx, request).await
    }
}

impl MintableInstance for TokenBinding {
    async fn mint(&self, tx: &TransactionContext, to: Address, amount: U256) -> Result<TxHash> {
        let request = self.token().mint(to, amount).into_transaction_request();
        submit(&self.provider, tx, request).await
    }

    async fn burn(&self, tx: &TransactionContext, from: Address, amount: U256) -> Result<TxHash> {
        let request = self.token().burn(from, amount).into_transaction_request();
        submit(&self.provider, tx, request).await
    }
}
