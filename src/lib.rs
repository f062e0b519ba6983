//! # evm-token-client
//!
//! Deploy and drive a fixed set of ERC20 test token templates over JSON-RPC.
//!
//! A [`Session`] resolves the signing account, discovers the chain state and
//! owns one [`TokenTemplate`]. Function names are classified by the
//! [`registry`] and routed by [`router::execute`] to the template's query or
//! write table, which validates arity, parses the flat string arguments and
//! calls the chain through the [`ChainConnector`] seam.
//!
//! ```rust,ignore
//! use evm_token_client::{ContractKind, GasSettings, Session};
//!
//! let mut session = Session::connect(
//!     private_key,
//!     "http://127.0.0.1:8545",
//!     ContractKind::DetailedTestToken,
//!     GasSettings::default(),
//!     None,
//! )
//! .await?;
//! session.deploy(&["DetailedTestToken".into(), "DTT".into(), "1000".into()]).await?;
//! println!("{}", session.deployment_report());
//!
//! let report = session.execute("totalsupply", &[]).await?;
//! ```

pub mod account;
pub mod client;
pub mod codec;
pub mod connector;
pub mod contracts;
pub mod error;
pub mod registry;
pub mod router;
pub mod session;
pub mod templates;
pub mod types;

#[cfg(test)]
mod testing;

pub use account::UserAccount;
pub use client::{EvmClient, TokenBinding};
pub use connector::{ChainConnector, Erc20Instance, MintableInstance};
pub use error::{Error, Result};
pub use registry::{classify, is_known_kind, is_known_operation, ContractKind, OperationCategory};
pub use session::Session;
pub use templates::{
    ContractTemplate, DetailedTestTokenContract, FastTestTokenContract, QueriedData,
    TemplateInstance, TokenTemplate,
};
pub use types::{ChainState, Deployment, GasSettings, TransactionContext};

pub use alloy::primitives::{Address, TxHash, U256};
