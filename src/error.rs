//! Error types for evm-token-client

use alloy::primitives::Address;
use thiserror::Error;

use crate::registry::ContractKind;

/// Result type alias for evm-token-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while deploying or interacting with a token template.
///
/// Messages are user facing: the binaries print them unchanged.
#[derive(Debug, Error)]
pub enum Error {
    /// One of the required flags was empty or absent
    #[error("error: Missing required arguments")]
    MissingArguments,

    /// The contract kind is not in the registry
    #[error("error: Unsupported contract type {0}")]
    UnsupportedContract(String),

    /// The function name is not in the registry for this contract kind
    #[error("error: Unsupported function name {function} for contract type {contract}")]
    UnsupportedFunction {
        function: String,
        contract: ContractKind,
    },

    /// Wrong number of arguments for a function or constructor
    #[error("error: {got} arguments does not match required {want}")]
    Arity { got: usize, want: usize },

    /// Argument is not a 20-byte hex address
    #[error("error: invalid address {0:?}")]
    InvalidAddress(String),

    /// Argument is not a base-10 unsigned integer that fits in 256 bits
    #[error("error: invalid amount {0:?}")]
    InvalidAmount(String),

    /// The signing key could not be decoded
    #[error("error: invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// No code was found at the address given to the interactor
    #[error("error: contract doesn't exist at given address : {0}")]
    ContractNotFound(Address),

    /// Query or write attempted before the template was deployed or loaded
    #[error("error: {0} contract has not been deployed or loaded")]
    NotLoaded(ContractKind),

    /// The template is already bound to a contract
    #[error("error: {contract} contract is already bound at {address}")]
    AlreadyLoaded {
        contract: ContractKind,
        address: Address,
    },

    /// A write was routed without transaction signing parameters
    #[error("error: function {0} changes state and needs a transaction context")]
    MissingTransactionContext(String),

    /// Failure reported by the chain connector, passed through verbatim
    #[error("{0}")]
    Connector(String),
}

impl From<alloy::transports::RpcError<alloy::transports::TransportErrorKind>> for Error {
    fn from(err: alloy::transports::RpcError<alloy::transports::TransportErrorKind>) -> Self {
        Error::Connector(err.to_string())
    }
}

impl From<alloy::contract::Error> for Error {
    fn from(err: alloy::contract::Error) -> Self {
        Error::Connector(err.to_string())
    }
}

impl From<alloy::signers::local::LocalSignerError> for Error {
    fn from(err: alloy::signers::local::LocalSignerError) -> Self {
        Error::InvalidPrivateKey(err.to_string())
    }
}
