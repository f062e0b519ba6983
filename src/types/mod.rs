//! Plain data shared between the connector, templates and session

mod chain;
mod transaction;

pub use chain::{ChainState, Deployment};
pub use transaction::{GasSettings, TransactionContext, DEFAULT_GAS_LIMIT, DEFAULT_GAS_PRICE};
