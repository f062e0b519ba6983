//! Chain facts discovered at session start and deployment results

use alloy::primitives::{Address, TxHash};
use serde::Serialize;

/// Block height and chain id of the connected node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChainState {
    pub block_number: u64,
    pub chain_id: u64,
}

/// Outcome of a contract-creation transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Deployment {
    /// Address the contract is created at
    pub address: Address,
    /// Hash of the creation transaction
    pub tx_hash: TxHash,
}
