//! Signing and fee parameters shared by every write in a session

use alloy::primitives::{Address, U256};
use serde::Serialize;

/// Default gas limit for deployments and writes
pub const DEFAULT_GAS_LIMIT: u64 = 8_000_000;

/// Default legacy gas price, in wei
pub const DEFAULT_GAS_PRICE: u128 = 1_000;

/// User supplied fee settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GasSettings {
    /// Maximum gas units a transaction may consume
    pub gas_limit: u64,
    /// Legacy gas price in wei
    pub gas_price: u128,
}

impl Default for GasSettings {
    fn default() -> Self {
        Self {
            gas_limit: DEFAULT_GAS_LIMIT,
            gas_price: DEFAULT_GAS_PRICE,
        }
    }
}

impl GasSettings {
    /// Creates fee settings from explicit values
    pub fn new(gas_limit: u64, gas_price: u128) -> Self {
        Self {
            gas_limit,
            gas_price,
        }
    }
}

/// Transaction parameters bound to one signing identity.
///
/// Built once per session and reused for every write. The nonce is the
/// account's pending nonce at session start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionContext {
    /// Signing account
    pub from: Address,
    /// Account nonce used for the next transaction
    pub nonce: u64,
    /// Gas limit in units
    pub gas_limit: u64,
    /// Legacy gas price in wei
    pub gas_price: u128,
    /// Chain the transaction is signed for
    pub chain_id: u64,
    /// ETH sent along with the call, always zero for token templates
    pub value: U256,
}

impl TransactionContext {
    /// Creates a context with zero value
    pub fn new(from: Address, nonce: u64, chain_id: u64, gas: GasSettings) -> Self {
        Self {
            from,
            nonce,
            gas_limit: gas.gas_limit,
            gas_price: gas.gas_price,
            chain_id,
            value: U256::ZERO,
        }
    }

    /// Address a contract created by this context will land at
    pub fn create_address(&self) -> Address {
        self.from.create(self.nonce)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    #[test]
    fn test_default_gas_settings() {
        let gas = GasSettings::default();
        assert_eq!(gas.gas_limit, 8_000_000);
        assert_eq!(gas.gas_price, 1_000);
    }

    #[test]
    fn test_context_value_is_zero() {
        let ctx = TransactionContext::new(Address::ZERO, 7, 1337, GasSettings::default());
        assert_eq!(ctx.value, U256::ZERO);
        assert_eq!(ctx.nonce, 7);
        assert_eq!(ctx.chain_id, 1337);
        assert_eq!(ctx.gas_limit, DEFAULT_GAS_LIMIT);
    }

    #[test]
    fn test_create_address_matches_known_vector() {
        // First contract deployed by the default anvil account
        let from = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
        let ctx = TransactionContext::new(from, 0, 31337, GasSettings::default());
        assert_eq!(
            ctx.create_address(),
            address!("5FbDB2315678afecb367f032d93F642f64180aa3")
        );
    }
}
