//! Conversion of flat CLI argument lists into typed call parameters

use std::str::FromStr;

use alloy::primitives::{Address, U256};
use tracing::debug;

use crate::error::{Error, Result};

/// Checks that exactly `expected` arguments were supplied.
pub fn validate_length(args: &[String], expected: usize) -> Result<()> {
    if args.len() != expected {
        return Err(Error::Arity {
            got: args.len(),
            want: expected,
        });
    }
    Ok(())
}

/// Parses a hex address, with or without the `0x` prefix.
///
/// Checksums are not enforced. Anything that does not decode to exactly
/// 20 bytes is rejected.
pub fn parse_address(arg: &str) -> Result<Address> {
    let arg = arg.trim();
    Address::from_str(arg).map_err(|_| Error::InvalidAddress(arg.to_string()))
}

/// Parses a base-10 token amount.
pub fn parse_amount(arg: &str) -> Result<U256> {
    let arg = arg.trim();
    if arg.is_empty() {
        return Err(Error::InvalidAmount(arg.to_string()));
    }
    U256::from_str_radix(arg, 10).map_err(|_| Error::InvalidAmount(arg.to_string()))
}

/// Validates arity and converts `[address, amount]`.
pub fn address_and_amount(args: &[String]) -> Result<(Address, U256)> {
    validate_length(args, 2)?;
    let address = parse_address(&args[0])?;
    let amount = parse_amount(&args[1])?;
    debug!(%address, %amount, "decoded address/amount arguments");
    Ok((address, amount))
}

/// Validates arity and converts `[address, address, amount]`.
pub fn two_addresses_and_amount(args: &[String]) -> Result<(Address, Address, U256)> {
    validate_length(args, 3)?;
    let first = parse_address(&args[0])?;
    let second = parse_address(&args[1])?;
    let amount = parse_amount(&args[2])?;
    debug!(%first, %second, %amount, "decoded address/address/amount arguments");
    Ok((first, second, amount))
}
