//! Signing identity derived from a hex-encoded private key

use alloy::primitives::{Address, Bytes};
use alloy::signers::local::PrivateKeySigner;

use crate::error::Result;

/// The account that signs every transaction in a session
#[derive(Debug, Clone)]
pub struct UserAccount {
    signer: PrivateKeySigner,
}

impl UserAccount {
    /// Decodes a secp256k1 private key, with or without the `0x` prefix
    pub fn from_hex(private_key: &str) -> Result<Self> {
        let key = private_key.trim();
        let key = key.strip_prefix("0x").unwrap_or(key);
        let signer: PrivateKeySigner = key.parse()?;
        Ok(Self { signer })
    }

    /// Returns the account address
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Uncompressed secp256k1 public key without the SEC1 tag byte
    pub fn public_key(&self) -> Bytes {
        let point = self.signer.credential().verifying_key().to_encoded_point(false);
        Bytes::copy_from_slice(&point.as_bytes()[1..])
    }

    /// Returns the signer holding the key material
    pub fn signer(&self) -> &PrivateKeySigner {
        &self.signer
    }
}
