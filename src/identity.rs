// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Operator identity derived from a secp256k1 private key.
//!
//! The blog is bound to a single EVM-style wallet. Only the private key is
//! ever persisted; the public address is recomputed from it on every load so
//! the two can never drift apart.

use std::fmt;

use alloy::{
    primitives::Address,
    signers::{local::PrivateKeySigner, SignerSync},
};
use k256::ecdsa::SigningKey;
use k256::elliptic_curve::rand_core::OsRng;

/// Errors raised while turning key material into a signer.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("Invalid private key hex: {0}")]
    InvalidHex(String),

    #[error("Invalid private key: {0}")]
    InvalidKey(String),

    #[error("Signing failed: {0}")]
    Signing(String),
}

/// Signing identity of the blog operator.
#[derive(Clone)]
pub struct Identity {
    signer: PrivateKeySigner,
}

impl Identity {
    /// Mint a new random identity.
    pub fn generate() -> Self {
        let signing_key = SigningKey::random(&mut OsRng);
        Self {
            signer: PrivateKeySigner::from_signing_key(signing_key),
        }
    }

    /// Parse a hex-encoded private key, with or without a `0x` prefix.
    ///
    /// # Returns
    /// * `Ok(Identity)` - The identity bound to this key
    /// * `Err(IdentityError)` - If the hex is malformed or the scalar is not a valid key
    pub fn from_private_key_hex(raw: &str) -> Result<Self, IdentityError> {
        let trimmed = raw.trim();
        let hex_key = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if hex_key.len() != 64 {
            return Err(IdentityError::InvalidHex(format!(
                "expected 64 hex characters, got {}",
                hex_key.len()
            )));
        }

        let key_bytes =
            alloy::hex::decode(hex_key).map_err(|e| IdentityError::InvalidHex(e.to_string()))?;

        let signer = PrivateKeySigner::from_slice(&key_bytes)
            .map_err(|e| IdentityError::InvalidKey(e.to_string()))?;

        Ok(Self { signer })
    }

    /// Public address as `0x` followed by 40 lowercase hex characters.
    pub fn address(&self) -> String {
        alloy::hex::encode_prefixed(self.signer.address())
    }

    /// Raw address, for callers that compare against recovered signers.
    pub fn raw_address(&self) -> Address {
        self.signer.address()
    }

    /// Canonical persisted form of the key: `0x` followed by 64 lowercase hex characters.
    pub fn private_key_hex(&self) -> String {
        alloy::hex::encode_prefixed(self.signer.to_bytes())
    }

    /// Sign an arbitrary message with the EIP-191 personal-message prefix.
    ///
    /// Returns the 65-byte `r || s || v` signature as `0x` hex.
    pub fn sign_message(&self, message: &[u8]) -> Result<String, IdentityError> {
        let signature = self
            .signer
            .sign_message_sync(message)
            .map_err(|e| IdentityError::Signing(e.to_string()))?;
        Ok(alloy::hex::encode_prefixed(signature.as_bytes()))
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::Signature;

    // Well-known development key (first Hardhat/Anvil account)
    const DEV_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const DEV_ADDRESS: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";

    #[test]
    fn derives_lowercase_address_from_key() {
        let identity = Identity::from_private_key_hex(DEV_KEY).unwrap();
        assert_eq!(identity.address(), DEV_ADDRESS);
    }

    #[test]
    fn prefixed_and_unprefixed_keys_yield_same_address() {
        let bare = Identity::from_private_key_hex(DEV_KEY).unwrap();
        let prefixed = Identity::from_private_key_hex(&format!("0x{DEV_KEY}")).unwrap();
        let upper = Identity::from_private_key_hex(&format!("0X{}", DEV_KEY.to_uppercase())).unwrap();

        assert_eq!(bare.address(), prefixed.address());
        assert_eq!(bare.address(), upper.address());
    }

    #[test]
    fn private_key_hex_is_canonical() {
        let identity = Identity::from_private_key_hex(DEV_KEY).unwrap();
        assert_eq!(identity.private_key_hex(), format!("0x{DEV_KEY}"));
    }

    #[test]
    fn rejects_malformed_keys() {
        assert!(matches!(
            Identity::from_private_key_hex("0xabc"),
            Err(IdentityError::InvalidHex(_))
        ));
        assert!(matches!(
            Identity::from_private_key_hex(&"zz".repeat(32)),
            Err(IdentityError::InvalidHex(_))
        ));
        // Zero is not a valid secp256k1 scalar
        assert!(matches!(
            Identity::from_private_key_hex(&"00".repeat(32)),
            Err(IdentityError::InvalidKey(_))
        ));
    }

    #[test]
    fn generated_identities_are_unique_and_well_formed() {
        let mut addresses = std::collections::HashSet::new();
        for _ in 0..5 {
            let identity = Identity::generate();
            let key = identity.private_key_hex();
            assert_eq!(key.len(), 66, "0x + 32 bytes of hex");

            let address = identity.address();
            assert!(address.starts_with("0x"));
            assert_eq!(address.len(), 42);
            assert_eq!(address, address.to_lowercase());
            assert!(addresses.insert(address), "Generated duplicate address");

            let reloaded = Identity::from_private_key_hex(&key).unwrap();
            assert_eq!(reloaded.address(), identity.address());
        }
    }

    #[test]
    fn signature_recovers_to_own_address() {
        let identity = Identity::from_private_key_hex(DEV_KEY).unwrap();
        let message = b"hello swarm";

        let signature_hex = identity.sign_message(message).unwrap();
        let bytes = alloy::hex::decode(&signature_hex).unwrap();
        assert_eq!(bytes.len(), 65);

        let signature = Signature::try_from(bytes.as_slice()).unwrap();
        let recovered = signature.recover_address_from_msg(message).unwrap();
        assert_eq!(recovered, identity.raw_address());
    }

    #[test]
    fn debug_output_hides_private_key() {
        let identity = Identity::from_private_key_hex(DEV_KEY).unwrap();
        let debug = format!("{identity:?}");
        assert!(debug.contains(DEV_ADDRESS));
        assert!(!debug.contains(DEV_KEY));
    }
}
