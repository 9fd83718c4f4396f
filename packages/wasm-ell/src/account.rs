//! Ed25519 coinbase account used to sign console transactions.

use crate::error::WasmEllError;
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use ripemd::Ripemd160;
use sha3::{Digest, Sha3_256};

/// Base58check version of an account address
pub const ADDRESS_VERSION: u8 = 92;
/// Base58check version of a public key
pub const PUBLIC_KEY_VERSION: u8 = 93;
/// Base58check version of a private key
pub const PRIVATE_KEY_VERSION: u8 = 94;

/// Key pair of the account transactions are built for
#[derive(Debug, Clone)]
pub struct Account {
    signing_key: SigningKey,
}

impl Account {
    /// Generate a new random account.
    pub fn generate() -> Result<Account, WasmEllError> {
        let mut seed = [0u8; 32];
        getrandom::getrandom(&mut seed)
            .map_err(|e| WasmEllError::InvalidKey(format!("Failed to generate seed: {}", e)))?;
        Ok(Account {
            signing_key: SigningKey::from_bytes(&seed),
        })
    }

    /// Create an account from a 32-byte seed or a 64-byte seed + public key.
    pub fn from_secret_key(secret_key: &[u8]) -> Result<Account, WasmEllError> {
        let seed: [u8; 32] = match secret_key.len() {
            32 | 64 => secret_key[..32]
                .try_into()
                .map_err(|_| WasmEllError::InvalidKey("Invalid seed".into()))?,
            n => {
                return Err(WasmEllError::InvalidKey(format!(
                    "Secret key must be 32 or 64 bytes, got {}",
                    n
                )))
            }
        };

        let signing_key = SigningKey::from_bytes(&seed);
        if secret_key.len() == 64 && signing_key.verifying_key().as_bytes() != &secret_key[32..] {
            return Err(WasmEllError::InvalidKey(
                "Public key half does not match seed".into(),
            ));
        }

        Ok(Account { signing_key })
    }

    /// Create an account from a base58check encoded private key.
    pub fn from_base58(private_key: &str) -> Result<Account, WasmEllError> {
        let decoded = bs58::decode(private_key)
            .with_check(Some(PRIVATE_KEY_VERSION))
            .into_vec()
            .map_err(|e| WasmEllError::InvalidKey(format!("Invalid private key: {}", e)))?;
        Self::from_secret_key(&decoded[1..])
    }

    /// Private key as base58check of seed + public key
    pub fn to_base58(&self) -> String {
        bs58::encode(self.signing_key.to_keypair_bytes())
            .with_check_version(PRIVATE_KEY_VERSION)
            .into_string()
    }

    pub fn public_key_bytes(&self) -> [u8; 32] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// Public key as base58check
    pub fn pub_key_base58(&self) -> String {
        encode_pub_key(&self.public_key_bytes())
    }

    /// Account address derived from the public key
    pub fn address(&self) -> String {
        let pk_hex = hex::encode(self.public_key_bytes());
        let digest = Sha3_256::digest(pk_hex.as_bytes());
        let hash = Ripemd160::digest(digest);
        bs58::encode(hash)
            .with_check_version(ADDRESS_VERSION)
            .into_string()
    }

    /// Sign a message and return the 64-byte Ed25519 signature.
    pub fn sign(&self, message: &[u8]) -> [u8; 64] {
        self.signing_key.sign(message).to_bytes()
    }
}

/// Encode a raw public key as base58check
pub fn encode_pub_key(public_key: &[u8; 32]) -> String {
    bs58::encode(public_key)
        .with_check_version(PUBLIC_KEY_VERSION)
        .into_string()
}

/// Decode a base58check public key
pub fn decode_pub_key(encoded: &str) -> Result<VerifyingKey, WasmEllError> {
    let decoded = bs58::decode(encoded)
        .with_check(Some(PUBLIC_KEY_VERSION))
        .into_vec()
        .map_err(|e| WasmEllError::InvalidKey(format!("Invalid public key: {}", e)))?;
    let bytes: [u8; 32] = decoded[1..].try_into().map_err(|_| {
        WasmEllError::InvalidKey(format!(
            "Public key must be 32 bytes, got {}",
            decoded.len() - 1
        ))
    })?;
    VerifyingKey::from_bytes(&bytes)
        .map_err(|e| WasmEllError::InvalidKey(format!("Invalid public key: {}", e)))
}

/// Verify an Ed25519 signature made by a base58check public key
pub fn verify(pub_key: &str, message: &[u8], signature: &[u8]) -> Result<bool, WasmEllError> {
    let key = decode_pub_key(pub_key)?;
    let signature = Signature::from_slice(signature)
        .map_err(|e| WasmEllError::InvalidKey(format!("Invalid signature: {}", e)))?;
    Ok(key.verify(message, &signature).is_ok())
}

/// Check that `address` is a well-formed account address
pub fn validate_address(address: &str) -> Result<(), WasmEllError> {
    let decoded = bs58::decode(address)
        .with_check(Some(ADDRESS_VERSION))
        .into_vec()
        .map_err(|e| WasmEllError::InvalidAddress(e.to_string()))?;
    if decoded.len() != 21 {
        return Err(WasmEllError::InvalidAddress(format!(
            "expected 20 byte hash, got {}",
            decoded.len() - 1
        )));
    }
    Ok(())
}
