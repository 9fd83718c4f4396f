//! WASM bindings for the coinbase account

use crate::account::{validate_address, Account};
use crate::WasmEllError;
use wasm_bindgen::prelude::*;

/// WASM wrapper for an Ed25519 account
#[wasm_bindgen(js_name = Account)]
#[derive(Debug, Clone)]
pub struct WasmAccount {
    inner: Account,
}

#[wasm_bindgen(js_class = Account)]
impl WasmAccount {
    /// Generate a new random account.
    #[wasm_bindgen]
    pub fn generate() -> Result<WasmAccount, WasmEllError> {
        Account::generate().map(|inner| WasmAccount { inner })
    }

    /// Create an account from a 32-byte seed or 64-byte seed + public key.
    #[wasm_bindgen(js_name = fromSecretKey)]
    pub fn from_secret_key(secret_key: &[u8]) -> Result<WasmAccount, WasmEllError> {
        Account::from_secret_key(secret_key).map(|inner| WasmAccount { inner })
    }

    /// Create an account from a base58check private key.
    #[wasm_bindgen(js_name = fromBase58)]
    pub fn from_base58(private_key: &str) -> Result<WasmAccount, WasmEllError> {
        Account::from_base58(private_key).map(|inner| WasmAccount { inner })
    }

    #[wasm_bindgen(getter)]
    pub fn address(&self) -> String {
        self.inner.address()
    }

    /// Public key as base58check
    #[wasm_bindgen(getter, js_name = pubKey)]
    pub fn pub_key(&self) -> String {
        self.inner.pub_key_base58()
    }

    /// Private key as base58check
    #[wasm_bindgen(js_name = toBase58)]
    pub fn to_base58(&self) -> String {
        self.inner.to_base58()
    }

    #[wasm_bindgen(js_name = isValidAddress)]
    pub fn is_valid_address(address: &str) -> bool {
        validate_address(address).is_ok()
    }
}

impl WasmAccount {
    pub fn into_inner(self) -> Account {
        self.inner
    }
}
