//! Error types for wasm-ell

use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Main error type for wasm-ell operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WasmEllError {
    /// Failure while assembling or finalizing a transaction
    #[error("{0}")]
    Builder(String),
    /// Failure while submitting a transaction
    #[error("{0}")]
    Send(String),
    /// Error object returned by the node
    #[error("rpc error: {message}")]
    Rpc { code: Option<i64>, message: String },
    /// No coinbase account is available to build with
    #[error("account not loaded")]
    AccountNotLoaded,
    /// Invalid private or public key
    #[error("Invalid key: {0}")]
    InvalidKey(String),
    /// Invalid account address
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
    /// Base58, hex or JSON encoding failure
    #[error("Encoding error: {0}")]
    Encoding(String),
    /// Invalid builder configuration
    #[error("Invalid config: {0}")]
    Config(String),
    /// A factory is already registered under this key
    #[error("builder already registered under key '{0}'")]
    DuplicateKey(String),
    /// No factory is registered under this key
    #[error("no builder registered under key '{0}'")]
    UnknownKey(String),
}

impl WasmEllError {
    /// Name given to the JavaScript `Error` raised for this error
    pub fn kind(&self) -> &'static str {
        match self {
            WasmEllError::Builder(_) | WasmEllError::AccountNotLoaded => "BuilderError",
            WasmEllError::Send(_) => "SendError",
            WasmEllError::Rpc { .. } => "RpcError",
            WasmEllError::InvalidKey(_) => "KeyError",
            WasmEllError::InvalidAddress(_) => "AddressError",
            WasmEllError::Encoding(_) => "EncodingError",
            WasmEllError::Config(_) => "ConfigError",
            WasmEllError::DuplicateKey(_) | WasmEllError::UnknownKey(_) => "RegistryError",
        }
    }
}

impl From<&str> for WasmEllError {
    fn from(s: &str) -> Self {
        WasmEllError::Builder(s.to_string())
    }
}

impl From<String> for WasmEllError {
    fn from(s: String) -> Self {
        WasmEllError::Builder(s)
    }
}

impl From<serde_json::Error> for WasmEllError {
    fn from(err: serde_json::Error) -> Self {
        WasmEllError::Encoding(err.to_string())
    }
}

impl From<bs58::decode::Error> for WasmEllError {
    fn from(err: bs58::decode::Error) -> Self {
        WasmEllError::Encoding(format!("Base58 decode error: {}", err))
    }
}

// Converts to a JS Error carrying the error kind as its name
impl From<WasmEllError> for JsValue {
    fn from(err: WasmEllError) -> Self {
        let js_err = js_sys::Error::new(&err.to_string());
        js_err.set_name(err.kind());
        js_err.into()
    }
}
