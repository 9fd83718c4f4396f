//! Builder configuration

use crate::error::WasmEllError;
use serde::{Deserialize, Serialize};

/// Base58check version byte of an encoded transaction payload
pub const PAYLOAD_VERSION: u8 = 95;

/// Settings shared by every builder created from one context.
///
/// Every field has a default, so `{}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuilderConfig {
    /// RPC method asked for the sender's next nonce
    pub nonce_method: String,
    /// RPC method that accepts a finalized transaction
    pub send_method: String,
    /// Base58check version used by `packed`/`serialize`
    pub payload_version: u8,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            nonce_method: "state_suggestNonce".to_string(),
            send_method: "ell_send".to_string(),
            payload_version: PAYLOAD_VERSION,
        }
    }
}

impl BuilderConfig {
    /// Parse a configuration from a JSON document
    pub fn from_json(json: &str) -> Result<Self, WasmEllError> {
        let config: BuilderConfig =
            serde_json::from_str(json).map_err(|e| WasmEllError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that can never reach a node
    pub fn validate(&self) -> Result<(), WasmEllError> {
        if self.nonce_method.is_empty() {
            return Err(WasmEllError::Config("nonceMethod must not be empty".into()));
        }
        if self.send_method.is_empty() {
            return Err(WasmEllError::Config("sendMethod must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = BuilderConfig::from_json("{}").unwrap();
        assert_eq!(config, BuilderConfig::default());
        assert_eq!(config.payload_version, 95);
    }

    #[test]
    fn test_partial_override() {
        let config = BuilderConfig::from_json(r#"{ "sendMethod": "tx_send" }"#).unwrap();
        assert_eq!(config.send_method, "tx_send");
        assert_eq!(config.nonce_method, "state_suggestNonce");
    }

    #[test]
    fn test_rejects_empty_method() {
        let err = BuilderConfig::from_json(r#"{ "nonceMethod": "" }"#).unwrap_err();
        assert!(matches!(err, WasmEllError::Config(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(BuilderConfig::from_json("{ nope").is_err());
    }
}
