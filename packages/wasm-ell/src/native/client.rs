//! Node RPC access used by the native builder

use crate::error::WasmEllError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error object of a JSON-RPC response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    pub message: String,
}

/// Result or error returned by the node for one call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RpcResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

impl RpcResponse {
    pub fn result(value: Value) -> Self {
        RpcResponse {
            result: Some(value),
            error: None,
        }
    }

    pub fn error(code: Option<i64>, message: &str) -> Self {
        RpcResponse {
            result: None,
            error: Some(RpcError {
                code,
                message: message.to_string(),
            }),
        }
    }

    /// Split into the result value or the node's error object
    pub fn into_result(self) -> Result<Value, RpcError> {
        match (self.error, self.result) {
            (Some(err), _) => Err(err),
            (None, result) => Ok(result.unwrap_or(Value::Null)),
        }
    }
}

/// Transport to a node's RPC API.
///
/// `Err` means the call never produced a response; errors reported by the
/// node arrive inside `RpcResponse`.
pub trait NodeClient {
    fn call(&self, method: &str, params: Value) -> Result<RpcResponse, WasmEllError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_wins_over_result() {
        let response: RpcResponse = serde_json::from_value(json!({
            "result": 1,
            "error": { "code": -32000, "message": "account not found" }
        }))
        .unwrap();
        let err = response.into_result().unwrap_err();
        assert_eq!(err.code, Some(-32000));
        assert_eq!(err.message, "account not found");
    }

    #[test]
    fn test_missing_result_is_null() {
        let response: RpcResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response.into_result().unwrap(), Value::Null);
    }
}
