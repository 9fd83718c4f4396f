//! Node client backed by a JavaScript callback

use crate::native::{NodeClient, RpcResponse};
use crate::WasmEllError;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Calls `callback(method, params)` and reads back `{ result?, error? }`
pub struct JsNodeClient {
    callback: js_sys::Function,
}

impl JsNodeClient {
    pub fn new(callback: js_sys::Function) -> Self {
        JsNodeClient { callback }
    }
}

impl NodeClient for JsNodeClient {
    fn call(&self, method: &str, params: Value) -> Result<RpcResponse, WasmEllError> {
        let params = params
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| WasmEllError::Encoding(e.to_string()))?;

        let response = self
            .callback
            .call2(&JsValue::NULL, &JsValue::from_str(method), &params)
            .map_err(|e| WasmEllError::Send(js_error_message(&e)))?;

        serde_wasm_bindgen::from_value(response)
            .map_err(|e| WasmEllError::Encoding(format!("Invalid rpc response: {}", e)))
    }
}

fn js_error_message(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => format!("{:?}", value),
    }
}
