//! The `ell` namespace exposed to the console
//!
//! Holds the session's builder registry; each lookup returns a new builder.

use crate::config::BuilderConfig;
use crate::native::{native_registry, BuilderContext, NativeBuilder};
use crate::registry::{AnyBuilder, BuilderRegistry, BALANCE_KEY, TICKET_BID_KEY};
use crate::wasm::account::WasmAccount;
use crate::wasm::builder::{WasmBalanceBuilder, WasmTransferBuilder};
use crate::wasm::client::JsNodeClient;
use crate::WasmEllError;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// Namespace of transaction builder factories
#[wasm_bindgen(js_name = Ell)]
pub struct EllNamespace {
    registry: BuilderRegistry<AnyBuilder<NativeBuilder>>,
}

#[wasm_bindgen(js_class = Ell)]
impl EllNamespace {
    /// Create the namespace for one console session
    ///
    /// # Arguments
    /// * `account` - Coinbase account that signs transactions (optional)
    /// * `rpc` - Function `(method, params) => ({ result, error })` that calls the node
    /// * `config` - Optional builder configuration
    ///
    /// # Example Config
    /// ```json
    /// { "nonceMethod": "state_suggestNonce", "sendMethod": "ell_send", "payloadVersion": 95 }
    /// ```
    #[wasm_bindgen(constructor)]
    pub fn new(
        account: Option<WasmAccount>,
        rpc: js_sys::Function,
        config: JsValue,
    ) -> Result<EllNamespace, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            BuilderConfig::default()
        } else {
            let config: BuilderConfig = serde_wasm_bindgen::from_value(config)
                .map_err(|e| WasmEllError::Config(e.to_string()))?;
            config.validate()?;
            config
        };

        let ctx = BuilderContext::new(
            account.map(WasmAccount::into_inner),
            Rc::new(JsNodeClient::new(rpc)),
            config,
        );
        let registry = native_registry(Rc::new(ctx))?;
        Ok(EllNamespace { registry })
    }

    /// Create a balance transaction builder
    pub fn balance(&self) -> Result<WasmBalanceBuilder, JsValue> {
        match self.registry.create(BALANCE_KEY)? {
            AnyBuilder::Balance(tx) => Ok(WasmBalanceBuilder::from_inner(tx)),
            other => Err(unexpected_variant(BALANCE_KEY, other.kind())),
        }
    }

    /// Create a ticket bid transaction builder
    #[wasm_bindgen(js_name = ticketBid)]
    pub fn ticket_bid(&self) -> Result<WasmTransferBuilder, JsValue> {
        match self.registry.create(TICKET_BID_KEY)? {
            AnyBuilder::Transfer(tx) => Ok(WasmTransferBuilder::from_inner(tx)),
            other => Err(unexpected_variant(TICKET_BID_KEY, other.kind())),
        }
    }

    /// Create a builder by registry key
    pub fn create(&self, key: &str) -> Result<JsValue, JsValue> {
        Ok(match self.registry.create(key)? {
            AnyBuilder::Balance(tx) => WasmBalanceBuilder::from_inner(tx).into(),
            AnyBuilder::Transfer(tx) => WasmTransferBuilder::from_inner(tx).into(),
        })
    }

    /// Registered builder keys
    pub fn keys(&self) -> js_sys::Array {
        self.registry.keys().map(JsValue::from_str).collect()
    }
}

fn unexpected_variant(key: &str, kind: &str) -> JsValue {
    WasmEllError::Builder(format!("builder '{}' produced a '{}' transaction", key, kind)).into()
}
