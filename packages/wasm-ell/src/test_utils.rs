//! Test doubles shared by the unit tests

use crate::engine::TxEngine;
use crate::native::{BuilderContext, NodeClient, RpcError, RpcResponse};
use crate::{Account, BuilderConfig, WasmEllError};
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;

/// One call observed by `RecordingEngine`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Nonce(u64),
    From(String),
    SenderPubKey(String),
    To(String),
    Value(String),
    Fee(String),
    Reset,
    Payload(bool),
    Encode,
    Send,
}

/// Failure returned by `RecordingEngine`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubError(pub &'static str);

/// Engine that records every call and answers terminals with fixed sentinels
#[derive(Debug, Default)]
pub struct RecordingEngine {
    pub calls: Vec<Call>,
    /// Fail on the first call whose label matches
    pub fail_on: Option<&'static str>,
}

pub const PAYLOAD_SENTINEL: &str = "payload-sentinel";
pub const ENCODED_SENTINEL: &str = "encoded-sentinel";
pub const RECEIPT_SENTINEL: u32 = 0xe11;

impl RecordingEngine {
    pub fn failing_on(label: &'static str) -> Self {
        RecordingEngine {
            calls: Vec::new(),
            fail_on: Some(label),
        }
    }

    fn record(&mut self, label: &'static str, call: Call) -> Result<(), StubError> {
        if self.fail_on == Some(label) {
            return Err(StubError(label));
        }
        self.calls.push(call);
        Ok(())
    }

    /// Calls made since the last reset
    pub fn since_reset(&self) -> &[Call] {
        match self.calls.iter().rposition(|c| *c == Call::Reset) {
            Some(i) => &self.calls[i + 1..],
            None => &self.calls,
        }
    }
}

impl TxEngine for RecordingEngine {
    type Payload = &'static str;
    type Encoded = &'static str;
    type Receipt = u32;
    type Error = StubError;

    fn set_nonce(&mut self, nonce: u64) -> Result<(), StubError> {
        self.record("nonce", Call::Nonce(nonce))
    }

    fn set_from(&mut self, address: &str) -> Result<(), StubError> {
        self.record("from", Call::From(address.to_string()))
    }

    fn set_sender_pub_key(&mut self, pub_key: &str) -> Result<(), StubError> {
        self.record("senderPubKey", Call::SenderPubKey(pub_key.to_string()))
    }

    fn set_to(&mut self, address: &str) -> Result<(), StubError> {
        self.record("to", Call::To(address.to_string()))
    }

    fn set_value(&mut self, amount: &str) -> Result<(), StubError> {
        self.record("value", Call::Value(amount.to_string()))
    }

    fn set_fee(&mut self, amount: &str) -> Result<(), StubError> {
        self.record("fee", Call::Fee(amount.to_string()))
    }

    fn reset(&mut self) -> Result<(), StubError> {
        self.record("reset", Call::Reset)
    }

    fn payload(&mut self, finalize: bool) -> Result<&'static str, StubError> {
        self.record("payload", Call::Payload(finalize))?;
        Ok(PAYLOAD_SENTINEL)
    }

    fn encode(&mut self) -> Result<&'static str, StubError> {
        self.record("encode", Call::Encode)?;
        Ok(ENCODED_SENTINEL)
    }

    fn send(&mut self) -> Result<u32, StubError> {
        self.record("send", Call::Send)?;
        Ok(RECEIPT_SENTINEL)
    }
}

/// Node stub answering RPC calls from a canned table
#[derive(Debug, Default)]
pub struct StubNode {
    pub requests: RefCell<Vec<(String, Value)>>,
    pub nonce: Option<u64>,
    pub nonce_error: Option<String>,
    pub send_error: Option<RpcError>,
    pub send_result: Value,
}

impl StubNode {
    pub fn with_nonce(nonce: u64) -> Self {
        StubNode {
            nonce: Some(nonce),
            send_result: serde_json::json!({ "id": "0xabc" }),
            ..Default::default()
        }
    }

    pub fn calls_to(&self, method: &str) -> Vec<Value> {
        self.requests
            .borrow()
            .iter()
            .filter(|(m, _)| m == method)
            .map(|(_, p)| p.clone())
            .collect()
    }
}

impl NodeClient for StubNode {
    fn call(&self, method: &str, params: Value) -> Result<RpcResponse, WasmEllError> {
        self.requests
            .borrow_mut()
            .push((method.to_string(), params));
        match method {
            "state_suggestNonce" => match (&self.nonce_error, self.nonce) {
                (Some(message), _) => Ok(RpcResponse::error(None, message)),
                (None, Some(nonce)) => Ok(RpcResponse::result(serde_json::json!(nonce))),
                (None, None) => Err(WasmEllError::Send("connection refused".into())),
            },
            "ell_send" => Ok(match &self.send_error {
                Some(err) => RpcResponse {
                    result: None,
                    error: Some(err.clone()),
                },
                None => RpcResponse::result(self.send_result.clone()),
            }),
            other => Err(WasmEllError::Send(format!("method not found: {}", other))),
        }
    }
}

pub fn test_account() -> Account {
    Account::from_secret_key(&[42u8; 32]).unwrap()
}

pub fn context_with(node: Rc<StubNode>) -> Rc<BuilderContext> {
    Rc::new(
        BuilderContext::new(Some(test_account()), node, BuilderConfig::default())
            .with_clock(|| 1_529_670_647),
    )
}
