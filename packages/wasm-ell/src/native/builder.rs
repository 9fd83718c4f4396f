//! Draft transaction builder that signs with the session account

use super::BuilderContext;
use crate::engine::TxEngine;
use crate::error::WasmEllError;
use crate::types::{TxDraft, TxType};
use serde_json::{json, Value};
use std::rc::Rc;

/// Builder for one transaction of a session
#[derive(Debug)]
pub struct NativeBuilder {
    ctx: Rc<BuilderContext>,
    tx_type: TxType,
    draft: TxDraft,
}

impl NativeBuilder {
    /// Create a builder whose draft is prefilled with the session account.
    ///
    /// Fails with `AccountNotLoaded` if the session has no account.
    pub fn new(ctx: Rc<BuilderContext>, tx_type: TxType) -> Result<Self, WasmEllError> {
        let draft = initial_draft(&ctx, tx_type)?;
        tracing::debug!(?tx_type, from = ?draft.from, "created transaction builder");
        Ok(NativeBuilder {
            ctx,
            tx_type,
            draft,
        })
    }

    pub fn tx_type(&self) -> TxType {
        self.tx_type
    }

    pub fn draft(&self) -> &TxDraft {
        &self.draft
    }

    /// Fill in nonce, timestamp, hash and signature.
    ///
    /// The nonce is only fetched from the node when none was set; once
    /// fetched it stays on the draft.
    pub fn finalize(&mut self) -> Result<&TxDraft, WasmEllError> {
        if self.draft.nonce.is_none() {
            self.draft.nonce = Some(self.suggest_nonce()?);
        }

        self.draft.timestamp = Some(self.ctx.now());
        self.draft.hash = Some(self.draft.compute_hash()?);

        let account = self.ctx.account().ok_or(WasmEllError::AccountNotLoaded)?;
        let bytes = self
            .draft
            .signing_bytes()
            .map_err(|e| WasmEllError::Builder(format!("failed to sign tx: {}", e)))?;
        self.draft.sig = Some(format!("0x{}", hex::encode(account.sign(&bytes))));

        tracing::trace!(hash = ?self.draft.hash, nonce = ?self.draft.nonce, "finalized transaction");
        Ok(&self.draft)
    }

    fn suggest_nonce(&self) -> Result<u64, WasmEllError> {
        let from = self.draft.from.clone().unwrap_or_default();
        let method = &self.ctx.config().nonce_method;
        tracing::debug!(%from, %method, "requesting nonce suggestion");

        let response = self
            .ctx
            .client()
            .call(method, json!([from]))
            .map_err(|e| WasmEllError::Builder(e.to_string()))?;

        let result = response.into_result().map_err(|err| {
            let message = match err.message.as_str() {
                "account not found" => "sender account not found".to_string(),
                _ => err.message,
            };
            WasmEllError::Builder(message)
        })?;

        result
            .as_u64()
            .or_else(|| result.as_f64().filter(|n| *n >= 0.0).map(|n| n as u64))
            .ok_or_else(|| WasmEllError::Builder(format!("unexpected nonce value: {}", result)))
    }
}

fn initial_draft(ctx: &BuilderContext, tx_type: TxType) -> Result<TxDraft, WasmEllError> {
    let account = ctx.account().ok_or(WasmEllError::AccountNotLoaded)?;
    Ok(TxDraft {
        tx_type: Some(tx_type),
        from: Some(account.address()),
        sender_pub_key: Some(account.pub_key_base58()),
        ..Default::default()
    })
}

impl TxEngine for NativeBuilder {
    type Payload = TxDraft;
    type Encoded = String;
    type Receipt = Value;
    type Error = WasmEllError;

    fn set_nonce(&mut self, nonce: u64) -> Result<(), WasmEllError> {
        self.draft.nonce = Some(nonce);
        Ok(())
    }

    fn set_from(&mut self, address: &str) -> Result<(), WasmEllError> {
        self.draft.from = Some(address.to_string());
        Ok(())
    }

    fn set_sender_pub_key(&mut self, pub_key: &str) -> Result<(), WasmEllError> {
        self.draft.sender_pub_key = Some(pub_key.to_string());
        Ok(())
    }

    fn set_to(&mut self, address: &str) -> Result<(), WasmEllError> {
        self.draft.to = Some(address.to_string());
        Ok(())
    }

    fn set_value(&mut self, amount: &str) -> Result<(), WasmEllError> {
        self.draft.value = Some(amount.to_string());
        Ok(())
    }

    fn set_fee(&mut self, amount: &str) -> Result<(), WasmEllError> {
        self.draft.fee = Some(amount.to_string());
        Ok(())
    }

    fn reset(&mut self) -> Result<(), WasmEllError> {
        self.draft = initial_draft(&self.ctx, self.tx_type)?;
        Ok(())
    }

    fn payload(&mut self, finalize: bool) -> Result<TxDraft, WasmEllError> {
        if finalize {
            self.finalize()?;
        }
        Ok(self.draft.clone())
    }

    fn encode(&mut self) -> Result<String, WasmEllError> {
        let version = self.ctx.config().payload_version;
        self.finalize()?.encode(version)
    }

    fn send(&mut self) -> Result<Value, WasmEllError> {
        let params = serde_json::to_value(self.finalize()?)?;
        let method = &self.ctx.config().send_method;
        tracing::debug!(%method, hash = ?self.draft.hash, "sending transaction");

        let response = self
            .ctx
            .client()
            .call(method, params)
            .map_err(|e| WasmEllError::Send(e.to_string()))?;

        response.into_result().map_err(|err| {
            tracing::warn!(code = ?err.code, message = %err.message, "node rejected transaction");
            WasmEllError::Rpc {
                code: err.code,
                message: err.message,
            }
        })
    }
}
