//! WASM bindings for the transaction builders
//!
//! A wrapper and every wrapper returned by its mutators share one facade, so
//! `tx.to(a)` leaves `tx` usable and `tx.to(a).value(v).fee(f)` still chains.

use crate::facade::{Balance, Transfer, TxFacade};
use crate::native::NativeBuilder;
use crate::WasmEllError;
use serde::Serialize;
use std::cell::{RefCell, RefMut};
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// Largest integer a JS number holds exactly (`Number.MAX_SAFE_INTEGER`)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| WasmEllError::Encoding(e.to_string()).into())
}

/// Convert a JS number to a nonce
pub fn nonce_from_js(nonce: f64) -> Result<u64, WasmEllError> {
    if nonce.is_finite() && nonce >= 0.0 && nonce.fract() == 0.0 && nonce <= MAX_SAFE_INTEGER {
        Ok(nonce as u64)
    } else {
        Err(WasmEllError::Builder(format!(
            "nonce must be a non-negative integer, got {}",
            nonce
        )))
    }
}

fn borrow_facade<V>(
    cell: &RefCell<TxFacade<NativeBuilder, V>>,
) -> Result<RefMut<'_, TxFacade<NativeBuilder, V>>, WasmEllError> {
    cell.try_borrow_mut()
        .map_err(|_| WasmEllError::Builder("builder is already in use".into()))
}

macro_rules! builder_bindings {
    ($wrapper:ident, $js_name:ident, $variant:ty) => {
        #[wasm_bindgen(js_name = $js_name)]
        #[derive(Debug, Clone)]
        pub struct $wrapper {
            inner: Rc<RefCell<TxFacade<NativeBuilder, $variant>>>,
        }

        #[wasm_bindgen(js_class = $js_name)]
        impl $wrapper {
            /// Set the nonce
            pub fn nonce(&self, nonce: f64) -> Result<$wrapper, JsValue> {
                let nonce = nonce_from_js(nonce)?;
                borrow_facade(&self.inner)?.nonce(nonce)?;
                Ok(self.clone())
            }

            /// Set the sender address
            pub fn from(&self, address: &str) -> Result<$wrapper, JsValue> {
                borrow_facade(&self.inner)?.from(address)?;
                Ok(self.clone())
            }

            /// Set the sender public key
            #[wasm_bindgen(js_name = senderPubKey)]
            pub fn sender_pub_key(&self, pub_key: &str) -> Result<$wrapper, JsValue> {
                borrow_facade(&self.inner)?.sender_pub_key(pub_key)?;
                Ok(self.clone())
            }

            /// Set the recipient address
            pub fn to(&self, address: &str) -> Result<$wrapper, JsValue> {
                borrow_facade(&self.inner)?.to(address)?;
                Ok(self.clone())
            }

            /// Set the amount to send
            pub fn value(&self, amount: &str) -> Result<$wrapper, JsValue> {
                borrow_facade(&self.inner)?.value(amount)?;
                Ok(self.clone())
            }

            /// Set the fee
            pub fn fee(&self, amount: &str) -> Result<$wrapper, JsValue> {
                borrow_facade(&self.inner)?.fee(amount)?;
                Ok(self.clone())
            }

            /// Start over from the freshly created state
            pub fn reset(&self) -> Result<$wrapper, JsValue> {
                borrow_facade(&self.inner)?.reset()?;
                Ok(self.clone())
            }

            /// Transaction payload as a plain object.
            ///
            /// With `finalize` the nonce, timestamp, hash and signature are
            /// filled in first.
            pub fn payload(&self, finalize: bool) -> Result<JsValue, JsValue> {
                let draft = borrow_facade(&self.inner)?.payload(finalize)?;
                to_js(&draft)
            }

            /// Finalize and submit; returns the node's `result`.
            ///
            /// Throws `RpcError` when the node answers with an `error` object
            /// and `SendError` when the RPC callback itself fails.
            pub fn send(&self) -> Result<JsValue, JsValue> {
                let receipt = borrow_facade(&self.inner)?.send()?;
                to_js(&receipt)
            }
        }

        impl $wrapper {
            pub fn from_inner(inner: TxFacade<NativeBuilder, $variant>) -> Self {
                $wrapper {
                    inner: Rc::new(RefCell::new(inner)),
                }
            }
        }
    };
}

builder_bindings!(WasmBalanceBuilder, TxBalanceBuilder, Balance);
builder_bindings!(WasmTransferBuilder, TxTransferBuilder, Transfer);

#[wasm_bindgen(js_class = TxBalanceBuilder)]
impl WasmBalanceBuilder {
    /// Base58check encoding of the finalized transaction
    pub fn packed(&self) -> Result<String, JsValue> {
        Ok(borrow_facade(&self.inner)?.packed()?)
    }
}

#[wasm_bindgen(js_class = TxTransferBuilder)]
impl WasmTransferBuilder {
    /// Base58check encoding of the finalized transaction
    pub fn serialize(&self) -> Result<String, JsValue> {
        Ok(borrow_facade(&self.inner)?.serialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0)]
    #[case(1.0, 1)]
    #[case(MAX_SAFE_INTEGER, 9_007_199_254_740_991)]
    fn test_nonce_from_js_accepts_integers(#[case] input: f64, #[case] expected: u64) {
        assert_eq!(nonce_from_js(input).unwrap(), expected);
    }

    #[rstest]
    #[case(-1.0)]
    #[case(1.5)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(MAX_SAFE_INTEGER + 2.0)]
    fn test_nonce_from_js_rejects_non_integers(#[case] input: f64) {
        let err = nonce_from_js(input).unwrap_err();
        assert_eq!(err.kind(), "BuilderError");
    }
}
