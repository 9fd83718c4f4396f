//! WASM bindings for wasm-ell
//!
//! This module contains thin wrappers with #[wasm_bindgen] that delegate
//! to the core Rust implementations.

pub mod account;
pub mod builder;
pub mod client;
pub mod namespace;

// Re-export WASM types
pub use account::WasmAccount;
pub use builder::{WasmBalanceBuilder, WasmTransferBuilder};
pub use client::JsNodeClient;
pub use namespace::EllNamespace;
