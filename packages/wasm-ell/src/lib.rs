//! wasm-ell: WASM module exposing Ell transaction builders to the console
//!
//! This crate provides:
//! - A fluent facade over transaction builder handles (`facade`)
//! - An explicit registry of builder factories (`registry`)
//! - The native builder that finalizes, signs, encodes and submits (`native`)
//!
//! # Architecture
//!
//! The crate follows a two-layer architecture:
//! - **Core layer** (`src/*.rs`, `src/native`): Pure Rust logic, no WASM dependencies
//! - **WASM layer** (`src/wasm/*.rs`): Thin wrappers with `#[wasm_bindgen]`
//!
//! # Usage from Rust
//!
//! ```rust,ignore
//! let registry = native_registry(ctx)?;
//! let mut tx = registry.create(BALANCE_KEY)?.into_balance().unwrap();
//! let receipt = tx.to("B")?.value("100")?.fee("1")?.send()?;
//! ```

pub mod account;
pub mod config;
pub mod engine;
pub mod error;
pub mod facade;
pub mod native;
pub mod registry;
pub mod types;
pub mod wasm;

#[cfg(test)]
mod test_utils;

// Re-export main types for convenience
pub use account::Account;
pub use config::BuilderConfig;
pub use engine::TxEngine;
pub use error::WasmEllError;
pub use facade::{Balance, Transfer, TxFacade, Variant};
pub use native::{native_registry, BuilderContext, NativeBuilder, NodeClient};
pub use registry::{AnyBuilder, BuilderRegistry, BALANCE_KEY, TICKET_BID_KEY};
pub use types::{decode_payload, TxDraft, TxType};
