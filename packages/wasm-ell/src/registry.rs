//! Registry of transaction builder factories
//!
//! Built once at startup and handed by reference to whatever needs to create
//! builders by name.

use crate::engine::TxEngine;
use crate::error::WasmEllError;
use crate::facade::{Balance, Transfer, TxFacade, Variant};
use std::collections::BTreeMap;
use std::fmt;

/// Key of the balance transaction builder
pub const BALANCE_KEY: &str = Balance::KIND;
/// Key of the ticket bid transaction builder
pub const TICKET_BID_KEY: &str = Transfer::KIND;

type Factory<T> = Box<dyn Fn() -> Result<T, WasmEllError>>;

/// Zero-argument factories keyed by name
pub struct BuilderRegistry<T> {
    factories: BTreeMap<String, Factory<T>>,
}

impl<T> Default for BuilderRegistry<T> {
    fn default() -> Self {
        BuilderRegistry {
            factories: BTreeMap::new(),
        }
    }
}

impl<T> BuilderRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` under `key`.
    ///
    /// A key can be registered once; a second registration fails with
    /// `DuplicateKey` and leaves the first factory in place.
    pub fn register<F>(&mut self, key: impl Into<String>, factory: F) -> Result<(), WasmEllError>
    where
        F: Fn() -> Result<T, WasmEllError> + 'static,
    {
        let key = key.into();
        if self.factories.contains_key(&key) {
            tracing::warn!(%key, "rejected duplicate builder registration");
            return Err(WasmEllError::DuplicateKey(key));
        }
        tracing::debug!(%key, "registered builder factory");
        self.factories.insert(key, Box::new(factory));
        Ok(())
    }

    /// Create a fresh instance from the factory registered under `key`
    pub fn create(&self, key: &str) -> Result<T, WasmEllError> {
        let factory = self
            .factories
            .get(key)
            .ok_or_else(|| WasmEllError::UnknownKey(key.to_string()))?;
        factory()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.factories.contains_key(key)
    }

    /// Registered keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl<T> fmt::Debug for BuilderRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuilderRegistry")
            .field("keys", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// A facade of either variant, as produced by a registry lookup
#[derive(Debug)]
pub enum AnyBuilder<E: TxEngine> {
    Balance(TxFacade<E, Balance>),
    Transfer(TxFacade<E, Transfer>),
}

impl<E: TxEngine> AnyBuilder<E> {
    /// Registry key of the wrapped variant
    pub fn kind(&self) -> &'static str {
        match self {
            AnyBuilder::Balance(_) => Balance::KIND,
            AnyBuilder::Transfer(_) => Transfer::KIND,
        }
    }

    pub fn into_balance(self) -> Option<TxFacade<E, Balance>> {
        match self {
            AnyBuilder::Balance(tx) => Some(tx),
            AnyBuilder::Transfer(_) => None,
        }
    }

    pub fn into_transfer(self) -> Option<TxFacade<E, Transfer>> {
        match self {
            AnyBuilder::Transfer(tx) => Some(tx),
            AnyBuilder::Balance(_) => None,
        }
    }
}
