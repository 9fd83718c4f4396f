//! Fluent transaction facade
//!
//! Re-exposes a `TxEngine` under the console's method names. Mutators return
//! the facade so calls chain; terminal calls hand back whatever the engine
//! returned. Nothing is validated, caught or translated here.

use crate::engine::TxEngine;
use core::fmt;
use core::marker::PhantomData;

mod sealed {
    pub trait Sealed {}
}

/// Transaction variant a facade is specialized for.
///
/// Variants share every operation except the name of the wire-format
/// terminal.
pub trait Variant: sealed::Sealed {
    /// Registry key the variant is published under
    const KIND: &'static str;
    /// Name of the encode-to-wire-format terminal
    const ENCODE_OP: &'static str;
}

/// Balance-style builders; encode terminal is `packed`
#[derive(Debug)]
pub enum Balance {}

/// Transfer-style builders; encode terminal is `serialize`
#[derive(Debug)]
pub enum Transfer {}

impl sealed::Sealed for Balance {}
impl sealed::Sealed for Transfer {}

impl Variant for Balance {
    const KIND: &'static str = "balance";
    const ENCODE_OP: &'static str = "packed";
}

impl Variant for Transfer {
    const KIND: &'static str = "ticketBid";
    const ENCODE_OP: &'static str = "serialize";
}

/// Chainable wrapper around one transaction handle
pub struct TxFacade<E, V> {
    engine: E,
    _variant: PhantomData<V>,
}

impl<E: TxEngine, V: Variant> TxFacade<E, V> {
    /// Wrap a handle produced by an engine factory. The handle is stored as-is.
    pub fn new(engine: E) -> Self {
        TxFacade {
            engine,
            _variant: PhantomData,
        }
    }

    pub fn nonce(&mut self, nonce: u64) -> Result<&mut Self, E::Error> {
        self.engine.set_nonce(nonce)?;
        Ok(self)
    }

    pub fn from(&mut self, address: &str) -> Result<&mut Self, E::Error> {
        self.engine.set_from(address)?;
        Ok(self)
    }

    pub fn sender_pub_key(&mut self, pub_key: &str) -> Result<&mut Self, E::Error> {
        self.engine.set_sender_pub_key(pub_key)?;
        Ok(self)
    }

    pub fn to(&mut self, address: &str) -> Result<&mut Self, E::Error> {
        self.engine.set_to(address)?;
        Ok(self)
    }

    pub fn value(&mut self, amount: &str) -> Result<&mut Self, E::Error> {
        self.engine.set_value(amount)?;
        Ok(self)
    }

    pub fn fee(&mut self, amount: &str) -> Result<&mut Self, E::Error> {
        self.engine.set_fee(amount)?;
        Ok(self)
    }

    pub fn reset(&mut self) -> Result<&mut Self, E::Error> {
        self.engine.reset()?;
        Ok(self)
    }

    /// Payload of the transaction; `finalize` asks the engine to make it
    /// ready for submission first.
    pub fn payload(&mut self, finalize: bool) -> Result<E::Payload, E::Error> {
        self.engine.payload(finalize)
    }

    pub fn send(&mut self) -> Result<E::Receipt, E::Error> {
        self.engine.send()
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn into_engine(self) -> E {
        self.engine
    }
}

impl<E: TxEngine> TxFacade<E, Balance> {
    /// Wire-format encoding of a balance transaction
    pub fn packed(&mut self) -> Result<E::Encoded, E::Error> {
        self.engine.encode()
    }
}

impl<E: TxEngine> TxFacade<E, Transfer> {
    /// Wire-format encoding of a transfer transaction
    pub fn serialize(&mut self) -> Result<E::Encoded, E::Error> {
        self.engine.encode()
    }
}

impl<E: fmt::Debug, V: Variant> fmt::Debug for TxFacade<E, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TxFacade")
            .field("variant", &V::KIND)
            .field("encode_op", &V::ENCODE_OP)
            .field("engine", &self.engine)
            .finish()
    }
}
