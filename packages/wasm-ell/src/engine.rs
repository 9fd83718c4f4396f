//! Operations a transaction builder handle must provide
//!
//! `TxFacade` depends only on this trait, so a native builder and a test
//! double are interchangeable behind it.

/// An in-progress transaction owned by a builder engine.
///
/// Setters write exactly one field. Terminal operations read the populated
/// handle and may update it (a finalized payload keeps its nonce, hash and
/// signature).
pub trait TxEngine {
    /// Value returned by `payload`
    type Payload;
    /// Wire-format encoding returned by `encode`
    type Encoded;
    /// Result of submitting the transaction
    type Receipt;
    /// Failure raised by any operation
    type Error;

    fn set_nonce(&mut self, nonce: u64) -> Result<(), Self::Error>;
    fn set_from(&mut self, address: &str) -> Result<(), Self::Error>;
    fn set_sender_pub_key(&mut self, pub_key: &str) -> Result<(), Self::Error>;
    fn set_to(&mut self, address: &str) -> Result<(), Self::Error>;
    fn set_value(&mut self, amount: &str) -> Result<(), Self::Error>;
    fn set_fee(&mut self, amount: &str) -> Result<(), Self::Error>;

    /// Restore the handle to the state it had when the factory created it
    fn reset(&mut self) -> Result<(), Self::Error>;

    /// Current payload, finalized first when `finalize` is set
    fn payload(&mut self, finalize: bool) -> Result<Self::Payload, Self::Error>;

    /// Fully encoded, submittable form of the transaction
    fn encode(&mut self) -> Result<Self::Encoded, Self::Error>;

    /// Submit the transaction
    fn send(&mut self) -> Result<Self::Receipt, Self::Error>;
}
