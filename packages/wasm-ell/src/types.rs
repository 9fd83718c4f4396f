//! Shared transaction types

use crate::account;
use crate::error::WasmEllError;
use blake2::{digest::consts::U32, Blake2b, Digest};
use serde::{Deserialize, Serialize};

/// Kind of transaction a builder produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum TxType {
    /// Transfer from one balance account to another
    Balance,
    /// Bid for a validator ticket
    TicketBid,
}

impl From<TxType> for i64 {
    fn from(t: TxType) -> i64 {
        match t {
            TxType::Balance => 0x1,
            TxType::TicketBid => 0x3,
        }
    }
}

impl TryFrom<i64> for TxType {
    type Error = WasmEllError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0x1 => Ok(TxType::Balance),
            0x3 => Ok(TxType::TicketBid),
            other => Err(WasmEllError::Encoding(format!(
                "unknown transaction type: {}",
                other
            ))),
        }
    }
}

/// In-progress transaction held by the native builder.
///
/// Absent fields are omitted from the JSON form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxDraft {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub tx_type: Option<TxType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_pub_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sig: Option<String>,
}

impl TxDraft {
    /// Bytes covered by the hash and the signature.
    ///
    /// JSON array of `[fee, from, nonce, senderPubKey, timestamp, to, type, value]`,
    /// with absent fields encoded as their zero value.
    pub fn signing_bytes(&self) -> Result<Vec<u8>, WasmEllError> {
        let fields = (
            self.fee.as_deref().unwrap_or_default(),
            self.from.as_deref().unwrap_or_default(),
            self.nonce.unwrap_or_default(),
            self.sender_pub_key.as_deref().unwrap_or_default(),
            self.timestamp.unwrap_or_default(),
            self.to.as_deref().unwrap_or_default(),
            self.tx_type.map(i64::from).unwrap_or_default(),
            self.value.as_deref().unwrap_or_default(),
        );
        Ok(serde_json::to_vec(&fields)?)
    }

    /// Blake2b-256 of the signing bytes, `0x` prefixed hex
    pub fn compute_hash(&self) -> Result<String, WasmEllError> {
        let bytes = self.signing_bytes()?;
        Ok(format!("0x{}", hex::encode(blake2_256(&bytes))))
    }

    /// Check `sig` against `senderPubKey`
    pub fn verify_signature(&self) -> Result<bool, WasmEllError> {
        let pub_key = self
            .sender_pub_key
            .as_deref()
            .ok_or_else(|| WasmEllError::InvalidKey("sender public key not set".into()))?;
        let sig = self
            .sig
            .as_deref()
            .ok_or_else(|| WasmEllError::Encoding("signature not set".into()))?;
        let sig = hex::decode(sig.strip_prefix("0x").unwrap_or(sig))
            .map_err(|e| WasmEllError::Encoding(format!("Invalid hex: {}", e)))?;
        account::verify(pub_key, &self.signing_bytes()?, &sig)
    }

    /// Base58check encoding of the JSON form
    pub fn encode(&self, version: u8) -> Result<String, WasmEllError> {
        let json = serde_json::to_vec(self)?;
        Ok(bs58::encode(json).with_check_version(version).into_string())
    }
}

/// Decode a payload produced by `packed`/`serialize`
pub fn decode_payload(encoded: &str, version: u8) -> Result<TxDraft, WasmEllError> {
    let decoded = bs58::decode(encoded).with_check(Some(version)).into_vec()?;
    Ok(serde_json::from_slice(&decoded[1..])?)
}

/// Blake2-256 hash
fn blake2_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b::<U32>::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tx_type_serializes_as_integer() {
        let draft = TxDraft {
            tx_type: Some(TxType::TicketBid),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&draft).unwrap(), json!({ "type": 3 }));
        assert!(serde_json::from_value::<TxType>(json!(9)).is_err());
    }

    #[test]
    fn test_absent_fields_omitted() {
        let draft = TxDraft {
            sender_pub_key: Some("pk".into()),
            value: Some("10".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            json!({ "senderPubKey": "pk", "value": "10" })
        );
    }

    #[test]
    fn test_hash_ignores_hash_and_sig() {
        let mut draft = TxDraft {
            tx_type: Some(TxType::Balance),
            nonce: Some(2),
            to: Some("B".into()),
            ..Default::default()
        };
        let before = draft.compute_hash().unwrap();
        draft.hash = Some(before.clone());
        draft.sig = Some("0xdead".into());
        assert_eq!(draft.compute_hash().unwrap(), before);
        assert_eq!(before.len(), 2 + 64);

        draft.nonce = Some(3);
        assert_ne!(draft.compute_hash().unwrap(), before);
    }

    #[test]
    fn test_decode_payload_checks_version() {
        let draft = TxDraft {
            fee: Some("1".into()),
            ..Default::default()
        };
        let encoded = draft.encode(95).unwrap();
        assert_eq!(decode_payload(&encoded, 95).unwrap(), draft);
        assert!(decode_payload(&encoded, 92).is_err());
    }
}
