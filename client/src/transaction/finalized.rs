//! The finalized, unsigned transaction.
//!
//! Produced only by [`super::DraftFinalizer`]. Every field is populated and
//! nothing can be changed afterwards; a signer takes it from here.
//!
//! # JSON shape
//!
//! Serializes to the object gateways accept, with the signature fields
//! still empty:
//!
//! ```text
//! { "id": "", "last_tx": "...", "owner": "...", "tags": [{"name","value"}],
//!   "target": "", "quantity": "0", "data": "", "reward": "...", "signature": "" }
//! ```

use serde::{Serialize, Serializer};

use crate::ar::Winston;
use crate::codec::{Base64Url, CodecError, PayloadCodec};
use crate::config::ZERO_QUANTITY;
use crate::wallet::Address;

/// A tag as stored on-chain: both halves encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodedTag {
    pub name: Base64Url,
    pub value: Base64Url,
}

/// A submission-ready, unsigned transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    last_tx: String,
    owner: String,
    tags: Vec<EncodedTag>,
    target: Option<Address>,
    quantity: Option<Winston>,
    data: Option<Base64Url>,
    reward: Winston,
}

/// Fully resolved fields, handed over by the finalizer.
pub(crate) struct TransactionParts {
    pub last_tx: String,
    pub owner: String,
    pub tags: Vec<EncodedTag>,
    pub target: Option<Address>,
    pub quantity: Option<Winston>,
    pub data: Option<Base64Url>,
    pub reward: Winston,
}

impl Transaction {
    pub(crate) fn from_parts(parts: TransactionParts) -> Self {
        Self {
            last_tx: parts.last_tx,
            owner: parts.owner,
            tags: parts.tags,
            target: parts.target.filter(|t| !t.is_empty()),
            quantity: parts.quantity,
            data: parts.data.filter(|d| !d.is_empty()),
            reward: parts.reward,
        }
    }

    /// Replay anchor.
    pub fn last_tx(&self) -> &str {
        &self.last_tx
    }

    /// Owner modulus, base64url.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn tags(&self) -> &[EncodedTag] {
        &self.tags
    }

    pub fn target(&self) -> Option<&Address> {
        self.target.as_ref()
    }

    /// Quantity moved to the target. `None` when no value moves.
    pub fn quantity(&self) -> Option<Winston> {
        self.quantity
    }

    /// Encoded payload, or ciphertext for private-storage transactions.
    pub fn data(&self) -> Option<&Base64Url> {
        self.data.as_ref()
    }

    pub fn reward(&self) -> Winston {
        self.reward
    }

    /// Decodes the payload back to bytes.
    pub fn decode_data(&self, codec: &dyn PayloadCodec) -> Result<Option<Vec<u8>>, CodecError> {
        self.data.as_ref().map(|d| codec.decode(d)).transpose()
    }

    /// Decodes the payload back to text.
    pub fn decode_data_text(&self, codec: &dyn PayloadCodec) -> Result<Option<String>, CodecError> {
        self.data.as_ref().map(|d| codec.decode_text(d)).transpose()
    }

    /// Decodes every tag back to `(name, value)` text.
    pub fn decode_tags(&self, codec: &dyn PayloadCodec) -> Result<Vec<(String, String)>, CodecError> {
        self.tags
            .iter()
            .map(|tag| Ok((codec.decode_text(&tag.name)?, codec.decode_text(&tag.value)?)))
            .collect()
    }

    /// Gateway JSON, pretty-printed.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Serialize)]
struct TransactionJson<'a> {
    id: &'a str,
    last_tx: &'a str,
    owner: &'a str,
    tags: &'a [EncodedTag],
    target: &'a str,
    quantity: String,
    data: &'a str,
    reward: Winston,
    signature: &'a str,
}

impl Serialize for Transaction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        TransactionJson {
            id: "",
            last_tx: &self.last_tx,
            owner: &self.owner,
            tags: &self.tags,
            target: self.target.as_ref().map_or("", Address::as_str),
            quantity: self
                .quantity
                .map_or_else(|| ZERO_QUANTITY.to_string(), |q| q.to_string()),
            data: self.data.as_ref().map_or("", Base64Url::as_str),
            reward: self.reward,
            signature: "",
        }
        .serialize(serializer)
    }
}
