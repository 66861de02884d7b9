//! Caller-supplied transaction attributes, before finalization.
//!
//! Every field the finalizer can derive is an `Option`: `None` means "derive
//! it for me", `Some` means "I already know it, leave it alone". There are
//! no sentinel values, so an empty string the caller typed is never mistaken
//! for "unset".

use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use crate::ar::Winston;
use crate::wallet::Address;

/// A raw `(name, value)` tag. Encoded by the finalizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub value: String,
}

impl Tag {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A partially-filled transaction.
///
/// ```
/// use weave_client::transaction::TransactionDraft;
/// use weave_client::ar::Winston;
///
/// let draft = TransactionDraft::new()
///     .target("1seRanklLU_1VTGkEk7P0xAwMJfA7owA1JHW5KyZKlY")
///     .quantity(Winston::new(10_000_000_000));
/// assert!(draft.validate_plain().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionDraft {
    /// Raw text payload.
    pub data: Option<String>,
    /// Recipient of `quantity`.
    pub target: Option<Address>,
    /// Winston moved to `target`.
    pub quantity: Option<Winston>,
    /// Owner modulus. Derived from the signing key when absent.
    pub owner: Option<String>,
    /// Replay anchor. Looked up from the sender address when absent.
    pub last_tx: Option<String>,
    /// Fee. Quoted from the payload size when absent.
    pub reward: Option<Winston>,
    pub tags: Vec<Tag>,
}

impl TransactionDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn target(mut self, target: impl Into<Address>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn quantity(mut self, quantity: Winston) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn last_tx(mut self, last_tx: impl Into<String>) -> Self {
        self.last_tx = Some(last_tx.into());
        self
    }

    pub fn reward(mut self, reward: Winston) -> Self {
        self.reward = Some(reward);
        self
    }

    pub fn tag(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push(Tag::new(name, value));
        self
    }

    /// Non-empty payload text, if any.
    pub fn payload(&self) -> Option<&str> {
        self.data.as_deref().filter(|data| !data.is_empty())
    }

    /// Non-empty recipient, if any.
    pub fn recipient(&self) -> Option<&Address> {
        self.target.as_ref().filter(|target| !target.is_empty())
    }

    /// UTF-8 byte length of the payload, 0 without one.
    pub fn payload_len(&self) -> usize {
        self.payload().map_or(0, str::len)
    }

    /// `true` once `owner`, `last_tx` and `reward` are all known.
    pub fn is_resolved(&self) -> bool {
        self.owner.is_some() && self.last_tx.is_some() && self.reward.is_some()
    }

    /// A plain draft needs a payload, or a recipient and a quantity.
    pub fn validate_plain(&self) -> Result<(), ValidationError> {
        if self.payload().is_none() && !(self.recipient().is_some() && self.quantity.is_some()) {
            return Err(ValidationError::MissingDataOrTransfer);
        }
        Ok(())
    }

    /// A private-storage draft needs a payload and a locator, and must not
    /// move value.
    pub fn validate_private(&self, locator: &str) -> Result<(), ValidationError> {
        if self.payload().is_none() {
            return Err(ValidationError::MissingData);
        }
        if locator.is_empty() {
            return Err(ValidationError::MissingLocator);
        }
        if self.recipient().is_some() || self.quantity.is_some() {
            return Err(ValidationError::ValueTransferNotAllowed);
        }
        Ok(())
    }
}
