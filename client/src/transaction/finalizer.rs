//! Draft finalization.
//!
//! [`DraftFinalizer`] turns a [`TransactionDraft`] and the sender's key into
//! an immutable [`Transaction`]:
//!
//! ```text
//! validate ──► ┬─ last_tx? ─► resolve_address ─► last_transaction_id ─┬─► encode ─► Transaction
//!              └─ reward?  ─► quote_fee ──────────────────────────────┘
//! ```
//!
//! Validation is purely local and runs first, so a bad draft never costs a
//! round trip. The anchor chain and the fee quote do not depend on each
//! other and are awaited together. Fields the caller already supplied are
//! never looked up again.
//!
//! The private-storage variant adds one stage before encoding: resolve the
//! locator, then seal the payload under the resource key. Only ciphertext
//! reaches the transaction.

use std::sync::Arc;

use super::collaborators::{
    AddressResolver, EncryptionService, FeeOracle, PayloadCodec, ResourceLocator,
};
use super::draft::TransactionDraft;
use super::error::{CollaboratorError, FinalizeError};
use super::finalized::{EncodedTag, Transaction, TransactionParts};
use crate::ar::Winston;
use crate::codec::{Base64Url, Base64UrlCodec};
use crate::crypto::AesGcmEncryption;
use crate::silo::SiloLocator;
use crate::wallet::{Address, Jwk};

/// Validates drafts, fills derived fields and assembles transactions.
///
/// Holds nothing but shared handles to its collaborators, so one finalizer
/// can serve any number of concurrent calls.
#[derive(Clone)]
pub struct DraftFinalizer {
    wallets: Arc<dyn AddressResolver>,
    fees: Arc<dyn FeeOracle>,
    codec: Arc<dyn PayloadCodec>,
    encryption: Arc<dyn EncryptionService>,
    locator: Arc<dyn ResourceLocator>,
}

/// A draft after defaulting: everything the transaction needs is known.
struct ResolvedDraft {
    draft: TransactionDraft,
    owner: String,
    last_tx: String,
    reward: Winston,
}

impl DraftFinalizer {
    /// Creates a finalizer over the given gateway-backed collaborators,
    /// with the default codec, encryption and silo locator.
    pub fn new(wallets: Arc<dyn AddressResolver>, fees: Arc<dyn FeeOracle>) -> Self {
        Self {
            wallets,
            fees,
            codec: Arc::new(Base64UrlCodec),
            encryption: Arc::new(AesGcmEncryption),
            locator: Arc::new(SiloLocator),
        }
    }

    pub fn with_codec(mut self, codec: Arc<dyn PayloadCodec>) -> Self {
        self.codec = codec;
        self
    }

    pub fn with_encryption(mut self, encryption: Arc<dyn EncryptionService>) -> Self {
        self.encryption = encryption;
        self
    }

    pub fn with_locator(mut self, locator: Arc<dyn ResourceLocator>) -> Self {
        self.locator = locator;
        self
    }

    /// The codec payloads are encoded with. Use it to decode them again.
    pub fn codec(&self) -> &dyn PayloadCodec {
        self.codec.as_ref()
    }

    /// Finalizes a plain draft: a data payload, a value transfer, or both.
    pub async fn finalize(
        &self,
        draft: TransactionDraft,
        key: &Jwk,
    ) -> Result<Transaction, FinalizeError> {
        draft.validate_plain()?;

        let fee_target = draft.recipient().cloned();
        let resolved = self.resolve_defaults(draft, key, fee_target.as_ref()).await?;

        let data = resolved.draft.payload().map(|text| self.codec.encode_text(text));
        let tx = self.assemble(resolved, data);

        tracing::info!(
            payload_bytes = tx.data().map_or(0, |d| d.as_str().len()),
            transfer = tx.target().is_some(),
            reward = %tx.reward(),
            "draft finalized"
        );
        Ok(tx)
    }

    /// Finalizes a private-storage draft: the payload is encrypted under the
    /// key of the silo named by `locator` before it is encoded.
    pub async fn finalize_private(
        &self,
        draft: TransactionDraft,
        key: &Jwk,
        locator: &str,
    ) -> Result<Transaction, FinalizeError> {
        draft.validate_private(locator)?;

        // Fees for private payloads are quoted on the plaintext length.
        let resolved = self.resolve_defaults(draft, key, None).await?;

        let resource = self.locator.resolve(locator).await?;
        let plaintext = resolved.draft.payload().unwrap_or_default();
        let ciphertext = self
            .encryption
            .encrypt(plaintext.as_bytes(), resource.encryption_key())
            .await?;
        let data = Some(self.codec.encode_bytes(&ciphertext));
        let tx = self.assemble(resolved, data);

        tracing::info!(
            silo_level = resource.level(),
            ciphertext_bytes = ciphertext.len(),
            reward = %tx.reward(),
            "private draft finalized"
        );
        Ok(tx)
    }

    /// Fills `owner`, `last_tx` and `reward` where the caller left them out.
    async fn resolve_defaults(
        &self,
        draft: TransactionDraft,
        key: &Jwk,
        fee_target: Option<&Address>,
    ) -> Result<ResolvedDraft, CollaboratorError> {
        let anchor = async {
            if let Some(last_tx) = &draft.last_tx {
                return Ok::<_, CollaboratorError>(last_tx.clone());
            }
            let from = self.wallets.resolve_address(key).await?;
            let last_tx = self.wallets.last_transaction_id(&from).await?;
            tracing::debug!(%from, %last_tx, "anchor resolved");
            Ok(last_tx)
        };

        let reward = async {
            if let Some(reward) = draft.reward {
                return Ok::<_, CollaboratorError>(reward);
            }
            let byte_length = draft.payload_len();
            let reward = self.fees.quote_fee(byte_length, fee_target).await?;
            tracing::debug!(byte_length, %reward, "fee quoted");
            Ok(reward)
        };

        let (last_tx, reward) = futures::try_join!(anchor, reward)?;

        let owner = match &draft.owner {
            Some(owner) => owner.clone(),
            None => key.modulus().to_string(),
        };

        Ok(ResolvedDraft {
            draft,
            owner,
            last_tx,
            reward,
        })
    }

    fn assemble(&self, resolved: ResolvedDraft, data: Option<Base64Url>) -> Transaction {
        let ResolvedDraft {
            draft,
            owner,
            last_tx,
            reward,
        } = resolved;

        let tags = draft
            .tags
            .iter()
            .map(|tag| EncodedTag {
                name: self.codec.encode_text(&tag.name),
                value: self.codec.encode_text(&tag.value),
            })
            .collect();

        Transaction::from_parts(TransactionParts {
            last_tx,
            owner,
            tags,
            target: draft.target,
            quantity: draft.quantity,
            data,
            reward,
        })
    }
}
