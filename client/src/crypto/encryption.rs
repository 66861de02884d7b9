//! # AES-256-GCM Encryption
//!
//! Authenticated encryption for private-storage payloads. A silo draft's
//! plaintext is sealed here before it is encoded into the transaction, so
//! the only thing the public ledger ever sees is ciphertext.
//!
//! ## Nonce management
//!
//! GCM is unforgiving about nonce reuse: two messages under the same key and
//! nonce leak the XOR of their plaintexts and let an attacker forge tags.
//! Every call draws a fresh 96-bit nonce from `OsRng`. Silo keys are shared
//! by everyone who knows the locator, so this matters more than usual.
//!
//! ## Wire format
//!
//! [`encrypt`] returns `nonce || ciphertext || tag` as one buffer. The first
//! 12 bytes are the nonce. [`decrypt`] expects the same layout.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use async_trait::async_trait;
use rand::RngCore;
use std::fmt;
use thiserror::Error;

use crate::config::{AES_KEY_LENGTH, AES_NONCE_LENGTH};
use crate::transaction::collaborators::EncryptionService;
use crate::transaction::error::CollaboratorError;

/// Errors from sealing or opening a payload.
///
/// Deliberately vague. "Wrong key" and "corrupted ciphertext" look the same
/// from the outside.
#[derive(Debug, Error)]
pub enum EncryptionError {
    #[error("encryption failed")]
    EncryptFailed,

    #[error("decryption failed -- wrong key or corrupted ciphertext")]
    DecryptFailed,

    #[error("invalid key length: expected {AES_KEY_LENGTH} bytes")]
    InvalidKeyLength,

    #[error("ciphertext too short: must be at least {AES_NONCE_LENGTH} bytes")]
    CiphertextTooShort,
}

/// A 256-bit symmetric key.
///
/// `Debug` never prints the key bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct EncryptionKey([u8; AES_KEY_LENGTH]);

impl EncryptionKey {
    pub fn new(bytes: [u8; AES_KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Builds a key from a slice, checking its length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, EncryptionError> {
        let bytes: [u8; AES_KEY_LENGTH] = bytes
            .try_into()
            .map_err(|_| EncryptionError::InvalidKeyLength)?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; AES_KEY_LENGTH] {
        &self.0
    }
}

impl fmt::Debug for EncryptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EncryptionKey(..)")
    }
}

/// Encrypt `plaintext` under `key` with a random nonce.
///
/// Returns `nonce || ciphertext || tag`.
///
/// ```
/// use weave_client::crypto::encryption::{decrypt, encrypt, EncryptionKey};
///
/// let key = EncryptionKey::new([0x42; 32]);
/// let sealed = encrypt(&key, b"secret").unwrap();
/// assert_eq!(decrypt(&key, &sealed).unwrap(), b"secret");
/// ```
pub fn encrypt(key: &EncryptionKey, plaintext: &[u8]) -> Result<Vec<u8>, EncryptionError> {
    let cipher =
        Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| EncryptionError::EncryptFailed)?;

    let mut nonce_bytes = [0u8; AES_NONCE_LENGTH];
    rand::rngs::OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, plaintext)
        .map_err(|_| EncryptionError::EncryptFailed)?;

    let mut out = Vec::with_capacity(AES_NONCE_LENGTH + ciphertext.len());
    out.extend_from_slice(&nonce_bytes);
    out.extend_from_slice(&ciphertext);
    Ok(out)
}

/// Decrypt a buffer produced by [`encrypt`].
pub fn decrypt(key: &EncryptionKey, data: &[u8]) -> Result<Vec<u8>, EncryptionError> {
    if data.len() < AES_NONCE_LENGTH {
        return Err(EncryptionError::CiphertextTooShort);
    }

    let (nonce_bytes, ciphertext) = data.split_at(AES_NONCE_LENGTH);
    let cipher =
        Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| EncryptionError::DecryptFailed)?;
    let nonce = Nonce::from_slice(nonce_bytes);

    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| EncryptionError::DecryptFailed)
}

/// The default [`EncryptionService`]: local AES-256-GCM.
#[derive(Debug, Clone, Copy, Default)]
pub struct AesGcmEncryption;

#[async_trait]
impl EncryptionService for AesGcmEncryption {
    async fn encrypt(
        &self,
        plaintext: &[u8],
        key: &EncryptionKey,
    ) -> Result<Vec<u8>, CollaboratorError> {
        Ok(encrypt(key, plaintext)?)
    }
}
