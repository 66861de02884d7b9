//! # Silo Locators
//!
//! A silo is a private-storage namespace on an otherwise public ledger.
//! Everything needed to write into one is derived from its locator string,
//! `name.level` (optionally written `silo://name.level`):
//!
//! ```text
//! digest         = SHA-256^(2^level)(name)
//! access key     = base64(digest[0..15])
//! encryption key = SHA-256(digest[16..31])
//! ```
//!
//! The level is a work factor. Each step doubles the hashing needed to go
//! from a guessed name to its key, which is the only thing standing between
//! a short silo name and a dictionary attack.
//!
//! Only the derivation lives here. Finding what is already stored in a silo
//! needs a gateway query and is out of this crate's hands.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fmt;
use thiserror::Error;

use crate::config::{
    MAX_SILO_LEVEL, SILO_ACCESS_KEY_RANGE, SILO_KEY_MATERIAL_RANGE, SILO_URI_SCHEME,
};
use crate::crypto::{sha256, sha256_iterated, EncryptionKey};
use crate::transaction::collaborators::ResourceLocator;
use crate::transaction::error::CollaboratorError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiloError {
    /// The locator text is left out of the message; it is key material.
    #[error("invalid silo locator: must be a name in the format [A-Za-z0-9_-]+.[0-9]+, e.g. 'bubble.7'")]
    InvalidLocator,

    #[error("silo level {level} exceeds the maximum of {max}", max = MAX_SILO_LEVEL)]
    LevelTooHigh { level: u32 },
}

/// A resolved silo: the keys derived from one locator.
///
/// The locator itself is not kept. Anyone holding it can rederive the
/// encryption key, so it is treated as key material.
#[derive(Clone)]
pub struct SiloResource {
    level: u32,
    access_key: String,
    encryption_key: EncryptionKey,
}

impl SiloResource {
    pub fn new(level: u32, access_key: impl Into<String>, encryption_key: EncryptionKey) -> Self {
        Self {
            level,
            access_key: access_key.into(),
            encryption_key,
        }
    }

    /// Work factor of the derivation: `2^level` SHA-256 rounds.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Tag value that marks transactions as belonging to this silo.
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// Key that seals payloads written into this silo.
    pub fn encryption_key(&self) -> &EncryptionKey {
        &self.encryption_key
    }
}

impl fmt::Debug for SiloResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SiloResource")
            .field("level", &self.level)
            .field("access_key", &self.access_key)
            .finish_non_exhaustive()
    }
}

/// Splits a locator into its name and level.
pub fn parse_locator(locator: &str) -> Result<(&str, u32), SiloError> {
    let body = locator.strip_prefix(SILO_URI_SCHEME).unwrap_or(locator);
    let (name, level) = body.rsplit_once('.').ok_or(SiloError::InvalidLocator)?;

    let name_ok = !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    let level_ok = !level.is_empty() && level.bytes().all(|b| b.is_ascii_digit());
    if !name_ok || !level_ok {
        return Err(SiloError::InvalidLocator);
    }

    let level: u32 = level.parse().map_err(|_| SiloError::InvalidLocator)?;
    if level > MAX_SILO_LEVEL {
        return Err(SiloError::LevelTooHigh { level });
    }
    Ok((name, level))
}

/// Derives the [`SiloResource`] for a locator.
pub fn derive_resource(locator: &str) -> Result<SiloResource, SiloError> {
    let (name, level) = parse_locator(locator)?;

    let digest = sha256_iterated(name.as_bytes(), 1u64 << level);
    let access_key = STANDARD.encode(&digest[SILO_ACCESS_KEY_RANGE]);
    let encryption_key = EncryptionKey::new(sha256(&digest[SILO_KEY_MATERIAL_RANGE]));

    Ok(SiloResource::new(level, access_key, encryption_key))
}

/// The default [`ResourceLocator`]: local `name.level` derivation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SiloLocator;

#[async_trait]
impl ResourceLocator for SiloLocator {
    async fn resolve(&self, locator: &str) -> Result<SiloResource, CollaboratorError> {
        let resource = derive_resource(locator)?;
        tracing::debug!(
            level = resource.level(),
            access_key = %resource.access_key(),
            "silo locator resolved"
        );
        Ok(resource)
    }
}
