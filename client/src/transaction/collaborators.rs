//! Contracts for everything the finalizer delegates.
//!
//! The finalizer owns the rules; these traits own the I/O. Each one is a
//! narrow capability so tests can stand in deterministic doubles for the
//! gateway, the fee oracle and the crypto.
//!
//! | Trait               | Default implementation                 |
//! |---------------------|----------------------------------------|
//! | [`AddressResolver`] | address derivation only (anchor lookup has none) |
//! | [`FeeOracle`]       | none, needs a gateway                  |
//! | [`PayloadCodec`]    | [`crate::codec::Base64UrlCodec`]       |
//! | [`ResourceLocator`] | [`crate::silo::SiloLocator`]           |
//! | [`EncryptionService`] | [`crate::crypto::AesGcmEncryption`]  |

use async_trait::async_trait;

use super::error::CollaboratorError;
use crate::ar::Winston;
use crate::crypto::EncryptionKey;
use crate::silo::SiloResource;
use crate::wallet::{jwk_to_address, Address, Jwk};

pub use crate::codec::PayloadCodec;

/// Maps key material to addresses and addresses to their anchor.
#[async_trait]
pub trait AddressResolver: Send + Sync {
    /// Derives the sender address of `key`. Local by default.
    async fn resolve_address(&self, key: &Jwk) -> Result<Address, CollaboratorError> {
        Ok(jwk_to_address(key)?)
    }

    /// Id of the most recent transaction sent from `address`, used as the
    /// replay anchor (`last_tx`) of the next one.
    async fn last_transaction_id(&self, address: &Address) -> Result<String, CollaboratorError>;
}

/// Quotes the minimum reward for a transaction.
#[async_trait]
pub trait FeeOracle: Send + Sync {
    /// Minimum fee for a payload of `byte_length` bytes, optionally sent to
    /// `target`. Transfers to wallets the network has never seen cost more,
    /// which is why the target matters at all.
    async fn quote_fee(
        &self,
        byte_length: usize,
        target: Option<&Address>,
    ) -> Result<Winston, CollaboratorError>;
}

/// Resolves a private-storage locator into a key-bearing resource.
#[async_trait]
pub trait ResourceLocator: Send + Sync {
    async fn resolve(&self, locator: &str) -> Result<SiloResource, CollaboratorError>;
}

/// Seals payload bytes under a resource key.
#[async_trait]
pub trait EncryptionService: Send + Sync {
    async fn encrypt(
        &self,
        plaintext: &[u8],
        key: &EncryptionKey,
    ) -> Result<Vec<u8>, CollaboratorError>;
}
