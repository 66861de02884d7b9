//! # Cryptographic Primitives
//!
//! Thin wrappers around audited implementations. SHA-256 for address and
//! silo derivations, AES-256-GCM for private payloads.
//!
//! Signing is not here. A separate signer owns the private key operations.

pub mod encryption;
pub mod hash;

pub use encryption::{decrypt, encrypt, AesGcmEncryption, EncryptionError, EncryptionKey};
pub use hash::{sha256, sha256_iterated};
