//! # JWK Key Material
//!
//! Wallets are RSA keys exported as JSON Web Keys. The draft client only ever
//! reads the public modulus `n`: it becomes the transaction `owner`, and its
//! SHA-256 digest is the wallet address.
//!
//! ```text
//! n (base64url) -> decode -> SHA-256 -> base64url -> address (43 chars)
//! ```
//!
//! The private components are carried so a key file round-trips through
//! this type intact, but nothing in this crate uses them and `Debug` never
//! prints them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use thiserror::Error;

use crate::codec::{b64url_decode, b64url_encode};
use crate::config::{ADDRESS_DIGEST_LENGTH, ADDRESS_ENCODED_LENGTH};
use crate::crypto::sha256;

/// Errors from loading key material or deriving an address from it.
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("key material has an empty modulus")]
    EmptyModulus,

    #[error("key modulus is not valid base64url: {0}")]
    InvalidModulus(String),

    #[error("malformed JWK: {0}")]
    MalformedJwk(#[from] serde_json::Error),

    #[error("failed to read key file: {0}")]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Address
// ---------------------------------------------------------------------------

/// A wallet address: the base64url SHA-256 digest of an owner modulus.
///
/// Addresses coming from callers (transfer targets) are taken as given.
/// Gateways reject malformed ones; [`Address::is_well_formed`] is there for
/// callers who want to check early.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `true` if this looks like a derived address: 43 base64url characters
    /// decoding to a 32-byte digest.
    pub fn is_well_formed(&self) -> bool {
        self.0.len() == ADDRESS_ENCODED_LENGTH
            && b64url_decode(&self.0).map_or(false, |bytes| bytes.len() == ADDRESS_DIGEST_LENGTH)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Address {
    fn from(address: &str) -> Self {
        Self(address.to_string())
    }
}

impl From<String> for Address {
    fn from(address: String) -> Self {
        Self(address)
    }
}

// ---------------------------------------------------------------------------
// Jwk
// ---------------------------------------------------------------------------

/// An RSA JSON Web Key as exported by weave wallets.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jwk {
    /// Key type. Always `"RSA"` for wallets.
    pub kty: String,
    /// Public exponent, base64url.
    pub e: String,
    /// Public modulus, base64url. This is the transaction owner.
    pub n: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub d: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dq: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qi: Option<String>,
}

impl Jwk {
    /// A public-only key from its modulus and exponent.
    pub fn public(n: impl Into<String>, e: impl Into<String>) -> Self {
        Self {
            kty: crate::config::JWK_KEY_TYPE.to_string(),
            e: e.into(),
            n: n.into(),
            d: None,
            p: None,
            q: None,
            dp: None,
            dq: None,
            qi: None,
        }
    }

    /// Parses a JWK from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, KeyError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JWK key file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, KeyError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// The public modulus, base64url-encoded exactly as stored in the key.
    pub fn modulus(&self) -> &str {
        &self.n
    }

    /// `true` if the key carries the private exponent.
    pub fn has_private_parts(&self) -> bool {
        self.d.is_some()
    }
}

impl fmt::Debug for Jwk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Private components stay out of logs, even partially.
        f.debug_struct("Jwk")
            .field("kty", &self.kty)
            .field("e", &self.e)
            .field("n", &self.n)
            .field("private", &self.has_private_parts())
            .finish()
    }
}

/// Derives the wallet address of `jwk`.
pub fn jwk_to_address(jwk: &Jwk) -> Result<Address, KeyError> {
    owner_to_address(&jwk.n)
}

/// Derives an address from a base64url owner modulus.
pub fn owner_to_address(owner: &str) -> Result<Address, KeyError> {
    if owner.is_empty() {
        return Err(KeyError::EmptyModulus);
    }
    let modulus = b64url_decode(owner).map_err(|e| KeyError::InvalidModulus(e.to_string()))?;
    Ok(Address(b64url_encode(&sha256(&modulus))))
}
