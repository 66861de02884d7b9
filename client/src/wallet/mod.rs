//! # Wallet Module
//!
//! Key material and addresses. A wallet here is nothing more than an RSA
//! JWK; storing, generating and unlocking keys is somebody else's job.

pub mod jwk;

pub use jwk::{jwk_to_address, owner_to_address, Address, Jwk, KeyError};
