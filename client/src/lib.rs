// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Weave Client — Draft Transactions
//!
//! Everything between "I want to store this" and "here is a transaction
//! ready to sign". Callers fill in what they know on a draft; the finalizer
//! validates it, derives the rest (owner, replay anchor, fee), encodes the
//! payload and, for private-storage drafts, encrypts it first.
//!
//! ## Architecture
//!
//! - **transaction** — Drafts, the finalizer, and the unsigned result.
//! - **wallet** — JWK key material and address derivation.
//! - **silo** — Private-storage locators and their derived keys.
//! - **crypto** — SHA-256 and AES-256-GCM wrappers.
//! - **codec** — base64url payload encoding.
//! - **ar** — Winston quantities and AR conversion.
//! - **config** — Constants.
//!
//! ## What this crate does not do
//!
//! Sign, submit, or talk to a gateway. Anchor lookups and fee quotes come in
//! through the [`transaction::AddressResolver`] and
//! [`transaction::FeeOracle`] traits; wire them to whatever transport you
//! use.

pub mod ar;
pub mod codec;
pub mod config;
pub mod crypto;
pub mod silo;
pub mod transaction;
pub mod wallet;

pub use ar::Winston;
pub use transaction::{DraftFinalizer, FinalizeError, Transaction, TransactionDraft};
pub use wallet::{Address, Jwk};
