//! # Transaction Module
//!
//! Turning caller input into a transaction a signer can take.
//!
//! ## Architecture
//!
//! ```text
//! draft.rs         — TransactionDraft: optional, caller-supplied attributes
//! collaborators.rs — Traits for everything finalization delegates
//! finalizer.rs     — DraftFinalizer: validation, defaulting, encryption
//! finalized.rs     — Transaction: the immutable, unsigned result
//! error.rs         — ValidationError, CollaboratorError, FinalizeError
//! ```
//!
//! ## Lifecycle
//!
//! 1. **Draft** — Fill in whatever you know on a [`TransactionDraft`].
//! 2. **Finalize** — [`DraftFinalizer::finalize`] (or `finalize_private` for
//!    silo payloads) validates, derives `owner`/`last_tx`/`reward`, encodes
//!    the payload and returns a [`Transaction`].
//! 3. **Sign & submit** — out of scope here.

pub mod collaborators;
pub mod draft;
pub mod error;
pub mod finalized;
pub mod finalizer;

pub use collaborators::{AddressResolver, EncryptionService, FeeOracle, PayloadCodec, ResourceLocator};
pub use draft::{Tag, TransactionDraft};
pub use error::{CollaboratorError, FinalizeError, ValidationError};
pub use finalized::{EncodedTag, Transaction};
pub use finalizer::DraftFinalizer;
