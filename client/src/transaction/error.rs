//! Errors surfaced by draft finalization.
//!
//! Two families, and only two:
//!
//! - [`ValidationError`] — the caller's draft is unusable. Raised locally,
//!   before any collaborator is touched.
//! - [`CollaboratorError`] — something the finalizer delegated to failed.
//!   The original error travels inside untouched; callers can downcast to
//!   recover it.

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

use crate::ar::ArError;
use crate::codec::CodecError;
use crate::crypto::EncryptionError;
use crate::silo::SiloError;
use crate::wallet::KeyError;

/// A draft that cannot be finalized as given.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("a new transaction must have a 'data' value, or 'target' and 'quantity' values")]
    MissingDataOrTransfer,

    #[error("private-storage transactions must have a 'data' value")]
    MissingData,

    #[error("private-storage transactions can only store data; 'target' and 'quantity' are not allowed")]
    ValueTransferNotAllowed,

    #[error("no private-storage locator specified")]
    MissingLocator,
}

/// An opaque carrier for a collaborator's own failure.
///
/// `Display` is the original message and `source()` is the original's
/// source, so cause chains read as if the carrier were not there.
/// [`CollaboratorError::downcast_ref`] and [`CollaboratorError::into_inner`]
/// hand back the original value.
#[derive(Debug)]
pub struct CollaboratorError {
    inner: Box<dyn StdError + Send + Sync + 'static>,
}

impl CollaboratorError {
    /// Wraps any error (or message) produced by a collaborator.
    pub fn new(error: impl Into<Box<dyn StdError + Send + Sync + 'static>>) -> Self {
        Self {
            inner: error.into(),
        }
    }

    /// Returns the original error if it is a `T`.
    pub fn downcast_ref<T: StdError + 'static>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Unwraps the original error.
    pub fn into_inner(self) -> Box<dyn StdError + Send + Sync + 'static> {
        self.inner
    }
}

impl fmt::Display for CollaboratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl StdError for CollaboratorError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source()
    }
}

macro_rules! collaborator_error_from {
    ($($source:ty),* $(,)?) => {
        $(
            impl From<$source> for CollaboratorError {
                fn from(error: $source) -> Self {
                    Self::new(error)
                }
            }
        )*
    };
}

collaborator_error_from!(ArError, CodecError, EncryptionError, KeyError, SiloError);

/// Why a finalize call failed.
#[derive(Debug, Error)]
pub enum FinalizeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),
}

impl FinalizeError {
    /// Returns `true` for failures the caller can fix by changing the draft.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collaborator_error_keeps_original_message() {
        let err = CollaboratorError::from(KeyError::EmptyModulus);
        assert_eq!(err.to_string(), KeyError::EmptyModulus.to_string());
    }

    #[test]
    fn collaborator_error_downcasts_to_original() {
        let err = CollaboratorError::from(SiloError::LevelTooHigh { level: 30 });
        assert!(matches!(
            err.downcast_ref::<SiloError>(),
            Some(SiloError::LevelTooHigh { level: 30 })
        ));
        assert!(err.downcast_ref::<KeyError>().is_none());
    }

    #[test]
    fn collaborator_error_from_message() {
        let err = CollaboratorError::new("gateway timed out");
        assert_eq!(err.to_string(), "gateway timed out");
        assert_eq!(err.into_inner().to_string(), "gateway timed out");
    }

    #[derive(Debug)]
    struct Reset;

    impl fmt::Display for Reset {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("connection reset")
        }
    }

    impl StdError for Reset {}

    #[derive(Debug)]
    struct RequestFailed(Reset);

    impl fmt::Display for RequestFailed {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("gateway request failed")
        }
    }

    impl StdError for RequestFailed {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.0)
        }
    }

    fn chain(err: &dyn StdError) -> Vec<String> {
        let mut messages = vec![err.to_string()];
        let mut next = err.source();
        while let Some(cause) = next {
            messages.push(cause.to_string());
            next = cause.source();
        }
        messages
    }

    #[test]
    fn cause_chain_survives_the_carrier() {
        let err = FinalizeError::from(CollaboratorError::new(RequestFailed(Reset)));

        assert_eq!(chain(&err), vec!["gateway request failed", "connection reset"]);
        match &err {
            FinalizeError::Collaborator(inner) => {
                assert!(inner.downcast_ref::<RequestFailed>().is_some());
            }
            other => panic!("expected collaborator error, got {other:?}"),
        }
    }

    #[test]
    fn finalize_error_is_transparent() {
        let err = FinalizeError::from(ValidationError::MissingLocator);
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "no private-storage locator specified");

        let err = FinalizeError::from(CollaboratorError::new("boom"));
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "boom");
    }
}
