//! # Denominations
//!
//! Quantities on the weave are integers of winston, the smallest indivisible
//! unit. 1 AR is 10^12 winston. The wire format carries winston as a decimal
//! string because the values routinely exceed what a JSON number can hold
//! without losing precision.
//!
//! [`Winston`] is the type every fee and transfer amount in this crate uses.
//! The AR conversion helpers exist for display and user input only; no
//! arithmetic ever happens in AR.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::config::{AR_DECIMALS, WINSTON_PER_AR};

/// Errors raised while parsing or combining quantities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArError {
    #[error("invalid winston quantity '{0}': expected a non-negative integer")]
    InvalidWinston(String),

    #[error("invalid AR amount '{0}'")]
    InvalidAr(String),

    #[error("AR amount '{0}' has more than {AR_DECIMALS} decimal places")]
    TooPrecise(String),

    #[error("amount exceeds the winston range")]
    Overflow,

    #[error("winston arithmetic underflowed")]
    Underflow,
}

// ---------------------------------------------------------------------------
// Winston
// ---------------------------------------------------------------------------

/// A quantity of winston.
///
/// Serializes as a decimal string (`"1000"`), which is what gateways expect
/// in the `quantity` and `reward` fields.
///
/// ```
/// use weave_client::ar::Winston;
///
/// let fee: Winston = "65595508".parse().unwrap();
/// assert_eq!(fee.to_string(), "65595508");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Winston(u128);

impl Winston {
    /// Zero winston.
    pub const ZERO: Winston = Winston(0);

    /// Wraps a raw winston count.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the raw winston count.
    pub const fn value(self) -> u128 {
        self.0
    }

    /// Returns `true` if the quantity is zero.
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Adds two quantities, failing on overflow.
    pub fn checked_add(self, other: Winston) -> Result<Winston, ArError> {
        self.0
            .checked_add(other.0)
            .map(Winston)
            .ok_or(ArError::Overflow)
    }

    /// Subtracts `other`, failing if the result would be negative.
    pub fn checked_sub(self, other: Winston) -> Result<Winston, ArError> {
        self.0
            .checked_sub(other.0)
            .map(Winston)
            .ok_or(ArError::Underflow)
    }

    /// Formats the quantity in AR with all 12 decimal places.
    pub fn to_ar(self) -> String {
        winston_to_ar(self)
    }
}

impl fmt::Display for Winston {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Winston {
    type Err = ArError;

    /// Strict parse: ASCII digits only. No sign, no whitespace, no decimals.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ArError::InvalidWinston(s.to_string()));
        }
        // Digits only by now, so a failed parse can only mean too many of them.
        s.parse::<u128>().map(Winston).map_err(|_| ArError::Overflow)
    }
}

impl From<u64> for Winston {
    fn from(value: u64) -> Self {
        Self(u128::from(value))
    }
}

impl Serialize for Winston {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Winston {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

/// Formats a winston quantity as AR with a fixed 12 decimal places.
///
/// `Winston(1_500_000_000_000)` becomes `"1.500000000000"`.
pub fn winston_to_ar(winston: Winston) -> String {
    let whole = winston.0 / WINSTON_PER_AR;
    let frac = winston.0 % WINSTON_PER_AR;
    format!(
        "{}.{:0>width$}",
        whole,
        frac,
        width = AR_DECIMALS as usize
    )
}

/// Parses a decimal AR amount into winston.
///
/// Accepts `"1"`, `"1.5"`, `".25"` and up to 12 fractional digits. Excess
/// precision is rejected rather than rounded; silently dropping value is
/// not a conversion.
pub fn ar_to_winston(ar: &str) -> Result<Winston, ArError> {
    let invalid = || ArError::InvalidAr(ar.to_string());

    let (whole, frac) = match ar.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (ar, ""),
    };

    if whole.is_empty() && frac.is_empty() {
        return Err(invalid());
    }
    let digits_only = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if !digits_only(whole) || !digits_only(frac) {
        return Err(invalid());
    }
    if frac.len() > AR_DECIMALS as usize {
        return Err(ArError::TooPrecise(ar.to_string()));
    }

    let whole: u128 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| ArError::Overflow)?
    };
    let frac: u128 = if frac.is_empty() {
        0
    } else {
        let scale = 10u128.pow(AR_DECIMALS - frac.len() as u32);
        frac.parse::<u128>().map_err(|_| invalid())? * scale
    };

    whole
        .checked_mul(WINSTON_PER_AR)
        .and_then(|w| w.checked_add(frac))
        .map(Winston)
        .ok_or(ArError::Overflow)
}
