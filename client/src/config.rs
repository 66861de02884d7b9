//! # Client Constants
//!
//! Every magic number the draft client relies on lives here. Denomination
//! scale, key and digest sizes, silo limits. If you're hardcoding one of
//! these somewhere else, move it here.

// ---------------------------------------------------------------------------
// Denominations
// ---------------------------------------------------------------------------

/// Number of decimal places between AR and winston.
pub const AR_DECIMALS: u32 = 12;

/// Winston per AR. 10^12, the smallest unit the network accounts in.
pub const WINSTON_PER_AR: u128 = 1_000_000_000_000;

/// Quantity written into the transaction JSON when no value moves.
pub const ZERO_QUANTITY: &str = "0";

// ---------------------------------------------------------------------------
// Addresses
// ---------------------------------------------------------------------------

/// An address is the SHA-256 digest of the owner modulus.
pub const ADDRESS_DIGEST_LENGTH: usize = 32;

/// Length of a base64url-encoded (unpadded) 32-byte address.
pub const ADDRESS_ENCODED_LENGTH: usize = 43;

/// The only JWK key type the network accepts for wallets.
pub const JWK_KEY_TYPE: &str = "RSA";

// ---------------------------------------------------------------------------
// Symmetric Encryption
// ---------------------------------------------------------------------------

/// AES-256-GCM key length in bytes.
pub const AES_KEY_LENGTH: usize = 32;

/// AES-256-GCM nonce length in bytes. 96 bits, never anything else.
pub const AES_NONCE_LENGTH: usize = 12;

/// AES-256-GCM authentication tag length in bytes.
pub const AES_TAG_LENGTH: usize = 16;

// ---------------------------------------------------------------------------
// Silo Locators
// ---------------------------------------------------------------------------

/// Optional scheme prefix accepted in front of `name.level` locators.
pub const SILO_URI_SCHEME: &str = "silo://";

/// Highest accepted silo level. Key derivation hashes `2^level` times,
/// so anything past this turns a finalize call into a space heater.
pub const MAX_SILO_LEVEL: u32 = 24;

/// Bytes of the silo digest used for the access key.
pub const SILO_ACCESS_KEY_RANGE: std::ops::Range<usize> = 0..15;

/// Bytes of the silo digest hashed into the encryption key.
pub const SILO_KEY_MATERIAL_RANGE: std::ops::Range<usize> = 16..31;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winston_scale_matches_decimals() {
        assert_eq!(10u128.pow(AR_DECIMALS), WINSTON_PER_AR);
    }

    #[test]
    fn test_address_length_is_unpadded_base64_of_digest() {
        // ceil(32 * 4 / 3) without padding.
        assert_eq!((ADDRESS_DIGEST_LENGTH * 4).div_ceil(3), ADDRESS_ENCODED_LENGTH);
    }

    #[test]
    fn test_silo_ranges_fit_digest() {
        assert!(SILO_ACCESS_KEY_RANGE.end <= ADDRESS_DIGEST_LENGTH);
        assert!(SILO_KEY_MATERIAL_RANGE.end <= ADDRESS_DIGEST_LENGTH);
        assert!(MAX_SILO_LEVEL < 32);
    }

    #[test]
    fn test_crypto_parameter_sizes_match_cipher() {
        use aes_gcm::aead::generic_array::typenum::Unsigned;
        use aes_gcm::aead::AeadCore;
        use aes_gcm::{Aes256Gcm, Key};

        assert_eq!(Key::<Aes256Gcm>::default().len(), AES_KEY_LENGTH);
        assert_eq!(<Aes256Gcm as AeadCore>::NonceSize::USIZE, AES_NONCE_LENGTH);
        assert_eq!(<Aes256Gcm as AeadCore>::TagSize::USIZE, AES_TAG_LENGTH);
    }
}
