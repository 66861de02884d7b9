//! # Hashing Utilities
//!
//! SHA-256 is the only digest the weave uses for client-side derivations:
//! wallet addresses are the SHA-256 of the owner modulus, and silo keys come
//! out of an iterated SHA-256 chain. Nothing here is clever, which is the
//! point.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 digest of `data`.
///
/// # Example
///
/// ```
/// use weave_client::crypto::sha256;
///
/// let digest = sha256(b"weave");
/// assert_eq!(digest.len(), 32);
/// ```
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Hash `data` with SHA-256, then re-hash the digest until `rounds` hashes
/// have been applied in total.
///
/// At least one round is always performed; `rounds == 0` behaves like 1.
/// This is the stretching step behind silo key derivation, where the round
/// count is `2^level`.
pub fn sha256_iterated(data: &[u8], rounds: u64) -> [u8; 32] {
    let mut digest = sha256(data);
    for _ in 1..rounds {
        digest = sha256(&digest);
    }
    digest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vector() {
        // NIST FIPS 180-2 test vector for "abc".
        assert_eq!(
            hex::encode(sha256(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_iterated_single_round_is_plain_sha256() {
        assert_eq!(sha256_iterated(b"abc", 1), sha256(b"abc"));
        assert_eq!(sha256_iterated(b"abc", 0), sha256(b"abc"));
    }

    #[test]
    fn test_iterated_known_vector() {
        assert_eq!(
            hex::encode(sha256_iterated(b"abc", 4)),
            "ebea187d3d64ec287600c6be94f0db8ab5b5ff8382b6ac4a45218e6e5b327c7f"
        );
    }

    #[test]
    fn test_iterated_chains_digests() {
        let twice = sha256(&sha256(b"weave"));
        assert_eq!(sha256_iterated(b"weave", 2), twice);
    }
}
