//! Code generation and hashing helpers for the OTP engine.

use rand::{rngs::OsRng, Rng};
use sha2::{Digest, Sha256};

use crate::domain::entities::email_otp::CODE_LENGTH;

/// Generate a uniformly distributed 6-digit code, zero-padded.
///
/// Draws from the OS CSPRNG; `gen_range` performs rejection sampling, so
/// every value in `000000..=999999` is equally likely.
pub fn generate_code() -> String {
    let n: u32 = OsRng.gen_range(0..1_000_000);
    format!("{:06}", n)
}

/// SHA-256 hex digest of a code string.
///
/// The same function runs at issuance and verification; comparison is
/// exact-match over the full 64-character digest.
pub fn hash_code(code: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(code.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_code_format() {
        for _ in 0..200 {
            let code = generate_code();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
            let n: u32 = code.parse().unwrap();
            assert!(n < 1_000_000);
        }
    }

    #[test]
    fn test_code_distribution() {
        // Bucket by leading digit over many samples; each bucket expects
        // ~1000 hits, and a factor-of-two window is far beyond any
        // plausible random fluctuation.
        let samples = 10_000;
        let mut buckets = [0u32; 10];
        for _ in 0..samples {
            let code = generate_code();
            let lead = code.as_bytes()[0] - b'0';
            buckets[lead as usize] += 1;
        }
        for count in buckets {
            assert!(count > 500, "leading digit undersampled: {:?}", buckets);
            assert!(count < 2000, "leading digit oversampled: {:?}", buckets);
        }
    }

    #[test]
    fn test_codes_are_not_constant() {
        let codes: HashSet<String> = (0..100).map(|_| generate_code()).collect();
        assert!(codes.len() > 1);
    }

    #[test]
    fn test_hash_is_deterministic() {
        assert_eq!(hash_code("123456"), hash_code("123456"));
        assert_ne!(hash_code("123456"), hash_code("123457"));
    }

    #[test]
    fn test_hash_known_vector() {
        // sha256("123456")
        assert_eq!(
            hash_code("123456"),
            "8d969eef6ecad3c29a3a629280e686cf0c3f5d5a86aff3ca12020c923adc6c92"
        );
    }

    #[test]
    fn test_hash_length() {
        assert_eq!(hash_code("000000").len(), 64);
    }
}
