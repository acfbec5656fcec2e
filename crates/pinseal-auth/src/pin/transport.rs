//! Transport string assembly.
//!
//! ```text
//! result  = sessionId "," segment [ "," segment ]
//! segment = labelHex ":" ciphertextHex
//! ```

use pinseal_crypto::rand::SecureRandom;
use pinseal_crypto::rsa::RsaPublicKey;
use pinseal_types::{CryptoError, HashAlgId};
use zeroize::Zeroizing;

/// Random OAEP label length in bytes (32 hex characters on the wire).
pub const LABEL_LEN: usize = 16;

/// Seal `message` under a fresh random label and return `labelHex:ciphertext`.
///
/// The capacity check runs before the label is drawn, so an oversized
/// message consumes no randomness.
pub fn encrypt_segment<R: SecureRandom + ?Sized>(
    key: &RsaPublicKey,
    alg: HashAlgId,
    message: &[u8],
    rng: &R,
) -> Result<String, CryptoError> {
    let max = key.max_message_len(alg);
    if max.map_or(true, |max| message.len() > max) {
        return Err(CryptoError::MessageTooLong {
            len: message.len(),
            max: max.unwrap_or(0),
        });
    }

    let mut label = Zeroizing::new([0u8; LABEL_LEN]);
    rng.fill_random(label.as_mut_slice())?;
    let ciphertext = key.encrypt_oaep_hex(alg, label.as_slice(), message, rng)?;
    Ok(format!("{}:{}", hex::encode(label.as_slice()), ciphertext))
}

/// Join the session id and one or two sealed segments.
pub fn assemble(session_id: &str, first: &str, second: Option<&str>) -> String {
    match second {
        Some(second) => format!("{session_id},{first},{second}"),
        None => format!("{session_id},{first}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinseal_crypto::rand::SystemRandom;

    // 512-bit modulus, only the width matters here
    fn key() -> RsaPublicKey {
        let mut n_hex = "c5".repeat(64);
        n_hex.replace_range(126.., "c7");
        RsaPublicKey::from_hex(&n_hex, "010001").unwrap()
    }

    #[test]
    fn test_assemble() {
        assert_eq!(assemble("s1", "aa:bb", None), "s1,aa:bb");
        assert_eq!(assemble("s1", "aa:bb", Some("cc:dd")), "s1,aa:bb,cc:dd");
        assert_eq!(assemble("", "aa:bb", None), ",aa:bb");
    }

    #[test]
    fn test_segment_shape() {
        let seg = encrypt_segment(&key(), HashAlgId::Sha1, b"\x01pin", &SystemRandom::new()).unwrap();
        let (label, ct) = seg.split_once(':').unwrap();
        assert_eq!(label.len(), 32);
        assert_eq!(ct.len(), 128);
        assert!(seg[..32].bytes().all(|b| b.is_ascii_hexdigit()));
        assert!(ct.bytes().all(|b| b.is_ascii_hexdigit()));
    }

    #[test]
    fn test_segment_too_long() {
        // k = 64, SHA-256 leaves 64 - 66 < 0 bytes
        let err = encrypt_segment(&key(), HashAlgId::Sha256, b"", &SystemRandom::new());
        assert_eq!(err, Err(CryptoError::MessageTooLong { len: 0, max: 0 }));

        // SHA-1 leaves 64 - 42 = 22 bytes
        let err = encrypt_segment(&key(), HashAlgId::Sha1, &[0u8; 23], &SystemRandom::new());
        assert_eq!(err, Err(CryptoError::MessageTooLong { len: 23, max: 22 }));
    }
}
