//! RSAES-OAEP encoding (RFC 8017 §7.1) with a selectable hash and label.
//!
//! The same hash drives both the label hash and MGF1.

use pinseal_types::{CryptoError, HashAlgId};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use super::mgf1::mgf1_xor;
use crate::provider::HashAlgorithm;
use crate::rand::SecureRandom;

/// Largest message that fits a `k`-byte block: `k - 2*hLen - 2`.
///
/// `None` when the block cannot hold even an empty message.
pub fn max_message_len(alg: HashAlgId, k: usize) -> Option<usize> {
    k.checked_sub(2 * alg.output_size() + 2)
}

/// EME-OAEP encoding (RFC 8017 §7.1.1 step 2).
///
/// EM = 0x00 || maskedSeed || maskedDB, exactly `k` bytes. The length check
/// happens before any random bytes are drawn.
pub fn oaep_encode<R: SecureRandom + ?Sized>(
    alg: HashAlgId,
    k: usize,
    label: &[u8],
    msg: &[u8],
    rng: &R,
) -> Result<Vec<u8>, CryptoError> {
    let h_len = alg.output_size();

    // mLen <= k - 2*hLen - 2
    let max = max_message_len(alg, k);
    if max.map_or(true, |max| msg.len() > max) {
        return Err(CryptoError::MessageTooLong {
            len: msg.len(),
            max: max.unwrap_or(0),
        });
    }

    let l_hash = alg.hash(label)?;

    // DB = lHash || PS || 0x01 || M
    let db_len = k - h_len - 1;
    let mut db = Vec::with_capacity(db_len);
    db.extend_from_slice(&l_hash);
    let ps_len = db_len - h_len - 1 - msg.len();
    db.resize(h_len + ps_len, 0x00);
    db.push(0x01);
    db.extend_from_slice(msg);
    debug_assert_eq!(db.len(), db_len);

    let mut seed = vec![0u8; h_len];
    if let Err(e) = rng.fill_random(&mut seed) {
        db.zeroize();
        return Err(e);
    }

    // maskedDB = DB xor MGF1(seed, k - hLen - 1)
    mgf1_xor(alg, &seed, &mut db)?;
    // maskedSeed = seed xor MGF1(maskedDB, hLen)
    mgf1_xor(alg, &db, &mut seed)?;

    let mut em = Vec::with_capacity(k);
    em.push(0x00);
    em.extend_from_slice(&seed);
    em.extend_from_slice(&db);
    debug_assert_eq!(em.len(), k);

    seed.zeroize();
    db.zeroize();
    Ok(em)
}

/// EME-OAEP decoding (RFC 8017 §7.1.2 step 3).
///
/// Every structural failure maps to the same `RsaInvalidPadding` error.
pub fn oaep_decode(alg: HashAlgId, label: &[u8], em: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let h_len = alg.output_size();
    let k = em.len();
    if k < 2 * h_len + 2 {
        return Err(CryptoError::RsaInvalidPadding);
    }

    let y = em[0];
    let mut seed = em[1..1 + h_len].to_vec();
    let mut db = em[1 + h_len..].to_vec();

    mgf1_xor(alg, &db, &mut seed)?;
    mgf1_xor(alg, &seed, &mut db)?;
    seed.zeroize();

    let l_hash = alg.hash(label)?;
    let l_hash_valid: bool = db[..h_len].ct_eq(&l_hash).into();

    // Skip PS, expect the 0x01 separator
    let mut msg_start = None;
    for (i, &byte) in db.iter().enumerate().skip(h_len) {
        match byte {
            0x00 => continue,
            0x01 => {
                msg_start = Some(i + 1);
                break;
            }
            _ => break,
        }
    }

    let result = match msg_start {
        Some(start) if y == 0x00 && l_hash_valid => Ok(db[start..].to_vec()),
        _ => Err(CryptoError::RsaInvalidPadding),
    };
    db.zeroize();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::testing::{FailingRandom, FixedRandom};
    use crate::rand::SystemRandom;

    #[test]
    fn test_oaep_encode_structure() {
        let rng = SystemRandom::new();
        for alg in HashAlgId::ALL {
            let em = oaep_encode(alg, 256, b"label", b"OAEP test", &rng).unwrap();
            assert_eq!(em.len(), 256);
            assert_eq!(em[0], 0x00);
        }
    }

    #[test]
    fn test_oaep_capacity_boundary() {
        let rng = SystemRandom::new();
        let k = 128;
        for alg in [HashAlgId::Sha1, HashAlgId::Sha256] {
            let max = k - 2 * alg.output_size() - 2;
            assert_eq!(max_message_len(alg, k), Some(max));

            let em = oaep_encode(alg, k, b"", &vec![0xAA; max], &rng).unwrap();
            assert_eq!(em.len(), k);

            assert_eq!(
                oaep_encode(alg, k, b"", &vec![0xAA; max + 1], &rng),
                Err(CryptoError::MessageTooLong { len: max + 1, max })
            );
        }
    }

    #[test]
    fn test_oaep_block_too_small_for_hash() {
        // SHA-512 needs k >= 130 even for an empty message
        let rng = SystemRandom::new();
        assert_eq!(max_message_len(HashAlgId::Sha512, 128), None);
        assert_eq!(
            oaep_encode(HashAlgId::Sha512, 128, b"", b"", &rng),
            Err(CryptoError::MessageTooLong { len: 0, max: 0 })
        );
        assert!(oaep_encode(HashAlgId::Sha512, 130, b"", b"", &rng).is_ok());
    }

    #[test]
    fn test_oaep_too_long_consumes_no_randomness() {
        assert!(matches!(
            oaep_encode(HashAlgId::Sha1, 64, b"", &[0u8; 40], &FailingRandom),
            Err(CryptoError::MessageTooLong { .. })
        ));
    }

    #[test]
    fn test_oaep_rng_failure_propagates() {
        assert_eq!(
            oaep_encode(HashAlgId::Sha1, 128, b"", b"1234", &FailingRandom),
            Err(CryptoError::RandomGenerationFailure)
        );
    }

    #[test]
    fn test_oaep_deterministic_with_fixed_seed() {
        let a = oaep_encode(HashAlgId::Sha256, 128, b"l", b"m", &FixedRandom::new(&[7])).unwrap();
        let b = oaep_encode(HashAlgId::Sha256, 128, b"l", b"m", &FixedRandom::new(&[7])).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_oaep_known_answer_sha1() {
        // seed = 0x00..0x13, label = "", message = "hi", k = 64
        let seed: Vec<u8> = (0u8..20).collect();
        let em = oaep_encode(HashAlgId::Sha1, 64, b"", b"hi", &FixedRandom::new(&seed)).unwrap();
        assert_eq!(hex::encode(em), OAEP_SHA1_KAT);
    }

    const OAEP_SHA1_KAT: &str = "00bc5f246589a5de58d8f10e2787470b1495562731d8bcf0367fb055802993d4\
     4ae1a0fb809edd2e3899f37263a574171d607880917aefcf642294b08b994f78";

    #[test]
    fn test_oaep_randomness() {
        let rng = SystemRandom::new();
        let em1 = oaep_encode(HashAlgId::Sha256, 128, b"", b"same message", &rng).unwrap();
        let em2 = oaep_encode(HashAlgId::Sha256, 128, b"", b"same message", &rng).unwrap();
        assert_ne!(em1, em2, "OAEP should be randomized");

        assert_eq!(oaep_decode(HashAlgId::Sha256, b"", &em1).unwrap(), b"same message");
        assert_eq!(oaep_decode(HashAlgId::Sha256, b"", &em2).unwrap(), b"same message");
    }

    #[test]
    fn test_oaep_decode_roundtrip_every_hash() {
        let rng = SystemRandom::new();
        for alg in HashAlgId::ALL {
            let em = oaep_encode(alg, 256, b"label", b"", &rng).unwrap();
            assert_eq!(oaep_decode(alg, b"label", &em).unwrap(), b"");
        }
    }

    #[test]
    fn test_oaep_decode_rejects_wrong_label() {
        let rng = SystemRandom::new();
        let em = oaep_encode(HashAlgId::Sha1, 128, b"label-a", b"data", &rng).unwrap();
        assert_eq!(
            oaep_decode(HashAlgId::Sha1, b"label-b", &em),
            Err(CryptoError::RsaInvalidPadding)
        );
    }

    #[test]
    fn test_oaep_decode_bad_first_byte() {
        let rng = SystemRandom::new();
        let mut em = oaep_encode(HashAlgId::Sha1, 128, b"", b"test", &rng).unwrap();
        em[0] = 0x01;
        assert!(oaep_decode(HashAlgId::Sha1, b"", &em).is_err());
    }

    #[test]
    fn test_oaep_decode_too_short() {
        let em = vec![0u8; 2 * 32 + 1];
        assert_eq!(
            oaep_decode(HashAlgId::Sha256, b"", &em),
            Err(CryptoError::RsaInvalidPadding)
        );
    }
}
