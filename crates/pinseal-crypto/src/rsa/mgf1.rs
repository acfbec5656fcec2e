//! MGF1 mask generation function (RFC 8017 B.2.1).

use pinseal_types::{CryptoError, HashAlgId};

use crate::provider::HashAlgorithm;

/// Generate a `mask_len`-byte mask from `seed`.
///
/// T = Hash(seed || I2OSP(0, 4)) || Hash(seed || I2OSP(1, 4)) || ...
/// truncated to `mask_len` bytes.
pub fn mgf1(alg: HashAlgId, seed: &[u8], mask_len: usize) -> Result<Vec<u8>, CryptoError> {
    let h_len = alg.output_size();
    let iterations = mask_len.div_ceil(h_len);
    // The counter is four octets wide
    if iterations as u64 > u64::from(u32::MAX) + 1 {
        return Err(CryptoError::InvalidArg);
    }

    let mut ctx = alg.new_digest();
    let mut block = vec![0u8; h_len];
    let mut t = Vec::with_capacity(iterations * h_len);

    for counter in 0..iterations {
        ctx.update(seed)?;
        ctx.update(&(counter as u32).to_be_bytes())?;
        ctx.finish(&mut block)?;
        t.extend_from_slice(&block);
    }

    t.truncate(mask_len);
    Ok(t)
}

/// XOR `MGF1(seed, out.len())` into `out`.
pub fn mgf1_xor(alg: HashAlgId, seed: &[u8], out: &mut [u8]) -> Result<(), CryptoError> {
    let mask = mgf1(alg, seed, out.len())?;
    out.iter_mut().zip(mask.iter()).for_each(|(o, m)| *o ^= m);
    Ok(())
}
