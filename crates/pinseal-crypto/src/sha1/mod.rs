//! SHA-1 message digest algorithm.
//!
//! SHA-1 produces a 160-bit (20-byte) hash value. It is defined in FIPS 180-4.
//!
//! **Security warning**: SHA-1 is considered cryptographically weak due to
//! demonstrated collision attacks. It is kept because remote PIN verifiers
//! still default to it for OAEP; do not use it for anything else.

use ::sha1::Digest as _;
use pinseal_types::CryptoError;

use crate::provider::Digest;

/// SHA-1 output size in bytes.
pub const SHA1_OUTPUT_SIZE: usize = 20;

/// SHA-1 block size in bytes.
pub const SHA1_BLOCK_SIZE: usize = 64;

/// SHA-1 hash context.
#[derive(Clone, Default)]
pub struct Sha1 {
    inner: ::sha1::Sha1,
}

impl Sha1 {
    /// Create a new SHA-1 hash context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed data into the hash computation.
    pub fn update(&mut self, data: &[u8]) -> Result<(), CryptoError> {
        self.inner.update(data);
        Ok(())
    }

    /// Finalize the hash and return the 20-byte digest.
    pub fn finish(&mut self) -> Result<[u8; SHA1_OUTPUT_SIZE], CryptoError> {
        let mut out = [0u8; SHA1_OUTPUT_SIZE];
        out.copy_from_slice(&self.inner.finalize_reset());
        Ok(out)
    }

    /// Reset the hash context for a new computation.
    pub fn reset(&mut self) {
        ::sha1::Digest::reset(&mut self.inner);
    }

    /// One-shot: compute the SHA-1 digest of `data`.
    pub fn digest(data: &[u8]) -> Result<[u8; SHA1_OUTPUT_SIZE], CryptoError> {
        let mut ctx = Self::new();
        ctx.update(data)?;
        ctx.finish()
    }
}

impl Digest for Sha1 {
    fn output_size(&self) -> usize {
        SHA1_OUTPUT_SIZE
    }

    fn block_size(&self) -> usize {
        SHA1_BLOCK_SIZE
    }

    fn update(&mut self, data: &[u8]) -> Result<(), CryptoError> {
        Sha1::update(self, data)
    }

    fn finish(&mut self, out: &mut [u8]) -> Result<(), CryptoError> {
        if out.len() < SHA1_OUTPUT_SIZE {
            return Err(CryptoError::InvalidArg);
        }
        out[..SHA1_OUTPUT_SIZE].copy_from_slice(&Sha1::finish(self)?);
        Ok(())
    }

    fn reset(&mut self) {
        Sha1::reset(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha1_known_answers() {
        assert_eq!(
            hex::encode(Sha1::digest(b"").unwrap()),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709"
        );
        assert_eq!(
            hex::encode(Sha1::digest(b"abc").unwrap()),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
    }

    #[test]
    fn test_sha1_incremental_and_reset() {
        let mut ctx = Sha1::new();
        ctx.update(b"a").unwrap();
        ctx.update(b"bc").unwrap();
        let first = ctx.finish().unwrap();
        assert_eq!(first, Sha1::digest(b"abc").unwrap());

        // finish leaves a fresh context behind
        ctx.update(b"abc").unwrap();
        assert_eq!(ctx.finish().unwrap(), first);

        ctx.update(b"garbage").unwrap();
        ctx.reset();
        assert_eq!(ctx.finish().unwrap(), Sha1::digest(b"").unwrap());
    }
}
