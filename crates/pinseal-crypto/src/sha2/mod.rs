//! SHA-2 family of hash algorithms.
//!
//! Provides SHA-224, SHA-256, SHA-384, and SHA-512 as defined in FIPS 180-4.
//! Each context wraps the corresponding RustCrypto core and exposes the same
//! `new` / `update` / `finish` / `reset` / `digest` surface as [`crate::sha1::Sha1`].

use ::sha2::Digest as _;
use pinseal_types::CryptoError;

use crate::provider::Digest;

macro_rules! sha2_context {
    (
        $(#[$doc:meta])*
        $name:ident, $core:ty, $out_const:ident = $out:expr, block = $block:expr
    ) => {
        /// Output size in bytes.
        pub const $out_const: usize = $out;

        $(#[$doc])*
        #[derive(Clone, Default)]
        pub struct $name {
            inner: $core,
        }

        impl $name {
            /// Create a new hash context.
            pub fn new() -> Self {
                Self::default()
            }

            /// Feed data into the hash computation.
            pub fn update(&mut self, data: &[u8]) -> Result<(), CryptoError> {
                self.inner.update(data);
                Ok(())
            }

            /// Finalize the hash and return the digest. The context is reset.
            pub fn finish(&mut self) -> Result<[u8; $out_const], CryptoError> {
                let mut out = [0u8; $out_const];
                out.copy_from_slice(&self.inner.finalize_reset());
                Ok(out)
            }

            /// Reset the hash context for a new computation.
            pub fn reset(&mut self) {
                ::sha2::Digest::reset(&mut self.inner);
            }

            /// One-shot digest of `data`.
            pub fn digest(data: &[u8]) -> Result<[u8; $out_const], CryptoError> {
                let mut ctx = Self::new();
                ctx.update(data)?;
                ctx.finish()
            }
        }

        impl Digest for $name {
            fn output_size(&self) -> usize {
                $out_const
            }

            fn block_size(&self) -> usize {
                $block
            }

            fn update(&mut self, data: &[u8]) -> Result<(), CryptoError> {
                $name::update(self, data)
            }

            fn finish(&mut self, out: &mut [u8]) -> Result<(), CryptoError> {
                if out.len() < $out_const {
                    return Err(CryptoError::InvalidArg);
                }
                out[..$out_const].copy_from_slice(&$name::finish(self)?);
                Ok(())
            }

            fn reset(&mut self) {
                $name::reset(self)
            }
        }
    };
}

sha2_context!(
    /// SHA-224 hash context (truncated SHA-256).
    Sha224, ::sha2::Sha224, SHA224_OUTPUT_SIZE = 28, block = 64
);

sha2_context!(
    /// SHA-256 hash context.
    Sha256, ::sha2::Sha256, SHA256_OUTPUT_SIZE = 32, block = 64
);

sha2_context!(
    /// SHA-384 hash context (truncated SHA-512).
    Sha384, ::sha2::Sha384, SHA384_OUTPUT_SIZE = 48, block = 128
);

sha2_context!(
    /// SHA-512 hash context.
    Sha512, ::sha2::Sha512, SHA512_OUTPUT_SIZE = 64, block = 128
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha2_abc_vectors() {
        assert_eq!(
            hex::encode(Sha224::digest(b"abc").unwrap()),
            "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"
        );
        assert_eq!(
            hex::encode(Sha256::digest(b"abc").unwrap()),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            hex::encode(Sha384::digest(b"abc").unwrap()),
            "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed\
             8086072ba1e7cc2358baeca134c825a7"
        );
        assert_eq!(
            hex::encode(Sha512::digest(b"abc").unwrap()),
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
    }

    #[test]
    fn test_sha256_empty() {
        assert_eq!(
            hex::encode(Sha256::digest(b"").unwrap()),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_trait_finish_rejects_short_buffer() {
        let mut ctx = Sha512::new();
        let mut out = [0u8; 32];
        assert_eq!(
            Digest::finish(&mut ctx, &mut out),
            Err(CryptoError::InvalidArg)
        );
        assert_eq!(Digest::block_size(&ctx), 128);
    }
}
