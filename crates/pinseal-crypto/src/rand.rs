//! Secure random source.
//!
//! OAEP seeds and transport labels are drawn through [`SecureRandom`] so the
//! production CSPRNG can be swapped for a deterministic source in
//! known-answer tests. Implementations take `&self` and must be safe to share
//! between threads; concurrent encryptions share one source without any
//! locking on the caller's side.

use pinseal_types::CryptoError;

/// A cryptographically secure random byte source.
pub trait SecureRandom: Send + Sync {
    /// Fill `dest` entirely with random bytes.
    fn fill_random(&self, dest: &mut [u8]) -> Result<(), CryptoError>;
}

impl<R: SecureRandom + ?Sized> SecureRandom for &R {
    fn fill_random(&self, dest: &mut [u8]) -> Result<(), CryptoError> {
        (**self).fill_random(dest)
    }
}

impl<R: SecureRandom + ?Sized> SecureRandom for Box<R> {
    fn fill_random(&self, dest: &mut [u8]) -> Result<(), CryptoError> {
        (**self).fill_random(dest)
    }
}

/// The operating system CSPRNG, via `getrandom`.
///
/// Stateless; every call goes to the OS, which handles its own
/// synchronization.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        SystemRandom
    }
}

impl SecureRandom for SystemRandom {
    fn fill_random(&self, dest: &mut [u8]) -> Result<(), CryptoError> {
        getrandom::getrandom(dest).map_err(|_| CryptoError::RandomGenerationFailure)
    }
}
