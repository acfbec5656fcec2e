//! Unified hash module.
//!
//! Maps the closed [`HashAlgId`] enumeration onto the concrete digest
//! contexts. This is the only place that dispatches on the algorithm; MGF1
//! and OAEP work through [`HashAlgorithm`] and [`Digest`].

pub use crate::provider::{Digest, HashAlgorithm};
pub use crate::sha1::Sha1;
pub use crate::sha2::{Sha224, Sha256, Sha384, Sha512};

use pinseal_types::{CryptoError, HashAlgId};

impl HashAlgorithm for HashAlgId {
    fn new_digest(&self) -> Box<dyn Digest> {
        match self {
            HashAlgId::Sha1 => Box::new(Sha1::new()),
            HashAlgId::Sha224 => Box::new(Sha224::new()),
            HashAlgId::Sha256 => Box::new(Sha256::new()),
            HashAlgId::Sha384 => Box::new(Sha384::new()),
            HashAlgId::Sha512 => Box::new(Sha512::new()),
        }
    }
}

/// One-shot digest of `data` under `alg`.
pub fn digest(alg: HashAlgId, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
    alg.hash(data)
}

/// Resolve `name` (see [`HashAlgId::from_name`]) and hash `data` with it.
pub fn digest_by_name(name: &str, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
    digest(HashAlgId::from_name(name)?, data)
}
