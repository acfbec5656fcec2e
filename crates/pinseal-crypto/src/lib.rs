#![doc = "Hash provider, MGF1, RSA-OAEP and secure randomness for pinseal."]
#![forbid(unsafe_code)]

// Core traits
pub mod provider;

// Hash algorithms
pub mod hash;
pub mod sha1;
pub mod sha2;

// Randomness
pub mod rand;

// Public-key encryption
#[cfg(feature = "rsa")]
pub mod rsa;
