#![forbid(unsafe_code)]
#![doc = "Unsigned big number arithmetic for pinseal RSA operations."]

mod bignum;
mod hex;
mod ops;

pub use bignum::{BigNum, Limb, LIMB_BITS};
