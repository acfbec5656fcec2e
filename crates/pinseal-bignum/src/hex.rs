//! Hexadecimal conversion for BigNum.

use crate::bignum::{BigNum, LIMB_BITS};
use pinseal_types::CryptoError;

const NIBBLES_PER_LIMB: usize = LIMB_BITS / 4;

impl BigNum {
    /// Parse an unsigned hexadecimal string (either case, no `0x` prefix).
    ///
    /// Empty and all-zero strings yield zero. Odd-length strings are read as
    /// a number, i.e. with an implicit leading zero nibble.
    pub fn from_hex(s: &str) -> Result<Self, CryptoError> {
        let digits = s.as_bytes();
        let mut limbs = vec![0u64; digits.len().div_ceil(NIBBLES_PER_LIMB)];

        for (i, &c) in digits.iter().rev().enumerate() {
            let nibble = (c as char).to_digit(16).ok_or(CryptoError::InvalidHex)? as u64;
            limbs[i / NIBBLES_PER_LIMB] |= nibble << ((i % NIBBLES_PER_LIMB) * 4);
        }

        Ok(Self::from_limbs(limbs))
    }

    /// Lowercase hexadecimal without leading zeros; `"0"` for zero.
    pub fn to_hex(&self) -> String {
        let limbs = self.limbs();
        let top = limbs.len() - 1;
        let mut out = format!("{:x}", limbs[top]);
        for limb in limbs[..top].iter().rev() {
            out.push_str(&format!("{limb:016x}"));
        }
        out
    }
}
