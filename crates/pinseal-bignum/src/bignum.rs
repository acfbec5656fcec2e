//! Big number type and basic operations.

use pinseal_types::CryptoError;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Limb type for big number representation.
pub type Limb = u64;
/// Double-width type for multiplication intermediates.
pub type DoubleLimb = u128;

/// Bits per limb.
pub const LIMB_BITS: usize = 64;

/// A heap-allocated unsigned big number that is zeroized on drop.
///
/// Internally represented as a little-endian array of `u64` limbs with no
/// leading zero limbs (zero is a single zero limb).
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct BigNum {
    /// Little-endian limbs (limbs[0] is the least significant).
    limbs: Vec<Limb>,
}

impl BigNum {
    /// Create a zero-valued BigNum.
    pub fn zero() -> Self {
        Self { limbs: vec![0] }
    }

    /// Create a BigNum from a `u64` value.
    pub fn from_u64(value: u64) -> Self {
        Self { limbs: vec![value] }
    }

    /// Create a BigNum from big-endian bytes. Empty input yields zero.
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            return Self::zero();
        }

        let num_limbs = bytes.len().div_ceil(8);
        let mut limbs = vec![0u64; num_limbs];

        for (i, &byte) in bytes.iter().rev().enumerate() {
            let limb_idx = i / 8;
            let bit_pos = (i % 8) * 8;
            limbs[limb_idx] |= (byte as u64) << bit_pos;
        }

        Self::from_limbs(limbs)
    }

    /// Export to minimal big-endian bytes (`[0]` for zero).
    pub fn to_bytes_be(&self) -> Vec<u8> {
        let bits = self.bit_len();
        if bits == 0 {
            return vec![0];
        }

        let num_bytes = bits.div_ceil(8);
        let mut bytes = vec![0u8; num_bytes];

        for i in 0..num_bytes {
            let limb_idx = i / 8;
            let bit_pos = (i % 8) * 8;
            bytes[num_bytes - 1 - i] = (self.limbs[limb_idx] >> bit_pos) as u8;
        }

        bytes
    }

    /// Export to big-endian bytes, left-padded with zeros to exactly `len` bytes.
    pub fn to_bytes_be_padded(&self, len: usize) -> Result<Vec<u8>, CryptoError> {
        let bytes = self.to_bytes_be();
        if self.is_zero() {
            return Ok(vec![0u8; len]);
        }
        if bytes.len() > len {
            return Err(CryptoError::InvalidArg);
        }
        let mut out = vec![0u8; len];
        out[len - bytes.len()..].copy_from_slice(&bytes);
        Ok(out)
    }

    /// Create a BigNum from a vector of little-endian limbs.
    pub fn from_limbs(limbs: Vec<Limb>) -> Self {
        let mut bn = Self {
            limbs: if limbs.is_empty() { vec![0] } else { limbs },
        };
        bn.normalize();
        bn
    }

    /// Return the number of significant bits.
    pub fn bit_len(&self) -> usize {
        for i in (0..self.limbs.len()).rev() {
            if self.limbs[i] != 0 {
                return i * LIMB_BITS + (LIMB_BITS - self.limbs[i].leading_zeros() as usize);
            }
        }
        0
    }

    /// Return the limbs as a slice.
    pub fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    /// Return true if this number is zero.
    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|&l| l == 0)
    }

    /// Return true if this number equals 1.
    pub fn is_one(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 1
    }

    /// Return true if this number is odd.
    pub fn is_odd(&self) -> bool {
        self.limbs[0] & 1 == 1
    }

    /// Get bit at position `idx` (0-indexed from LSB).
    pub fn get_bit(&self, idx: usize) -> bool {
        let limb_idx = idx / LIMB_BITS;
        let bit_idx = idx % LIMB_BITS;
        limb_idx < self.limbs.len() && (self.limbs[limb_idx] >> bit_idx) & 1 == 1
    }

    /// Remove leading zero limbs.
    pub(crate) fn normalize(&mut self) {
        while self.limbs.len() > 1 && self.limbs[self.limbs.len() - 1] == 0 {
            self.limbs.pop();
        }
        if self.limbs.is_empty() {
            self.limbs.push(0);
        }
    }
}

impl std::fmt::Debug for BigNum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BigNum(0x{})", self.to_hex())
    }
}

impl PartialEq for BigNum {
    fn eq(&self, other: &Self) -> bool {
        self.limbs == other.limbs
    }
}

impl Eq for BigNum {}

impl PartialOrd for BigNum {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigNum {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        cmp_limbs(&self.limbs, &other.limbs)
    }
}

/// Compare two little-endian limb slices as unsigned integers.
/// The slices may carry leading zero limbs.
pub(crate) fn cmp_limbs(a: &[Limb], b: &[Limb]) -> std::cmp::Ordering {
    let max_len = a.len().max(b.len());
    for i in (0..max_len).rev() {
        let av = a.get(i).copied().unwrap_or(0);
        let bv = b.get(i).copied().unwrap_or(0);
        if av != bv {
            return av.cmp(&bv);
        }
    }
    std::cmp::Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        let z = BigNum::zero();
        assert!(z.is_zero());
        assert_eq!(z.bit_len(), 0);
        assert_eq!(z.to_bytes_be(), vec![0]);
        assert_eq!(BigNum::from_bytes_be(&[]), z);
        assert_eq!(BigNum::from_bytes_be(&[0, 0, 0]), z);
    }

    #[test]
    fn test_from_u64() {
        let n = BigNum::from_u64(0xFF);
        assert_eq!(n.bit_len(), 8);
        assert!(!n.is_zero());
        assert!(n.is_odd());
        assert!(n.get_bit(7));
        assert!(!n.get_bit(8));
    }

    #[test]
    fn test_bytes_roundtrip_strips_leading_zeros() {
        let bytes = vec![0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09];
        let n = BigNum::from_bytes_be(&bytes);
        assert_eq!(n.to_bytes_be(), bytes[1..].to_vec());
        assert_eq!(n.limbs().len(), 2);
    }

    #[test]
    fn test_to_bytes_be_padded() {
        let n = BigNum::from_u64(0x0102);
        assert_eq!(n.to_bytes_be_padded(4).unwrap(), vec![0, 0, 1, 2]);
        assert_eq!(BigNum::zero().to_bytes_be_padded(3).unwrap(), vec![0, 0, 0]);
        assert_eq!(n.to_bytes_be_padded(1), Err(CryptoError::InvalidArg));
    }

    #[test]
    fn test_ordering_across_limb_counts() {
        let small = BigNum::from_u64(u64::MAX);
        let big = BigNum::from_bytes_be(&[1, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert!(small < big);
        assert_eq!(cmp_limbs(&[5, 0, 0], &[5]), std::cmp::Ordering::Equal);
    }
}
