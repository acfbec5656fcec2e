//! Basic arithmetic operations for BigNum.

use crate::bignum::{cmp_limbs, BigNum, DoubleLimb, Limb, LIMB_BITS};
use pinseal_types::CryptoError;
use std::cmp::Ordering;

impl BigNum {
    /// Add two BigNums: self + other.
    pub fn add(&self, other: &BigNum) -> BigNum {
        let (a, b) = (self.limbs(), other.limbs());
        let max_len = a.len().max(b.len());
        let mut limbs = vec![0u64; max_len + 1];
        let mut carry: u64 = 0;

        for (i, limb) in limbs.iter_mut().enumerate().take(max_len) {
            let av = a.get(i).copied().unwrap_or(0);
            let bv = b.get(i).copied().unwrap_or(0);
            let sum = av as DoubleLimb + bv as DoubleLimb + carry as DoubleLimb;
            *limb = sum as Limb;
            carry = (sum >> LIMB_BITS) as u64;
        }
        limbs[max_len] = carry;

        BigNum::from_limbs(limbs)
    }

    /// Subtract: self - other, or `None` if the result would be negative.
    pub fn checked_sub(&self, other: &BigNum) -> Option<BigNum> {
        if self < other {
            return None;
        }
        let mut limbs = self.limbs().to_vec();
        sub_in_place(&mut limbs, other.limbs());
        Some(BigNum::from_limbs(limbs))
    }

    /// Multiply: self * other (schoolbook).
    pub fn mul(&self, other: &BigNum) -> BigNum {
        let (a, b) = (self.limbs(), other.limbs());
        if self.is_zero() || other.is_zero() {
            return BigNum::zero();
        }

        let mut limbs = vec![0u64; a.len() + b.len()];
        for i in 0..a.len() {
            let mut carry: u64 = 0;
            for j in 0..b.len() {
                let prod = a[i] as DoubleLimb * b[j] as DoubleLimb
                    + limbs[i + j] as DoubleLimb
                    + carry as DoubleLimb;
                limbs[i + j] = prod as Limb;
                carry = (prod >> LIMB_BITS) as u64;
            }
            limbs[i + b.len()] = carry;
        }

        BigNum::from_limbs(limbs)
    }

    /// Square: self * self.
    pub fn sqr(&self) -> BigNum {
        self.mul(self)
    }

    /// Division with remainder: returns (quotient, remainder).
    pub fn div_rem(&self, divisor: &BigNum) -> Result<(BigNum, BigNum), CryptoError> {
        if divisor.is_zero() {
            return Err(CryptoError::BnDivisionByZero);
        }
        if self < divisor {
            return Ok((BigNum::zero(), self.clone()));
        }
        let (q, r) = div_rem_unsigned(self, divisor);
        Ok((q, r))
    }

    /// Modular reduction: self mod modulus.
    pub fn mod_reduce(&self, modulus: &BigNum) -> Result<BigNum, CryptoError> {
        let (_, r) = self.div_rem(modulus)?;
        Ok(r)
    }

    /// Modular exponentiation: self^exp mod modulus.
    ///
    /// Left-to-right square-and-multiply. The base is reduced first and every
    /// intermediate product is reduced before the next step, so no value grows
    /// beyond twice the modulus width.
    pub fn mod_exp(&self, exp: &BigNum, modulus: &BigNum) -> Result<BigNum, CryptoError> {
        if modulus.is_zero() {
            return Err(CryptoError::BnDivisionByZero);
        }
        if modulus.is_one() {
            return Ok(BigNum::zero());
        }

        let base = self.mod_reduce(modulus)?;
        let mut result = BigNum::from_u64(1);

        for i in (0..exp.bit_len()).rev() {
            result = result.sqr().mod_reduce(modulus)?;
            if exp.get_bit(i) {
                result = result.mul(&base).mod_reduce(modulus)?;
            }
        }

        Ok(result)
    }
}

/// a -= b in place. Requires a >= b.
fn sub_in_place(a: &mut [Limb], b: &[Limb]) {
    let mut borrow = false;
    for (i, limb) in a.iter_mut().enumerate() {
        let bv = b.get(i).copied().unwrap_or(0);
        if bv == 0 && !borrow {
            continue;
        }
        let (d1, b1) = limb.overflowing_sub(bv);
        let (d2, b2) = d1.overflowing_sub(borrow as Limb);
        *limb = d2;
        borrow = b1 || b2;
    }
    debug_assert!(!borrow);
}

/// Shift-and-subtract long division on unsigned values.
///
/// The remainder lives in a fixed buffer one limb wider than the divisor, so
/// the loop body never allocates.
fn div_rem_unsigned(a: &BigNum, b: &BigNum) -> (BigNum, BigNum) {
    let divisor = b.limbs();
    let bits = a.bit_len();

    let mut quotient = vec![0u64; bits.div_ceil(LIMB_BITS)];
    let mut remainder = vec![0u64; divisor.len() + 1];

    for i in (0..bits).rev() {
        // remainder = (remainder << 1) | bit i of a
        let mut carry = a.get_bit(i) as u64;
        for limb in remainder.iter_mut() {
            let next = *limb >> (LIMB_BITS - 1);
            *limb = (*limb << 1) | carry;
            carry = next;
        }

        if cmp_limbs(&remainder, divisor) != Ordering::Less {
            sub_in_place(&mut remainder, divisor);
            quotient[i / LIMB_BITS] |= 1u64 << (i % LIMB_BITS);
        }
    }

    (BigNum::from_limbs(quotient), BigNum::from_limbs(remainder))
}
