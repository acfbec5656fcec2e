//! RSA public-key encryption with OAEP padding.
//!
//! Keys arrive as hexadecimal modulus/exponent pairs and ciphertexts leave as
//! hexadecimal strings of the same width as the modulus, which is the form
//! PIN verifiers exchange. The block size `k` of a hex-supplied key is half
//! the length of its modulus string, leading zero octets included.

mod mgf1;
mod oaep;

pub use mgf1::{mgf1, mgf1_xor};
pub use oaep::{max_message_len, oaep_decode, oaep_encode};

use pinseal_bignum::BigNum;
use pinseal_types::{CryptoError, HashAlgId};
use tracing::trace;

use crate::rand::SecureRandom;

/// An RSA public key.
#[derive(Clone)]
pub struct RsaPublicKey {
    /// The modulus n.
    n: BigNum,
    /// The public exponent e.
    e: BigNum,
    /// Block length in bytes (k).
    k: usize,
    /// Width of transported ciphertexts in hex characters.
    hex_len: usize,
}

impl std::fmt::Debug for RsaPublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RsaPublicKey")
            .field("bits", &self.bits())
            .field("k", &self.k)
            .finish()
    }
}

impl RsaPublicKey {
    /// Create an RSA public key from modulus and exponent (big-endian bytes).
    pub fn new(n: &[u8], e: &[u8]) -> Result<Self, CryptoError> {
        let n_bn = BigNum::from_bytes_be(n);
        let e_bn = BigNum::from_bytes_be(e);
        let k = n_bn.bit_len().div_ceil(8);
        Self::from_parts(n_bn, e_bn, k, 2 * k)
    }

    /// Create an RSA public key from hexadecimal modulus and exponent.
    pub fn from_hex(n_hex: &str, e_hex: &str) -> Result<Self, CryptoError> {
        if n_hex.is_empty() || e_hex.is_empty() {
            return Err(CryptoError::InvalidPublicKey);
        }
        let n = BigNum::from_hex(n_hex).map_err(|_| CryptoError::InvalidPublicKey)?;
        let e = BigNum::from_hex(e_hex).map_err(|_| CryptoError::InvalidPublicKey)?;
        Self::from_parts(n, e, n_hex.len() / 2, n_hex.len())
    }

    /// Parse the transport form `"<modulusHex>,<exponentHex>"`.
    pub fn parse(key: &str) -> Result<Self, CryptoError> {
        let (n_hex, e_hex) = key.split_once(',').ok_or(CryptoError::InvalidPublicKey)?;
        Self::from_hex(n_hex.trim(), e_hex.trim())
    }

    fn from_parts(n: BigNum, e: BigNum, k: usize, hex_len: usize) -> Result<Self, CryptoError> {
        // A zero or unit modulus would make every ciphertext zero
        if n.is_zero() || n.is_one() || e.is_zero() {
            return Err(CryptoError::InvalidPublicKey);
        }
        Ok(RsaPublicKey { n, e, k, hex_len })
    }

    /// Return the modulus size in bits.
    pub fn bits(&self) -> usize {
        self.n.bit_len()
    }

    /// Return the block length k in bytes.
    pub fn modulus_len(&self) -> usize {
        self.k
    }

    /// Return the width of a transported ciphertext in hex characters.
    pub fn modulus_hex_len(&self) -> usize {
        self.hex_len
    }

    /// Largest OAEP message this key can carry under `alg`.
    pub fn max_message_len(&self, alg: HashAlgId) -> Option<usize> {
        max_message_len(alg, self.k)
    }

    /// Return the modulus as lowercase hex.
    pub fn n_hex(&self) -> String {
        self.n.to_hex()
    }

    /// Return the public exponent as lowercase hex.
    pub fn e_hex(&self) -> String {
        self.e.to_hex()
    }

    /// Raw RSA public key operation (RSAEP): c = block^e mod n, as hex.
    ///
    /// The result has no leading zeros beyond a single nibble that keeps it
    /// byte aligned.
    pub fn encrypt_block(&self, block: &[u8]) -> Result<String, CryptoError> {
        let mut hex = self.raw_encrypt(block)?.to_hex();
        if hex.len() % 2 == 1 {
            hex.insert(0, '0');
        }
        Ok(hex)
    }

    /// OAEP-encode `msg` and encrypt it, returning big-endian bytes of length k.
    pub fn encrypt_oaep<R: SecureRandom + ?Sized>(
        &self,
        alg: HashAlgId,
        label: &[u8],
        msg: &[u8],
        rng: &R,
    ) -> Result<Vec<u8>, CryptoError> {
        let em = oaep_encode(alg, self.k, label, msg, rng)?;
        self.raw_encrypt(&em)?.to_bytes_be_padded(self.k)
    }

    /// OAEP-encode `msg` and encrypt it, returning hex left-padded with zeros
    /// to exactly the width of the modulus hex string, odd widths included.
    pub fn encrypt_oaep_hex<R: SecureRandom + ?Sized>(
        &self,
        alg: HashAlgId,
        label: &[u8],
        msg: &[u8],
        rng: &R,
    ) -> Result<String, CryptoError> {
        trace!(bits = self.bits(), k = self.k, hash = %alg, msg_len = msg.len(), "rsa-oaep encrypt");
        let em = oaep_encode(alg, self.k, label, msg, rng)?;
        // c < n, so its minimal hex never exceeds the modulus string
        let hex = self.raw_encrypt(&em)?.to_hex();
        Ok(format!("{hex:0>width$}", width = self.hex_len))
    }

    /// c = block^e mod n
    fn raw_encrypt(&self, block: &[u8]) -> Result<BigNum, CryptoError> {
        BigNum::from_bytes_be(block).mod_exp(&self.e, &self.n)
    }
}

/// An RSA private key with CRT parameters.
///
/// Only the decryption direction is provided; it exists so encrypted PIN
/// blocks can be checked end to end against a known key pair.
#[derive(Clone)]
pub struct RsaPrivateKey {
    n: BigNum,
    e: BigNum,
    p: BigNum,
    q: BigNum,
    /// d mod (p-1)
    dp: BigNum,
    /// d mod (q-1)
    dq: BigNum,
    /// q^(-1) mod p
    qinv: BigNum,
    k: usize,
}

impl std::fmt::Debug for RsaPrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RsaPrivateKey")
            .field("bits", &self.n.bit_len())
            .finish()
    }
}

impl RsaPrivateKey {
    /// Create an RSA private key from its components (big-endian bytes).
    ///
    /// `p` and `q` must be prime; q^(-1) mod p is computed as q^(p-2) mod p.
    pub fn new(n: &[u8], d: &[u8], e: &[u8], p: &[u8], q: &[u8]) -> Result<Self, CryptoError> {
        let one = BigNum::from_u64(1);
        let two = BigNum::from_u64(2);
        let n_bn = BigNum::from_bytes_be(n);
        let d_bn = BigNum::from_bytes_be(d);
        let e_bn = BigNum::from_bytes_be(e);
        let p_bn = BigNum::from_bytes_be(p);
        let q_bn = BigNum::from_bytes_be(q);

        if n_bn.is_zero() || d_bn.is_zero() || e_bn.is_zero() {
            return Err(CryptoError::InvalidArg);
        }
        if p_bn.mul(&q_bn) != n_bn {
            return Err(CryptoError::InvalidArg);
        }

        let p_minus_1 = p_bn.checked_sub(&one).ok_or(CryptoError::InvalidArg)?;
        let q_minus_1 = q_bn.checked_sub(&one).ok_or(CryptoError::InvalidArg)?;
        let p_minus_2 = p_bn.checked_sub(&two).ok_or(CryptoError::InvalidArg)?;
        let dp = d_bn.mod_reduce(&p_minus_1)?;
        let dq = d_bn.mod_reduce(&q_minus_1)?;
        let qinv = q_bn.mod_exp(&p_minus_2, &p_bn)?;

        let k = n_bn.bit_len().div_ceil(8);
        Ok(RsaPrivateKey {
            n: n_bn,
            e: e_bn,
            p: p_bn,
            q: q_bn,
            dp,
            dq,
            qinv,
            k,
        })
    }

    /// Extract the corresponding public key.
    pub fn public_key(&self) -> RsaPublicKey {
        RsaPublicKey {
            n: self.n.clone(),
            e: self.e.clone(),
            k: self.k,
            hex_len: 2 * self.k,
        }
    }

    /// Decrypt an OAEP ciphertext (big-endian bytes, at most k long).
    pub fn decrypt_oaep(
        &self,
        alg: HashAlgId,
        label: &[u8],
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        let em = self.raw_decrypt(ciphertext)?;
        oaep_decode(alg, label, &em)
    }

    /// Raw RSA private key operation (RSADP) using CRT.
    fn raw_decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let c = BigNum::from_bytes_be(data);
        if c >= self.n {
            return Err(CryptoError::InvalidArg);
        }

        let m1 = c.mod_exp(&self.dp, &self.p)?;
        let m2 = c.mod_exp(&self.dq, &self.q)?;

        // h = qinv * (m1 - m2) mod p, kept non-negative by adding p
        let diff = m1
            .add(&self.p)
            .checked_sub(&m2.mod_reduce(&self.p)?)
            .ok_or(CryptoError::InvalidArg)?;
        let h = diff.mul(&self.qinv).mod_reduce(&self.p)?;

        let m = m2.add(&h.mul(&self.q));
        m.to_bytes_be_padded(self.k)
    }
}
