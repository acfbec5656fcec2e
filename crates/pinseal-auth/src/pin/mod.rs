//! PIN encryption for a remote authentication manager.
//!
//! A PIN is packed into a PIN block together with the server's random
//! challenge, sealed with RSA-OAEP under the verifier's public key and a
//! fresh random label, and returned as a single transport string:
//!
//! ```text
//! sessionId,labelHex:ciphertextHex[,labelHex:ciphertextHex]
//! ```
//!
//! The second segment is only present for a PIN change, where it carries the
//! new PIN.
//!
//! # Example
//!
//! ```no_run
//! use pinseal_auth::pin::encrypt_pin_for_am;
//!
//! let key = "c5...c7,010001";
//! let result = encrypt_pin_for_am("session-1", key, "00112233", "1234", "SHA-256")?;
//! # Ok::<(), pinseal_types::CryptoError>(())
//! ```

mod block;
mod config;
mod transport;

pub use block::{pin_block, pin_message, validate_pin, validate_pin_len, MAX_PIN_LEN, MIN_PIN_LEN};
pub use config::{PinEncryptConfig, PinEncryptConfigBuilder};
pub use transport::{assemble, encrypt_segment, LABEL_LEN};

use pinseal_crypto::rand::{SecureRandom, SystemRandom};
use pinseal_crypto::rsa::RsaPublicKey;
use pinseal_types::{CryptoError, HashAlgId};
use tracing::debug;
use zeroize::Zeroizing;

/// Encrypt `pin` for the authentication manager using the system CSPRNG.
///
/// `public_key` is `"<modulusHex>,<exponentHex>"`. An empty `hash_alg_name`
/// selects SHA-1. The PIN itself is not validated here.
pub fn encrypt_pin_for_am(
    session_id: &str,
    public_key: &str,
    server_random_hex: &str,
    pin: &str,
    hash_alg_name: &str,
) -> Result<String, CryptoError> {
    PinEncryptor::new(SystemRandom::new()).encrypt(
        session_id,
        public_key,
        server_random_hex,
        pin,
        hash_alg_name,
    )
}

/// Encrypt a PIN change: the current PIN in the first segment, the new PIN in
/// the second. Each segment has its own label and OAEP seed.
pub fn encrypt_pin_change_for_am(
    session_id: &str,
    public_key: &str,
    server_random_hex: &str,
    old_pin: &str,
    new_pin: &str,
    hash_alg_name: &str,
) -> Result<String, CryptoError> {
    PinEncryptor::new(SystemRandom::new()).encrypt_change(
        session_id,
        public_key,
        server_random_hex,
        old_pin,
        new_pin,
        hash_alg_name,
    )
}

/// PIN encryption engine over an injected random source.
///
/// Holds no per-call state; one encryptor may serve concurrent requests if
/// its random source is shared.
#[derive(Debug, Clone)]
pub struct PinEncryptor<R> {
    rng: R,
    config: PinEncryptConfig,
}

impl<R: SecureRandom> PinEncryptor<R> {
    pub fn new(rng: R) -> Self {
        Self::with_config(rng, PinEncryptConfig::default())
    }

    pub fn with_config(rng: R, config: PinEncryptConfig) -> Self {
        Self { rng, config }
    }

    /// Turn on PIN validation against the configured length range.
    pub fn checked(mut self) -> Self {
        self.config.validate_pins = true;
        self
    }

    pub fn config(&self) -> &PinEncryptConfig {
        &self.config
    }

    /// Encrypt a single PIN. See [`encrypt_pin_for_am`].
    pub fn encrypt(
        &self,
        session_id: &str,
        public_key: &str,
        server_random_hex: &str,
        pin: &str,
        hash_alg_name: &str,
    ) -> Result<String, CryptoError> {
        let (alg, key) = self.prepare(public_key, hash_alg_name)?;
        let msg = self.message(pin, server_random_hex)?;

        debug!(session_id, bits = key.bits(), hash = %alg, msg_len = msg.len(), "encrypting pin");
        let first = encrypt_segment(&key, alg, &msg, &self.rng)?;
        Ok(assemble(session_id, &first, None))
    }

    /// Encrypt a PIN change. See [`encrypt_pin_change_for_am`].
    pub fn encrypt_change(
        &self,
        session_id: &str,
        public_key: &str,
        server_random_hex: &str,
        old_pin: &str,
        new_pin: &str,
        hash_alg_name: &str,
    ) -> Result<String, CryptoError> {
        let (alg, key) = self.prepare(public_key, hash_alg_name)?;
        let old_msg = self.message(old_pin, server_random_hex)?;
        let new_msg = self.message(new_pin, server_random_hex)?;

        debug!(session_id, bits = key.bits(), hash = %alg, msg_len = old_msg.len(), "encrypting pin change");
        let first = encrypt_segment(&key, alg, &old_msg, &self.rng)?;
        let second = encrypt_segment(&key, alg, &new_msg, &self.rng)?;
        Ok(assemble(session_id, &first, Some(&second)))
    }

    /// Resolve the hash, then the key. Neither step touches the random source.
    fn prepare(&self, public_key: &str, hash_alg_name: &str) -> Result<(HashAlgId, RsaPublicKey), CryptoError> {
        let alg = if hash_alg_name.trim().is_empty() {
            self.config.default_hash
        } else {
            HashAlgId::from_name(hash_alg_name)?
        };
        let key = RsaPublicKey::parse(public_key)?;
        Ok((alg, key))
    }

    fn message(&self, pin: &str, server_random_hex: &str) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
        if self.config.validate_pins {
            validate_pin_len(pin, self.config.min_pin_len, self.config.max_pin_len)?;
        }
        pin_message(pin, server_random_hex)
    }
}
