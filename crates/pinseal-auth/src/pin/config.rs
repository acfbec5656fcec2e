//! Engine configuration.

use pinseal_types::HashAlgId;

use super::block::{MAX_PIN_LEN, MIN_PIN_LEN};

/// Settings for a [`PinEncryptor`](super::PinEncryptor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinEncryptConfig {
    /// Hash used when the caller passes an empty algorithm name.
    pub default_hash: HashAlgId,
    /// Shortest PIN accepted when validation is on.
    pub min_pin_len: usize,
    /// Longest PIN accepted when validation is on.
    pub max_pin_len: usize,
    /// Validate PINs before encrypting them.
    pub validate_pins: bool,
}

impl PinEncryptConfig {
    pub fn builder() -> PinEncryptConfigBuilder {
        PinEncryptConfigBuilder::default()
    }
}

impl Default for PinEncryptConfig {
    fn default() -> Self {
        PinEncryptConfigBuilder::default().build()
    }
}

/// Builder for `PinEncryptConfig`.
#[derive(Debug, Clone)]
pub struct PinEncryptConfigBuilder {
    default_hash: HashAlgId,
    min_pin_len: usize,
    max_pin_len: usize,
    validate_pins: bool,
}

impl Default for PinEncryptConfigBuilder {
    fn default() -> Self {
        Self {
            // Verifiers that send no algorithm name expect SHA-1
            default_hash: HashAlgId::Sha1,
            min_pin_len: MIN_PIN_LEN,
            max_pin_len: MAX_PIN_LEN,
            validate_pins: false,
        }
    }
}

impl PinEncryptConfigBuilder {
    pub fn default_hash(mut self, alg: HashAlgId) -> Self {
        self.default_hash = alg;
        self
    }

    pub fn pin_len(mut self, min: usize, max: usize) -> Self {
        self.min_pin_len = min;
        self.max_pin_len = max;
        self
    }

    pub fn validate_pins(mut self, enabled: bool) -> Self {
        self.validate_pins = enabled;
        self
    }

    pub fn build(self) -> PinEncryptConfig {
        PinEncryptConfig {
            default_hash: self.default_hash,
            min_pin_len: self.min_pin_len,
            max_pin_len: self.max_pin_len,
            validate_pins: self.validate_pins,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PinEncryptConfig::default();
        assert_eq!(config.default_hash, HashAlgId::Sha1);
        assert_eq!((config.min_pin_len, config.max_pin_len), (4, 12));
        assert!(!config.validate_pins);
        assert_eq!(config, PinEncryptConfig::builder().build());
    }

    #[test]
    fn test_builder_overrides() {
        let config = PinEncryptConfig::builder()
            .default_hash(HashAlgId::Sha256)
            .pin_len(6, 8)
            .validate_pins(true)
            .build();
        assert_eq!(config.default_hash, HashAlgId::Sha256);
        assert_eq!((config.min_pin_len, config.max_pin_len), (6, 8));
        assert!(config.validate_pins);
    }
}
