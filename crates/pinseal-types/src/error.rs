/// Errors raised by the PIN protection engine and the primitives under it.
///
/// Every error is fatal to the single call that raised it; nothing is retried
/// internally. No variant carries PIN material in its payload or `Display`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CryptoError {
    // Errors surfaced to the caller of the engine
    #[error("invalid public key")]
    InvalidPublicKey,
    #[error("unsupported hash algorithm: {0}")]
    UnsupportedHashAlgorithm(String),
    #[error("message too long: {len} bytes, at most {max} fit")]
    MessageTooLong { len: usize, max: usize },
    #[error("secure random generation failed")]
    RandomGenerationFailure,

    // Input format errors
    #[error("invalid hexadecimal input")]
    InvalidHex,
    #[error("pin must be {min} to {max} ascii digits")]
    InvalidPin { min: usize, max: usize },
    #[error("invalid argument")]
    InvalidArg,

    // BigNum errors
    #[error("big number: division by zero")]
    BnDivisionByZero,

    // RSA errors
    #[error("rsa: invalid padding")]
    RsaInvalidPadding,
}
