//! PIN block and PIN message layout.
//!
//! The layout is fixed by the remote verifier:
//!
//! ```text
//! block   = 0xC1 || len(pin) || pin || 0xFF...   (padded to a multiple of 8)
//! message = 0x01 || block || serverRandom
//! ```

use pinseal_types::CryptoError;
use zeroize::Zeroizing;

/// PIN block format tag.
const PIN_BLOCK_TAG: u8 = 0xC1;
/// Filler for the unused tail of a PIN block.
const PIN_BLOCK_FILL: u8 = 0xFF;
/// PIN blocks are a whole number of 8-byte units.
const PIN_BLOCK_UNIT: usize = 8;
/// Format version prefixed to every PIN message.
const PIN_MESSAGE_VERSION: u8 = 0x01;

/// Shortest PIN accepted by [`validate_pin`].
pub const MIN_PIN_LEN: usize = 4;
/// Longest PIN accepted by [`validate_pin`].
pub const MAX_PIN_LEN: usize = 12;

/// Build the PIN block for `pin`.
///
/// The PIN is taken as raw bytes; its format is the caller's concern (see
/// [`validate_pin`]). Fails only if the length does not fit the length octet.
pub fn pin_block(pin: &str) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
    let pin = pin.as_bytes();
    let len = u8::try_from(pin.len()).map_err(|_| CryptoError::InvalidArg)?;

    let block_len = (2 + pin.len()).div_ceil(PIN_BLOCK_UNIT) * PIN_BLOCK_UNIT;
    let mut block = Zeroizing::new(Vec::with_capacity(block_len));
    block.push(PIN_BLOCK_TAG);
    block.push(len);
    block.extend_from_slice(pin);
    block.resize(block_len, PIN_BLOCK_FILL);
    Ok(block)
}

/// Build the message sealed for the verifier: version, PIN block, then the
/// raw bytes of the server's hex-encoded random challenge.
pub fn pin_message(pin: &str, server_random_hex: &str) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
    let server_random = hex::decode(server_random_hex).map_err(|_| CryptoError::InvalidHex)?;
    let block = pin_block(pin)?;

    let mut msg = Zeroizing::new(Vec::with_capacity(1 + block.len() + server_random.len()));
    msg.push(PIN_MESSAGE_VERSION);
    msg.extend_from_slice(&block);
    msg.extend_from_slice(&server_random);
    Ok(msg)
}

/// Check that `pin` is 4 to 12 ASCII digits.
pub fn validate_pin(pin: &str) -> Result<(), CryptoError> {
    validate_pin_len(pin, MIN_PIN_LEN, MAX_PIN_LEN)
}

/// Check that `pin` is `min..=max` ASCII digits.
pub fn validate_pin_len(pin: &str, min: usize, max: usize) -> Result<(), CryptoError> {
    let ok = (min..=max).contains(&pin.len()) && pin.bytes().all(|b| b.is_ascii_digit());
    if ok {
        Ok(())
    } else {
        Err(CryptoError::InvalidPin { min, max })
    }
}
