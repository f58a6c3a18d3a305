//! Base58 decoding module for neo58.
//! Bitcoin alphabet via a compile-time reverse table; long division of the base-58 digit
//! string by 256, mirroring the encoder.

use crate::divmod::divmod;
use crate::ALPHABET;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Character outside the Base58 alphabet at byte offset `position`.
    #[error("invalid base58 character {ch:?} at position {position}")]
    InvalidChar { position: usize, ch: char },
    /// Decoded data cannot hold a 4-byte checksum.
    #[error("base58check data too short for a checksum: {0} bytes")]
    TooShort(usize),
    /// Double-SHA256 checksum disagrees with the trailing 4 bytes.
    #[error("base58check checksum mismatch: expected {expected:02x?}, found {actual:02x?}")]
    ChecksumMismatch { expected: [u8; 4], actual: [u8; 4] },
}

const INVALID: u8 = 0xFF;

#[allow(clippy::cast_possible_truncation)]
const DIGIT_TO_VAL: [u8; 128] = {
    let mut table = [INVALID; 128];
    let mut i = 0usize;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Digit value of an alphabet character, `None` for anything else (including non-ASCII).
#[must_use]
#[inline]
pub fn digit_value(ch: char) -> Option<u8> {
    let idx = usize::try_from(u32::from(ch)).ok()?;
    match DIGIT_TO_VAL.get(idx) {
        Some(&INVALID) | None => None,
        Some(&val) => Some(val),
    }
}

/// Decodes a Base58 string (Bitcoin alphabet) to bytes (no checksum).
///
/// # Errors
/// - `InvalidChar`: non-alphabet character; `position` is its byte offset in `input`.
pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    if input.is_empty() {
        return Ok(vec![]);
    }
    let mut input58 = Vec::with_capacity(input.len());
    for (position, ch) in input.char_indices() {
        let val = digit_value(ch).ok_or(DecodeError::InvalidChar { position, ch })?;
        input58.push(val);
    }
    let zeros = input58.iter().take_while(|&&d| d == 0).count();
    // Never more output bytes than input digits.
    let mut decoded = vec![0u8; input58.len()];
    let mut output_start = decoded.len();
    let mut input_start = zeros;
    while input_start < input58.len() {
        output_start -= 1;
        decoded[output_start] = divmod(&mut input58, input_start, 58, 256);
        if input58[input_start] == 0 {
            input_start += 1;
        }
    }
    // Strip zeros from the conversion, keep one per leading '1'.
    while output_start < decoded.len() && decoded[output_start] == 0 {
        output_start += 1;
    }
    Ok(decoded.split_off(output_start - zeros))
}
