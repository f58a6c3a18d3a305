//! `Base58Check`: version byte + payload + first 4 bytes of double-SHA256.

use crate::{decode, encode, DecodeError};
use sha2::{Digest, Sha256};

/// Length of the trailing checksum.
pub const CHECKSUM_LEN: usize = 4;

/// SHA-256 applied twice.
#[must_use]
pub fn hash_twice(data: &[u8]) -> [u8; 32] {
    let hash1 = Sha256::digest(data);
    Sha256::digest(hash1).into()
}

/// First [`CHECKSUM_LEN`] bytes of [`hash_twice`].
#[must_use]
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let hash = hash_twice(data);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&hash[..CHECKSUM_LEN]);
    out
}

/// Encodes `version ‖ payload ‖ checksum` as Base58.
///
/// `version` is a `u8`, so there is no out-of-range version to reject.
#[must_use]
pub fn encode_checked(version: u8, payload: &[u8]) -> String {
    let mut buf = Vec::with_capacity(1 + payload.len() + CHECKSUM_LEN);
    buf.push(version);
    buf.extend_from_slice(payload);
    let check = checksum(&buf);
    buf.extend_from_slice(&check);
    encode(&buf)
}

/// Decodes a `Base58Check` string and verifies its checksum.
///
/// Returns the data with the checksum stripped; the version byte is left in place for the
/// caller to interpret.
///
/// # Errors
/// - `InvalidChar`: non-alphabet character.
/// - `TooShort`: fewer than 4 decoded bytes.
/// - `ChecksumMismatch`: trailing 4 bytes differ from the recomputed checksum.
pub fn decode_checked(input: &str) -> Result<Vec<u8>, DecodeError> {
    let mut decoded = decode(input)?;
    if decoded.len() < CHECKSUM_LEN {
        return Err(DecodeError::TooShort(decoded.len()));
    }
    let split = decoded.len() - CHECKSUM_LEN;
    let expected = checksum(&decoded[..split]);
    let mut actual = [0u8; CHECKSUM_LEN];
    actual.copy_from_slice(&decoded[split..]);
    if expected != actual {
        return Err(DecodeError::ChecksumMismatch { expected, actual });
    }
    decoded.truncate(split);
    Ok(decoded)
}
