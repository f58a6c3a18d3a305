//! NEO address and data-format helpers built on the `Base58Check` codec.
//!
//! | Operation              | Input                         | Output                      |
//! |------------------------|-------------------------------|-----------------------------|
//! | [`hash_to_address`]    | script hash (hex)             | `A...` address              |
//! | [`address_to_hash`]    | `A...` address                | [`UInt160`] (`0x...`)       |
//! | [`to_amount`]          | little-endian integer (hex)   | signed decimal string       |
//! | [`to_event_string`]    | hex                           | UTF-8 text                  |
//! | [`encode_event_string`]| UTF-8 text                    | upper-case hex              |
//!
//! Script hashes without a `0x` prefix are taken in storage (little-endian) order; with the
//! prefix they are the big-endian display form and get reversed first.

use num_bigint::BigInt;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{decode_checked, encode_checked, DecodeError, UInt160};

/// Version byte of NEO legacy addresses; every such address starts with `A`.
pub const ADDRESS_VERSION: u8 = 23;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error(transparent)]
    Base58(#[from] DecodeError),

    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("unexpected address version {actual}, expected {expected}")]
    UnexpectedVersion { expected: u8, actual: u8 },

    #[error("event data is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Encodes a script hash as a NEO address.
///
/// # Errors
/// `Hex` for malformed hex, `InvalidLength` unless the hash is 20 bytes.
pub fn hash_to_address(hash: &str) -> Result<String, ConvertError> {
    let script_hash = if hash.starts_with("0x") {
        hash.parse::<UInt160>()?
    } else {
        UInt160::from_slice(&hex::decode(hash)?)?
    };
    let address = encode_checked(ADDRESS_VERSION, script_hash.as_bytes());
    debug!(%script_hash, %address, "encoded address");
    Ok(address)
}

/// Decodes a NEO address back to its script hash.
///
/// # Errors
/// Any [`DecodeError`] from the checked decode, `InvalidLength` unless the payload is
/// version + 20 bytes, `UnexpectedVersion` for a version byte other than 23.
pub fn address_to_hash(address: &str) -> Result<UInt160, ConvertError> {
    let data = decode_checked(address).inspect_err(|err| {
        warn!(address, %err, "rejected address");
    })?;
    let Some((&version, payload)) = data.split_first() else {
        return Err(ConvertError::InvalidLength {
            expected: 1 + UInt160::LEN,
            actual: 0,
        });
    };
    if version != ADDRESS_VERSION {
        warn!(address, version, "rejected address");
        return Err(ConvertError::UnexpectedVersion {
            expected: ADDRESS_VERSION,
            actual: version,
        });
    }
    let script_hash = UInt160::from_slice(payload).map_err(|_| ConvertError::InvalidLength {
        expected: 1 + UInt160::LEN,
        actual: data.len(),
    })?;
    debug!(address, %script_hash, "decoded address");
    Ok(script_hash)
}

/// Reads hex as a little-endian two's-complement integer of any width.
///
/// Empty input is zero.
///
/// # Errors
/// `Hex` for malformed hex.
pub fn to_amount(hex_le: &str) -> Result<String, ConvertError> {
    let bytes = hex::decode(hex_le)?;
    Ok(BigInt::from_signed_bytes_le(&bytes).to_string())
}

/// # Errors
/// `Hex` for malformed hex, `Utf8` if the bytes are not UTF-8.
pub fn to_event_string(hex_str: &str) -> Result<String, ConvertError> {
    Ok(String::from_utf8(hex::decode(hex_str)?)?)
}

#[must_use]
pub fn encode_event_string(text: &str) -> String {
    hex::encode_upper(text.as_bytes())
}
