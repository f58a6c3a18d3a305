//! Base58 and `Base58Check` codec (Bitcoin alphabet) with NEO address helpers.
//!
//! The codec layer (`encode`, `decode`, `encode_checked`, `decode_checked`) is pure and
//! never logs. The `convert` layer builds NEO script-hash/address glue on top of it.

pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Character standing for digit 0; one per leading zero byte.
pub const ENCODED_ZERO: u8 = ALPHABET[0];

mod check;
pub mod convert;
mod decode;
mod divmod;
mod encode;
mod uint160;

pub use check::{checksum, decode_checked, encode_checked, hash_twice, CHECKSUM_LEN};
pub use convert::{ConvertError, ADDRESS_VERSION};
pub use decode::{decode, digit_value, DecodeError};
pub use encode::encode;
pub use uint160::UInt160;
