use std::fmt;
use std::str::FromStr;

use crate::convert::ConvertError;

const HASH_LEN: usize = 20;

/// 20-byte script hash, stored little-endian (the order fed to `Base58Check`).
///
/// Displayed big-endian with a `0x` prefix, e.g. `0xba2708841cd2139100424efebad5b6fd77f2d2a0`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UInt160([u8; HASH_LEN]);

impl UInt160 {
    pub const LEN: usize = HASH_LEN;

    #[must_use]
    pub const fn new(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    /// # Errors
    /// `InvalidLength` unless `bytes` is exactly 20 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ConvertError> {
        let arr = <[u8; Self::LEN]>::try_from(bytes).map_err(|_| ConvertError::InvalidLength {
            expected: Self::LEN,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }
}

impl FromStr for UInt160 {
    type Err = ConvertError;

    /// Parses the big-endian display form; the `0x` prefix is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let mut bytes = hex::decode(digits)?;
        bytes.reverse();
        Self::from_slice(&bytes)
    }
}

impl fmt::Display for UInt160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0x")?;
        for b in self.0.iter().rev() {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl From<[u8; HASH_LEN]> for UInt160 {
    fn from(bytes: [u8; HASH_LEN]) -> Self {
        Self(bytes)
    }
}
