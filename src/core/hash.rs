use crate::error::{ChainParamsError, Result};
use crate::utils::Encodable;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// 256-bit hash in internal (little-endian) byte order.
///
/// Displayed and parsed the way block explorers show hashes: most significant
/// byte first, so the bytes are reversed relative to what gets hashed.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hash256([u8; 32]);

impl Hash256 {
    pub const ZERO: Hash256 = Hash256([0u8; 32]);

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Hash256(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Parse display-order hex, accepting an optional `0x` prefix and fewer
    /// than 64 digits (the value is then zero-extended on the left).
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s.trim();
        let digits = digits
            .strip_prefix("0x")
            .or_else(|| digits.strip_prefix("0X"))
            .unwrap_or(digits);

        if digits.is_empty() || digits.len() > 64 {
            return Err(ChainParamsError::InvalidHex(format!(
                "expected 1 to 64 hex digits, got {}",
                digits.len()
            )));
        }

        let padded = format!("{digits:0>64}");
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(&padded, &mut bytes)?;
        bytes.reverse();
        Ok(Hash256(bytes))
    }

    pub fn to_hex(&self) -> String {
        let mut display = self.0;
        display.reverse();
        hex::encode(display)
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({})", self.to_hex())
    }
}

impl FromStr for Hash256 {
    type Err = ChainParamsError;

    fn from_str(s: &str) -> Result<Self> {
        Hash256::from_hex(s)
    }
}

impl From<[u8; 32]> for Hash256 {
    fn from(bytes: [u8; 32]) -> Self {
        Hash256(bytes)
    }
}

impl Encodable for Hash256 {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.0);
    }
}

impl Serialize for Hash256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Hash256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Hash256::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_reverses_byte_order() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0xab;
        bytes[31] = 0x01;
        let hash = Hash256::from_bytes(bytes);
        let shown = hash.to_string();
        assert!(shown.starts_with("01"));
        assert!(shown.ends_with("ab"));
        assert_eq!(shown.parse::<Hash256>().unwrap(), hash);
    }

    #[test]
    fn test_short_literal_is_left_padded() {
        let hash = Hash256::from_hex("0x001").unwrap();
        assert_eq!(hash.as_bytes()[0], 0x01);
        assert!(hash.as_bytes()[1..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_rejects_bad_literals() {
        assert!(Hash256::from_hex("").is_err());
        assert!(Hash256::from_hex("0x").is_err());
        assert!(Hash256::from_hex("xyz").is_err());
        assert!(Hash256::from_hex(&"1".repeat(65)).is_err());
    }

    #[test]
    fn test_serde_uses_display_hex() {
        let hash = Hash256::from_hex("0x10").unwrap();
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, format!("\"{}{}\"", "0".repeat(62), "10"));
        let back: Hash256 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hash);
    }
}
