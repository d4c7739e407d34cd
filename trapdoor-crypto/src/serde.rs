//! Utilities for serializing and deserializing integers as hexadecimal text using Serde.
//!
//! [`SerializeHex`] looks like a "module" to Serde and can be used with the `#[serde(with =
//! "SerializeHex")]` syntax to add serialization functionality to types which otherwise do not
//! serialize to the hexadecimal boundary encoding. Integers are written as lowercase hexadecimal
//! without leading zeros.

use crate::Error;
use num_bigint::BigUint;
use serde::{de, Deserialize, Deserializer, Serializer};

/// Serialization/deserialization functionality for values exchanged as hexadecimal text.
pub trait SerializeHex: Sized {
    /// Proxy serialization function telling serde how to serialize the implementing type.
    fn serialize<S>(this: &Self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer;

    /// Proxy deserialization function telling serde how to deserialize the implementing type.
    fn deserialize<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>;
}

impl SerializeHex for BigUint {
    fn serialize<S>(this: &Self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&to_hex(this))
    }

    fn deserialize<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        from_hex(&text).map_err(de::Error::custom)
    }
}

/// Encode an integer as lowercase hexadecimal text.
pub(crate) fn to_hex(x: &BigUint) -> String {
    x.to_str_radix(16)
}

/// Decode an integer from hexadecimal text. Either case is accepted; signs and prefixes are not.
pub(crate) fn from_hex(text: &str) -> Result<BigUint, Error> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidEncoding(text.to_string()));
    }
    BigUint::parse_bytes(text.as_bytes(), 16).ok_or_else(|| Error::InvalidEncoding(text.to_string()))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hex_has_no_leading_zeros() {
        assert_eq!(to_hex(&BigUint::from(0x0au8)), "a");
        assert_eq!(to_hex(&BigUint::from(0u8)), "0");
    }

    #[test]
    fn hex_parses_either_case() {
        assert_eq!(from_hex("fF").unwrap(), BigUint::from(255u8));
        assert_eq!(from_hex("00ff").unwrap(), BigUint::from(255u8));
    }

    #[test]
    fn hex_rejects_garbage() {
        assert!(matches!(from_hex(""), Err(Error::InvalidEncoding(_))));
        assert!(matches!(from_hex("0x1f"), Err(Error::InvalidEncoding(_))));
        assert!(matches!(from_hex("-1"), Err(Error::InvalidEncoding(_))));
        assert!(matches!(from_hex("12 "), Err(Error::InvalidEncoding(_))));
    }
}
