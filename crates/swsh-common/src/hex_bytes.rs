//! Serde adapter that renders fixed-size byte blobs as lowercase hex.
//!
//! Use with `#[serde(with = "swsh_common::hex_bytes")]` on a `[u8; N]` field.
//! Deserialization requires exactly `2 * N` hex digits.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S, const N: usize>(bytes: &[u8; N], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&hex::encode(bytes))
}

pub fn deserialize<'de, D, const N: usize>(deserializer: D) -> Result<[u8; N], D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    let mut bytes = [0u8; N];
    hex::decode_to_slice(&text, &mut bytes)
        .map_err(|e| D::Error::custom(format!("invalid hex blob '{}': {}", text, e)))?;
    Ok(bytes)
}
