//! JSON codec shared by the client and the DTO crates.
//!
//! DTOs omit unset fields when serialized and accept explicit `null` as
//! "absent" when deserialized, including for collection fields.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ClientResult;

/// Serialize a DTO to its compact JSON text.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> ClientResult<String> {
    Ok(serde_json::to_string(value)?)
}

/// Deserialize a DTO from JSON text.
pub fn from_json<T: DeserializeOwned>(json: &str) -> ClientResult<T> {
    Ok(serde_json::from_str(json)?)
}

/// Deserialize a field that may be `null`, substituting its default.
///
/// Pair with `#[serde(default)]` so a missing key behaves the same way.
pub fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
