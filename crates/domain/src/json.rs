//! Serde helpers for permissive decoding of backend payloads.

use serde::{Deserialize, Deserializer};

/// Decode a field that may be `null`, falling back to `T::default()`.
///
/// Combine with `#[serde(default)]` so a missing key behaves the same way.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
