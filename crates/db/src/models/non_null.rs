//! Serde support for optional fields that may be omitted but not `null`.
//!
//! Use with `#[serde(default, deserialize_with = "non_null::deserialize")]`:
//! a missing key yields `None`, an explicit `null` is a deserialization
//! error instead of silently meaning "keep the current value".

use serde::de::Error;
use serde::{Deserialize, Deserializer};

/// Message reported for an explicit `null`.
pub const NULL_MESSAGE: &str = "this field may not be null";

pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Option::<T>::deserialize(deserializer)? {
        Some(value) => Ok(Some(value)),
        None => Err(D::Error::custom(NULL_MESSAGE)),
    }
}
