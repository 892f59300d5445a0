//! JSON encoding helpers using sonic-rs.

use crate::{Error, Result};
use serde::{Serialize, de::DeserializeOwned};

/// Deserialize JSON string.
///
/// # Errors
/// Returns error if JSON is invalid.
pub fn from_json<T: DeserializeOwned>(s: &str) -> Result<T> {
    sonic_rs::from_str(s).map_err(Error::from)
}

/// Serialize to compact JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    sonic_rs::to_string(value).map_err(Error::from)
}

/// Serialize to pretty JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String> {
    sonic_rs::to_string_pretty(value).map_err(Error::from)
}
