use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CatalogError, Result};

/// Field holding the Harvard reference number of a catalog entry.
pub const REFERENCE_FIELD: &str = "harvard_ref_#";

/// A single Bright Star Catalogue entry.
///
/// Only the fields the alert generator copies are modelled; every other
/// field of the stored object is ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarRecord {
    /// Right ascension, sexagesimal (`hh:mm:ss.ss`)
    #[serde(rename = "RA")]
    pub ra: String,
    /// Declination, signed sexagesimal (`±dd:mm:ss.ss`)
    #[serde(rename = "DEC")]
    pub dec: String,
    #[serde(rename = "Title HD")]
    pub title: String,
}

/// Compute the store key for the `index`-th catalog element.
///
/// The reference number may be written as a JSON integer or a string;
/// either way the key is its decimal text. String values have surrounding
/// whitespace trimmed, so `" 7 "` and `7` address the same field.
pub fn reference_key(index: usize, star: &Value) -> Result<String> {
    match star.get(REFERENCE_FIELD) {
        None | Some(Value::Null) => Err(CatalogError::MissingReference {
            index,
            field: REFERENCE_FIELD,
        }),
        Some(Value::Number(n)) if n.is_u64() || n.is_i64() => Ok(n.to_string()),
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        Some(other) => Err(CatalogError::InvalidReference {
            index,
            field: REFERENCE_FIELD,
            value: other.to_string(),
        }),
    }
}
