//! Serialization of the collection for export and validation on import.
//!
//! Export produces an indented, human-readable JSON array of entry records.
//! Import validation is strict and two-staged: the document must parse as
//! JSON, its top level must be an array, and every element must be a valid
//! entry record. Validation performs no mutation; the store only replaces
//! its collection once parsing has fully succeeded.

use crate::entry::Entry;
use crate::errors::{ImportError, StoreError};
use serde_json::Value;

/// Serializes the entries to the indented JSON document used for export.
pub fn export_entries(entries: &[Entry]) -> Result<String, StoreError> {
    serde_json::to_string_pretty(entries).map_err(StoreError::Serialize)
}

/// Parses an exported document back into a collection of entries.
///
/// # Errors
///
/// - [`ImportError::InvalidJson`] if the text is not JSON at all.
/// - [`ImportError::NotAnArray`] if the top-level shape is not a sequence.
/// - [`ImportError::MalformedEntry`] if a record in the sequence does not
///   deserialize as an entry.
pub fn parse_entries(text: &str) -> Result<Vec<Entry>, ImportError> {
    let value: Value = serde_json::from_str(text).map_err(ImportError::InvalidJson)?;
    if !value.is_array() {
        return Err(ImportError::NotAnArray);
    }
    serde_json::from_value(value).map_err(ImportError::MalformedEntry)
}
