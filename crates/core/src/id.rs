//! Validated document identifiers.
//!
//! The store assigns every document a 24-character hexadecimal id (a MongoDB
//! ObjectId rendered as hex). Routes that take an id must reject anything
//! else with a validation error before the store is ever consulted, so the
//! id type only exists in validated form.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A store-assigned document identifier: exactly 24 hex characters.
///
/// Construct via [`DocumentId::parse`]; a value of this type is always
/// well-formed. Serializes as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Validate a raw string as a document id.
    ///
    /// Accepts upper- or lowercase hex; the stored form is lowercased so
    /// ids compare consistently.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        if raw.len() == 24 && raw.chars().all(|c| c.is_ascii_hexdigit()) {
            Ok(Self(raw.to_ascii_lowercase()))
        } else {
            Err(CoreError::Validation(format!(
                "Invalid document id '{raw}': expected 24 hex characters"
            )))
        }
    }

    /// Wrap a hex string the store itself produced.
    ///
    /// Lowercases but does not re-validate; only store implementations
    /// should call this with driver-generated ids.
    pub fn from_store(raw: String) -> Self {
        Self(raw.to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn accepts_valid_24_hex() {
        let id = DocumentId::parse("65a1b2c3d4e5f60718293a4b").expect("valid id");
        assert_eq!(id.as_str(), "65a1b2c3d4e5f60718293a4b");
    }

    #[test]
    fn lowercases_mixed_case_input() {
        let id = DocumentId::parse("65A1B2C3D4E5F60718293A4B").expect("valid id");
        assert_eq!(id.as_str(), "65a1b2c3d4e5f60718293a4b");
    }

    #[test]
    fn rejects_wrong_length() {
        assert_matches!(
            DocumentId::parse("abc123"),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            DocumentId::parse("65a1b2c3d4e5f60718293a4b0"),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn rejects_non_hex_characters() {
        assert_matches!(
            DocumentId::parse("65a1b2c3d4e5f60718293a4g"),
            Err(CoreError::Validation(_))
        );
    }
}
