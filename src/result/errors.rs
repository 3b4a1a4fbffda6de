//! Validation error tree
//!
//! The gateway reports validation failures as a nested object mirroring
//! the shape of the rejected request: each level carries an `"errors"`
//! array of leaf entries plus one key per validated sub-object. The tree
//! is parsed once from the decoded response body and is immutable
//! afterwards.

use crate::{BraintreeError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// One validation failure reported by the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEntry {
    /// Stable machine-readable identifier, owned by the remote taxonomy
    pub code: String,
    /// Human-readable explanation
    pub message: String,
    /// Name of the field the error concerns
    pub attribute: String,
}

/// A tree of validation errors for one rejected request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorCollection {
    entries: Vec<ErrorEntry>,
    nested: HashMap<String, ErrorCollection>,
}

impl ErrorCollection {
    /// Parse a collection from the gateway's nested error object
    ///
    /// At each level, the `"errors"` key holds an array of leaf entries;
    /// every other object-valued key is a nested sub-collection. Scalar
    /// keys (the gateway sometimes echoes request params) are ignored.
    pub fn from_value(value: &Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| {
            BraintreeError::unexpected_response("validation errors are not an object")
        })?;

        let mut entries = Vec::new();
        let mut nested = HashMap::new();

        for (key, child) in object {
            if key == "errors" {
                let raw_entries = child.as_array().ok_or_else(|| {
                    BraintreeError::unexpected_response("\"errors\" is not an array")
                })?;
                for raw in raw_entries {
                    entries.push(serde_json::from_value(raw.clone())?);
                }
            } else if child.is_object() {
                nested.insert(key.clone(), Self::from_value(child)?);
            }
        }

        Ok(Self { entries, nested })
    }

    /// Leaf entries at this level, in the order the gateway reported them
    pub fn entries(&self) -> &[ErrorEntry] {
        &self.entries
    }

    /// The sub-collection registered under `name`
    ///
    /// Lookup is exact-match on the immediate level only. A missing key
    /// is reported as [`BraintreeError::KeyNotFound`] so callers can tell
    /// "no errors for this sub-object" apart from "this sub-object was
    /// never validated".
    pub fn for_key(&self, name: &str) -> Result<&ErrorCollection> {
        self.nested
            .get(name)
            .ok_or_else(|| BraintreeError::key_not_found(name))
    }

    /// Leaf entries at this level whose attribute matches `name`
    ///
    /// Returns an empty vec (not an error) when nothing matches.
    pub fn on_attribute(&self, name: &str) -> Vec<&ErrorEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.attribute == name)
            .collect()
    }

    /// Total number of entries in this collection and all sub-collections
    pub fn deep_size(&self) -> usize {
        self.entries.len()
            + self
                .nested
                .values()
                .map(ErrorCollection::deep_size)
                .sum::<usize>()
    }

    /// Every entry in the tree, parents before children
    pub fn deep_all(&self) -> Vec<&ErrorEntry> {
        let mut all: Vec<&ErrorEntry> = self.entries.iter().collect();
        for child in self.nested.values() {
            all.extend(child.deep_all());
        }
        all
    }

    /// Whether the tree holds no entries at any level
    pub fn is_empty(&self) -> bool {
        self.deep_size() == 0
    }
}
