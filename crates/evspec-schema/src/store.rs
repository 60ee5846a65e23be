//! The loaded specification document set.
//!
//! `SpecStore` owns the documents from one load pass and answers event
//! name lookups against them. A store is an immutable snapshot: a
//! refresh builds a new store and swaps it in wholesale, it never
//! mutates one in place.

use std::path::Path;

use serde_json::{Map, Value};

use crate::compare::compare;
use crate::document::{load_directory, SpecDocument, SpecLoadError};
use crate::error::ValidationError;
use crate::extract::extract_example;

/// An immutable set of loaded specification documents.
#[derive(Debug, Clone, Default)]
pub struct SpecStore {
    documents: Vec<SpecDocument>,
}

impl SpecStore {
    /// Build a store from already-parsed documents, preserving order.
    /// Document order decides which document wins a name lookup.
    pub fn new(documents: Vec<SpecDocument>) -> Self {
        Self { documents }
    }

    /// Build a store by recursively loading every specification file
    /// under `dir`.
    pub fn from_directory(dir: &Path) -> Result<Self, SpecLoadError> {
        Ok(Self::new(load_directory(dir)?))
    }

    /// Number of loaded documents.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// True when no documents are loaded.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Look up the channel definition for an event name.
    ///
    /// Scans documents in load order. The first document whose channels
    /// map carries `name` with a non-null value decides the outcome: an
    /// object value is returned directly, anything else is
    /// `InvalidName`. There is no hidden scan state — the caller gets
    /// the matched channel, not a cursor.
    pub fn find_event(&self, name: &str) -> Result<&Map<String, Value>, ValidationError> {
        if self.documents.is_empty() {
            return Err(ValidationError::NoDocuments);
        }
        for document in &self.documents {
            match document.channel(name) {
                None | Some(Value::Null) => continue,
                Some(Value::Object(channel)) => return Ok(channel),
                Some(_) => return Err(ValidationError::InvalidName),
            }
        }
        Err(ValidationError::InvalidName)
    }

    /// Topic validation: name existence is the entire check.
    pub fn validate_topic(&self, name: &str) -> Result<(), ValidationError> {
        self.find_event(name).map(|_| ())
    }

    /// Schema validation: lookup, extract the reference example, compare
    /// the candidate against it.
    pub fn validate_schema(
        &self,
        name: &str,
        candidate: &Map<String, Value>,
    ) -> Result<(), ValidationError> {
        let channel = self.find_event(name)?;
        let example = extract_example(channel, name)?;
        compare(&example, candidate)
    }
}
