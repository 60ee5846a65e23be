//! Validation-path errors.
//!
//! Every variant's `Display` text is the client-facing response message,
//! so the wording here is part of the wire contract.

use thiserror::Error;

/// Failure outcome of the validation pipeline.
///
/// `InvalidName` covers name lookup, the `invalid schema type` family
/// covers example extraction and structural comparison. Mismatch
/// variants carry the offending field key, not a full path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The event name is not a key in any loaded document, or the first
    /// document that carries it does not map it to an object.
    #[error("invalid name")]
    InvalidName,

    /// No specification documents are loaded at all. Validation cannot
    /// proceed until a fetch populates the spec directory.
    #[error("no specification files found")]
    NoDocuments,

    /// The channel definition has no `publish` operation.
    #[error("invalid schema type: '{0}' has no publish operation")]
    MissingPublish(String),

    /// The `publish` sub-tree could not be re-shaped into
    /// `{message: {examples: [{payload}]}}`.
    #[error("invalid schema type: malformed channel definition for '{0}'")]
    MalformedChannel(String),

    /// The channel's `message.examples` list is empty.
    #[error("invalid schema type: '{0}' has no publish examples")]
    NoExamples(String),

    /// Reference and candidate declare a different number of fields.
    #[error("invalid schema type: Some fields are added or missing")]
    FieldsAddedOrMissing,

    /// A field is absent from the candidate, has a different value kind
    /// than the reference, or violates the array template rules. Carries
    /// the offending field key.
    #[error("invalid schema type: {0}")]
    SchemaMismatch(String),
}
