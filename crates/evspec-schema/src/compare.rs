//! The structural comparator.
//!
//! Decides whether a candidate map conforms in shape to a reference map:
//! same field count, same field names, same value kinds, recursively.
//! Scalar values are never compared — `{"amount": 10}` and
//! `{"amount": 99}` are the same shape.

use serde_json::{Map, Value};

use crate::error::ValidationError;

/// The six JSON value kinds. Kind equality is the entire scalar check;
/// integers and floats are one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

fn kind_of(value: &Value) -> ValueKind {
    match value {
        Value::Null => ValueKind::Null,
        Value::Bool(_) => ValueKind::Bool,
        Value::Number(_) => ValueKind::Number,
        Value::String(_) => ValueKind::String,
        Value::Array(_) => ValueKind::Array,
        Value::Object(_) => ValueKind::Object,
    }
}

/// Compare a candidate map against a reference map, depth-first.
///
/// Rules, in evaluation order:
///
/// 1. Field count must match exactly — a strict arity equality, not a
///    subset check. The candidate may neither add nor drop fields.
/// 2. Every reference key must exist in the candidate with the same
///    value kind.
/// 3. Object-valued fields recurse.
/// 4. Array-valued fields: the reference's **first** element is the
///    single structural template. It must itself be an object (arrays
///    of scalars are not supported as references), and every candidate
///    element — however many there are — must be an object matching it.
///    The reference array's own length and later elements are ignored.
///
/// The first mismatch short-circuits; no error accumulation. Field
/// iteration follows the reference map's order, which is not
/// semantically meaningful — when several fields mismatch, which key is
/// reported is unspecified.
pub fn compare(
    reference: &Map<String, Value>,
    candidate: &Map<String, Value>,
) -> Result<(), ValidationError> {
    if reference.len() != candidate.len() {
        return Err(ValidationError::FieldsAddedOrMissing);
    }

    for (key, reference_value) in reference {
        let candidate_value = candidate
            .get(key)
            .ok_or_else(|| ValidationError::SchemaMismatch(key.clone()))?;

        if kind_of(reference_value) != kind_of(candidate_value) {
            return Err(ValidationError::SchemaMismatch(key.clone()));
        }

        match (reference_value, candidate_value) {
            (Value::Object(reference_fields), Value::Object(candidate_fields)) => {
                compare(reference_fields, candidate_fields)?;
            }
            (Value::Array(reference_items), Value::Array(candidate_items)) => {
                let Some(Value::Object(template)) = reference_items.first() else {
                    return Err(ValidationError::SchemaMismatch(key.clone()));
                };
                for item in candidate_items {
                    let Value::Object(candidate_fields) = item else {
                        return Err(ValidationError::SchemaMismatch(key.clone()));
                    };
                    compare(template, candidate_fields)?;
                }
            }
            // Scalars: kind equality above is the whole check.
            _ => {}
        }
    }

    Ok(())
}
