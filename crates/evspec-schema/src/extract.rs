//! Publish-example extraction.
//!
//! A channel definition is an opaque value tree; the fixed contract is
//! that the reference payload lives at
//! `publish.message.examples[0].payload`. This module isolates that
//! contract: the channel is re-shaped through typed serde intermediates,
//! and any deviation is an `invalid schema type` failure rather than a
//! load-time one.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ValidationError;

/// Typed intermediate for the `publish` sub-tree. Fields are defaulted
/// so that only the parts the contract needs have to be present.
#[derive(Debug, Deserialize)]
struct PublishOperation {
    #[serde(default)]
    message: MessageBlock,
}

#[derive(Debug, Default, Deserialize)]
struct MessageBlock {
    #[serde(default)]
    examples: Vec<MessageExample>,
}

#[derive(Debug, Deserialize)]
struct MessageExample {
    #[serde(default)]
    payload: Map<String, Value>,
}

/// Extract the reference example payload from a channel definition.
///
/// Returns `examples[0].payload` from the channel's publish message.
/// Fails if `publish` is absent, if the sub-tree cannot be re-shaped,
/// or if the examples list is empty. Not cached — the payload is
/// re-extracted on every validation call.
pub fn extract_example(
    channel: &Map<String, Value>,
    event_name: &str,
) -> Result<Map<String, Value>, ValidationError> {
    let publish = channel
        .get("publish")
        .ok_or_else(|| ValidationError::MissingPublish(event_name.to_string()))?;

    let operation: PublishOperation = serde_json::from_value(publish.clone())
        .map_err(|_| ValidationError::MalformedChannel(event_name.to_string()))?;

    operation
        .message
        .examples
        .into_iter()
        .next()
        .map(|example| example.payload)
        .ok_or_else(|| ValidationError::NoExamples(event_name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn channel(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("fixture is not an object: {other}"),
        }
    }

    #[test]
    fn extracts_first_example_payload() {
        let channel = channel(json!({
            "publish": {
                "message": {
                    "examples": [
                        {"payload": {"orderId": "abc", "amount": 10}},
                        {"payload": {"different": true}}
                    ]
                }
            }
        }));
        let payload = extract_example(&channel, "OrderCreated").unwrap();
        assert_eq!(payload.len(), 2);
        assert_eq!(payload["orderId"], json!("abc"));
    }

    #[test]
    fn missing_publish_fails() {
        let channel = channel(json!({"subscribe": {}}));
        let err = extract_example(&channel, "OrderCreated").unwrap_err();
        assert_eq!(err, ValidationError::MissingPublish("OrderCreated".to_string()));
    }

    #[test]
    fn scalar_publish_fails_as_malformed() {
        let channel = channel(json!({"publish": "not a map"}));
        let err = extract_example(&channel, "OrderCreated").unwrap_err();
        assert_eq!(
            err,
            ValidationError::MalformedChannel("OrderCreated".to_string())
        );
    }

    #[test]
    fn empty_examples_fails() {
        let channel = channel(json!({"publish": {"message": {"examples": []}}}));
        let err = extract_example(&channel, "OrderCreated").unwrap_err();
        assert_eq!(err, ValidationError::NoExamples("OrderCreated".to_string()));
    }

    #[test]
    fn missing_message_fails_as_empty_examples() {
        let channel = channel(json!({"publish": {}}));
        let err = extract_example(&channel, "OrderCreated").unwrap_err();
        assert_eq!(err, ValidationError::NoExamples("OrderCreated".to_string()));
    }

    #[test]
    fn example_without_payload_yields_empty_map() {
        let channel = channel(json!({"publish": {"message": {"examples": [{}]}}}));
        let payload = extract_example(&channel, "OrderCreated").unwrap();
        assert!(payload.is_empty());
    }
}
