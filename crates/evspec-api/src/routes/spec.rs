//! Specification refresh and event validation endpoints.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | `GET`  | `/v1/api-spec` | `refresh_spec` |
//! | `POST` | `/v1/api-spec/event` | `validate_event` |

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use evspec_schema::SpecStore;
use serde::Deserialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::error::{Ack, AppError, ErrorBody};
use crate::state::AppState;

/// The closed set of supported validation kinds. Anything else is
/// rejected before a lookup is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    /// Name existence is the entire check.
    Topic,
    /// Name lookup, then structural comparison against the publish example.
    Schema,
}

impl ValidationKind {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "topic" => Some(Self::Topic),
            "schema" => Some(Self::Schema),
            _ => None,
        }
    }
}

/// Request body for `POST /v1/api-spec/event`.
///
/// Every field is defaulted: `invalid json` is reserved for bodies that
/// do not parse at all. A missing kind or name defaults to the empty
/// string and flows to the unknown-kind or invalid-name reply instead.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidateEventRequest {
    /// `"topic"` or `"schema"`. Kept as a string so an unsupported kind
    /// gets its own reply instead of a generic parse failure.
    #[serde(default)]
    pub validation_type: String,
    #[serde(default)]
    pub values: ValidationValues,
}

/// The values under validation.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ValidationValues {
    /// Event name to look up across the loaded documents.
    #[serde(default)]
    pub name: String,
    /// Candidate schema; required only for the `schema` kind.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub schema: Option<Map<String, Value>>,
}

/// Build the specification router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/api-spec", get(refresh_spec))
        .route("/v1/api-spec/event", post(validate_event))
}

/// GET /v1/api-spec — Sync specification files from the remote source
/// and reload the document store.
#[utoipa::path(
    get,
    path = "/v1/api-spec",
    responses(
        (status = 200, description = "Specifications synced and reloaded", body = Ack),
        (status = 400, description = "Fetch or reload failed", body = ErrorBody),
    ),
    tag = "spec"
)]
pub(crate) async fn refresh_spec(State(state): State<AppState>) -> Result<Json<Ack>, AppError> {
    let source = state
        .source
        .as_ref()
        .ok_or_else(|| AppError::Fetch("spec source not configured".to_string()))?;

    let files = source
        .sync_to(&state.config.spec_dir)
        .await
        .map_err(|e| AppError::Fetch(e.to_string()))?;
    tracing::info!(files, "specification sync finished");

    let store = SpecStore::from_directory(&state.config.spec_dir)
        .map_err(|e| AppError::Fetch(e.to_string()))?;
    tracing::info!(documents = store.document_count(), "specification store reloaded");
    state.replace(store);

    Ok(Json(Ack::ok()))
}

/// POST /v1/api-spec/event — Validate an event name or a candidate
/// schema against the loaded specification documents.
///
/// The body is taken as `Result` so a malformed payload maps to the
/// uniform `invalid json` envelope instead of Axum's default rejection.
#[utoipa::path(
    post,
    path = "/v1/api-spec/event",
    request_body = ValidateEventRequest,
    responses(
        (status = 200, description = "Validation passed", body = Ack),
        (status = 400, description = "Malformed request or validation failure", body = ErrorBody),
    ),
    tag = "spec"
)]
pub(crate) async fn validate_event(
    State(state): State<AppState>,
    payload: Result<Json<ValidateEventRequest>, JsonRejection>,
) -> Result<Json<Ack>, AppError> {
    let Json(request) = payload.map_err(|_| AppError::InvalidJson)?;

    let kind = ValidationKind::parse(&request.validation_type)
        .ok_or(AppError::UnknownValidationType)?;

    // One snapshot per request; a concurrent refresh cannot tear the
    // lookup/extract/compare sequence apart.
    let store = state.snapshot();

    match kind {
        ValidationKind::Topic => store.validate_topic(&request.values.name)?,
        ValidationKind::Schema => {
            let candidate = request.values.schema.unwrap_or_default();
            store.validate_schema(&request.values.name, &candidate)?;
        }
    }

    Ok(Json(Ack::ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_kind_membership() {
        assert_eq!(ValidationKind::parse("topic"), Some(ValidationKind::Topic));
        assert_eq!(ValidationKind::parse("schema"), Some(ValidationKind::Schema));
        assert_eq!(ValidationKind::parse("Topic"), None);
        assert_eq!(ValidationKind::parse(""), None);
        assert_eq!(ValidationKind::parse("subscribe"), None);
    }

    #[test]
    fn request_deserializes_without_schema() {
        let request: ValidateEventRequest = serde_json::from_value(serde_json::json!({
            "validationType": "topic",
            "values": {"name": "OrderCreated"}
        }))
        .unwrap();
        assert_eq!(request.validation_type, "topic");
        assert!(request.values.schema.is_none());
    }

    #[test]
    fn request_defaults_missing_fields_to_empty() {
        let request: ValidateEventRequest = serde_json::from_value(serde_json::json!({
            "validationType": "topic"
        }))
        .unwrap();
        assert_eq!(request.values.name, "");

        let request: ValidateEventRequest = serde_json::from_value(serde_json::json!({
            "values": {"name": "OrderCreated"}
        }))
        .unwrap();
        assert_eq!(request.validation_type, "");
        assert!(ValidationKind::parse(&request.validation_type).is_none());
    }

    #[test]
    fn request_deserializes_with_schema() {
        let request: ValidateEventRequest = serde_json::from_value(serde_json::json!({
            "validationType": "schema",
            "values": {"name": "OrderCreated", "schema": {"orderId": "x"}}
        }))
        .unwrap();
        assert_eq!(request.values.schema.unwrap().len(), 1);
    }
}
