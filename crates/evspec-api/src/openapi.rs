//! OpenAPI specification assembly.
//!
//! Assembles the utoipa-documented routes into a single spec served at
//! `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Event Specification Validation API",
        version = "0.1.0",
        description = "Syncs event specification documents from a remote source and validates event names and candidate schemas against their publish examples.",
        license(name = "Apache-2.0")
    ),
    paths(
        crate::routes::spec::refresh_spec,
        crate::routes::spec::validate_event,
    ),
    components(schemas(
        crate::routes::spec::ValidateEventRequest,
        crate::routes::spec::ValidationValues,
        crate::error::Ack,
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "spec", description = "Specification refresh and event validation")
    )
)]
pub struct ApiDoc;

/// Router for the OpenAPI endpoint.
///
/// Serves the OpenAPI JSON spec at `/openapi.json`.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
