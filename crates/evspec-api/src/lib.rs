//! # evspec-api — Axum HTTP Service for Event Specification Validation
//!
//! Thin orchestration over the domain crates: `evspec-schema` does the
//! structural validation, `evspec-repo` syncs documents from the remote
//! source, and this crate wires them into an HTTP surface.
//!
//! ## API Surface
//!
//! | Prefix | Module | Purpose |
//! |--------|--------|---------|
//! | `GET /v1/api-spec` | [`routes::spec`] | Sync + reload specification documents |
//! | `POST /v1/api-spec/event` | [`routes::spec`] | Topic/schema validation |
//! | `/health/*` | here | Unauthenticated health probes |
//! | `/openapi.json` | [`openapi`] | Generated OpenAPI spec |
//!
//! ## Architecture
//!
//! Handlers hold no business logic: per request they take one immutable
//! snapshot of the loaded document set and delegate to pure functions.
//! All errors map to the fixed JSON envelope via [`AppError`].

pub mod config;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use crate::config::AppConfig;
pub use crate::error::AppError;
pub use crate::state::AppState;

/// Assemble the full application router.
///
/// Health probes are mounted beside the API routes; there is no
/// authentication layer on this service.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::spec::router())
        .merge(openapi::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new().merge(health).merge(api)
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — returns 200 when the application is ready to serve.
async fn readiness() -> &'static str {
    "ready"
}
