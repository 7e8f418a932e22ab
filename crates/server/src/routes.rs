use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod groups;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Group CRUD routes, relative to the configured base path.
fn group_routes(state: ServerState) -> Router {
    Router::new()
        .route("/group/create", post(groups::create))
        .route("/group/list", get(groups::list))
        .route("/group/list/:id", get(groups::get))
        .route("/group/delete/:id", delete(groups::delete))
        .route("/group/update/:id", put(groups::update))
        .with_state(state)
}

/// Build the full application router. `base_path` is either empty or a
/// normalized prefix such as `/groups-service`.
pub fn build_router(state: ServerState, cors: CorsLayer, base_path: &str) -> Router {
    let groups = if base_path.is_empty() {
        group_routes(state)
    } else {
        Router::new().nest(base_path, group_routes(state))
    };

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(groups)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
