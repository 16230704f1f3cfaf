//! HTTP server setup with Axum

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::rest::{entities, graph, observations, relations};
use super::state::AppState;

/// Create the Axum router with all endpoints
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/graph", get(graph::read_graph))
        .route("/graph/search", get(graph::search_nodes))
        .route("/graph/nodes", post(graph::open_nodes))
        .route(
            "/entities",
            post(entities::create_entities).delete(entities::delete_entities),
        )
        .route(
            "/relations",
            post(relations::create_relations).delete(relations::delete_relations),
        )
        .route(
            "/observations",
            post(observations::add_observations).delete(observations::delete_observations),
        );

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
