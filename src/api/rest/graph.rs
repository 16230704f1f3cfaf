//! Graph read endpoints

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use super::{internal_err, required_array, ApiError};
use crate::api::state::AppState;
use crate::types::KnowledgeGraph;

/// Query parameters for search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

/// GET /api/graph - Full graph
pub async fn read_graph(State(state): State<AppState>) -> Result<Json<KnowledgeGraph>, ApiError> {
    state
        .kb
        .read_graph()
        .await
        .map(Json)
        .map_err(internal_err("Error reading graph", "Failed to read knowledge graph"))
}

/// GET /api/graph/search?query= - Substring search
///
/// An empty query is rejected here even though the manager would match
/// every entity with it.
pub async fn search_nodes(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<KnowledgeGraph>, ApiError> {
    let query = params
        .query
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::bad_request("Query parameter is required"))?;

    state
        .kb
        .search_nodes(&query)
        .await
        .map(Json)
        .map_err(internal_err("Error searching nodes", "Failed to search knowledge graph"))
}

/// POST /api/graph/nodes - Open nodes by name
pub async fn open_nodes(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<KnowledgeGraph>, ApiError> {
    let names: Vec<String> = required_array(body, "names", "Names")?;

    state
        .kb
        .open_nodes(names)
        .await
        .map(Json)
        .map_err(internal_err("Error opening nodes", "Failed to open nodes"))
}
