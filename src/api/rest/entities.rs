//! Entity endpoints

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use super::{internal_err, required_array, ApiError, MessageResponse};
use crate::api::state::AppState;
use crate::types::Entity;

/// POST /api/entities - Create entities, returns the ones actually added
pub async fn create_entities(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Vec<Entity>>), ApiError> {
    let entities: Vec<Entity> = required_array(body, "entities", "Entities")?;
    if entities.iter().any(|e| e.name.is_empty()) {
        return Err(ApiError::bad_request("Entity name must not be empty"));
    }

    let created = state
        .kb
        .create_entities(entities)
        .await
        .map_err(internal_err("Error creating entities", "Failed to create entities"))?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// DELETE /api/entities - Delete entities and their relations
pub async fn delete_entities(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let names: Vec<String> = required_array(body, "entityNames", "EntityNames")?;

    state
        .kb
        .delete_entities(names)
        .await
        .map_err(internal_err("Error deleting entities", "Failed to delete entities"))?;

    Ok(Json(MessageResponse::new("Entities deleted successfully")))
}
