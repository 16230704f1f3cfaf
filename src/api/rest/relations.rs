//! Relation endpoints

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use super::{internal_err, required_array, ApiError, MessageResponse};
use crate::api::state::AppState;
use crate::types::Relation;

fn has_empty_field(relation: &Relation) -> bool {
    relation.from.is_empty() || relation.to.is_empty() || relation.relation_type.is_empty()
}

/// POST /api/relations - Create relations, returns the ones actually added
pub async fn create_relations(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Vec<Relation>>), ApiError> {
    let relations: Vec<Relation> = required_array(body, "relations", "Relations")?;
    if relations.iter().any(has_empty_field) {
        return Err(ApiError::bad_request(
            "Relation from, to and relationType must not be empty",
        ));
    }

    let created = state
        .kb
        .create_relations(relations)
        .await
        .map_err(internal_err("Error creating relations", "Failed to create relations"))?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// DELETE /api/relations - Delete relations matching exactly
pub async fn delete_relations(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let relations: Vec<Relation> = required_array(body, "relations", "Relations")?;

    state
        .kb
        .delete_relations(relations)
        .await
        .map_err(internal_err("Error deleting relations", "Failed to delete relations"))?;

    Ok(Json(MessageResponse::new("Relations deleted successfully")))
}
