//! Observation endpoints

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use super::{internal_err, required_array, ApiError, MessageResponse};
use crate::api::state::AppState;
use crate::types::{Observation, ObservationDeletion, ObservationResult};

/// POST /api/observations - Append observations to existing entities
pub async fn add_observations(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Vec<ObservationResult>>), ApiError> {
    let observations: Vec<Observation> = required_array(body, "observations", "Observations")?;

    let added = state
        .kb
        .add_observations(observations)
        .await
        .map_err(internal_err("Error adding observations", "Failed to add observations"))?;

    Ok((StatusCode::CREATED, Json(added)))
}

/// DELETE /api/observations - Remove observations from entities
pub async fn delete_observations(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let deletions: Vec<ObservationDeletion> = required_array(body, "deletions", "Deletions")?;

    state
        .kb
        .delete_observations(deletions)
        .await
        .map_err(internal_err("Error deleting observations", "Failed to delete observations"))?;

    Ok(Json(MessageResponse::new("Observations deleted successfully")))
}
