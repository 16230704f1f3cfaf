//! REST endpoints
//!
//! - `GET /api/graph` - Full graph
//! - `GET /api/graph/search?query=` - Substring search
//! - `POST /api/graph/nodes` - Open nodes by name
//! - `POST|DELETE /api/entities`
//! - `POST|DELETE /api/relations`
//! - `POST|DELETE /api/observations`

pub mod entities;
pub mod graph;
pub mod observations;
pub mod relations;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::error::GraphError;

/// API error response
///
/// Only `error` and `code` reach the client; core error details are logged.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip)]
    pub status: StatusCode,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
            status: StatusCode::BAD_REQUEST,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "INTERNAL_ERROR".to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// Confirmation body for delete endpoints
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Log a core failure and replace it with a fixed client-facing message
pub(crate) fn internal_err(
    context: &'static str,
    message: &'static str,
) -> impl FnOnce(GraphError) -> ApiError {
    move |err| {
        error!(error = %err, "{}", context);
        ApiError::internal(message)
    }
}

/// Pull `field` out of a JSON body as an array of `T`.
///
/// A missing or unparseable body, a missing field, or a non-array field
/// yields 400 with `"<Label> array is required"`. Elements of the wrong shape
/// also yield 400.
pub(crate) fn required_array<T: DeserializeOwned>(
    body: Result<Json<Value>, JsonRejection>,
    field: &str,
    label: &str,
) -> Result<Vec<T>, ApiError> {
    let required = || ApiError::bad_request(format!("{label} array is required"));

    let Json(mut body) = body.map_err(|_| required())?;
    let items = match body.get_mut(field).map(Value::take) {
        Some(Value::Array(items)) => items,
        _ => return Err(required()),
    };

    items
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<Vec<T>, _>>()
        .map_err(|e| ApiError::bad_request(format!("Invalid {field}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_required_array_accepts_array() {
        let names: Vec<String> =
            required_array(Ok(Json(json!({"names": ["a", "b"]}))), "names", "Names").unwrap();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_required_array_rejects_missing_and_non_array() {
        let missing = required_array::<String>(Ok(Json(json!({}))), "names", "Names").unwrap_err();
        assert_eq!(missing.status, StatusCode::BAD_REQUEST);
        assert_eq!(missing.error, "Names array is required");

        let scalar =
            required_array::<String>(Ok(Json(json!({"names": "a"}))), "names", "Names").unwrap_err();
        assert_eq!(scalar.error, "Names array is required");
    }

    #[test]
    fn test_required_array_rejects_bad_elements() {
        let err = required_array::<String>(Ok(Json(json!({"names": [1]}))), "names", "Names")
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.error.starts_with("Invalid names"));
    }
}
