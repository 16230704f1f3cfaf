//! Observation types for entity updates

use serde::{Deserialize, Serialize};

/// Observations to add to an entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    #[serde(rename = "entityName")]
    pub entity_name: String,
    pub contents: Vec<String>,
}

impl Observation {
    /// Create a new observation
    pub fn new(entity_name: impl Into<String>, contents: Vec<String>) -> Self {
        Self {
            entity_name: entity_name.into(),
            contents,
        }
    }
}

/// Observations actually appended to one entity by an add request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationResult {
    #[serde(rename = "entityName")]
    pub entity_name: String,
    #[serde(rename = "addedObservations")]
    pub added_observations: Vec<String>,
}

/// Observation deletion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservationDeletion {
    #[serde(rename = "entityName")]
    pub entity_name: String,
    pub observations: Vec<String>,
}

impl ObservationDeletion {
    /// Create a new observation deletion request
    pub fn new(entity_name: impl Into<String>, observations: Vec<String>) -> Self {
        Self {
            entity_name: entity_name.into(),
            observations,
        }
    }
}
