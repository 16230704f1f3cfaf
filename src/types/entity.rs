//! Entity types for the knowledge graph

use serde::{Deserialize, Serialize};

/// Named node in the knowledge graph
///
/// `name` is the only identity key; no other field has to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    #[serde(rename = "entityType")]
    pub entity_type: String,
    #[serde(default)]
    pub observations: Vec<String>,
}

impl Entity {
    /// Create a new entity without observations
    pub fn new(name: impl Into<String>, entity_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entity_type: entity_type.into(),
            observations: Vec::new(),
        }
    }

    /// Create a new entity with observations
    pub fn with_observations(
        name: impl Into<String>,
        entity_type: impl Into<String>,
        observations: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            entity_type: entity_type.into(),
            observations,
        }
    }

    /// Case-insensitive substring match against name, type and observations.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.entity_type.to_lowercase().contains(needle)
            || self
                .observations
                .iter()
                .any(|o| o.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_wire_format() {
        let entity = Entity::with_observations("Alice", "Person", vec!["Lives in NYC".to_string()]);
        let json = serde_json::to_string(&entity).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Alice","entityType":"Person","observations":["Lives in NYC"]}"#
        );
    }

    #[test]
    fn test_entity_observations_default_to_empty() {
        let entity: Entity = serde_json::from_str(r#"{"name":"Bob","entityType":"Person"}"#).unwrap();
        assert!(entity.observations.is_empty());
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let entity = Entity::with_observations("Alice", "Person", vec!["Works at ACME".to_string()]);
        assert!(entity.matches("alice"));
        assert!(entity.matches("pers"));
        assert!(entity.matches("acme"));
        assert!(!entity.matches("bob"));
    }

    #[test]
    fn test_empty_needle_matches_everything() {
        assert!(Entity::new("X", "Y").matches(""));
    }
}
