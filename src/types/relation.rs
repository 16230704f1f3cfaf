//! Relation types for the knowledge graph

use serde::{Deserialize, Serialize};

/// Directed, typed edge between two entity names
///
/// Identity is the full `(from, to, relationType)` triple. Endpoints are not
/// checked against existing entities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relation {
    pub from: String,
    pub to: String,
    #[serde(rename = "relationType")]
    pub relation_type: String,
}

impl Relation {
    /// Create a new relation
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        relation_type: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            relation_type: relation_type.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_wire_format() {
        let relation = Relation::new("Alice", "Bob", "knows");
        let json = serde_json::to_string(&relation).unwrap();
        assert_eq!(json, r#"{"from":"Alice","to":"Bob","relationType":"knows"}"#);
    }

    #[test]
    fn test_identity_includes_type() {
        assert_ne!(
            Relation::new("A", "B", "knows"),
            Relation::new("A", "B", "likes")
        );
        assert_eq!(
            Relation::new("A", "B", "knows"),
            Relation::new("A", "B", "knows")
        );
    }
}
