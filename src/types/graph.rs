//! Knowledge graph container type

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Entity, Relation};

/// Knowledge graph containing entities and relations
///
/// This is the single unit of persistence: it is always loaded and saved whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct KnowledgeGraph {
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub relations: Vec<Relation>,
}

impl KnowledgeGraph {
    /// Create an empty knowledge graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a knowledge graph with entities and relations
    pub fn with_data(entities: Vec<Entity>, relations: Vec<Relation>) -> Self {
        Self {
            entities,
            relations,
        }
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.relations.is_empty()
    }

    /// Get the number of entities
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Get the number of relations
    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }

    /// Find an entity by exact name
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.name == name)
    }

    /// Build a subgraph from the selected entities.
    ///
    /// A relation is kept only when both of its endpoints are among the
    /// selected entities.
    pub fn subgraph(entities: Vec<Entity>, relations: Vec<Relation>) -> Self {
        let names: HashSet<&str> = entities.iter().map(|e| e.name.as_str()).collect();
        let relations = relations
            .into_iter()
            .filter(|r| names.contains(r.from.as_str()) && names.contains(r.to.as_str()))
            .collect();

        Self {
            entities,
            relations,
        }
    }
}
