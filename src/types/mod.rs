//! Data types for the knowledge graph service
//!
//! This module contains all the core data structures used throughout the application.

mod entity;
mod graph;
mod observation;
mod relation;

pub use entity::Entity;
pub use graph::KnowledgeGraph;
pub use observation::{Observation, ObservationDeletion, ObservationResult};
pub use relation::Relation;
