//! Draft model definition and related functionality.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Container, DraftSummary};

/// The root document progressively assembled from a record stream.
///
/// A draft starts empty and building; the accumulator mutates it one record
/// at a time until the terminal record flips [`is_building`](Self::is_building)
/// to `false`. Container order is arrival order and is meaningful for
/// rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    /// Build identity, stable for the lifetime of one build
    pub id: String,

    /// Name of the draft (empty until the init record arrives)
    pub name: String,

    /// Detailed description of the draft
    pub description: Option<String>,

    /// Top-level containers in arrival order
    pub containers: Vec<Container>,

    /// Live entity counts, kept exact after every mutation
    pub summary: DraftSummary,

    /// Free-text completion message, empty until the terminal record
    pub message: String,

    /// Whether the stream is still producing
    pub is_building: bool,

    /// Timestamp when this build started (UTC)
    pub created_at: Timestamp,
}

impl Draft {
    /// Creates an empty, building draft under the given identity.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            description: None,
            containers: Vec::new(),
            summary: DraftSummary::default(),
            message: String::new(),
            is_building: true,
            created_at: Timestamp::now(),
        }
    }

    /// Looks up a container by id.
    pub fn container(&self, id: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.id == id)
    }
}
