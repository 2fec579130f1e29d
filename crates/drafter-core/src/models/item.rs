//! Item and sub-item model definitions.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Priority;

/// An entry within a container (a task or outline entry).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Producer-supplied identifier, unique among the items of a draft;
    /// join key for sub-item records
    pub id: String,

    /// Name of the item
    pub name: String,

    /// Detailed description of the item
    pub description: Option<String>,

    /// Priority, [`Priority::None`] when the producer supplied none
    #[serde(default)]
    pub priority: Priority,

    /// Estimated effort in minutes, non-negative when present
    pub estimated_minutes: Option<f64>,

    /// Sub-items in arrival order
    #[serde(default)]
    pub sub_items: Vec<SubItem>,
}

/// A nested entry within an item (a subtask or outline sub-entry).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct SubItem {
    /// Identifier; generated by the accumulator when the producing record
    /// does not supply one
    pub id: String,

    /// Name of the sub-item
    pub name: String,

    /// Detailed description of the sub-item
    pub description: Option<String>,

    /// Estimated effort in minutes, non-negative when present
    pub estimated_minutes: Option<f64>,
}
