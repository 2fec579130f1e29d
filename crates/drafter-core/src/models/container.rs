//! Container model definition.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Item;

/// A top-level grouping within a draft (a section or tasklist).
///
/// The id is producer-supplied and serves as the join key for item records;
/// it is unique among the containers of one draft.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Container {
    /// Producer-supplied identifier, unique among containers
    pub id: String,

    /// Name of the container
    pub name: String,

    /// Detailed description of the container
    pub description: Option<String>,

    /// Items in arrival order
    #[serde(default)]
    pub items: Vec<Item>,
}
