//! Draft summary counts.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Container, Draft};

/// Live entity counts for a draft.
///
/// The accumulator maintains these incrementally alongside every insertion;
/// after any processed record they equal the actual number of entities in
/// the tree, never approximate and never stale.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct DraftSummary {
    /// Number of containers in the draft
    pub container_count: u32,

    /// Number of items across all containers
    pub item_count: u32,

    /// Number of sub-items across all items
    pub sub_item_count: u32,
}

impl DraftSummary {
    /// Recomputes the counts by walking a container tree.
    pub fn recount(containers: &[Container]) -> Self {
        let container_count = containers.len() as u32;
        let item_count = containers.iter().map(|c| c.items.len() as u32).sum();
        let sub_item_count = containers
            .iter()
            .flat_map(|c| c.items.iter())
            .map(|i| i.sub_items.len() as u32)
            .sum();

        Self {
            container_count,
            item_count,
            sub_item_count,
        }
    }
}

impl From<&Draft> for DraftSummary {
    fn from(draft: &Draft) -> Self {
        Self::recount(&draft.containers)
    }
}
