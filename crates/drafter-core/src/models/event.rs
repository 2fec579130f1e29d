//! Update events emitted while a draft is being built.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Container, Item, SubItem};

/// Discrete update describing one applied mutation (delta style).
///
/// Each event carries the entity it introduced, so a consumer can apply a
/// minimal patch to its own copy of the tree without re-reading the full
/// draft. Events are plain serializable data; the tag field is `event`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum DraftEvent {
    /// The draft received its name and description.
    #[serde(rename_all = "camelCase")]
    DraftInitialized {
        name: String,
        description: Option<String>,
    },

    /// A new container was appended to the draft.
    #[serde(rename_all = "camelCase")]
    ContainerAdded { container: Container },

    /// A new item was appended to an existing container.
    #[serde(rename_all = "camelCase")]
    ItemAdded { container_id: String, item: Item },

    /// A new sub-item was appended to an existing item.
    #[serde(rename_all = "camelCase")]
    SubItemAdded { item_id: String, sub_item: SubItem },

    /// The terminal record arrived; the draft stopped building.
    #[serde(rename_all = "camelCase")]
    DraftCompleted { message: String },
}
