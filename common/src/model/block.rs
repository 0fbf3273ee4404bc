use crate::model::component::ComponentId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One placed instance of a component kind inside a template.
///
/// `id` identifies the placement and is unrelated to `component_id`; the same
/// component may appear several times in one template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateBlock {
    pub id: String,
    pub component_id: ComponentId,
}

/// A block as submitted by the editing UI, before validation.
///
/// `component_id` is the raw wire identifier; the validator resolves it
/// against the registry. A missing `id` gets a fresh UUID on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockDraft {
    #[serde(default = "new_block_id")]
    pub id: String,
    pub component_id: String,
}

pub fn new_block_id() -> String {
    Uuid::new_v4().to_string()
}

impl BlockDraft {
    /// Draft for a newly added block, with a generated id.
    pub fn new(component_id: impl Into<String>) -> Self {
        Self {
            id: new_block_id(),
            component_id: component_id.into(),
        }
    }

    pub fn with_id(id: impl Into<String>, component_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            component_id: component_id.into(),
        }
    }
}

impl From<ComponentId> for BlockDraft {
    fn from(component_id: ComponentId) -> Self {
        Self::new(component_id.as_ref())
    }
}

impl From<&TemplateBlock> for BlockDraft {
    fn from(block: &TemplateBlock) -> Self {
        Self::with_id(block.id.clone(), block.component_id.as_ref())
    }
}
