use crate::model::layout::LayoutId;
use serde::Serialize;
use thiserror::Error;

/// Reasons a candidate template is rejected.
///
/// Each value describes exactly one cause. When several preconditions are
/// violated at once, the validator reports the first one in this order:
/// unknown layout, unknown component, block count, duplicate block id.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TemplateError {
    #[error("layout `{layout}` does not exist")]
    UnknownLayout { layout: String },

    /// `position` is the 0-based index of the offending block.
    #[error("block {position} references unknown component `{component_id}`")]
    UnknownComponent {
        position: usize,
        component_id: String,
    },

    #[error("layout `{layout}` needs {expected} blocks but {actual} were given")]
    BlockCountMismatch {
        layout: LayoutId,
        expected: usize,
        actual: usize,
    },

    #[error("block id `{block_id}` is used at positions {first} and {duplicate}")]
    DuplicateBlockId {
        block_id: String,
        first: usize,
        duplicate: usize,
    },

    #[error("template name must not be empty")]
    EmptyName,
}
