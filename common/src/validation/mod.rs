//! # Template Validator
//!
//! Decides whether a list of candidate blocks and a layout identifier may
//! become a `Template`, and maps validated blocks onto the layout's rows.
//!
//! `validate` checks, in order, and stops at the first failure:
//! 1. the layout exists in the `LayoutCatalog`;
//! 2. every block references a component in the `ComponentRegistry`;
//! 3. the block count equals the layout's `total_blocks`;
//! 4. block ids are unique.
//!
//! Both functions are pure: they read only their arguments and the static
//! catalogs.

use crate::error::TemplateError;
use crate::model::block::{BlockDraft, TemplateBlock};
use crate::model::component::ComponentRegistry;
use crate::model::layout::{LayoutCatalog, LayoutDefinition};
use log::debug;
use std::collections::HashMap;

/// Blocks and layout that passed `validate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedTemplate {
    pub blocks: Vec<TemplateBlock>,
    pub layout: &'static LayoutDefinition,
}

impl ValidatedTemplate {
    pub fn rows(&self) -> Vec<&[TemplateBlock]> {
        place_blocks(&self.blocks, self.layout)
    }
}

pub fn validate(blocks: &[BlockDraft], layout_id: &str) -> Result<ValidatedTemplate, TemplateError> {
    let result = check(blocks, layout_id);
    if let Err(e) = &result {
        debug!("Rejected template for layout `{}`: {}", layout_id, e);
    }
    result
}

fn check(blocks: &[BlockDraft], layout_id: &str) -> Result<ValidatedTemplate, TemplateError> {
    let layout = LayoutCatalog::find(layout_id).ok_or_else(|| TemplateError::UnknownLayout {
        layout: layout_id.to_string(),
    })?;

    let resolved = blocks
        .iter()
        .enumerate()
        .map(|(position, draft)| {
            ComponentRegistry::find(&draft.component_id)
                .map(|meta| TemplateBlock {
                    id: draft.id.clone(),
                    component_id: meta.id,
                })
                .ok_or_else(|| TemplateError::UnknownComponent {
                    position,
                    component_id: draft.component_id.clone(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if resolved.len() != layout.total_blocks {
        return Err(TemplateError::BlockCountMismatch {
            layout: layout.id,
            expected: layout.total_blocks,
            actual: resolved.len(),
        });
    }

    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(resolved.len());
    for (position, block) in resolved.iter().enumerate() {
        if let Some(&first) = seen.get(block.id.as_str()) {
            return Err(TemplateError::DuplicateBlockId {
                block_id: block.id.clone(),
                first,
                duplicate: position,
            });
        }
        seen.insert(block.id.as_str(), position);
    }

    Ok(ValidatedTemplate {
        blocks: resolved,
        layout,
    })
}

/// Splits `blocks` into consecutive runs, one per row, whose lengths follow
/// `layout.structure`. Block order alone decides placement.
///
/// Expects input that passed `validate`. Given fewer blocks than slots, the
/// trailing rows come back short or empty instead of panicking.
pub fn place_blocks<'a>(
    blocks: &'a [TemplateBlock],
    layout: &LayoutDefinition,
) -> Vec<&'a [TemplateBlock]> {
    let mut rest = blocks;
    layout
        .structure
        .iter()
        .map(|&slots| {
            let (row, tail) = rest.split_at(slots.min(rest.len()));
            rest = tail;
            row
        })
        .collect()
}
