//! # Template Entity
//!
//! `Template` is the aggregate persisted by the backend. Every way of
//! producing one (`create`, `update`, `restore`, deserialization) runs the
//! validator over the full candidate state first, so a `Template` value always
//! satisfies `blocks.len() == layout.total_blocks`.

use crate::error::TemplateError;
use crate::model::block::{BlockDraft, TemplateBlock};
use crate::model::layout::{LayoutDefinition, LayoutId};
use crate::validation::{self, ValidatedTemplate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TemplateRecord", into = "TemplateRecord")]
pub struct Template {
    id: String,
    name: String,
    blocks: Vec<TemplateBlock>,
    layout: &'static LayoutDefinition,
    created_at: DateTime<Utc>,
    user_id: Option<String>,
    is_deleted: bool,
}

/// Flat, unvalidated form of a template, as stored or sent over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRecord {
    pub id: String,
    pub name: String,
    pub blocks: Vec<BlockDraft>,
    pub layout: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub is_deleted: bool,
}

/// Changes requested by an edit. Absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplatePatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub blocks: Option<Vec<BlockDraft>>,
    #[serde(default)]
    pub layout: Option<String>,
}

fn checked_name(name: String) -> Result<String, TemplateError> {
    if name.trim().is_empty() {
        return Err(TemplateError::EmptyName);
    }
    Ok(name)
}

impl Template {
    /// Validates the blocks against the layout and builds a new template with
    /// a fresh id and the current time.
    pub fn create(
        name: impl Into<String>,
        blocks: &[BlockDraft],
        layout_id: &str,
        user_id: Option<String>,
    ) -> Result<Self, TemplateError> {
        let name = checked_name(name.into())?;
        let ValidatedTemplate { blocks, layout } = validation::validate(blocks, layout_id)?;
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name,
            blocks,
            layout,
            created_at: Utc::now(),
            user_id,
            is_deleted: false,
        })
    }

    /// Applies `patch` to a copy of this template and validates the resulting
    /// block/layout pair as a whole. `self` is never modified, so a rejected
    /// patch leaves the caller holding the previous, valid state.
    pub fn update(&self, patch: TemplatePatch) -> Result<Self, TemplateError> {
        let name = match patch.name {
            Some(name) => checked_name(name)?,
            None => self.name.clone(),
        };
        let blocks = patch
            .blocks
            .unwrap_or_else(|| self.blocks.iter().map(BlockDraft::from).collect());
        let layout_id = patch
            .layout
            .unwrap_or_else(|| self.layout.id.as_ref().to_string());

        let validated = validation::validate(&blocks, &layout_id)?;
        Ok(Self {
            name,
            blocks: validated.blocks,
            layout: validated.layout,
            ..self.clone()
        })
    }

    /// Marks the template as deleted. Deleting twice is a no-op.
    pub fn soft_delete(mut self) -> Self {
        self.is_deleted = true;
        self
    }

    /// Rebuilds a template from a stored record, validating it on the way.
    pub fn restore(record: TemplateRecord) -> Result<Self, TemplateError> {
        let name = checked_name(record.name)?;
        let ValidatedTemplate { blocks, layout } =
            validation::validate(&record.blocks, &record.layout)?;
        Ok(Self {
            id: record.id,
            name,
            blocks,
            layout,
            created_at: record.created_at,
            user_id: record.user_id,
            is_deleted: record.is_deleted,
        })
    }

    /// Blocks grouped into the layout's rows, in placement order.
    pub fn rows(&self) -> Vec<&[TemplateBlock]> {
        validation::place_blocks(&self.blocks, self.layout)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn blocks(&self) -> &[TemplateBlock] {
        &self.blocks
    }

    pub fn layout(&self) -> LayoutId {
        self.layout.id
    }

    pub fn layout_definition(&self) -> &'static LayoutDefinition {
        self.layout
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }
}

impl TryFrom<TemplateRecord> for Template {
    type Error = TemplateError;

    fn try_from(record: TemplateRecord) -> Result<Self, Self::Error> {
        Self::restore(record)
    }
}

impl From<Template> for TemplateRecord {
    fn from(template: Template) -> Self {
        Self {
            blocks: template.blocks.iter().map(BlockDraft::from).collect(),
            layout: template.layout.id.as_ref().to_string(),
            id: template.id,
            name: template.name,
            created_at: template.created_at,
            user_id: template.user_id,
            is_deleted: template.is_deleted,
        }
    }
}

