//! Dashboard template composition core.
//!
//! Shared between the backend service and any client: the static component
//! and layout catalogs, the template validator, the `Template` aggregate, and
//! the request/response payloads exchanged over HTTP.

pub mod error;
pub mod model;
pub mod requests;
pub mod responses;
pub mod validation;

pub use error::TemplateError;
pub use model::block::{BlockDraft, TemplateBlock};
pub use model::component::{
    ComponentCategory, ComponentGroup, ComponentId, ComponentMetadata, ComponentRegistry,
};
pub use model::layout::{LayoutCatalog, LayoutDefinition, LayoutError, LayoutId};
pub use model::template::{Template, TemplatePatch, TemplateRecord};
pub use validation::{place_blocks, validate, ValidatedTemplate};
