use crate::model::block::BlockDraft;
use serde::{Deserialize, Serialize};

/// Payload of `POST /api/templates`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTemplateRequest {
    pub name: String,
    pub blocks: Vec<BlockDraft>,
    pub layout: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Payload of `POST /api/templates/validate`: a candidate still being edited.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateTemplateRequest {
    pub blocks: Vec<BlockDraft>,
    pub layout: String,
}

/// Query string of `GET /api/templates`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListTemplatesQuery {
    #[serde(default)]
    pub user_id: Option<String>,
}
