use crate::error::TemplateError;
use crate::model::block::TemplateBlock;
use crate::validation::ValidatedTemplate;
use serde::{Deserialize, Serialize};

/// Outcome of validating a candidate template, for immediate editor feedback.
///
/// On success `rows` holds the blocks already placed into the layout; on
/// failure `error` names the first violated rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<TemplateError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<Vec<TemplateBlock>>>,
}

impl From<Result<ValidatedTemplate, TemplateError>> for ValidationReport {
    fn from(result: Result<ValidatedTemplate, TemplateError>) -> Self {
        match result {
            Ok(validated) => Self {
                valid: true,
                error: None,
                rows: Some(placed_rows(&validated.rows())),
            },
            Err(e) => Self {
                valid: false,
                error: Some(e),
                rows: None,
            },
        }
    }
}

/// Rows of a template, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRows {
    pub template_id: String,
    pub rows: Vec<Vec<TemplateBlock>>,
}

pub fn placed_rows(rows: &[&[TemplateBlock]]) -> Vec<Vec<TemplateBlock>> {
    rows.iter().map(|row| row.to_vec()).collect()
}
