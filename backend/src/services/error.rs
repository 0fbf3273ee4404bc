use crate::store::StoreError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::TemplateError;
use log::error;
use thiserror::Error;

/// Failure of a template service call, mapped onto an HTTP response.
///
/// - `Invalid` → `422 Unprocessable Entity` with the validator's diagnostic as JSON.
/// - `NotFound` → `404 Not Found`.
/// - `Store` → `503 Service Unavailable`.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("template `{0}` not found")]
    NotFound(String),

    #[error(transparent)]
    Invalid(#[from] TemplateError),

    #[error("error accessing templates: {0}")]
    Store(#[from] StoreError),
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::Invalid(e) => HttpResponse::build(self.status_code()).json(e),
            ServiceError::Store(e) => {
                error!("Template storage failure: {}", e);
                HttpResponse::build(self.status_code()).body(self.to_string())
            }
            ServiceError::NotFound(_) => {
                HttpResponse::build(self.status_code()).body(self.to_string())
            }
        }
    }
}
