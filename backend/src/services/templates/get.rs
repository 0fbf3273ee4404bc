use crate::services::error::ServiceError;
use crate::state::AppState;
use crate::store::TemplateStore;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::Template;

/// Actix web handler for `GET /api/templates/{template_id}`.
///
/// Soft-deleted templates answer `404 Not Found` like missing ones.
pub async fn process(template_id: web::Path<String>, state: web::Data<AppState>) -> impl Responder {
    let store = state.store.lock().await;
    match get_template(&*store, &template_id) {
        Ok(template) => HttpResponse::Ok().json(template),
        Err(e) => e.error_response(),
    }
}

pub fn get_template(store: &dyn TemplateStore, template_id: &str) -> Result<Template, ServiceError> {
    store
        .get(template_id)?
        .ok_or_else(|| ServiceError::NotFound(template_id.to_string()))
}
