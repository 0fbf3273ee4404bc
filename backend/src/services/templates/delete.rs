use crate::services::error::ServiceError;
use crate::state::AppState;
use crate::store::TemplateStore;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::Template;
use log::info;

/// Actix web handler for `DELETE /api/templates/{template_id}`.
///
/// Marks the template as deleted and returns it. Deleting an already deleted
/// template answers `200 OK` again without touching storage.
pub async fn process(template_id: web::Path<String>, state: web::Data<AppState>) -> impl Responder {
    let store = state.store.lock().await;
    match delete_template(&*store, &template_id) {
        Ok(template) => HttpResponse::Ok().json(template),
        Err(e) => e.error_response(),
    }
}

pub fn delete_template(
    store: &dyn TemplateStore,
    template_id: &str,
) -> Result<Template, ServiceError> {
    let current = store
        .get_including_deleted(template_id)?
        .ok_or_else(|| ServiceError::NotFound(template_id.to_string()))?;
    if current.is_deleted() {
        return Ok(current);
    }
    let deleted = current.soft_delete();
    store.save(&deleted)?;
    info!("Soft-deleted template {}", deleted.id());
    Ok(deleted)
}
