use crate::services::error::ServiceError;
use crate::state::AppState;
use crate::store::TemplateStore;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::{Template, TemplatePatch};
use log::info;

/// Actix web handler for `PUT /api/templates/{template_id}`.
///
/// The body is a `TemplatePatch`; fields left out keep their stored value.
/// The patched template is validated as a whole, and the stored row is only
/// replaced when that succeeds.
pub async fn process(
    template_id: web::Path<String>,
    payload: web::Json<TemplatePatch>,
    state: web::Data<AppState>,
) -> impl Responder {
    let store = state.store.lock().await;
    match update_template(&*store, &template_id, payload.into_inner()) {
        Ok(template) => {
            info!("Updated template {}", template.id());
            HttpResponse::Ok().json(template)
        }
        Err(e) => e.error_response(),
    }
}

pub fn update_template(
    store: &dyn TemplateStore,
    template_id: &str,
    patch: TemplatePatch,
) -> Result<Template, ServiceError> {
    let current = store
        .get(template_id)?
        .ok_or_else(|| ServiceError::NotFound(template_id.to_string()))?;
    let updated = current.update(patch)?;
    store.save(&updated)?;
    Ok(updated)
}
