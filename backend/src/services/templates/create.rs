use crate::services::error::ServiceError;
use crate::state::AppState;
use crate::store::TemplateStore;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::requests::CreateTemplateRequest;
use common::Template;
use log::info;

/// Actix web handler for `POST /api/templates`.
///
/// # Returns
/// - `201 Created` with the stored template.
/// - `422 Unprocessable Entity` with the validation diagnostic.
/// - `503 Service Unavailable` if the template cannot be stored.
pub async fn process(
    payload: web::Json<CreateTemplateRequest>,
    state: web::Data<AppState>,
) -> impl Responder {
    let store = state.store.lock().await;
    match create_template(&*store, payload.into_inner()) {
        Ok(template) => {
            info!(
                "Created template {} with layout {}",
                template.id(),
                template.layout()
            );
            HttpResponse::Created().json(template)
        }
        Err(e) => e.error_response(),
    }
}

pub fn create_template(
    store: &dyn TemplateStore,
    request: CreateTemplateRequest,
) -> Result<Template, ServiceError> {
    let template = Template::create(
        request.name,
        &request.blocks,
        &request.layout,
        request.user_id,
    )?;
    store.insert(&template)?;
    Ok(template)
}
