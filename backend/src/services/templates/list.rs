use crate::services::error::ServiceError;
use crate::state::AppState;
use crate::store::TemplateStore;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::requests::ListTemplatesQuery;
use common::Template;

/// Actix web handler for `GET /api/templates?user_id=...`.
///
/// With a `user_id`, returns that user's live templates plus the shared ones;
/// without it, only the shared ones.
pub async fn process(
    query: web::Query<ListTemplatesQuery>,
    state: web::Data<AppState>,
) -> impl Responder {
    let store = state.store.lock().await;
    match list_templates(&*store, query.user_id.as_deref()) {
        Ok(templates) => HttpResponse::Ok().json(templates),
        Err(e) => e.error_response(),
    }
}

pub fn list_templates(
    store: &dyn TemplateStore,
    user_id: Option<&str>,
) -> Result<Vec<Template>, ServiceError> {
    Ok(store.list(user_id)?)
}
