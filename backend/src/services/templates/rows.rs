use crate::services::templates::get::get_template;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::responses::{placed_rows, TemplateRows};

/// Actix web handler for `GET /api/templates/{template_id}/rows`.
///
/// Returns the template's blocks split into the rows of its layout, which is
/// what a renderer draws.
pub async fn process(template_id: web::Path<String>, state: web::Data<AppState>) -> impl Responder {
    let store = state.store.lock().await;
    match get_template(&*store, &template_id) {
        Ok(template) => HttpResponse::Ok().json(TemplateRows {
            template_id: template.id().to_string(),
            rows: placed_rows(&template.rows()),
        }),
        Err(e) => e.error_response(),
    }
}
