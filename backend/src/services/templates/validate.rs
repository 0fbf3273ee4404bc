use actix_web::{web, HttpResponse, Responder};
use common::requests::ValidateTemplateRequest;
use common::responses::ValidationReport;
use common::validate;

/// Actix web handler for `POST /api/templates/validate`.
///
/// Gives the editor immediate feedback on a candidate. Nothing is stored, and
/// the answer is `200 OK` whether or not the candidate is valid.
pub async fn process(payload: web::Json<ValidateTemplateRequest>) -> impl Responder {
    HttpResponse::Ok().json(ValidationReport::from(validate(
        &payload.blocks,
        &payload.layout,
    )))
}
