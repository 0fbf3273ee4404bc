use actix_web::{HttpResponse, Responder};
use common::ComponentRegistry;

pub async fn process() -> impl Responder {
    HttpResponse::Ok().json(ComponentRegistry::list_by_category())
}
