use actix_web::{HttpResponse, Responder};
use common::LayoutCatalog;

pub async fn process() -> impl Responder {
    HttpResponse::Ok().json(LayoutCatalog::all())
}
