//! # Catalog Service Module
//!
//! Read-only endpoints feeding the component and layout pickers. Both catalogs
//! are static, so these handlers need no application state.
//!
//! - **`GET /api/catalog/components`**: the component registry grouped by
//!   category, as `[{ "category": "Charts", "components": [...] }, ...]`.
//! - **`GET /api/catalog/layouts`**: every layout definition in catalog order.

mod components;
mod layouts;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/catalog";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/components", get().to(components::process))
        .route("/layouts", get().to(layouts::process))
}
