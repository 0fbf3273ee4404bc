//! # Template Service Module
//!
//! This module aggregates all API endpoints related to dashboard templates. It
//! routes requests under `/api/templates` to the handlers in its sub-modules.
//!
//! Every handler that changes a template loads the current state, lets the
//! core (`common::Template`) build and validate the new state, and writes it
//! back only when validation succeeds.
//!
//! ## Sub-modules:
//! - `create`: Creates a template from a name, blocks and a layout.
//! - `list`: Lists the live templates visible to a user.
//! - `get`: Retrieves a single live template.
//! - `update`: Applies a patch to a stored template.
//! - `delete`: Soft-deletes a template.
//! - `validate`: Checks a candidate without storing anything.
//! - `rows`: Returns a template's blocks placed into its layout rows.

mod create;
mod delete;
mod get;
mod list;
mod rows;
mod update;
mod validate;

use actix_web::web::{delete, get, post, put, resource, scope};
use actix_web::Scope;

/// The base path for all template-related API endpoints.
const API_PATH: &str = "/api/templates";

/// Configures and returns the Actix `Scope` for all template-related routes.
///
/// # Registered Routes:
///
/// *   **`POST /`** → `create::process`, `201 Created` with the new template.
/// *   **`GET /?user_id=`** → `list::process`.
/// *   **`POST /validate`** → `validate::process`, always `200 OK` with a
///     `ValidationReport`.
/// *   **`GET /{template_id}`** → `get::process`.
/// *   **`PUT /{template_id}`** → `update::process`, body is a `TemplatePatch`.
/// *   **`DELETE /{template_id}`** → `delete::process`, idempotent.
/// *   **`GET /{template_id}/rows`** → `rows::process`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .service(
            resource("")
                .route(post().to(create::process))
                .route(get().to(list::process)),
        )
        .route("/validate", post().to(validate::process))
        .service(
            resource("/{template_id}")
                .route(get().to(get::process))
                .route(put().to(update::process))
                .route(delete().to(delete::process)),
        )
        .route("/{template_id}/rows", get().to(rows::process))
}
