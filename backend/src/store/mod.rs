//! Persistence of `Template` records.
//!
//! The core never talks to storage itself; handlers go through the
//! `TemplateStore` trait. `sqlite::SqliteTemplateStore` is the implementation
//! used by the server.

pub mod sqlite;

use common::{Template, TemplateError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("could not encode blocks: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("stored template `{id}` is inconsistent: {source}")]
    Corrupt {
        id: String,
        #[source]
        source: TemplateError,
    },

    #[error("template `{0}` is not stored")]
    Missing(String),
}

/// Stores and retrieves templates keyed by id.
///
/// Soft-deleted templates stay in storage but are hidden from `get` and `list`.
pub trait TemplateStore {
    /// Stores a new template. Fails if the id is already taken.
    fn insert(&self, template: &Template) -> Result<(), StoreError>;

    /// Replaces the stored state of an existing template.
    fn save(&self, template: &Template) -> Result<(), StoreError>;

    fn get(&self, id: &str) -> Result<Option<Template>, StoreError>;

    fn get_including_deleted(&self, id: &str) -> Result<Option<Template>, StoreError>;

    /// Live templates visible to `user_id`: the user's own plus shared ones.
    /// Without a user, only shared templates. Oldest first.
    fn list(&self, user_id: Option<&str>) -> Result<Vec<Template>, StoreError>;
}
