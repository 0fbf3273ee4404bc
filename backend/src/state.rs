//! Shared application state injected into every handler as `web::Data`.

use crate::store::sqlite::SqliteTemplateStore;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Clonable handle on the template store.
///
/// Handlers hold the lock for the whole read, validate, write sequence of a
/// request, so two concurrent edits of one template are applied one after the
/// other and the last one wins.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<SqliteTemplateStore>>,
}

impl AppState {
    pub fn new(store: SqliteTemplateStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }
}
