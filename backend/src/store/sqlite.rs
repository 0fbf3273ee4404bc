use super::{StoreError, TemplateStore};
use chrono::{DateTime, Utc};
use common::{BlockDraft, Template, TemplateRecord};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS templates (
    id          TEXT PRIMARY KEY,
    name        TEXT NOT NULL,
    layout      TEXT NOT NULL,
    blocks      TEXT NOT NULL,
    created_at  TEXT NOT NULL,
    user_id     TEXT,
    is_deleted  INTEGER NOT NULL DEFAULT 0
)";

const SELECT_TEMPLATE: &str =
    "SELECT id, name, layout, blocks, created_at, user_id, is_deleted FROM templates";

/// `TemplateStore` backed by a SQLite database.
pub struct SqliteTemplateStore {
    conn: Connection,
}

/// A `templates` row before its blocks are decoded and validated.
struct StoredRow {
    id: String,
    name: String,
    layout: String,
    blocks: String,
    created_at: DateTime<Utc>,
    user_id: Option<String>,
    is_deleted: bool,
}

impl StoredRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            layout: row.get(2)?,
            blocks: row.get(3)?,
            created_at: row.get(4)?,
            user_id: row.get(5)?,
            is_deleted: row.get(6)?,
        })
    }

    fn into_template(self) -> Result<Template, StoreError> {
        let blocks: Vec<BlockDraft> = serde_json::from_str(&self.blocks)?;
        let id = self.id.clone();
        Template::restore(TemplateRecord {
            id: self.id,
            name: self.name,
            blocks,
            layout: self.layout,
            created_at: self.created_at,
            user_id: self.user_id,
            is_deleted: self.is_deleted,
        })
        .map_err(|source| StoreError::Corrupt { id, source })
    }
}

fn encode_blocks(template: &Template) -> Result<String, StoreError> {
    let drafts: Vec<BlockDraft> = template.blocks().iter().map(BlockDraft::from).collect();
    Ok(serde_json::to_string(&drafts)?)
}

impl SqliteTemplateStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::with_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute(SCHEMA, [])?;
        Ok(Self { conn })
    }

    fn query_one(&self, sql: &str, id: &str) -> Result<Option<Template>, StoreError> {
        let row = self
            .conn
            .query_row(sql, params![id], StoredRow::read)
            .optional()?;
        row.map(StoredRow::into_template).transpose()
    }
}

impl TemplateStore for SqliteTemplateStore {
    fn insert(&self, template: &Template) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO templates (id, name, layout, blocks, created_at, user_id, is_deleted)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                template.id(),
                template.name(),
                template.layout().as_ref(),
                encode_blocks(template)?,
                template.created_at(),
                template.user_id(),
                template.is_deleted(),
            ],
        )?;
        debug!("Inserted template {}", template.id());
        Ok(())
    }

    fn save(&self, template: &Template) -> Result<(), StoreError> {
        let changed = self.conn.execute(
            "UPDATE templates SET name = ?2, layout = ?3, blocks = ?4, is_deleted = ?5
             WHERE id = ?1",
            params![
                template.id(),
                template.name(),
                template.layout().as_ref(),
                encode_blocks(template)?,
                template.is_deleted(),
            ],
        )?;
        if changed == 0 {
            return Err(StoreError::Missing(template.id().to_string()));
        }
        debug!("Saved template {}", template.id());
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Option<Template>, StoreError> {
        self.query_one(
            &format!("{SELECT_TEMPLATE} WHERE id = ?1 AND is_deleted = 0"),
            id,
        )
    }

    fn get_including_deleted(&self, id: &str) -> Result<Option<Template>, StoreError> {
        self.query_one(&format!("{SELECT_TEMPLATE} WHERE id = ?1"), id)
    }

    fn list(&self, user_id: Option<&str>) -> Result<Vec<Template>, StoreError> {
        let mut stmt = self.conn.prepare(&format!(
            "{SELECT_TEMPLATE}
             WHERE is_deleted = 0 AND (user_id IS NULL OR user_id = ?1)
             ORDER BY created_at, id"
        ))?;
        let rows = stmt
            .query_map(params![user_id], StoredRow::read)?
            .collect::<Result<Vec<_>, _>>()?;
        rows.into_iter().map(StoredRow::into_template).collect()
    }
}
