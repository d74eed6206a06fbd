use sqlx::{
    ConnectOptions, Connection, SqliteConnection,
    sqlite::SqliteConnectOptions,
};
use std::path::Path;
use tracing::{debug, info};

use crate::{error::StorageError, models::SummaryRecord};

const CREATE_SUMMARIES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS summaries (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        document TEXT,
        summary TEXT
    )
"#;

/// Append-only SQLite log of processed documents.
///
/// Each operation opens its own connection and closes it when done.
#[derive(Debug, Clone)]
pub struct SummaryStore {
    options: SqliteConnectOptions,
}

impl SummaryStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        Self { options }
    }

    async fn connect(&self) -> Result<SqliteConnection, StorageError> {
        Ok(self.options.connect().await?)
    }

    /// Create the summaries table if it does not exist yet.
    pub async fn init(&self) -> Result<(), StorageError> {
        let mut conn = self.connect().await?;
        sqlx::query(CREATE_SUMMARIES_TABLE)
            .execute(&mut conn)
            .await?;
        conn.close().await?;

        info!(
            "Summary store ready at {}",
            self.options.get_filename().display()
        );
        Ok(())
    }

    /// Append a record and return its assigned id.
    pub async fn insert(&self, document: &str, summary: &str) -> Result<i64, StorageError> {
        let mut conn = self.connect().await?;
        let id = sqlx::query("INSERT INTO summaries (document, summary) VALUES (?, ?)")
            .bind(document)
            .bind(summary)
            .execute(&mut conn)
            .await?
            .last_insert_rowid();
        conn.close().await?;

        debug!(record_id = id, "Summary record inserted");
        Ok(id)
    }

    /// Read back every record in id order. Not exposed over HTTP.
    pub(crate) async fn records(&self) -> Result<Vec<SummaryRecord>, StorageError> {
        let mut conn = self.connect().await?;
        let records = sqlx::query_as::<_, SummaryRecord>(
            "SELECT id, document, summary FROM summaries ORDER BY id",
        )
        .fetch_all(&mut conn)
        .await?;
        conn.close().await?;
        Ok(records)
    }
}
