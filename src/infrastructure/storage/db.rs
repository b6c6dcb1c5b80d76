use crate::domain::error::SqlChatError;
use crate::domain::model::{ExecutionOutcome, ExtractedQuery, Row, SqlValue};
use crate::domain::traits::QueryStore;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio_rusqlite::Connection;
use tracing::{debug, error, warn};

/// SQLite store that opens a fresh connection for every query.
///
/// Holds only the path, so concurrent executions never share a handle.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl QueryStore for SqliteStore {
    async fn execute(&self, query: &ExtractedQuery) -> ExecutionOutcome {
        match run_query(&self.path, query.as_str()).await {
            Ok(rows) => {
                debug!("Query returned {} rows", rows.len());
                ExecutionOutcome::Rows(rows)
            }
            Err(msg) => {
                error!("SQL execution error: {} for query: {}", msg, query);
                ExecutionOutcome::ExecutionError(msg)
            }
        }
    }
}

// Open, run, materialize, close. The connection is closed on every path.
async fn run_query(path: &Path, sql: &str) -> Result<Vec<Row>, String> {
    let conn = Connection::open(path.to_path_buf())
        .await
        .map_err(|e| e.to_string())?;

    let sql = sql.to_string();
    let result = conn
        .call(move |conn| {
            let mut stmt = conn.prepare(&sql)?;
            let column_count = stmt.column_count();
            let mut rows = stmt.query([])?;

            let mut materialized: Vec<Row> = Vec::new();
            while let Some(row) = rows.next()? {
                let mut values = Vec::with_capacity(column_count);
                for idx in 0..column_count {
                    values.push(SqlValue::from(row.get_ref(idx)?));
                }
                materialized.push(values);
            }
            Ok::<_, rusqlite::Error>(materialized)
        })
        .await;

    if let Err(e) = conn.close().await {
        warn!("Failed to close database connection: {}", e);
    }

    result.map_err(|e| match e {
        tokio_rusqlite::Error::Error(inner) => inner.to_string(),
        other => other.to_string(),
    })
}

/// Row counts for the tables the prompt describes, for `--status`.
pub async fn table_counts(path: &Path) -> Result<Vec<(String, i64)>, SqlChatError> {
    let db = Connection::open(path.to_path_buf()).await?;

    let counts = db
        .call(|conn| {
            let mut counts = Vec::new();
            for table in ["Students", "Education", "Parents"] {
                let exists: bool = conn.query_row(
                    "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type = 'table' AND name = ?1",
                    [table],
                    |row| row.get(0),
                )?;
                if exists {
                    let n: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                        row.get(0)
                    })?;
                    counts.push((table.to_string(), n));
                }
            }
            Ok::<_, rusqlite::Error>(counts)
        })
        .await?;

    db.close().await?;
    Ok(counts)
}
