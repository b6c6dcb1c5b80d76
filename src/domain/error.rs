use thiserror::Error;

#[derive(Error, Debug)]
pub enum SqlChatError {
    #[error("Database error: {0}")]
    Database(#[from] tokio_rusqlite::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Model call failed: {0}")]
    ModelCall(String),
}

/// Why a model response could not be turned into a query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionFailure {
    #[error("No response from the model.")]
    NoResponse,

    #[error(
        "No SQL code block found in the model's response, and the raw text doesn't appear to be SQL."
    )]
    NoSqlBlockFound,

    #[error("No valid SQL (empty or missing SELECT) found in response.")]
    InvalidOrEmptySql,
}
