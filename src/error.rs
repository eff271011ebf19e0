use thiserror::Error;

/// Typed error hierarchy for the ingestion pipeline.
///
/// Every failure during a population run maps to one of these variants so
/// callers can match on the cause (constraint violation vs. provider
/// outage) instead of parsing strings.
#[derive(Debug, Error)]
pub enum Error {
    #[error("schema setup failed: {0}")]
    Schema(String),

    #[error("invalid ISO 8601 duration: {0}")]
    InvalidDuration(String),

    #[error("no video found with id {0}")]
    VideoNotFound(String),

    #[error("metadata provider error: {0}")]
    Provider(String),

    #[error("constraint violation: {0}")]
    Constraint(String),

    #[error("store error: {0}")]
    Store(#[source] rusqlite::Error),

    #[error("catalog I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog decode error: {0}")]
    Json(#[from] serde_json::Error),
}

/// SQLite reports CHECK and UNIQUE failures under the same top-level error
/// type; split constraint violations into their own variant so the engine
/// and its callers can match on them.
impl From<rusqlite::Error> for Error {
    fn from(e: rusqlite::Error) -> Self {
        if let rusqlite::Error::SqliteFailure(err, _) = &e {
            if err.code == rusqlite::ErrorCode::ConstraintViolation {
                return Error::Constraint(e.to_string());
            }
        }
        Error::Store(e)
    }
}
