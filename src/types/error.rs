use thiserror::Error;

/// Failures surfaced by the storage layer, classified the way a calling
/// application needs to distinguish them.
#[derive(Debug, Error)]
pub enum DsfError {
    #[error("unique constraint violation: {0}")]
    UniqueViolation(String),
    #[error("foreign key violation: {0}")]
    ForeignKeyViolation(String),
    #[error("not-null violation: {0}")]
    NotNullViolation(String),
    #[error("melt curve arrays differ in length: {temperatures} temperatures vs {fluorescences} fluorescence values")]
    CurveLengthMismatch {
        temperatures: usize,
        fluorescences: usize,
    },
    #[error("melt curve arrays must not be empty")]
    EmptyCurve,
    #[error("database schema version mismatch: found {found}, expected {expected}; run with --reset to rebuild")]
    SchemaVersion { found: i64, expected: i64 },
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<rusqlite::Error> for DsfError {
    fn from(err: rusqlite::Error) -> Self {
        if let rusqlite::Error::SqliteFailure(code, message) = &err {
            let detail = message.clone().unwrap_or_else(|| code.to_string());
            match code.extended_code {
                rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                | rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
                    return Self::UniqueViolation(detail);
                }
                rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY => {
                    return Self::ForeignKeyViolation(detail);
                }
                rusqlite::ffi::SQLITE_CONSTRAINT_NOTNULL => {
                    return Self::NotNullViolation(detail);
                }
                _ => {}
            }
        }
        Self::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for DsfError {
    fn from(err: serde_json::Error) -> Self {
        Self::Storage(err.to_string())
    }
}
