//! Error types for the Tabula engine

use thiserror::Error;

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Main error type for the Tabula engine
///
/// A zero-affected-row outcome is a successful result carrying a count of
/// zero, never an error; callers decide how to present it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Schema or metadata query failed
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Empty identifier input or column/value count mismatch
    #[error("Invalid input: {0}")]
    Validation(String),

    /// A key-bearing operation was requested against an empty column list
    #[error("Primary key column could not be determined: the table has no columns")]
    PrimaryKeyUndeterminable,

    /// Statement execution failed at the database level
    #[error("Execution error: {message}")]
    Execution {
        sql_state: Option<String>,
        message: String,
    },
}

impl EngineError {
    /// Create a new catalog error
    pub fn catalog(message: impl Into<String>) -> Self {
        Self::Catalog(message.into())
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a new execution error
    pub fn execution(sql_state: Option<String>, message: impl Into<String>) -> Self {
        Self::Execution {
            sql_state,
            message: message.into(),
        }
    }
}

impl From<rusqlite::Error> for EngineError {
    fn from(error: rusqlite::Error) -> Self {
        let sql_state = match &error {
            rusqlite::Error::SqliteFailure(code, _) => Some(code.extended_code.to_string()),
            _ => None,
        };
        Self::Execution {
            sql_state,
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_error_carries_sqlite_code() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let err = conn
            .execute("INSERT INTO missing_table VALUES (1)", [])
            .unwrap_err();

        match EngineError::from(err) {
            EngineError::Execution { message, .. } => {
                assert!(message.contains("missing_table"));
            }
            other => panic!("expected execution error, got {other:?}"),
        }
    }

    #[test]
    fn test_constructor_helpers() {
        assert_eq!(
            EngineError::catalog("boom"),
            EngineError::Catalog("boom".to_string())
        );
        assert_eq!(
            EngineError::validation("bad"),
            EngineError::Validation("bad".to_string())
        );
    }
}
