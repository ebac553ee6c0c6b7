//! Row-identifier inference policy
//!
//! Update and delete statements need a column that uniquely identifies a
//! row. The engine does not look up real primary-key metadata; the default
//! policy treats the first column (by ordinal position) as the key. This is
//! a documented limitation inherited from the workbench this engine grew out
//! of, kept deliberately: swap in a metadata-driven [`KeyPolicy`] to harden
//! it without touching any call contract.

use crate::error::{EngineError, EngineResult};

/// Chooses the column used in `WHERE <key> = ?` clauses
pub trait KeyPolicy: Send + Sync {
    /// Pick the key column out of a table's ordered column list
    ///
    /// Fails with [`EngineError::PrimaryKeyUndeterminable`] when no column
    /// can be chosen.
    fn key_column<'a>(&self, columns: &'a [String]) -> EngineResult<&'a str>;
}

/// Default policy: the first column is the row identifier
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstColumn;

impl KeyPolicy for FirstColumn {
    fn key_column<'a>(&self, columns: &'a [String]) -> EngineResult<&'a str> {
        columns
            .first()
            .map(String::as_str)
            .ok_or(EngineError::PrimaryKeyUndeterminable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_column_is_the_key() {
        let columns = vec!["ID".to_string(), "NAME".to_string()];
        assert_eq!(FirstColumn.key_column(&columns).unwrap(), "ID");
    }

    #[test]
    fn test_empty_column_list_is_undeterminable() {
        assert_eq!(
            FirstColumn.key_column(&[]).unwrap_err(),
            EngineError::PrimaryKeyUndeterminable
        );
    }
}
