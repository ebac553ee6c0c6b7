//! Target-engine SQL dialect fragments
//!
//! Most statements the engine builds are identical across engines; the two
//! exceptions are cascading drops and truncation, which each engine spells
//! differently (SQLite has no `TRUNCATE` at all).

use serde::{Deserialize, Serialize};

/// Supported database dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// SQLite, the wired driver
    #[default]
    SQLite,
    PostgreSQL,
    MySQL,
    Oracle,
}

impl Dialect {
    /// SQL text for a cascading table drop
    pub fn drop_table_sql(&self, table: &str) -> String {
        match self {
            Dialect::Oracle => format!("DROP TABLE {table} CASCADE CONSTRAINTS"),
            Dialect::PostgreSQL => format!("DROP TABLE {table} CASCADE"),
            Dialect::MySQL | Dialect::SQLite => format!("DROP TABLE {table}"),
        }
    }

    /// SQL text for removing every row from a table
    pub fn truncate_sql(&self, table: &str) -> String {
        match self {
            // SQLite has no TRUNCATE statement; an unqualified DELETE is the
            // documented equivalent.
            Dialect::SQLite => format!("DELETE FROM {table}"),
            _ => format!("TRUNCATE TABLE {table}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_sql_per_dialect() {
        assert_eq!(
            Dialect::Oracle.drop_table_sql("EMPLOYEES"),
            "DROP TABLE EMPLOYEES CASCADE CONSTRAINTS"
        );
        assert_eq!(
            Dialect::PostgreSQL.drop_table_sql("EMPLOYEES"),
            "DROP TABLE EMPLOYEES CASCADE"
        );
        assert_eq!(
            Dialect::SQLite.drop_table_sql("EMPLOYEES"),
            "DROP TABLE EMPLOYEES"
        );
    }

    #[test]
    fn test_truncate_sql_per_dialect() {
        assert_eq!(
            Dialect::Oracle.truncate_sql("EMPLOYEES"),
            "TRUNCATE TABLE EMPLOYEES"
        );
        assert_eq!(Dialect::SQLite.truncate_sql("EMPLOYEES"), "DELETE FROM EMPLOYEES");
    }
}
