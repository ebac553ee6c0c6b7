//! Schema metadata lookup
//!
//! Column lists are fetched fresh per operation and their order follows the
//! database's declared ordinal position; the engine never reorders them.
//! That order is authoritative both for positional binding and for key
//! inference.

use rusqlite::Connection;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::statement::validate_table_name;

/// List every operator-visible table in the schema, alphabetically
///
/// SQLite's internal `sqlite_*` tables are filtered out. Fails with
/// [`EngineError::Catalog`] when the metadata query itself fails.
pub fn list_tables(conn: &Connection) -> EngineResult<Vec<String>> {
    let mut stmt = conn
        .prepare(
            "SELECT name FROM sqlite_master \
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%' \
             ORDER BY name",
        )
        .map_err(|e| EngineError::catalog(e.to_string()))?;
    let tables = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .and_then(|rows| rows.collect::<Result<Vec<_>, _>>())
        .map_err(|e| EngineError::catalog(e.to_string()))?;
    debug!(count = tables.len(), "listed schema tables");
    Ok(tables)
}

/// Column names of `table`, ordered by declared ordinal position
///
/// A table with no columns and a table that does not exist are treated
/// identically: both return an empty list, and no separate existence check
/// is performed. Callers must treat an empty list as "cannot proceed".
pub fn columns_of(conn: &Connection, table: &str) -> EngineResult<Vec<String>> {
    validate_table_name(table)?;
    let mut stmt = conn
        .prepare("SELECT name FROM pragma_table_info(?1) ORDER BY cid")
        .map_err(|e| EngineError::catalog(e.to_string()))?;
    let columns = stmt
        .query_map([table], |row| row.get::<_, String>(0))
        .and_then(|rows| rows.collect::<Result<Vec<_>, _>>())
        .map_err(|e| EngineError::catalog(e.to_string()))?;
    debug!(table, count = columns.len(), "resolved table columns");
    Ok(columns)
}
