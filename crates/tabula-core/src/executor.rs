//! Statement execution against a live connection
//!
//! Every function takes the connection handle explicitly; the engine never
//! owns ambient connection state, retries, or re-establishes connections.
//! All calls block until the database answers.

use rusqlite::types::ValueRef;
use rusqlite::{params_from_iter, Connection};
use tracing::{debug, info, warn};

use crate::error::EngineResult;
use crate::row::{Row, RowSet};
use crate::statement::{build_delete_by_key, StatementPlan};

/// Execute a statement that returns no result set
///
/// Returns the affected-row count; zero is a valid outcome distinct from
/// failure (the statement simply matched nothing).
pub fn execute_update(conn: &Connection, plan: &StatementPlan) -> EngineResult<usize> {
    debug!(sql = %plan.sql, binds = plan.params.len(), "executing statement");
    let affected = conn.execute(&plan.sql, params_from_iter(plan.params.iter()))?;
    if affected == 0 {
        warn!(sql = %plan.sql, "statement affected no rows");
    }
    Ok(affected)
}

/// Execute a read-only statement and materialize the result
///
/// Every cell of every `columns` entry is read as its textual form; dates,
/// numbers and other native types lose their typing, consistent with
/// treating all cell data uniformly as text for display and editing.
/// Selection flags default to false.
pub fn execute_query(
    conn: &Connection,
    plan: &StatementPlan,
    columns: &[String],
) -> EngineResult<RowSet> {
    debug!(sql = %plan.sql, binds = plan.params.len(), "executing query");
    let mut stmt = conn.prepare(&plan.sql)?;
    let mut db_rows = stmt.query(params_from_iter(plan.params.iter()))?;

    let mut rows = Vec::new();
    while let Some(db_row) = db_rows.next()? {
        let mut values = Vec::with_capacity(columns.len());
        for index in 0..columns.len() {
            values.push(cell_as_text(db_row.get_ref(index)?));
        }
        rows.push(Row::new(values));
    }
    debug!(rows = rows.len(), "query materialized");
    Ok(RowSet::new(columns.to_vec(), rows))
}

/// Delete one row per key value through a single prepared statement
///
/// The template is prepared once and executed once per key; per-statement
/// affected counts are summed, so a key that matches nothing contributes
/// zero rather than failing (it may have been removed already). The batch
/// is best-effort: rows deleted before a mid-batch failure stay deleted
/// unless the caller wraps the call in a transaction of its own.
pub fn execute_batch_delete_by_key(
    conn: &Connection,
    table: &str,
    key_column: &str,
    key_values: &[String],
) -> EngineResult<usize> {
    let plan = build_delete_by_key(table, key_column)?;
    debug!(sql = %plan.sql, keys = key_values.len(), "executing batch delete");

    let mut stmt = conn.prepare(&plan.sql)?;
    let mut total = 0;
    for key in key_values {
        total += stmt.execute([key])?;
    }
    info!(table, total, "batch delete finished");
    Ok(total)
}

fn cell_as_text(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(n) => Some(n.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(text) => Some(String::from_utf8_lossy(text).into_owned()),
        ValueRef::Blob(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::statement::{build_insert, build_select_all};

    fn employees() -> (Connection, Vec<String>) {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE EMPLOYEES (ID INTEGER PRIMARY KEY, NAME TEXT, AGE INTEGER);
             INSERT INTO EMPLOYEES VALUES (1, 'Alice', 30), (2, 'Bob', NULL);",
        )
        .unwrap();
        let columns = vec!["ID".to_string(), "NAME".to_string(), "AGE".to_string()];
        (conn, columns)
    }

    #[test]
    fn test_query_materializes_text_cells() {
        let (conn, columns) = employees();
        let plan = build_select_all("EMPLOYEES").unwrap();
        let set = execute_query(&conn, &plan, &columns).unwrap();

        assert_eq!(set.columns, columns);
        assert_eq!(set.len(), 2);
        // Non-text types come back as text; NULL stays NULL.
        assert_eq!(set.rows[0].get(0), Some("1"));
        assert_eq!(set.rows[0].get(2), Some("30"));
        assert_eq!(set.rows[1].get(2), None);
        assert!(set.rows.iter().all(|row| !row.selected));
    }

    #[test]
    fn test_update_returns_affected_count() {
        let (conn, columns) = employees();
        let plan = build_insert(
            "EMPLOYEES",
            &columns,
            &["3".to_string(), "Carol".to_string(), "41".to_string()],
        )
        .unwrap();
        assert_eq!(execute_update(&conn, &plan).unwrap(), 1);
    }

    #[test]
    fn test_zero_affected_is_success() {
        let (conn, _) = employees();
        let plan = StatementPlan {
            sql: "DELETE FROM EMPLOYEES WHERE ID = ?".to_string(),
            params: vec!["99".to_string()],
        };
        assert_eq!(execute_update(&conn, &plan).unwrap(), 0);
    }

    #[test]
    fn test_constraint_violation_is_execution_error() {
        let (conn, columns) = employees();
        // Duplicate primary key.
        let plan = build_insert(
            "EMPLOYEES",
            &columns,
            &["1".to_string(), "Dup".to_string(), "1".to_string()],
        )
        .unwrap();
        let err = execute_update(&conn, &plan).unwrap_err();
        match err {
            EngineError::Execution { sql_state, message } => {
                assert!(sql_state.is_some());
                assert!(message.to_lowercase().contains("unique"));
            }
            other => panic!("expected execution error, got {other:?}"),
        }
    }

    #[test]
    fn test_batch_delete_sums_counts_and_tolerates_missing_keys() {
        let (conn, _) = employees();
        let deleted = execute_batch_delete_by_key(
            &conn,
            "EMPLOYEES",
            "ID",
            &["2".to_string(), "5".to_string()],
        )
        .unwrap();
        assert_eq!(deleted, 1);
    }

    #[test]
    fn test_read_after_read_is_idempotent() {
        let (conn, columns) = employees();
        let select = build_select_all("EMPLOYEES").unwrap();

        let first = execute_query(&conn, &select, &columns).unwrap();
        // A no-op write in between must not change what a re-read sees.
        let noop = StatementPlan {
            sql: "UPDATE EMPLOYEES SET NAME = NAME WHERE ID = ?".to_string(),
            params: vec!["99".to_string()],
        };
        assert_eq!(execute_update(&conn, &noop).unwrap(), 0);
        let second = execute_query(&conn, &select, &columns).unwrap();

        assert_eq!(first.len(), second.len());
    }
}
