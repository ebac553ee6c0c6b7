//! Parameterized statement construction
//!
//! Pure functions from (table, columns, values) to a [`StatementPlan`]; no
//! I/O happens here, so every validation failure surfaces before the
//! database is touched.
//!
//! Identifiers (table and column names) are interpolated as literal SQL
//! text without quoting. The engine trusts them to come either from the
//! catalog itself or from operator-typed DDL; bind values, by contrast, are
//! always passed as positional parameters and never spliced into the text.

use serde::{Deserialize, Serialize};

use crate::dialect::Dialect;
use crate::error::{EngineError, EngineResult};
use crate::policy::KeyPolicy;

/// SQL text plus its ordered bind values
///
/// Produced by the builders below, consumed exactly once by the executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementPlan {
    /// The statement text with `?` placeholders
    pub sql: String,
    /// Bind values, in placeholder order
    pub params: Vec<String>,
}

impl StatementPlan {
    fn without_params(sql: String) -> Self {
        Self {
            sql,
            params: Vec::new(),
        }
    }
}

/// Check the table-name invariant: non-empty, no statement terminator
pub fn validate_table_name(table: &str) -> EngineResult<()> {
    if table.trim().is_empty() {
        return Err(EngineError::validation("table name must not be empty"));
    }
    if table.contains(';') {
        return Err(EngineError::validation(format!(
            "table name '{table}' must not contain a statement terminator"
        )));
    }
    Ok(())
}

/// Build a `CREATE TABLE` statement from raw column-definition text
///
/// `raw_column_definitions` holds one definition per line (for example
/// `ID NUMBER PRIMARY KEY`); lines are joined with commas. The definition
/// text is operator-supplied DDL and is embedded verbatim, with no bind
/// parameters.
pub fn build_create_table(table: &str, raw_column_definitions: &str) -> EngineResult<StatementPlan> {
    validate_table_name(table)?;
    let definitions: Vec<&str> = raw_column_definitions
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if definitions.is_empty() {
        return Err(EngineError::validation(
            "column definitions must not be empty",
        ));
    }
    Ok(StatementPlan::without_params(format!(
        "CREATE TABLE {table} ({})",
        definitions.join(", ")
    )))
}

/// Build an `INSERT` with one positional placeholder per column
///
/// `values` must line up 1:1 with `columns`; the bind order is the column
/// order.
pub fn build_insert(
    table: &str,
    columns: &[String],
    values: &[String],
) -> EngineResult<StatementPlan> {
    validate_table_name(table)?;
    if columns.is_empty() {
        return Err(EngineError::validation("column list must not be empty"));
    }
    if values.len() != columns.len() {
        return Err(EngineError::validation(format!(
            "expected {} value(s) for {} column(s), got {}",
            columns.len(),
            columns.len(),
            values.len()
        )));
    }
    let placeholders = vec!["?"; columns.len()].join(",");
    Ok(StatementPlan {
        sql: format!(
            "INSERT INTO {table} ({}) VALUES ({placeholders})",
            columns.join(",")
        ),
        params: values.to_vec(),
    })
}

/// Build a `SELECT * FROM <table>` statement
pub fn build_select_all(table: &str) -> EngineResult<StatementPlan> {
    validate_table_name(table)?;
    Ok(StatementPlan::without_params(format!("SELECT * FROM {table}")))
}

/// Build an `UPDATE` that rewrites every column of one row
///
/// The row is identified by the column the [`KeyPolicy`] picks; the bind
/// order is all `new_values` in column order followed by `key_value`.
pub fn build_update(
    table: &str,
    columns: &[String],
    new_values: &[String],
    key_value: &str,
    policy: &dyn KeyPolicy,
) -> EngineResult<StatementPlan> {
    validate_table_name(table)?;
    let key_column = policy.key_column(columns)?;
    if new_values.len() != columns.len() {
        return Err(EngineError::validation(format!(
            "expected {} value(s) for {} column(s), got {}",
            columns.len(),
            columns.len(),
            new_values.len()
        )));
    }
    let assignments: Vec<String> = columns.iter().map(|col| format!("{col} = ?")).collect();
    let mut params = new_values.to_vec();
    params.push(key_value.to_string());
    Ok(StatementPlan {
        sql: format!(
            "UPDATE {table} SET {} WHERE {key_column} = ?",
            assignments.join(", ")
        ),
        params,
    })
}

/// Build a single-row `DELETE` template keyed on `key_column`
///
/// The key value is bound per row at execution time, so the plan carries no
/// parameters of its own.
pub fn build_delete_by_key(table: &str, key_column: &str) -> EngineResult<StatementPlan> {
    validate_table_name(table)?;
    if key_column.trim().is_empty() {
        return Err(EngineError::validation("key column must not be empty"));
    }
    Ok(StatementPlan::without_params(format!(
        "DELETE FROM {table} WHERE {key_column} = ?"
    )))
}

/// Build a cascading `DROP TABLE` in the dialect's spelling
pub fn build_drop(table: &str, dialect: Dialect) -> EngineResult<StatementPlan> {
    validate_table_name(table)?;
    Ok(StatementPlan::without_params(dialect.drop_table_sql(table)))
}

/// Build a statement that removes every row, in the dialect's spelling
pub fn build_truncate(table: &str, dialect: Dialect) -> EngineResult<StatementPlan> {
    validate_table_name(table)?;
    Ok(StatementPlan::without_params(dialect.truncate_sql(table)))
}
