//! One handler per subcommand
//!
//! Each handler is a thin caller around the engine: resolve columns, build a
//! plan, execute, render. Destructive operations pass through the
//! confirmation gate before the executor is invoked; once invoked, the
//! engine executes unconditionally.

use anyhow::{bail, Context, Result};
use dialoguer::Confirm;
use rusqlite::Connection;
use tracing::info;

use tabula_core::{catalog, executor, field_descriptors, statement, Dialect, FirstColumn, KeyPolicy};

use crate::args::{Cli, Commands};
use crate::grid::{format_affected, format_row_set};

/// Route a parsed command to its handler
pub fn dispatch(cli: &Cli, conn: &Connection) -> Result<()> {
    match &cli.command {
        Commands::Tables => tables(conn, cli.json),
        Commands::Columns { table } => columns(conn, table, cli.json),
        Commands::Select { table } => select(conn, table, cli.json),
        Commands::Create { table, definitions } => create(conn, table, definitions),
        Commands::Insert { table, values } => insert(conn, table, values),
        Commands::Update { table, key, values } => update(conn, table, key, values),
        Commands::Delete { table, keys } => delete(conn, table, keys, cli.yes),
        Commands::Drop { table } => drop_table(conn, table, cli.yes),
        Commands::Truncate { table } => truncate(conn, table, cli.yes),
    }
}

fn tables(conn: &Connection, json: bool) -> Result<()> {
    let tables = catalog::list_tables(conn)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&tables)?);
    } else if tables.is_empty() {
        println!("No tables in the schema.");
    } else {
        for table in tables {
            println!("{table}");
        }
    }
    Ok(())
}

fn columns(conn: &Connection, table: &str, json: bool) -> Result<()> {
    let columns = require_columns(conn, table)?;
    let fields = field_descriptors(&columns, &FirstColumn);
    if json {
        println!("{}", serde_json::to_string_pretty(&fields)?);
    } else {
        for field in fields {
            let marker = if field.is_key { " (key)" } else { "" };
            println!("{}: {}{marker}", field.ordinal, field.name);
        }
    }
    Ok(())
}

fn select(conn: &Connection, table: &str, json: bool) -> Result<()> {
    let columns = require_columns(conn, table)?;
    let plan = statement::build_select_all(table)?;
    let rows = executor::execute_query(conn, &plan, &columns)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", format_row_set(&rows));
    }
    Ok(())
}

fn create(conn: &Connection, table: &str, definitions: &[String]) -> Result<()> {
    let plan = statement::build_create_table(table, &definitions.join("\n"))?;
    executor::execute_update(conn, &plan)?;
    info!(table, "table created");
    println!("Table '{table}' created.");
    Ok(())
}

fn insert(conn: &Connection, table: &str, values: &[String]) -> Result<()> {
    let columns = require_columns(conn, table)?;
    let plan = statement::build_insert(table, &columns, values)?;
    let affected = executor::execute_update(conn, &plan)?;
    println!("{}", format_affected(affected));
    Ok(())
}

fn update(conn: &Connection, table: &str, key: &str, values: &[String]) -> Result<()> {
    let columns = require_columns(conn, table)?;
    let plan = statement::build_update(table, &columns, values, key, &FirstColumn)?;
    let affected = executor::execute_update(conn, &plan)?;
    println!("{}", format_affected(affected));
    Ok(())
}

fn delete(conn: &Connection, table: &str, keys: &[String], assume_yes: bool) -> Result<()> {
    let columns = require_columns(conn, table)?;
    let key_column = FirstColumn.key_column(&columns)?.to_string();
    if !confirmed(
        &format!("Delete {} row(s) from '{table}'? This cannot be undone.", keys.len()),
        assume_yes,
    )? {
        println!("Aborted.");
        return Ok(());
    }
    let deleted = executor::execute_batch_delete_by_key(conn, table, &key_column, keys)?;
    println!("{}", format_affected(deleted));
    Ok(())
}

fn drop_table(conn: &Connection, table: &str, assume_yes: bool) -> Result<()> {
    if !confirmed(
        &format!("Drop table '{table}' and all of its data? This cannot be undone."),
        assume_yes,
    )? {
        println!("Aborted.");
        return Ok(());
    }
    let plan = statement::build_drop(table, Dialect::SQLite)?;
    executor::execute_update(conn, &plan)?;
    println!("Table '{table}' dropped.");
    Ok(())
}

fn truncate(conn: &Connection, table: &str, assume_yes: bool) -> Result<()> {
    if !confirmed(
        &format!("Remove every row from '{table}'? This cannot be undone."),
        assume_yes,
    )? {
        println!("Aborted.");
        return Ok(());
    }
    let plan = statement::build_truncate(table, Dialect::SQLite)?;
    let affected = executor::execute_update(conn, &plan)?;
    println!("{}", format_affected(affected));
    Ok(())
}

/// Resolve a table's columns, refusing to proceed when none are found
///
/// A missing table and a column-less table look identical to the catalog;
/// either way there is nothing to bind against.
fn require_columns(conn: &Connection, table: &str) -> Result<Vec<String>> {
    let columns = catalog::columns_of(conn, table)
        .with_context(|| format!("failed to resolve columns of '{table}'"))?;
    if columns.is_empty() {
        bail!("table '{table}' has no columns or does not exist");
    }
    Ok(columns)
}

fn confirmed(prompt: &str, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .context("confirmation prompt failed")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE EMPLOYEES (ID INTEGER PRIMARY KEY, NAME TEXT);
             INSERT INTO EMPLOYEES VALUES (1, 'Alice');",
        )
        .unwrap();
        conn
    }

    #[test]
    fn test_require_columns_rejects_missing_table() {
        let conn = seeded();
        assert!(require_columns(&conn, "NOWHERE").is_err());
        assert_eq!(require_columns(&conn, "EMPLOYEES").unwrap(), vec!["ID", "NAME"]);
    }

    #[test]
    fn test_insert_then_select_via_handlers() {
        let conn = seeded();
        insert(&conn, "EMPLOYEES", &["2".to_string(), "Bob".to_string()]).unwrap();
        select(&conn, "EMPLOYEES", false).unwrap();

        let rows = executor::execute_query(
            &conn,
            &statement::build_select_all("EMPLOYEES").unwrap(),
            &catalog::columns_of(&conn, "EMPLOYEES").unwrap(),
        )
        .unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_destructive_ops_with_assume_yes() {
        let conn = seeded();
        delete(&conn, "EMPLOYEES", &["1".to_string()], true).unwrap();
        truncate(&conn, "EMPLOYEES", true).unwrap();
        drop_table(&conn, "EMPLOYEES", true).unwrap();
        assert!(catalog::list_tables(&conn).unwrap().is_empty());
    }
}
