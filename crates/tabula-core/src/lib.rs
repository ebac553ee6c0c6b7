//! Tabula engine: schema-driven SQL construction and execution
//!
//! Given a table name, the engine discovers its columns, builds correct
//! parameterized SQL for each supported operation (create, insert, update,
//! delete, drop, truncate, select), executes it over a caller-supplied
//! connection, and interprets the outcome as either an affected-row count
//! or a generic tabular [`RowSet`].
//!
//! The engine renders no UI, manages no transactions across operations, and
//! asks for no confirmation: destructive operations execute unconditionally
//! once called, and the caller owns the confirmation gate.
//!
//! # Example
//!
//! ```
//! use rusqlite::Connection;
//! use tabula_core::{catalog, executor, statement};
//!
//! # fn main() -> tabula_core::EngineResult<()> {
//! let conn = Connection::open_in_memory().expect("open in-memory database");
//!
//! let plan = statement::build_create_table("EMPLOYEES", "ID INTEGER PRIMARY KEY\nNAME TEXT")?;
//! executor::execute_update(&conn, &plan)?;
//!
//! let columns = catalog::columns_of(&conn, "EMPLOYEES")?;
//! let insert = statement::build_insert(
//!     "EMPLOYEES",
//!     &columns,
//!     &["1".to_string(), "Alice".to_string()],
//! )?;
//! assert_eq!(executor::execute_update(&conn, &insert)?, 1);
//!
//! let rows = executor::execute_query(&conn, &statement::build_select_all("EMPLOYEES")?, &columns)?;
//! assert_eq!(rows.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod dialect;
pub mod error;
pub mod executor;
pub mod fields;
pub mod policy;
pub mod row;
pub mod statement;

// Re-export the types callers touch on every operation
pub use dialect::Dialect;
pub use error::{EngineError, EngineResult};
pub use fields::{field_descriptors, FieldDescriptor};
pub use policy::{FirstColumn, KeyPolicy};
pub use row::{set_all, Row, RowSet, SelectionState};
pub use statement::StatementPlan;
