//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tabula")]
#[command(about = "Tabula - ad-hoc table and data manipulation without hand-written SQL")]
#[command(version)]
pub struct Cli {
    /// Path to the SQLite database file (uses an in-memory database when omitted)
    #[arg(long, short = 'd', global = true)]
    pub database: Option<PathBuf>,

    /// Skip confirmation prompts for destructive operations
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Emit results as JSON instead of a grid
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the tables in the schema
    Tables,

    /// Show the column layout of a table as input-field descriptors
    Columns {
        /// Table to inspect
        table: String,
    },

    /// Load and display every row of a table
    Select {
        /// Table to read
        table: String,
    },

    /// Create a table from column definitions (one definition per argument)
    Create {
        /// Name of the new table
        table: String,
        /// Column definitions, e.g. "ID INTEGER PRIMARY KEY" "NAME TEXT"
        #[arg(required = true)]
        definitions: Vec<String>,
    },

    /// Insert one row; values in column order
    Insert {
        /// Target table
        table: String,
        /// One value per column, in the table's column order
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Rewrite the row identified by a key value; values in column order
    Update {
        /// Target table
        table: String,
        /// Current key value of the row to rewrite
        key: String,
        /// One new value per column, in the table's column order
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Delete rows by key value (destructive)
    Delete {
        /// Target table
        table: String,
        /// Key values of the rows to delete
        #[arg(required = true)]
        keys: Vec<String>,
    },

    /// Drop a table (destructive)
    Drop {
        /// Table to drop
        table: String,
    },

    /// Remove every row from a table (destructive)
    Truncate {
        /// Table to empty
        table: String,
    },
}
