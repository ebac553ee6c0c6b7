//! Result rendering for the terminal

use tabula_core::RowSet;

/// Format a row set as a text grid
pub fn format_row_set(set: &RowSet) -> String {
    let mut output = String::new();

    output.push_str(&format!("| {} |\n", set.columns.join(" | ")));
    output.push_str(&format!(
        "|{}|\n",
        set.columns.iter().map(|_| "---").collect::<Vec<_>>().join("|")
    ));

    for row in &set.rows {
        let cells: Vec<&str> = (0..set.columns.len())
            .map(|i| row.get(i).unwrap_or("NULL"))
            .collect();
        output.push_str(&format!("| {} |\n", cells.join(" | ")));
    }

    output.push_str(&format!("{} row(s)\n", set.len()));
    output
}

/// Report the outcome of a write
///
/// Zero affected rows is a successful outcome that deserves a distinct
/// message, not an error.
pub fn format_affected(affected: usize) -> String {
    if affected == 0 {
        "Statement completed, but no rows were affected.".to_string()
    } else {
        format!("{affected} row(s) affected.")
    }
}
