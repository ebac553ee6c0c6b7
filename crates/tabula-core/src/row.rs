//! Generic tabular result model
//!
//! A [`RowSet`] is one query's materialized result: an ordered column list
//! plus rows of text cells aligned 1:1 with it. Rows carry a selection flag
//! used only by multi-row operations (batch delete); the tri-state
//! [`SelectionState`] summary drives a "select all" control in whatever
//! layer renders the grid. The engine holds no reference to any visual
//! control: callers toggle flags and poll the recomputed summary.

use serde::{Deserialize, Serialize};

/// One result row: text cells plus a selection flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Cell values in column order; `None` is SQL NULL
    pub values: Vec<Option<String>>,
    /// Marked for a pending batch operation
    #[serde(default)]
    pub selected: bool,
}

impl Row {
    /// Create an unselected row from its cell values
    pub fn new(values: Vec<Option<String>>) -> Self {
        Self {
            values,
            selected: false,
        }
    }

    /// Cell value by column index, `None` for NULL or out-of-range
    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).and_then(|v| v.as_deref())
    }
}

/// Ordered columns plus the rows of one query result
///
/// Owned by the caller that issued the query and replaced wholesale on every
/// reload; there is no incremental diffing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowSet {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl RowSet {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Flip one row's selection flag and return the recomputed summary
    ///
    /// Returns `None` when `index` is out of range.
    pub fn toggle(&mut self, index: usize) -> Option<SelectionState> {
        let row = self.rows.get_mut(index)?;
        row.selected = !row.selected;
        Some(SelectionState::summarize(&self.rows))
    }

    /// Set every row's selection flag, as a "select all" control does
    pub fn set_all(&mut self, value: bool) {
        set_all(&mut self.rows, value);
    }

    /// Current tri-state selection summary
    pub fn selection_state(&self) -> SelectionState {
        SelectionState::summarize(&self.rows)
    }

    /// Key cell values of the selected rows, for a batch delete
    ///
    /// Rows whose key cell is NULL are skipped; a NULL key can never match
    /// an equality predicate anyway.
    pub fn selected_key_values(&self, key_index: usize) -> Vec<String> {
        self.rows
            .iter()
            .filter(|row| row.selected)
            .filter_map(|row| row.get(key_index).map(str::to_string))
            .collect()
    }
}

/// Tri-state summary of a row set's selection flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionState {
    AllSelected,
    NoneSelected,
    SomeSelected,
}

impl SelectionState {
    /// Summarize a collection of selection flags
    ///
    /// An empty collection is `NoneSelected`; `AllSelected` requires at
    /// least one row.
    pub fn summarize(rows: &[Row]) -> Self {
        if rows.is_empty() {
            return Self::NoneSelected;
        }
        let selected = rows.iter().filter(|row| row.selected).count();
        if selected == rows.len() {
            Self::AllSelected
        } else if selected == 0 {
            Self::NoneSelected
        } else {
            Self::SomeSelected
        }
    }
}

/// Set every row's selection flag to `value`
pub fn set_all(rows: &mut [Row], value: bool) {
    for row in rows {
        row.selected = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_rows() -> Vec<Row> {
        (1..=3)
            .map(|i| Row::new(vec![Some(i.to_string()), Some(format!("name-{i}"))]))
            .collect()
    }

    #[test]
    fn test_summarize_empty_is_none_selected() {
        assert_eq!(SelectionState::summarize(&[]), SelectionState::NoneSelected);
    }

    #[test]
    fn test_set_all_then_summarize() {
        let mut rows = three_rows();
        assert_eq!(SelectionState::summarize(&rows), SelectionState::NoneSelected);

        set_all(&mut rows, true);
        assert_eq!(SelectionState::summarize(&rows), SelectionState::AllSelected);

        set_all(&mut rows, false);
        assert_eq!(SelectionState::summarize(&rows), SelectionState::NoneSelected);
    }

    #[test]
    fn test_single_toggle_transitions_all_to_some() {
        let mut set = RowSet::new(vec!["ID".into(), "NAME".into()], three_rows());
        set.set_all(true);
        assert_eq!(set.selection_state(), SelectionState::AllSelected);

        let state = set.toggle(1).unwrap();
        assert_eq!(state, SelectionState::SomeSelected);
    }

    #[test]
    fn test_toggle_out_of_range() {
        let mut set = RowSet::new(vec!["ID".into()], Vec::new());
        assert_eq!(set.toggle(0), None);
    }

    #[test]
    fn test_selected_key_values_skip_null_keys() {
        let mut rows = three_rows();
        rows.push(Row::new(vec![None, Some("no-key".into())]));
        let mut set = RowSet::new(vec!["ID".into(), "NAME".into()], rows);
        set.set_all(true);

        assert_eq!(set.selected_key_values(0), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_row_set_serializes_for_external_renderers() {
        let set = RowSet::new(
            vec!["ID".into()],
            vec![Row::new(vec![Some("1".into())]), Row::new(vec![None])],
        );
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json["columns"][0], "ID");
        assert_eq!(json["rows"][0]["values"][0], "1");
        assert!(json["rows"][1]["values"][0].is_null());
        assert_eq!(json["rows"][0]["selected"], false);
    }

    #[test]
    fn test_row_cell_access() {
        let row = Row::new(vec![Some("1".into()), None]);
        assert_eq!(row.get(0), Some("1"));
        assert_eq!(row.get(1), None);
        assert_eq!(row.get(9), None);
    }
}
