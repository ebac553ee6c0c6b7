//! Declarative input-field descriptors
//!
//! The workbench this engine serves builds one input control per column of
//! the chosen table. Instead of emitting widgets, the engine emits plain
//! descriptors that any rendering layer (terminal prompt, web form, GUI)
//! can consume.

use serde::{Deserialize, Serialize};

use crate::policy::KeyPolicy;

/// Rendering-layer description of one input field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Column name as the catalog reports it
    pub name: String,
    /// Human-facing label; defaults to the column name
    pub label: String,
    /// Zero-based ordinal position in the column list
    pub ordinal: usize,
    /// Whether this column identifies the row under the active key policy
    pub is_key: bool,
}

/// Map an ordered column list to field descriptors
///
/// An empty column list yields an empty descriptor list; the key flag is
/// simply never set.
pub fn field_descriptors(columns: &[String], policy: &dyn KeyPolicy) -> Vec<FieldDescriptor> {
    let key_column = policy.key_column(columns).ok();
    columns
        .iter()
        .enumerate()
        .map(|(ordinal, name)| FieldDescriptor {
            name: name.clone(),
            label: name.clone(),
            ordinal,
            is_key: key_column == Some(name.as_str()),
        })
        .collect()
}
