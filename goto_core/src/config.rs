//! Resolution settings

use serde::{Deserialize, Serialize};

use crate::syntax::ColumnShortcut;

/// Which line a range end's relative and omitted line terms resolve against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActiveReference {
    /// The resolved start of the selection being built
    Anchor,
    /// The live cursor, same as a start coordinate
    Cursor,
}

/// Tunables read once per interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GotoConfig {
    /// Column applied when an expression names a line but no column
    pub column_defaults_to: ColumnShortcut,
    /// Reference line for a range end's relative and omitted line terms
    pub active_relative_to: ActiveReference,
}

impl Default for GotoConfig {
    fn default() -> Self {
        Self {
            column_defaults_to: ColumnShortcut::FirstNonWhitespace,
            active_relative_to: ActiveReference::Anchor,
        }
    }
}
