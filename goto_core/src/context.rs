//! Document and cursor snapshots resolution reads from

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

/// A buffer position, 0-based row and column
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub const fn zero() -> Self {
        Self { row: 0, col: 0 }
    }
}

/// Immutable view of the document an expression resolves against
///
/// Line-based storage like the editor buffer, reduced to the read-only
/// queries resolution needs. A document always has at least one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DocumentSnapshotData")]
pub struct DocumentSnapshot {
    lines: Vec<String>,
}

impl DocumentSnapshot {
    pub fn from_string(content: String) -> Self {
        let lines = if content.is_empty() {
            vec![String::new()]
        } else {
            content.lines().map(|s| s.into()).collect()
        };
        Self { lines }
    }

    pub fn from_lines(lines: Vec<String>) -> Self {
        if lines.is_empty() {
            Self {
                lines: vec![String::new()],
            }
        } else {
            Self { lines }
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|s| s.as_str())
    }

    pub fn line_length(&self, row: usize) -> usize {
        self.lines.get(row).map(|s| s.len()).unwrap_or(0)
    }

    /// Index of the first non-whitespace character, 0 on blank lines
    pub fn first_non_blank(&self, row: usize) -> usize {
        self.line(row)
            .and_then(|line| {
                line.char_indices()
                    .find(|(_, ch)| !ch.is_whitespace())
                    .map(|(index, _)| index)
            })
            .unwrap_or(0)
    }

    /// One past the last non-whitespace character, 0 on blank lines
    pub fn non_blank_end(&self, row: usize) -> usize {
        self.line(row)
            .and_then(|line| {
                line.char_indices()
                    .rev()
                    .find(|(_, ch)| !ch.is_whitespace())
                    .map(|(index, ch)| index + ch.len_utf8())
            })
            .unwrap_or(0)
    }
}

impl Default for DocumentSnapshot {
    fn default() -> Self {
        Self::from_lines(Vec::new())
    }
}

/// Wire shape of a snapshot; conversion reapplies the one-line guarantee
#[derive(Deserialize)]
struct DocumentSnapshotData {
    lines: Vec<String>,
}

impl From<DocumentSnapshotData> for DocumentSnapshot {
    fn from(data: DocumentSnapshotData) -> Self {
        Self::from_lines(data.lines)
    }
}

/// The primary selection at the moment the expression is interpreted
///
/// A plain caret is a selection whose anchor and active coincide. The
/// "current line" every relative or omitted term starts from is the active
/// position's row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorSnapshot {
    pub anchor: Position,
    pub active: Position,
}

impl CursorSnapshot {
    pub const fn new(anchor: Position, active: Position) -> Self {
        Self { anchor, active }
    }

    /// A caret with no extent
    pub const fn caret(position: Position) -> Self {
        Self {
            anchor: position,
            active: position,
        }
    }

    pub fn is_caret(&self) -> bool {
        self.anchor == self.active
    }
}
