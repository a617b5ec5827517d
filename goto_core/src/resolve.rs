//! Resolution of parsed expressions against a document and cursor

use serde::{Deserialize, Serialize};

use crate::config::{ActiveReference, GotoConfig};
use crate::context::{CursorSnapshot, DocumentSnapshot, Position};
use crate::parser;
use crate::rejection::Rejection;
use crate::syntax::{ColumnShortcut, ColumnTerm, Coordinate, LineTerm, RangeEnd, TargetExpr};
use crate::token;

/// Resolved outcome of an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JumpTarget {
    /// Move the caret
    GoTo(Position),
    /// Replace the primary selection
    Selection {
        anchor: Position,
        active: Position,
        quick: bool,
    },
}

impl JumpTarget {
    pub fn is_selection(&self) -> bool {
        matches!(self, Self::Selection { .. })
    }

    /// Where the caret ends up
    pub fn active(&self) -> Position {
        match self {
            Self::GoTo(position) => *position,
            Self::Selection { active, .. } => *active,
        }
    }
}

/// Resolve `input` to a concrete target
///
/// A pure function of its four arguments. Invalid input comes back as an
/// ordinary `Err`; resolution itself cannot fail, every coordinate clamps
/// into the document.
pub fn interpret(
    input: &str,
    document: &DocumentSnapshot,
    cursor: &CursorSnapshot,
    config: &GotoConfig,
) -> Result<JumpTarget, Rejection> {
    let tokens = token::tokenize(input)?;
    let target = parser::parse(tokens)?;
    Ok(resolve_target(&target, document, cursor, config))
}

/// Resolve an already parsed expression
pub fn resolve_target(
    target: &TargetExpr,
    document: &DocumentSnapshot,
    cursor: &CursorSnapshot,
    config: &GotoConfig,
) -> JumpTarget {
    match target {
        TargetExpr::WithStart { start, end } => {
            let anchor = resolve_coordinate(start, cursor.active.row, document, config);
            match end {
                None => JumpTarget::GoTo(anchor),
                Some(end) => finish_selection(anchor, end, document, cursor, config),
            }
        }
        TargetExpr::EndOnly(end) => finish_selection(cursor.active, end, document, cursor, config),
    }
}

fn finish_selection(
    anchor: Position,
    end: &RangeEnd,
    document: &DocumentSnapshot,
    cursor: &CursorSnapshot,
    config: &GotoConfig,
) -> JumpTarget {
    let reference_row = match config.active_relative_to {
        ActiveReference::Anchor => anchor.row,
        ActiveReference::Cursor => cursor.active.row,
    };
    let active = resolve_coordinate(end.coordinate(), reference_row, document, config);
    if end.is_quick() {
        expand_to_full_lines(anchor, active, document)
    } else {
        JumpTarget::Selection {
            anchor,
            active,
            quick: false,
        }
    }
}

/// Replace a quick pair with a full-line range
///
/// The selection keeps the direction of the typed pair: downward ranges run
/// from the start line's first column to the end line's last, upward ranges
/// from the start line's last column back to the end line's first. Equal
/// rows count as downward, selecting exactly that one full line.
fn expand_to_full_lines(
    start: Position,
    end: Position,
    document: &DocumentSnapshot,
) -> JumpTarget {
    if end.row >= start.row {
        JumpTarget::Selection {
            anchor: Position::new(start.row, 0),
            active: Position::new(end.row, document.line_length(end.row)),
            quick: true,
        }
    } else {
        JumpTarget::Selection {
            anchor: Position::new(start.row, document.line_length(start.row)),
            active: Position::new(end.row, 0),
            quick: true,
        }
    }
}

fn resolve_coordinate(
    coordinate: &Coordinate,
    reference_row: usize,
    document: &DocumentSnapshot,
    config: &GotoConfig,
) -> Position {
    match coordinate {
        Coordinate::WithLine { line, column } => {
            let row = resolve_row(line, reference_row, document);
            let col = match column {
                Some(column) => resolve_col(column, row, document),
                None => shortcut_col(config.column_defaults_to, row, document),
            };
            Position::new(row, col)
        }
        Coordinate::ColumnOnly(column) => {
            let row = reference_row.min(document.line_count() - 1);
            Position::new(row, resolve_col(column, row, document))
        }
    }
}

/// 1-based display line to a clamped 0-based row
fn resolve_row(line: &LineTerm, reference_row: usize, document: &DocumentSnapshot) -> usize {
    let last_row = document.line_count() - 1;
    match line {
        LineTerm::Absolute(magnitude) => to_index(magnitude.saturating_sub(1)).min(last_row),
        LineTerm::Negative(magnitude) => reference_row
            .min(last_row)
            .saturating_sub(to_index(*magnitude)),
    }
}

/// 1-based display column to a clamped 0-based column
///
/// The upper bound is the line length itself: one past the last character
/// is a valid caret column.
fn resolve_col(column: &ColumnTerm, row: usize, document: &DocumentSnapshot) -> usize {
    match column {
        ColumnTerm::Absolute(magnitude) => {
            to_index(magnitude.saturating_sub(1)).min(document.line_length(row))
        }
        ColumnTerm::Shortcut(shortcut) => shortcut_col(*shortcut, row, document),
    }
}

fn shortcut_col(shortcut: ColumnShortcut, row: usize, document: &DocumentSnapshot) -> usize {
    match shortcut {
        ColumnShortcut::StartOfLine => 0,
        ColumnShortcut::EndOfLine => document.line_length(row),
        ColumnShortcut::FirstNonWhitespace => document.first_non_blank(row),
        ColumnShortcut::OnePastLastNonWhitespace => document.non_blank_end(row),
    }
}

fn to_index(magnitude: u64) -> usize {
    usize::try_from(magnitude).unwrap_or(usize::MAX)
}
