//! Syntax tree for parsed expressions
//!
//! Plain immutable values built bottom-up by the parser. Line and column
//! magnitudes stay 1-based here; resolution converts to buffer coordinates.

use serde::{Deserialize, Serialize};

/// The four shortcut columns a line offers
///
/// Written `H`, `L`, `h`, `l` in expressions. Also the vocabulary of the
/// `columnDefaultsTo` setting, which is why this enum serializes with the
/// setting's spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnShortcut {
    /// `H`: column 0
    StartOfLine,
    /// `L`: one past the last character
    EndOfLine,
    /// `h`: the first non-whitespace character, 0 on blank lines
    FirstNonWhitespace,
    /// `l`: one past the last non-whitespace character, 0 on blank lines
    OnePastLastNonWhitespace,
}

impl ColumnShortcut {
    /// The letter that spells this shortcut in an expression
    pub fn letter(&self) -> char {
        match self {
            Self::StartOfLine => 'H',
            Self::EndOfLine => 'L',
            Self::FirstNonWhitespace => 'h',
            Self::OnePastLastNonWhitespace => 'l',
        }
    }
}

/// A line term, as typed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTerm {
    /// `N`: display line N
    Absolute(u64),
    /// `-N`: N lines above the reference line
    Negative(u64),
}

/// A column term, as typed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnTerm {
    /// A separator then `N`: display column N
    Absolute(u64),
    /// One of `H`, `L`, `h`, `l`
    Shortcut(ColumnShortcut),
}

/// One coordinate of a target, before resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coordinate {
    /// A line with an optional column: `5`, `5,10`, `-3h`
    WithLine {
        line: LineTerm,
        column: Option<ColumnTerm>,
    },
    /// A column on the reference line: `,102`, `L`
    ColumnOnly(ColumnTerm),
}

/// How a target's end coordinate was written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeEnd {
    /// `.`: the resolved pair expands to cover both lines fully
    Quick(Coordinate),
    /// `..`, or a separator after a complete start coordinate
    Exact(Coordinate),
}

impl RangeEnd {
    pub fn is_quick(&self) -> bool {
        matches!(self, Self::Quick(_))
    }

    pub fn coordinate(&self) -> &Coordinate {
        match self {
            Self::Quick(coordinate) => coordinate,
            Self::Exact(coordinate) => coordinate,
        }
    }
}

/// A complete expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetExpr {
    /// A start coordinate, optionally followed by a range end
    WithStart {
        start: Coordinate,
        end: Option<RangeEnd>,
    },
    /// A range end alone; the start is the current cursor position
    EndOnly(RangeEnd),
}

impl TargetExpr {
    /// True when resolving this expression yields a selection
    pub fn is_selection(&self) -> bool {
        match self {
            Self::WithStart { end, .. } => end.is_some(),
            Self::EndOnly(_) => true,
        }
    }
}
