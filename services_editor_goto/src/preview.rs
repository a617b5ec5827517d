//! Render-ready projection of a resolved target
//!
//! The host owns the viewport and the decoration pipeline. This module only
//! derives the data those need: which line to bring into view and, for
//! selections, which document range to tint while the box is open.

use goto_core::{JumpTarget, Position};
use serde::{Deserialize, Serialize};

/// Line the host should scroll into view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealRequest {
    pub row: usize,
}

impl RevealRequest {
    pub const fn new(row: usize) -> Self {
        Self { row }
    }
}

/// Document range a selection preview decorates, kept in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightSpan {
    pub start: Position,
    pub end: Position,
}

impl HighlightSpan {
    /// Span between two positions, whichever order they arrive in
    pub fn between(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }
}

/// Everything the host needs to preview a resolved target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetPreview {
    pub target: JumpTarget,
    pub reveal: RevealRequest,
    pub highlight: Option<HighlightSpan>,
}

impl TargetPreview {
    /// Derive the preview for a resolved target
    ///
    /// The reveal follows the active position so upward selections scroll
    /// toward their far end. Plain jumps carry no highlight.
    pub fn for_target(target: JumpTarget) -> Self {
        let reveal = RevealRequest::new(target.active().row);
        let highlight = match target {
            JumpTarget::GoTo(_) => None,
            JumpTarget::Selection { anchor, active, .. } => {
                Some(HighlightSpan::between(anchor, active))
            }
        };
        Self {
            target,
            reveal,
            highlight,
        }
    }
}
