//! Goto box session lifecycle

use crate::preview::TargetPreview;
use goto_core::{interpret, CursorSnapshot, DocumentSnapshot, GotoConfig, JumpTarget};

/// Feedback for the host after an input change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionFeedback {
    /// Empty query; show the idle hint and clear any preview
    Empty,
    /// Query does not resolve; keep the box open and clear any preview
    Invalid,
    /// Query resolves; preview the target
    Preview(TargetPreview),
}

impl SessionFeedback {
    pub fn is_valid(&self) -> bool {
        matches!(self, SessionFeedback::Preview(_))
    }
}

/// One open goto box
///
/// The session captures the document, cursor, and config once when the box
/// opens. Every input change re-resolves the whole query against those
/// snapshots, so editing the query never compounds on earlier previews.
#[derive(Debug, Clone)]
pub struct GotoSession {
    document: DocumentSnapshot,
    opened_at: CursorSnapshot,
    config: GotoConfig,
    input: String,
    feedback: SessionFeedback,
    status_message: String,
}

impl GotoSession {
    /// Opens a session over the given document and cursor
    pub fn new(document: DocumentSnapshot, cursor: CursorSnapshot, config: GotoConfig) -> Self {
        Self {
            document,
            opened_at: cursor,
            config,
            input: String::new(),
            feedback: SessionFeedback::Empty,
            status_message: String::new(),
        }
    }

    /// Replaces the query text and re-resolves it
    pub fn input_changed(&mut self, text: &str) -> SessionFeedback {
        self.input.clear();
        self.input.push_str(text);

        self.feedback = if self.input.is_empty() {
            SessionFeedback::Empty
        } else {
            match interpret(&self.input, &self.document, &self.opened_at, &self.config) {
                Ok(target) => SessionFeedback::Preview(TargetPreview::for_target(target)),
                Err(_) => SessionFeedback::Invalid,
            }
        };
        self.status_message = describe(&self.feedback);
        self.feedback
    }

    /// Current query text
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Feedback from the most recent input change
    pub fn feedback(&self) -> SessionFeedback {
        self.feedback
    }

    /// Preview for the current query, if it resolves
    pub fn preview(&self) -> Option<TargetPreview> {
        match self.feedback {
            SessionFeedback::Preview(preview) => Some(preview),
            _ => None,
        }
    }

    /// Human-readable description of the current query
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Target to apply on Enter, if the current query resolves
    pub fn accept(&self) -> Option<JumpTarget> {
        self.preview().map(|preview| preview.target)
    }

    /// Cursor to restore on Escape
    pub fn cancel(&self) -> CursorSnapshot {
        self.opened_at
    }

    /// Document the session resolves against
    pub fn document(&self) -> &DocumentSnapshot {
        &self.document
    }

    /// Config the session resolves with
    pub fn config(&self) -> &GotoConfig {
        &self.config
    }
}

/// Status line text for a feedback state, with one-based display numbers
fn describe(feedback: &SessionFeedback) -> String {
    match feedback {
        SessionFeedback::Empty => String::new(),
        SessionFeedback::Invalid => String::from("Invalid expression"),
        SessionFeedback::Preview(preview) => match preview.target {
            JumpTarget::GoTo(position) => {
                format!(
                    "Go to line {}, column {}",
                    position.row + 1,
                    position.col + 1
                )
            }
            JumpTarget::Selection {
                anchor,
                active,
                quick: true,
            } => {
                format!("Select lines {} to {}", anchor.row + 1, active.row + 1)
            }
            JumpTarget::Selection { active, .. } => {
                format!(
                    "Select to line {}, column {}",
                    active.row + 1,
                    active.col + 1
                )
            }
        },
    }
}
