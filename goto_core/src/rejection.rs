//! Rejection categories for invalid expressions

use core::fmt;

use crate::token::Token;

/// Why an expression was rejected
///
/// Rejection is an ordinary value. Invalid user input never panics and the
/// host only needs the yes/no, but the variant records which stage said no.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// A character outside the expression alphabet
    UnexpectedCharacter(char),
    /// A `-` not followed by digits
    DanglingMinus,
    /// Empty or whitespace-only input
    EmptyInput,
    /// A token no grammar rule accepts at this point
    UnexpectedToken(Token),
    /// Extra tokens after a complete target
    TrailingTokens,
}

impl Rejection {
    /// True when the scanner rejected the raw characters
    pub fn is_lexical(&self) -> bool {
        matches!(self, Self::UnexpectedCharacter(_) | Self::DanglingMinus)
    }

    /// True when the token sequence did not match the grammar
    pub fn is_syntactic(&self) -> bool {
        !self.is_lexical()
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCharacter(ch) => write!(f, "unexpected character '{}'", ch),
            Self::DanglingMinus => write!(f, "'-' must be followed by digits"),
            Self::EmptyInput => write!(f, "empty expression"),
            Self::UnexpectedToken(token) => write!(f, "unexpected {}", token),
            Self::TrailingTokens => write!(f, "extra input after a complete target"),
        }
    }
}
