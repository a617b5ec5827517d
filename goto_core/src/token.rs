//! Tokens and the expression scanner

use alloc::vec::Vec;
use core::fmt;

use crate::rejection::Rejection;
use crate::syntax::ColumnShortcut;

/// A single lexeme of the goto expression language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A run of digits, read as a 1-based line or column
    Number(u64),
    /// `-` followed by a run of digits, magnitude stored positive
    NegativeNumber(u64),
    /// `,` or `:`, one neutral kind for both
    Separator,
    /// A single `.`
    Period,
    /// Exactly `..`
    DoublePeriod,
    /// One of the shortcut letters `H`, `L`, `h`, `l`
    Shortcut(ColumnShortcut),
    /// Synthetic end of input, produced by the stream, never by the scanner
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(magnitude) => write!(f, "number {}", magnitude),
            Token::NegativeNumber(magnitude) => write!(f, "number -{}", magnitude),
            Token::Separator => write!(f, "',' or ':'"),
            Token::Period => write!(f, "'.'"),
            Token::DoublePeriod => write!(f, "'..'"),
            Token::Shortcut(shortcut) => write!(f, "'{}'", shortcut.letter()),
            Token::Eof => write!(f, "end of input"),
        }
    }
}

/// Scan `input` into tokens, all or nothing
///
/// Either the whole input tokenizes or the whole input is rejected; there
/// is no partial token list. Whitespace never reaches the token level.
pub fn tokenize(input: &str) -> Result<Vec<Token>, Rejection> {
    // Whitespace is never significant, not even inside a digit run,
    // so strip it before scanning.
    let chars: Vec<char> = input.chars().filter(|ch| !ch.is_whitespace()).collect();
    let mut scanner = Scanner { chars, position: 0 };
    let mut tokens = Vec::new();
    while let Some(first) = scanner.bump() {
        tokens.push(scanner.next_token(first)?);
    }
    Ok(tokens)
}

struct Scanner {
    chars: Vec<char>,
    position: usize,
}

impl Scanner {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek();
        if ch.is_some() {
            self.advance();
        }
        ch
    }

    fn next_token(&mut self, first: char) -> Result<Token, Rejection> {
        match first {
            '0'..='9' => Ok(Token::Number(self.scan_magnitude(first))),
            '-' => match self.peek() {
                Some(ch) if ch.is_ascii_digit() => {
                    self.advance();
                    Ok(Token::NegativeNumber(self.scan_magnitude(ch)))
                }
                _ => Err(Rejection::DanglingMinus),
            },
            ',' | ':' => Ok(Token::Separator),
            '.' => {
                if self.peek() == Some('.') {
                    self.advance();
                    Ok(Token::DoublePeriod)
                } else {
                    Ok(Token::Period)
                }
            }
            'H' => Ok(Token::Shortcut(ColumnShortcut::StartOfLine)),
            'L' => Ok(Token::Shortcut(ColumnShortcut::EndOfLine)),
            'h' => Ok(Token::Shortcut(ColumnShortcut::FirstNonWhitespace)),
            'l' => Ok(Token::Shortcut(ColumnShortcut::OnePastLastNonWhitespace)),
            ch => Err(Rejection::UnexpectedCharacter(ch)),
        }
    }

    /// Extend a digit run, saturating instead of overflowing
    ///
    /// Saturated magnitudes are indistinguishable after clamping against the
    /// document, so arbitrarily long digit runs stay harmless.
    fn scan_magnitude(&mut self, first: char) -> u64 {
        let mut magnitude = digit_value(first);
        while let Some(ch) = self.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            self.advance();
            magnitude = magnitude.saturating_mul(10).saturating_add(digit_value(ch));
        }
        magnitude
    }
}

fn digit_value(ch: char) -> u64 {
    ch.to_digit(10).map(u64::from).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_tokenize_number() {
        assert_eq!(tokenize("42"), Ok(vec![Token::Number(42)]));
    }

    #[test]
    fn test_tokenize_negative_number() {
        assert_eq!(tokenize("-3"), Ok(vec![Token::NegativeNumber(3)]));
    }

    #[test]
    fn test_whitespace_never_splits_a_number() {
        assert_eq!(tokenize("1 2 3"), Ok(vec![Token::Number(123)]));
        assert_eq!(tokenize(" 4\t2 "), Ok(vec![Token::Number(42)]));
        assert_eq!(tokenize("- 5"), Ok(vec![Token::NegativeNumber(5)]));
    }

    #[test]
    fn test_tokenize_separators() {
        assert_eq!(tokenize(","), Ok(vec![Token::Separator]));
        assert_eq!(tokenize(":"), Ok(vec![Token::Separator]));
    }

    #[test]
    fn test_tokenize_periods() {
        assert_eq!(tokenize("."), Ok(vec![Token::Period]));
        assert_eq!(tokenize(".."), Ok(vec![Token::DoublePeriod]));
        assert_eq!(
            tokenize("..."),
            Ok(vec![Token::DoublePeriod, Token::Period])
        );
    }

    #[test]
    fn test_tokenize_shortcuts() {
        assert_eq!(
            tokenize("HLhl"),
            Ok(vec![
                Token::Shortcut(ColumnShortcut::StartOfLine),
                Token::Shortcut(ColumnShortcut::EndOfLine),
                Token::Shortcut(ColumnShortcut::FirstNonWhitespace),
                Token::Shortcut(ColumnShortcut::OnePastLastNonWhitespace),
            ])
        );
    }

    #[test]
    fn test_tokenize_full_expression() {
        assert_eq!(
            tokenize("5,10:20,30"),
            Ok(vec![
                Token::Number(5),
                Token::Separator,
                Token::Number(10),
                Token::Separator,
                Token::Number(20),
                Token::Separator,
                Token::Number(30),
            ])
        );
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert_eq!(tokenize(""), Ok(vec![]));
        assert_eq!(tokenize("  \t "), Ok(vec![]));
    }

    #[test]
    fn test_dangling_minus_rejects() {
        assert_eq!(tokenize("-"), Err(Rejection::DanglingMinus));
        assert_eq!(tokenize("--5"), Err(Rejection::DanglingMinus));
        assert_eq!(tokenize("5,5-"), Err(Rejection::DanglingMinus));
        assert_eq!(tokenize("-."), Err(Rejection::DanglingMinus));
    }

    #[test]
    fn test_unexpected_character_rejects() {
        assert_eq!(tokenize("5x"), Err(Rejection::UnexpectedCharacter('x')));
        assert_eq!(tokenize("+5"), Err(Rejection::UnexpectedCharacter('+')));
    }

    #[test]
    fn test_long_digit_run_saturates() {
        assert_eq!(
            tokenize("99999999999999999999999999"),
            Ok(vec![Token::Number(u64::MAX)])
        );
    }
}
