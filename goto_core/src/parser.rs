//! Recursive-descent parser
//!
//! One function per grammar rule, one token of lookahead, no backtracking.
//! The grammar, with `N` a number, `-N` a negative number and `SEP` a comma
//! or colon:
//!
//! ```text
//! TARGET    -> COORD TAIL | RANGE_END
//! TAIL      -> RANGE_END | SEP COORD | (end of input)
//! RANGE_END -> '.' COORD | '..' COORD
//! COORD     -> LINE COLUMN? | COLUMN
//! LINE      -> N | -N
//! COLUMN    -> SEP N | 'H' | 'L' | 'h' | 'l'
//! ```
//!
//! The separator is one token kind for both `,` and `:` and is read
//! positionally: directly after a line term it always binds as that
//! coordinate's column, while after a complete start coordinate it
//! introduces the end of an exact selection. So `5,10` is line 5 column 10
//! and `5,10:20,30` selects from (5,10) to (20,30), whichever way the two
//! characters are mixed.

use alloc::vec::Vec;

use crate::rejection::Rejection;
use crate::stream::TokenStream;
use crate::syntax::{ColumnTerm, Coordinate, LineTerm, RangeEnd, TargetExpr};
use crate::token::Token;

/// Parse a scanned expression into a syntax tree
///
/// The whole token sequence must form one target; leftovers reject, as does
/// an empty sequence.
pub fn parse(tokens: Vec<Token>) -> Result<TargetExpr, Rejection> {
    let mut stream = TokenStream::new(tokens);
    if !stream.has_tokens_remaining() {
        return Err(Rejection::EmptyInput);
    }
    let target = parse_target(&mut stream)?;
    if stream.has_tokens_remaining() {
        return Err(Rejection::TrailingTokens);
    }
    Ok(target)
}

fn parse_target(stream: &mut TokenStream) -> Result<TargetExpr, Rejection> {
    match stream.peek() {
        Token::Period | Token::DoublePeriod => {
            let end = parse_range_end(stream)?;
            Ok(TargetExpr::EndOnly(end))
        }
        _ => {
            let start = parse_coordinate(stream)?;
            let end = parse_tail(stream)?;
            Ok(TargetExpr::WithStart { start, end })
        }
    }
}

/// What may follow a complete start coordinate
fn parse_tail(stream: &mut TokenStream) -> Result<Option<RangeEnd>, Rejection> {
    match stream.peek() {
        Token::Eof => Ok(None),
        Token::Period | Token::DoublePeriod => parse_range_end(stream).map(Some),
        Token::Separator => {
            stream.pop();
            let coordinate = parse_coordinate(stream)?;
            Ok(Some(RangeEnd::Exact(coordinate)))
        }
        token => Err(Rejection::UnexpectedToken(token)),
    }
}

fn parse_range_end(stream: &mut TokenStream) -> Result<RangeEnd, Rejection> {
    match stream.pop() {
        Token::Period => Ok(RangeEnd::Quick(parse_coordinate(stream)?)),
        Token::DoublePeriod => Ok(RangeEnd::Exact(parse_coordinate(stream)?)),
        token => Err(Rejection::UnexpectedToken(token)),
    }
}

fn parse_coordinate(stream: &mut TokenStream) -> Result<Coordinate, Rejection> {
    match stream.peek() {
        Token::Number(_) | Token::NegativeNumber(_) => {
            let line = parse_line(stream)?;
            let column = parse_optional_column(stream)?;
            Ok(Coordinate::WithLine { line, column })
        }
        Token::Separator | Token::Shortcut(_) => {
            let column = parse_column(stream)?;
            Ok(Coordinate::ColumnOnly(column))
        }
        token => Err(Rejection::UnexpectedToken(token)),
    }
}

fn parse_line(stream: &mut TokenStream) -> Result<LineTerm, Rejection> {
    match stream.pop() {
        Token::Number(magnitude) => Ok(LineTerm::Absolute(magnitude)),
        Token::NegativeNumber(magnitude) => Ok(LineTerm::Negative(magnitude)),
        token => Err(Rejection::UnexpectedToken(token)),
    }
}

/// Column lookahead after a line term
///
/// A separator here always starts a column. Anything else leaves the column
/// omitted and lets the caller judge the token.
fn parse_optional_column(stream: &mut TokenStream) -> Result<Option<ColumnTerm>, Rejection> {
    match stream.peek() {
        Token::Separator | Token::Shortcut(_) => parse_column(stream).map(Some),
        _ => Ok(None),
    }
}

fn parse_column(stream: &mut TokenStream) -> Result<ColumnTerm, Rejection> {
    match stream.pop() {
        Token::Separator => match stream.pop() {
            Token::Number(magnitude) => Ok(ColumnTerm::Absolute(magnitude)),
            token => Err(Rejection::UnexpectedToken(token)),
        },
        Token::Shortcut(shortcut) => Ok(ColumnTerm::Shortcut(shortcut)),
        token => Err(Rejection::UnexpectedToken(token)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::ColumnShortcut;
    use crate::token::tokenize;

    fn parse_str(input: &str) -> Result<TargetExpr, Rejection> {
        parse(tokenize(input)?)
    }

    fn line(magnitude: u64) -> LineTerm {
        LineTerm::Absolute(magnitude)
    }

    #[test]
    fn test_parse_bare_line() {
        assert_eq!(
            parse_str("5"),
            Ok(TargetExpr::WithStart {
                start: Coordinate::WithLine {
                    line: line(5),
                    column: None
                },
                end: None,
            })
        );
    }

    #[test]
    fn test_parse_line_and_column() {
        let expected = Ok(TargetExpr::WithStart {
            start: Coordinate::WithLine {
                line: line(5),
                column: Some(ColumnTerm::Absolute(10)),
            },
            end: None,
        });
        assert_eq!(parse_str("5,10"), expected);
        assert_eq!(parse_str("5:10"), expected);
    }

    #[test]
    fn test_parse_column_only() {
        assert_eq!(
            parse_str(",102"),
            Ok(TargetExpr::WithStart {
                start: Coordinate::ColumnOnly(ColumnTerm::Absolute(102)),
                end: None,
            })
        );
        assert_eq!(
            parse_str("L"),
            Ok(TargetExpr::WithStart {
                start: Coordinate::ColumnOnly(ColumnTerm::Shortcut(ColumnShortcut::EndOfLine)),
                end: None,
            })
        );
    }

    #[test]
    fn test_parse_negative_line_with_shortcut_column() {
        assert_eq!(
            parse_str("-3h"),
            Ok(TargetExpr::WithStart {
                start: Coordinate::WithLine {
                    line: LineTerm::Negative(3),
                    column: Some(ColumnTerm::Shortcut(ColumnShortcut::FirstNonWhitespace)),
                },
                end: None,
            })
        );
    }

    #[test]
    fn test_parse_exact_selection_via_separator() {
        assert_eq!(
            parse_str("5,10:20,30"),
            Ok(TargetExpr::WithStart {
                start: Coordinate::WithLine {
                    line: line(5),
                    column: Some(ColumnTerm::Absolute(10)),
                },
                end: Some(RangeEnd::Exact(Coordinate::WithLine {
                    line: line(20),
                    column: Some(ColumnTerm::Absolute(30)),
                })),
            })
        );
    }

    #[test]
    fn test_separator_binds_greedily_as_column() {
        // The first separator is (1)'s column, the second starts the end.
        assert_eq!(
            parse_str("1:10,20"),
            Ok(TargetExpr::WithStart {
                start: Coordinate::WithLine {
                    line: line(1),
                    column: Some(ColumnTerm::Absolute(10)),
                },
                end: Some(RangeEnd::Exact(Coordinate::WithLine {
                    line: line(20),
                    column: None,
                })),
            })
        );
    }

    #[test]
    fn test_parse_quick_and_exact_range_ends() {
        assert_eq!(
            parse_str("1.5"),
            Ok(TargetExpr::WithStart {
                start: Coordinate::WithLine {
                    line: line(1),
                    column: None
                },
                end: Some(RangeEnd::Quick(Coordinate::WithLine {
                    line: line(5),
                    column: None,
                })),
            })
        );
        assert_eq!(
            parse_str("1..5"),
            Ok(TargetExpr::WithStart {
                start: Coordinate::WithLine {
                    line: line(1),
                    column: None
                },
                end: Some(RangeEnd::Exact(Coordinate::WithLine {
                    line: line(5),
                    column: None,
                })),
            })
        );
    }

    #[test]
    fn test_parse_range_end_only() {
        assert_eq!(
            parse_str("..L"),
            Ok(TargetExpr::EndOnly(RangeEnd::Exact(Coordinate::ColumnOnly(
                ColumnTerm::Shortcut(ColumnShortcut::EndOfLine)
            ))))
        );
        assert_eq!(
            parse_str(".5"),
            Ok(TargetExpr::EndOnly(RangeEnd::Quick(Coordinate::WithLine {
                line: line(5),
                column: None,
            })))
        );
    }

    #[test]
    fn test_whitespace_is_invisible_to_the_grammar() {
        assert_eq!(parse_str(" 5 , 1 0 : 2 0 "), parse_str("5,10:20"));
        assert_eq!(parse_str("1 . 5"), parse_str("1.5"));
    }

    #[test]
    fn test_empty_input_rejects() {
        assert_eq!(parse_str(""), Err(Rejection::EmptyInput));
        assert_eq!(parse_str("   "), Err(Rejection::EmptyInput));
    }

    #[test]
    fn test_incomplete_forms_reject() {
        assert_eq!(parse_str("5,"), Err(Rejection::UnexpectedToken(Token::Eof)));
        assert_eq!(parse_str("."), Err(Rejection::UnexpectedToken(Token::Eof)));
        assert_eq!(parse_str("5.."), Err(Rejection::UnexpectedToken(Token::Eof)));
        assert_eq!(
            parse_str("5,10:"),
            Err(Rejection::UnexpectedToken(Token::Eof))
        );
    }

    #[test]
    fn test_misplaced_tokens_reject() {
        assert_eq!(
            parse_str("5,,3"),
            Err(Rejection::UnexpectedToken(Token::Separator))
        );
        assert_eq!(
            parse_str("5,-3"),
            Err(Rejection::UnexpectedToken(Token::NegativeNumber(3)))
        );
        assert_eq!(
            parse_str("5-3"),
            Err(Rejection::UnexpectedToken(Token::NegativeNumber(3)))
        );
        assert_eq!(
            parse_str("5H3"),
            Err(Rejection::UnexpectedToken(Token::Number(3)))
        );
        assert_eq!(
            parse_str("..5h,3"),
            Err(Rejection::TrailingTokens)
        );
        assert_eq!(parse_str("1.2.3"), Err(Rejection::TrailingTokens));
    }

    #[test]
    fn test_lexical_rejections_pass_through() {
        assert_eq!(parse_str("--5"), Err(Rejection::DanglingMinus));
        assert_eq!(parse_str("5x"), Err(Rejection::UnexpectedCharacter('x')));
    }
}
