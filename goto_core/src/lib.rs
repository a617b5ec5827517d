#![no_std]

//! # Goto Core
//!
//! Resolution of compact goto expressions (`5,10:20,30`, `-3h`, `..L`) into
//! concrete cursor positions and selections.
//!
//! ## Philosophy
//!
//! - **No_std compatible**: Uses alloc but not std
//! - **Deterministic**: Same input, document, cursor and config => same target
//! - **Rejection as data**: Invalid input is an ordinary value, never a panic
//! - **Mechanism over policy**: The core names a target, hosts decide how to
//!   move the viewport and apply it
//!
//! ## Design
//!
//! The pipeline is scan, parse, resolve:
//! - Token / TokenStream: whitespace-free lexemes with one-token lookahead
//! - TargetExpr: immutable syntax tree built by recursive descent
//! - interpret: resolution against a DocumentSnapshot, a CursorSnapshot and
//!   a GotoConfig, clamping every coordinate into the document

extern crate alloc;

pub mod config;
pub mod context;
pub mod parser;
pub mod rejection;
pub mod resolve;
pub mod stream;
pub mod syntax;
pub mod token;

pub use config::{ActiveReference, GotoConfig};
pub use context::{CursorSnapshot, DocumentSnapshot, Position};
pub use parser::parse;
pub use rejection::Rejection;
pub use resolve::{interpret, resolve_target, JumpTarget};
pub use stream::TokenStream;
pub use syntax::{ColumnShortcut, ColumnTerm, Coordinate, LineTerm, RangeEnd, TargetExpr};
pub use token::{tokenize, Token};
