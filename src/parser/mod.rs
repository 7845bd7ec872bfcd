//! Monkey source code parser
//!
//! This module transforms Monkey source text into an Abstract Syntax Tree (AST):
//! - [`token`]: Token kinds, source locations and the keyword table
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parser`]: Parsing (tokens → AST)
//! - [`ast`]: AST node definitions
//!
//! # Supported grammar
//!
//! The lexer recognises the whole Monkey token set: integers, identifiers,
//! arithmetic and comparison operators, delimiters and the keywords `fn`, `let`,
//! `true`, `false`, `if`, `else` and `return`. The parser currently builds
//! `let` and `return` statements only.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with two tokens of lookahead. No
//! external parser generator dependencies.

pub mod ast;
pub mod lexer;
#[allow(clippy::module_inception)]
pub mod parser;
mod statements;
pub mod token;

pub use ast::Program;
pub use lexer::Lexer;
pub use parser::{ParseError, Parser};
pub use token::{SourceLocation, Token, TokenKind};
