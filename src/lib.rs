//! # Introduction
//!
//! Simian is the front end of the Monkey scripting language: a lexer and an
//! error-tolerant recursive-descent parser that turn source text into an
//! abstract syntax tree.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST (Program) → consumer
//! ```
//!
//! 1. [`parser`] — tokenises the source ([`parser::lexer`]) and builds the AST
//!    ([`parser::ast`]), collecting diagnostics instead of stopping at the
//!    first one.
//! 2. [`repl`] — interactive loop that prints the tokens of each input line.
//! 3. [`config`] and [`theme`] — command-line options and the terminal colour
//!    palette used by the `simian` binary.
//!
//! ## Example
//!
//! ```
//! use simian::parser::{Lexer, Parser};
//!
//! let mut parser = Parser::new(Lexer::new("let x = 5;\nreturn x;"));
//! let program = parser.parse_program();
//!
//! assert!(parser.errors().is_empty());
//! assert_eq!(program.statements.len(), 2);
//! assert_eq!(program.token_literal(), "let");
//! ```
//!
//! ## Logging
//!
//! The library emits [`tracing`](https://docs.rs/tracing) events (recorded
//! diagnostics at `debug`, skipped tokens at `trace`) and never installs a
//! subscriber itself.

pub mod config;
pub mod parser;
pub mod repl;
pub mod theme;
