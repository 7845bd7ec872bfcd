//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct, its error type, the two-token
//! lookahead window and the program-level entry point. Statement rules live in
//! `statements`, as further `impl Parser` blocks.
//!
//! # Error tolerance
//!
//! The parser never aborts. A failed expectation is recorded as a
//! [`ParseError`], the statement being built is dropped, and parsing resumes with
//! the next token. All diagnostics are available from [`Parser::errors`] once
//! [`Parser::parse_program`] returns.

use crate::parser::ast::Program;
use crate::parser::lexer::Lexer;
use crate::parser::token::{SourceLocation, Token, TokenKind};
use std::fmt;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub location: SourceLocation,
}

impl ParseError {
    /// The lookahead token was not the kind the grammar requires.
    pub fn unexpected_peek(expected: TokenKind, found: &Token) -> Self {
        ParseError {
            message: format!(
                "expected next token to be {}, got {} instead",
                expected, found.kind
            ),
            location: found.location,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error at line {}, column {}: {}",
            self.location.line, self.location.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

/// Recursive descent parser for Monkey
pub struct Parser {
    lexer: Lexer,
    errors: Vec<ParseError>,
    pub(crate) current: Token,
    pub(crate) peek: Token,
}

impl Parser {
    /// Take ownership of `lexer` and fill the lookahead window.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();
        Self {
            lexer,
            errors: Vec::new(),
            current,
            peek,
        }
    }

    pub fn from_source(source: &str) -> Self {
        Self::new(Lexer::new(source))
    }

    /// Parse the entire program.
    ///
    /// Meant to be called once: the lexer is drained afterwards, so a second
    /// call returns an empty program.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.current_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                program.statements.push(stmt);
            }
            self.next_token();
        }

        tracing::debug!(
            statements = program.statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );

        program
    }

    /// Diagnostics collected so far, in the order they were found
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    // ===== Helper methods =====

    /// Slide the lookahead window one token forward
    pub(crate) fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    pub(crate) fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub(crate) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advance if the lookahead token is `kind`; otherwise record a diagnostic
    /// and leave the window where it is.
    pub(crate) fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenKind) {
        let error = ParseError::unexpected_peek(expected, &self.peek);
        tracing::debug!(
            expected = %expected,
            found = %self.peek.kind,
            line = error.location.line,
            column = error.location.column,
            "unexpected token"
        );
        self.errors.push(error);
    }
}
