//! Statement parsing implementation
//!
//! Only two statement forms exist so far:
//!
//! ```text
//! statement ::= let_stmt | return_stmt
//! let_stmt  ::= "let" IDENT "=" <skipped> ";"
//! return_stmt ::= "return" <skipped> ";"
//! ```
//!
//! Value expressions are not parsed yet: tokens up to the terminating `;` are
//! skipped and the value slot stays `None`. Any other leading token produces no
//! statement and no diagnostic.

use crate::parser::ast::{Identifier, LetStatement, ReturnStatement, Statement};
use crate::parser::parser::Parser;
use crate::parser::token::TokenKind;

impl Parser {
    /// Parse a statement starting at the current token
    pub(crate) fn parse_statement(&mut self) -> Option<Statement> {
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement().map(Statement::Let),
            TokenKind::Return => self.parse_return_statement().map(Statement::Return),
            kind => {
                tracing::trace!(
                    kind = %kind,
                    line = self.current.location.line,
                    column = self.current.location.column,
                    "no statement rule, skipping token"
                );
                None
            }
        }
    }

    /// Parse `let <ident> = ...;`
    fn parse_let_statement(&mut self) -> Option<LetStatement> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = Identifier::new(self.current.clone());

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }

        self.skip_to_semicolon();

        Some(LetStatement {
            token,
            name,
            value: None,
        })
    }

    /// Parse `return ...;`
    fn parse_return_statement(&mut self) -> Option<ReturnStatement> {
        let token = self.current.clone();

        self.skip_to_semicolon();

        Some(ReturnStatement {
            token,
            return_value: None,
        })
    }

    /// Stand-in for expression parsing. Stops on `;` or, for an unterminated
    /// final statement, on `EOF`.
    fn skip_to_semicolon(&mut self) {
        while !self.current_is(TokenKind::Semicolon) && !self.current_is(TokenKind::Eof) {
            self.next_token();
        }
    }
}
