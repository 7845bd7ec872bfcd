//! Lexer (tokenizer) for Monkey source code
//!
//! Converts raw source text into [`Token`]s, one per call to
//! [`Lexer::next_token`]. Characters the language does not know about are not an
//! error here: they come back as [`TokenKind::Illegal`] tokens and it is up to
//! the caller to decide what to do with them.
//!
//! # Column rules
//!
//! Single-character tokens report the column of their character. Two-character
//! operators (`==`, `!=`) report the column of their first character. `EOF` and
//! `ILLEGAL` tokens report the current column minus one; downstream tooling
//! depends on these exact values.

use super::token::{lookup_ident, Token, TokenKind};

/// Pull-based lexer over a fully materialised source string.
pub struct Lexer {
    input: Vec<char>,
    /// Index of `ch`
    position: usize,
    /// Index of the character after `ch`
    read_position: usize,
    /// `None` once the input is exhausted
    ch: Option<char>,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    ///
    /// The first character is loaded immediately, so the first
    /// [`next_token`](Self::next_token) call sees a valid cursor.
    pub fn new(input: &str) -> Self {
        let mut lexer = Self {
            input: input.chars().collect(),
            position: 0,
            read_position: 0,
            ch: None,
            line: 1,
            column: 0,
        };
        lexer.advance();
        lexer
    }

    /// Produce the next token. Once the input is exhausted every call returns
    /// the same `EOF` token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let line = self.line;
        let token = match self.ch {
            Some('=') => {
                if self.peek() == Some('=') {
                    self.advance();
                    Token::new(TokenKind::Eq, "==", line, self.column - 1)
                } else {
                    self.single(TokenKind::Assign, '=')
                }
            }
            Some('!') => {
                if self.peek() == Some('=') {
                    self.advance();
                    Token::new(TokenKind::NotEq, "!=", line, self.column - 1)
                } else {
                    self.single(TokenKind::Bang, '!')
                }
            }
            Some('+') => self.single(TokenKind::Plus, '+'),
            Some('-') => self.single(TokenKind::Minus, '-'),
            Some('*') => self.single(TokenKind::Asterisk, '*'),
            Some('/') => self.single(TokenKind::Slash, '/'),
            Some('<') => self.single(TokenKind::Lt, '<'),
            Some('>') => self.single(TokenKind::Gt, '>'),
            Some(',') => self.single(TokenKind::Comma, ','),
            Some(';') => self.single(TokenKind::Semicolon, ';'),
            Some('(') => self.single(TokenKind::LParen, '('),
            Some(')') => self.single(TokenKind::RParen, ')'),
            Some('{') => self.single(TokenKind::LBrace, '{'),
            Some('}') => self.single(TokenKind::RBrace, '}'),
            None => Token::new(TokenKind::Eof, "", line, self.column - 1),
            Some(ch) if is_letter(ch) => {
                // The scan already moved the cursor past the run
                let literal = self.read_while(is_letter);
                let column = self.column - literal.chars().count();
                return Token::new(lookup_ident(&literal), literal, line, column);
            }
            Some(ch) if is_digit(ch) => {
                let literal = self.read_while(is_digit);
                let column = self.column - literal.chars().count();
                return Token::new(TokenKind::Int, literal, line, column);
            }
            Some(ch) => Token::new(TokenKind::Illegal, ch.to_string(), line, self.column - 1),
        };

        self.advance();
        token
    }

    /// Tokenize the remaining input. The returned vector always ends with
    /// exactly one `EOF` token.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }

        tokens
    }

    fn single(&self, kind: TokenKind, ch: char) -> Token {
        Token::new(kind, ch.to_string(), self.line, self.column)
    }

    /// Move the cursor one character forward.
    ///
    /// A consumed newline bumps the line counter before the next character is
    /// loaded, so the newline itself belongs to the line it terminates.
    fn advance(&mut self) {
        if self.read_position > self.input.len() {
            return;
        }

        if self.ch == Some('\n') {
            self.line += 1;
            self.column = 0;
        }

        self.ch = self.input.get(self.read_position).copied();
        self.position = self.read_position;
        self.read_position += 1;
        self.column += 1;
    }

    /// Peek at the character after the cursor without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.read_position).copied()
    }

    fn read_while(&mut self, accept: fn(char) -> bool) -> String {
        let start = self.position;
        while self.ch.is_some_and(accept) {
            self.advance();
        }
        self.input[start..self.position].iter().collect()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(' ' | '\t' | '\n' | '\r')) {
            self.advance();
        }
    }
}

fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}
