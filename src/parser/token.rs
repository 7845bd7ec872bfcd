//! Token model shared by the lexer and parser
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact source text it was read from
//! and the [`SourceLocation`] of its first character.

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::OnceLock;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Every lexical category the lexer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Illegal,
    Eof,

    // Identifiers and literals
    Ident,
    Int,

    // Operators
    Assign,   // =
    Plus,     // +
    Minus,    // -
    Bang,     // !
    Asterisk, // *
    Slash,    // /
    Lt,       // <
    Gt,       // >
    Eq,       // ==
    NotEq,    // !=

    // Delimiters
    Comma,     // ,
    Semicolon, // ;
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }

    // Keywords
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl TokenKind {
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Function
                | TokenKind::Let
                | TokenKind::True
                | TokenKind::False
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Return
        )
    }

    pub fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Assign
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Bang
                | TokenKind::Asterisk
                | TokenKind::Slash
                | TokenKind::Lt
                | TokenKind::Gt
                | TokenKind::Eq
                | TokenKind::NotEq
        )
    }

    pub fn is_delimiter(self) -> bool {
        matches!(
            self,
            TokenKind::Comma
                | TokenKind::Semicolon
                | TokenKind::LParen
                | TokenKind::RParen
                | TokenKind::LBrace
                | TokenKind::RBrace
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Bang => "BANG",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Slash => "SLASH",
            TokenKind::Lt => "LT",
            TokenKind::Gt => "GT",
            TokenKind::Eq => "EQ",
            TokenKind::NotEq => "NOT_EQ",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
        };
        f.write_str(name)
    }
}

fn keywords() -> &'static FxHashMap<&'static str, TokenKind> {
    static KEYWORDS: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();
    KEYWORDS.get_or_init(|| {
        let mut table = FxHashMap::default();
        table.insert("fn", TokenKind::Function);
        table.insert("let", TokenKind::Let);
        table.insert("true", TokenKind::True);
        table.insert("false", TokenKind::False);
        table.insert("if", TokenKind::If);
        table.insert("else", TokenKind::Else);
        table.insert("return", TokenKind::Return);
        table
    })
}

/// Classify a scanned identifier run: a keyword kind on exact match, otherwise
/// [`TokenKind::Ident`].
pub fn lookup_ident(ident: &str) -> TokenKind {
    keywords().get(ident).copied().unwrap_or(TokenKind::Ident)
}

/// A single lexeme. Never mutated after the lexer hands it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text; empty for [`TokenKind::Eof`].
    pub literal: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        literal: impl Into<String>,
        line: usize,
        column: usize,
    ) -> Self {
        Self {
            kind,
            literal: literal.into(),
            location: SourceLocation::new(line, column),
        }
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn column(&self) -> usize {
        self.location.column
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:?} at line {}, column {}",
            self.kind, self.literal, self.location.line, self.location.column
        )
    }
}
