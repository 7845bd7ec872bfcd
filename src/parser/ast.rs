// AST (Abstract Syntax Tree) definitions for Monkey programs

use super::token::{SourceLocation, Token};
use std::fmt;

/// A bound name: the left side of a `let`, and an expression in its own right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Identifier {
    pub fn new(token: Token) -> Self {
        let value = token.literal.clone();
        Identifier { token, value }
    }

    pub fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

/// Nodes that yield a value.
///
/// The parser does not build expressions yet; this enum is where new
/// expression forms land.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Identifier(Identifier),
}

impl Expression {
    pub fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(ident) => ident.token_literal(),
        }
    }

    pub fn location(&self) -> SourceLocation {
        match self {
            Expression::Identifier(ident) => ident.token.location,
        }
    }
}

/// `let <name> = <value>;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetStatement {
    /// The `let` keyword
    pub token: Token,
    pub name: Identifier,
    /// Always `None` until expression parsing exists
    pub value: Option<Expression>,
}

/// `return <value>;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnStatement {
    /// The `return` keyword
    pub token: Token,
    /// Always `None` until expression parsing exists
    pub return_value: Option<Expression>,
}

/// A complete executable unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
}

impl Statement {
    pub fn token_literal(&self) -> &str {
        match self {
            Statement::Let(stmt) => &stmt.token.literal,
            Statement::Return(stmt) => &stmt.token.literal,
        }
    }

    /// Get the source location of the statement's leading keyword
    pub fn location(&self) -> SourceLocation {
        match self {
            Statement::Let(stmt) => stmt.token.location,
            Statement::Return(stmt) => stmt.token.location,
        }
    }
}

/// Top-level program structure: statements in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }

    /// Literal of the first statement's anchoring token, or `""` for an empty
    /// program.
    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(Statement::token_literal)
            .unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// Borrowed view over any AST node.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Program(&'a Program),
    Statement(&'a Statement),
    Expression(&'a Expression),
    Identifier(&'a Identifier),
}

impl<'a> Node<'a> {
    pub fn token_literal(&self) -> &'a str {
        match *self {
            Node::Program(program) => program.token_literal(),
            Node::Statement(stmt) => stmt.token_literal(),
            Node::Expression(expr) => expr.token_literal(),
            Node::Identifier(ident) => ident.token_literal(),
        }
    }

    /// Location of the anchoring token; `None` for an empty program.
    pub fn location(&self) -> Option<SourceLocation> {
        match *self {
            Node::Program(program) => program.statements.first().map(Statement::location),
            Node::Statement(stmt) => Some(stmt.location()),
            Node::Expression(expr) => Some(expr.location()),
            Node::Identifier(ident) => Some(ident.token.location),
        }
    }

    /// Direct children, in source order
    pub fn children(&self) -> Vec<Node<'a>> {
        match *self {
            Node::Program(program) => program.statements.iter().map(Node::Statement).collect(),
            Node::Statement(Statement::Let(stmt)) => {
                let mut children = vec![Node::Identifier(&stmt.name)];
                children.extend(stmt.value.as_ref().map(Node::Expression));
                children
            }
            Node::Statement(Statement::Return(stmt)) => {
                stmt.return_value.as_ref().map(Node::Expression).into_iter().collect()
            }
            Node::Expression(Expression::Identifier(ident)) => vec![Node::Identifier(ident)],
            Node::Identifier(_) => Vec::new(),
        }
    }
}

impl<'a> From<&'a Program> for Node<'a> {
    fn from(program: &'a Program) -> Self {
        Node::Program(program)
    }
}

impl<'a> From<&'a Statement> for Node<'a> {
    fn from(stmt: &'a Statement) -> Self {
        Node::Statement(stmt)
    }
}

impl<'a> From<&'a Expression> for Node<'a> {
    fn from(expr: &'a Expression) -> Self {
        Node::Expression(expr)
    }
}

impl<'a> From<&'a Identifier> for Node<'a> {
    fn from(ident: &'a Identifier) -> Self {
        Node::Identifier(ident)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{}", ident),
        }
    }
}

impl fmt::Display for LetStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = ", self.token.literal, self.name)?;
        if let Some(value) = &self.value {
            write!(f, "{}", value)?;
        }
        f.write_str(";")
    }
}

impl fmt::Display for ReturnStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.token.literal)?;
        if let Some(value) = &self.return_value {
            write!(f, "{}", value)?;
        }
        f.write_str(";")
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(stmt) => write!(f, "{}", stmt),
            Statement::Return(stmt) => write!(f, "{}", stmt),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::token::TokenKind;

    fn let_statement(name: &str, value: Option<Expression>) -> Statement {
        Statement::Let(LetStatement {
            token: Token::new(TokenKind::Let, "let", 1, 1),
            name: Identifier::new(Token::new(TokenKind::Ident, name, 1, 5)),
            value,
        })
    }

    #[test]
    fn test_empty_program() {
        let program = Program::new();
        assert!(program.is_empty());
        assert_eq!(program.token_literal(), "");
        assert_eq!(Node::from(&program).location(), None);
        assert_eq!(program.to_string(), "");
    }

    #[test]
    fn test_program_token_literal() {
        let program = Program {
            statements: vec![
                Statement::Return(ReturnStatement {
                    token: Token::new(TokenKind::Return, "return", 1, 1),
                    return_value: None,
                }),
                let_statement("x", None),
            ],
        };
        assert_eq!(program.token_literal(), "return");
        assert_eq!(program.to_string(), "return ;let x = ;");
    }

    #[test]
    fn test_display_with_value() {
        let value = Expression::Identifier(Identifier::new(Token::new(
            TokenKind::Ident,
            "anotherVar",
            1,
            12,
        )));
        let stmt = let_statement("myVar", Some(value));
        assert_eq!(stmt.to_string(), "let myVar = anotherVar;");
    }

    #[test]
    fn test_node_children() {
        let program = Program {
            statements: vec![let_statement("x", None)],
        };
        let root = Node::from(&program);
        let children = root.children();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].token_literal(), "let");

        let grandchildren = children[0].children();
        assert_eq!(grandchildren.len(), 1);
        assert!(matches!(grandchildren[0], Node::Identifier(ident) if ident.value == "x"));
        assert_eq!(grandchildren[0].location(), Some(SourceLocation::new(1, 5)));
        assert!(grandchildren[0].children().is_empty());
    }
}
