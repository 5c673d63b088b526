//! Abstract Syntax Tree (AST) definitions for Comet.
//!
//! Every node keeps the token that introduced it, so diagnostics and the
//! textual rendering can always point back at the source spelling. Nodes are
//! built once by the parser and never mutated afterwards.

use std::fmt;

use crate::lexer::Token;

/// A complete Comet program.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The statements in the program, in source order.
    pub statements: Vec<Statement>,
}

impl Program {
    /// Returns the literal of the first statement's token, or the empty
    /// string for an empty program.
    pub fn token_literal(&self) -> &str {
        match self.statements.first() {
            Some(statement) => statement.token_literal(),
            None => "",
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

/// A Comet statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `var` declaration
    Var(VarStatement),
    /// `val` declaration
    Val(ValStatement),
    /// `return` statement
    Return(ReturnStatement),
    /// Bare expression used in statement position
    Expression(ExpressionStatement),
}

impl Statement {
    /// Returns the literal of the token that introduced this statement.
    pub fn token_literal(&self) -> &str {
        match self {
            Statement::Var(statement) => statement.token_literal(),
            Statement::Val(statement) => statement.token_literal(),
            Statement::Return(statement) => statement.token_literal(),
            Statement::Expression(statement) => statement.token_literal(),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Var(statement) => write!(f, "{}", statement),
            Statement::Val(statement) => write!(f, "{}", statement),
            Statement::Return(statement) => write!(f, "{}", statement),
            Statement::Expression(statement) => write!(f, "{}", statement),
        }
    }
}

/// A `var` declaration statement.
///
/// The initializer is `None` while the parser still skips declaration
/// values; see `parser` for the skip-to-terminator placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct VarStatement {
    /// The `var` token
    pub token: Token,
    /// The name being declared
    pub name: Identifier,
    /// The initializer expression, once expression parsing populates it
    pub value: Option<Expression>,
}

impl VarStatement {
    /// Returns the declaration keyword's literal.
    pub fn token_literal(&self) -> &str {
        &self.token.text
    }
}

impl fmt::Display for VarStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = ", self.token.text, self.name)?;
        if let Some(value) = &self.value {
            write!(f, "{}", value)?;
        }
        write!(f, ";")
    }
}

/// A `val` declaration statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ValStatement {
    /// The `val` token
    pub token: Token,
    /// The name being declared
    pub name: Identifier,
    /// The initializer expression, once expression parsing populates it
    pub value: Option<Expression>,
}

impl ValStatement {
    /// Returns the declaration keyword's literal.
    pub fn token_literal(&self) -> &str {
        &self.token.text
    }
}

impl fmt::Display for ValStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = ", self.token.text, self.name)?;
        if let Some(value) = &self.value {
            write!(f, "{}", value)?;
        }
        write!(f, ";")
    }
}

/// A `return` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    /// The `return` token
    pub token: Token,
    /// The returned expression, once expression parsing populates it
    pub value: Option<Expression>,
}

impl ReturnStatement {
    /// Returns the `return` keyword's literal.
    pub fn token_literal(&self) -> &str {
        &self.token.text
    }
}

impl fmt::Display for ReturnStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.token.text)?;
        if let Some(value) = &self.value {
            write!(f, "{}", value)?;
        }
        write!(f, ";")
    }
}

/// An expression used in statement position.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    /// The first token of the expression
    pub token: Token,
    /// The expression itself
    pub expression: Expression,
}

impl ExpressionStatement {
    /// Returns the literal of the expression's first token.
    pub fn token_literal(&self) -> &str {
        &self.token.text
    }
}

impl fmt::Display for ExpressionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}

/// A Comet expression.
///
/// Adding a new expression form means adding a variant here plus one
/// registry entry in the parser; the parsing algorithm itself stays put.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A name in expression position
    Identifier(Identifier),
    /// An integer literal
    Integer(IntegerLiteral),
}

impl Expression {
    /// Returns the literal of the expression's token.
    pub fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(identifier) => identifier.token_literal(),
            Expression::Integer(literal) => literal.token_literal(),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(identifier) => write!(f, "{}", identifier),
            Expression::Integer(literal) => write!(f, "{}", literal),
        }
    }
}

/// An identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    /// The identifier token
    pub token: Token,
    /// The name of the identifier
    pub value: String,
}

impl Identifier {
    /// Returns the identifier's spelling.
    pub fn token_literal(&self) -> &str {
        &self.token.text
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// An integer literal.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    /// The numeric token
    pub token: Token,
    /// The converted value
    pub value: i64,
}

impl IntegerLiteral {
    /// Returns the literal's source spelling.
    pub fn token_literal(&self) -> &str {
        &self.token.text
    }
}

impl fmt::Display for IntegerLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The source spelling, so radix prefixes and separators survive.
        write!(f, "{}", self.token.text)
    }
}
