//! The main parser implementation.

use rustc_hash::FxHashMap;

use crate::ast::{
    Expression, ExpressionStatement, Identifier, IntegerLiteral, Program, ReturnStatement,
    Statement, ValStatement, VarStatement,
};
use crate::lexer::{Lexer, Token, TokenKind};

/// Binding strength for infix rules, lowest to highest.
///
/// New infix rules must pick a level from this ordering; the ordering itself
/// is a compatibility contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Entry level; binds nothing
    Lowest,
    /// Equality-class operators (`==`, `!=`)
    Equals,
    /// Relational operators (`<`, `<=`, `>`, `>=`)
    LessGreater,
    /// Additive operators (`+`, `-`)
    Sum,
    /// Multiplicative operators (`*`, `/`, `%`)
    Product,
    /// Unary prefix operators (`-x`, `!x`)
    Prefix,
    /// Call expressions (`f(x)`)
    Call,
}

/// A parse rule invoked when a token kind may begin an expression.
type PrefixParseFn<'a> = fn(&mut Parser<'a>) -> Option<Expression>;

/// A parse rule invoked when a token kind may continue an expression
/// already in progress, receiving the finished left-hand side.
type InfixParseFn<'a> = fn(&mut Parser<'a>, Expression) -> Option<Expression>;

/// A Pratt parser for Comet.
///
/// The parser pulls tokens from its lexer two at a time (current plus one
/// token of lookahead) and dispatches expression parsing through per-kind
/// rule registries. Malformed input never aborts the parse; each problem is
/// recorded as a diagnostic and the offending statement is abandoned.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    cur_token: Token,
    peek_token: Token,
    errors: Vec<String>,
    prefix_parse_fns: FxHashMap<TokenKind, PrefixParseFn<'a>>,
    infix_parse_fns: FxHashMap<TokenKind, (Precedence, InfixParseFn<'a>)>,
}

impl<'a> Parser<'a> {
    /// Creates a new parser that consumes the given lexer.
    pub fn new(lexer: Lexer<'a>) -> Self {
        let mut parser = Self {
            lexer,
            cur_token: Token::new(TokenKind::Eof, String::new()),
            peek_token: Token::new(TokenKind::Eof, String::new()),
            errors: Vec::new(),
            prefix_parse_fns: FxHashMap::default(),
            infix_parse_fns: FxHashMap::default(),
        };

        parser.register_prefix(TokenKind::Identifier, Self::parse_identifier);
        parser.register_prefix(TokenKind::Number, Self::parse_number_literal);

        // Read two tokens so cur_token and peek_token are both set.
        parser.next_token();
        parser.next_token();

        parser
    }

    /// Parses the whole token stream into a [`Program`].
    ///
    /// Always returns a (possibly partial) program; callers decide whether
    /// the parse succeeded by checking [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program {
            statements: Vec::new(),
        };

        while !self.cur_token_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                program.statements.push(statement);
            }
            self.next_token();
        }

        program
    }

    /// Returns the diagnostics collected so far, in the order they were
    /// recorded.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Registers the rule invoked when `kind` begins an expression. New
    /// literal and unary forms hook in here; `parse_expression` stays put.
    fn register_prefix(&mut self, kind: TokenKind, rule: PrefixParseFn<'a>) {
        self.prefix_parse_fns.insert(kind, rule);
    }

    /// Registers the rule and binding strength invoked when `kind` continues
    /// an expression already in progress.
    #[allow(dead_code)] // operators land here as expression support grows
    fn register_infix(&mut self, kind: TokenKind, precedence: Precedence, rule: InfixParseFn<'a>) {
        self.infix_parse_fns.insert(kind, (precedence, rule));
    }

    fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur_token.kind {
            TokenKind::Var | TokenKind::Val => self.parse_declaration_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_declaration_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenKind::Identifier) {
            self.skip_to_terminator();
            return None;
        }

        let name = Identifier {
            token: self.cur_token.clone(),
            value: self.cur_token.text.clone(),
        };

        if !self.expect_peek(TokenKind::Equal) {
            self.skip_to_terminator();
            return None;
        }

        // TODO: parse the initializer with parse_expression once operator
        // and literal coverage is in place. Until then the declaration keeps
        // only its name and the value tokens are skipped.
        self.skip_to_terminator();

        Some(match token.kind {
            TokenKind::Val => Statement::Val(ValStatement {
                token,
                name,
                value: None,
            }),
            _ => Statement::Var(VarStatement {
                token,
                name,
                value: None,
            }),
        })
    }

    fn parse_return_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token.clone();

        self.next_token();

        // Same placeholder as declarations: the returned value is skipped,
        // not parsed, until expression support lands.
        self.skip_to_terminator();

        Some(Statement::Return(ReturnStatement { token, value: None }))
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token.clone();

        let expression = self.parse_expression(Precedence::Lowest)?;

        // Statement terminators are optional at end of input.
        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Statement::Expression(ExpressionStatement {
            token,
            expression,
        }))
    }

    fn parse_expression(&mut self, min_precedence: Precedence) -> Option<Expression> {
        let prefix = self.prefix_parse_fns.get(&self.cur_token.kind).copied()?;
        let mut left = prefix(self)?;

        while min_precedence < self.peek_precedence() {
            let Some(&(_, infix)) = self.infix_parse_fns.get(&self.peek_token.kind) else {
                break;
            };
            self.next_token();
            left = infix(self, left)?;
        }

        Some(left)
    }

    fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::Identifier(Identifier {
            token: self.cur_token.clone(),
            value: self.cur_token.text.clone(),
        }))
    }

    fn parse_number_literal(&mut self) -> Option<Expression> {
        // Integers are the only numeric type for now; this is where a
        // numeric-kind dispatch would go once floats are real values.
        self.parse_integer_literal()
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();

        let value = match parse_radix_int(&token.text) {
            Some(value) => value,
            None => {
                self.errors
                    .push(format!("could not parse {:?} as integer", token.text));
                0
            }
        };

        Some(Expression::Integer(IntegerLiteral { token, value }))
    }

    /// Binding strength of the registered infix rule for the lookahead
    /// token, or `Lowest` when none is registered.
    fn peek_precedence(&self) -> Precedence {
        self.infix_parse_fns
            .get(&self.peek_token.kind)
            .map_or(Precedence::Lowest, |(precedence, _)| *precedence)
    }

    /// Advances past the rest of the current statement, stopping on its
    /// `;` terminator or the end of input.
    fn skip_to_terminator(&mut self) {
        while !self.cur_token_is(TokenKind::Semicolon) && !self.cur_token_is(TokenKind::Eof) {
            self.next_token();
        }
    }

    fn next_token(&mut self) {
        self.cur_token = std::mem::replace(&mut self.peek_token, self.lexer.next_token());
    }

    fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.cur_token.kind == kind
    }

    fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Advances when the lookahead token has the expected kind; otherwise
    /// records a diagnostic and stays put.
    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token_is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    fn peek_error(&mut self, kind: TokenKind) {
        self.errors.push(format!(
            "expected next token to be `{}`, got `{}` instead",
            kind, self.peek_token.kind
        ));
    }
}

/// Converts a numeric literal's text to an `i64`, honoring the `0x`/`0o`/
/// `0b` radix prefixes, a bare leading zero as octal, and digit-separating
/// underscores. Returns `None` when the text is not an integer under the
/// detected base.
fn parse_radix_int(text: &str) -> Option<i64> {
    let bytes = text.as_bytes();
    let (base, digits) = match bytes {
        [b'0', b'x' | b'X', rest @ ..] => (16, rest),
        [b'0', b'o' | b'O', rest @ ..] => (8, rest),
        [b'0', b'b' | b'B', rest @ ..] => (2, rest),
        [b'0', rest @ ..] if !rest.is_empty() => (8, rest),
        _ => (10, bytes),
    };

    if digits.is_empty() {
        return None;
    }

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for (i, &ch) in digits.iter().enumerate() {
        if ch == b'_' {
            // Underscores separate digits. They may follow the radix prefix,
            // but never trail the literal or stack up.
            let next = digits.get(i + 1)?;
            digit_value(*next, base)?;
            continue;
        }
        let digit = digit_value(ch, base)?;
        value = value.checked_mul(base)?.checked_add(digit)?;
        seen_digit = true;
    }

    seen_digit.then_some(value)
}

fn digit_value(ch: u8, base: i64) -> Option<i64> {
    let digit = match ch {
        b'0'..=b'9' => i64::from(ch - b'0'),
        b'a'..=b'f' => i64::from(ch - b'a') + 10,
        b'A'..=b'F' => i64::from(ch - b'A') + 10,
        _ => return None,
    };
    (digit < base).then_some(digit)
}
