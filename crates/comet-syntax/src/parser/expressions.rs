//! Expression parsing utilities and documentation.
//!
//! This module documents the expression parsing logic found in `parser.rs`.
//!
//! ## Pratt Parsing
//!
//! Expressions are parsed with two per-token-kind rule registries:
//!
//! - **prefix rules** run when a token kind can begin an expression
//!   (identifiers, literals, and eventually unary operators);
//! - **infix rules** run when a token kind can continue an expression
//!   already in progress, and carry the precedence level used for
//!   climbing.
//!
//! `parse_expression(min_precedence)` looks up a prefix rule for the
//! current token (no rule means no expression), then folds in infix rules
//! from the lookahead token for as long as their precedence exceeds
//! `min_precedence`.
//!
//! Adding an expression form never touches that algorithm: it is one AST
//! variant plus one registry entry.
//!
//! ## Precedence Levels
//!
//! | Level | Operators |
//! |-------|-----------|
//! | `Lowest` | entry point |
//! | `Equals` | `==`, `!=` |
//! | `LessGreater` | `<`, `<=`, `>`, `>=` |
//! | `Sum` | `+`, `-` |
//! | `Product` | `*`, `/`, `%` |
//! | `Prefix` | `-x`, `!x` |
//! | `Call` | `f(x)` |
//!
//! ## Registered Rules
//!
//! | Token | Rule | Produces |
//! |-------|------|----------|
//! | `IDENT` | `parse_identifier` | `Expression::Identifier` |
//! | `NUM` | `parse_number_literal` | `Expression::Integer` |
//!
//! The infix registry is empty for now; the climbing loop is in place so
//! binary and postfix operators are pure registrations when they land.
//!
//! ## Numeric Conversion
//!
//! `NUM` tokens carry their source spelling; `parse_integer_literal`
//! converts it with a base-aware routine that understands the `0x`/`0o`/
//! `0b` prefixes, a bare leading zero as octal, and digit-separating
//! underscores. A spelling that is not an integer under the detected base
//! becomes a diagnostic, not a panic, and the literal node keeps a zero
//! value so the parse can continue.

// This module serves as documentation. The actual implementation is in parser.rs.
