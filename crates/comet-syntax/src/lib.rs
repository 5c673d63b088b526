// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # comet-syntax
//!
//! The front end of the Comet language toolchain, implemented in Rust.
//!
//! ## Overview
//!
//! This crate turns Comet source text into an abstract syntax tree in two
//! pull-based stages:
//! - A lexer that emits one typed token per call
//! - A Pratt parser that assembles tokens into AST nodes through
//!   per-token-kind rule registries
//!
//! Evaluation, the REPL, and the command line live elsewhere; this crate is
//! purely an in-memory text-to-tree transform.
//!
//! ## Quick Start
//!
//! ```rust
//! use comet_syntax::{Lexer, Parser};
//!
//! let mut parser = Parser::new(Lexer::new("var answer = 42;"));
//! let program = parser.parse_program();
//!
//! assert!(parser.errors().is_empty());
//! assert_eq!(program.statements.len(), 1);
//! ```
//!
//! Or through the [`parse`] convenience function:
//!
//! ```rust
//! let program = comet_syntax::parse("val greeting = 10;").expect("should parse");
//! assert_eq!(program.statements.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod lexer;
pub mod parser;

// Re-exports for convenience
pub use ast::Program;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;

/// Errors produced by the front end.
///
/// Malformed input never panics or aborts a parse; the parser accumulates
/// diagnostics and this type carries them across the crate boundary.
#[derive(Debug, Clone)]
pub enum Error {
    /// One or more syntax diagnostics were collected while parsing, in the
    /// order they were recorded.
    Syntax(Vec<String>),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Syntax(messages) => write!(f, "SyntaxError: {}", messages.join("; ")),
        }
    }
}

impl std::error::Error for Error {}

/// Parses Comet source text into a [`Program`].
///
/// This is a convenience wrapper over [`Lexer`] and [`Parser`] that turns a
/// non-empty diagnostics list into an [`Error`]. Use the parser directly to
/// inspect the partial program alongside its diagnostics.
///
/// # Examples
///
/// ```rust
/// let program = comet_syntax::parse("return result;").expect("should parse");
/// assert_eq!(program.statements[0].token_literal(), "return");
/// ```
pub fn parse(source: &str) -> Result<Program, Error> {
    let lexer = Lexer::new(source);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    if parser.errors().is_empty() {
        Ok(program)
    } else {
        Err(Error::Syntax(parser.errors().to_vec()))
    }
}
