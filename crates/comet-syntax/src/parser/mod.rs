//! Parser for Comet source code.
//!
//! Transforms a stream of tokens into an Abstract Syntax Tree (AST).
//!
//! ## Structure
//!
//! - `parser` - Main Pratt parser implementation and rule registries
//!
//! ## Documentation Submodules
//!
//! The following submodules provide documentation and additional tests
//! for specific parsing areas:
//!
//! - `statements` - Statement parsing (var, val, return, expressions)
//! - `expressions` - Expression parsing (prefix/infix rules, precedence)
//!
//! ## Usage
//!
//! ```rust
//! use comet_syntax::{Lexer, Parser};
//!
//! let mut parser = Parser::new(Lexer::new("var x = 1;"));
//! let program = parser.parse_program();
//! assert!(parser.errors().is_empty());
//! ```
//!
//! The parser never aborts on malformed input; it accumulates diagnostics
//! instead. Check `errors()` before trusting the returned program:
//!
//! ```rust
//! use comet_syntax::{Lexer, Parser};
//!
//! let mut parser = Parser::new(Lexer::new("var 5 = 5;"));
//! let program = parser.parse_program();
//! assert!(program.statements.is_empty());
//! assert_eq!(parser.errors().len(), 1);
//! ```

mod parser;

// Documentation and test submodules
pub mod expressions;
pub mod statements;

pub use parser::{Parser, Precedence};
