//! Lexical analysis (tokenization) for Comet source code.
//!
//! The lexer transforms Comet source text into a stream of tokens that can
//! be consumed by the parser.
//!
//! ## Structure
//!
//! - `scanner.rs` - Main `Lexer` struct that produces tokens
//! - `token.rs` - `Token` and `TokenKind` definitions
//!
//! ## Documentation Submodules
//!
//! - `operators` - Multi-character operator scanning
//! - `literals` - Number, string, and identifier literals
//!
//! ## Usage
//!
//! ```rust
//! use comet_syntax::lexer::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("var x = 42;");
//!
//! loop {
//!     let token = lexer.next_token();
//!     if token.kind == TokenKind::Eof {
//!         break;
//!     }
//!     println!("{:?} {:?}", token.kind, token.text);
//! }
//! ```

mod scanner;
mod token;

// Documentation and test submodules
pub mod literals;
pub mod operators;

pub use scanner::Lexer;
pub use token::{Token, TokenKind, lookup_ident};
