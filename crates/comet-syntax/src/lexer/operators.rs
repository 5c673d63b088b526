//! Operator scanning documentation.
//!
//! This module documents the operator scanning logic in `scanner.rs`.
//! The lexer handles two-character operators by looking ahead one code unit;
//! the longest spelling always wins over its one-character prefix.
//!
//! ## Operator Categories
//!
//! ### Arithmetic Operators
//!
//! | Token | Method | Variants |
//! |-------|--------|----------|
//! | `+` | `scan_plus` | `+`, `++`, `+=` |
//! | `-` | `scan_minus` | `-`, `--`, `-=` |
//! | `*` | `scan_star` | `*`, `**`, `*=` |
//! | `/` | `scan_slash` | `/`, `//`, `/=` |
//! | `%` | `scan_percent` | `%`, `%=` |
//!
//! `//` is floor division in Comet, not a comment.
//!
//! ### Comparison Operators
//!
//! | Token | Method | Variants |
//! |-------|--------|----------|
//! | `<` | `scan_less_than` | `<`, `<=`, `<<` |
//! | `>` | `scan_greater_than` | `>`, `>=`, `>>` |
//! | `=` | `scan_equal` | `=`, `==` |
//! | `!` | `scan_bang` | `!`, `!=` |
//!
//! ### Bitwise Operators
//!
//! | Token | Method | Variants |
//! |-------|--------|----------|
//! | `&` | `scan_ampersand` | `&`, `&=` |
//! | `\|` | `scan_pipe` | `\|`, `\|=` |
//! | `^` | `scan_caret` | `^`, `^=` |
//! | `~` | `scan_tilde` | `~`, `~=` |
//!
//! The word forms `and`, `or`, and `not` are keywords, not operators; see
//! `token::lookup_ident`.
//!
//! ### Single-Character Punctuation
//!
//! `[ ] ( ) { } : , ; . ` ?` each map directly to their own kind with no
//! lookahead.
//!
//! ## Lookahead Logic
//!
//! Two-character operators use peek to determine the full token:
//!
//! ```text
//! // For input "+="
//! scan_plus():
//!   current is '+'
//!   peek_char() returns '='  -> not just '+'
//!   read_char()
//!   return PlusEqual
//! ```
//!
//! The cursor is advanced past the consumed spelling before the token is
//! returned, so each `next_token` call starts on fresh input.

// This module serves as documentation. The actual implementation is in scanner.rs.

#[cfg(test)]
mod tests {
    use crate::lexer::{Lexer, TokenKind};

    fn scan_single(src: &str) -> TokenKind {
        let mut lexer = Lexer::new(src);
        lexer.next_token().kind
    }

    #[test]
    fn test_plus_operators() {
        assert_eq!(scan_single("+"), TokenKind::Plus);
        assert_eq!(scan_single("++"), TokenKind::PlusPlus);
        assert_eq!(scan_single("+="), TokenKind::PlusEqual);
    }

    #[test]
    fn test_minus_operators() {
        assert_eq!(scan_single("-"), TokenKind::Minus);
        assert_eq!(scan_single("--"), TokenKind::MinusMinus);
        assert_eq!(scan_single("-="), TokenKind::MinusEqual);
    }

    #[test]
    fn test_star_operators() {
        assert_eq!(scan_single("*"), TokenKind::Star);
        assert_eq!(scan_single("**"), TokenKind::StarStar);
        assert_eq!(scan_single("*="), TokenKind::StarEqual);
    }

    #[test]
    fn test_slash_operators() {
        assert_eq!(scan_single("/"), TokenKind::Slash);
        assert_eq!(scan_single("//"), TokenKind::SlashSlash);
        assert_eq!(scan_single("/="), TokenKind::SlashEqual);
    }

    #[test]
    fn test_equal_operators() {
        assert_eq!(scan_single("="), TokenKind::Equal);
        assert_eq!(scan_single("=="), TokenKind::EqualEqual);
    }

    #[test]
    fn test_bang_operators() {
        assert_eq!(scan_single("!"), TokenKind::Bang);
        assert_eq!(scan_single("!="), TokenKind::NotEqual);
    }

    #[test]
    fn test_less_than_operators() {
        assert_eq!(scan_single("<"), TokenKind::LessThan);
        assert_eq!(scan_single("<="), TokenKind::LessThanEqual);
        assert_eq!(scan_single("<<"), TokenKind::LeftShift);
    }

    #[test]
    fn test_greater_than_operators() {
        assert_eq!(scan_single(">"), TokenKind::GreaterThan);
        assert_eq!(scan_single(">="), TokenKind::GreaterThanEqual);
        assert_eq!(scan_single(">>"), TokenKind::RightShift);
    }

    #[test]
    fn test_bitwise_operators() {
        assert_eq!(scan_single("&"), TokenKind::Ampersand);
        assert_eq!(scan_single("&="), TokenKind::AmpersandEqual);
        assert_eq!(scan_single("|"), TokenKind::Pipe);
        assert_eq!(scan_single("|="), TokenKind::PipeEqual);
        assert_eq!(scan_single("^"), TokenKind::Caret);
        assert_eq!(scan_single("^="), TokenKind::CaretEqual);
        assert_eq!(scan_single("~"), TokenKind::Tilde);
        assert_eq!(scan_single("~="), TokenKind::TildeEqual);
        assert_eq!(scan_single("%"), TokenKind::Percent);
        assert_eq!(scan_single("%="), TokenKind::PercentEqual);
    }

    #[test]
    fn test_single_character_punctuation() {
        assert_eq!(scan_single("["), TokenKind::LeftBracket);
        assert_eq!(scan_single("]"), TokenKind::RightBracket);
        assert_eq!(scan_single(":"), TokenKind::Colon);
        assert_eq!(scan_single(","), TokenKind::Comma);
        assert_eq!(scan_single(";"), TokenKind::Semicolon);
        assert_eq!(scan_single("."), TokenKind::Dot);
        assert_eq!(scan_single("("), TokenKind::LeftParen);
        assert_eq!(scan_single(")"), TokenKind::RightParen);
        assert_eq!(scan_single("{"), TokenKind::LeftBrace);
        assert_eq!(scan_single("}"), TokenKind::RightBrace);
        assert_eq!(scan_single("`"), TokenKind::Backtick);
        assert_eq!(scan_single("?"), TokenKind::Question);
    }

    // Every two-character spelling must come back as one token whose text
    // is the full spelling, never as two one-character tokens.
    #[test]
    fn test_two_character_spellings_stay_whole() {
        let spellings = [
            ("==", TokenKind::EqualEqual),
            ("!=", TokenKind::NotEqual),
            ("<=", TokenKind::LessThanEqual),
            (">=", TokenKind::GreaterThanEqual),
            ("**", TokenKind::StarStar),
            ("//", TokenKind::SlashSlash),
            ("+=", TokenKind::PlusEqual),
            ("-=", TokenKind::MinusEqual),
            ("*=", TokenKind::StarEqual),
            ("/=", TokenKind::SlashEqual),
            ("&=", TokenKind::AmpersandEqual),
            ("|=", TokenKind::PipeEqual),
            ("~=", TokenKind::TildeEqual),
            ("^=", TokenKind::CaretEqual),
            ("%=", TokenKind::PercentEqual),
            ("<<", TokenKind::LeftShift),
            (">>", TokenKind::RightShift),
            ("++", TokenKind::PlusPlus),
            ("--", TokenKind::MinusMinus),
        ];

        for (spelling, expected) in spellings {
            let mut lexer = Lexer::new(spelling);

            let token = lexer.next_token();
            assert_eq!(token.kind, expected, "kind for {:?}", spelling);
            assert_eq!(token.text, spelling, "text for {:?}", spelling);
            assert_eq!(
                lexer.next_token().kind,
                TokenKind::Eof,
                "{:?} must be a single token",
                spelling
            );
        }
    }

    #[test]
    fn test_compound_assignment_run() {
        let input = "&=|=^=*=-=+=/=//>><<%=++--~=";
        let expected = [
            TokenKind::AmpersandEqual,
            TokenKind::PipeEqual,
            TokenKind::CaretEqual,
            TokenKind::StarEqual,
            TokenKind::MinusEqual,
            TokenKind::PlusEqual,
            TokenKind::SlashEqual,
            TokenKind::SlashSlash,
            TokenKind::RightShift,
            TokenKind::LeftShift,
            TokenKind::PercentEqual,
            TokenKind::PlusPlus,
            TokenKind::MinusMinus,
            TokenKind::TildeEqual,
            TokenKind::Eof,
        ];

        let mut lexer = Lexer::new(input);
        for (i, expected_kind) in expected.iter().enumerate() {
            assert_eq!(lexer.next_token().kind, *expected_kind, "token {}", i);
        }
    }
}
