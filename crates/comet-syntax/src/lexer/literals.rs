//! Literal scanning documentation.
//!
//! This module documents the literal scanning logic in `scanner.rs`.
//! The lexer handles numeric, string, and identifier literals.
//!
//! ## Numeric Literals
//!
//! ### Decimal Numbers
//!
//! ```text
//! 42        -> NUM("42")
//! 3.14      -> NUM("3.14")
//! 1_000     -> NUM("1_000")
//! ```
//!
//! Underscores are accepted anywhere digits are and are kept verbatim in
//! the token text; the parser strips them during conversion. A decimal
//! point joins the literal only when it sits next to a digit, so `1.` scans
//! as `NUM("1")` followed by `DOT`.
//!
//! ### Integer Bases
//!
//! | Prefix | Base | Example |
//! |--------|------|---------|
//! | `0x` / `0X` | 16 | `0x123` |
//! | `0o` / `0O` | 8 | `0o777` |
//! | `0b` / `0B` | 2 | `0b1010` |
//!
//! The two-character prefix is consumed verbatim without validating the
//! digits that follow it. Scanning then stops at the first code unit that
//! is not a decimal digit, underscore, or qualifying decimal point — hex
//! letters included — so a radix payload with letters in it truncates and
//! the residue re-lexes as an identifier on the next call:
//!
//! ```text
//! 0x123_abc_123**  -> NUM("0x123_"), IDENT("abc_123"), POW("**")
//! 0O1abc           -> NUM("0O1"), IDENT("abc")
//! 0xff             -> NUM("0x"), IDENT("ff")
//! ```
//!
//! This truncation is long-standing behavior that downstream consumers and
//! tests rely on; it is preserved as-is. See DESIGN.md before changing it.
//!
//! Method: `read_number`
//!
//! ## String Literals
//!
//! Method: `read_string`
//!
//! ```text
//! "hello"   -> STRING("hello")    delimiters excluded
//! "foo bar" -> STRING("foo bar")
//! ```
//!
//! There is no escape handling. An unterminated string scans to the end of
//! the input (documented limitation, not a fatal error).
//!
//! ## Identifiers and Keywords
//!
//! Method: `read_identifier`
//!
//! - Start: `A-Z`, `a-z`, `_`
//! - Continue: start characters plus `0-9`
//!
//! The scanned spelling is looked up in the keyword table:
//!
//! ```text
//! "fun"   -> TokenKind::Function
//! "var"   -> TokenKind::Var
//! "myVar" -> TokenKind::Identifier
//! ```

// This module serves as documentation. The actual implementation is in scanner.rs.

#[cfg(test)]
mod tests {
    use crate::lexer::{Lexer, TokenKind};

    fn lex_all(src: &str) -> Vec<(TokenKind, String)> {
        Lexer::new(src).map(|token| (token.kind, token.text)).collect()
    }

    #[test]
    fn test_radix_forms() {
        for literal in ["0b10", "0B1", "0x1", "0X1", "0o1", "0O1", "0x123"] {
            let mut lexer = Lexer::new(literal);

            let token = lexer.next_token();
            assert_eq!(token.kind, TokenKind::Number, "kind for {:?}", literal);
            assert_eq!(token.text, literal, "text for {:?}", literal);
            assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        }
    }

    #[test]
    fn test_underscore_separators() {
        for literal in ["0_10", "0b10_111", "1_000_000", "1__0"] {
            let mut lexer = Lexer::new(literal);

            let token = lexer.next_token();
            assert_eq!(token.kind, TokenKind::Number, "kind for {:?}", literal);
            assert_eq!(token.text, literal, "text for {:?}", literal);
        }
    }

    #[test]
    fn test_hex_payload_truncates_at_letters() {
        assert_eq!(
            lex_all("0x123_abc_123**"),
            vec![
                (TokenKind::Number, "0x123_".to_string()),
                (TokenKind::Identifier, "abc_123".to_string()),
                (TokenKind::StarStar, "**".to_string()),
            ]
        );
        assert_eq!(
            lex_all("0xff"),
            vec![
                (TokenKind::Number, "0x".to_string()),
                (TokenKind::Identifier, "ff".to_string()),
            ]
        );
    }

    #[test]
    fn test_octal_payload_truncates_at_letter() {
        assert_eq!(
            lex_all("0O1abc"),
            vec![
                (TokenKind::Number, "0O1".to_string()),
                (TokenKind::Identifier, "abc".to_string()),
            ]
        );
    }

    #[test]
    fn test_decimal_point_needs_adjacent_digit() {
        assert_eq!(
            lex_all("1.5"),
            vec![(TokenKind::Number, "1.5".to_string())]
        );
        assert_eq!(
            lex_all("1."),
            vec![
                (TokenKind::Number, "1".to_string()),
                (TokenKind::Dot, ".".to_string()),
            ]
        );
    }

    #[test]
    fn test_bare_radix_prefix() {
        // The prefix is consumed even with nothing after it.
        assert_eq!(lex_all("0x"), vec![(TokenKind::Number, "0x".to_string())]);
    }

    #[test]
    fn test_string_excludes_delimiters() {
        assert_eq!(
            lex_all(r#""foobar" "foo bar""#),
            vec![
                (TokenKind::String, "foobar".to_string()),
                (TokenKind::String, "foo bar".to_string()),
            ]
        );
    }

    #[test]
    fn test_unterminated_string_runs_to_end() {
        let mut lexer = Lexer::new("\"abc");

        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::String);
        assert_eq!(token.text, "abc");
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn test_identifier_with_keyword_infix() {
        assert_eq!(
            lex_all("abc_fun_123"),
            vec![(TokenKind::Identifier, "abc_fun_123".to_string())]
        );
    }

    #[test]
    fn test_word_operators_are_keywords() {
        assert_eq!(
            lex_all("not and or"),
            vec![
                (TokenKind::Not, "not".to_string()),
                (TokenKind::And, "and".to_string()),
                (TokenKind::Or, "or".to_string()),
            ]
        );
    }
}
