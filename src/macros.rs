//! Utility macros for the lexer.
//!
//! `FIXED_TOKEN_HANDLER!` builds a pattern handler for tokens whose
//! literal text is always the same (operators and delimiters), which
//! removes one boilerplate function per entry in the pattern table.

/// Creates a token handler that ignores the matched text and produces
/// a token with a fixed kind and literal.
///
/// # Example
///
/// ```ignore
/// TokenPattern {
///     regex: Regex::new("\\+").unwrap(),
///     handler: FIXED_TOKEN_HANDLER!(TokenKind::Plus, "+"),
/// }
/// ```
#[macro_export]
macro_rules! FIXED_TOKEN_HANDLER {
    ($kind:expr, $literal:literal) => {
        |_matched: &str| Some(Token::new($kind, $literal))
    };
}
