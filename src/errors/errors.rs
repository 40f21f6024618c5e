use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// A non-fatal problem found while parsing.
///
/// Diagnostics are accumulated by the parser in source order and never
/// abort a parse; the caller decides whether a non-empty list rejects
/// the tree. The rendered messages are a compatibility contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
    #[error("no prefix parse function for {kind} found")]
    MissingPrefixParse { kind: TokenKind },
    #[error("could not parse {literal:?} as integer")]
    IntegerParse { literal: String },
}
