use lazy_static::lazy_static;
use regex::Regex;

use crate::FIXED_TOKEN_HANDLER;

use super::tokens::{lookup_identifier, Token, TokenKind};

/// Maps one pattern match to a token. Returning `None` means the match
/// consumes input without producing a token (whitespace).
pub type TokenHandler = fn(&str) -> Option<Token>;

pub struct TokenPattern {
    regex: Regex,
    handler: TokenHandler,
}

lazy_static! {
    // Tried in order; the first pattern matching at the cursor wins.
    // Two-character operators sit above their one-character prefixes,
    // which is how `==` and `!=` get their lookahead.
    static ref PATTERNS: Vec<TokenPattern> = vec![
        TokenPattern { regex: Regex::new("[ \t\r\n]+").unwrap(), handler: skip_handler },
        TokenPattern { regex: Regex::new("[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        TokenPattern { regex: Regex::new("[0-9]+").unwrap(), handler: number_handler },
        TokenPattern { regex: Regex::new("==").unwrap(), handler: FIXED_TOKEN_HANDLER!(TokenKind::Equals, "==") },
        TokenPattern { regex: Regex::new("!=").unwrap(), handler: FIXED_TOKEN_HANDLER!(TokenKind::NotEquals, "!=") },
        TokenPattern { regex: Regex::new("=").unwrap(), handler: FIXED_TOKEN_HANDLER!(TokenKind::Assignment, "=") },
        TokenPattern { regex: Regex::new("!").unwrap(), handler: FIXED_TOKEN_HANDLER!(TokenKind::Not, "!") },
        TokenPattern { regex: Regex::new("<").unwrap(), handler: FIXED_TOKEN_HANDLER!(TokenKind::Less, "<") },
        TokenPattern { regex: Regex::new(">").unwrap(), handler: FIXED_TOKEN_HANDLER!(TokenKind::Greater, ">") },
        TokenPattern { regex: Regex::new("\\+").unwrap(), handler: FIXED_TOKEN_HANDLER!(TokenKind::Plus, "+") },
        TokenPattern { regex: Regex::new("-").unwrap(), handler: FIXED_TOKEN_HANDLER!(TokenKind::Dash, "-") },
        TokenPattern { regex: Regex::new("/").unwrap(), handler: FIXED_TOKEN_HANDLER!(TokenKind::Slash, "/") },
        TokenPattern { regex: Regex::new("\\*").unwrap(), handler: FIXED_TOKEN_HANDLER!(TokenKind::Star, "*") },
        TokenPattern { regex: Regex::new(",").unwrap(), handler: FIXED_TOKEN_HANDLER!(TokenKind::Comma, ",") },
        TokenPattern { regex: Regex::new(";").unwrap(), handler: FIXED_TOKEN_HANDLER!(TokenKind::Semicolon, ";") },
        TokenPattern { regex: Regex::new("\\(").unwrap(), handler: FIXED_TOKEN_HANDLER!(TokenKind::OpenParen, "(") },
        TokenPattern { regex: Regex::new("\\)").unwrap(), handler: FIXED_TOKEN_HANDLER!(TokenKind::CloseParen, ")") },
        TokenPattern { regex: Regex::new("\\{").unwrap(), handler: FIXED_TOKEN_HANDLER!(TokenKind::OpenCurly, "{") },
        TokenPattern { regex: Regex::new("\\}").unwrap(), handler: FIXED_TOKEN_HANDLER!(TokenKind::CloseCurly, "}") },
    ];
}

fn skip_handler(_matched: &str) -> Option<Token> {
    None
}

fn symbol_handler(matched: &str) -> Option<Token> {
    Some(Token::new(lookup_identifier(matched), matched))
}

fn number_handler(matched: &str) -> Option<Token> {
    Some(Token::new(TokenKind::Int, matched))
}

/// On-demand tokenizer over an in-memory source buffer.
///
/// Each call to [`next_token`](Lexer::next_token) yields one token;
/// once the buffer is exhausted every further call yields `EOF` with an
/// empty literal. The lexer never fails: input matched by no pattern
/// comes back as an `Illegal` token carrying the offending character,
/// and classification is left to the parser's diagnostics layer.
pub struct Lexer {
    source: String,
    pos: usize,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        Lexer {
            source: source.into(),
            pos: 0,
        }
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn next_token(&mut self) -> Token {
        loop {
            if self.at_eof() {
                return Token::new(TokenKind::EOF, "");
            }

            // `pos` only ever advances by whole-match or whole-character
            // lengths, so this slice always starts on a char boundary and
            // multi-byte input cannot be misindexed.
            let remainder = &self.source[self.pos..];

            let mut hit = None;
            for pattern in PATTERNS.iter() {
                if let Some(found) = pattern.regex.find(remainder) {
                    if found.start() == 0 {
                        hit = Some((pattern.handler, found.end()));
                        break;
                    }
                }
            }

            let Some((handler, len)) = hit else {
                let Some(unexpected) = remainder.chars().next() else {
                    return Token::new(TokenKind::EOF, "");
                };
                self.pos += unexpected.len_utf8();
                return Token::new(TokenKind::Illegal, unexpected.to_string());
            };

            let token = handler(&remainder[..len]);
            self.pos += len;

            match token {
                Some(token) => return token,
                None => continue,
            }
        }
    }
}
