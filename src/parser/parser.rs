//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program loop.
//! The parser pulls tokens from the lexer through a two-token window
//! (current + peek) and dispatches through lookup tables for:
//!
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//!
//! Every parsing function leaves `current` on the last token it
//! consumed; the caller performs the next advance. Violating this
//! invariant desynchronizes the window, so handlers are written (and
//! tested) against it.

use std::{collections::HashMap, mem};

use crate::{
    ast::ast::Program,
    errors::errors::Diagnostic,
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{
        create_token_lookups, BindingPower, BpLookup, LedHandler, LedLookup, NudHandler, NudLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// Owns the lexer and a two-token lookahead window over its output,
/// plus the lookup tables for statements, expressions, and binding
/// powers. Diagnostics accumulate in source order; a malformed
/// statement never stops the run.
pub struct Parser {
    /// The token source
    lexer: Lexer,
    /// The token under the cursor
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NudLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LedLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BpLookup,
    /// Problems found so far, in source order
    diagnostics: Vec<Diagnostic>,
}

impl Parser {
    /// Creates a new Parser over the given lexer.
    ///
    /// Populates all handler lookup tables and primes the two-token
    /// window by advancing twice, so `current` and `peek` hold the
    /// first two tokens of the input.
    pub fn new(lexer: Lexer) -> Self {
        let mut parser = Parser {
            lexer,
            current: Token::default(),
            peek: Token::default(),
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            diagnostics: vec![],
        };

        create_token_lookups(&mut parser);

        parser.advance();
        parser.advance();

        parser
    }

    /// Parses the whole input into a Program root.
    ///
    /// Produces one statement per iteration until `EOF`, advancing the
    /// window after each statement regardless of success and keeping
    /// only the statements that parsed. Accumulated diagnostics are
    /// available through [`errors`](Parser::errors) afterwards.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_token_is(TokenKind::EOF) {
            if let Some(statement) = parse_stmt(self) {
                program.statements.push(statement);
            }
            self.advance();
        }

        program
    }

    /// Returns every diagnostic accumulated so far, in source order.
    pub fn errors(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub(crate) fn record(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the kind of the peek token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Shifts the window one token: `current` takes `peek`, `peek`
    /// takes the next token from the lexer.
    pub fn advance(&mut self) {
        self.current = mem::replace(&mut self.peek, self.lexer.next_token());
    }

    /// Advances if the peek token has the expected kind; otherwise
    /// records an `UnexpectedToken` diagnostic and leaves the window
    /// untouched.
    pub fn expect_peek(&mut self, expected: TokenKind) -> bool {
        if self.peek_token_is(expected) {
            self.advance();
            true
        } else {
            self.record(Diagnostic::UnexpectedToken {
                expected,
                found: self.peek.kind,
            });
            false
        }
    }

    /// Binding power of the current token, `Default` if it has none.
    pub fn current_binding_power(&self) -> BindingPower {
        self.binding_power_of(self.current.kind)
    }

    /// Binding power of the peek token, `Default` if it has none.
    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power_of(self.peek.kind)
    }

    fn binding_power_of(&self, kind: TokenKind) -> BindingPower {
        match self.binding_power_lookup.get(&kind) {
            Some(binding_power) => *binding_power,
            None => BindingPower::Default,
        }
    }

    /// Returns the NUD (prefix) handler registered for a token kind.
    pub fn nud_handler(&self, kind: TokenKind) -> Option<NudHandler> {
        self.nud_lookup.get(&kind).copied()
    }

    /// Returns the LED (infix) handler registered for a token kind.
    pub fn led_handler(&self, kind: TokenKind) -> Option<LedHandler> {
        self.led_lookup.get(&kind).copied()
    }

    /// Returns the statement handler registered for a token kind.
    pub fn stmt_handler(&self, kind: TokenKind) -> Option<StmtHandler> {
        self.stmt_lookup.get(&kind).copied()
    }

    /// Registers a left denotation (infix) handler and its binding
    /// power for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LedHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NudHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }
}
