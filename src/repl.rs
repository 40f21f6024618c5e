//! Line-oriented interactive shell.
//!
//! Reads one line at a time, lexes it, and prints every token on its
//! own line. A debugging surface for the lexer, not part of the
//! parsing core.

use std::io::{BufRead, Write};

use crate::lexer::{lexer::Lexer, tokens::TokenKind};

pub const PROMPT: &str = ">> ";

/// Runs the shell until the input stream ends.
pub fn start(input: impl BufRead, mut output: impl Write) -> std::io::Result<()> {
    let mut lines = input.lines();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };

        let mut lexer = Lexer::new(line?);
        loop {
            let token = lexer.next_token();
            if token.kind == TokenKind::EOF {
                break;
            }
            writeln!(output, "{}", token)?;
        }
    }
}
