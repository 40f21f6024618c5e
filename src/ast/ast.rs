use std::fmt::Display;

use super::statements::Statement;

/// Common capability of every AST node: each node retains the token it
/// was parsed from, for literal reproduction and error context.
pub trait Node {
    fn token_literal(&self) -> &str;
}

/// Root of every parse. Owns its statements exclusively; nodes are
/// built once during parsing and never mutated afterwards.
#[derive(Debug, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        match self.statements.first() {
            Some(statement) => statement.token_literal(),
            None => "",
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}
