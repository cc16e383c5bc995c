//! Parse errors
//!
//! Every error is fatal: the parser stops at the first one and no partial
//! game is returned. Line numbers are 1-based.

use crate::bitsy::ast::Id;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A section ran out of input (or hit a blank line) inside a fixed-size body.
    #[error("line {line}: `{section}` ended after {found} of {expected} {unit}")]
    Truncated {
        line: usize,
        section: String,
        unit: &'static str,
        expected: usize,
        found: usize,
    },

    /// A bitmap or grid row of the wrong width.
    #[error("line {line}: expected {expected} entries in row, found {found}")]
    MalformedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: `{token}` is not a base-{radix} number")]
    InvalidNumber {
        line: usize,
        token: String,
        radix: u32,
    },

    #[error("line {line}: `{value}` is not an r,g,b color")]
    InvalidColor { line: usize, value: String },

    /// A keyed line is missing one of its arguments.
    #[error("line {line}: `{keyword}` is missing its {argument}")]
    MissingArgument {
        line: usize,
        keyword: String,
        argument: &'static str,
    },

    /// `ITM <id> <count>` under a sprite that is not the player.
    #[error("line {line}: starting items belong to the player, not sprite {sprite}")]
    StartingItemOnNonPlayer { line: usize, sprite: Id },

    /// A `"""` dialog block that is never closed.
    #[error("line {line}: dialog `{dialog}` has no closing \"\"\"")]
    UnterminatedDialog { line: usize, dialog: String },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::Truncated { line, .. }
            | ParseError::MalformedRow { line, .. }
            | ParseError::InvalidNumber { line, .. }
            | ParseError::InvalidColor { line, .. }
            | ParseError::MissingArgument { line, .. }
            | ParseError::StartingItemOnNonPlayer { line, .. }
            | ParseError::UnterminatedDialog { line, .. } => *line,
        }
    }
}
