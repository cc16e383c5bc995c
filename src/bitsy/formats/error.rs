//! Errors raised while converting games between formats

use crate::bitsy::parsing::ParseError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("format '{0}' not found")]
    FormatNotFound(String),

    #[error("{0}")]
    NotSupported(String),

    /// A bitsy document was rejected by the parser; keeps the line number.
    #[error(transparent)]
    Syntax(#[from] ParseError),

    /// Any other format failed to read its input.
    #[error("parse error: {0}")]
    ParseError(String),

    #[error("serialization error: {0}")]
    SerializationError(String),
}
