//! Lexer
//!
//! The bitsy format is line oriented, so lexing happens in two layers:
//!
//! 1. The document is split into numbered [`Line`]s. A line knows whether it
//!    is blank or a comment and what its leading keyword is.
//! 2. Inside a line, the logos [`Token`] lexer splits arguments into
//!    whitespace-separated fields of comma-separated parts, so that
//!    `EXT 1,2 3,4,5` reads as `[EXT] [1 2] [3 4 5]`.
//!
//! Neither layer interprets numbers; that is left to the section parsers,
//! which know which fields are base 36 and which are decimal.

pub mod line;
pub mod tokens;

pub use line::{split_lines, Line};
pub use tokens::{fields, tokenize, Token};
