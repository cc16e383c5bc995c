//! Main module for bitsy library functionality
//!
//! The two core operations are [`parse`] (text to [`Game`]) and [`serialize`]
//! (`Game` to lines of text). They are pure functions; everything else in this
//! module either feeds them or consumes their output.
//!
//! - `ast`: the game record and its entity types
//! - `grammar`: keywords and radix helpers shared by the parser and serializer
//! - `lexing`: line classification and in-line tokenization
//! - `parsing`: the section-by-section parser
//! - `formats`: the bitsy serializer plus json/yaml/treeviz formats
//! - `editing`: edit actions and the reducer that applies them
//! - `config`: layered configuration for the command-line tool

pub mod ast;
pub mod config;
pub mod editing;
pub mod formats;
pub mod grammar;
pub mod lexing;
pub mod parsing;
pub mod testing;

pub use ast::Game;
pub use formats::{serialize, serialize_to_string};
pub use parsing::{parse, ParseError};
