//! The native bitsy text format

pub mod serializer;

use super::{Format, FormatError};
use crate::bitsy::ast::Game;
use crate::bitsy::parsing;

pub use serializer::{serialize, serialize_to_string};

pub struct BitsyFormat;

impl Format for BitsyFormat {
    fn name(&self) -> &str {
        "bitsy"
    }

    fn description(&self) -> &str {
        "Bitsy game data"
    }

    fn extensions(&self) -> &[&'static str] {
        &["bitsy", "txt"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Game, FormatError> {
        Ok(parsing::parse(source)?)
    }

    fn serialize(&self, game: &Game) -> Result<String, FormatError> {
        Ok(serialize_to_string(game))
    }
}
