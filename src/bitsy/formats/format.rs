//! Format trait definition
//!
//! Every representation a [`Game`] can be read from or written to implements
//! [`Format`]. A format may support parsing, serialization, or both.

use super::FormatError;
use crate::bitsy::ast::Game;

/// Trait for game formats
///
/// Implementors convert between a string representation and a [`Game`].
/// The default `parse` and `serialize` refuse with `NotSupported`, so a
/// write-only format only overrides `serialize`.
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "bitsy", "json")
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    /// File extensions claimed by this format, lower case and without the dot.
    fn extensions(&self) -> &[&'static str] {
        &[]
    }

    fn supports_parsing(&self) -> bool {
        false
    }

    fn supports_serialization(&self) -> bool {
        false
    }

    fn parse(&self, _source: &str) -> Result<Game, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    fn serialize(&self, _game: &Game) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}
