//! Parser
//!
//! Turns a bitsy document into a [`Game`] in a single forward pass.
//!
//! Structure:
//!     The document is split into lines once and walked with a [`LineCursor`].
//!     Line 1 is always the title. After that, blank lines and `#` comments are
//!     skipped and every other line is read as a section header: its first
//!     token picks the section parser, which consumes the header and its body
//!     and leaves the cursor on the next unread line.
//!
//!     Section parsers live in their own modules:
//!     - `palette`: `PAL`
//!     - `room`: `ROOM`
//!     - `drawables`: `TIL`, `SPR`, `ITM`
//!     - `dialog`: `DLG`, `VAR`
//!
//!     A header whose keyword is not recognised is skipped on its own, which
//!     lets newer documents with extra directives still load.
//!
//! Context-sensitive keywords
//!
//!     `ITM` means three different things depending on where it appears: a
//!     section header at the top level, an item placement inside a room body,
//!     and a starting item inside the player sprite's body. Each parser only
//!     ever sees its own meaning, so no disambiguation is needed beyond the
//!     cursor position.
//!
//! Errors
//!
//!     The parser does not recover. Truncated bodies, malformed rows or
//!     numbers, and starting items on a non-player sprite all abort the parse
//!     with a [`ParseError`].

pub mod arguments;
pub mod cursor;
mod dialog;
mod drawables;
mod error;
mod palette;
mod room;

pub use cursor::LineCursor;
pub use error::ParseError;

use crate::bitsy::ast::Game;
use crate::bitsy::grammar::Section;

/// Parse a complete bitsy document.
pub fn parse(source: &str) -> Result<Game, ParseError> {
    let mut cursor = LineCursor::new(source);
    let mut game = Game::default();

    if let Some(title) = cursor.next_line() {
        game.title = title.text.to_string();
    }

    while let Some(line) = cursor.next_line() {
        if line.is_blank() || line.is_comment() {
            continue;
        }

        let Some(section) = Section::from_keyword(line.keyword()) else {
            log::debug!("line {}: skipping unknown directive `{}`", line.number, line.text);
            continue;
        };
        log::trace!("line {}: {:?} section", line.number, section);

        match section {
            Section::Palette => game.palettes.push(palette::parse_palette(line, &mut cursor)?),
            Section::Room => game.rooms.push(room::parse_room(line, &mut cursor)?),
            Section::Tile => game.tiles.push(drawables::parse_tile(line, &mut cursor)?),
            Section::Sprite => {
                let (sprite, starting_items) = drawables::parse_sprite(line, &mut cursor)?;
                game.sprites.push(sprite);
                game.starting_items.extend(starting_items);
            }
            Section::Item => game.items.push(drawables::parse_item(line, &mut cursor)?),
            Section::Variable => {
                let (name, value) = dialog::parse_variable(line, &mut cursor)?;
                game.variables.insert(name, value);
            }
            Section::Dialog => game.dialogs.push(dialog::parse_dialog(line, &mut cursor)?),
        }
    }

    log::debug!(
        "parsed `{}`: {} palettes, {} rooms, {} tiles, {} sprites, {} items, {} dialogs",
        game.title,
        game.palettes.len(),
        game.rooms.len(),
        game.tiles.len(),
        game.sprites.len(),
        game.items.len(),
        game.dialogs.len()
    );

    Ok(game)
}
