//! Keywords and numeric encodings of the bitsy format
//!
//! Ids of palettes, rooms, tiles, sprites and items (and the tile references
//! inside a room grid) are written in base 36. Coordinates, counts and
//! variable values are written in base 10. The parser and serializer both go
//! through this module so the two sides cannot drift apart.

use crate::bitsy::ast::Id;

pub const PALETTE: &str = "PAL";
pub const ROOM: &str = "ROOM";
pub const TILE: &str = "TIL";
pub const SPRITE: &str = "SPR";
pub const ITEM: &str = "ITM";
pub const VARIABLE: &str = "VAR";
pub const DIALOG: &str = "DLG";

pub const NAME: &str = "NAME";
pub const WALL: &str = "WAL";
pub const POSITION: &str = "POS";
pub const EXIT: &str = "EXT";
pub const ENDING: &str = "END";

/// Trailing token of the player sprite header (`SPR A`).
pub const PLAYER_MARKER: &str = "A";

/// Opens and closes a multi-line dialog body.
pub const DIALOG_BLOCK: &str = "\"\"\"";

/// Separates animation frames inside a drawable body.
pub const FRAME_SEPARATOR: char = '>';

pub const COMMENT_PREFIX: char = '#';

/// Radix of ids and room grid references.
pub const ID_RADIX: u32 = 36;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Top-level section keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Palette,
    Room,
    Tile,
    Sprite,
    Item,
    Variable,
    Dialog,
}

impl Section {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            PALETTE => Some(Section::Palette),
            ROOM => Some(Section::Room),
            TILE => Some(Section::Tile),
            SPRITE => Some(Section::Sprite),
            ITEM => Some(Section::Item),
            VARIABLE => Some(Section::Variable),
            DIALOG => Some(Section::Dialog),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Section::Palette => PALETTE,
            Section::Room => ROOM,
            Section::Tile => TILE,
            Section::Sprite => SPRITE,
            Section::Item => ITEM,
            Section::Variable => VARIABLE,
            Section::Dialog => DIALOG,
        }
    }
}

/// Decode a base-36 id. Upper and lower case digits are both accepted.
pub fn decode_id(token: &str) -> Option<Id> {
    Id::from_str_radix(token, ID_RADIX).ok()
}

/// Encode an id in lower-case base 36.
pub fn encode_id(id: Id) -> String {
    if id == 0 {
        return "0".to_string();
    }

    let mut value = i64::from(id).unsigned_abs();
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    if id < 0 {
        digits.push(b'-');
    }
    digits.reverse();

    String::from_utf8(digits).unwrap_or_default()
}
