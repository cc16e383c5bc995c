//! `PAL` sections
//!
//!     PAL <id>
//!     NAME <text>        (optional)
//!     <r>,<g>,<b>        background
//!     <r>,<g>,<b>        tile
//!     <r>,<g>,<b>        sprite

use super::arguments::header_id;
use super::cursor::LineCursor;
use super::ParseError;
use crate::bitsy::ast::{Color, Palette};
use crate::bitsy::grammar::NAME;
use crate::bitsy::lexing::Line;

const PALETTE_COLORS: usize = 3;

pub fn parse_palette(header: Line<'_>, cursor: &mut LineCursor<'_>) -> Result<Palette, ParseError> {
    let id = header_id(&header)?;
    let name = cursor
        .next_if(|line| line.keyword() == NAME)
        .map(|line| line.rest().to_string())
        .unwrap_or_default();

    let mut colors = [Color::default(); PALETTE_COLORS];
    for (found, slot) in colors.iter_mut().enumerate() {
        let line = cursor.body_line(&header, "colors", PALETTE_COLORS, found)?;
        let parts: Vec<&str> = line.fields().into_iter().flatten().collect();
        *slot = Color::from_channels(&parts).ok_or_else(|| ParseError::InvalidColor {
            line: line.number,
            value: line.text.to_string(),
        })?;
    }
    let [background, tile, sprite] = colors;

    Ok(Palette {
        id,
        name,
        background,
        tile,
        sprite,
    })
}
