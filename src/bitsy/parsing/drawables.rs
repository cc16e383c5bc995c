//! `TIL`, `SPR` and `ITM` sections
//!
//!     TIL <id>
//!     8 lines of 8 `0`/`1` characters
//!     >                  (optional, starts another frame)
//!     8 more lines
//!     NAME <text>
//!     WAL true           (tiles)
//!     POS <room> <x>,<y> (sprites)
//!     ITM <item> <count> (player sprite only)
//!     DLG <dialog>
//!
//! `SPR A` is the player sprite; it always gets the reserved player id.

use super::arguments::{header_id, Arguments};
use super::cursor::LineCursor;
use super::ParseError;
use crate::bitsy::ast::frame::decode_row;
use crate::bitsy::ast::{
    Frame, Id, Item, Position, Sprite, StartingItem, Tile, FRAME_SIZE, PLAYER_ID,
};
use crate::bitsy::grammar::{DIALOG, FRAME_SEPARATOR, ITEM, NAME, PLAYER_MARKER, POSITION, WALL};
use crate::bitsy::lexing::Line;

pub fn parse_tile(header: Line<'_>, cursor: &mut LineCursor<'_>) -> Result<Tile, ParseError> {
    let mut tile = Tile {
        id: header_id(&header)?,
        frames: parse_frames(&header, cursor)?,
        ..Default::default()
    };

    while let Some(line) = cursor.keyed_line() {
        match line.keyword() {
            NAME => tile.name = line.rest().to_string(),
            WALL => tile.wall = line.rest() == "true",
            DIALOG => tile.dialog = Some(line.rest().to_string()),
            other => skip(&line, other, "tile", tile.id),
        }
    }

    Ok(tile)
}

/// Parse a sprite and, for the player, the starting items listed under it.
pub fn parse_sprite(
    header: Line<'_>,
    cursor: &mut LineCursor<'_>,
) -> Result<(Sprite, Vec<StartingItem>), ParseError> {
    let is_player = header.last_token() == PLAYER_MARKER;
    let id = if is_player {
        PLAYER_ID
    } else {
        header_id(&header)?
    };
    let mut sprite = Sprite {
        id,
        is_player,
        frames: parse_frames(&header, cursor)?,
        ..Default::default()
    };
    let mut starting_items = Vec::new();

    while let Some(line) = cursor.keyed_line() {
        let args = Arguments::new(line);
        match line.keyword() {
            NAME => sprite.name = line.rest().to_string(),
            DIALOG => sprite.dialog = Some(line.rest().to_string()),
            POSITION => {
                let (x, y) = args.point(2, "position")?;
                sprite.position = Some(Position {
                    room: args.id(1, "room id")?,
                    x,
                    y,
                });
            }
            ITEM => {
                if !sprite.is_player {
                    return Err(ParseError::StartingItemOnNonPlayer {
                        line: line.number,
                        sprite: sprite.id,
                    });
                }
                starting_items.push(StartingItem {
                    item_id: args.id(1, "item id")?,
                    count: args.decimal(2, "count")?,
                });
            }
            other => skip(&line, other, "sprite", sprite.id),
        }
    }

    Ok((sprite, starting_items))
}

pub fn parse_item(header: Line<'_>, cursor: &mut LineCursor<'_>) -> Result<Item, ParseError> {
    let mut item = Item {
        id: header_id(&header)?,
        frames: parse_frames(&header, cursor)?,
        ..Default::default()
    };

    while let Some(line) = cursor.keyed_line() {
        match line.keyword() {
            NAME => item.name = line.rest().to_string(),
            DIALOG => item.dialog = Some(line.rest().to_string()),
            other => skip(&line, other, "item", item.id),
        }
    }

    Ok(item)
}

fn skip(line: &Line<'_>, keyword: &str, kind: &str, id: Id) {
    log::debug!(
        "line {}: ignoring `{}` in {} {}",
        line.number,
        keyword,
        kind,
        id
    );
}

/// One or more frames separated by `>` lines.
fn parse_frames(header: &Line<'_>, cursor: &mut LineCursor<'_>) -> Result<Vec<Frame>, ParseError> {
    let mut frames = vec![parse_frame(header, cursor)?];
    while cursor
        .next_if(|line| line.text.starts_with(FRAME_SEPARATOR))
        .is_some()
    {
        frames.push(parse_frame(header, cursor)?);
    }
    Ok(frames)
}

fn parse_frame(header: &Line<'_>, cursor: &mut LineCursor<'_>) -> Result<Frame, ParseError> {
    let mut rows = [[false; FRAME_SIZE]; FRAME_SIZE];
    for (found, row) in rows.iter_mut().enumerate() {
        let line = cursor.body_line(header, "bitmap rows", FRAME_SIZE, found)?;
        let text = line.text.trim_end();
        *row = decode_row(text).ok_or_else(|| ParseError::MalformedRow {
            line: line.number,
            expected: FRAME_SIZE,
            found: text.chars().count(),
        })?;
    }
    Ok(Frame::from_row_bits(rows))
}
