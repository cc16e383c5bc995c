//! `ROOM` sections
//!
//!     ROOM <id>
//!     16 lines of 16 comma-separated base-36 tile ids
//!     NAME <text>
//!     PAL <palette>
//!     ITM <item> <x>,<y>
//!     EXT <fromX>,<fromY> <room>,<toX>,<toY>
//!     END <id> <x>,<y>
//!     DLG <dialog>
//!
//! The keyed lines are optional, may repeat (ITM, EXT, END) and run until a
//! blank line.

use super::arguments::{header_id, id_at, Arguments};
use super::cursor::LineCursor;
use super::ParseError;
use crate::bitsy::ast::{Ending, Exit, ItemPlacement, Room, RoomGrid, ROOM_CELLS, ROOM_SIZE};
use crate::bitsy::grammar::{DIALOG, ENDING, EXIT, ITEM, NAME, PALETTE};
use crate::bitsy::lexing::Line;

pub fn parse_room(header: Line<'_>, cursor: &mut LineCursor<'_>) -> Result<Room, ParseError> {
    let mut room = Room {
        id: header_id(&header)?,
        tiles: parse_grid(&header, cursor)?,
        ..Default::default()
    };

    while let Some(line) = cursor.keyed_line() {
        let args = Arguments::new(line);
        match line.keyword() {
            NAME => room.name = line.rest().to_string(),
            PALETTE => room.palette = args.id(1, "palette id")?,
            ITEM => {
                let (x, y) = args.point(2, "position")?;
                room.items.push(ItemPlacement {
                    item_id: args.id(1, "item id")?,
                    x,
                    y,
                });
            }
            EXIT => room.exits.push(parse_exit(&args)?),
            ENDING => {
                let (x, y) = args.point(2, "position")?;
                room.endings.push(Ending {
                    id: args.id(1, "ending id")?,
                    x,
                    y,
                });
            }
            DIALOG => room.dialog = Some(line.rest().to_string()),
            other => log::debug!("line {}: ignoring `{}` in room {}", line.number, other, room.id),
        }
    }

    Ok(room)
}

fn parse_grid(header: &Line<'_>, cursor: &mut LineCursor<'_>) -> Result<RoomGrid, ParseError> {
    let mut cells = Vec::with_capacity(ROOM_CELLS);
    for found in 0..ROOM_SIZE {
        let line = cursor.body_line(header, "grid rows", ROOM_SIZE, found)?;
        let parts: Vec<&str> = line.fields().into_iter().flatten().collect();
        if parts.len() != ROOM_SIZE {
            return Err(ParseError::MalformedRow {
                line: line.number,
                expected: ROOM_SIZE,
                found: parts.len(),
            });
        }
        for part in parts {
            cells.push(id_at(part, line.number)?);
        }
    }

    RoomGrid::from_cells(cells).map_err(|_| ParseError::MalformedRow {
        line: header.number,
        expected: ROOM_CELLS,
        found: 0,
    })
}

/// Accepts both `EXT x,y room,x,y` and `EXT x,y room x,y`.
fn parse_exit(args: &Arguments<'_>) -> Result<Exit, ParseError> {
    let (from_x, from_y) = args.point(1, "source cell")?;
    let (to_room, to_x, to_y) = if args.len() > 3 {
        let (to_x, to_y) = args.point(3, "target cell")?;
        (args.id(2, "target room")?, to_x, to_y)
    } else {
        args.room_cell(2, "target")?
    };

    Ok(Exit {
        from_x,
        from_y,
        to_room,
        to_x,
        to_y,
    })
}
