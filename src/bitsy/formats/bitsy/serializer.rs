//! Bitsy text serializer
//!
//! Writes sections in a fixed order: title, palettes, rooms, tiles, sprites,
//! items, variables, dialogs. Every block ends with a blank line, which is
//! also what terminates keyed lines when the text is parsed again.
//!
//! The serializer trusts its input. Frames and grids are fixed-size types, but
//! some games will not survive a parse of the output:
//!
//! - a drawable without frames
//! - a multi-line title
//! - a name with surrounding whitespace
//! - a dialog with a `"""` line, which closes its block early

use crate::bitsy::ast::{Dialog, Frame, Game, Item, Palette, Room, Sprite, StartingItem, Tile};
use crate::bitsy::grammar::{
    encode_id, DIALOG, DIALOG_BLOCK, ENDING, EXIT, FRAME_SEPARATOR, ITEM, NAME, PALETTE,
    PLAYER_MARKER, POSITION, ROOM, SPRITE, TILE, VARIABLE, WALL,
};

/// Serialize a game to the lines of a bitsy document.
pub fn serialize(game: &Game) -> Vec<String> {
    let mut out = Vec::new();
    out.push(game.title.clone());
    out.push(String::new());

    for palette in &game.palettes {
        write_palette(&mut out, palette);
    }
    for room in &game.rooms {
        write_room(&mut out, room);
    }
    for tile in &game.tiles {
        write_tile(&mut out, tile);
    }

    // Starting items are written once, under the first player sprite
    let mut starting_items = Some(game.starting_items.as_slice());
    for sprite in &game.sprites {
        let items: &[StartingItem] = if sprite.is_player {
            starting_items.take().unwrap_or_default()
        } else {
            &[]
        };
        write_sprite(&mut out, sprite, items);
    }

    for item in &game.items {
        write_item(&mut out, item);
    }
    for (name, value) in &game.variables {
        out.push(format!("{VARIABLE} {name}"));
        out.push(value.to_string());
        out.push(String::new());
    }
    for dialog in &game.dialogs {
        write_dialog(&mut out, dialog);
    }

    out
}

/// Serialize a game to a bitsy document. The trailing blank block line
/// leaves the text ending in a newline.
pub fn serialize_to_string(game: &Game) -> String {
    serialize(game).join("\n")
}

fn write_name(out: &mut Vec<String>, name: &str) {
    if !name.is_empty() {
        out.push(format!("{NAME} {name}"));
    }
}

fn write_dialog_ref(out: &mut Vec<String>, dialog: Option<&str>) {
    if let Some(dialog) = dialog {
        out.push(format!("{DIALOG} {dialog}"));
    }
}

fn write_frames(out: &mut Vec<String>, frames: &[Frame]) {
    for (i, frame) in frames.iter().enumerate() {
        if i > 0 {
            out.push(FRAME_SEPARATOR.to_string());
        }
        out.extend(frame.rows());
    }
}

fn write_palette(out: &mut Vec<String>, palette: &Palette) {
    out.push(format!("{PALETTE} {}", encode_id(palette.id)));
    write_name(out, &palette.name);
    out.push(palette.background.to_triplet());
    out.push(palette.tile.to_triplet());
    out.push(palette.sprite.to_triplet());
    out.push(String::new());
}

fn write_room(out: &mut Vec<String>, room: &Room) {
    out.push(format!("{ROOM} {}", encode_id(room.id)));
    for row in room.tiles.rows() {
        let cells: Vec<String> = row.iter().map(|&id| encode_id(id)).collect();
        out.push(cells.join(","));
    }
    write_name(out, &room.name);
    for placement in &room.items {
        out.push(format!(
            "{ITEM} {} {},{}",
            encode_id(placement.item_id),
            placement.x,
            placement.y
        ));
    }
    for exit in &room.exits {
        out.push(format!(
            "{EXIT} {},{} {},{},{}",
            exit.from_x,
            exit.from_y,
            encode_id(exit.to_room),
            exit.to_x,
            exit.to_y
        ));
    }
    for ending in &room.endings {
        out.push(format!(
            "{ENDING} {} {},{}",
            encode_id(ending.id),
            ending.x,
            ending.y
        ));
    }
    out.push(format!("{PALETTE} {}", encode_id(room.palette)));
    write_dialog_ref(out, room.dialog.as_deref());
    out.push(String::new());
}

fn write_tile(out: &mut Vec<String>, tile: &Tile) {
    out.push(format!("{TILE} {}", encode_id(tile.id)));
    write_frames(out, &tile.frames);
    write_name(out, &tile.name);
    if tile.wall {
        out.push(format!("{WALL} true"));
    }
    write_dialog_ref(out, tile.dialog.as_deref());
    out.push(String::new());
}

fn write_sprite(out: &mut Vec<String>, sprite: &Sprite, starting_items: &[StartingItem]) {
    let id = if sprite.is_player {
        PLAYER_MARKER.to_string()
    } else {
        encode_id(sprite.id)
    };
    out.push(format!("{SPRITE} {id}"));
    write_frames(out, &sprite.frames);
    write_name(out, &sprite.name);
    write_dialog_ref(out, sprite.dialog.as_deref());
    if let Some(position) = &sprite.position {
        out.push(format!(
            "{POSITION} {} {},{}",
            encode_id(position.room),
            position.x,
            position.y
        ));
    }
    for item in starting_items {
        out.push(format!("{ITEM} {} {}", encode_id(item.item_id), item.count));
    }
    out.push(String::new());
}

fn write_item(out: &mut Vec<String>, item: &Item) {
    out.push(format!("{ITEM} {}", encode_id(item.id)));
    write_frames(out, &item.frames);
    write_name(out, &item.name);
    write_dialog_ref(out, item.dialog.as_deref());
    out.push(String::new());
}

fn write_dialog(out: &mut Vec<String>, dialog: &Dialog) {
    out.push(format!("{DIALOG} {}", dialog.id));
    match dialog.lines.as_slice() {
        [line] if !line.trim().is_empty() && line.trim_end() != DIALOG_BLOCK => {
            out.push(line.clone());
        }
        lines => {
            out.push(DIALOG_BLOCK.to_string());
            out.extend(lines.iter().cloned());
            out.push(DIALOG_BLOCK.to_string());
        }
    }
    out.push(String::new());
}
