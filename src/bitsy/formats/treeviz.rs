//! Treeviz formatter for games
//!
//! One line per node, nesting drawn with box characters, for a quick read of
//! what a document contains:
//!
//!     ⧉ Tea Time
//!     ├─ palette: 0 - dusk
//!     ├─ room: 0 - kitchen
//!     │ ├─ palette: 0
//!     │ └─ exit: 15,8 -> room 1 at 0,8
//!     ├─ tile: 1 [wall]
//!     ├─ sprite: -1 [player]
//!     │ └─ position: room 0 at 4,4
//!     └─ dialog: greeting: hello there
//!
//! Top level nodes follow serialization order. Labels are cut at 30
//! characters. With `show_frames`, every drawable also lists its frames with
//! `#` for set pixels and `.` for clear ones.

use super::{Format, FormatError};
use crate::bitsy::ast::{Drawable, Frame, Game, Identifiable, Room, Sprite, Tile};

const LABEL_WIDTH: usize = 30;

#[derive(Debug, Clone, Copy, Default)]
pub struct TreevizFormat {
    pub show_frames: bool,
}

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Tree outline of the game (write only)"
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, game: &Game) -> Result<String, FormatError> {
        Ok(to_treeviz_str(game, self.show_frames))
    }
}

struct Node {
    kind: &'static str,
    label: String,
    children: Vec<Node>,
}

impl Node {
    fn leaf(kind: &'static str, label: impl Into<String>) -> Self {
        Node {
            kind,
            label: label.into(),
            children: Vec::new(),
        }
    }

    fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(game: &Game, show_frames: bool) -> String {
    let mut result = format!("⧉ {}\n", game.title);
    append_children(&mut result, &game_nodes(game, show_frames), "");
    result
}

fn append_node(result: &mut String, node: &Node, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    result.push_str(&format!(
        "{}{} {}: {}\n",
        prefix,
        connector,
        node.kind,
        truncate(&node.label, LABEL_WIDTH)
    ));

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    append_children(result, &node.children, &new_prefix);
}

fn append_children(result: &mut String, children: &[Node], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        append_node(result, child, prefix, i == children.len() - 1);
    }
}

fn game_nodes(game: &Game, show_frames: bool) -> Vec<Node> {
    let mut nodes = Vec::new();
    nodes.extend(
        game.palettes
            .iter()
            .map(|p| Node::leaf("palette", p.display_label())),
    );
    nodes.extend(game.rooms.iter().map(room_node));
    nodes.extend(game.tiles.iter().map(|t| tile_node(t, show_frames)));

    let mut starting_items = true;
    for sprite in &game.sprites {
        let mut node = sprite_node(sprite, show_frames);
        if sprite.is_player && starting_items {
            starting_items = false;
            node.children.extend(game.starting_items.iter().map(|s| {
                Node::leaf("starting item", format!("{} x{}", s.item_id, s.count))
            }));
        }
        nodes.push(node);
    }

    nodes.extend(game.items.iter().map(|i| {
        Node::leaf("item", drawable_label(i, String::new()))
            .with_children(frame_nodes(i, show_frames))
    }));
    nodes.extend(
        game.variables
            .iter()
            .map(|(name, value)| Node::leaf("variable", format!("{name} = {value}"))),
    );
    nodes.extend(game.dialogs.iter().map(|d| {
        let first = d.lines.first().map(String::as_str).unwrap_or_default();
        Node::leaf("dialog", format!("{}: {}", d.id, first))
    }));
    nodes
}

fn room_node(room: &Room) -> Node {
    let mut children = vec![Node::leaf("palette", room.palette.to_string())];
    children.extend(room.exits.iter().map(|e| {
        Node::leaf(
            "exit",
            format!(
                "{},{} -> room {} at {},{}",
                e.from_x, e.from_y, e.to_room, e.to_x, e.to_y
            ),
        )
    }));
    children.extend(
        room.items
            .iter()
            .map(|i| Node::leaf("item", format!("{} at {},{}", i.item_id, i.x, i.y))),
    );
    children.extend(
        room.endings
            .iter()
            .map(|e| Node::leaf("ending", format!("{} at {},{}", e.id, e.x, e.y))),
    );
    if let Some(dialog) = &room.dialog {
        children.push(Node::leaf("dialog", dialog.clone()));
    }
    Node::leaf("room", room.display_label()).with_children(children)
}

fn tile_node(tile: &Tile, show_frames: bool) -> Node {
    let flags = if tile.wall { " [wall]" } else { "" };
    Node::leaf("tile", drawable_label(tile, flags.to_string()))
        .with_children(frame_nodes(tile, show_frames))
}

fn sprite_node(sprite: &Sprite, show_frames: bool) -> Node {
    let flags = if sprite.is_player { " [player]" } else { "" };
    let mut children = frame_nodes(sprite, show_frames);
    if let Some(p) = &sprite.position {
        children.push(Node::leaf(
            "position",
            format!("room {} at {},{}", p.room, p.x, p.y),
        ));
    }
    Node::leaf("sprite", drawable_label(sprite, flags.to_string())).with_children(children)
}

fn drawable_label(drawable: &dyn Drawable, mut flags: String) -> String {
    if drawable.is_animated() {
        flags.push_str(&format!(" [{} frames]", drawable.frames().len()));
    }
    format!("{}{}", drawable.display_label(), flags)
}

fn frame_nodes(drawable: &dyn Drawable, show_frames: bool) -> Vec<Node> {
    if !show_frames {
        return Vec::new();
    }
    drawable
        .frames()
        .iter()
        .enumerate()
        .map(|(i, frame)| Node::leaf("frame", (i + 1).to_string()).with_children(pixel_rows(frame)))
        .collect()
}

fn pixel_rows(frame: &Frame) -> Vec<Node> {
    frame
        .rows()
        .map(|row| Node::leaf("row", row.replace('1', "#").replace('0', ".")))
        .collect()
}
