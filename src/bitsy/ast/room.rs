//! Rooms

use super::{Id, Identifiable, RoomGrid};
use serde::{Deserialize, Serialize};

/// A doorway from one cell of a room to a cell of another (or the same) room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Exit {
    pub from_x: u32,
    pub from_y: u32,
    pub to_room: Id,
    pub to_x: u32,
    pub to_y: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemPlacement {
    pub item_id: Id,
    pub x: u32,
    pub y: u32,
}

/// Cell that ends the game when the player steps on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ending {
    pub id: Id,
    pub x: u32,
    pub y: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: Id,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog: Option<String>,
    pub tiles: RoomGrid,
    #[serde(default)]
    pub palette: Id,
    #[serde(default)]
    pub exits: Vec<Exit>,
    #[serde(default)]
    pub items: Vec<ItemPlacement>,
    #[serde(default)]
    pub endings: Vec<Ending>,
}

impl Identifiable for Room {
    fn id(&self) -> Id {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn dialog(&self) -> Option<&str> {
        self.dialog.as_deref()
    }
}
