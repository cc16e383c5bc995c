//! Tiles, sprites and items
//!
//! All three are drawn from frames and may point at a dialog. Tiles can be
//! walls; sprites can be placed in a room and one of them is the player.

use super::{Drawable, DrawableKind, Frame, Id, Identifiable, PLAYER_ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: Id,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog: Option<String>,
    pub frames: Vec<Frame>,
    #[serde(default)]
    pub wall: bool,
}

/// Where a sprite starts: a room and a cell inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub room: Id,
    pub x: u32,
    pub y: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprite {
    pub id: Id,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog: Option<String>,
    pub frames: Vec<Frame>,
    #[serde(default)]
    pub is_player: bool,
    /// `None` when the sprite is not placed in any room
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Sprite {
    /// An unnamed, unplaced player sprite with one blank frame.
    pub fn player() -> Self {
        Sprite {
            id: PLAYER_ID,
            is_player: true,
            frames: vec![Frame::blank()],
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: Id,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog: Option<String>,
    pub frames: Vec<Frame>,
}

macro_rules! impl_drawable {
    ($ty:ty, $kind:expr) => {
        impl Identifiable for $ty {
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

        impl Drawable for $ty {
            fn kind(&self) -> DrawableKind {
                $kind
            }

            fn frames(&self) -> &[Frame] {
                &self.frames
            }
        }
    };
}

impl_drawable!(Tile, DrawableKind::Tile);
impl_drawable!(Sprite, DrawableKind::Sprite);
impl_drawable!(Item, DrawableKind::Item);
