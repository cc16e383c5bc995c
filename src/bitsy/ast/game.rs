//! The game record and lookups over it
//!
//! Tiles, sprites and items keep separate id spaces: tile 3 and sprite 3 are
//! different things. Lookups across the three therefore take a
//! [`DrawableKey`] (kind plus id) rather than a bare id.

use super::{Dialog, Drawable, Id, Item, Palette, Room, Sprite, Tile};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawableKind {
    Tile,
    Sprite,
    Item,
}

impl fmt::Display for DrawableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DrawableKind::Tile => "tile",
            DrawableKind::Sprite => "sprite",
            DrawableKind::Item => "item",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DrawableKey {
    pub kind: DrawableKind,
    pub id: Id,
}

impl DrawableKey {
    pub fn new(kind: DrawableKind, id: Id) -> Self {
        DrawableKey { kind, id }
    }

    pub fn tile(id: Id) -> Self {
        Self::new(DrawableKind::Tile, id)
    }

    pub fn sprite(id: Id) -> Self {
        Self::new(DrawableKind::Sprite, id)
    }

    pub fn item(id: Id) -> Self {
        Self::new(DrawableKind::Item, id)
    }
}

/// A quantity of an item the player holds when the game starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StartingItem {
    pub item_id: Id,
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub title: String,
    #[serde(default)]
    pub palettes: Vec<Palette>,
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub tiles: Vec<Tile>,
    #[serde(default)]
    pub sprites: Vec<Sprite>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub dialogs: Vec<Dialog>,
    #[serde(default)]
    pub variables: BTreeMap<String, i64>,
    #[serde(default)]
    pub starting_items: Vec<StartingItem>,
}

impl Game {
    pub fn new(title: impl Into<String>) -> Self {
        Game {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn palette(&self, id: Id) -> Option<&Palette> {
        self.palettes.iter().find(|p| p.id == id)
    }

    pub fn room(&self, id: Id) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    pub fn tile(&self, id: Id) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.id == id)
    }

    pub fn sprite(&self, id: Id) -> Option<&Sprite> {
        self.sprites.iter().find(|s| s.id == id)
    }

    pub fn item(&self, id: Id) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn dialog(&self, id: &str) -> Option<&Dialog> {
        self.dialogs.iter().find(|d| d.id == id)
    }

    /// The first sprite flagged as the player.
    pub fn player(&self) -> Option<&Sprite> {
        self.sprites.iter().find(|s| s.is_player)
    }

    pub fn drawable(&self, key: DrawableKey) -> Option<&dyn Drawable> {
        match key.kind {
            DrawableKind::Tile => self.tile(key.id).map(|t| t as &dyn Drawable),
            DrawableKind::Sprite => self.sprite(key.id).map(|s| s as &dyn Drawable),
            DrawableKind::Item => self.item(key.id).map(|i| i as &dyn Drawable),
        }
    }

    /// Every tile, sprite and item, in that order.
    pub fn drawables(&self) -> impl Iterator<Item = &dyn Drawable> {
        let tiles = self.tiles.iter().map(|t| t as &dyn Drawable);
        let sprites = self.sprites.iter().map(|s| s as &dyn Drawable);
        let items = self.items.iter().map(|i| i as &dyn Drawable);
        tiles.chain(sprites).chain(items)
    }

    /// Sprites placed in the given room.
    pub fn sprites_in_room(&self, room: Id) -> impl Iterator<Item = &Sprite> {
        self.sprites
            .iter()
            .filter(move |s| s.position.is_some_and(|p| p.room == room))
    }
}
