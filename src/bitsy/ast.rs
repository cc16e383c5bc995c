//! Game data model
//!
//! A parsed document becomes one [`Game`] holding every entity in file order.
//! Entities are plain value records: editing one means building a new record,
//! see the `editing` module.
//!
//! Structure:
//!     - `traits`: [`Identifiable`] and [`Drawable`], the shapes entities share
//!     - `color`, `frame`, `grid`: fixed-size value types
//!     - `palette`, `drawables`, `room`, `dialog`: the entity records
//!     - `game`: the top-level record and its lookups

pub mod color;
pub mod dialog;
pub mod drawables;
pub mod frame;
pub mod game;
pub mod grid;
pub mod palette;
pub mod room;
pub mod traits;

/// Numeric id of a palette, room, tile, sprite or item.
pub type Id = i32;

/// Reserved id of the player sprite.
pub const PLAYER_ID: Id = -1;

pub use color::{Color, ColorError};
pub use dialog::Dialog;
pub use drawables::{Item, Position, Sprite, Tile};
pub use frame::{Frame, FrameError, FRAME_PIXELS, FRAME_SIZE};
pub use game::{DrawableKey, DrawableKind, Game, StartingItem};
pub use grid::{GridError, RoomGrid, ROOM_CELLS, ROOM_SIZE};
pub use palette::Palette;
pub use room::{Ending, Exit, ItemPlacement, Room};
pub use traits::{Drawable, Identifiable};
