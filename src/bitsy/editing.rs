//! Editing
//!
//! Edits to a game are described as [`Action`] values and applied with
//! [`reduce`], which never touches its input: every action yields a new
//! [`Game`]. Keeping history (and undoing) is left to the caller, which can
//! store games or the actions with their [`Action::label`].
//!
//! Entity kinds are edited through the same three operations:
//!
//!     Create      append a blank entity under `next_id`
//!     Change(e)   replace the entity whose id equals `e.id`
//!     Delete(id)  remove the entity with that id
//!
//! Rooms can also be cloned, and palettes can only be changed. Deleting a
//! tile, sprite or item leaves references to it in rooms untouched.

use crate::bitsy::ast::{Frame, Game, Id, Identifiable, Item, Palette, Room, RoomGrid, Sprite, Tile};

#[derive(Debug, Clone, PartialEq)]
pub enum EntityAction<T> {
    Create,
    Change(T),
    Delete(Id),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the whole game, e.g. after loading a document.
    SetGame(Box<Game>),
    Tile(EntityAction<Tile>),
    Sprite(EntityAction<Sprite>),
    Item(EntityAction<Item>),
    Room(EntityAction<Room>),
    /// Append a copy of a room under a fresh id. Unknown ids do nothing.
    CloneRoom(Id),
    ChangePalette(Palette),
}

impl Action {
    /// Name shown in an undo history; `None` for actions that are not undoable.
    pub fn label(&self) -> Option<String> {
        let (verb, noun) = match self {
            Action::SetGame(_) => return None,
            Action::Tile(action) => (action.verb(), Tile::NOUN),
            Action::Sprite(action) => (action.verb(), Sprite::NOUN),
            Action::Item(action) => (action.verb(), Item::NOUN),
            Action::Room(action) => (action.verb(), Room::NOUN),
            Action::CloneRoom(_) => ("Cloned", Room::NOUN),
            Action::ChangePalette(_) => ("Edited", "palette"),
        };
        Some(format!("{verb} {noun}"))
    }
}

impl<T> EntityAction<T> {
    fn verb(&self) -> &'static str {
        match self {
            EntityAction::Create => "Created",
            EntityAction::Change(_) => "Edited",
            EntityAction::Delete(_) => "Deleted",
        }
    }
}

/// An entity kind that can be created from nothing.
trait Editable: Identifiable + Clone {
    const NOUN: &'static str;

    fn blank(id: Id) -> Self;
}

impl Editable for Tile {
    const NOUN: &'static str = "tile";

    fn blank(id: Id) -> Self {
        Tile {
            id,
            frames: vec![Frame::blank()],
            ..Default::default()
        }
    }
}

impl Editable for Sprite {
    const NOUN: &'static str = "sprite";

    fn blank(id: Id) -> Self {
        Sprite {
            id,
            frames: vec![Frame::blank()],
            ..Default::default()
        }
    }
}

impl Editable for Item {
    const NOUN: &'static str = "item";

    fn blank(id: Id) -> Self {
        Item {
            id,
            frames: vec![Frame::blank()],
            ..Default::default()
        }
    }
}

impl Editable for Room {
    const NOUN: &'static str = "room";

    fn blank(id: Id) -> Self {
        Room {
            id,
            tiles: RoomGrid::empty(),
            palette: 0,
            ..Default::default()
        }
    }
}

/// One more than the highest id in use, or 0 for an empty list.
pub fn next_id<T: Identifiable>(entities: &[T]) -> Id {
    entities
        .iter()
        .map(Identifiable::id)
        .max()
        .map_or(0, |max| max + 1)
}

/// Apply an action, producing the edited game.
pub fn reduce(game: &Game, action: &Action) -> Game {
    log::debug!("applying {:?}", action.label());
    let mut next = game.clone();
    match action {
        Action::SetGame(replacement) => return (**replacement).clone(),
        Action::Tile(action) => next.tiles = apply(&game.tiles, action),
        Action::Sprite(action) => next.sprites = apply(&game.sprites, action),
        Action::Item(action) => next.items = apply(&game.items, action),
        Action::Room(action) => next.rooms = apply(&game.rooms, action),
        Action::CloneRoom(id) => match game.room(*id) {
            Some(room) => next.rooms.push(Room {
                id: next_id(&game.rooms),
                ..room.clone()
            }),
            None => log::debug!("no room {id} to clone"),
        },
        Action::ChangePalette(palette) => {
            next.palettes = replace(&game.palettes, palette);
        }
    }
    next
}

fn apply<T: Editable>(entities: &[T], action: &EntityAction<T>) -> Vec<T> {
    match action {
        EntityAction::Create => {
            let mut edited = entities.to_vec();
            edited.push(T::blank(next_id(entities)));
            edited
        }
        EntityAction::Change(changed) => replace(entities, changed),
        EntityAction::Delete(id) => entities.iter().filter(|e| e.id() != *id).cloned().collect(),
    }
}

fn replace<T: Identifiable + Clone>(entities: &[T], changed: &T) -> Vec<T> {
    entities
        .iter()
        .map(|e| {
            if e.id() == changed.id() {
                changed.clone()
            } else {
                e.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitsy::ast::Color;

    fn game_with_tiles(ids: &[Id]) -> Game {
        Game {
            tiles: ids.iter().map(|&id| Tile::blank(id)).collect(),
            ..Game::new("g")
        }
    }

    #[test]
    fn test_next_id() {
        assert_eq!(next_id::<Tile>(&[]), 0);
        assert_eq!(next_id(&game_with_tiles(&[3, 1]).tiles), 4);
        assert_eq!(next_id(&[Sprite::player()]), 0);
    }

    #[test]
    fn test_create_tile() {
        let game = game_with_tiles(&[0, 5]);
        let edited = reduce(&game, &Action::Tile(EntityAction::Create));
        assert_eq!(edited.tiles.len(), 3);
        assert_eq!(edited.tiles[2].id, 6);
        assert_eq!(edited.tiles[2].frames, vec![Frame::blank()]);
        assert_eq!(game.tiles.len(), 2);
    }

    #[test]
    fn test_change_and_delete() {
        let game = game_with_tiles(&[0, 1]);
        let mut wall = Tile::blank(1);
        wall.wall = true;
        let edited = reduce(&game, &Action::Tile(EntityAction::Change(wall.clone())));
        assert_eq!(edited.tiles[1], wall);

        let edited = reduce(&edited, &Action::Tile(EntityAction::Delete(0)));
        assert_eq!(edited.tiles, vec![wall]);
    }

    #[test]
    fn test_create_room() {
        let edited = reduce(&Game::default(), &Action::Room(EntityAction::Create));
        let room = &edited.rooms[0];
        assert_eq!(room.id, 0);
        assert_eq!(room.palette, 0);
        assert!(room.tiles.cells().iter().all(|&t| t == 0));
    }

    #[test]
    fn test_clone_room() {
        let mut room = Room::blank(2);
        room.name = "hall".into();
        let game = Game {
            rooms: vec![room],
            ..Game::default()
        };
        let edited = reduce(&game, &Action::CloneRoom(2));
        assert_eq!(edited.rooms.len(), 2);
        assert_eq!(edited.rooms[1].id, 3);
        assert_eq!(edited.rooms[1].name, "hall");

        assert_eq!(reduce(&game, &Action::CloneRoom(9)), game);
    }

    #[test]
    fn test_change_palette() {
        let palette = Palette {
            id: 0,
            ..Default::default()
        };
        let game = Game {
            palettes: vec![palette.clone()],
            ..Game::default()
        };
        let changed = Palette {
            background: Color::new(9, 9, 9),
            ..palette
        };
        let edited = reduce(&game, &Action::ChangePalette(changed.clone()));
        assert_eq!(edited.palettes, vec![changed]);
    }

    #[test]
    fn test_set_game() {
        let replacement = Game::new("other");
        let edited = reduce(&Game::new("g"), &Action::SetGame(Box::new(replacement.clone())));
        assert_eq!(edited, replacement);
    }

    #[test]
    fn test_labels() {
        assert_eq!(
            Action::Sprite(EntityAction::Create).label().as_deref(),
            Some("Created sprite")
        );
        assert_eq!(
            Action::Item(EntityAction::Delete(1)).label().as_deref(),
            Some("Deleted item")
        );
        assert_eq!(Action::CloneRoom(0).label().as_deref(), Some("Cloned room"));
        assert_eq!(
            Action::ChangePalette(Palette::default()).label().as_deref(),
            Some("Edited palette")
        );
        assert_eq!(Action::SetGame(Box::default()).label(), None);
    }
}
