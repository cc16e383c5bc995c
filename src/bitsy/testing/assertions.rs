//! Fluent assertion API for games

use crate::bitsy::ast::{
    Dialog, Drawable, Exit, Game, Id, Item, Palette, Position, Room, Sprite, StartingItem, Tile,
};

/// Create an assertion builder for a game
pub fn assert_game(game: &Game) -> GameAssertion<'_> {
    GameAssertion { game }
}

pub struct GameAssertion<'a> {
    game: &'a Game,
}

fn summarize<T: Drawable>(entities: &[T]) -> String {
    entities
        .iter()
        .map(|e| e.display_label())
        .collect::<Vec<_>>()
        .join(", ")
}

fn entry<'a, T>(entities: &'a [T], index: usize, kind: &str) -> &'a T {
    entities.get(index).unwrap_or_else(|| {
        panic!(
            "{} index {} out of bounds (game has {})",
            kind,
            index,
            entities.len()
        )
    })
}

impl<'a> GameAssertion<'a> {
    pub fn title(self, expected: &str) -> Self {
        assert_eq!(self.game.title, expected, "Unexpected game title");
        self
    }

    pub fn palette_count(self, expected: usize) -> Self {
        assert_eq!(self.game.palettes.len(), expected, "Unexpected palette count");
        self
    }

    pub fn room_count(self, expected: usize) -> Self {
        assert_eq!(self.game.rooms.len(), expected, "Unexpected room count");
        self
    }

    pub fn tile_count(self, expected: usize) -> Self {
        assert_eq!(
            self.game.tiles.len(),
            expected,
            "Expected {} tiles, found [{}]",
            expected,
            summarize(&self.game.tiles)
        );
        self
    }

    pub fn sprite_count(self, expected: usize) -> Self {
        assert_eq!(
            self.game.sprites.len(),
            expected,
            "Expected {} sprites, found [{}]",
            expected,
            summarize(&self.game.sprites)
        );
        self
    }

    pub fn item_count(self, expected: usize) -> Self {
        assert_eq!(
            self.game.items.len(),
            expected,
            "Expected {} items, found [{}]",
            expected,
            summarize(&self.game.items)
        );
        self
    }

    pub fn dialog_count(self, expected: usize) -> Self {
        assert_eq!(self.game.dialogs.len(), expected, "Unexpected dialog count");
        self
    }

    pub fn variable(self, name: &str, expected: i64) -> Self {
        assert_eq!(
            self.game.variables.get(name),
            Some(&expected),
            "Unexpected value for variable `{}`",
            name
        );
        self
    }

    pub fn starting_items(self, expected: &[(Id, u32)]) -> Self {
        let expected: Vec<StartingItem> = expected
            .iter()
            .map(|&(item_id, count)| StartingItem { item_id, count })
            .collect();
        assert_eq!(self.game.starting_items, expected, "Unexpected starting items");
        self
    }

    pub fn palette<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(PaletteAssertion<'a>),
    {
        let palette = entry(&self.game.palettes, index, "Palette");
        assertion(PaletteAssertion {
            palette,
            context: format!("palettes[{index}]"),
        });
        self
    }

    pub fn room<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(RoomAssertion<'a>),
    {
        let room = entry(&self.game.rooms, index, "Room");
        assertion(RoomAssertion {
            room,
            context: format!("rooms[{index}]"),
        });
        self
    }

    pub fn tile<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(DrawableAssertion<'a, Tile>),
    {
        let tile = entry(&self.game.tiles, index, "Tile");
        assertion(DrawableAssertion::new(tile, format!("tiles[{index}]")));
        self
    }

    pub fn sprite<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(DrawableAssertion<'a, Sprite>),
    {
        let sprite = entry(&self.game.sprites, index, "Sprite");
        assertion(DrawableAssertion::new(sprite, format!("sprites[{index}]")));
        self
    }

    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(DrawableAssertion<'a, Item>),
    {
        let item = entry(&self.game.items, index, "Item");
        assertion(DrawableAssertion::new(item, format!("items[{index}]")));
        self
    }

    pub fn dialog<F>(self, id: &str, assertion: F) -> Self
    where
        F: FnOnce(DialogAssertion<'a>),
    {
        let dialog = self
            .game
            .dialog(id)
            .unwrap_or_else(|| panic!("No dialog with id `{id}`"));
        assertion(DialogAssertion { dialog });
        self
    }
}

// ============================================================================
// Palettes
// ============================================================================

pub struct PaletteAssertion<'a> {
    palette: &'a Palette,
    context: String,
}

impl PaletteAssertion<'_> {
    pub fn id(self, expected: Id) -> Self {
        assert_eq!(self.palette.id, expected, "{}: unexpected id", self.context);
        self
    }

    pub fn name(self, expected: &str) -> Self {
        assert_eq!(self.palette.name, expected, "{}: unexpected name", self.context);
        self
    }

    /// Background, tile and sprite colors as `rgb(r,g,b)` strings
    pub fn colors(self, background: &str, tile: &str, sprite: &str) -> Self {
        let actual = [
            self.palette.background.to_string(),
            self.palette.tile.to_string(),
            self.palette.sprite.to_string(),
        ];
        assert_eq!(
            actual,
            [background, tile, sprite],
            "{}: unexpected colors",
            self.context
        );
        self
    }
}

// ============================================================================
// Rooms
// ============================================================================

pub struct RoomAssertion<'a> {
    room: &'a Room,
    context: String,
}

impl RoomAssertion<'_> {
    pub fn id(self, expected: Id) -> Self {
        assert_eq!(self.room.id, expected, "{}: unexpected id", self.context);
        self
    }

    pub fn name(self, expected: &str) -> Self {
        assert_eq!(self.room.name, expected, "{}: unexpected name", self.context);
        self
    }

    pub fn palette(self, expected: Id) -> Self {
        assert_eq!(self.room.palette, expected, "{}: unexpected palette", self.context);
        self
    }

    pub fn dialog(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.room.dialog.as_deref(),
            expected,
            "{}: unexpected dialog",
            self.context
        );
        self
    }

    pub fn tile_at(self, x: usize, y: usize, expected: Id) -> Self {
        assert_eq!(
            self.room.tiles.get(x, y),
            Some(expected),
            "{}: unexpected tile at {},{}",
            self.context,
            x,
            y
        );
        self
    }

    /// Every cell not equal to `background` in row-major order, as `(x, y, tile)`.
    pub fn placed_tiles(self, background: Id, expected: &[(usize, usize, Id)]) -> Self {
        let actual: Vec<(usize, usize, Id)> = self
            .room
            .tiles
            .cells()
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != background)
            .map(|(i, &tile)| (i % 16, i / 16, tile))
            .collect();
        assert_eq!(actual, expected, "{}: unexpected tiles", self.context);
        self
    }

    pub fn exits(self, expected: &[Exit]) -> Self {
        assert_eq!(self.room.exits, expected, "{}: unexpected exits", self.context);
        self
    }

    /// Item placements as `(item, x, y)`
    pub fn items(self, expected: &[(Id, u32, u32)]) -> Self {
        let actual: Vec<(Id, u32, u32)> = self
            .room
            .items
            .iter()
            .map(|p| (p.item_id, p.x, p.y))
            .collect();
        assert_eq!(actual, expected, "{}: unexpected items", self.context);
        self
    }

    /// Endings as `(id, x, y)`
    pub fn endings(self, expected: &[(Id, u32, u32)]) -> Self {
        let actual: Vec<(Id, u32, u32)> =
            self.room.endings.iter().map(|e| (e.id, e.x, e.y)).collect();
        assert_eq!(actual, expected, "{}: unexpected endings", self.context);
        self
    }
}

// ============================================================================
// Drawables
// ============================================================================

pub struct DrawableAssertion<'a, T> {
    drawable: &'a T,
    context: String,
}

impl<'a, T: Drawable> DrawableAssertion<'a, T> {
    fn new(drawable: &'a T, context: String) -> Self {
        DrawableAssertion { drawable, context }
    }

    pub fn id(self, expected: Id) -> Self {
        assert_eq!(self.drawable.id(), expected, "{}: unexpected id", self.context);
        self
    }

    pub fn name(self, expected: &str) -> Self {
        assert_eq!(self.drawable.name(), expected, "{}: unexpected name", self.context);
        self
    }

    pub fn dialog(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.drawable.dialog(),
            expected,
            "{}: unexpected dialog",
            self.context
        );
        self
    }

    pub fn frame_count(self, expected: usize) -> Self {
        assert_eq!(
            self.drawable.frames().len(),
            expected,
            "{}: unexpected frame count",
            self.context
        );
        self
    }

    /// The rows of frame `index` as `0`/`1` strings
    pub fn frame_rows(self, index: usize, expected: [&str; 8]) -> Self {
        let frame = entry(self.drawable.frames(), index, "Frame");
        let rows: Vec<String> = frame.rows().collect();
        assert_eq!(rows, expected, "{}: unexpected frame {}", self.context, index);
        self
    }
}

impl DrawableAssertion<'_, Tile> {
    pub fn wall(self, expected: bool) -> Self {
        assert_eq!(self.drawable.wall, expected, "{}: unexpected wall flag", self.context);
        self
    }
}

impl DrawableAssertion<'_, Sprite> {
    pub fn player(self, expected: bool) -> Self {
        assert_eq!(
            self.drawable.is_player, expected,
            "{}: unexpected player flag",
            self.context
        );
        self
    }

    pub fn position(self, expected: Option<(Id, u32, u32)>) -> Self {
        let expected = expected.map(|(room, x, y)| Position { room, x, y });
        assert_eq!(
            self.drawable.position, expected,
            "{}: unexpected position",
            self.context
        );
        self
    }
}

// ============================================================================
// Dialogs
// ============================================================================

pub struct DialogAssertion<'a> {
    dialog: &'a Dialog,
}

impl DialogAssertion<'_> {
    pub fn lines(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.dialog.lines, expected,
            "dialog `{}`: unexpected lines",
            self.dialog.id
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitsy::testing::factories::sample_game;

    #[test]
    fn test_fluent_chain() {
        assert_game(&sample_game())
            .title("Tea Time")
            .palette_count(2)
            .tile_count(2)
            .palette(0, |p| {
                p.id(0).name("dusk").colors(
                    "rgb(0,82,204)",
                    "rgb(128,159,255)",
                    "rgb(255,255,255)",
                );
            })
            .room(0, |r| {
                r.name("kitchen")
                    .tile_at(0, 0, 10)
                    .placed_tiles(0, &[(0, 0, 10), (15, 15, 1)])
                    .items(&[(0, 5, 5)]);
            })
            .tile(1, |t| {
                t.name("water").frame_count(2).wall(false);
            })
            .sprite(0, |s| {
                s.id(-1).player(true).position(Some((0, 4, 4)));
            })
            .dialog("SPR_a", |d| {
                d.lines(&["I'm a cat.", "", "Meow."]);
            })
            .starting_items(&[(0, 1)])
            .variable("a", 42);
    }

    #[test]
    #[should_panic(expected = "Expected 3 tiles")]
    fn test_reports_tile_labels() {
        assert_game(&sample_game()).tile_count(3);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_out_of_bounds() {
        assert_game(&sample_game()).item(4, |_| {});
    }
}
