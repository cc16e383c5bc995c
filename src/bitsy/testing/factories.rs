//! Builders for test games

use crate::bitsy::ast::{
    Color, Dialog, Ending, Exit, Frame, Game, Item, ItemPlacement, Palette, Position, Room,
    RoomGrid, Sprite, StartingItem, Tile,
};

/// A frame from eight `0`/`1` rows. Panics on malformed rows.
pub fn frame(rows: [&str; 8]) -> Frame {
    Frame::from_rows(&rows).unwrap_or_else(|e| panic!("bad test frame: {e}"))
}

/// Alternating pixels, starting with a set pixel in the top left corner.
pub fn checker_frame() -> Frame {
    let mut frame = Frame::blank();
    for y in 0..8 {
        for x in 0..8 {
            frame = frame.with_pixel(x, y, (x + y) % 2 == 0);
        }
    }
    frame
}

pub fn palette(id: i32, name: &str) -> Palette {
    Palette {
        id,
        name: name.to_string(),
        background: Color::new(0, 82, 204),
        tile: Color::new(128, 159, 255),
        sprite: Color::new(255, 255, 255),
    }
}

/// A game touching every section and optional field.
pub fn sample_game() -> Game {
    let mut player = Sprite::player();
    player.position = Some(Position { room: 0, x: 4, y: 4 });

    let mut game = Game {
        palettes: vec![palette(0, "dusk"), palette(1, "")],
        rooms: vec![
            Room {
                id: 0,
                name: "kitchen".into(),
                tiles: RoomGrid::empty().with_cell(0, 0, 10).with_cell(15, 15, 1),
                palette: 0,
                exits: vec![Exit {
                    from_x: 15,
                    from_y: 8,
                    to_room: 1,
                    to_x: 0,
                    to_y: 8,
                }],
                items: vec![ItemPlacement {
                    item_id: 0,
                    x: 5,
                    y: 5,
                }],
                endings: vec![],
                dialog: None,
            },
            Room {
                id: 1,
                name: "garden".into(),
                palette: 1,
                endings: vec![Ending { id: 0, x: 7, y: 7 }],
                dialog: Some("ROOM_1".into()),
                ..Default::default()
            },
        ],
        tiles: vec![
            Tile {
                id: 1,
                name: "brick".into(),
                frames: vec![checker_frame()],
                wall: true,
                dialog: None,
            },
            Tile {
                id: 10,
                name: "water".into(),
                frames: vec![Frame::blank(), checker_frame()],
                ..Default::default()
            },
        ],
        sprites: vec![
            player,
            Sprite {
                id: 10,
                name: "cat".into(),
                frames: vec![checker_frame()],
                dialog: Some("SPR_a".into()),
                position: Some(Position { room: 1, x: 3, y: 3 }),
                is_player: false,
            },
        ],
        items: vec![Item {
            id: 0,
            name: "tea".into(),
            frames: vec![checker_frame()],
            dialog: Some("ITM_0".into()),
        }],
        dialogs: vec![
            Dialog {
                id: "SPR_a".into(),
                lines: vec!["I'm a cat.".into(), String::new(), "Meow.".into()],
            },
            Dialog::single("ITM_0", "You found a nice warm cup of tea"),
            Dialog::single("ROOM_1", "The garden is quiet."),
        ],
        starting_items: vec![StartingItem { item_id: 0, count: 1 }],
        ..Game::new("Tea Time")
    };
    game.variables.insert("a".into(), 42);
    game
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_rows() {
        let f = frame([
            "10000000", "00000000", "00000000", "00000000", "00000000", "00000000", "00000000",
            "00000001",
        ]);
        assert!(f.get(0, 0));
        assert!(f.get(7, 7));
        assert!(!f.get(1, 0));
    }

    #[test]
    fn test_checker() {
        let rows: Vec<String> = checker_frame().rows().collect();
        assert_eq!(rows[0], "10101010");
        assert_eq!(rows[1], "01010101");
    }
}
