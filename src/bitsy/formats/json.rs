//! JSON format
//!
//! Games are written with serde's derived layout: frames become lists of eight
//! `0`/`1` row strings, room grids become sixteen rows of tile ids, and
//! colors become `rgb(r,g,b)` strings.

use super::{Format, FormatError};
use crate::bitsy::ast::Game;

pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Game data as pretty-printed JSON"
    }

    fn extensions(&self) -> &[&'static str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Game, FormatError> {
        serde_json::from_str(source).map_err(|e| FormatError::ParseError(e.to_string()))
    }

    fn serialize(&self, game: &Game) -> Result<String, FormatError> {
        serde_json::to_string_pretty(game)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitsy::ast::{Color, Frame, Palette, Tile};

    fn sample() -> Game {
        Game {
            palettes: vec![Palette {
                id: 0,
                name: "dusk".into(),
                background: Color::new(10, 20, 30),
                tile: Color::new(255, 255, 255),
                sprite: Color::new(0, 0, 0),
            }],
            tiles: vec![Tile {
                id: 1,
                frames: vec![Frame::blank().with_pixel(0, 0, true)],
                wall: true,
                ..Default::default()
            }],
            ..Game::new("json game")
        }
    }

    #[test]
    fn test_json_round_trip() {
        let game = sample();
        let text = JsonFormat.serialize(&game).unwrap();
        assert_eq!(JsonFormat.parse(&text).unwrap(), game);
    }

    #[test]
    fn test_json_layout() {
        let value: serde_json::Value =
            serde_json::from_str(&JsonFormat.serialize(&sample()).unwrap()).unwrap();
        assert_eq!(value["palettes"][0]["background"], "rgb(10,20,30)");
        assert_eq!(value["tiles"][0]["frames"][0][0], "10000000");
        assert!(value["tiles"][0].get("dialog").is_none());
    }

    #[test]
    fn test_json_rejects_bad_frame() {
        let source = r#"{"title":"g","tiles":[{"id":1,"frames":[["0"]]}]}"#;
        assert!(matches!(
            JsonFormat.parse(source),
            Err(FormatError::ParseError(_))
        ));
    }
}
