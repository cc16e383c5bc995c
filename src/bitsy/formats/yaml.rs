//! YAML format, same layout as the JSON one

use super::{Format, FormatError};
use crate::bitsy::ast::Game;

pub struct YamlFormat;

impl Format for YamlFormat {
    fn name(&self) -> &str {
        "yaml"
    }

    fn description(&self) -> &str {
        "Game data as YAML"
    }

    fn extensions(&self) -> &[&'static str] {
        &["yaml", "yml"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Game, FormatError> {
        serde_yaml::from_str(source).map_err(|e| FormatError::ParseError(e.to_string()))
    }

    fn serialize(&self, game: &Game) -> Result<String, FormatError> {
        serde_yaml::to_string(game).map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitsy::ast::{Dialog, Position, Sprite, StartingItem};

    #[test]
    fn test_yaml_round_trip() {
        let mut player = Sprite::player();
        player.position = Some(Position { room: 0, x: 4, y: 4 });
        let mut game = Game {
            sprites: vec![player],
            dialogs: vec![Dialog::single("hi", "hello there")],
            starting_items: vec![StartingItem { item_id: 0, count: 3 }],
            ..Game::new("yaml game")
        };
        game.variables.insert("a".into(), 42);

        let text = YamlFormat.serialize(&game).unwrap();
        assert!(text.contains("title: yaml game"));
        assert_eq!(YamlFormat.parse(&text).unwrap(), game);
    }

    #[test]
    fn test_yaml_minimal_document() {
        let game = YamlFormat.parse("title: bare\n").unwrap();
        assert_eq!(game, Game::new("bare"));
    }
}
