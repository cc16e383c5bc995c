//! Palettes

use super::{Color, Id, Identifiable};
use serde::{Deserialize, Serialize};

/// Three colors: room background, tile foreground and sprite foreground.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub id: Id,
    #[serde(default)]
    pub name: String,
    pub background: Color,
    pub tile: Color,
    pub sprite: Color,
}

impl Identifiable for Palette {
    fn id(&self) -> Id {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
