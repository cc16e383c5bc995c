//! Dialogs

use serde::{Deserialize, Serialize};

/// Text keyed by a free-form id.
///
/// Dialog ids live in their own namespace, separate from the numeric ids of
/// the other entities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialog {
    pub id: String,
    pub lines: Vec<String>,
}

impl Dialog {
    pub fn single(id: impl Into<String>, line: impl Into<String>) -> Self {
        Dialog {
            id: id.into(),
            lines: vec![line.into()],
        }
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}
