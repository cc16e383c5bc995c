//! Traits shared by game entities

use super::{DrawableKind, Frame, Id};

/// An entity with a numeric id and a display name.
pub trait Identifiable {
    fn id(&self) -> Id;

    /// Display name, empty when the document gives none
    fn name(&self) -> &str;

    /// Id of the dialog attached to this entity, if any
    fn dialog(&self) -> Option<&str> {
        None
    }

    /// Label used in listings: `"<id> - <name>"`, or just the id when unnamed.
    fn display_label(&self) -> String {
        if self.name().is_empty() {
            self.id().to_string()
        } else {
            format!("{} - {}", self.id(), self.name())
        }
    }
}

/// An entity drawn from one or more 8x8 frames.
///
/// A single frame is a static image; more frames loop as an animation.
pub trait Drawable: Identifiable {
    fn kind(&self) -> DrawableKind;

    fn frames(&self) -> &[Frame];

    fn is_animated(&self) -> bool {
        self.frames().len() > 1
    }
}
