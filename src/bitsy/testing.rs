//! Testing utilities
//!
//! Two tools are meant to be used together when testing the parser:
//!
//! 1. [`BitsySamples`] for document text. Bitsy documents are fussy (exact
//!    row widths, sixteen grid rows, blank-line terminated bodies), and a
//!    hand-typed document in a test is easy to get subtly wrong. The curated
//!    files under `docs/samples/` are checked by their own tests, so reuse
//!    them instead of inlining large documents.
//!
//! 2. [`assert_game`] for verification. It walks a parsed game with a fluent
//!    API, so a test states the shape it expects instead of indexing by hand:
//!
//! ```rust-example
//! use bitsy::bitsy::testing::{assert_game, BitsySamples};
//!
//! let game = BitsySamples::must_get_game("kitchensink.bitsy");
//! assert_game(&game)
//!     .title("Tea Time")
//!     .room(1, |room| {
//!         room.name("garden").palette(1).dialog(Some("ROOM_1"));
//!     })
//!     .sprite(0, |player| {
//!         player.player(true).position(Some((0, 4, 4)));
//!     });
//! ```
//!
//! Small inline documents are fine when the test is about a single line of
//! grammar. [`factories`] builds games directly for serializer and
//! round-trip tests.

mod assertions;
pub mod factories;
mod samples;

pub use assertions::{
    assert_game, DialogAssertion, DrawableAssertion, GameAssertion, PaletteAssertion,
    RoomAssertion,
};
pub use samples::{BitsySamples, SampleError};
