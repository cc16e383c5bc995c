//! # bitsy
//!
//! A parser and serializer for the Bitsy game-description format.
//!
//! A Bitsy document is a line-oriented text file: a title line followed by
//! palette, room, tile, sprite, item, variable and dialog sections. This crate
//! turns that text into a [`Game`](bitsy::ast::Game) record and back.
//!
//! ```rust,ignore
//! use bitsy::bitsy::{parse, serialize_to_string};
//!
//! let game = parse(source)?;
//! let text = serialize_to_string(&game);
//! assert_eq!(parse(&text)?, game);
//! ```
//!
//! ## Testing
//!
//! For testing guidelines, see the [testing module](bitsy::testing).
//! Parser tests load verified documents through `BitsySamples` and check the
//! result with `assert_game`.

pub mod bitsy;
