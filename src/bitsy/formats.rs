//! Formats
//!
//! A [`Game`](crate::bitsy::ast::Game) can be read from and written to several
//! representations. Each one implements [`Format`] and is looked up by name in
//! a [`FormatRegistry`]:
//!
//! - `bitsy`: the native text format, both directions
//! - `json`: serde layout, both directions
//! - `yaml`: serde layout, both directions
//! - `treeviz`: a tree outline for inspection, write only
//!
//! The bitsy serializer is also exposed directly as [`serialize`] and
//! [`serialize_to_string`], since it is the inverse of
//! [`parse`](crate::bitsy::parse).

pub mod bitsy;
mod error;
mod format;
pub mod json;
mod registry;
pub mod treeviz;
pub mod yaml;

pub use self::bitsy::{serialize, serialize_to_string, BitsyFormat};
pub use error::FormatError;
pub use format::Format;
pub use json::JsonFormat;
pub use registry::FormatRegistry;
pub use treeviz::{to_treeviz_str, TreevizFormat};
pub use yaml::YamlFormat;
