//! Format registry
//!
//! Formats are registered by name. The CLI resolves its `--from` and `--to`
//! flags through [`FormatRegistry::get`] and guesses the input format from
//! the file name with [`FormatRegistry::for_path`].

use super::{BitsyFormat, Format, FormatError, JsonFormat, TreevizFormat, YamlFormat};
use std::collections::BTreeMap;
use std::path::Path;

pub struct FormatRegistry {
    formats: BTreeMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: BTreeMap::new(),
        }
    }

    /// Register a format, replacing any format with the same name.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// The readable format claiming the extension of `path`, if any.
    ///
    /// Extensions compare case-insensitively. Write-only formats never match.
    pub fn for_path(&self, path: &Path) -> Option<&dyn Format> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        self.iter()
            .filter(|f| f.supports_parsing())
            .find(|f| f.extensions().iter().any(|e| *e == extension))
    }

    /// Formats in name order, for listings.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Format> {
        self.formats.values().map(|f| f.as_ref())
    }

    /// Read `source` as `from` and write it back out as `to`.
    ///
    /// Both names are resolved before anything is parsed, so a bad target
    /// is reported even when the source would not parse.
    pub fn convert(&self, source: &str, from: &str, to: &str) -> Result<String, FormatError> {
        let reader = self.get(from)?;
        let writer = self.get(to)?;
        if !writer.supports_serialization() {
            return Err(FormatError::NotSupported(format!(
                "Format '{}' does not support serialization",
                to
            )));
        }
        writer.serialize(&reader.parse(source)?)
    }

    /// A registry holding the built-in formats.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(BitsyFormat);
        registry.register(JsonFormat);
        registry.register(YamlFormat);
        registry.register(TreevizFormat::default());
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
