//! Configuration loader for the bitsy toolchain.
//!
//! `defaults/bitsy.default.toml` is embedded into the crate so the documented
//! defaults and runtime behavior stay in sync. User files are layered on top
//! through [`Loader`] before deserializing into [`BitsyConfig`]. Format names
//! are only checked against a [`FormatRegistry`] by [`BitsyConfig::validate`],
//! since callers may register formats of their own.

use crate::bitsy::formats::{FormatError, FormatRegistry};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/bitsy.default.toml");

/// Name of the per-directory config file picked up by the CLI.
pub const LOCAL_CONFIG_FILE: &str = "bitsy.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct BitsyConfig {
    pub convert: ConvertConfig,
    pub inspect: InspectConfig,
}

impl BitsyConfig {
    /// Check that both configured formats exist and can be used the way
    /// `convert` uses them.
    pub fn validate(&self, registry: &FormatRegistry) -> Result<(), FormatError> {
        let input = registry.get(&self.convert.input_format)?;
        if !input.supports_parsing() {
            return Err(FormatError::NotSupported(format!(
                "convert.input_format: format '{}' cannot be read",
                input.name()
            )));
        }
        let output = registry.get(&self.convert.default_format)?;
        if !output.supports_serialization() {
            return Err(FormatError::NotSupported(format!(
                "convert.default_format: format '{}' cannot be written",
                output.name()
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    /// Output format when none is requested
    pub default_format: String,
    /// Input format when none is requested and the extension does not tell
    pub input_format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub show_frames: bool,
}

/// Helper for layering user overrides over the built-in defaults.
///
/// Command line flags win over every file, whatever order the builder
/// methods are called in.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
    output_format: Option<String>,
    show_frames: Option<bool>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self {
            builder,
            output_format: None,
            show_frames: None,
        }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a configuration file that may not exist.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Override `convert.default_format`, as `--to` does.
    pub fn with_output_format(mut self, name: impl Into<String>) -> Self {
        self.output_format = Some(name.into());
        self
    }

    /// Override `inspect.show_frames`, as `--show-frames` does.
    pub fn with_show_frames(mut self, show_frames: bool) -> Self {
        self.show_frames = Some(show_frames);
        self
    }

    pub fn build(self) -> Result<BitsyConfig, ConfigError> {
        let mut builder = self.builder;
        if let Some(name) = self.output_format {
            builder = builder.set_override("convert.default_format", name)?;
        }
        if let Some(show_frames) = self.show_frames {
            builder = builder.set_override("inspect.show_frames", show_frames)?;
        }
        builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<BitsyConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.convert.default_format, "json");
        assert_eq!(config.convert.input_format, "bitsy");
        assert!(!config.inspect.show_frames);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .with_show_frames(true)
            .with_output_format("treeviz")
            .build()
            .expect("config to build");
        assert!(config.inspect.show_frames);
        assert_eq!(config.convert.default_format, "treeviz");
        assert_eq!(config.convert.input_format, "bitsy");
    }

    #[test]
    fn overrides_beat_files_added_later() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[convert]\ndefault_format = \"yaml\"").expect("write config");

        let config = Loader::new()
            .with_output_format("bitsy")
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.convert.default_format, "bitsy");
    }

    #[test]
    fn defaults_validate() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.validate(&FormatRegistry::default()), Ok(()));
    }

    #[test]
    fn unknown_output_format_fails_validation() {
        let config = Loader::new()
            .with_output_format("xml")
            .build()
            .expect("config to build");
        assert_eq!(
            config.validate(&FormatRegistry::default()),
            Err(FormatError::FormatNotFound("xml".to_string()))
        );
    }

    #[test]
    fn write_only_input_format_fails_validation() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[convert]\ninput_format = \"treeviz\"").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(
            config.validate(&FormatRegistry::default()),
            Err(FormatError::NotSupported(
                "convert.input_format: format 'treeviz' cannot be read".to_string()
            ))
        );
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[convert]\ndefault_format = \"yaml\"").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.convert.default_format, "yaml");
        assert_eq!(config.convert.input_format, "bitsy");
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/bitsy.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.convert.default_format, "json");
    }

    #[test]
    fn missing_required_file_fails() {
        assert!(Loader::new()
            .with_file("/nonexistent/bitsy.toml")
            .build()
            .is_err());
    }
}
