//! Access to the sample documents under `docs/samples/`

use crate::bitsy::ast::Game;
use crate::bitsy::parsing::{parse, ParseError};
use std::fs;
use std::path::PathBuf;

const SAMPLE_EXTENSION: &str = "bitsy";

#[derive(Debug, thiserror::Error)]
pub enum SampleError {
    #[error("sample not found: {0}")]
    NotFound(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Verified bitsy documents for tests.
pub struct BitsySamples;

impl BitsySamples {
    pub fn samples_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("docs/samples")
    }

    pub fn path(name: &str) -> PathBuf {
        Self::samples_dir().join(name)
    }

    pub fn get_string(name: &str) -> Result<String, SampleError> {
        let path = Self::path(name);
        if !path.is_file() {
            return Err(SampleError::NotFound(name.to_string()));
        }
        Ok(fs::read_to_string(path)?)
    }

    pub fn get_game(name: &str) -> Result<Game, SampleError> {
        Ok(parse(&Self::get_string(name)?)?)
    }

    /// Parsed sample, panicking if it is missing or invalid
    pub fn must_get_game(name: &str) -> Game {
        Self::get_game(name).unwrap_or_else(|e| panic!("Failed to load sample {name}: {e}"))
    }

    /// Sample file names, sorted
    pub fn list() -> Result<Vec<String>, SampleError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(Self::samples_dir())? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(SAMPLE_EXTENSION) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_includes_kitchensink() {
        let names = BitsySamples::list().unwrap();
        assert!(names.contains(&"kitchensink.bitsy".to_string()));
        assert!(names.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_missing_sample() {
        assert!(matches!(
            BitsySamples::get_string("nope.bitsy"),
            Err(SampleError::NotFound(_))
        ));
    }

    #[test]
    fn test_broken_sample_reports_parse_error() {
        match BitsySamples::get_game("truncated-room.bitsy") {
            Err(SampleError::Parse(err)) => assert_eq!(err.line(), 19),
            other => panic!("Expected a parse error, got {other:?}"),
        }
    }
}
