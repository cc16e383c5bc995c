//! Palette colors
//!
//! Documents store a color as a decimal `r,g,b` triplet. In memory (and in
//! json/yaml output) a color reads as `rgb(r,g,b)`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static RGB_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$")
        .expect("rgb pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color {0:?}")]
pub struct ColorError(pub String);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Parse the `r,g,b` form found in palette bodies.
    pub fn from_triplet(text: &str) -> Result<Self, ColorError> {
        let channels: Vec<&str> = text.split(',').map(str::trim).collect();
        Self::from_channels(&channels).ok_or_else(|| ColorError(text.to_string()))
    }

    /// Build a color from three decimal channel strings.
    pub fn from_channels(channels: &[&str]) -> Option<Self> {
        match channels {
            [r, g, b] => Some(Color {
                r: r.parse().ok()?,
                g: g.parse().ok()?,
                b: b.parse().ok()?,
            }),
            _ => None,
        }
    }

    /// The `r,g,b` form written to documents.
    pub fn to_triplet(&self) -> String {
        format!("{},{},{}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = RGB_PATTERN
            .captures(s.trim())
            .ok_or_else(|| ColorError(s.to_string()))?;
        let channels: Vec<&str> = (1..=3)
            .filter_map(|i| captures.get(i).map(|m| m.as_str()))
            .collect();
        Self::from_channels(&channels).ok_or_else(|| ColorError(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triplet() {
        assert_eq!(Color::from_triplet("255,0,128"), Ok(Color::new(255, 0, 128)));
        assert_eq!(Color::from_triplet(" 1, 2 ,3 "), Ok(Color::new(1, 2, 3)));
        assert_eq!(Color::new(0, 82, 204).to_triplet(), "0,82,204");
    }

    #[test]
    fn test_triplet_errors() {
        assert!(Color::from_triplet("255,0").is_err());
        assert!(Color::from_triplet("256,0,0").is_err());
        assert!(Color::from_triplet("a,b,c").is_err());
        assert!(Color::from_triplet("1,2,3,4").is_err());
    }

    #[test]
    fn test_display_and_parse() {
        let color = Color::new(255, 255, 255);
        assert_eq!(color.to_string(), "rgb(255,255,255)");
        assert_eq!("rgb(255,255,255)".parse::<Color>(), Ok(color));
        assert_eq!("rgb(1, 2, 3)".parse::<Color>(), Ok(Color::new(1, 2, 3)));
        assert!("#ffffff".parse::<Color>().is_err());
        assert!("rgb(300,0,0)".parse::<Color>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Color::new(128, 128, 128)).unwrap();
        assert_eq!(json, "\"rgb(128,128,128)\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::new(128, 128, 128));
        assert!(serde_json::from_str::<Color>("\"blue\"").is_err());
    }
}
