//! 8x8 bitmap frames
//!
//! A frame is 64 pixels in row-major order (index = x + y * 8). In documents
//! each row is one line of eight `0`/`1` characters; json and yaml use the
//! same eight strings.

use serde::{Deserialize, Serialize};

pub const FRAME_SIZE: usize = 8;
pub const FRAME_PIXELS: usize = FRAME_SIZE * FRAME_SIZE;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    #[error("expected 8 rows, found {0}")]
    RowCount(usize),
    #[error("row {row}: expected 8 pixels, found {width}")]
    RowWidth { row: usize, width: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Frame([bool; FRAME_PIXELS]);

impl Frame {
    /// A frame with every pixel clear.
    pub fn blank() -> Self {
        Frame([false; FRAME_PIXELS])
    }

    pub fn from_pixels(pixels: [bool; FRAME_PIXELS]) -> Self {
        Frame(pixels)
    }

    pub fn from_row_bits(rows: [[bool; FRAME_SIZE]; FRAME_SIZE]) -> Self {
        let mut pixels = [false; FRAME_PIXELS];
        for (y, row) in rows.iter().enumerate() {
            pixels[y * FRAME_SIZE..(y + 1) * FRAME_SIZE].copy_from_slice(row);
        }
        Frame(pixels)
    }

    /// Build a frame from eight textual rows.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, FrameError> {
        if rows.len() != FRAME_SIZE {
            return Err(FrameError::RowCount(rows.len()));
        }
        let mut bits = [[false; FRAME_SIZE]; FRAME_SIZE];
        for (row, (slot, text)) in bits.iter_mut().zip(rows).enumerate() {
            let text = text.as_ref();
            *slot = decode_row(text).ok_or(FrameError::RowWidth {
                row,
                width: text.chars().count(),
            })?;
        }
        Ok(Self::from_row_bits(bits))
    }

    pub fn pixels(&self) -> &[bool; FRAME_PIXELS] {
        &self.0
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        x < FRAME_SIZE && y < FRAME_SIZE && self.0[x + y * FRAME_SIZE]
    }

    /// Copy of this frame with one pixel changed. Out of range coordinates are ignored.
    pub fn with_pixel(mut self, x: usize, y: usize, on: bool) -> Self {
        if x < FRAME_SIZE && y < FRAME_SIZE {
            self.0[x + y * FRAME_SIZE] = on;
        }
        self
    }

    /// Rows as `0`/`1` strings, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.0
            .chunks(FRAME_SIZE)
            .map(|row| row.iter().map(|&on| if on { '1' } else { '0' }).collect())
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::blank()
    }
}

/// Decode one bitmap row: `1` is set, any other character is clear.
///
/// Returns `None` unless the row is exactly eight characters wide.
pub fn decode_row(text: &str) -> Option<[bool; FRAME_SIZE]> {
    let mut row = [false; FRAME_SIZE];
    let mut width = 0;
    for (i, c) in text.chars().enumerate() {
        if i >= FRAME_SIZE {
            return None;
        }
        row[i] = c == '1';
        width += 1;
    }
    (width == FRAME_SIZE).then_some(row)
}

impl TryFrom<Vec<String>> for Frame {
    type Error = FrameError;

    fn try_from(rows: Vec<String>) -> Result<Self, Self::Error> {
        Frame::from_rows(&rows)
    }
}

impl From<Frame> for Vec<String> {
    fn from(frame: Frame) -> Self {
        frame.rows().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARROW: [&str; 8] = [
        "00011000", "00111100", "01111110", "11111111", "00011000", "00011000", "00011000",
        "00011000",
    ];

    #[test]
    fn test_from_rows_is_row_major() {
        let frame = Frame::from_rows(&ARROW).unwrap();
        assert!(frame.get(3, 0));
        assert!(!frame.get(0, 0));
        assert!(frame.get(0, 3));
        assert!(frame.pixels()[3]);
        assert!(frame.pixels()[24]);
        assert_eq!(frame.pixels().iter().filter(|&&p| p).count(), 2 + 4 + 6 + 8 + 8);
    }

    #[test]
    fn test_rows_round_trip() {
        let frame = Frame::from_rows(&ARROW).unwrap();
        let rows: Vec<String> = frame.rows().collect();
        assert_eq!(rows, ARROW);
    }

    #[test]
    fn test_from_rows_errors() {
        assert_eq!(Frame::from_rows(&ARROW[..7]), Err(FrameError::RowCount(7)));

        let mut rows = ARROW.map(String::from);
        rows[2] = "0111111".to_string();
        assert_eq!(
            Frame::from_rows(&rows),
            Err(FrameError::RowWidth { row: 2, width: 7 })
        );
    }

    #[test]
    fn test_decode_row() {
        assert_eq!(
            decode_row("10000001"),
            Some([true, false, false, false, false, false, false, true])
        );
        assert_eq!(decode_row("1x000000").map(|r| r[1]), Some(false));
        assert_eq!(decode_row("1000000"), None);
        assert_eq!(decode_row("100000011"), None);
    }

    #[test]
    fn test_with_pixel() {
        let frame = Frame::blank().with_pixel(7, 7, true).with_pixel(9, 0, true);
        assert!(frame.get(7, 7));
        assert_eq!(frame.pixels().iter().filter(|&&p| p).count(), 1);
    }

    #[test]
    fn test_serde_rows() {
        let frame = Frame::blank().with_pixel(0, 0, true);
        let json = serde_json::to_value(frame).unwrap();
        assert_eq!(json[0], "10000000");
        assert_eq!(json.as_array().unwrap().len(), 8);
        let back: Frame = serde_json::from_value(json).unwrap();
        assert_eq!(back, frame);
    }
}
