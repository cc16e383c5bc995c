//! Forward-only cursor over the lines of a document
//!
//! Section parsers share one cursor and advance it as they consume their
//! bodies. The line array itself is never copied or sliced.

use super::ParseError;
use crate::bitsy::lexing::{split_lines, Line};

pub struct LineCursor<'a> {
    lines: Vec<Line<'a>>,
    position: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(source: &'a str) -> Self {
        LineCursor {
            lines: split_lines(source),
            position: 0,
        }
    }

    pub fn peek(&self) -> Option<Line<'a>> {
        self.lines.get(self.position).copied()
    }

    pub fn next_line(&mut self) -> Option<Line<'a>> {
        let line = self.peek()?;
        self.position += 1;
        Some(line)
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.lines.len()
    }

    /// Line number reported when the document ends unexpectedly.
    fn end_line_number(&self) -> usize {
        self.lines.len() + 1
    }

    /// Take line `found` (0-based) of a fixed-size body of `expected` lines.
    ///
    /// End of input or a blank line means the body was cut short.
    pub fn body_line(
        &mut self,
        header: &Line<'_>,
        unit: &'static str,
        expected: usize,
        found: usize,
    ) -> Result<Line<'a>, ParseError> {
        match self.peek() {
            Some(line) if !line.is_blank() => {
                self.position += 1;
                Ok(line)
            }
            other => Err(ParseError::Truncated {
                line: other.map_or_else(|| self.end_line_number(), |l| l.number),
                section: header.text.trim().to_string(),
                unit,
                expected,
                found,
            }),
        }
    }

    /// Next line of a keyed run (`NAME ...`, `PAL ...`).
    ///
    /// The run ends at a blank line or at the end of input; the blank line is
    /// left for the caller.
    pub fn keyed_line(&mut self) -> Option<Line<'a>> {
        match self.peek() {
            Some(line) if !line.is_blank() => self.next_line(),
            _ => None,
        }
    }

    /// Consume the next line if it satisfies `predicate`.
    pub fn next_if(&mut self, predicate: impl FnOnce(&Line<'a>) -> bool) -> Option<Line<'a>> {
        match self.peek() {
            Some(line) if predicate(&line) => self.next_line(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_and_next() {
        let mut cursor = LineCursor::new("a\nb");
        assert_eq!(cursor.peek().map(|l| l.text), Some("a"));
        assert_eq!(cursor.next_line().map(|l| l.text), Some("a"));
        assert_eq!(cursor.next_line().map(|l| l.number), Some(2));
        assert!(cursor.is_at_end());
        assert_eq!(cursor.next_line(), None);
    }

    #[test]
    fn test_body_line_truncation_at_end() {
        let mut cursor = LineCursor::new("ROOM 0\n0,0");
        let header = cursor.next_line().unwrap();
        assert!(cursor.body_line(&header, "grid rows", 16, 0).is_ok());
        assert_eq!(
            cursor.body_line(&header, "grid rows", 16, 1),
            Err(ParseError::Truncated {
                line: 3,
                section: "ROOM 0".to_string(),
                unit: "grid rows",
                expected: 16,
                found: 1,
            })
        );
    }

    #[test]
    fn test_body_line_truncation_at_blank() {
        let mut cursor = LineCursor::new("TIL 1\n\n00000000");
        let header = cursor.next_line().unwrap();
        let err = cursor.body_line(&header, "bitmap rows", 8, 0).unwrap_err();
        assert_eq!(err.line(), 2);
    }

    #[test]
    fn test_keyed_line_stops_at_blank() {
        let mut cursor = LineCursor::new("NAME a\nWAL true\n\nTIL 2");
        assert!(cursor.keyed_line().is_some());
        assert!(cursor.keyed_line().is_some());
        assert!(cursor.keyed_line().is_none());
        assert!(cursor.peek().unwrap().is_blank());
    }

    #[test]
    fn test_next_if() {
        let mut cursor = LineCursor::new(">\n0");
        assert!(cursor.next_if(|l| l.text == "x").is_none());
        assert!(cursor.next_if(|l| l.text == ">").is_some());
        assert_eq!(cursor.peek().map(|l| l.text), Some("0"));
    }
}
