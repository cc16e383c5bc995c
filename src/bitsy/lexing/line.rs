//! Numbered source lines

use super::tokens;
use crate::bitsy::grammar::COMMENT_PREFIX;

/// One line of a document with its 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub number: usize,
    pub text: &'a str,
}

impl<'a> Line<'a> {
    pub fn new(number: usize, text: &'a str) -> Self {
        Line { number, text }
    }

    /// Empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn is_comment(&self) -> bool {
        self.text.starts_with(COMMENT_PREFIX)
    }

    /// The first whitespace-delimited token, or `""` for a blank line.
    pub fn keyword(&self) -> &'a str {
        self.text.split_whitespace().next().unwrap_or("")
    }

    /// The last whitespace-delimited token. Section headers keep their id here.
    pub fn last_token(&self) -> &'a str {
        self.text.split_whitespace().last().unwrap_or("")
    }

    /// Everything after the keyword, trimmed.
    pub fn rest(&self) -> &'a str {
        let text = self.text.trim_start();
        match text.find(char::is_whitespace) {
            Some(index) => text[index..].trim(),
            None => "",
        }
    }

    /// Argument fields, see [`tokens::fields`]. The keyword is field 0.
    pub fn fields(&self) -> Vec<Vec<&'a str>> {
        tokens::fields(self.text)
    }
}

/// Split a document into numbered lines. Both `\n` and `\r\n` end a line.
pub fn split_lines(source: &str) -> Vec<Line<'_>> {
    source
        .lines()
        .enumerate()
        .map(|(index, text)| Line::new(index + 1, text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines() {
        let lines = split_lines("Title\r\n\nPAL 0\n");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], Line::new(1, "Title"));
        assert!(lines[1].is_blank());
        assert_eq!(lines[2].number, 3);
    }

    #[test]
    fn test_keyword_and_rest() {
        let line = Line::new(1, "NAME  red brick ");
        assert_eq!(line.keyword(), "NAME");
        assert_eq!(line.rest(), "red brick");
        assert_eq!(line.last_token(), "brick");

        let bare = Line::new(1, "NAME");
        assert_eq!(bare.rest(), "");
        assert_eq!(bare.last_token(), "NAME");
    }

    #[test]
    fn test_classification() {
        assert!(Line::new(1, "   ").is_blank());
        assert!(Line::new(1, "# BITSY VERSION 7.0").is_comment());
        assert!(!Line::new(1, " # indented").is_comment());
        assert_eq!(Line::new(1, "").keyword(), "");
    }

    #[test]
    fn test_fields_borrow_source() {
        let line = Line::new(4, "POS 0 4,5");
        assert_eq!(line.fields(), vec![vec!["POS"], vec!["0"], vec!["4", "5"]]);
    }
}
