//! Typed access to the arguments of a keyed line

use super::ParseError;
use crate::bitsy::ast::Id;
use crate::bitsy::grammar::{decode_id, ID_RADIX};
use crate::bitsy::lexing::Line;
use std::str::FromStr;

/// Decode a base-36 id found on `line`.
pub fn id_at(token: &str, line: usize) -> Result<Id, ParseError> {
    decode_id(token).ok_or_else(|| ParseError::InvalidNumber {
        line,
        token: token.to_string(),
        radix: ID_RADIX,
    })
}

/// Decode a decimal number found on `line`.
pub fn decimal_at<T: FromStr>(token: &str, line: usize) -> Result<T, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        token: token.to_string(),
        radix: 10,
    })
}

/// The id of a section header: its last token, in base 36.
///
/// A bare keyword has no id. Its last token is the keyword itself, which
/// would otherwise decode as a base-36 number (`PAL` is 32781).
pub fn header_id(header: &Line<'_>) -> Result<Id, ParseError> {
    if header.text.split_whitespace().nth(1).is_none() {
        return Err(ParseError::MissingArgument {
            line: header.number,
            keyword: header.keyword().to_string(),
            argument: "id",
        });
    }
    id_at(header.last_token(), header.number)
}

/// A keyed line split into fields. Field 0 is the keyword.
pub struct Arguments<'a> {
    line: Line<'a>,
    fields: Vec<Vec<&'a str>>,
}

impl<'a> Arguments<'a> {
    pub fn new(line: Line<'a>) -> Self {
        let fields = line.fields();
        Arguments { line, fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn missing(&self, argument: &'static str) -> ParseError {
        ParseError::MissingArgument {
            line: self.line.number,
            keyword: self.line.keyword().to_string(),
            argument,
        }
    }

    /// The comma-separated parts of field `index`.
    pub fn parts(&self, index: usize, argument: &'static str) -> Result<&[&'a str], ParseError> {
        self.fields
            .get(index)
            .map(Vec::as_slice)
            .ok_or_else(|| self.missing(argument))
    }

    /// Field `index` as a base-36 id.
    pub fn id(&self, index: usize, argument: &'static str) -> Result<Id, ParseError> {
        match self.parts(index, argument)? {
            [token] => id_at(token, self.line.number),
            _ => Err(self.missing(argument)),
        }
    }

    /// Field `index` as a decimal number.
    pub fn decimal<T: FromStr>(&self, index: usize, argument: &'static str) -> Result<T, ParseError> {
        match self.parts(index, argument)? {
            [token] => decimal_at(token, self.line.number),
            _ => Err(self.missing(argument)),
        }
    }

    /// Field `index` as a decimal `x,y` pair.
    pub fn point(&self, index: usize, argument: &'static str) -> Result<(u32, u32), ParseError> {
        match self.parts(index, argument)? {
            [x, y] => Ok((
                decimal_at(x, self.line.number)?,
                decimal_at(y, self.line.number)?,
            )),
            _ => Err(self.missing(argument)),
        }
    }

    /// Field `index` as a `room,x,y` triple: a base-36 room and a decimal cell.
    pub fn room_cell(
        &self,
        index: usize,
        argument: &'static str,
    ) -> Result<(Id, u32, u32), ParseError> {
        let number = self.line.number;
        match self.parts(index, argument)? {
            [room, x, y] => Ok((
                id_at(room, number)?,
                decimal_at(x, number)?,
                decimal_at(y, number)?,
            )),
            _ => Err(self.missing(argument)),
        }
    }
}
