//! `DLG` and `VAR` sections
//!
//!     DLG <id>           DLG <id>
//!     <one line>         """
//!                        <any lines, blank ones included>
//!                        """
//!
//!     VAR <name>
//!     <decimal value>

use super::arguments::decimal_at;
use super::cursor::LineCursor;
use super::ParseError;
use crate::bitsy::ast::Dialog;
use crate::bitsy::grammar::DIALOG_BLOCK;
use crate::bitsy::lexing::Line;

pub fn parse_dialog(header: Line<'_>, cursor: &mut LineCursor<'_>) -> Result<Dialog, ParseError> {
    let id = header.rest().to_string();

    let first = cursor.next_line().ok_or_else(|| ParseError::Truncated {
        line: header.number + 1,
        section: header.text.trim().to_string(),
        unit: "lines",
        expected: 1,
        found: 0,
    })?;

    if first.text.trim_end() != DIALOG_BLOCK {
        return Ok(Dialog {
            id,
            lines: vec![first.text.to_string()],
        });
    }

    let mut lines = Vec::new();
    loop {
        match cursor.next_line() {
            Some(line) if line.text.trim_end() == DIALOG_BLOCK => break,
            Some(line) => lines.push(line.text.to_string()),
            None => {
                return Err(ParseError::UnterminatedDialog {
                    line: first.number,
                    dialog: id,
                })
            }
        }
    }

    Ok(Dialog { id, lines })
}

pub fn parse_variable(
    header: Line<'_>,
    cursor: &mut LineCursor<'_>,
) -> Result<(String, i64), ParseError> {
    let name = header.rest().to_string();
    let line = cursor.body_line(&header, "values", 1, 0)?;
    let value = decimal_at(line.text.trim(), line.number)?;
    Ok((name, value))
}
