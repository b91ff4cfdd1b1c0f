//! Enum element grammar.
//!
//! ```text
//! line    = value [ws] [","] [text] [ws] ["#" { any }]
//! value   = { "A".."Z" | "a".."z" | "0".."9" | "_" }
//! text    = { any - "#" }
//! ```
//!
//! The comma only separates value and comment for readability. Everything
//! between it and the first `#` is the enumerator's comment, which templates
//! emit verbatim next to the enumerator; text after `#` is dropped.

use crate::{is_ident_byte, Cursor, LineParseError, LineParseErrorKind, COMMENT_MARKER};

/// Syntax of one enum element line.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct EnumLine<'a> {
    pub value: &'a str,
    /// Trimmed comment text, empty if there is none.
    pub comment: &'a str,
}

/// Parse a trimmed enum element line.
pub fn parse_enum_line(line: &str) -> Result<EnumLine<'_>, LineParseError> {
    let mut cursor = Cursor::new(line);
    let value = cursor.eat_while(is_ident_byte);
    if value.is_empty() {
        return Err(LineParseError::new(LineParseErrorKind::EmptyName, line));
    }

    cursor.skip_whitespace();
    cursor.eat(b',');
    let comment = cursor.eat_while(|b| b != COMMENT_MARKER).trim();

    Ok(EnumLine { value, comment })
}

#[cfg(test)]
mod tests;
