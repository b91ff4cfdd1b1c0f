//! Bitfield element grammar.
//!
//! ```text
//! line    = name [ws] "(" digits ")" [ws] [comment]
//! name    = { "A".."Z" | "a".."z" | "0".."9" | "_" }
//! comment = "#" { any }
//! ```
//!
//! At most one whitespace byte may separate the name from `(`. The name is
//! allowed to be empty by the grammar so that `(4)` is reported as an empty
//! name rather than as a malformed line. A name may also start with a
//! digit (`1(3)`); it parses, but cannot be used as a generated field name,
//! so the loader warns about it.

use crate::{is_ident_byte, Cursor, LineParseError, LineParseErrorKind, COMMENT_MARKER};

/// Syntax of one bitfield element line.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct BitLine<'a> {
    pub name: &'a str,
    /// Declared width in bits. Zero is accepted here; the loader decides.
    pub size: u32,
    /// Trimmed text after `#`, empty if there is none.
    pub comment: &'a str,
}

/// Parse a trimmed bitfield element line.
pub fn parse_bit_line(line: &str) -> Result<BitLine<'_>, LineParseError> {
    let malformed = || LineParseError::new(LineParseErrorKind::Malformed, line);

    let mut cursor = Cursor::new(line);
    let name = cursor.eat_while(is_ident_byte);
    cursor.eat_if(|b| b.is_ascii_whitespace());

    if !cursor.eat(b'(') {
        return Err(malformed());
    }
    let digits = cursor.eat_while(|b| b.is_ascii_digit());
    if digits.is_empty() || !cursor.eat(b')') {
        return Err(malformed());
    }

    cursor.skip_whitespace();
    let comment = if cursor.eat(COMMENT_MARKER) {
        cursor.rest().trim()
    } else if cursor.is_eof() {
        ""
    } else {
        return Err(malformed());
    };

    if name.is_empty() {
        return Err(LineParseError::new(LineParseErrorKind::EmptyName, line));
    }
    let size = digits
        .parse::<u32>()
        .map_err(|_| LineParseError::new(LineParseErrorKind::SizeOverflow, line))?;

    Ok(BitLine {
        name,
        size,
        comment,
    })
}
