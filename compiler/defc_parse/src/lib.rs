//! Line grammars for definition files.
//!
//! Definition files are line oriented: every non-blank line is either a
//! `#` comment, an `import <path>` directive or one element. This crate
//! tokenizes a single, already trimmed line into borrowed syntax:
//!
//! - [`parse_bit_line`]: `name(bits) [# comment]`
//! - [`parse_enum_line`]: `VALUE[,] [comment] [# ignored]`
//! - [`bitfield_import`] / [`enum_import`]: the per-kind import directives
//!
//! The grammars are stateless functions over a small byte cursor; nothing
//! here allocates on success or touches the file system.

mod bitfield;
mod cursor;
mod enumeration;
mod error;
mod import;

pub use bitfield::{parse_bit_line, BitLine};
pub use enumeration::{parse_enum_line, EnumLine};
pub use error::{LineParseError, LineParseErrorKind};
pub use import::{bitfield_import, enum_import};

use cursor::Cursor;

/// Introduces a comment, both as a whole line and after an element.
pub const COMMENT_MARKER: u8 = b'#';

/// Whether a trimmed line carries nothing for the grammars: blank, or a
/// comment from its first character.
pub fn is_blank_or_comment(line: &str) -> bool {
    line.as_bytes().first().map_or(true, |&b| b == COMMENT_MARKER)
}

/// Bytes allowed in element names and enum values.
#[inline]
fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

#[cfg(test)]
mod tests {
    use super::is_blank_or_comment;

    #[test]
    fn blank_and_comment_lines() {
        assert!(is_blank_or_comment(""));
        assert!(is_blank_or_comment("# header flags"));
        assert!(is_blank_or_comment("#"));
        assert!(!is_blank_or_comment("flag(1) # trailing"));
        assert!(!is_blank_or_comment("RED"));
    }
}
