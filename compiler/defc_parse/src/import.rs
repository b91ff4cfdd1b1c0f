//! Import directives.
//!
//! ```text
//! import = "import" ws path
//! ```
//!
//! Exactly one whitespace byte must follow the keyword; the rest of the line,
//! trimmed, is the path. Bitfield imports additionally require the path to
//! start with `bit`, the directory all bitfield
//! definitions live under. The two directives are deliberately separate
//! functions: a bitfield file can only import bitfields, an enum file only
//! enums.

use crate::Cursor;

const IMPORT_KEYWORD: &str = "import";

/// Leading path component of every bitfield import.
const BITFIELD_IMPORT_ROOT: &str = "bit";

/// Path named by an enum `import` line, `None` for any other line.
pub fn enum_import(line: &str) -> Option<&str> {
    let cursor = directive(line)?;
    trimmed(cursor.rest())
}

/// Path named by a bitfield `import bit...` line, `None` for any other line.
pub fn bitfield_import(line: &str) -> Option<&str> {
    let mut cursor = directive(line)?;
    let path = cursor.rest();
    if !cursor.eat_str(BITFIELD_IMPORT_ROOT) || cursor.is_eof() {
        return None;
    }
    trimmed(path)
}

/// Cursor positioned right after `import` and its separating whitespace.
fn directive(line: &str) -> Option<Cursor<'_>> {
    let mut cursor = Cursor::new(line);
    if cursor.eat_str(IMPORT_KEYWORD) && cursor.eat_if(|b| b.is_ascii_whitespace()) {
        Some(cursor)
    } else {
        None
    }
}

fn trimmed(path: &str) -> Option<&str> {
    let path = path.trim();
    if path.is_empty() {
        None
    } else {
        tracing::trace!(path, "import directive");
        Some(path)
    }
}
