//! Element line errors.

use std::fmt;

/// An element line that the grammar rejects.
///
/// Carries the offending raw line so the caller can report it verbatim.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} in line: {line}")]
pub struct LineParseError {
    pub kind: LineParseErrorKind,
    pub line: String,
}

impl LineParseError {
    #[cold]
    pub fn new(kind: LineParseErrorKind, line: impl Into<String>) -> Self {
        LineParseError {
            kind,
            line: line.into(),
        }
    }
}

/// Why a line was rejected.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LineParseErrorKind {
    /// The line does not follow the element grammar.
    Malformed,
    /// The element name (or enum value) is empty.
    EmptyName,
    /// The bit count does not fit a `u32`.
    SizeOverflow,
    /// A zero-width field while the loader rejects them.
    ZeroWidth,
}

impl fmt::Display for LineParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineParseErrorKind::Malformed => "malformed element",
            LineParseErrorKind::EmptyName => "empty element name",
            LineParseErrorKind::SizeOverflow => "bit count out of range",
            LineParseErrorKind::ZeroWidth => "zero-width field",
        })
    }
}
