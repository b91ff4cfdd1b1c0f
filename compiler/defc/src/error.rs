//! Errors surfaced by a definition load.
//!
//! Nothing is recovered locally: the first error aborts the definition being
//! loaded and, through `?`, every definition importing it.

use std::io;
use std::path::PathBuf;

use defc_ir::UnrepresentableWidth;
use defc_parse::LineParseError;

#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    /// An element line the grammar rejects.
    #[error("{}:{}: {}", .path.display(), .line_no, .source)]
    LineParse {
        path: PathBuf,
        /// 1-based line number in the source file.
        line_no: usize,
        #[source]
        source: LineParseError,
    },

    /// A field or the whole definition needs more bits than the widest
    /// storage type.
    #[error("{}: {}", .path.display(), .source)]
    UnrepresentableWidth {
        path: PathBuf,
        #[source]
        source: UnrepresentableWidth,
    },

    /// A definition file (top-level or imported) could not be read.
    #[error("cannot read definition {}: {}", .path.display(), .source)]
    ImportResolution {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A definition imports itself, directly or transitively.
    #[error("circular import detected: {}", display_chain(.chain))]
    ImportCycle {
        /// Paths from the first definition on the cycle back to itself.
        chain: Vec<PathBuf>,
    },

    /// The file stem is not usable as a generated type name.
    #[error("{}: `{}` is not a valid definition name", .path.display(), .name)]
    InvalidDefinitionName { path: PathBuf, name: String },

    /// The file extension names no definition kind.
    #[error("{}: not a definition file (expected .btx or .the)", .path.display())]
    UnknownKind { path: PathBuf },
}

fn display_chain(chain: &[PathBuf]) -> String {
    chain
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
