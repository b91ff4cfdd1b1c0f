//! defc - Bitfield and Enum Definition Compiler
//!
//! Reads `.btx` (bitfield) and `.the` (enum) definition files, derives their
//! layout metadata and hands the model to an external template step.
//!
//! # Architecture
//!
//! ```text
//! path ──► SourceFile (trimmed lines)
//!            │
//!            ▼
//!          DefinitionKind::prepare        (enum: sentinel line)
//!            │
//!            ▼
//!          per content line:
//!            import  ──► DefinitionCompiler::load (same kind, recursive)
//!            element ──► DefinitionKind::parse_line
//!            │
//!            ▼
//!          DefinitionKind::finalize ──► BitfieldDef | EnumDef
//!            │
//!            ▼
//!          emit::to_json ──► template renderer
//! ```

pub mod compiler;
pub mod config;
pub mod discovery;
pub mod emit;
mod error;
pub mod kind;
pub mod source;
pub mod tracing_setup;

pub use compiler::{Compiler, DefinitionCompiler};
pub use config::{CompilerConfig, ZeroWidthPolicy};
pub use error::CompileError;
pub use kind::{Bitfield, DefinitionKind, Enum};

pub use defc_ir::{
    BitElement, BitfieldDef, Definition, DefinitionHeader, EnumDef, EnumElement, Kind,
    StorageType, UnrepresentableWidth,
};
pub use defc_parse::{LineParseError, LineParseErrorKind};
