//! defc IR - Definition Model Types
//!
//! This crate contains the data model shared by the definition compiler and
//! the template step that consumes it:
//! - `StorageType`, the ladder of unsigned storage widths and the
//!   width/cardinality suggester built on it
//! - `BitElement` and `EnumElement`, one declared unit of a definition
//! - `BitfieldDef`, `EnumDef` and the `Definition` union over both
//!
//! Everything here is plain data. Parsing lives in `defc_parse`, loading and
//! import resolution in `defc`.
//!
//! Enable the `serde` feature to derive `Serialize`/`Deserialize` on the
//! storage and element types.

mod definition;
mod element;
mod storage;

pub use definition::{
    is_identifier, BitfieldDef, Definition, DefinitionHeader, EnumDef, Kind, INVALID_ENUM_COMMENT,
    INVALID_ENUM_VALUE,
};
pub use element::{BitElement, EnumElement};
pub use storage::{bits_for_cardinality, StorageType, UnrepresentableWidth};
