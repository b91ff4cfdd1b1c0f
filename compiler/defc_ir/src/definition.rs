//! Parsed definitions.
//!
//! A definition is the validated model of one source file. It is built once
//! by the loader and never mutated afterwards; imported definitions are held
//! behind `Rc` so a memoizing loader can hand the same instance to every
//! importer.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::{BitElement, EnumElement, StorageType};

/// Value of the sentinel appended to every enum.
pub const INVALID_ENUM_VALUE: &str = "INVALID_ENUM_VALUE";

/// Comment attached to the sentinel enumerator.
pub const INVALID_ENUM_COMMENT: &str = "// invalid enum values are mapped to this";

/// The two definition kinds, as told apart by file extension.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Kind {
    Bitfield,
    Enum,
}

impl Kind {
    /// Source file extension of this kind (without the dot).
    pub const fn extension(self) -> &'static str {
        match self {
            Kind::Bitfield => "btx",
            Kind::Enum => "the",
        }
    }

    /// Human-readable kind name.
    pub const fn label(self) -> &'static str {
        match self {
            Kind::Bitfield => "bitfield",
            Kind::Enum => "enum",
        }
    }

    /// Kind of a definition file, judged by its extension.
    pub fn from_path(path: &Path) -> Option<Kind> {
        let ext = path.extension()?.to_str()?;
        [Kind::Bitfield, Kind::Enum]
            .into_iter()
            .find(|kind| kind.extension() == ext)
    }
}

/// Fields every definition derives from its source path.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DefinitionHeader {
    /// File stem; always a valid identifier.
    pub name: String,
    /// Logical path the definition was loaded from.
    pub source_path: PathBuf,
    /// Path of the generated artifact, referenced by downstream imports.
    pub import_path: PathBuf,
}

/// A parsed bitfield definition.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BitfieldDef {
    pub header: DefinitionHeader,
    /// Fields in declaration order, offsets assigned.
    pub elements: Vec<BitElement>,
    /// Smallest type covering all fields together.
    pub ty: StorageType,
    /// Imported bitfields in source order.
    pub imports: Vec<Rc<BitfieldDef>>,
}

impl BitfieldDef {
    pub fn name(&self) -> &str {
        &self.header.name
    }

    /// Sum of all field sizes.
    pub fn total_bits(&self) -> u64 {
        self.elements.iter().map(|e| u64::from(e.size)).sum()
    }
}

/// A parsed enum definition.
///
/// `elements` always ends with the sentinel enumerator.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnumDef {
    pub header: DefinitionHeader,
    pub elements: Vec<EnumElement>,
    /// Smallest type holding every ordinal, sentinel included.
    pub ty: StorageType,
    /// Ordinal of the last user-declared enumerator, `None` when the file
    /// declares none.
    pub max_val: Option<u64>,
    /// Value of the sentinel enumerator.
    pub invalid_val: String,
    /// Imported enums in source order.
    pub imports: Vec<Rc<EnumDef>>,
}

impl EnumDef {
    pub fn name(&self) -> &str {
        &self.header.name
    }

    /// Enumerators declared in the source file, without the sentinel.
    pub fn user_elements(&self) -> &[EnumElement] {
        let end = self.elements.len().saturating_sub(1);
        &self.elements[..end]
    }

    /// Ordinal of the sentinel enumerator.
    pub fn invalid_ordinal(&self) -> u64 {
        self.user_elements().len() as u64
    }
}

/// A definition of either kind.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Definition {
    Bitfield(Rc<BitfieldDef>),
    Enum(Rc<EnumDef>),
}

impl Definition {
    pub fn kind(&self) -> Kind {
        match self {
            Definition::Bitfield(_) => Kind::Bitfield,
            Definition::Enum(_) => Kind::Enum,
        }
    }

    pub fn header(&self) -> &DefinitionHeader {
        match self {
            Definition::Bitfield(def) => &def.header,
            Definition::Enum(def) => &def.header,
        }
    }

    pub fn name(&self) -> &str {
        &self.header().name
    }

    pub fn ty(&self) -> StorageType {
        match self {
            Definition::Bitfield(def) => def.ty,
            Definition::Enum(def) => def.ty,
        }
    }

    pub fn element_count(&self) -> usize {
        match self {
            Definition::Bitfield(def) => def.elements.len(),
            Definition::Enum(def) => def.elements.len(),
        }
    }

    /// Generated-artifact paths of the direct imports, in source order.
    pub fn import_paths(&self) -> Vec<&Path> {
        match self {
            Definition::Bitfield(def) => def
                .imports
                .iter()
                .map(|d| d.header.import_path.as_path())
                .collect(),
            Definition::Enum(def) => def
                .imports
                .iter()
                .map(|d| d.header.import_path.as_path())
                .collect(),
        }
    }
}

/// Whether `s` is `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_identifier(s: &str) -> bool {
    let mut bytes = s.bytes();
    match bytes.next() {
        Some(first) if first.is_ascii_alphabetic() || first == b'_' => {
            bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests;
