//! Template hand-off.
//!
//! Rendering generated sources is the job of an external template step. This
//! module flattens a [`Definition`] into the view such a template consumes
//! and serializes it as JSON.

use std::path::Path;

use defc_ir::{BitElement, Definition, EnumElement, StorageType};
use serde::Serialize;

/// Storage type as templates want it: both spellings plus the width.
#[derive(Copy, Clone, Debug, Serialize)]
pub struct TypeView {
    pub c: &'static str,
    pub rust: &'static str,
    pub bits: u32,
}

impl From<StorageType> for TypeView {
    fn from(ty: StorageType) -> Self {
        TypeView {
            c: ty.c_name(),
            rust: ty.rust_name(),
            bits: ty.bits(),
        }
    }
}

/// Everything a template needs to render one definition.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TemplateModel<'a> {
    Bitfield {
        name: &'a str,
        import_path: &'a Path,
        #[serde(rename = "type")]
        ty: TypeView,
        total_bits: u64,
        elements: &'a [BitElement],
        /// Generated-artifact paths of direct imports.
        imports: Vec<&'a Path>,
    },
    Enum {
        name: &'a str,
        import_path: &'a Path,
        #[serde(rename = "type")]
        ty: TypeView,
        max_val: Option<u64>,
        invalid_val: &'a str,
        /// Ordinal the sentinel takes in the generated enum.
        invalid_ordinal: u64,
        elements: &'a [EnumElement],
        imports: Vec<&'a Path>,
    },
}

impl<'a> TemplateModel<'a> {
    pub fn new(def: &'a Definition) -> Self {
        let imports = def.import_paths();
        match def {
            Definition::Bitfield(def) => TemplateModel::Bitfield {
                name: def.name(),
                import_path: &def.header.import_path,
                ty: def.ty.into(),
                total_bits: def.total_bits(),
                elements: &def.elements,
                imports,
            },
            Definition::Enum(def) => TemplateModel::Enum {
                name: def.name(),
                import_path: &def.header.import_path,
                ty: def.ty.into(),
                max_val: def.max_val,
                invalid_val: &def.invalid_val,
                invalid_ordinal: def.invalid_ordinal(),
                elements: &def.elements,
                imports,
            },
        }
    }
}

/// Pretty-printed JSON model of `def`.
pub fn to_json(def: &Definition) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&TemplateModel::new(def))
}
