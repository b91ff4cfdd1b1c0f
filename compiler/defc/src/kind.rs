//! The two definition kinds.
//!
//! Bitfields and enums share one load pipeline (see [`crate::compiler`]) and
//! differ only in the hooks of [`DefinitionKind`]:
//!
//! ```text
//! prepare(source)            enum: append the sentinel line
//!   for each content line:
//!     import_target(line) ──► recursive load of the same kind
//!     parse_line(line)    ──► Element
//! finalize(elements)         bitfield: offsets + width type
//!                            enum: cardinality type, max/invalid values
//! ```

use std::rc::Rc;

use defc_ir::{
    is_identifier, BitElement, BitfieldDef, DefinitionHeader, EnumDef, EnumElement, Kind,
    StorageType, UnrepresentableWidth, INVALID_ENUM_COMMENT, INVALID_ENUM_VALUE,
};
use defc_parse::{LineParseError, LineParseErrorKind};
use rustc_hash::FxHashSet;

use crate::config::ZeroWidthPolicy;
use crate::source::SourceFile;

/// Per-kind behavior plugged into the shared load pipeline.
pub trait DefinitionKind {
    type Element;
    type Output;

    const KIND: Kind;

    /// Import path if `line` is this kind's import directive.
    fn import_target<'a>(&self, line: &'a str) -> Option<&'a str>;

    /// Adjust the raw lines before any of them is parsed.
    fn prepare(&self, _source: &mut SourceFile) {}

    /// Parse one content line into an element.
    fn parse_line(&self, line: &str) -> Result<Self::Element, ElementError>;

    /// Build the definition from its elements in source order.
    fn finalize(
        &self,
        header: DefinitionHeader,
        elements: Vec<Self::Element>,
        imports: Vec<Rc<Self::Output>>,
    ) -> Result<Self::Output, UnrepresentableWidth>;
}

/// Failure of [`DefinitionKind::parse_line`], before the loader attaches
/// the file position.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ElementError {
    Line(LineParseError),
    Width(UnrepresentableWidth),
}

impl From<LineParseError> for ElementError {
    fn from(err: LineParseError) -> Self {
        ElementError::Line(err)
    }
}

impl From<UnrepresentableWidth> for ElementError {
    fn from(err: UnrepresentableWidth) -> Self {
        ElementError::Width(err)
    }
}

/// Bitfield definitions (`.btx`).
#[derive(Copy, Clone, Debug, Default)]
pub struct Bitfield {
    pub zero_width: ZeroWidthPolicy,
}

impl DefinitionKind for Bitfield {
    type Element = BitElement;
    type Output = BitfieldDef;

    const KIND: Kind = Kind::Bitfield;

    fn import_target<'a>(&self, line: &'a str) -> Option<&'a str> {
        defc_parse::bitfield_import(line)
    }

    fn parse_line(&self, line: &str) -> Result<BitElement, ElementError> {
        let parsed = defc_parse::parse_bit_line(line)?;
        if !is_identifier(parsed.name) {
            tracing::warn!(name = parsed.name, "element name is not a valid identifier");
        }
        if parsed.size == 0 && self.zero_width == ZeroWidthPolicy::Reject {
            return Err(LineParseError::new(LineParseErrorKind::ZeroWidth, line).into());
        }
        Ok(BitElement {
            name: parsed.name.to_string(),
            size: parsed.size,
            ty: StorageType::for_bits(u64::from(parsed.size))?,
            offset: 0,
            comment: parsed.comment.to_string(),
        })
    }

    fn finalize(
        &self,
        header: DefinitionHeader,
        mut elements: Vec<BitElement>,
        imports: Vec<Rc<BitfieldDef>>,
    ) -> Result<BitfieldDef, UnrepresentableWidth> {
        warn_duplicates(&header.name, elements.iter().map(|e| e.name.as_str()));

        let mut offset = 0u64;
        for element in &mut elements {
            element.offset = offset;
            offset += u64::from(element.size);
        }

        Ok(BitfieldDef {
            ty: StorageType::for_bits(offset)?,
            header,
            elements,
            imports,
        })
    }
}

/// Enum definitions (`.the`).
#[derive(Copy, Clone, Debug, Default)]
pub struct Enum;

impl DefinitionKind for Enum {
    type Element = EnumElement;
    type Output = EnumDef;

    const KIND: Kind = Kind::Enum;

    fn import_target<'a>(&self, line: &'a str) -> Option<&'a str> {
        defc_parse::enum_import(line)
    }

    fn prepare(&self, source: &mut SourceFile) {
        source.push_synthetic(format!("{INVALID_ENUM_VALUE},{INVALID_ENUM_COMMENT}"));
    }

    fn parse_line(&self, line: &str) -> Result<EnumElement, ElementError> {
        let parsed = defc_parse::parse_enum_line(line)?;
        Ok(EnumElement::new(parsed.value, parsed.comment))
    }

    fn finalize(
        &self,
        header: DefinitionHeader,
        elements: Vec<EnumElement>,
        imports: Vec<Rc<EnumDef>>,
    ) -> Result<EnumDef, UnrepresentableWidth> {
        warn_duplicates(&header.name, elements.iter().map(|e| e.value.as_str()));

        let count = elements.len() as u64;
        let invalid_val = elements
            .last()
            .map_or_else(|| INVALID_ENUM_VALUE.to_string(), |e| e.value.clone());

        Ok(EnumDef {
            ty: StorageType::for_cardinality(count)?,
            max_val: count.checked_sub(2),
            invalid_val,
            header,
            elements,
            imports,
        })
    }
}

/// Element names are expected to be unique but not required to be; report
/// repeats without failing the load.
fn warn_duplicates<'a>(definition: &str, names: impl Iterator<Item = &'a str>) {
    let mut seen = FxHashSet::default();
    for name in names {
        if !seen.insert(name) {
            tracing::warn!(definition, name, "duplicate element name");
        }
    }
}
