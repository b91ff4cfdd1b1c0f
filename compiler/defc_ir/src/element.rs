//! Declared units of a definition.

use crate::StorageType;

/// One field of a bitfield definition.
///
/// `offset` is zero until the containing definition assigns it; after that it
/// equals the sum of the sizes of every field declared before this one.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BitElement {
    pub name: String,
    /// Width in bits.
    pub size: u32,
    /// Smallest storage type covering `size` bits on its own.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub ty: StorageType,
    /// Bit position within the containing bitfield.
    pub offset: u64,
    /// Text after the `#` marker, empty if the line had none.
    pub comment: String,
}

/// One enumerator of an enum definition.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumElement {
    pub value: String,
    /// Free text emitted next to the enumerator, empty if absent.
    pub comment: String,
}

impl EnumElement {
    pub fn new(value: impl Into<String>, comment: impl Into<String>) -> Self {
        EnumElement {
            value: value.into(),
            comment: comment.into(),
        }
    }
}
