//! Minimal storage type selection.
//!
//! Both definition kinds pick their backing integer through this module:
//! bitfields by cumulative bit count, enums by the number of ordinals they
//! must distinguish (sentinel included). The ladder is fixed; a requirement
//! wider than its last rung is an error, never a multi-word fallback.

use std::fmt;

/// Unsigned integer widths a generated definition can be stored in.
///
/// Variants are declared in ascending width, so the derived `Ord` orders
/// them by capacity.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StorageType {
    U8,
    U16,
    U32,
    U64,
}

/// A bit or cardinality requirement exceeds the widest storage type.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{required_bits} bits required, but the widest storage type holds {max_bits}")]
pub struct UnrepresentableWidth {
    /// Bits the definition needs.
    pub required_bits: u64,
    /// Bits of [`StorageType::MAX`].
    pub max_bits: u32,
}

impl StorageType {
    /// Every supported type, narrowest first.
    pub const LADDER: [StorageType; 4] = [
        StorageType::U8,
        StorageType::U16,
        StorageType::U32,
        StorageType::U64,
    ];

    /// The widest supported type.
    pub const MAX: StorageType = StorageType::U64;

    /// Width of this type in bits.
    pub const fn bits(self) -> u32 {
        match self {
            StorageType::U8 => 8,
            StorageType::U16 => 16,
            StorageType::U32 => 32,
            StorageType::U64 => 64,
        }
    }

    /// Smallest type with at least `required` bits.
    ///
    /// A requirement of zero bits selects the narrowest type.
    pub fn for_bits(required: u64) -> Result<Self, UnrepresentableWidth> {
        Self::LADDER
            .into_iter()
            .find(|ty| u64::from(ty.bits()) >= required)
            .ok_or(UnrepresentableWidth {
                required_bits: required,
                max_bits: Self::MAX.bits(),
            })
    }

    /// Smallest type able to hold `count` distinct ordinals `0..count`.
    pub fn for_cardinality(count: u64) -> Result<Self, UnrepresentableWidth> {
        Self::for_bits(u64::from(bits_for_cardinality(count)))
    }

    /// C/C++ spelling used by generated headers.
    pub const fn c_name(self) -> &'static str {
        match self {
            StorageType::U8 => "uint8_t",
            StorageType::U16 => "uint16_t",
            StorageType::U32 => "uint32_t",
            StorageType::U64 => "uint64_t",
        }
    }

    /// Rust spelling, for templates emitting Rust.
    pub const fn rust_name(self) -> &'static str {
        match self {
            StorageType::U8 => "u8",
            StorageType::U16 => "u16",
            StorageType::U32 => "u32",
            StorageType::U64 => "u64",
        }
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.c_name())
    }
}

/// Smallest bit count `b` with `2^b >= count`.
///
/// Zero or one ordinal needs no bits at all.
pub const fn bits_for_cardinality(count: u64) -> u32 {
    if count <= 1 {
        0
    } else {
        u64::BITS - (count - 1).leading_zeros()
    }
}

#[cfg(test)]
mod tests;
