#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;

// === Bit widths ===

#[test]
fn zero_bits_selects_narrowest() {
    assert_eq!(StorageType::for_bits(0), Ok(StorageType::U8));
}

#[test]
fn exact_widths_select_their_own_type() {
    assert_eq!(StorageType::for_bits(8), Ok(StorageType::U8));
    assert_eq!(StorageType::for_bits(16), Ok(StorageType::U16));
    assert_eq!(StorageType::for_bits(32), Ok(StorageType::U32));
    assert_eq!(StorageType::for_bits(64), Ok(StorageType::U64));
}

#[test]
fn one_past_a_rung_moves_up() {
    assert_eq!(StorageType::for_bits(9), Ok(StorageType::U16));
    assert_eq!(StorageType::for_bits(17), Ok(StorageType::U32));
    assert_eq!(StorageType::for_bits(33), Ok(StorageType::U64));
}

#[test]
fn wider_than_ladder_is_unrepresentable() {
    let err = StorageType::for_bits(65).unwrap_err();
    assert_eq!(err.required_bits, 65);
    assert_eq!(err.max_bits, 64);
    assert_eq!(
        err.to_string(),
        "65 bits required, but the widest storage type holds 64"
    );
}

// === Cardinality ===

#[test]
fn bits_for_small_cardinalities() {
    assert_eq!(bits_for_cardinality(0), 0);
    assert_eq!(bits_for_cardinality(1), 0);
    assert_eq!(bits_for_cardinality(2), 1);
    assert_eq!(bits_for_cardinality(3), 2);
    assert_eq!(bits_for_cardinality(4), 2);
    assert_eq!(bits_for_cardinality(5), 3);
    assert_eq!(bits_for_cardinality(256), 8);
    assert_eq!(bits_for_cardinality(257), 9);
}

#[test]
fn bits_for_full_u64_range() {
    assert_eq!(bits_for_cardinality(u64::MAX), 64);
}

#[test]
fn cardinality_selects_type() {
    // RED, GREEN, BLUE + sentinel
    assert_eq!(StorageType::for_cardinality(4), Ok(StorageType::U8));
    assert_eq!(StorageType::for_cardinality(256), Ok(StorageType::U8));
    assert_eq!(StorageType::for_cardinality(257), Ok(StorageType::U16));
    assert_eq!(StorageType::for_cardinality(65_537), Ok(StorageType::U32));
}

// === Names ===

#[test]
fn spellings() {
    assert_eq!(StorageType::U16.c_name(), "uint16_t");
    assert_eq!(StorageType::U16.rust_name(), "u16");
    assert_eq!(StorageType::U32.to_string(), "uint32_t");
}

#[test]
fn ladder_is_ascending() {
    for pair in StorageType::LADDER.windows(2) {
        assert!(pair[0] < pair[1]);
        assert!(pair[0].bits() < pair[1].bits());
    }
    assert_eq!(StorageType::LADDER.last(), Some(&StorageType::MAX));
}

mod proptest_monotonic {
    use super::super::{bits_for_cardinality, StorageType};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn wider_requirement_never_narrows(a in 0u64..=64, b in 0u64..=64) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let lo_ty = StorageType::for_bits(lo).unwrap();
            let hi_ty = StorageType::for_bits(hi).unwrap();
            prop_assert!(lo_ty <= hi_ty);
            prop_assert!(u64::from(hi_ty.bits()) >= hi);
        }

        #[test]
        fn larger_cardinality_never_narrows(a in any::<u64>(), b in any::<u64>()) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(bits_for_cardinality(lo) <= bits_for_cardinality(hi));
            let lo_ty = StorageType::for_cardinality(lo).unwrap();
            let hi_ty = StorageType::for_cardinality(hi).unwrap();
            prop_assert!(lo_ty <= hi_ty);
        }

        #[test]
        fn cardinality_bits_are_minimal(count in 2u64..(1 << 40)) {
            let bits = bits_for_cardinality(count);
            prop_assert!((1u128 << bits) >= u128::from(count));
            prop_assert!((1u128 << (bits - 1)) < u128::from(count));
        }
    }
}
