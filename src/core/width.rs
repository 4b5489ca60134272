//! Width selection: smallest discriminant and common storage for a declared set.

use super::alternative::{IntSpec, Underlying};

/// Smallest width in {8, 16, 32, 64} whose unsigned maximum covers
/// `alternatives + 1` states (the `+ 1` is the undefined sentinel).
///
/// Zero alternatives is a valid, always-undefined set: one state, 8 bits.
/// A count whose state space exceeds the 64-bit unsigned range panics, which
/// in const position is a compile failure.
pub const fn index_bits(alternatives: usize) -> u32 {
    let states = alternatives as u128 + 1;
    assert!(
        states <= u64::MAX as u128,
        "alternative count exceeds the 64-bit discriminant range"
    );

    if states <= u8::MAX as u128 {
        8
    } else if states <= u16::MAX as u128 {
        16
    } else if states <= u32::MAX as u128 {
        32
    } else {
        64
    }
}

/// Common storage spec for a declared set: wide enough for every member,
/// signedness taken from the first-declared member of maximal width.
///
/// The fold replaces only on strictly larger width, so ties keep the earlier
/// spec. An empty set stores nothing and defaults to 8-bit unsigned.
pub const fn storage_of(specs: &[IntSpec]) -> IntSpec {
    if specs.is_empty() {
        return IntSpec::new(8, false);
    }

    let mut chosen = specs[0];
    let mut i = 1;
    while i < specs.len() {
        if specs[i].bits > chosen.bits {
            chosen = specs[i];
        }
        i += 1;
    }
    chosen
}

// Discriminant width boundaries are load-bearing: 254 alternatives still fit
// 8 bits with the sentinel, 255 do not.
const _: () = {
    assert!(index_bits(0) == 8);
    assert!(index_bits(254) == 8);
    assert!(index_bits(255) == 16);
    assert!(index_bits(65_534) == 16);
    assert!(index_bits(65_535) == 32);
};

/// Type-level handle for a selected `(bits, signed)` pair.
///
/// [`variant_enum!`](crate::variant_enum) evaluates the selector const fns in
/// const-generic position and projects through [`HasRepr`] to obtain the
/// concrete field types. A selection with no impl cannot name a field type,
/// so an out-of-range selection is unrepresentable.
pub struct Width<const BITS: u32, const SIGNED: bool>;

/// Maps a [`Width`] selection to its primitive representation.
pub trait HasRepr {
    type Repr: Underlying;
}

macro_rules! impl_has_repr {
    ($($bits:literal, $signed:literal => $ty:ty;)*) => {$(
        impl HasRepr for Width<$bits, $signed> {
            type Repr = $ty;
        }
    )*};
}

impl_has_repr! {
    8, false => u8;
    8, true => i8;
    16, false => u16;
    16, true => i16;
    32, false => u32;
    32, true => i32;
    64, false => u64;
    64, true => i64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_bits_boundaries() {
        assert_eq!(index_bits(0), 8);
        assert_eq!(index_bits(1), 8);
        assert_eq!(index_bits(254), 8);
        assert_eq!(index_bits(255), 16);
        assert_eq!(index_bits(65_534), 16);
        assert_eq!(index_bits(65_535), 32);
        assert_eq!(index_bits(u32::MAX as usize - 1), 32);
        assert_eq!(index_bits(u32::MAX as usize), 64);
    }

    #[test]
    fn test_storage_empty_set_defaults() {
        assert_eq!(storage_of(&[]), IntSpec::new(8, false));
    }

    #[test]
    fn test_storage_picks_widest() {
        let specs = [
            <u8 as Underlying>::SPEC,
            <u16 as Underlying>::SPEC,
            <u32 as Underlying>::SPEC,
        ];
        assert_eq!(storage_of(&specs), IntSpec::new(32, false));
    }

    #[test]
    fn test_storage_tie_break_keeps_first_declared() {
        // Equal widths: declaration order decides signedness.
        let unsigned_first = [<u8 as Underlying>::SPEC, <i8 as Underlying>::SPEC];
        let signed_first = [<i8 as Underlying>::SPEC, <u8 as Underlying>::SPEC];
        assert_eq!(storage_of(&unsigned_first), IntSpec::new(8, false));
        assert_eq!(storage_of(&signed_first), IntSpec::new(8, true));
    }

    #[test]
    fn test_storage_width_covers_every_member() {
        let specs = [
            <i8 as Underlying>::SPEC,
            <u64 as Underlying>::SPEC,
            <i16 as Underlying>::SPEC,
        ];
        let chosen = storage_of(&specs);
        let mut i = 0;
        while i < specs.len() {
            assert!(chosen.bits >= specs[i].bits);
            i += 1;
        }
        assert_eq!(chosen, IntSpec::new(64, false));
    }
}
