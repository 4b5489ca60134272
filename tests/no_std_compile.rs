//! Exercises the core surface through core-only imports to ensure the
//! crate's paths don't accidentally grow a std dependency.

use varenum::core::width::{index_bits, storage_of};
use varenum::core::{Alternative, IntSpec, Underlying, Variant};
use varenum::{alternative, is_same, variant_enum};

alternative! {
    pub enum Mode: u8 { Idle = 0, Active = 1 }
}

alternative! {
    pub enum Level: i32 { Low = -1, High = 1 }
}

variant_enum! {
    pub struct State: StateCase { Mode, Level }
}

#[test]
fn test_core_surface_compiles_and_runs() {
    let mut state = State::undefined();
    assert!(state.is_undefined());
    state.set(Level::Low);
    assert_eq!(state.get::<Level>(), Some(Level::Low));
    assert!(is_same(&state, &State::new(Level::Low)));
}

#[test]
fn test_variant_trait_object_free_usage() {
    fn type_index_of<V: Variant>(v: &V) -> usize {
        v.type_index()
    }
    assert_eq!(type_index_of(&State::new(Mode::Active)), 0);
    assert_eq!(type_index_of(&State::undefined()), State::ALTERNATIVES);
}

#[test]
fn test_selectors_are_const_callable() {
    const BITS: u32 = index_bits(State::ALTERNATIVES);
    const STORAGE: IntSpec = storage_of(&[
        <Mode as Alternative>::SPEC,
        <Level as Alternative>::SPEC,
    ]);
    assert_eq!(BITS, 8);
    assert_eq!(STORAGE, IntSpec::new(32, true));
    assert_eq!(STORAGE, State::STORAGE);
}

#[test]
fn test_underlying_plumbing() {
    assert_eq!(<i32 as Underlying>::truncate((-1i32).widen()), -1);
    assert_eq!(<u8 as Underlying>::SPEC.canon(-1), 0xFF);
}
