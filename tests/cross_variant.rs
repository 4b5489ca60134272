//! Cross-variant equality over differing alternative sets.

use varenum::{alternative, is_same, variant_enum};

alternative! {
    pub enum Fruit: u8 { Orange = 0, Apple = 1, Kiwi = 2 }
}

alternative! {
    pub enum Color: u8 { Red = 0, Green = 1, Blue = 2 }
}

alternative! {
    pub enum Character: u8 { Neo = 0, Morpheus = 1, Trinity = 2 }
}

variant_enum! {
    pub struct Left: LeftCase { Fruit, Color }
}

variant_enum! {
    pub struct Right: RightCase { Color, Character }
}

variant_enum! {
    pub struct Disjoint: DisjointCase { Character }
}

variant_enum! {
    pub struct Nothing: NothingCase {}
}

#[test]
fn test_both_undefined_is_same_across_any_sets() {
    assert!(is_same(&Left::undefined(), &Right::undefined()));
    assert!(is_same(&Left::undefined(), &Disjoint::undefined()));
    assert!(is_same(&Nothing::undefined(), &Left::undefined()));
    assert!(is_same(&Nothing::undefined(), &Nothing::undefined()));
}

#[test]
fn test_one_undefined_is_never_same() {
    assert!(!is_same(&Left::undefined(), &Right::new(Color::Red)));
    assert!(!is_same(&Left::new(Color::Red), &Right::undefined()));
    assert!(!is_same(&Nothing::undefined(), &Disjoint::new(Character::Neo)));
}

#[test]
fn test_shared_active_type_compares_values() {
    // Color sits at index 1 in Left and index 0 in Right; identity wins
    // over position.
    assert!(is_same(&Left::new(Color::Green), &Right::new(Color::Green)));
    assert!(!is_same(&Left::new(Color::Green), &Right::new(Color::Blue)));
}

#[test]
fn test_differing_active_types_are_never_same() {
    // Both Color and Character exist in Right's set, but the two sides are
    // holding different types.
    assert!(!is_same(&Right::new(Color::Red), &Right::new(Character::Neo)));
    // Identical underlying bit patterns change nothing.
    assert!(!is_same(&Left::new(Fruit::Apple), &Right::new(Color::Green)));
}

#[test]
fn test_active_type_outside_other_set_is_never_same() {
    assert!(!is_same(&Left::new(Fruit::Kiwi), &Disjoint::new(Character::Trinity)));
    assert!(!is_same(&Left::new(Fruit::Orange), &Right::new(Character::Neo)));
}

#[test]
fn test_is_same_on_one_variant_type_matches_strict_equality() {
    let pairs = [
        (Left::undefined(), Left::undefined()),
        (Left::new(Fruit::Apple), Left::new(Fruit::Apple)),
        (Left::new(Fruit::Apple), Left::new(Fruit::Kiwi)),
        (Left::new(Fruit::Apple), Left::new(Color::Green)),
        (Left::new(Color::Blue), Left::undefined()),
    ];
    for (a, b) in pairs {
        assert_eq!(is_same(&a, &b), a == b, "disagreement on {a:?} vs {b:?}");
    }
}
