//! Statically-checked visitor dispatch.

/// Exhaustive dispatch over a variant's alternative set.
///
/// [`variant_enum!`](crate::variant_enum) implements this for exactly one
/// callback tuple shape per variant type: `(F0, …, FN-1)` where `Fi` takes the
/// i-th declared alternative by value. The type system is the validator —
/// a tuple of the wrong arity has no impl, and a callback with the wrong
/// parameter count or type fails its `FnOnce` bound. There is nothing left to
/// reject at run time.
///
/// Visiting an undefined variant invokes nothing and returns `false`;
/// visiting a defined one invokes exactly the callback matching the active
/// alternative and returns `true`.
///
/// ```
/// use varenum::{alternative, variant_enum, Visit};
///
/// alternative! {
///     pub enum Fruit: u8 { Orange = 0, Apple = 1, Kiwi = 2 }
/// }
///
/// alternative! {
///     pub enum Color: u8 { Red = 0, Green = 1, Blue = 2 }
/// }
///
/// variant_enum! {
///     pub struct Reading: ReadingCase { Fruit, Color }
/// }
///
/// let reading = Reading::new(Color::Blue);
/// let fired = reading.visit((
///     |fruit: Fruit| panic!("not a fruit: {fruit:?}"),
///     |color: Color| assert_eq!(color, Color::Blue),
/// ));
/// assert!(fired);
/// ```
///
/// A callback set that does not cover the alternatives one-to-one fails to
/// build:
///
/// ```compile_fail
/// use varenum::{alternative, variant_enum, Visit};
///
/// alternative! {
///     pub enum Fruit: u8 { Orange = 0 }
/// }
///
/// alternative! {
///     pub enum Color: u8 { Red = 0 }
/// }
///
/// variant_enum! {
///     pub struct Reading: ReadingCase { Fruit, Color }
/// }
///
/// // One callback for two alternatives: no impl for this tuple shape.
/// Reading::new(Fruit::Orange).visit((|fruit: Fruit| drop(fruit),));
/// ```
pub trait Visit<Callbacks> {
    fn visit(&self, callbacks: Callbacks) -> bool;
}

/// Free-function form of [`Visit::visit`].
#[inline]
pub fn visit<V: Visit<C>, C>(variant: &V, callbacks: C) -> bool {
    variant.visit(callbacks)
}
