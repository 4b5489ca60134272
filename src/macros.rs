//! Declaration macros: alternative enums and the variant types over them.

/// Declares a fieldless enum eligible as a variant alternative.
///
/// The underlying integer type is named after the enum, `bitflags`-style; the
/// macro emits the matching `#[repr]` together with
/// `derive(Debug, Clone, Copy, PartialEq, Eq, Hash)` and the
/// [`Alternative`](crate::Alternative) impl, so the declared spec can never
/// drift from the actual representation.
///
/// ```
/// use varenum::{alternative, Alternative};
///
/// alternative! {
///     /// Ambient temperature bands.
///     pub enum Temperature: i16 {
///         Freezing = -40,
///         Mild = 10,
///         Hot = 35,
///     }
/// }
///
/// assert_eq!(Temperature::Freezing.to_bits(), -40);
/// assert_eq!(Temperature::from_bits(35), Some(Temperature::Hot));
/// assert_eq!(Temperature::from_bits(36), None);
/// assert_eq!(i16::from(Temperature::Mild), 10);
/// ```
///
/// Backing types outside the eight primitive integer representations are
/// rejected:
///
/// ```compile_fail
/// varenum::alternative! {
///     pub enum Huge: u128 { Max = 0 }
/// }
/// ```
#[macro_export]
macro_rules! alternative {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $repr:ident {
            $($variant:ident $(= $value:expr)?),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr($repr)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant $(= $value)?),+
        }

        impl $crate::core::Alternative for $name {
            const SPEC: $crate::core::IntSpec = <$repr as $crate::core::Underlying>::SPEC;

            #[inline(always)]
            fn to_bits(self) -> i128 {
                self as $repr as i128
            }

            fn from_bits(bits: i128) -> ::core::option::Option<Self> {
                let raw = bits as $repr;
                $(
                    if raw == $name::$variant as $repr {
                        return ::core::option::Option::Some($name::$variant);
                    }
                )+
                ::core::option::Option::None
            }

            #[inline(always)]
            unsafe fn from_bits_unchecked(bits: i128) -> Self {
                // Same size as the emitted #[repr]; the caller guarantees a
                // declared value.
                unsafe { ::core::mem::transmute(bits as $repr) }
            }
        }

        impl ::core::convert::From<$name> for $repr {
            #[inline(always)]
            fn from(value: $name) -> $repr {
                value as $repr
            }
        }
    };
}

/// Declares a variant type over an ordered set of alternative enums.
///
/// `pub struct Name: NameCase { A, B, … }` emits:
///
/// - the value struct: a discriminant of the smallest unsigned width covering
///   every alternative plus the undefined sentinel, and a raw storage field of
///   the smallest width holding every alternative's underlying value
///   (signedness from the first-declared widest alternative);
/// - the companion case enum `NameCase` for exhaustive matching;
/// - [`MemberOf`](crate::MemberOf) impls assigning declared-order indices;
/// - `From<A> for Name` per alternative, `Default` (undefined),
///   the [`Variant`](crate::Variant) impl, and the
///   [`Visit`](crate::Visit) impl for the matching callback tuple
///   (sets of up to 8 alternatives; larger sets keep `case()`).
///
/// Equality is strict: discriminants equal and storage bits equal. Both
/// fields of an undefined value are deterministically sentinel/zero, so any
/// two undefined values of one type compare equal.
///
/// ```
/// use varenum::{alternative, variant_enum};
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
///     /// A reading that is a fruit, a color, or nothing yet.
///     pub struct Reading: ReadingCase { Fruit, Color }
/// }
///
/// let mut reading = Reading::default();
/// assert!(reading.is_undefined());
/// assert_eq!(reading.type_index(), Reading::ALTERNATIVES);
///
/// reading.set(Color::Blue);
/// assert!(reading.is_type_of::<Color>());
/// assert_eq!(reading.get::<Color>(), Some(Color::Blue));
/// assert_eq!(reading.get::<Fruit>(), None);
///
/// match reading.case() {
///     Some(ReadingCase::Fruit(fruit)) => panic!("not a fruit: {fruit:?}"),
///     Some(ReadingCase::Color(color)) => assert_eq!(color, Color::Blue),
///     None => panic!("defined above"),
/// }
/// ```
///
/// Listing a type twice is a coherence error:
///
/// ```compile_fail
/// use varenum::{alternative, variant_enum};
///
/// alternative! {
///     pub enum Fruit: u8 { Orange = 0 }
/// }
///
/// variant_enum! {
///     pub struct Reading: ReadingCase { Fruit, Fruit }
/// }
/// ```
///
/// So is listing a type that is not an alternative enum:
///
/// ```compile_fail
/// use varenum::variant_enum;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// pub struct NotAnEnum(u8);
///
/// variant_enum! {
///     pub struct Reading: ReadingCase { NotAnEnum }
/// }
/// ```
///
/// And typed operations only accept declared members:
///
/// ```compile_fail
/// use varenum::{alternative, variant_enum};
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
///     pub struct Reading: ReadingCase { Fruit }
/// }
///
/// Reading::new(Fruit::Orange).get::<Color>();
/// ```
#[macro_export]
macro_rules! variant_enum {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $case:ident {
            $($alt:ident),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name {
            type_idx: <$crate::core::width::Width<
                { $crate::core::width::index_bits($crate::__alt_count!($($alt)*)) },
                false,
            > as $crate::core::width::HasRepr>::Repr,
            raw: <$crate::core::width::Width<
                { $crate::core::width::storage_of(
                    &[$(<$alt as $crate::core::Alternative>::SPEC),*]).bits },
                { $crate::core::width::storage_of(
                    &[$(<$alt as $crate::core::Alternative>::SPEC),*]).signed },
            > as $crate::core::width::HasRepr>::Repr,
        }

        #[doc = ::core::concat!(
            "Sealed one-of view of [`", ::core::stringify!($name), "`], for exhaustive `match`."
        )]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis enum $case {
            $($alt($alt)),*
        }

        $crate::__impl_members!($name; 0;  $($alt)*);

        impl $name {
            /// Declared alternative count; doubles as the undefined sentinel.
            pub const ALTERNATIVES: usize = $crate::__alt_count!($($alt)*);

            /// Selected discriminant width in bits.
            pub const INDEX_BITS: u32 =
                $crate::core::width::index_bits(Self::ALTERNATIVES);

            /// Selected common storage representation.
            pub const STORAGE: $crate::core::IntSpec =
                $crate::core::width::storage_of(
                    &[$(<$alt as $crate::core::Alternative>::SPEC),*]);

            /// The undefined value: sentinel discriminant, zeroed storage.
            #[inline]
            pub fn undefined() -> Self {
                Self {
                    type_idx: $crate::core::Underlying::from_usize(Self::ALTERNATIVES),
                    raw: $crate::core::Underlying::truncate(0),
                }
            }

            /// A defined value holding `value`.
            #[inline]
            pub fn new<T: $crate::core::MemberOf<Self>>(value: T) -> Self {
                Self {
                    type_idx: $crate::core::Underlying::from_usize(T::INDEX),
                    raw: $crate::core::Underlying::truncate(
                        $crate::core::Alternative::to_bits(value)),
                }
            }

            /// Replaces the held value in place; returns `self` for chaining.
            #[inline]
            pub fn set<T: $crate::core::MemberOf<Self>>(&mut self, value: T) -> &mut Self {
                *self = Self::new(value);
                self
            }

            /// The raw discriminant, in `[0, ALTERNATIVES]`.
            #[inline(always)]
            pub fn type_index(&self) -> usize {
                $crate::core::Underlying::as_usize(self.type_idx)
            }

            #[inline(always)]
            pub fn is_defined(&self) -> bool {
                self.type_index() < Self::ALTERNATIVES
            }

            #[inline(always)]
            pub fn is_undefined(&self) -> bool {
                !self.is_defined()
            }

            /// Is the held value of type `T`?
            #[inline(always)]
            pub fn is_type_of<T: $crate::core::MemberOf<Self>>(&self) -> bool {
                self.type_index() == T::INDEX
            }

            /// Declared position of `T` in this set.
            #[inline(always)]
            pub const fn index_of<T: $crate::core::MemberOf<Self>>() -> usize {
                T::INDEX
            }

            /// Runtime membership query, usable with any alternative type.
            /// Declared members are better expressed as `MemberOf` bounds.
            #[inline]
            pub fn is_member<T: $crate::core::Alternative>() -> bool {
                [$(::core::any::TypeId::of::<$alt>()),*]
                    .contains(&::core::any::TypeId::of::<T>())
            }

            /// Checked accessor: `Some` iff the held value is a `T`.
            #[inline]
            pub fn get<T: $crate::core::MemberOf<Self>>(&self) -> ::core::option::Option<T> {
                if self.is_type_of::<T>() {
                    $crate::core::Alternative::from_bits(
                        $crate::core::Underlying::widen(self.raw))
                } else {
                    ::core::option::Option::None
                }
            }

            /// Unchecked accessor: reinterprets storage as a `T` without
            /// consulting the discriminant.
            ///
            /// # Safety
            ///
            /// The storage bits, wrapped to `T`'s underlying width, must be a
            /// declared value of `T`. Guaranteed when `is_type_of::<T>()`
            /// holds; otherwise the caller answers for the bits.
            #[inline]
            pub unsafe fn get_unchecked<T: $crate::core::MemberOf<Self>>(&self) -> T {
                unsafe {
                    $crate::core::Alternative::from_bits_unchecked(
                        $crate::core::Underlying::widen(self.raw))
                }
            }

            /// The held value as the sealed case enum, `None` when undefined.
            #[inline]
            pub fn case(&self) -> ::core::option::Option<$case> {
                $(
                    if self.type_index() == <$alt as $crate::core::MemberOf<Self>>::INDEX {
                        return $crate::core::Alternative::from_bits(
                            $crate::core::Underlying::widen(self.raw))
                            .map($case::$alt);
                    }
                )*
                ::core::option::Option::None
            }
        }

        impl ::core::default::Default for $name {
            #[inline]
            fn default() -> Self {
                Self::undefined()
            }
        }

        $(
            impl ::core::convert::From<$alt> for $name {
                #[inline]
                fn from(value: $alt) -> Self {
                    Self::new(value)
                }
            }
        )*

        impl $crate::core::Variant for $name {
            const ALTERNATIVES: usize = $name::ALTERNATIVES;

            #[inline]
            fn type_index(&self) -> usize {
                $name::type_index(self)
            }

            #[inline]
            fn is_defined(&self) -> bool {
                $name::is_defined(self)
            }

            #[inline]
            fn active(&self) -> ::core::option::Option<$crate::core::ActiveAlt> {
                $(
                    if $name::type_index(self)
                        == <$alt as $crate::core::MemberOf<$name>>::INDEX
                    {
                        return ::core::option::Option::Some(
                            $crate::core::ActiveAlt::of::<$alt>(
                                $crate::core::Underlying::widen(self.raw)));
                    }
                )*
                ::core::option::Option::None
            }
        }

        $crate::__impl_visit!($name, $case; $($alt)*);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __alt_count {
    () => { 0usize };
    ($head:ident $($rest:ident)*) => { 1usize + $crate::__alt_count!($($rest)*) };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __impl_members {
    ($name:ident; $idx:expr;) => {};
    ($name:ident; $idx:expr; $head:ident $($rest:ident)*) => {
        impl $crate::core::MemberOf<$name> for $head {
            const INDEX: usize = $idx;
        }
        $crate::__impl_members!($name; $idx + 1; $($rest)*);
    };
}

// One arm per arity so generic parameters and tuple indices can be spelled
// literally, the same way std writes its tuple trait impls. The trailing arm
// leaves sets beyond 8 alternatives without a Visit impl; `case()` still
// covers them.
#[doc(hidden)]
#[macro_export]
macro_rules! __impl_visit {
    ($name:ident, $case:ident;) => {
        impl $crate::core::Visit<()> for $name {
            #[inline]
            fn visit(&self, _callbacks: ()) -> bool {
                match self.case() {
                    ::core::option::Option::Some(case) => match case {},
                    ::core::option::Option::None => false,
                }
            }
        }
    };
    ($name:ident, $case:ident; $a0:ident) => {
        impl<F0: ::core::ops::FnOnce($a0)> $crate::core::Visit<(F0,)> for $name {
            #[inline]
            fn visit(&self, callbacks: (F0,)) -> bool {
                match self.case() {
                    ::core::option::Option::Some($case::$a0(value)) => {
                        (callbacks.0)(value);
                        true
                    }
                    ::core::option::Option::None => false,
                }
            }
        }
    };
    ($name:ident, $case:ident; $a0:ident $a1:ident) => {
        impl<F0, F1> $crate::core::Visit<(F0, F1)> for $name
        where
            F0: ::core::ops::FnOnce($a0),
            F1: ::core::ops::FnOnce($a1),
        {
            #[inline]
            fn visit(&self, callbacks: (F0, F1)) -> bool {
                match self.case() {
                    ::core::option::Option::Some($case::$a0(value)) => {
                        (callbacks.0)(value);
                        true
                    }
                    ::core::option::Option::Some($case::$a1(value)) => {
                        (callbacks.1)(value);
                        true
                    }
                    ::core::option::Option::None => false,
                }
            }
        }
    };
    ($name:ident, $case:ident; $a0:ident $a1:ident $a2:ident) => {
        impl<F0, F1, F2> $crate::core::Visit<(F0, F1, F2)> for $name
        where
            F0: ::core::ops::FnOnce($a0),
            F1: ::core::ops::FnOnce($a1),
            F2: ::core::ops::FnOnce($a2),
        {
            #[inline]
            fn visit(&self, callbacks: (F0, F1, F2)) -> bool {
                match self.case() {
                    ::core::option::Option::Some($case::$a0(value)) => {
                        (callbacks.0)(value);
                        true
                    }
                    ::core::option::Option::Some($case::$a1(value)) => {
                        (callbacks.1)(value);
                        true
                    }
                    ::core::option::Option::Some($case::$a2(value)) => {
                        (callbacks.2)(value);
                        true
                    }
                    ::core::option::Option::None => false,
                }
            }
        }
    };
    ($name:ident, $case:ident; $a0:ident $a1:ident $a2:ident $a3:ident) => {
        impl<F0, F1, F2, F3> $crate::core::Visit<(F0, F1, F2, F3)> for $name
        where
            F0: ::core::ops::FnOnce($a0),
            F1: ::core::ops::FnOnce($a1),
            F2: ::core::ops::FnOnce($a2),
            F3: ::core::ops::FnOnce($a3),
        {
            #[inline]
            fn visit(&self, callbacks: (F0, F1, F2, F3)) -> bool {
                match self.case() {
                    ::core::option::Option::Some($case::$a0(value)) => {
                        (callbacks.0)(value);
                        true
                    }
                    ::core::option::Option::Some($case::$a1(value)) => {
                        (callbacks.1)(value);
                        true
                    }
                    ::core::option::Option::Some($case::$a2(value)) => {
                        (callbacks.2)(value);
                        true
                    }
                    ::core::option::Option::Some($case::$a3(value)) => {
                        (callbacks.3)(value);
                        true
                    }
                    ::core::option::Option::None => false,
                }
            }
        }
    };
    ($name:ident, $case:ident; $a0:ident $a1:ident $a2:ident $a3:ident $a4:ident) => {
        impl<F0, F1, F2, F3, F4> $crate::core::Visit<(F0, F1, F2, F3, F4)> for $name
        where
            F0: ::core::ops::FnOnce($a0),
            F1: ::core::ops::FnOnce($a1),
            F2: ::core::ops::FnOnce($a2),
            F3: ::core::ops::FnOnce($a3),
            F4: ::core::ops::FnOnce($a4),
        {
            #[inline]
            fn visit(&self, callbacks: (F0, F1, F2, F3, F4)) -> bool {
                match self.case() {
                    ::core::option::Option::Some($case::$a0(value)) => {
                        (callbacks.0)(value);
                        true
                    }
                    ::core::option::Option::Some($case::$a1(value)) => {
                        (callbacks.1)(value);
                        true
                    }
                    ::core::option::Option::Some($case::$a2(value)) => {
                        (callbacks.2)(value);
                        true
                    }
                    ::core::option::Option::Some($case::$a3(value)) => {
                        (callbacks.3)(value);
                        true
                    }
                    ::core::option::Option::Some($case::$a4(value)) => {
                        (callbacks.4)(value);
                        true
                    }
                    ::core::option::Option::None => false,
                }
            }
        }
    };
    ($name:ident, $case:ident;
     $a0:ident $a1:ident $a2:ident $a3:ident $a4:ident $a5:ident) => {
        impl<F0, F1, F2, F3, F4, F5> $crate::core::Visit<(F0, F1, F2, F3, F4, F5)> for $name
        where
            F0: ::core::ops::FnOnce($a0),
            F1: ::core::ops::FnOnce($a1),
            F2: ::core::ops::FnOnce($a2),
            F3: ::core::ops::FnOnce($a3),
            F4: ::core::ops::FnOnce($a4),
            F5: ::core::ops::FnOnce($a5),
        {
            #[inline]
            fn visit(&self, callbacks: (F0, F1, F2, F3, F4, F5)) -> bool {
                match self.case() {
                    ::core::option::Option::Some($case::$a0(value)) => {
                        (callbacks.0)(value);
                        true
                    }
                    ::core::option::Option::Some($case::$a1(value)) => {
                        (callbacks.1)(value);
                        true
                    }
                    ::core::option::Option::Some($case::$a2(value)) => {
                        (callbacks.2)(value);
                        true
                    }
                    ::core::option::Option::Some($case::$a3(value)) => {
                        (callbacks.3)(value);
                        true
                    }
                    ::core::option::Option::Some($case::$a4(value)) => {
                        (callbacks.4)(value);
                        true
                    }
                    ::core::option::Option::Some($case::$a5(value)) => {
                        (callbacks.5)(value);
                        true
                    }
                    ::core::option::Option::None => false,
                }
            }
        }
    };
    ($name:ident, $case:ident;
     $a0:ident $a1:ident $a2:ident $a3:ident $a4:ident $a5:ident $a6:ident) => {
        impl<F0, F1, F2, F3, F4, F5, F6>
            $crate::core::Visit<(F0, F1, F2, F3, F4, F5, F6)> for $name
        where
            F0: ::core::ops::FnOnce($a0),
            F1: ::core::ops::FnOnce($a1),
            F2: ::core::ops::FnOnce($a2),
            F3: ::core::ops::FnOnce($a3),
            F4: ::core::ops::FnOnce($a4),
            F5: ::core::ops::FnOnce($a5),
            F6: ::core::ops::FnOnce($a6),
        {
            #[inline]
            fn visit(&self, callbacks: (F0, F1, F2, F3, F4, F5, F6)) -> bool {
                match self.case() {
                    ::core::option::Option::Some($case::$a0(value)) => {
                        (callbacks.0)(value);
                        true
                    }
                    ::core::option::Option::Some($case::$a1(value)) => {
                        (callbacks.1)(value);
                        true
                    }
                    ::core::option::Option::Some($case::$a2(value)) => {
                        (callbacks.2)(value);
                        true
                    }
                    ::core::option::Option::Some($case::$a3(value)) => {
                        (callbacks.3)(value);
                        true
                    }
                    ::core::option::Option::Some($case::$a4(value)) => {
                        (callbacks.4)(value);
                        true
                    }
                    ::core::option::Option::Some($case::$a5(value)) => {
                        (callbacks.5)(value);
                        true
                    }
                    ::core::option::Option::Some($case::$a6(value)) => {
                        (callbacks.6)(value);
                        true
                    }
                    ::core::option::Option::None => false,
                }
            }
        }
    };
    ($name:ident, $case:ident;
     $a0:ident $a1:ident $a2:ident $a3:ident $a4:ident $a5:ident $a6:ident $a7:ident) => {
        impl<F0, F1, F2, F3, F4, F5, F6, F7>
            $crate::core::Visit<(F0, F1, F2, F3, F4, F5, F6, F7)> for $name
        where
            F0: ::core::ops::FnOnce($a0),
            F1: ::core::ops::FnOnce($a1),
            F2: ::core::ops::FnOnce($a2),
            F3: ::core::ops::FnOnce($a3),
            F4: ::core::ops::FnOnce($a4),
            F5: ::core::ops::FnOnce($a5),
            F6: ::core::ops::FnOnce($a6),
            F7: ::core::ops::FnOnce($a7),
        {
            #[inline]
            fn visit(&self, callbacks: (F0, F1, F2, F3, F4, F5, F6, F7)) -> bool {
                match self.case() {
                    ::core::option::Option::Some($case::$a0(value)) => {
                        (callbacks.0)(value);
                        true
                    }
                    ::core::option::Option::Some($case::$a1(value)) => {
                        (callbacks.1)(value);
                        true
                    }
                    ::core::option::Option::Some($case::$a2(value)) => {
                        (callbacks.2)(value);
                        true
                    }
                    ::core::option::Option::Some($case::$a3(value)) => {
                        (callbacks.3)(value);
                        true
                    }
                    ::core::option::Option::Some($case::$a4(value)) => {
                        (callbacks.4)(value);
                        true
                    }
                    ::core::option::Option::Some($case::$a5(value)) => {
                        (callbacks.5)(value);
                        true
                    }
                    ::core::option::Option::Some($case::$a6(value)) => {
                        (callbacks.6)(value);
                        true
                    }
                    ::core::option::Option::Some($case::$a7(value)) => {
                        (callbacks.7)(value);
                        true
                    }
                    ::core::option::Option::None => false,
                }
            }
        }
    };
    ($name:ident, $case:ident; $($rest:ident)*) => {};
}
