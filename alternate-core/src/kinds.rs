//
// Copyright (c) 2023 ZettaScale Technology
//
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// http://www.eclipse.org/legal/epl-2.0, or the Apache License, Version 2.0
// which is available at https://www.apache.org/licenses/LICENSE-2.0.
//
// SPDX-License-Identifier: EPL-2.0 OR Apache-2.0
//
// Contributors:
//   Pierre Avital, <pierre.avital@me.com>
//

//! Alternative kinds, their capabilities, and the lists of alternatives a [`Variant`](crate::Variant) is made of.

use crate::storage::IStorage;

/// How an alternative is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// An ordinary value, stored inline.
    Value,
    /// A borrow (`&T` or `&mut T`), stored as the reference itself.
    LvalueReference,
    /// [`Unit`](crate::Unit): occupies no storage, discards any constructor argument.
    Unit,
    /// A zero-sized value.
    Zst,
}
impl Kind {
    /// [`Kind::Zst`] if `T` is zero-sized, [`Kind::Value`] otherwise.
    pub const fn of_value<T>() -> Self {
        if core::mem::size_of::<T>() == 0 {
            Kind::Zst
        } else {
            Kind::Value
        }
    }
    /// Whether alternatives of this kind occupy no storage.
    pub const fn is_empty(self) -> bool {
        matches!(self, Kind::Unit | Kind::Zst)
    }
}

/// The set of operations an alternative (or a list of them) supports, and which of those never panic.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capabilities(u16);

macro_rules! flags {
    ($($(#[$attr: meta])* $name: ident = $bit: expr;)*) => {
        impl Capabilities {
            $($(#[$attr])* pub const $name: Self = Self(1 << $bit);)*
            const NAMES: &'static [(Self, &'static str)] = &[$((Self::$name, stringify!($name))),*];
        }
    };
}
flags! {
    /// `Default`
    DEFAULT = 0;
    NOTHROW_DEFAULT = 1;
    /// `Clone`
    COPY = 2;
    NOTHROW_COPY = 3;
    /// Moving out. Always available in Rust.
    MOVE = 4;
    NOTHROW_MOVE = 5;
    DESTROY = 6;
    /// Set for types without drop glue.
    NOTHROW_DESTROY = 7;
    /// `Clone::clone_from`
    COPY_ASSIGN = 8;
    NOTHROW_COPY_ASSIGN = 9;
    /// Assigning by move, which drops the previous value.
    MOVE_ASSIGN = 10;
    NOTHROW_MOVE_ASSIGN = 11;
    SWAP = 12;
    NOTHROW_SWAP = 13;
}

impl Capabilities {
    pub const NONE: Self = Self(0);
    pub const ALL: Self = Self((1 << 14) - 1);
    const DEFAULTS: Self = Self::DEFAULT.union(Self::NOTHROW_DEFAULT);
    const COPIES: Self = Self::COPY
        .union(Self::NOTHROW_COPY)
        .union(Self::COPY_ASSIGN)
        .union(Self::NOTHROW_COPY_ASSIGN);

    /// What any `T` supports: moving, swapping and destroying, which only panic if `T`'s drop glue does.
    pub const fn of<T>() -> Self {
        let trivial_drop = !core::mem::needs_drop::<T>();
        Self::MOVE
            .union(Self::NOTHROW_MOVE)
            .union(Self::SWAP)
            .union(Self::NOTHROW_SWAP)
            .union(Self::DESTROY)
            .union(Self::MOVE_ASSIGN)
            .with_if(
                Self::NOTHROW_DESTROY.union(Self::NOTHROW_MOVE_ASSIGN),
                trivial_drop,
            )
    }
    /// Everything, without panics: primitives, references to shared data, and such.
    pub const fn trivial() -> Self {
        Self::ALL
    }
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }
    pub const fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }
    /// Whether every flag of `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
    pub const fn with_if(self, other: Self, condition: bool) -> Self {
        if condition {
            self.union(other)
        } else {
            self
        }
    }
    /// Adds default-constructibility. `Default::default` is assumed to be able to panic.
    pub const fn with_default(self, default: bool) -> Self {
        self.with_if(Self::DEFAULT, default)
    }
    /// Adds copy construction and assignment, which cannot panic if the type is `Copy`.
    pub const fn with_clone(self, clone: bool, copy: bool) -> Self {
        self.with_if(Self::COPY.union(Self::COPY_ASSIGN), clone || copy)
            .with_if(Self::COPIES, copy)
    }
    /// Only keeps the default-constructibility flags.
    pub const fn defaults(self) -> Self {
        self.intersection(Self::DEFAULTS)
    }
    /// The capabilities of a variant over alternatives whose capabilities are `self` and `other`,
    /// where `self` describes the first alternative.
    pub const fn and_then(self, other: Self) -> Self {
        self.intersection(other)
            .without(Self::DEFAULTS)
            .union(self.defaults())
    }

    pub const fn is_default_constructible(self) -> bool {
        self.contains(Self::DEFAULT)
    }
    pub const fn is_copy_constructible(self) -> bool {
        self.contains(Self::COPY)
    }
    pub const fn is_move_constructible(self) -> bool {
        self.contains(Self::MOVE)
    }
    pub const fn is_destructible(self) -> bool {
        self.contains(Self::DESTROY)
    }
    pub const fn is_copy_assignable(self) -> bool {
        self.contains(Self::COPY_ASSIGN)
    }
    pub const fn is_move_assignable(self) -> bool {
        self.contains(Self::MOVE_ASSIGN)
    }
    pub const fn is_swappable(self) -> bool {
        self.contains(Self::SWAP)
    }
    pub const fn is_nothrow_default_constructible(self) -> bool {
        self.contains(Self::NOTHROW_DEFAULT)
    }
    pub const fn is_nothrow_copy_constructible(self) -> bool {
        self.contains(Self::NOTHROW_COPY)
    }
    pub const fn is_nothrow_move_constructible(self) -> bool {
        self.contains(Self::NOTHROW_MOVE)
    }
    pub const fn is_nothrow_destructible(self) -> bool {
        self.contains(Self::NOTHROW_DESTROY)
    }
    pub const fn is_nothrow_copy_assignable(self) -> bool {
        self.contains(Self::NOTHROW_COPY_ASSIGN)
    }
    pub const fn is_nothrow_move_assignable(self) -> bool {
        self.contains(Self::NOTHROW_MOVE_ASSIGN)
    }
    pub const fn is_nothrow_swappable(self) -> bool {
        self.contains(Self::NOTHROW_SWAP)
    }
}
impl core::fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set()
            .entries(
                Self::NAMES
                    .iter()
                    .filter(|(flag, _)| self.contains(*flag))
                    .map(|(_, name)| name),
            )
            .finish()
    }
}

/// A type that may be held by a [`Variant`](crate::Variant).
///
/// Use `#[derive(Alternative)]` to implement it for your own types.
pub trait IAlternative {
    const KIND: Kind;
    const CAPABILITIES: Capabilities;
    /// How a one-argument pack `(x,)` constructs this alternative: [`Convert`] calls
    /// `x.into()`, [`Discard`] drops `x` and default-constructs instead.
    type FromArgument;
}

/// A list of alternatives, written as a tuple: `(A, B, C)`.
///
/// Implemented for tuples of up to 12 [`IAlternative`]s.
pub trait IAlternatives {
    /// The discriminated storage for a value of one of the alternatives.
    type Storage: IStorage;
    const COUNT: usize;
    const KINDS: &'static [Kind];
    /// The capabilities of a variant over this list: the intersection of all alternatives'
    /// capabilities, except for default-construction which only depends on the first one.
    const CAPABILITIES: Capabilities;
    fn type_name_at(index: usize) -> Option<&'static str>;
    fn type_id_at(index: usize) -> Option<core::any::TypeId>
    where
        Self: 'static;
    /// Whether no type appears twice in the list.
    fn all_distinct() -> bool {
        (0..Self::COUNT).all(|i| {
            (i + 1..Self::COUNT).all(|j| Self::type_name_at(i) != Self::type_name_at(j))
        })
    }
}

#[doc(hidden)]
pub mod probe {
    //! Detects `Default`, `Clone` and `Copy` on concrete types: the inherent constant is only
    //! visible when its bound holds, otherwise the trait's `false` is picked instead.
    use core::marker::PhantomData;
    pub struct Probe<T: ?Sized>(PhantomData<T>);
    pub trait NotDefault {
        const IS_DEFAULT: bool = false;
    }
    pub trait NotClone {
        const IS_CLONE: bool = false;
    }
    pub trait NotCopy {
        const IS_COPY: bool = false;
    }
    impl<T: ?Sized> NotDefault for Probe<T> {}
    impl<T: ?Sized> NotClone for Probe<T> {}
    impl<T: ?Sized> NotCopy for Probe<T> {}
    impl<T: Default> Probe<T> {
        pub const IS_DEFAULT: bool = true;
    }
    impl<T: Clone> Probe<T> {
        pub const IS_CLONE: bool = true;
    }
    impl<T: Copy> Probe<T> {
        pub const IS_COPY: bool = true;
    }
}

/// The [`Capabilities`] of a concrete (non-generic) type.
#[macro_export]
macro_rules! capabilities {
    ($t: ty) => {{
        #[allow(unused_imports)]
        use $crate::kinds::probe::{NotClone as _, NotCopy as _, NotDefault as _};
        $crate::kinds::Capabilities::of::<$t>()
            .with_default(<$crate::kinds::probe::Probe<$t>>::IS_DEFAULT)
            .with_clone(
                <$crate::kinds::probe::Probe<$t>>::IS_CLONE,
                <$crate::kinds::probe::Probe<$t>>::IS_COPY,
            )
    }};
}

/// Builds a value from an argument pack.
///
/// `()` stands for default construction, `(x,)` for construction from `x` as described by
/// [`IAlternative::FromArgument`].
pub trait IConstruct<Args>: Sized {
    fn construct(args: Args) -> Self;
}
impl<T: Default> IConstruct<()> for T {
    fn construct(_: ()) -> Self {
        T::default()
    }
}
impl<T: IAlternative, U> IConstruct<(U,)> for T
where
    T::FromArgument: IFromArgument<T, U>,
{
    fn construct((value,): (U,)) -> Self {
        <T::FromArgument as IFromArgument<T, U>>::from_argument(value)
    }
}

/// Construction of `T` from a single argument of type `U`.
pub trait IFromArgument<T, U> {
    fn from_argument(value: U) -> T;
}
/// Builds alternatives through [`Into`].
pub struct Convert;
impl<T, U: Into<T>> IFromArgument<T, U> for Convert {
    fn from_argument(value: U) -> T {
        value.into()
    }
}
/// Accepts any argument and ignores it, as [`Unit`](crate::Unit) does.
pub struct Discard;
impl<T: Default, U> IFromArgument<T, U> for Discard {
    fn from_argument(_: U) -> T {
        T::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Cloneable(std::string::String);
    impl IAlternative for Cloneable {
        const KIND: Kind = Kind::Value;
        const CAPABILITIES: Capabilities = crate::capabilities!(Cloneable);
        type FromArgument = Convert;
    }
    struct Opaque(#[allow(dead_code)] u8);

    #[test]
    fn probing() {
        let caps = crate::capabilities!(Cloneable);
        assert!(caps.is_copy_constructible());
        assert!(!caps.is_nothrow_copy_constructible());
        assert!(!caps.is_default_constructible());
        assert!(!caps.is_nothrow_destructible());
        let caps = crate::capabilities!(Opaque);
        assert!(!caps.is_copy_constructible());
        assert!(caps.is_nothrow_destructible());
        assert!(caps.is_nothrow_move_assignable());
        let caps = crate::capabilities!(u32);
        assert!(caps.is_default_constructible());
        assert!(caps.is_nothrow_copy_assignable());
    }

    #[test]
    fn argument_packs() {
        use crate::Unit;
        assert_eq!(<Unit as IConstruct<(u32,)>>::construct((5,)), Unit);
        assert_eq!(<Unit as IConstruct<(&str,)>>::construct(("ignored",)), Unit);
        assert_eq!(<Unit as IConstruct<()>>::construct(()), Unit);
        let counter = std::rc::Rc::new(());
        <Unit as IConstruct<_>>::construct((counter.clone(),));
        assert_eq!(std::rc::Rc::strong_count(&counter), 1);
        assert_eq!(<u64 as IConstruct<(u8,)>>::construct((3,)), 3);
        assert_eq!(<u64 as IConstruct<()>>::construct(()), 0);
    }

    #[test]
    fn lists() {
        type L = (u8, Cloneable, crate::Unit);
        assert_eq!(<L as IAlternatives>::COUNT, 3);
        assert_eq!(
            <L as IAlternatives>::KINDS,
            &[Kind::Value, Kind::Value, Kind::Unit]
        );
        // default-constructible through `u8` alone
        assert!(<L as IAlternatives>::CAPABILITIES.is_default_constructible());
        assert!(<L as IAlternatives>::CAPABILITIES.is_copy_constructible());
        assert!(!<L as IAlternatives>::CAPABILITIES.is_nothrow_copy_constructible());
        assert!(<L as IAlternatives>::CAPABILITIES.is_swappable());
        assert!(<L as IAlternatives>::all_distinct());
        assert!(!<(u8, u16, u8) as IAlternatives>::all_distinct());
        assert_eq!(<L as IAlternatives>::type_name_at(0), Some("u8"));
        assert_eq!(<L as IAlternatives>::type_name_at(3), None);
    }

    #[test]
    fn construction() {
        assert_eq!(<u64 as IConstruct<()>>::construct(()), 0);
        assert_eq!(<u64 as IConstruct<(u8,)>>::construct((3u8,)), 3);
        assert_eq!(std::format!("{:?}", Capabilities::DEFAULT.union(Capabilities::SWAP)), "{\"DEFAULT\", \"SWAP\"}");
    }
}
