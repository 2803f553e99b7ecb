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

//! An option built on [`Variant`]: [`Unit`] at index 0 is absence, `T` at index 1 is presence.

use crate::{errors::BadAccess, kinds::IAlternative, Unit, Variant};

/// Either nothing, or a `T`.
///
/// `Option<&T>` is pointer-sized, `Option<Unit>` is a one-byte flag.
/// `None()` compares less than any `Some(_)`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Option<T: IAlternative> {
    inner: Variant<(Unit, T)>,
}
impl<T: IAlternative + Clone> Clone for Option<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
    fn clone_from(&mut self, source: &Self) {
        self.inner.clone_from(&source.inner)
    }
}
impl<T: IAlternative + core::fmt::Debug> core::fmt::Debug for Option<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.inner.get_if::<1>() {
            Some(value) => f.debug_tuple("Some").field(value).finish(),
            None => f.write_str("None"),
        }
    }
}
impl<T: IAlternative> Default for Option<T> {
    fn default() -> Self {
        Self::None()
    }
}
impl<T: IAlternative> From<core::option::Option<T>> for Option<T> {
    fn from(value: core::option::Option<T>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::None(),
        }
    }
}
impl<T: IAlternative> From<Option<T>> for core::option::Option<T> {
    fn from(value: Option<T>) -> Self {
        value.match_owned(Some, || None)
    }
}
impl<T: IAlternative> From<Variant<(Unit, T)>> for Option<T> {
    fn from(inner: Variant<(Unit, T)>) -> Self {
        Self { inner }
    }
}

impl<T: IAlternative> Option<T> {
    /// Construct the `Some` variant.
    #[allow(non_snake_case)]
    pub fn Some(value: T) -> Self {
        Self {
            inner: Variant::in_place::<1>(value),
        }
    }
    /// Construct the `None` variant.
    #[allow(non_snake_case)]
    pub fn None() -> Self {
        Self {
            inner: Variant::in_place::<0>(Unit),
        }
    }
    pub fn is_some(&self) -> bool {
        self.inner.index() == 1
    }
    pub fn is_none(&self) -> bool {
        !self.is_some()
    }
    pub fn as_variant(&self) -> &Variant<(Unit, T)> {
        &self.inner
    }
    pub fn into_variant(self) -> Variant<(Unit, T)> {
        self.inner
    }

    /// Equivalent to `match &self`. If you need multiple branches to obtain mutable access or ownership
    /// of a local, use [`Self::match_ref_ctx`] instead.
    pub fn match_ref<'a, U, FnSome: FnOnce(&'a T) -> U, FnNone: FnOnce() -> U>(
        &'a self,
        some: FnSome,
        none: FnNone,
    ) -> U {
        self.inner.match_ref(|_| none(), some)
    }
    /// Equivalent to `match &self`.
    pub fn match_ref_ctx<'a, I, U, FnSome: FnOnce(I, &'a T) -> U, FnNone: FnOnce(I) -> U>(
        &'a self,
        ctx: I,
        some: FnSome,
        none: FnNone,
    ) -> U {
        match self.inner.get_if::<1>() {
            Some(value) => some(ctx, value),
            None => none(ctx),
        }
    }
    /// Equivalent to `match &mut self`.
    pub fn match_mut<'a, U, FnSome: FnOnce(&'a mut T) -> U, FnNone: FnOnce() -> U>(
        &'a mut self,
        some: FnSome,
        none: FnNone,
    ) -> U {
        self.inner.match_mut(|_| none(), some)
    }
    /// Equivalent to `match &mut self`.
    pub fn match_mut_ctx<'a, I, U, FnSome: FnOnce(I, &'a mut T) -> U, FnNone: FnOnce(I) -> U>(
        &'a mut self,
        ctx: I,
        some: FnSome,
        none: FnNone,
    ) -> U {
        match self.inner.get_if_mut::<1>() {
            Some(value) => some(ctx, value),
            None => none(ctx),
        }
    }
    /// Equivalent to `match self`.
    pub fn match_owned<U, FnSome: FnOnce(T) -> U, FnNone: FnOnce() -> U>(
        self,
        some: FnSome,
        none: FnNone,
    ) -> U {
        self.inner.match_owned(|_| none(), some)
    }
    /// Equivalent to `match self`.
    pub fn match_owned_ctx<I, U, FnSome: FnOnce(I, T) -> U, FnNone: FnOnce(I) -> U>(
        self,
        ctx: I,
        some: FnSome,
        none: FnNone,
    ) -> U {
        match self.inner.into_alternative::<1>() {
            Ok(value) => some(ctx, value),
            Err(_) => none(ctx),
        }
    }

    /// Returns a reference to the option's contents if they exist.
    pub fn as_ref(&self) -> Option<&T> {
        self.match_ref(Option::Some, Option::None)
    }
    /// Returns a mutable reference to the option's contents if they exist.
    pub fn as_mut(&mut self) -> Option<&mut T> {
        self.match_mut(Option::Some, Option::None)
    }
    /// The held value, or [`BadAccess`] if there is none.
    pub fn value(&self) -> Result<&T, BadAccess> {
        self.inner.get_if::<1>().ok_or(BadAccess::EMPTY)
    }
    pub fn value_mut(&mut self) -> Result<&mut T, BadAccess> {
        self.inner.get_if_mut::<1>().ok_or(BadAccess::EMPTY)
    }
    pub fn value_or(self, default: T) -> T {
        self.match_owned(|x| x, || default)
    }
    /// The held value, or `T`'s default.
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        self.match_owned(|x| x, T::default)
    }
    /// Unwraps the option, or runs `f` if no value was in it.
    pub fn unwrap_or_else<F: FnOnce() -> T>(self, f: F) -> T {
        self.match_owned(|x| x, f)
    }
    /// # Safety
    /// Calling this on `Self::None()` is UB.
    pub unsafe fn unwrap_unchecked(self) -> T {
        self.unwrap_or_else(|| unsafe { unreachable_unchecked!() })
    }
    /// # Panics
    /// If `!self.is_some`
    pub fn unwrap(self) -> T {
        self.unwrap_or_else(|| panic!("Option::unwrap called on None"))
    }
    /// # Panics
    /// With `message` if `!self.is_some`
    pub fn expect(self, message: &str) -> T {
        self.unwrap_or_else(|| panic!("{message}"))
    }

    /// Feeds the value to `f`, if there is one.
    pub fn and_then<U: IAlternative, F: FnOnce(T) -> Option<U>>(self, f: F) -> Option<U> {
        self.match_owned(f, Option::None)
    }
    /// Maps the value through `f`, if there is one.
    pub fn transform<U: IAlternative, F: FnOnce(T) -> U>(self, f: F) -> Option<U> {
        self.match_owned(|x| Option::Some(f(x)), Option::None)
    }
    /// Returns `self` if it holds a value, `f()` otherwise.
    pub fn or_else<F: FnOnce() -> Self>(self, f: F) -> Self {
        if self.is_some() {
            self
        } else {
            f()
        }
    }
    pub fn ok_or<E: IAlternative>(self, error: E) -> crate::Result<T, E> {
        self.match_owned(crate::Result::Ok, || crate::Result::Err(error))
    }
    pub fn ok_or_else<E: IAlternative, F: FnOnce() -> E>(self, f: F) -> crate::Result<T, E> {
        self.match_owned(crate::Result::Ok, || crate::Result::Err(f()))
    }
    /// Keeps the value only if `predicate` accepts it.
    pub fn filter<P: FnOnce(&T) -> bool>(self, predicate: P) -> Self {
        self.and_then(|x| if predicate(&x) { Self::Some(x) } else { Self::None() })
    }
    pub fn or(self, other: Self) -> Self {
        self.or_else(|| other)
    }
    pub fn and<U: IAlternative>(self, other: Option<U>) -> Option<U> {
        self.and_then(|_| other)
    }
    /// `Some` if exactly one of `self` and `other` is.
    pub fn xor(self, other: Self) -> Self {
        let pair: (core::option::Option<T>, core::option::Option<T>) = (self.into(), other.into());
        match pair {
            (Some(value), None) | (None, Some(value)) => Self::Some(value),
            _ => Self::None(),
        }
    }
    pub fn zip<U: IAlternative>(self, other: Option<U>) -> Option<(T, U)> {
        self.and_then(|x| other.transform(|y| (x, y)))
    }

    /// Moves the value out, leaving `None()` in its place.
    pub fn take(&mut self) -> Self {
        core::mem::replace(self, Self::None())
    }
    /// Puts `value` in, returning the previous state.
    pub fn replace(&mut self, value: T) -> Self {
        core::mem::replace(self, Self::Some(value))
    }
    /// Puts `value` in, dropping the previous one if any.
    pub fn insert(&mut self, value: T) -> &mut T {
        self.inner.emplace::<1>(value)
    }
    pub fn get_or_insert_with<F: FnOnce() -> T>(&mut self, f: F) -> &mut T {
        if self.is_none() {
            self.inner.emplace::<1>(f());
        }
        match self.inner.get_if_mut::<1>() {
            Some(value) => value,
            None => unsafe { unreachable_unchecked!() },
        }
    }
}

impl<T: IAlternative> Option<&T> {
    pub fn cloned(self) -> Option<T>
    where
        T: Clone,
    {
        self.transform(T::clone)
    }
}

impl Option<Unit> {
    /// An option of nothing is a boolean flag.
    pub fn from_flag(flag: bool) -> Self {
        if flag {
            Self::Some(Unit)
        } else {
            Self::None()
        }
    }
    pub fn flag(&self) -> bool {
        self.is_some()
    }
}
