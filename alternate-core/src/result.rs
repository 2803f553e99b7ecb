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

//! Results built on [`Variant`]: the value at index 0, the error at index 1.

use crate::{
    error_set::ErrorSet,
    errors::BadAccess,
    kinds::{IAlternative, IAlternatives},
    storage::ISubsetOf,
    Unit, Variant,
};

/// A value of type `Ok`, or an error of type `Err`. Either side may be [`Unit`].
///
/// Values compare less than errors.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Result<Ok: IAlternative, Err: IAlternative> {
    inner: Variant<(Ok, Err)>,
}

impl<Ok: IAlternative + Clone, Err: IAlternative + Clone> Clone for Result<Ok, Err> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
    fn clone_from(&mut self, source: &Self) {
        self.inner.clone_from(&source.inner)
    }
}
impl<Ok, Err> core::fmt::Debug for Result<Ok, Err>
where
    Ok: IAlternative + core::fmt::Debug,
    Err: IAlternative + core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match (self.inner.get_if::<0>(), self.inner.get_if::<1>()) {
            (Some(value), _) => f.debug_tuple("Ok").field(value).finish(),
            (_, Some(error)) => f.debug_tuple("Err").field(error).finish(),
            (None, None) => unsafe { unreachable_unchecked!() },
        }
    }
}
impl<Ok: IAlternative, Err: IAlternative> From<core::result::Result<Ok, Err>> for Result<Ok, Err> {
    fn from(value: core::result::Result<Ok, Err>) -> Self {
        match value {
            Ok(value) => Self::Ok(value),
            Err(value) => Self::Err(value),
        }
    }
}
impl<Ok: IAlternative, Err: IAlternative> From<Result<Ok, Err>> for core::result::Result<Ok, Err> {
    fn from(value: Result<Ok, Err>) -> Self {
        value.match_owned(Ok, Err)
    }
}
impl<Ok: IAlternative, Err: IAlternative> From<Variant<(Ok, Err)>> for Result<Ok, Err> {
    fn from(inner: Variant<(Ok, Err)>) -> Self {
        Self { inner }
    }
}

impl<Ok: IAlternative, Err: IAlternative> Result<Ok, Err> {
    /// Construct the `Ok` variant.
    #[allow(non_snake_case)]
    pub fn Ok(value: Ok) -> Self {
        Self {
            inner: Variant::in_place::<0>(value),
        }
    }
    /// Construct the `Err` variant.
    #[allow(non_snake_case)]
    pub fn Err(error: Err) -> Self {
        Self {
            inner: Variant::in_place::<1>(error),
        }
    }
    pub fn is_ok(&self) -> bool {
        self.inner.index() == 0
    }
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }
    pub fn as_variant(&self) -> &Variant<(Ok, Err)> {
        &self.inner
    }
    pub fn into_variant(self) -> Variant<(Ok, Err)> {
        self.inner
    }

    /// Equivalent to `match &self`. If you need multiple branches to obtain mutable access or ownership
    /// of a local, use [`Self::match_ref_ctx`] instead.
    pub fn match_ref<'a, U, FnOk: FnOnce(&'a Ok) -> U, FnErr: FnOnce(&'a Err) -> U>(
        &'a self,
        ok: FnOk,
        err: FnErr,
    ) -> U {
        self.inner.match_ref(ok, err)
    }
    /// Equivalent to `match &self`.
    pub fn match_ref_ctx<'a, I, U, FnOk: FnOnce(I, &'a Ok) -> U, FnErr: FnOnce(I, &'a Err) -> U>(
        &'a self,
        ctx: I,
        ok: FnOk,
        err: FnErr,
    ) -> U {
        match self.inner.get_if::<0>() {
            Some(value) => ok(ctx, value),
            None => match self.inner.get_if::<1>() {
                Some(error) => err(ctx, error),
                None => unsafe { unreachable_unchecked!() },
            },
        }
    }
    /// Equivalent to `match &mut self`.
    pub fn match_mut<'a, U, FnOk: FnOnce(&'a mut Ok) -> U, FnErr: FnOnce(&'a mut Err) -> U>(
        &'a mut self,
        ok: FnOk,
        err: FnErr,
    ) -> U {
        self.inner.match_mut(ok, err)
    }
    /// Equivalent to `match self`. If you need multiple branches to obtain mutable access or ownership
    /// of a local, use [`Self::match_owned_ctx`] instead.
    pub fn match_owned<U, FnOk: FnOnce(Ok) -> U, FnErr: FnOnce(Err) -> U>(
        self,
        ok: FnOk,
        err: FnErr,
    ) -> U {
        self.inner.match_owned(ok, err)
    }
    /// Equivalent to `match self`.
    pub fn match_owned_ctx<I, U, FnOk: FnOnce(I, Ok) -> U, FnErr: FnOnce(I, Err) -> U>(
        self,
        ctx: I,
        ok: FnOk,
        err: FnErr,
    ) -> U {
        match self.inner.into_alternative::<0>() {
            Ok(value) => ok(ctx, value),
            Err(inner) => match inner.into_alternative::<1>() {
                Ok(error) => err(ctx, error),
                Err(_) => unsafe { unreachable_unchecked!() },
            },
        }
    }

    /// Borrows both sides.
    pub fn as_ref(&self) -> Result<&Ok, &Err> {
        self.match_ref(Result::Ok, Result::Err)
    }
    pub fn as_mut(&mut self) -> Result<&mut Ok, &mut Err> {
        self.match_mut(Result::Ok, Result::Err)
    }
    /// The value, or [`BadAccess`] with a copy of the error.
    pub fn value(&self) -> core::result::Result<&Ok, BadAccess<Err>>
    where
        Err: Clone,
    {
        self.match_ref(Ok, |error| Err(BadAccess::new(error.clone())))
    }
    pub fn value_mut(&mut self) -> core::result::Result<&mut Ok, BadAccess<Err>>
    where
        Err: Clone,
    {
        self.match_mut(Ok, |error| Err(BadAccess::new(error.clone())))
    }
    /// The value, or [`BadAccess`] with the error.
    pub fn into_value(self) -> core::result::Result<Ok, BadAccess<Err>> {
        self.match_owned(Ok, |error| Err(BadAccess::new(error)))
    }
    /// The error, or [`BadAccess`] if there is a value.
    pub fn error(&self) -> core::result::Result<&Err, BadAccess> {
        self.inner.get_if::<1>().ok_or(BadAccess::EMPTY)
    }
    pub fn error_mut(&mut self) -> core::result::Result<&mut Err, BadAccess> {
        self.inner.get_if_mut::<1>().ok_or(BadAccess::EMPTY)
    }
    pub fn into_error(self) -> core::result::Result<Err, BadAccess> {
        self.match_owned(|_| Err(BadAccess::EMPTY), Ok)
    }
    pub fn value_or(self, default: Ok) -> Ok {
        self.match_owned(|x| x, |_| default)
    }
    pub fn value_or_default(self) -> Ok
    where
        Ok: Default,
    {
        self.match_owned(|x| x, |_| <Ok as Default>::default())
    }
    /// Unwraps the result, or runs `f` on the error.
    pub fn unwrap_or_else<F: FnOnce(Err) -> Ok>(self, f: F) -> Ok {
        self.match_owned(|x| x, f)
    }
    /// # Safety
    /// Calling this on `Self::Err(_)` is UB.
    pub unsafe fn unwrap_unchecked(self) -> Ok {
        self.unwrap_or_else(|_| unsafe { unreachable_unchecked!() })
    }
    /// # Panics
    /// If `!self.is_ok()`
    pub fn unwrap(self) -> Ok
    where
        Err: core::fmt::Debug,
    {
        self.unwrap_or_else(|e| panic!("Result::unwrap called on Err variant: {e:?}"))
    }
    /// # Panics
    /// With `message` if `!self.is_ok()`
    pub fn expect(self, message: &str) -> Ok
    where
        Err: core::fmt::Debug,
    {
        self.unwrap_or_else(|e| panic!("{message}: {e:?}"))
    }
    /// # Panics
    /// If `!self.is_err()`
    pub fn unwrap_err(self) -> Err
    where
        Ok: core::fmt::Debug,
    {
        self.match_owned(
            |x| panic!("Result::unwrap_err called on Ok variant: {x:?}"),
            |e| e,
        )
    }

    /// Feeds the value to `f`, passing errors through.
    pub fn and_then<U: IAlternative, F: FnOnce(Ok) -> Result<U, Err>>(self, f: F) -> Result<U, Err> {
        self.match_owned(f, Result::Err)
    }
    /// Maps the value through `f`, passing errors through.
    pub fn transform<U: IAlternative, F: FnOnce(Ok) -> U>(self, f: F) -> Result<U, Err> {
        self.match_owned(|x| Result::Ok(f(x)), Result::Err)
    }
    /// Feeds the error to `f`, passing values through.
    pub fn or_else<E: IAlternative, F: FnOnce(Err) -> Result<Ok, E>>(self, f: F) -> Result<Ok, E> {
        self.match_owned(Result::Ok, f)
    }
    /// Maps the error through `f`, passing values through.
    pub fn transform_error<E: IAlternative, F: FnOnce(Err) -> E>(self, f: F) -> Result<Ok, E> {
        self.match_owned(Result::Ok, |e| Result::Err(f(e)))
    }
    pub fn or_none(self) -> crate::Option<Ok> {
        self.match_owned(crate::Option::Some, |_| crate::Option::None())
    }
    pub fn error_or_none(self) -> crate::Option<Err> {
        self.match_owned(|_| crate::Option::None(), crate::Option::Some)
    }

    /// Converting construction: both sides are converted with `Into`.
    pub fn from_other<U: IAlternative + Into<Ok>, V: IAlternative + Into<Err>>(
        other: Result<U, V>,
    ) -> Self {
        other.convert()
    }
    pub fn convert<U: IAlternative, V: IAlternative>(self) -> Result<U, V>
    where
        Ok: Into<U>,
        Err: Into<V>,
    {
        self.match_owned(|x| Result::Ok(x.into()), |e| Result::Err(e.into()))
    }
}

impl<Ok: IAlternative, L: IAlternatives> Result<Ok, ErrorSet<L>> {
    /// Injects the error into a larger error set.
    pub fn broaden_err<Sup: IAlternatives, Is>(self) -> Result<Ok, ErrorSet<Sup>>
    where
        L: ISubsetOf<Sup, Is>,
    {
        self.transform_error(|e| e.broaden::<Sup, Is>())
    }
}

impl<Err: IAlternative> Result<Unit, Err> {
    /// The success of an operation that produces no value.
    pub fn success() -> Self {
        Self::Ok(Unit)
    }
}
