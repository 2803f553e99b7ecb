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

//! Error sets: variants whose alternatives are pairwise distinct error types.
//!
//! Since each error type appears once, errors are constructed and looked up by type, and a set
//! converts losslessly into any superset of it. The [`error_set!`](crate::error_set) macro
//! names a set, rejecting duplicates, and [`merge!`](crate::merge) computes the union of sets.
//!
//! ```
//! # use alternate_core::{ErrorSet, Unit};
//! #[derive(Debug, PartialEq)]
//! struct NotFound;
//! #[derive(Debug, PartialEq)]
//! struct Denied(u16);
//! # impl alternate_core::IAlternative for NotFound {
//! #     const KIND: alternate_core::Kind = alternate_core::Kind::Zst;
//! #     const CAPABILITIES: alternate_core::Capabilities = alternate_core::Capabilities::of::<Self>();
//! #     type FromArgument = alternate_core::kinds::Convert;
//! # }
//! # impl alternate_core::IAlternative for Denied {
//! #     const KIND: alternate_core::Kind = alternate_core::Kind::Value;
//! #     const CAPABILITIES: alternate_core::Capabilities = alternate_core::Capabilities::of::<Self>();
//! #     type FromArgument = alternate_core::kinds::Convert;
//! # }
//! let narrow = ErrorSet::<(Denied,)>::new(Denied(403));
//! let wide: ErrorSet<(NotFound, Denied, Unit)> = narrow.broaden();
//! assert_eq!(wide.find::<Denied, _>(), Some(&Denied(403)));
//! ```

use crate::{
    kinds::IAlternatives,
    storage::{IContains, IRemove, ISubsetOf},
    Variant,
};

/// A [`Variant`] over pairwise distinct error types.
pub struct ErrorSet<L: IAlternatives> {
    inner: Variant<L>,
}

impl<L: IAlternatives> ErrorSet<L> {
    /// Wraps `error`.
    pub fn new<E, I>(error: E) -> Self
    where
        L: IContains<E, I>,
    {
        Self::from_variant(Variant::of(error))
    }
    /// Wraps a variant, whose alternatives must be distinct.
    pub fn from_variant(inner: Variant<L>) -> Self {
        debug_assert!(L::all_distinct(), "an error set's alternatives must be distinct");
        Self { inner }
    }
    pub fn into_variant(self) -> Variant<L> {
        self.inner
    }
    /// Converts into a set that contains all of `L`'s errors, keeping the active one.
    pub fn broaden<Sup: IAlternatives, Is>(self) -> ErrorSet<Sup>
    where
        L: ISubsetOf<Sup, Is>,
    {
        let index = L::inject_index(self.inner.index());
        let inner = Variant::from_storage(L::inject(self.inner.into_storage()));
        debug_assert_eq!(inner.index(), index);
        ErrorSet::from_variant(inner)
    }
    /// Constructs from a subset.
    pub fn from_subset<Sub: ISubsetOf<L, Is>, Is>(subset: ErrorSet<Sub>) -> Self {
        subset.broaden()
    }
    /// Takes `E` out of the set: either the active error is an `E`, or it is one of the rest.
    pub fn narrow<E, I>(self) -> Result<E, ErrorSet<<L as IRemove<I>>::Rest>>
    where
        L: IContains<E, I> + IRemove<I, Removed = E>,
    {
        <L as IRemove<I>>::split(self.inner.into_storage())
            .map_err(|rest| ErrorSet::from_variant(Variant::from_storage(rest)))
    }
}

impl<L: IAlternatives> core::ops::Deref for ErrorSet<L> {
    type Target = Variant<L>;
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
impl<L: IAlternatives> core::ops::DerefMut for ErrorSet<L> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}
impl<L: IAlternatives> From<ErrorSet<L>> for Variant<L> {
    fn from(value: ErrorSet<L>) -> Self {
        value.inner
    }
}

impl<L: IAlternatives> Clone for ErrorSet<L>
where
    Variant<L>: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
    fn clone_from(&mut self, source: &Self) {
        self.inner.clone_from(&source.inner)
    }
}
impl<L: IAlternatives> PartialEq for ErrorSet<L>
where
    Variant<L>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}
impl<L: IAlternatives> Eq for ErrorSet<L> where Variant<L>: Eq {}
impl<L: IAlternatives> core::hash::Hash for ErrorSet<L>
where
    Variant<L>: core::hash::Hash,
{
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.inner.hash(state)
    }
}
impl<L: IAlternatives> core::fmt::Debug for ErrorSet<L>
where
    L::Storage: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("ErrorSet").field(self.inner.storage()).finish()
    }
}
/// Displays the active error.
impl<L: IAlternatives> core::fmt::Display for ErrorSet<L>
where
    L::Storage: core::fmt::Display,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(self.inner.storage(), f)
    }
}
#[cfg(feature = "std")]
impl<L: IAlternatives> std::error::Error for ErrorSet<L> where
    L::Storage: core::fmt::Debug + core::fmt::Display
{
}
