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

//! The N-ary tagged union.
//!
//! # Replacing the active alternative
//! Every operation that replaces the active alternative (`emplace*`, `assign`, `clone_from`,
//! cross-index `swap`) first produces the new value and installs it, then runs the previous
//! alternative's destructor. Installation cannot fail, so a `Variant` is never left without
//! an alternative, even if that destructor panics: there is no valueless state to observe.
//!
//! Variants have no destructor of their own. Dropping one drops its storage enum, which drops
//! the live alternative only, so a variant of references is as permissive as a `&T`.

use crate::{
    errors::{AlternativeConstructionFailure, BadAlternative},
    kinds::{IAlternatives, IConstruct, Kind},
    storage::{IAt, ICloneAssign, IContains, IStorage},
    visit::{IVisitMut, IVisitOwned, IVisitRef},
};

/// Exactly one of the alternatives listed in `L`, which is written as a tuple.
///
/// ```
/// # use alternate_core::Variant;
/// let mut v = Variant::<(u32, &str)>::of("hi");
/// assert_eq!(v.index(), 1);
/// v.emplace::<0>(4);
/// assert_eq!(v.get::<0>(), Ok(&4));
/// ```
pub struct Variant<L: IAlternatives> {
    storage: L::Storage,
}

impl<L: IAlternatives> Variant<L> {
    /// Constructs the `I`th alternative.
    pub fn in_place<const I: usize>(value: <L as IAt<I>>::Item) -> Self
    where
        L: IAt<I>,
    {
        Self {
            storage: <L as IAt<I>>::construct(value),
        }
    }
    /// Constructs the `I`th alternative from an argument pack: `()` for its default, `(x,)` to convert `x`.
    pub fn in_place_from<const I: usize, Args>(args: Args) -> Self
    where
        L: IAt<I>,
        <L as IAt<I>>::Item: IConstruct<Args>,
    {
        Self::in_place::<I>(IConstruct::construct(args))
    }
    /// Constructs the alternative of type `T`.
    ///
    /// Only compiles if `T` appears exactly once in `L`.
    pub fn of<T, I>(value: T) -> Self
    where
        L: IContains<T, I>,
    {
        Self {
            storage: <L as IContains<T, I>>::construct(value),
        }
    }
    pub(crate) const fn from_storage(storage: L::Storage) -> Self {
        Self { storage }
    }
    pub(crate) fn storage(&self) -> &L::Storage {
        &self.storage
    }
    pub(crate) fn storage_mut(&mut self) -> &mut L::Storage {
        &mut self.storage
    }
    pub(crate) fn into_storage(self) -> L::Storage {
        self.storage
    }
    /// Puts `next` in place of the active alternative, then destroys the previous one.
    fn install(&mut self, next: L::Storage) {
        drop(core::mem::replace(&mut self.storage, next));
    }

    /// The index of the active alternative, in `0..L::COUNT`.
    pub fn index(&self) -> usize {
        self.storage.index()
    }
    /// Whether the `I`th alternative is active.
    pub fn is<const I: usize>(&self) -> bool
    where
        L: IAt<I>,
    {
        self.index() == I
    }
    pub fn active_kind(&self) -> Kind {
        L::KINDS[self.index()]
    }
    /// The name of the active alternative's type.
    pub fn type_name(&self) -> &'static str {
        self.storage.type_name()
    }
    /// Whether the active alternative is of type `T`.
    ///
    /// Unlike type-indexed accesses, this works when `T` appears more than once in `L`.
    ///
    /// Types are compared by [`TypeId`](core::any::TypeId), so every alternative must be
    /// `'static`: this isn't available on variants that hold borrowed alternatives. Use
    /// [`Variant::is`] or [`Variant::find`] on those instead.
    pub fn holds_alternative<T: 'static>(&self) -> bool
    where
        L: 'static,
    {
        L::type_id_at(self.index()) == Some(core::any::TypeId::of::<T>())
    }
    fn bad_alternative(&self, requested: usize) -> BadAlternative {
        BadAlternative {
            requested,
            active: self.index(),
            requested_type: L::type_name_at(requested).unwrap_or("?"),
            active_type: self.type_name(),
        }
    }

    pub fn get<const I: usize>(&self) -> Result<&<L as IAt<I>>::Item, BadAlternative>
    where
        L: IAt<I>,
    {
        <L as IAt<I>>::read(&self.storage).ok_or_else(|| self.bad_alternative(I))
    }
    pub fn get_mut<const I: usize>(&mut self) -> Result<&mut <L as IAt<I>>::Item, BadAlternative>
    where
        L: IAt<I>,
    {
        if !self.is::<I>() {
            return Err(self.bad_alternative(I));
        }
        match <L as IAt<I>>::read_mut(&mut self.storage) {
            Some(value) => Ok(value),
            None => unsafe { unreachable_unchecked!() },
        }
    }
    pub fn get_if<const I: usize>(&self) -> Option<&<L as IAt<I>>::Item>
    where
        L: IAt<I>,
    {
        <L as IAt<I>>::read(&self.storage)
    }
    pub fn get_if_mut<const I: usize>(&mut self) -> Option<&mut <L as IAt<I>>::Item>
    where
        L: IAt<I>,
    {
        <L as IAt<I>>::read_mut(&mut self.storage)
    }
    /// Moves the `I`th alternative out, or gives `self` back if another one is active.
    pub fn into_alternative<const I: usize>(self) -> Result<<L as IAt<I>>::Item, Self>
    where
        L: IAt<I>,
    {
        <L as IAt<I>>::take(self.into_storage()).map_err(Self::from_storage)
    }

    /// Accesses the alternative of type `T`.
    pub fn at<T, I>(&self) -> Result<&T, BadAlternative>
    where
        L: IContains<T, I>,
    {
        <L as IContains<T, I>>::read(&self.storage)
            .ok_or_else(|| self.bad_alternative(<L as IContains<T, I>>::INDEX))
    }
    pub fn at_mut<T, I>(&mut self) -> Result<&mut T, BadAlternative>
    where
        L: IContains<T, I>,
    {
        let index = <L as IContains<T, I>>::INDEX;
        if self.index() != index {
            return Err(self.bad_alternative(index));
        }
        match <L as IContains<T, I>>::read_mut(&mut self.storage) {
            Some(value) => Ok(value),
            None => unsafe { unreachable_unchecked!() },
        }
    }
    pub fn find<T, I>(&self) -> Option<&T>
    where
        L: IContains<T, I>,
    {
        <L as IContains<T, I>>::read(&self.storage)
    }
    pub fn find_mut<T, I>(&mut self) -> Option<&mut T>
    where
        L: IContains<T, I>,
    {
        <L as IContains<T, I>>::read_mut(&mut self.storage)
    }
    /// Moves the alternative of type `T` out, or gives `self` back if another one is active.
    pub fn into_type<T, I>(self) -> Result<T, Self>
    where
        L: IContains<T, I>,
    {
        <L as IContains<T, I>>::take(self.into_storage()).map_err(Self::from_storage)
    }

    /// Replaces the active alternative with the `I`th one.
    pub fn emplace<const I: usize>(&mut self, value: <L as IAt<I>>::Item) -> &mut <L as IAt<I>>::Item
    where
        L: IAt<I>,
    {
        self.install(<L as IAt<I>>::construct(value));
        match <L as IAt<I>>::read_mut(&mut self.storage) {
            Some(value) => value,
            None => unsafe { unreachable_unchecked!() },
        }
    }
    /// Replaces the active alternative with the result of `f`.
    ///
    /// `f` runs before the current alternative is destroyed: if it panics, `self` is left untouched.
    pub fn emplace_with<const I: usize, F>(&mut self, f: F) -> &mut <L as IAt<I>>::Item
    where
        L: IAt<I>,
        F: FnOnce() -> <L as IAt<I>>::Item,
    {
        self.emplace::<I>(f())
    }
    pub fn emplace_from<const I: usize, Args>(&mut self, args: Args) -> &mut <L as IAt<I>>::Item
    where
        L: IAt<I>,
        <L as IAt<I>>::Item: IConstruct<Args>,
    {
        self.emplace::<I>(IConstruct::construct(args))
    }
    /// Replaces the active alternative with the result of `f`, if it succeeds.
    ///
    /// On failure, `self` keeps its previous alternative and the error is reported with the index
    /// that was being constructed.
    pub fn try_emplace_with<const I: usize, E, F>(
        &mut self,
        f: F,
    ) -> Result<&mut <L as IAt<I>>::Item, AlternativeConstructionFailure<E>>
    where
        L: IAt<I>,
        F: FnOnce() -> Result<<L as IAt<I>>::Item, E>,
    {
        match f() {
            Ok(value) => Ok(self.emplace::<I>(value)),
            Err(source) => Err(AlternativeConstructionFailure { index: I, source }),
        }
    }
    /// Replaces the active alternative with the one of type `T`.
    pub fn emplace_type<T, I>(&mut self, value: T) -> &mut T
    where
        L: IContains<T, I>,
    {
        self.install(<L as IContains<T, I>>::construct(value));
        match <L as IContains<T, I>>::read_mut(&mut self.storage) {
            Some(value) => value,
            None => unsafe { unreachable_unchecked!() },
        }
    }
    /// Replaces `self` with the `I`th alternative, returning the previous state.
    pub fn replace<const I: usize>(&mut self, value: <L as IAt<I>>::Item) -> Self
    where
        L: IAt<I>,
    {
        core::mem::replace(self, Self::in_place::<I>(value))
    }
    /// Move-assignment.
    ///
    /// If both sides hold the same alternative, `other`'s value is assigned over `self`'s.
    /// Otherwise `self`'s alternative is destroyed, and `other`'s is moved in.
    pub fn assign(&mut self, other: Self) {
        if let Err(other) = self.storage.move_assign_same(other.into_storage()) {
            self.install(other)
        }
    }
    /// Exchanges the contents of `self` and `other`.
    ///
    /// Same alternatives are swapped in place, different ones swap whole storages.
    pub fn swap(&mut self, other: &mut Self) {
        if !self.storage.swap_same(&mut other.storage) {
            core::mem::swap(&mut self.storage, &mut other.storage)
        }
    }

    /// Calls `f` with a reference to the active alternative.
    pub fn visit<'a, F>(&'a self, f: F) -> <L as IVisitRef<'a, F>>::Output
    where
        L: IVisitRef<'a, F>,
    {
        L::visit_ref(&self.storage, f)
    }
    /// Calls `f` with a mutable reference to the active alternative.
    pub fn visit_mut<'a, F>(&'a mut self, f: F) -> <L as IVisitMut<'a, F>>::Output
    where
        L: IVisitMut<'a, F>,
    {
        L::visit_mut(&mut self.storage, f)
    }
    /// Calls `f` with the active alternative.
    pub fn into_visit<F>(self, f: F) -> <L as IVisitOwned<F>>::Output
    where
        L: IVisitOwned<F>,
    {
        L::visit_owned(self.into_storage(), f)
    }
}

impl<L: IAt<0>> Default for Variant<L>
where
    <L as IAt<0>>::Item: Default,
{
    fn default() -> Self {
        Self::in_place::<0>(Default::default())
    }
}

impl<L: IAlternatives> Clone for Variant<L>
where
    L::Storage: ICloneAssign,
{
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
        }
    }
    /// Copy-assignment.
    ///
    /// If both sides hold the same alternative, `source`'s value is cloned over `self`'s.
    /// Otherwise it is cloned first, then `self`'s alternative is destroyed and replaced.
    fn clone_from(&mut self, source: &Self) {
        if !self.storage.clone_assign_same(&source.storage) {
            self.install(source.storage.clone())
        }
    }
}

impl<L: IAlternatives> PartialEq for Variant<L>
where
    L::Storage: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.storage == other.storage
    }
}
impl<L: IAlternatives> Eq for Variant<L> where L::Storage: Eq {}
/// Variants are ordered by index first, then by value.
impl<L: IAlternatives> PartialOrd for Variant<L>
where
    L::Storage: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.storage.partial_cmp(&other.storage)
    }
}
impl<L: IAlternatives> Ord for Variant<L>
where
    L::Storage: Ord,
{
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.storage.cmp(&other.storage)
    }
}
impl<L: IAlternatives> core::hash::Hash for Variant<L>
where
    L::Storage: core::hash::Hash,
{
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.storage.hash(state)
    }
}
impl<L: IAlternatives> core::fmt::Debug for Variant<L>
where
    L::Storage: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.storage.fmt(f)
    }
}
impl<L: IAlternatives> core::fmt::Display for Variant<L>
where
    L::Storage: core::fmt::Display,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.storage.fmt(f)
    }
}
