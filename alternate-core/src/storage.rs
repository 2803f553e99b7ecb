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

//! Discriminated storage: one [`Cell`] per alternative, and the active index.
//!
//! The storages themselves (`Slots0` through `Slots12`) are plain enums of cells, generated
//! for each arity by the build script. Since they are enums, rustc picks their tag and
//! reuses niches wherever it can:
//! - a single alternative needs no tag,
//! - an empty alternative next to a reference or a `NonZero` packs into the pointer's niche,
//! - a list of empty alternatives is just its tag.

use crate::{
    cell::Cell,
    kinds::{Capabilities, IAlternative, IAlternatives, Kind},
    variant::Variant,
    visit::{IVisitMut, IVisitOwned, IVisitRef, IVisitor},
};

/// Operations on discriminated storage that don't depend on which alternative is active.
pub trait IStorage: Sized {
    const COUNT: usize;
    /// The active index.
    fn index(&self) -> usize;
    /// Move-assigns `other`'s value over `self`'s if both hold the same alternative,
    /// hands `other` back otherwise.
    fn move_assign_same(&mut self, other: Self) -> Result<(), Self>;
    /// Swaps the values of `self` and `other` if both hold the same alternative.
    fn swap_same(&mut self, other: &mut Self) -> bool;
    /// The name of the active alternative's type.
    fn type_name(&self) -> &'static str;
}

/// Copy-assignment of same-index storages.
pub trait ICloneAssign: IStorage + Clone {
    /// Copy-assigns `other`'s value over `self`'s if both hold the same alternative.
    fn clone_assign_same(&mut self, other: &Self) -> bool;
}

/// Access to the `I`th alternative of a list.
pub trait IAt<const I: usize>: IAlternatives {
    type Item: IAlternative;
    fn construct(value: Self::Item) -> Self::Storage;
    fn read(storage: &Self::Storage) -> Option<&Self::Item>;
    fn read_mut(storage: &mut Self::Storage) -> Option<&mut Self::Item>;
    fn take(storage: Self::Storage) -> Result<Self::Item, Self::Storage>;
}

/// A type-level index, used to find `T` in a list without naming its position.
pub struct Idx<const I: usize>;

/// Access to `T` in a list.
///
/// `I` is inferred: this is only implemented once per position `T` appears at, so a type
/// that appears more than once in a list can't be looked up by type without ambiguity.
pub trait IContains<T, I>: IAlternatives {
    const INDEX: usize;
    fn construct(value: T) -> Self::Storage;
    fn read(storage: &Self::Storage) -> Option<&T>;
    fn read_mut(storage: &mut Self::Storage) -> Option<&mut T>;
    fn take(storage: Self::Storage) -> Result<T, Self::Storage>;
}

/// Removes an alternative from a list.
pub trait IRemove<I>: IAlternatives {
    type Removed;
    /// The list, without the removed alternative.
    type Rest: IAlternatives;
    /// Takes the removed alternative out if it is active, re-indexes the value in the rest otherwise.
    fn split(
        storage: Self::Storage,
    ) -> Result<Self::Removed, <Self::Rest as IAlternatives>::Storage>;
}

/// `Self` is a subset of `Sup`: each of its alternatives is found in `Sup` at the positions given by `Is`.
pub trait ISubsetOf<Sup: IAlternatives, Is>: IAlternatives {
    fn inject(storage: Self::Storage) -> Sup::Storage;
    /// The index in `Sup` of the alternative at `index` in `Self`.
    fn inject_index(index: usize) -> usize;
}

include!(concat!(env!("OUT_DIR"), "/slots.rs"));
