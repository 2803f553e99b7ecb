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

#![cfg_attr(not(feature = "std"), no_std)]

//! The core of `alternate`: tagged unions over type lists, and the `Option`, `Result` and
//! `ErrorSet` facades built on top of them.

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(all(test, not(feature = "std")))]
extern crate std;

/// Unreachable in release, panics in debug.
#[macro_export]
macro_rules! unreachable_unchecked {
    () => {
        if cfg!(debug_assertions) {
            panic!("entered unreachable code")
        } else {
            core::hint::unreachable_unchecked()
        }
    };
}

/// Asserts at compile time that a variant with `$t` as its only alternative carries no tag.
#[macro_export]
macro_rules! assert_tagless {
    ($t: ty) => {
        const _: () = {
            assert!(
                core::mem::size_of::<$crate::variant::Variant<($t,)>>()
                    == core::mem::size_of::<$t>()
            );
        };
    };
}

pub mod cell;
pub mod error_set;
pub mod errors;
pub mod kinds;
pub mod option;
pub mod result;
pub mod storage;
pub mod variant;
pub mod visit;

mod alternative_impls;

pub use alternate_macros::{error_set, merge, Alternative};
pub use error_set::ErrorSet;
pub use errors::{AlternativeConstructionFailure, BadAccess, BadAlternative};
pub use kinds::{Capabilities, IAlternative, IAlternatives, IConstruct, Kind};
pub use option::Option;
pub use result::Result;
pub use storage::{IAt, IContains, IRemove, ISubsetOf, Idx};
pub use variant::Variant;
pub use visit::{visit2, visit3, IVisitor};

/// The empty alternative.
///
/// It stands for "no value" wherever an alternative is needed: it is the `None` side of
/// [`Option`], and the only alternative whose kind is [`Kind::Unit`].
/// It converts to and from `()`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Unit;
impl core::fmt::Display for Unit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("()")
    }
}
impl From<()> for Unit {
    fn from(_: ()) -> Self {
        Unit
    }
}
impl From<Unit> for () {
    fn from(_: Unit) -> Self {}
}
