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

use crate::Unit;
use core::fmt::{Debug, Display};

/// An alternative was requested, but another one was active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BadAlternative {
    pub requested: usize,
    pub active: usize,
    pub requested_type: &'static str,
    pub active_type: &'static str,
}
impl Display for BadAlternative {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "bad alternative access: requested #{} ({}), but #{} ({}) is active",
            self.requested, self.requested_type, self.active, self.active_type
        )
    }
}
#[cfg(feature = "std")]
impl std::error::Error for BadAlternative {}

/// A value was requested from an empty [`Option`](crate::Option), or from a
/// [`Result`](crate::Result) holding an error, in which case the error is carried along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BadAccess<E = Unit> {
    error: E,
}
impl<E> BadAccess<E> {
    pub const fn new(error: E) -> Self {
        Self { error }
    }
    pub fn error(&self) -> &E {
        &self.error
    }
    pub fn into_error(self) -> E {
        self.error
    }
}
impl BadAccess {
    /// The failure of accessing an empty `Option`.
    pub const EMPTY: Self = Self { error: Unit };
}
impl<E: Debug> Display for BadAccess<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "bad access: no value, found {:?}", self.error)
    }
}
#[cfg(feature = "std")]
impl<E: Debug> std::error::Error for BadAccess<E> {}

/// Constructing the alternative at `index` failed with `source`.
///
/// The variant that was being assigned to keeps its previous alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlternativeConstructionFailure<E> {
    pub index: usize,
    pub source: E,
}
impl<E: Display> Display for AlternativeConstructionFailure<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "failed to construct alternative #{}: {}",
            self.index, self.source
        )
    }
}
#[cfg(feature = "std")]
impl<E: std::error::Error + 'static> std::error::Error for AlternativeConstructionFailure<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
