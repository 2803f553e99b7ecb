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

use crate::{
    capabilities,
    kinds::{Capabilities, Convert, Discard, IAlternative, IAlternatives, Kind},
    ErrorSet, Unit, Variant,
};

const NO_DEFAULT: Capabilities = Capabilities::DEFAULT.union(Capabilities::NOTHROW_DEFAULT);

macro_rules! trivial {
    ($($t: ty),*) => {$(
        impl IAlternative for $t {
            const KIND: Kind = Kind::Value;
            const CAPABILITIES: Capabilities = Capabilities::trivial();
            type FromArgument = Convert;
        }
    )*};
}
trivial!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char);

macro_rules! nonzero {
    ($($t: ty),*) => {$(
        impl IAlternative for $t {
            const KIND: Kind = Kind::Value;
            const CAPABILITIES: Capabilities = Capabilities::trivial().without(NO_DEFAULT);
            type FromArgument = Convert;
        }
    )*};
}
nonzero!(
    core::num::NonZeroU8,
    core::num::NonZeroU16,
    core::num::NonZeroU32,
    core::num::NonZeroU64,
    core::num::NonZeroU128,
    core::num::NonZeroUsize,
    core::num::NonZeroI8,
    core::num::NonZeroI16,
    core::num::NonZeroI32,
    core::num::NonZeroI64,
    core::num::NonZeroI128,
    core::num::NonZeroIsize
);

impl IAlternative for core::time::Duration {
    const KIND: Kind = Kind::Value;
    const CAPABILITIES: Capabilities = capabilities!(core::time::Duration);
    type FromArgument = Convert;
}
impl IAlternative for core::cmp::Ordering {
    const KIND: Kind = Kind::Value;
    const CAPABILITIES: Capabilities = Capabilities::trivial().without(NO_DEFAULT);
    type FromArgument = Convert;
}

impl IAlternative for Unit {
    const KIND: Kind = Kind::Unit;
    const CAPABILITIES: Capabilities = Capabilities::trivial();
    type FromArgument = Discard;
}
impl IAlternative for () {
    const KIND: Kind = Kind::Zst;
    const CAPABILITIES: Capabilities = Capabilities::trivial();
    type FromArgument = Convert;
}
impl<T: ?Sized> IAlternative for core::marker::PhantomData<T> {
    const KIND: Kind = Kind::Zst;
    const CAPABILITIES: Capabilities = Capabilities::trivial();
    type FromArgument = Convert;
}

impl<'a, T: ?Sized> IAlternative for &'a T {
    const KIND: Kind = Kind::LvalueReference;
    const CAPABILITIES: Capabilities = Capabilities::trivial().without(NO_DEFAULT);
    type FromArgument = Convert;
}
impl<'a, T: ?Sized> IAlternative for &'a mut T {
    const KIND: Kind = Kind::LvalueReference;
    const CAPABILITIES: Capabilities = Capabilities::of::<&'a mut T>();
    type FromArgument = Convert;
}

impl<T: IAlternative> IAlternative for core::option::Option<T> {
    const KIND: Kind = Kind::Value;
    const CAPABILITIES: Capabilities = Capabilities::of::<Self>()
        .with_default(true)
        .with_clone(
            T::CAPABILITIES.is_copy_constructible(),
            T::CAPABILITIES.is_nothrow_copy_constructible(),
        );
    type FromArgument = Convert;
}
impl<T: IAlternative, E: IAlternative> IAlternative for core::result::Result<T, E> {
    const KIND: Kind = Kind::Value;
    const CAPABILITIES: Capabilities =
        <(T, E) as IAlternatives>::CAPABILITIES.without(NO_DEFAULT);
    type FromArgument = Convert;
}

macro_rules! tuples {
    ($(($($t: ident),+))*) => {$(
        impl<$($t: IAlternative),+> IAlternative for ($($t,)+) {
            const KIND: Kind = Kind::of_value::<Self>();
            const CAPABILITIES: Capabilities = Capabilities::ALL$(.intersection($t::CAPABILITIES))+;
            type FromArgument = Convert;
        }
    )*};
}
tuples! {
    (A)
    (A, B)
    (A, B, C)
    (A, B, C, D)
}

impl<T: IAlternative, const N: usize> IAlternative for [T; N] {
    const KIND: Kind = Kind::of_value::<Self>();
    const CAPABILITIES: Capabilities = T::CAPABILITIES.without(NO_DEFAULT);
    type FromArgument = Convert;
}

impl<L: IAlternatives> IAlternative for Variant<L> {
    const KIND: Kind = Kind::of_value::<Self>();
    const CAPABILITIES: Capabilities = L::CAPABILITIES;
    type FromArgument = Convert;
}
impl<T: IAlternative> IAlternative for crate::Option<T> {
    const KIND: Kind = Kind::of_value::<Self>();
    const CAPABILITIES: Capabilities = <(Unit, T) as IAlternatives>::CAPABILITIES;
    type FromArgument = Convert;
}
impl<T: IAlternative, E: IAlternative> IAlternative for crate::Result<T, E> {
    const KIND: Kind = Kind::of_value::<Self>();
    const CAPABILITIES: Capabilities =
        <(T, E) as IAlternatives>::CAPABILITIES.without(NO_DEFAULT);
    type FromArgument = Convert;
}
impl<L: IAlternatives> IAlternative for ErrorSet<L> {
    const KIND: Kind = Kind::of_value::<Self>();
    const CAPABILITIES: Capabilities = L::CAPABILITIES.without(NO_DEFAULT);
    type FromArgument = Convert;
}

#[cfg(feature = "alloc")]
mod allocs {
    use super::*;
    use alloc::{boxed::Box, rc::Rc, string::String, sync::Arc, vec::Vec};

    impl IAlternative for String {
        const KIND: Kind = Kind::Value;
        const CAPABILITIES: Capabilities = capabilities!(String);
        type FromArgument = Convert;
    }
    impl<T: IAlternative> IAlternative for Vec<T> {
        const KIND: Kind = Kind::Value;
        const CAPABILITIES: Capabilities = Capabilities::of::<Self>()
            .with_default(true)
            .with_clone(T::CAPABILITIES.is_copy_constructible(), false);
        type FromArgument = Convert;
    }
    impl<T: ?Sized> IAlternative for Box<T> {
        const KIND: Kind = Kind::Value;
        const CAPABILITIES: Capabilities = Capabilities::of::<Self>();
        type FromArgument = Convert;
    }
    impl<T: ?Sized> IAlternative for Rc<T> {
        const KIND: Kind = Kind::Value;
        const CAPABILITIES: Capabilities = Capabilities::of::<Self>().with_clone(true, false);
        type FromArgument = Convert;
    }
    impl<T: ?Sized> IAlternative for Arc<T> {
        const KIND: Kind = Kind::Value;
        const CAPABILITIES: Capabilities = Capabilities::of::<Self>().with_clone(true, false);
        type FromArgument = Convert;
    }
    assert_tagless!(String);
    assert_tagless!(Vec<u8>);
    assert_tagless!(Box<str>);
}

#[cfg(feature = "abi_stable")]
mod abi_stable;

assert_tagless!(u8);
assert_tagless!(u64);
assert_tagless!(&'static str);
assert_tagless!(Unit);
assert_tagless!(core::num::NonZeroU32);
