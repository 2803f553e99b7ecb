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

use abi_stable::std_types::{ROption, RResult, RSlice, RStr, RString, RVec};

use crate::{
    assert_tagless, capabilities,
    kinds::{Capabilities, Convert, IAlternative, Kind},
};

impl IAlternative for RString {
    const KIND: Kind = Kind::Value;
    const CAPABILITIES: Capabilities = capabilities!(RString);
    type FromArgument = Convert;
}
assert_tagless!(RString);

impl<T: IAlternative> IAlternative for RVec<T> {
    const KIND: Kind = Kind::Value;
    const CAPABILITIES: Capabilities = Capabilities::of::<Self>()
        .with_default(true)
        .with_clone(T::CAPABILITIES.is_copy_constructible(), false);
    type FromArgument = Convert;
}
assert_tagless!(RVec<u8>);

impl<'a> IAlternative for RStr<'a> {
    const KIND: Kind = Kind::Value;
    const CAPABILITIES: Capabilities = Capabilities::trivial();
    type FromArgument = Convert;
}
assert_tagless!(RStr<'static>);

impl<'a, T: 'a> IAlternative for RSlice<'a, T> {
    const KIND: Kind = Kind::Value;
    const CAPABILITIES: Capabilities = Capabilities::trivial();
    type FromArgument = Convert;
}

impl<T: IAlternative> IAlternative for ROption<T> {
    const KIND: Kind = Kind::Value;
    const CAPABILITIES: Capabilities = Capabilities::of::<Self>()
        .with_default(true)
        .with_clone(
            T::CAPABILITIES.is_copy_constructible(),
            T::CAPABILITIES.is_nothrow_copy_constructible(),
        );
    type FromArgument = Convert;
}
impl<T: IAlternative, E: IAlternative> IAlternative for RResult<T, E> {
    const KIND: Kind = Kind::Value;
    const CAPABILITIES: Capabilities = Capabilities::of::<Self>().with_clone(
        T::CAPABILITIES.is_copy_constructible() && E::CAPABILITIES.is_copy_constructible(),
        T::CAPABILITIES.is_nothrow_copy_constructible()
            && E::CAPABILITIES.is_nothrow_copy_constructible(),
    );
    type FromArgument = Convert;
}

impl<T: IAlternative> From<ROption<T>> for crate::Option<T> {
    fn from(value: ROption<T>) -> Self {
        match value {
            ROption::RSome(value) => Self::Some(value),
            ROption::RNone => Self::None(),
        }
    }
}
impl<T: IAlternative> From<crate::Option<T>> for ROption<T> {
    fn from(value: crate::Option<T>) -> Self {
        value.match_owned(ROption::RSome, || ROption::RNone)
    }
}
impl<T: IAlternative, E: IAlternative> From<RResult<T, E>> for crate::Result<T, E> {
    fn from(value: RResult<T, E>) -> Self {
        match value {
            RResult::ROk(value) => Self::Ok(value),
            RResult::RErr(error) => Self::Err(error),
        }
    }
}
impl<T: IAlternative, E: IAlternative> From<crate::Result<T, E>> for RResult<T, E> {
    fn from(value: crate::Result<T, E>) -> Self {
        value.match_owned(RResult::ROk, RResult::RErr)
    }
}
