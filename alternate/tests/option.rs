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

use alternate::{BadAccess, Option, Unit};
use rand::{Rng, SeedableRng};

#[test]
fn monadic_chain() {
    let double_positive = |y: i32| {
        if y > 0 {
            Option::Some(y * 2)
        } else {
            Option::None()
        }
    };
    assert_eq!(Option::Some(3).and_then(double_positive), Option::Some(6));
    assert_eq!(Option::Some(-3).and_then(double_positive), Option::None());
    assert_eq!(Option::<i32>::None().and_then(Option::Some), Option::None());
    assert_eq!(
        Option::Some("12")
            .transform(str::len)
            .filter(|len| *len > 1)
            .or_else(|| Option::Some(0)),
        Option::Some(2)
    );
    assert!(Option::Some(1u8).transform(|_| Unit).flag());
}

#[test]
fn ok_or_round_trips() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let x: u64 = rng.gen();
        let e: u16 = rng.gen();
        assert_eq!(Option::Some(x).ok_or(e).or_none(), Option::Some(x));
        assert_eq!(Option::<u64>::None().ok_or(e).or_none(), Option::None());
        assert_eq!(
            Option::<u64>::None().ok_or_else(|| e).error_or_none(),
            Option::Some(e)
        );
    }
}

#[test]
fn access() {
    let mut some = Option::Some(String::from("value"));
    let none = Option::<String>::None();
    assert_eq!(some.value().map(String::as_str), Ok("value"));
    assert_eq!(none.value(), Err(BadAccess::EMPTY));
    some.value_mut().unwrap().push('s');
    assert_eq!(some.as_ref().cloned(), Option::Some("values".to_owned()));
    assert_eq!(none.clone().value_or_default(), "");
    assert_eq!(none.clone().value_or("fallback".into()), "fallback");
    assert_eq!(format!("{some:?} {none:?}"), "Some(\"values\") None");
    let native: core::option::Option<String> = some.clone().into();
    assert_eq!(Option::from(native), some);
}

#[test]
fn combinators() {
    let one = || Option::Some(1);
    let two = || Option::Some(2);
    let none = Option::<i32>::None;
    assert_eq!(one().or(two()), one());
    assert_eq!(none().or(two()), two());
    assert_eq!(one().and(two()), two());
    assert_eq!(none().and(two()), none());
    assert_eq!(one().xor(none()), one());
    assert_eq!(one().xor(two()), none());
    assert_eq!(none().xor(none()), none());
    assert_eq!(one().zip(Option::Some('a')), Option::Some((1, 'a')));
    assert_eq!(one().zip(Option::<char>::None()), Option::None());
}

#[test]
fn mutation() {
    let mut o = Option::<Vec<u8>>::None();
    o.get_or_insert_with(Vec::new).push(1);
    o.get_or_insert_with(|| vec![9]).push(2);
    assert_eq!(o.value().map(Vec::len), Ok(2));
    let taken = o.take();
    assert!(o.is_none());
    assert_eq!(taken, Option::Some(vec![1, 2]));
    assert_eq!(o.replace(vec![3]), Option::None());
    *o.insert(vec![4]) = vec![5];
    assert_eq!(o, Option::Some(vec![5]));
    o.as_mut().match_owned(|v| v.clear(), || ());
    assert_eq!(o.value().map(Vec::len), Ok(0));
}

#[test]
fn ordering() {
    let mut values = [
        Option::Some(3),
        Option::None(),
        Option::Some(-1),
        Option::None(),
    ];
    values.sort();
    assert_eq!(
        values,
        [
            Option::None(),
            Option::None(),
            Option::Some(-1),
            Option::Some(3)
        ]
    );
    assert!(Option::None() < Option::Some(i32::MIN));
    assert_eq!(Option::<Unit>::from_flag(true), Option::Some(Unit));
    assert!(!Option::<Unit>::from_flag(false).flag());
}

#[test]
fn referents_may_be_declared_after_their_holder() {
    let mut holder = Option::None();
    let text = String::from("x");
    assert!(holder.is_none());
    holder = Option::Some(&text);
    assert_eq!(holder.value().map(|s| s.len()), Ok(1));

    let mut flag = alternate::Variant::<(Unit, &String)>::default();
    let other = String::from("yz");
    flag.emplace::<1>(&other);
    assert_eq!(flag.get::<1>().map(|s| s.len()), Ok(2));
}
