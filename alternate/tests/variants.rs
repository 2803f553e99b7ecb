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

use std::{
    cell::Cell,
    panic::{catch_unwind, AssertUnwindSafe},
    rc::Rc,
};

use alternate::{visit2, visit3, Alternative, IVisitor, Kind, Unit, Variant};
use rand::{Rng, SeedableRng};

/// Counts its live instances.
#[derive(Alternative, Debug)]
struct Tracked {
    id: u32,
    live: Rc<Cell<isize>>,
}
impl Tracked {
    fn new(id: u32, live: &Rc<Cell<isize>>) -> Self {
        live.set(live.get() + 1);
        Tracked {
            id,
            live: live.clone(),
        }
    }
}
impl Clone for Tracked {
    fn clone(&self) -> Self {
        Tracked::new(self.id, &self.live)
    }
}
impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Drop for Tracked {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1)
    }
}

#[derive(Alternative)]
struct Bomb;
impl Drop for Bomb {
    fn drop(&mut self) {
        panic!("boom")
    }
}

#[test]
fn reference_alternatives() {
    let x = Cell::new(42);
    let y = Cell::new(7);
    let mut v = Variant::<(Unit, &Cell<i32>)>::default();
    assert_eq!(v.active_kind(), Kind::Unit);
    v.emplace::<1>(&x);
    assert_eq!(v.index(), 1);
    assert!(core::ptr::eq(*v.get::<1>().unwrap(), &x));
    assert_eq!(v.get::<1>().unwrap().get(), 42);
    x.set(24);
    assert_eq!(v.get::<1>().unwrap().get(), 24);
    assert_eq!(v.active_kind(), Kind::LvalueReference);

    // Assigning a reference rebinds it, the referee is left alone.
    v.assign(Variant::in_place::<1>(&y));
    assert!(core::ptr::eq(*v.get::<1>().unwrap(), &y));
    assert_eq!(x.get(), 24);
}

#[test]
fn swap_across_alternatives() {
    let mut v1 = Variant::<(i32, f32)>::in_place::<0>(1);
    let mut v2 = Variant::<(i32, f32)>::in_place::<1>(3.25);
    v1.swap(&mut v2);
    assert_eq!(v1.index(), 1);
    assert_eq!(v1.get::<1>(), Ok(&3.25));
    assert_eq!(v2.index(), 0);
    assert_eq!(v2.get::<0>(), Ok(&1));
    v1.swap(&mut v2);
    assert_eq!(v1.get::<0>(), Ok(&1));
    assert_eq!(v2.get::<1>(), Ok(&3.25));
}

#[test]
fn swaps_are_involutive() {
    type V<'a> = Variant<(Unit, &'a str, String)>;
    fn states(text: &str) -> [V<'_>; 3] {
        [
            V::default(),
            V::in_place::<1>(text),
            V::in_place::<2>("owned".into()),
        ]
    }
    let text = String::from("borrowed");
    for (i, mut a) in states(&text).into_iter().enumerate() {
        for (j, mut b) in states(&text).into_iter().enumerate() {
            a.swap(&mut b);
            assert_eq!((a.index(), b.index()), (j, i));
            a.swap(&mut b);
            assert_eq!(a, states(&text)[i]);
            assert_eq!(b, states(&text)[j]);
        }
    }
}

#[test]
fn copies_are_faithful() {
    let live = Rc::new(Cell::new(0));
    let v = Variant::<(u8, Tracked)>::in_place::<1>(Tracked::new(3, &live));
    let w = v.clone();
    assert_eq!(live.get(), 2);
    assert_eq!(w.index(), v.index());
    assert_eq!(w.get::<1>().map(|t| t.id), Ok(3));
    assert_eq!(v, w);
    let moved = w;
    assert_eq!(moved.get::<1>().map(|t| t.id), Ok(3));
    assert_eq!(live.get(), 2);
}

#[test]
fn destructors_are_paired() {
    let live = Rc::new(Cell::new(0));
    {
        let mut v = Variant::<(Unit, Tracked, String)>::default();
        v.emplace::<1>(Tracked::new(1, &live));
        assert_eq!(live.get(), 1);
        v.emplace::<1>(Tracked::new(2, &live));
        assert_eq!(live.get(), 1);
        v.emplace::<2>("text".into());
        assert_eq!(live.get(), 0);
        let mut other = Variant::in_place::<1>(Tracked::new(3, &live));
        v.swap(&mut other);
        assert_eq!(live.get(), 1);
        v.clone_from(&other);
        assert_eq!(live.get(), 0);
        other.assign(Variant::in_place::<1>(Tracked::new(4, &live)));
        v.clone_from(&other);
        assert_eq!(live.get(), 2);
        assert!(v.into_alternative::<1>().is_ok());
        assert_eq!(live.get(), 1);
    }
    assert_eq!(live.get(), 0);
}

#[test]
fn never_valueless() {
    let mut v = Variant::<(Bomb, u8)>::in_place::<0>(Bomb);
    let result = catch_unwind(AssertUnwindSafe(|| {
        v.emplace::<1>(5);
    }));
    assert!(result.is_err());
    assert_eq!(v.get::<1>(), Ok(&5));

    let mut v = Variant::<(u8, String)>::in_place::<1>("kept".into());
    let result = catch_unwind(AssertUnwindSafe(|| {
        v.emplace_with::<0, _>(|| panic!("construction failed"));
    }));
    assert!(result.is_err());
    assert_eq!(v.get::<1>().map(String::as_str), Ok("kept"));
}

struct Describe;
impl IVisitor<&Unit> for Describe {
    type Output = String;
    fn visit(self, _: &Unit) -> String {
        "nothing".into()
    }
}
impl IVisitor<&u8> for Describe {
    type Output = String;
    fn visit(self, value: &u8) -> String {
        format!("byte {value}")
    }
}
impl IVisitor<&String> for Describe {
    type Output = String;
    fn visit(self, value: &String) -> String {
        format!("text {value:?}")
    }
}

#[test]
fn visits_are_total() {
    type V = Variant<(Unit, u8, String)>;
    assert_eq!(V::default().visit(Describe), "nothing");
    assert_eq!(V::in_place::<1>(4).visit(Describe), "byte 4");
    assert_eq!(V::in_place::<2>("hi".into()).visit(Describe), "text \"hi\"");
    let mut v = V::in_place::<1>(4);
    let doubled = v.match_mut(
        |_| 0,
        |b| {
            *b *= 2;
            *b
        },
        |s| s.len() as u8,
    );
    assert_eq!(doubled, 8);
    let same = Variant::<(u8, u8)>::in_place::<1>(9);
    assert_eq!(same.into_visit(|x: u8| x + 1), 10);
}

#[test]
fn multi_visits() {
    let a = Variant::<(u8, u16)>::in_place::<1>(300);
    let b = Variant::<(u32, u64)>::in_place::<0>(70_000);
    let c = Variant::<(i8,)>::in_place::<0>(-1);
    struct Sum;
    macro_rules! sums {
        ($(($a: ty, $b: ty)),*) => {$(
            impl IVisitor<(&$a, &$b)> for Sum {
                type Output = i128;
                fn visit(self, (a, b): (&$a, &$b)) -> i128 {
                    *a as i128 + *b as i128
                }
            }
            impl IVisitor<(&$a, &$b, &i8)> for Sum {
                type Output = i128;
                fn visit(self, (a, b, c): (&$a, &$b, &i8)) -> i128 {
                    *a as i128 + *b as i128 + *c as i128
                }
            }
        )*};
    }
    sums!((u8, u32), (u8, u64), (u16, u32), (u16, u64));
    assert_eq!(visit2(Sum, &a, &b), 70_300);
    assert_eq!(visit3(Sum, &a, &b, &c), 70_299);
}

#[test]
fn duplicate_types() {
    let v = Variant::<(u8, u16, u8)>::in_place::<2>(3);
    assert!(v.holds_alternative::<u8>());
    assert_eq!(v.get::<2>(), Ok(&3));
    assert!(v.get_if::<0>().is_none());
    assert_eq!(v.find::<u16, _>(), None);
}

#[derive(Debug, Clone, PartialEq)]
enum Model {
    Unit,
    Byte(u8),
    Text(String),
    Tracked(u32),
}
type Subject = Variant<(Unit, u8, String, Tracked)>;

impl Model {
    fn random(rng: &mut impl Rng) -> Self {
        match rng.gen_range(0..4) {
            0 => Model::Unit,
            1 => Model::Byte(rng.gen()),
            2 => Model::Text(format!("t{}", rng.gen::<u16>())),
            _ => Model::Tracked(rng.gen()),
        }
    }
    fn of(v: &Subject) -> Self {
        v.match_ref(
            |_| Model::Unit,
            |b| Model::Byte(*b),
            |s| Model::Text(s.clone()),
            |t| Model::Tracked(t.id),
        )
    }
    fn build(&self, live: &Rc<Cell<isize>>) -> Subject {
        match self {
            Model::Unit => Subject::default(),
            Model::Byte(b) => Subject::in_place::<1>(*b),
            Model::Text(s) => Subject::in_place::<2>(s.clone()),
            Model::Tracked(id) => Subject::in_place::<3>(Tracked::new(*id, live)),
        }
    }
    fn tracked(&self) -> isize {
        matches!(self, Model::Tracked(_)) as isize
    }
}

#[test]
fn random_assignments_and_swaps() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0);
    let live = Rc::new(Cell::new(0));
    let (mut ma, mut mb) = (Model::Unit, Model::Byte(1));
    let mut a = ma.build(&live);
    let mut b = mb.build(&live);
    for _ in 0..2000 {
        let next = Model::random(&mut rng);
        let op = rng.gen_range(0..5);
        match op {
            0 => match next.clone() {
                Model::Unit => {
                    a.emplace::<0>(Unit);
                }
                Model::Byte(x) => {
                    a.emplace::<1>(x);
                }
                Model::Text(s) => {
                    a.emplace::<2>(s);
                }
                Model::Tracked(id) => {
                    a.emplace::<3>(Tracked::new(id, &live));
                }
            },
            1 => a.assign(next.build(&live)),
            2 => a.clone_from(&next.build(&live)),
            3 => {
                a.swap(&mut b);
                core::mem::swap(&mut ma, &mut mb);
            }
            _ => {
                let previous = core::mem::replace(&mut a, next.build(&live));
                assert_eq!(Model::of(&previous), ma);
            }
        }
        if op != 3 {
            ma = next;
        }
        assert_eq!(Model::of(&a), ma);
        assert_eq!(Model::of(&b), mb);
        assert_eq!(live.get(), ma.tracked() + mb.tracked());
    }
    drop((a, b));
    assert_eq!(live.get(), 0);
}
