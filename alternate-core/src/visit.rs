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

//! Visitation: calling a function on whichever alternative is active.
//!
//! A visitor must accept every alternative, and return the same type for all of them.
//! Closures are visitors when all alternatives share a type (or when the closure is generic
//! through a trait), otherwise implement [`IVisitor`] once per alternative on a struct.

use crate::{kinds::IAlternatives, variant::Variant};

/// A function of `T`.
pub trait IVisitor<T> {
    type Output;
    fn visit(self, value: T) -> Self::Output;
}
impl<T, R, F: FnOnce(T) -> R> IVisitor<T> for F {
    type Output = R;
    fn visit(self, value: T) -> R {
        self(value)
    }
}

/// Visitation of a list's alternatives by reference.
pub trait IVisitRef<'a, F>: IAlternatives {
    type Output;
    fn visit_ref(storage: &'a Self::Storage, f: F) -> Self::Output;
}
/// Visitation of a list's alternatives by mutable reference.
pub trait IVisitMut<'a, F>: IAlternatives {
    type Output;
    fn visit_mut(storage: &'a mut Self::Storage, f: F) -> Self::Output;
}
/// Visitation of a list's alternatives by value.
pub trait IVisitOwned<F>: IAlternatives {
    type Output;
    fn visit_owned(storage: Self::Storage, f: F) -> Self::Output;
}

/// Visits `rest` with `f` once the first alternative is known.
pub struct Curry<'b, F, B: IAlternatives> {
    f: F,
    rest: &'b Variant<B>,
}
impl<'b, X, F, B> IVisitor<X> for Curry<'b, F, B>
where
    B: IVisitRef<'b, Bound<F, X>>,
{
    type Output = <B as IVisitRef<'b, Bound<F, X>>>::Output;
    fn visit(self, x: X) -> Self::Output {
        self.rest.visit(Bound { f: self.f, x })
    }
}

/// `f` with its first argument bound to `x`.
pub struct Bound<F, X> {
    f: F,
    x: X,
}
impl<F, X, Y> IVisitor<Y> for Bound<F, X>
where
    F: IVisitor<(X, Y)>,
{
    type Output = F::Output;
    fn visit(self, y: Y) -> F::Output {
        self.f.visit((self.x, y))
    }
}

/// `f` with its first argument bound to `x`, for two more arguments.
pub struct Prefix<F, X> {
    f: F,
    x: X,
}
impl<F, X, Y, Z> IVisitor<(Y, Z)> for Prefix<F, X>
where
    F: IVisitor<(X, Y, Z)>,
{
    type Output = F::Output;
    fn visit(self, (y, z): (Y, Z)) -> F::Output {
        self.f.visit((self.x, y, z))
    }
}

/// Visits `b` and `c` with `f` once the first alternative is known.
pub struct Curry2<'b, 'c, F, B: IAlternatives, C: IAlternatives> {
    f: F,
    b: &'b Variant<B>,
    c: &'c Variant<C>,
}
impl<'b, 'c, X, F, B, C, R> IVisitor<X> for Curry2<'b, 'c, F, B, C>
where
    B: IVisitRef<'b, Curry<'c, Prefix<F, X>, C>, Output = R>,
    C: IAlternatives,
{
    type Output = R;
    fn visit(self, x: X) -> R {
        visit2(Prefix { f: self.f, x }, self.b, self.c)
    }
}

/// Calls `f` with the active alternatives of `a` and `b`.
///
/// `f` must accept `(&Ai, &Bj)` for every pair of alternatives.
pub fn visit2<'a, 'b, F, A, B>(
    f: F,
    a: &'a Variant<A>,
    b: &'b Variant<B>,
) -> <A as IVisitRef<'a, Curry<'b, F, B>>>::Output
where
    A: IVisitRef<'a, Curry<'b, F, B>>,
    B: IAlternatives,
{
    a.visit(Curry { f, rest: b })
}

/// Calls `f` with the active alternatives of `a`, `b` and `c`.
pub fn visit3<'a, 'b, 'c, F, A, B, C>(
    f: F,
    a: &'a Variant<A>,
    b: &'b Variant<B>,
    c: &'c Variant<C>,
) -> <A as IVisitRef<'a, Curry2<'b, 'c, F, B, C>>>::Output
where
    A: IVisitRef<'a, Curry2<'b, 'c, F, B, C>>,
    B: IAlternatives,
    C: IAlternatives,
{
    a.visit(Curry2 { f, b, c })
}
