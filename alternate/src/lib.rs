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

//! Tagged unions over type lists.
//!
//! A [`Variant<(T0, T1, ..)>`](Variant) holds exactly one of its alternatives at any time,
//! including while a replacement is being constructed: new values are always built before the
//! old one is destroyed. Its layout is the one rustc would pick for the equivalent hand-written
//! enum, so `Option<&T>` is a pointer and `Option<Unit>` is a byte.
//!
//! [`Option`], [`Result`] and [`ErrorSet`] are thin facades over [`Variant`]:
//! ```
//! use alternate::{Option, Result, Unit};
//!
//! fn parse(input: &str) -> Result<u32, Unit> {
//!     input.parse::<u32>().map_err(|_| Unit).into()
//! }
//! let total = parse("20")
//!     .and_then(|x| parse("22").transform(|y| x + y))
//!     .or_none();
//! assert_eq!(total, Option::Some(42));
//! assert!(parse("nope").is_err());
//! ```
//!
//! Alternatives are classified by [`IAlternative`], which `#[derive(Alternative)]` implements
//! for your own types:
//! ```
//! use alternate::{Alternative, Variant};
//!
//! #[derive(Alternative, Debug, Clone, PartialEq)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let mut shape = Variant::<(Point, f64)>::of(2.5f64);
//! assert_eq!(shape.index(), 1);
//! shape.emplace::<0>(Point { x: 1, y: 2 });
//! let norm = shape.match_ref(|p| (p.x * p.x + p.y * p.y) as f64, |r| *r * *r);
//! assert_eq!(norm, 5.0);
//! ```
//!
//! Error sets name their alternatives with [`error_set!`], and [`merge!`] computes unions:
//! ```
//! use alternate::{error_set, merge, Alternative};
//!
//! #[derive(Alternative, Debug, PartialEq)]
//! struct Timeout;
//! #[derive(Alternative, Debug, PartialEq)]
//! struct Refused(u16);
//!
//! type Connect = error_set![Refused];
//! type Request = merge![error_set![Refused], error_set![Timeout, Refused]];
//!
//! let error: Request = Connect::new(Refused(503)).broaden();
//! assert_eq!(error.find::<Refused, _>(), Some(&Refused(503)));
//! ```

pub use alternate_core::*;
