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

use proc_macro::TokenStream;
use proc_macro2::{Ident, Span};
use quote::quote;

mod alternative;
mod error_sets;
mod utils;

/// The path to the runtime: `alternate-core` if it is a direct dependency, `alternate` otherwise.
pub(crate) fn core_mod() -> proc_macro2::TokenStream {
    match proc_macro_crate::crate_name("alternate-core") {
        Ok(proc_macro_crate::FoundCrate::Itself) => return quote!(crate),
        Ok(proc_macro_crate::FoundCrate::Name(crate_name)) => {
            let crate_name = Ident::new(&crate_name, Span::call_site());
            return quote!(::#crate_name);
        }
        Err(_) => {}
    }
    match proc_macro_crate::crate_name("alternate") {
        Ok(proc_macro_crate::FoundCrate::Itself) => quote!(crate),
        Ok(proc_macro_crate::FoundCrate::Name(crate_name)) => {
            let crate_name = Ident::new(&crate_name, Span::call_site());
            quote!(::#crate_name)
        }
        Err(_) => quote!(::alternate),
    }
}

/// Implements `IAlternative` for a type.
///
/// Zero-sized types are classified as `Kind::Zst`, everything else as `Kind::Value`.
/// For non-generic types, `Default`, `Clone` and `Copy` are probed to fill in the capabilities;
/// generic types only advertise what holds for any type (move, swap, destroy).
#[proc_macro_derive(Alternative)]
pub fn alternative(tokens: TokenStream) -> TokenStream {
    match syn::parse(tokens) {
        Ok(input) => alternative::derive(input),
        Err(e) => e.to_compile_error(),
    }
    .into()
}

/// Names the error set over the listed types.
///
/// `error_set![A, B]` is `ErrorSet<(A, B,)>`. Listing the same type twice is a compile error.
#[proc_macro]
pub fn error_set(tokens: TokenStream) -> TokenStream {
    error_sets::error_set(tokens.into()).into()
}

/// Names the union of error sets.
///
/// Arguments may be `ErrorSet<(..)>` types, `error_set![..]` or `merge![..]` invocations, or
/// plain error types. The result lists every error type once, in order of first appearance:
/// `merge![error_set![A, B], error_set![B, C]]` is `ErrorSet<(A, B, C,)>`.
///
/// Type aliases are opaque to macros: an alias to an error set counts as a single error type.
#[proc_macro]
pub fn merge(tokens: TokenStream) -> TokenStream {
    error_sets::merge(tokens.into()).into()
}
