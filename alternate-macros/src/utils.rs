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

use quote::ToTokens;
use syn::{GenericParam, Generics, Path, Type};

pub(crate) fn is_generic_over_types(generics: &Generics) -> bool {
    generics
        .params
        .iter()
        .any(|g| matches!(g, GenericParam::Type(_) | GenericParam::Const(_)))
}

/// Whether the last segment of `path` is `name`.
pub(crate) fn ends_with(path: &Path, name: &str) -> bool {
    path.segments.last().map_or(false, |s| s.ident == name)
}

/// Strips parentheses and invisible groups.
pub(crate) fn unwrap_type(mut ty: &Type) -> &Type {
    loop {
        match ty {
            Type::Paren(inner) => ty = &inner.elem,
            Type::Group(inner) => ty = &inner.elem,
            _ => return ty,
        }
    }
}

/// A key under which syntactically identical types compare equal.
pub(crate) fn type_key(ty: &Type) -> String {
    unwrap_type(ty).to_token_stream().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_ignore_parentheses() {
        let a: Type = syn::parse_quote!((std::io::Error));
        let b: Type = syn::parse_quote!(std::io::Error);
        assert_eq!(type_key(&a), type_key(&b));
        let c: Type = syn::parse_quote!(std::fmt::Error);
        assert_ne!(type_key(&a), type_key(&c));
    }
}
