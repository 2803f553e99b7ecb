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

use std::collections::HashSet;

use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::{
    parse::Parser, punctuated::Punctuated, spanned::Spanned, GenericArgument, PathArguments,
    Token, Type,
};

use crate::utils::{ends_with, type_key, unwrap_type};

fn parse_types(tokens: TokenStream) -> syn::Result<Vec<Type>> {
    Ok(Punctuated::<Type, Token![,]>::parse_terminated
        .parse2(tokens)?
        .into_iter()
        .collect())
}

fn set_of(types: &[Type]) -> TokenStream {
    let st = crate::core_mod();
    quote!(#st::ErrorSet<(#(#types,)*)>)
}

pub(crate) fn error_set(tokens: TokenStream) -> TokenStream {
    let types = match parse_types(tokens) {
        Ok(types) => types,
        Err(e) => return e.to_compile_error(),
    };
    let mut seen = HashSet::new();
    for ty in &types {
        let key = type_key(ty);
        if !seen.insert(key.clone()) {
            let message = format!("`{key}` appears more than once in this error set");
            return quote_spanned!(ty.span()=> compile_error!(#message));
        }
    }
    set_of(&types)
}

/// Appends the error types `ty` stands for to `into`.
fn flatten(ty: &Type, into: &mut Vec<Type>) -> syn::Result<()> {
    match unwrap_type(ty) {
        Type::Path(path) if path.qself.is_none() && ends_with(&path.path, "ErrorSet") => {
            let args = match path.path.segments.last().map(|last| &last.arguments) {
                Some(PathArguments::AngleBracketed(args)) => args,
                _ => {
                    return Err(syn::Error::new(
                        path.span(),
                        "expected `ErrorSet<(..)>` with its alternatives spelled out",
                    ))
                }
            };
            match args.args.first() {
                Some(GenericArgument::Type(list)) => match unwrap_tuple(list) {
                    Some(elems) => elems.iter().try_for_each(|ty| flatten(ty, into)),
                    None => Err(syn::Error::new(
                        list.span(),
                        "expected a tuple of error types",
                    )),
                },
                _ => Err(syn::Error::new(
                    args.span(),
                    "expected a tuple of error types",
                )),
            }
        }
        Type::Macro(mac)
            if ends_with(&mac.mac.path, "error_set") || ends_with(&mac.mac.path, "merge") =>
        {
            parse_types(mac.mac.tokens.clone())?
                .iter()
                .try_for_each(|ty| flatten(ty, into))
        }
        other => {
            into.push(other.clone());
            Ok(())
        }
    }
}

fn unwrap_tuple(ty: &Type) -> Option<Vec<Type>> {
    match unwrap_type(ty) {
        Type::Tuple(tuple) => Some(tuple.elems.iter().cloned().collect()),
        _ => None,
    }
}

pub(crate) fn merge(tokens: TokenStream) -> TokenStream {
    let mut flat = Vec::new();
    let flattened = parse_types(tokens)
        .and_then(|types| types.iter().try_for_each(|ty| flatten(ty, &mut flat)));
    if let Err(e) = flattened {
        return e.to_compile_error();
    }
    let mut seen = HashSet::new();
    flat.retain(|ty| seen.insert(type_key(ty)));
    set_of(&flat)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listed(tokens: TokenStream) -> String {
        let expanded = merge(tokens).to_string();
        let start = expanded.find("ErrorSet").unwrap_or(0);
        expanded[start..].to_owned()
    }

    #[test]
    fn merges_keep_first_appearance() {
        assert_eq!(
            listed(quote!(error_set![A, B], error_set![B, C])),
            "ErrorSet < (A , B , C ,) >"
        );
        assert_eq!(
            listed(quote!(ErrorSet<(C, A)>, merge![B, error_set![A, D]], C)),
            "ErrorSet < (C , A , B , D ,) >"
        );
        assert_eq!(listed(quote!()), "ErrorSet < () >");
    }

    #[test]
    fn duplicates_are_rejected() {
        let expanded = error_set(quote!(A, B, (A))).to_string();
        assert!(expanded.contains("compile_error"));
        assert!(expanded.contains("appears more than once"));
        let expanded = error_set(quote!(A, B)).to_string();
        assert!(!expanded.contains("compile_error"));
    }
}
