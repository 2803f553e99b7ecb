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

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::utils::is_generic_over_types;

pub(crate) fn derive(input: DeriveInput) -> TokenStream {
    let st = crate::core_mod();
    let DeriveInput {
        ident, generics, ..
    } = input;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    // The probes resolve through inherent consts, which only works once every type is known.
    let capabilities = if is_generic_over_types(&generics) {
        quote!(#st::kinds::Capabilities::of::<Self>())
    } else {
        quote!(#st::capabilities!(Self))
    };
    quote! {
        #[automatically_derived]
        impl #impl_generics #st::kinds::IAlternative for #ident #ty_generics #where_clause {
            const KIND: #st::kinds::Kind = #st::kinds::Kind::of_value::<Self>();
            const CAPABILITIES: #st::kinds::Capabilities = #capabilities;
            type FromArgument = #st::kinds::Convert;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_types_skip_probing() {
        let generic: DeriveInput = syn::parse_quote!(
            struct Wrapper<T> {
                value: T,
            }
        );
        let expanded = derive(generic).to_string();
        assert!(expanded.contains("Capabilities :: of :: < Self >"));
        let lifetime_only: DeriveInput = syn::parse_quote!(
            struct Borrowed<'a>(&'a str);
        );
        let expanded = derive(lifetime_only).to_string();
        assert!(expanded.contains("capabilities ! (Self)"));
        assert!(expanded.contains("kinds :: Convert ;"));
    }
}
