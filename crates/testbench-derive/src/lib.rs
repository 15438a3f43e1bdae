//! Derive macros for testbench.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse_macro_input};

/// Derive `testbench_core::Merge` for a config struct.
///
/// Every field is merged with its own `Merge` impl, so a section struct made of
/// `Option` fields merges field by field and nested sections recurse.
///
/// ```ignore
/// #[derive(Default, Deserialize, Merge)]
/// struct ServeConfig {
///     host: Option<String>,
///     port: Option<u16>,
/// }
/// ```
#[proc_macro_derive(Merge)]
pub fn derive_merge(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            input,
            "Merge can only be derived for structs",
        ));
    };

    let body = match &data.fields {
        Fields::Named(fields) => {
            let merges = fields.named.iter().map(|f| {
                let ident = &f.ident;
                quote! { #ident: ::testbench_core::Merge::merge(self.#ident, other.#ident) }
            });
            quote! { Self { #(#merges),* } }
        }
        Fields::Unnamed(fields) => {
            let merges = (0..fields.unnamed.len()).map(|i| {
                let index = syn::Index::from(i);
                quote! { ::testbench_core::Merge::merge(self.#index, other.#index) }
            });
            quote! { Self(#(#merges),*) }
        }
        Fields::Unit => quote! { Self },
    };

    Ok(quote! {
        impl #impl_generics ::testbench_core::Merge for #name #ty_generics #where_clause {
            fn merge(self, other: Self) -> Self {
                #body
            }
        }
    })
}
