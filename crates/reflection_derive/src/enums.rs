//! Expansion of `#[derive(Reflect)]` for fieldless enums.

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{DataEnum, DeriveInput, Fields};

pub(crate) fn expand(input: &DeriveInput, data: &DataEnum) -> syn::Result<TokenStream> {
    if let Some(variant) = data
        .variants
        .iter()
        .find(|variant| !matches!(variant.fields, Fields::Unit))
    {
        return Err(syn::Error::new_spanned(
            variant,
            "`Reflect` can only be derived for fieldless enums; reflect the payload as its own aggregate instead",
        ));
    }

    let name = &input.ident;
    let type_name = name.unraw().to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let variants: Vec<_> = data.variants.iter().map(|variant| &variant.ident).collect();
    let names: Vec<_> = variants
        .iter()
        .map(|ident| ident.unraw().to_string())
        .collect();
    let indices: Vec<_> = (0..variants.len()).collect();

    Ok(quote! {
        impl #impl_generics ::reflection::EnumReflect for #name #ty_generics #where_clause {
            const TYPE_NAME: &'static str = #type_name;
            const VARIANT_NAMES: &'static [&'static str] = &[#(#names),*];
            const VARIANTS: &'static [Self] = &[#(Self::#variants),*];

            fn variant_name(&self) -> &'static str {
                match *self {
                    #(Self::#variants => #names,)*
                }
            }

            fn variant_index(&self) -> usize {
                match *self {
                    #(Self::#variants => #indices,)*
                }
            }
        }

        impl #impl_generics ::reflection::Reflect for #name #ty_generics #where_clause {
            fn shape(&self) -> ::reflection::Shape<'_> {
                ::reflection::Shape::Enumerator(::reflection::EnumReflect::variant_name(self))
            }
        }
    })
}
